//! Headless session running shared by the command-line tools.
//! This module exists so scripted runs and invariant checks are testable without a binary.
//! It does not own argument parsing or process exit behaviour.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use void_core::{Difficulty, Game, GameConfig, GameEvent, RunOutcome, TickInput};

/// Hold `input` for `ticks` ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub ticks: u32,
    #[serde(default)]
    pub input: TickInput,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventCounts {
    pub footsteps: u32,
    pub claps: u32,
    pub enemy_alerts: u32,
    pub silence_decays: u32,
    pub notes_read: u32,
    pub whispers: u32,
    pub hallucinations: u32,
}

impl EventCounts {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Footstep { .. } => self.footsteps += 1,
            GameEvent::Clap { .. } => self.claps += 1,
            GameEvent::EnemyAlerted { .. } => self.enemy_alerts += 1,
            GameEvent::SilenceDecay { .. } => self.silence_decays += 1,
            GameEvent::NoteRead { .. } => self.notes_read += 1,
            GameEvent::WhisperChanged { .. } => self.whispers += 1,
            GameEvent::HallucinationSpawned { .. } => self.hallucinations += 1,
            GameEvent::PlayerCaught { .. } | GameEvent::SanityDepleted | GameEvent::ExitReached => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub ticks: u64,
    pub outcome: Option<RunOutcome>,
    pub sanity: f32,
    pub snapshot_hash: String,
    pub events: EventCounts,
}

/// Walks in a slow spiral and claps now and then; used when no script is given.
pub fn default_script() -> Vec<ScriptStep> {
    let headings = [
        TickInput { right: true, down: true, ..Default::default() },
        TickInput { right: true, ..Default::default() },
        TickInput { down: true, ..Default::default() },
        TickInput { left: true, down: true, ..Default::default() },
    ];
    headings
        .into_iter()
        .flat_map(|heading| {
            [
                ScriptStep { ticks: 1, input: TickInput { clap: true, ..heading } },
                ScriptStep { ticks: 119, input: heading },
            ]
        })
        .collect()
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    let script: Vec<ScriptStep> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse script JSON: {}", path.display()))?;
    if script.iter().all(|step| step.ticks == 0) {
        bail!("Script {} has no ticks to run", path.display());
    }
    Ok(script)
}

/// Replays `script` in a loop until the run ends or `max_ticks` ticks have passed.
pub fn run_session(seed: u64, difficulty: Difficulty, script: &[ScriptStep], max_ticks: u64) -> SessionSummary {
    let mut game = Game::new(&GameConfig::for_difficulty(difficulty), seed);
    let mut events = EventCounts::default();
    let inputs = script.iter().flat_map(|step| (0..step.ticks).map(move |_| step.input)).cycle();

    for input in inputs.take(max_ticks as usize) {
        game.tick(&input);
        for event in game.events() {
            events.record(event);
        }
        if game.is_finished() {
            break;
        }
    }

    SessionSummary {
        seed,
        difficulty,
        ticks: game.current_tick(),
        outcome: game.outcome(),
        sanity: game.state().sanity.value(),
        snapshot_hash: format!("0x{:016x}", game.snapshot_hash()),
        events,
    }
}

pub fn write_report(path: &Path, summary: &SessionSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    fs::write(path, json).with_context(|| format!("Failed to write report: {}", path.display()))
}

/// Checks the invariants that must hold after every tick.
pub fn check_invariants(game: &Game, previous_sanity: f32) -> Result<()> {
    let state = game.state();
    if let Some(wall) = state.level.walls().iter().find(|wall| wall.intersects(&state.player.rect)) {
        bail!("player {:?} overlaps wall {wall:?}", state.player.rect);
    }
    let sanity = state.sanity.value();
    if !(0.0..=previous_sanity).contains(&sanity) {
        bail!("sanity moved from {previous_sanity} to {sanity}");
    }
    let bounds = state.level.bounds();
    for enemy in state.enemies.values() {
        if enemy.rect.x < bounds.x
            || enemy.rect.y < bounds.y
            || enemy.rect.right() > bounds.right()
            || enemy.rect.bottom() > bounds.bottom()
        {
            bail!("enemy {:?} left the level", enemy.rect);
        }
    }
    if state.pulses.iter().any(|pulse| !pulse.is_active() || pulse.radius() > pulse.max_radius() + 6.0) {
        bail!("inactive or oversized pulse kept alive");
    }
    if state.clap_cooldown >= game.config().settings.clap_cooldown_ticks {
        bail!("clap cooldown {} not counting down", state.clap_cooldown);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        fs::write(&path, r#"[{"ticks": 30, "input": {"right": true}}, {"ticks": 1, "input": {"clap": true}}]"#)
            .unwrap();

        let script = load_script(&path).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script[0].input, TickInput { right: true, ..Default::default() });
        assert!(script[1].input.clap);
    }

    #[test]
    fn empty_script_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "[]").unwrap();
        let err = load_script(&path).unwrap_err();
        assert!(err.to_string().contains("no ticks"));
    }

    #[test]
    fn missing_script_names_the_path() {
        let err = load_script(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("here.json"));
    }

    #[test]
    fn session_counts_events_and_is_reproducible() {
        let script = [ScriptStep { ticks: 1, input: TickInput { right: true, clap: true, ..Default::default() } }];
        let first = run_session(5, Difficulty::Normal, &script, 60);
        let second = run_session(5, Difficulty::Normal, &script, 60);
        assert_eq!(first, second);
        assert!(first.ticks <= 60);
        assert_eq!(first.events.claps, 1);
        assert!(first.events.footsteps <= 3);
    }

    #[test]
    fn report_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let summary = run_session(11, Difficulty::Easy, &default_script(), 300);
        write_report(&path, &summary).unwrap();

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["seed"], 11);
        assert_eq!(written["difficulty"], "easy");
        assert_eq!(written["snapshot_hash"], summary.snapshot_hash);
    }

    #[test]
    fn invariants_hold_for_a_scripted_run() {
        let mut game = Game::new(&GameConfig::default(), 3);
        let mut previous = game.state().sanity.value();
        let script = default_script();
        let inputs = script.iter().flat_map(|step| (0..step.ticks).map(move |_| step.input));
        for input in inputs {
            game.tick(&input);
            check_invariants(&game, previous).unwrap();
            previous = game.state().sanity.value();
        }
    }
}
