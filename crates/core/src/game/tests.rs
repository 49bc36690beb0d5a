use std::iter;

use glam::Vec2;

use super::test_support::*;
use super::*;
use crate::consts::*;
use crate::content::{NOTES, WHISPER_LINES};
use crate::entity::FakeEnemy;
use crate::sanity::Sanity;

fn has_event(game: &Game, wanted: impl Fn(&GameEvent) -> bool) -> bool {
    game.events().iter().any(wanted)
}

#[test]
fn clap_cooldown_allows_one_clap_per_cooldown_window() {
    let mut game = open_game();
    let mut clap_ticks = Vec::new();
    for tick in 0..=600 {
        game.tick(&clap());
        if has_event(&game, |event| matches!(event, GameEvent::Clap { .. })) {
            clap_ticks.push(tick);
        }
    }
    assert_eq!(clap_ticks, vec![0, 300, 600]);
}

#[test]
fn clap_cooldown_reads_in_whole_seconds() {
    let mut game = open_game();
    game.tick(&clap());
    assert_eq!(game.state().clap_cooldown, 299);
    assert_eq!(game.state().cooldown_seconds(), 4);
    run_ticks(&mut game, idle(), 240);
    assert_eq!(game.state().cooldown_seconds(), 0);
}

#[test]
fn clap_costs_sanity_and_alerts_a_listener_on_the_same_tick() {
    let mut state = open_state();
    let listener = add_enemy(&mut state, Vec2::new(114.0, 98.0));
    let mut game = game_from(state, quiet_rng());

    game.tick(&clap());

    assert_close(game.state().sanity.value(), SANITY_MAX - CLAP_SANITY_COST);
    assert_eq!(game.state().pulses.len(), 1);
    assert_eq!(game.state().enemies[listener].target(), Some(Vec2::new(105.0, 105.0)));
    assert_eq!(game.state().enemies[listener].alert(), ALERT_MAX);
    assert!(has_event(&game, |event| matches!(
        event,
        GameEvent::EnemyAlerted { enemy, .. } if *enemy == listener
    )));
}

#[test]
fn later_sound_overrides_enemy_target() {
    let mut state = open_state();
    let listener = add_enemy(&mut state, Vec2::new(114.0, 98.0));
    state.enemies[listener].hear_sound(Vec2::new(1500.0, 1500.0));
    let mut game = game_from(state, quiet_rng());
    game.tick(&clap());
    assert_eq!(game.state().enemies[listener].target(), Some(Vec2::new(105.0, 105.0)));
}

#[test]
fn walking_emits_footstep_pulse_every_twenty_ticks() {
    let mut game = open_game();
    run_ticks(&mut game, right(), 19);
    assert!(game.state().pulses.is_empty());
    game.tick(&right());
    assert!(has_event(&game, |event| matches!(event, GameEvent::Footstep { .. })));
    assert_eq!(game.state().pulses.len(), 1);
    assert_close(game.state().sanity.value(), SANITY_MAX - FOOTSTEP_SANITY_COST);
    assert_eq!(game.state().sanity.silence_ticks(), 1);
}

#[test]
fn silence_drains_sanity_every_six_hundred_ticks() {
    let mut game = open_game();
    run_ticks(&mut game, idle(), 599);
    assert_close(game.state().sanity.value(), 100.0);
    game.tick(&idle());
    assert!(has_event(&game, |event| matches!(event, GameEvent::SilenceDecay { .. })));
    assert_close(game.state().sanity.value(), 99.8);
    run_ticks(&mut game, idle(), 600);
    assert_close(game.state().sanity.value(), 99.6);
}

#[test]
fn hallucinations_need_sanity_below_thirty() {
    let mut state = open_state();
    state.sanity = Sanity::new(30.0);
    let mut game = game_from(state, eager_rng());
    game.tick(&idle());
    assert!(game.state().fake_enemies.is_empty());

    let mut state = open_state();
    state.sanity = Sanity::new(29.0);
    let mut game = game_from(state, eager_rng());
    game.tick(&idle());
    assert_eq!(game.state().fake_enemies.len(), 1);
    let fake = game.state().fake_enemies[0];
    assert_eq!(fake.pos, Vec2::new(-200.0, -200.0));
    assert_eq!(fake.life(), HALLUCINATION_MIN_LIFE - 1);
    assert!(has_event(&game, |event| matches!(event, GameEvent::HallucinationSpawned { .. })));
}

#[test]
fn hallucinations_fade_out() {
    let mut state = open_state();
    state.sanity = Sanity::new(29.0);
    let mut game = game_from(state, quiet_rng());
    game.state.fake_enemies.push(FakeEnemy::new(Vec2::new(300.0, 300.0), 3));
    run_ticks(&mut game, idle(), 2);
    assert_eq!(game.state().fake_enemies.len(), 1);
    game.tick(&idle());
    assert!(game.state().fake_enemies.is_empty());
}

#[test]
fn whispers_start_below_sixty_and_persist_between_picks() {
    let mut state = open_state();
    state.sanity = Sanity::new(60.0);
    let mut game = game_from(state, eager_rng());
    game.tick(&idle());
    assert_eq!(game.state().hud.whisper, None);

    let mut state = open_state();
    state.sanity = Sanity::new(59.0);
    let mut game = game_from(state, eager_rng());
    game.tick(&idle());
    assert_eq!(game.state().hud.whisper, Some(WHISPER_LINES[0]));
    assert_eq!(game.state().hud.whisper_timer, WHISPER_MIN_TICKS);

    let mut changes = 0;
    for _ in 0..WHISPER_MIN_TICKS {
        game.tick(&idle());
        if has_event(&game, |event| matches!(event, GameEvent::WhisperChanged { .. })) {
            changes += 1;
        }
        assert_eq!(game.state().hud.whisper, Some(WHISPER_LINES[0]));
    }
    assert_eq!(changes, 1);
}

#[test]
fn distortion_only_below_twenty_five() {
    let mut state = open_state();
    state.sanity = Sanity::new(25.0);
    let mut game = game_from(state, eager_rng());
    game.tick(&idle());
    assert_eq!(game.state().hud.distortion, None);

    let mut state = open_state();
    state.sanity = Sanity::new(20.0);
    let mut game = game_from(state, eager_rng());
    game.tick(&idle());
    assert_eq!(
        game.state().hud.distortion,
        Some(Distortion { shift_x: -1, shift_y: -1, tint: [0, 0, 0], alpha: DISTORTION_ALPHA })
    );
}

#[test]
fn touching_an_enemy_ends_the_run() {
    let mut state = open_state();
    let hunter = add_enemy(&mut state, Vec2::new(102.0, 102.0));
    let mut game = game_from(state, quiet_rng());
    game.tick(&idle());
    assert_eq!(game.outcome(), Some(RunOutcome::GameOver(LossCause::Caught)));
    assert!(has_event(&game, |event| *event == GameEvent::PlayerCaught { enemy: hunter }));
}

#[test]
fn reaching_the_exit_completes_the_level() {
    let mut state = open_state();
    state.player.rect.x = EXIT_X;
    state.player.rect.y = EXIT_Y;
    let mut game = game_from(state, quiet_rng());
    game.tick(&idle());
    assert_eq!(game.outcome(), Some(RunOutcome::LevelComplete));
    assert!(has_event(&game, |event| *event == GameEvent::ExitReached));
}

#[test]
fn loss_wins_over_exit_on_the_same_tick() {
    let mut state = open_state();
    state.player.rect.x = EXIT_X;
    state.player.rect.y = EXIT_Y;
    add_enemy(&mut state, Vec2::new(EXIT_X, EXIT_Y));
    let mut game = game_from(state, quiet_rng());
    game.tick(&idle());
    assert_eq!(game.outcome(), Some(RunOutcome::GameOver(LossCause::Caught)));
}

#[test]
fn last_footstep_can_deplete_sanity() {
    let mut state = open_state();
    state.sanity = Sanity::new(FOOTSTEP_SANITY_COST);
    let mut game = game_from(state, quiet_rng());
    run_ticks(&mut game, right(), 19);
    assert!(!game.is_finished());
    game.tick(&right());
    assert_eq!(game.outcome(), Some(RunOutcome::GameOver(LossCause::SanityDepleted)));
}

#[test]
fn finished_run_ignores_further_ticks() {
    let mut state = open_state();
    add_enemy(&mut state, Vec2::new(102.0, 102.0));
    let mut game = game_from(state, quiet_rng());
    game.tick(&idle());
    assert!(game.is_finished());

    let tick = game.current_tick();
    let hash = game.snapshot_hash();
    run_ticks(&mut game, TickInput { right: true, clap: true, ..Default::default() }, 30);
    assert_eq!(game.current_tick(), tick);
    assert_eq!(game.snapshot_hash(), hash);
    assert!(game.events().is_empty());
}

#[test]
fn note_text_shows_once_for_three_hundred_ticks() {
    let mut state = open_state();
    let (x, y, text) = NOTES[0];
    state.player.rect.x = x;
    state.player.rect.y = y;
    let mut game = game_from(state, quiet_rng());

    game.tick(&idle());
    assert!(has_event(&game, |event| *event == GameEvent::NoteRead { note: 0 }));
    assert_eq!(game.state().hud.note.map(|note| note.text), Some(text));
    assert_eq!(game.state().hud.note.map(|note| note.ticks_left), Some(NOTE_DISPLAY_TICKS));
    assert!(game.state().notes[0].is_read());

    game.tick(&idle());
    assert!(!has_event(&game, |event| matches!(event, GameEvent::NoteRead { .. })));
    run_ticks(&mut game, idle(), NOTE_DISPLAY_TICKS - 2);
    assert!(game.state().hud.note.is_some());
    game.tick(&idle());
    assert_eq!(game.state().hud.note, None);
}

#[test]
fn camera_follows_the_player() {
    let mut state = open_state();
    state.player.rect.x = 1000.0;
    state.player.rect.y = 1000.0;
    let mut game = game_from(state, quiet_rng());
    game.tick(&idle());
    assert_eq!(game.state().camera.offset(), Vec2::new(605.0, 705.0));
}

#[test]
fn collections_stay_bounded_under_sustained_play() {
    let mut game = Game::new(&GameConfig::default(), 42);
    let inputs = [
        TickInput { right: true, clap: true, ..Default::default() },
        TickInput { down: true, clap: true, ..Default::default() },
    ];
    let blip_lifetime = (BLIP_LIFE / BLIP_FADE) as usize + 1;
    for tick in 0..5_000 {
        game.tick(&inputs[(tick / 90) % inputs.len()]);
        let state = game.state();
        assert!(state.pulses.len() <= 2);
        assert!(state.blips.len() <= 2 * RAY_COUNT * blip_lifetime);
        assert!(state.fake_enemies.len() <= HALLUCINATION_MAX_LIFE as usize);
        assert!(game.events().len() <= ENEMY_COUNT * 2 + 8);
        if game.is_finished() {
            break;
        }
    }
}

#[test]
fn same_seed_builds_the_same_run() {
    let config = GameConfig::default();
    let left = Game::new(&config, 9);
    let right = Game::new(&config, 9);
    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_ne!(left.snapshot_hash(), Game::new(&config, 10).snapshot_hash());
    assert_eq!(left.state().enemies.len(), ENEMY_COUNT);
    assert!(left.state().enemies.values().all(|enemy| enemy.speed() == config.settings.enemy_speed));
}

#[test]
fn generated_level_keeps_landmarks_clear() {
    let game = Game::new(&GameConfig::default(), 77);
    let state = game.state();
    let obstacles = &state.level.walls()[4..];
    let landmarks: Vec<_> = iter::once(state.player.rect)
        .chain(iter::once(state.exit.rect))
        .chain(state.notes.iter().map(|note| note.rect))
        .collect();
    for obstacle in obstacles {
        assert!(landmarks.iter().all(|landmark| !landmark.intersects(obstacle)));
    }
}
