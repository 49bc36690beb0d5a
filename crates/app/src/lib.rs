pub mod app_loop;
pub mod launch_args;
pub mod menu;
pub mod pacing;

use void_core::{LossCause, RunOutcome};

pub const APP_NAME: &str = "Lost in the Void";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Stable reason code for logs and tooling.
pub fn outcome_code(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::LevelComplete => "LEVEL_COMPLETE",
        RunOutcome::GameOver(LossCause::Caught) => "LOST_CAUGHT",
        RunOutcome::GameOver(LossCause::SanityDepleted) => "LOST_SANITY_ZERO",
    }
}

/// Centered end-of-run banner text.
pub fn outcome_message(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::LevelComplete => "You survived.",
        RunOutcome::GameOver(_) => "YOU LOST YOURSELF",
    }
}
