//! Command-line launch options: run seed and an optional preset difficulty.
//! This module exists to keep argument parsing testable without a window.
//! It does not own the difficulty menu or game construction.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use void_core::Difficulty;

/// Where the run seed came from; logged at startup so a generated seed can be replayed with `--seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchArgs {
    pub seed: SeedChoice,
    /// Skips the menu when present.
    pub difficulty: Option<Difficulty>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Seed for a launch without `--seed`: wall clock, pid and a per-process
/// counter folded through a splitmix finaliser, so two launches in the same
/// nanosecond still get different levels.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Parses `--seed` and `--difficulty`, each as `--flag value` or `--flag=value`.
///
/// Unknown arguments are ignored. A flag given twice or without a value is an error.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchArgs, String> {
    let mut seed = None;
    let mut difficulty = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, value, consumed) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value), 1),
            None => (argument, args.get(index + 1).map(String::as_str), 2),
        };

        match flag {
            "--seed" => {
                let raw = value.ok_or("missing value for --seed")?;
                if seed.replace(parse_seed_value(raw)?).is_some() {
                    return Err("seed provided more than once".to_string());
                }
                index += consumed;
            }
            "--difficulty" => {
                let raw = value.ok_or("missing value for --difficulty")?;
                let parsed = raw.parse::<Difficulty>().map_err(|err| err.to_string())?;
                if difficulty.replace(parsed).is_some() {
                    return Err("difficulty provided more than once".to_string());
                }
                index += consumed;
            }
            _ => index += 1,
        }
    }

    let seed = match seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    };
    Ok(LaunchArgs { seed, difficulty })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
