use anyhow::{Context, Result};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use void_core::{Difficulty, Game, GameConfig, TickInput};
use void_tools::check_invariants;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    ticks: u32,
    /// Number of consecutive seeds to fuzz, starting at `seed`.
    #[arg(short, long, default_value_t = 10)]
    runs: u64,
}

fn random_input(rng: &mut ChaCha8Rng) -> TickInput {
    let bits = rng.next_u64();
    TickInput {
        up: bits & 1 != 0,
        down: bits & 2 != 0,
        left: bits & 4 != 0,
        right: bits & 8 != 0,
        clap: bits & 0xf0 == 0,
    }
}

fn fuzz_one(seed: u64, max_ticks: u32) -> Result<()> {
    let difficulty = Difficulty::ALL[(seed % 3) as usize];
    let mut game = Game::new(&GameConfig::for_difficulty(difficulty), seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.rotate_left(32));
    let mut input = TickInput::default();
    let mut previous_sanity = game.state().sanity.value();

    for tick in 0..max_ticks {
        if tick % 15 == 0 {
            input = random_input(&mut rng);
        }
        game.tick(&input);
        check_invariants(&game, previous_sanity)
            .with_context(|| format!("Invariant failed on seed {seed} at tick {tick}"))?;
        previous_sanity = game.state().sanity.value();

        if let Some(outcome) = game.outcome() {
            println!("Seed {seed} ({difficulty}): {outcome:?} after {} ticks", game.current_tick());
            return Ok(());
        }
    }
    println!("Seed {seed} ({difficulty}): still running after {max_ticks} ticks");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on {} seeds from {} for max {} ticks...", args.runs, args.seed, args.ticks);
    for offset in 0..args.runs {
        fuzz_one(args.seed.wrapping_add(offset), args.ticks)?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
