use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use void_core::Difficulty;
use void_tools::{default_script, load_script, run_session, write_report};

/// Run a headless session and print its summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Tick budget; the run may end earlier.
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,
    #[arg(short, long, default_value = "normal")]
    difficulty: Difficulty,
    /// JSON list of `{"ticks": n, "input": {...}}` steps, replayed in a loop.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Write the summary as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let script = match &args.script {
        Some(path) => load_script(path)?,
        None => default_script(),
    };
    log::info!("Simulating seed {} on {} for up to {} ticks", args.seed, args.difficulty, args.ticks);

    let summary = run_session(args.seed, args.difficulty, &script, args.ticks);

    println!("Session complete.");
    println!("Final Tick: {}", summary.ticks);
    println!("Outcome: {:?}", summary.outcome);
    println!("Sanity: {:.1}", summary.sanity);
    println!("Snapshot Hash: {}", summary.snapshot_hash);
    println!("Events: {:?}", summary.events);

    if let Some(path) = &args.report {
        write_report(path, &summary)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
