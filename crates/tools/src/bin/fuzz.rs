use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tactics_core::{Direction, Scenario, Session, TickInput};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
    /// Scenario TOML to fuzz; the built-in demo when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_input(rng: &mut ChaCha8Rng) -> TickInput {
    let mut input = TickInput::default();
    // Bias towards cursor movement and confirms; history keys are rarer.
    match rng.next_u64() % 10 {
        0..=4 => input.moves.push(choose(rng, &Direction::ALL)),
        5..=7 => input.confirm = true,
        8 => input.undo = true,
        _ => input.redo = true,
    }
    input
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
            Scenario::from_toml_str(&text).context("Failed to parse scenario")?
        }
        None => Scenario::demo(),
    };

    println!("Starting Fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut session = Session::from_scenario(&scenario).context("Invalid scenario")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for tick in 0..args.ticks {
        let input = random_input(&mut rng);
        session.tick(&input).with_context(|| format!("Tick {tick} failed"))?;

        let board = session.board();
        let cursor = board.cursor().position();
        if !board.grid().in_bounds(cursor) {
            bail!("Invariant failed: cursor {cursor} left the grid at tick {tick}");
        }
        board
            .check_occupancy()
            .with_context(|| format!("Invariant failed: occupancy at tick {tick}"))?;
    }

    println!("Fuzzing complete without invariant violations.");
    println!("Actions Committed: {}", session.actions_committed());
    println!("History Length: {}", session.history().len());
    println!("Snapshot Hash: 0x{:016x}", session.snapshot_hash());
    Ok(())
}
