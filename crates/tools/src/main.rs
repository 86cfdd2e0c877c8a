use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tactics_core::{InputJournal, ReplayResult, Scenario, replay};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Scenario TOML the journal was recorded against; the built-in demo when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let scenario = match &args.scenario {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
            Scenario::from_toml_str(&text).context("Failed to parse scenario")?
        }
        None => Scenario::demo(),
    };

    let result: ReplayResult = replay(&scenario, &journal).context("Replay failed")?;

    println!("Replay complete.");
    println!("Inputs: {}", journal.inputs.len());
    println!("Final Tick: {}", result.final_tick);
    println!("Actions Committed: {}", result.actions_committed);
    println!("History Length: {}", result.history_len);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
