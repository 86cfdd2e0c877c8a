use thiserror::Error;
use tracing::info;

use crate::error::{BoardError, SetupError};
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::scenario::Scenario;
use crate::session::Session;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("scenario setup failed: {0}")]
    Setup(#[from] SetupError),

    #[error("journal format {found} is not supported (expected {expected})")]
    UnsupportedFormat { expected: u16, found: u16 },

    #[error("journal was recorded against board {journal:#018x}, scenario builds {scenario:#018x}")]
    ScenarioMismatch { journal: u64, scenario: u64 },

    #[error("input #{seq} at tick {tick} went backwards")]
    OutOfOrder { seq: u64, tick: u64 },

    #[error("input #{seq} failed: {source}")]
    Board {
        seq: u64,
        #[source]
        source: BoardError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub final_tick: u64,
    pub actions_committed: u64,
    pub history_len: usize,
}

/// Rebuilds the session from `scenario` and re-applies every journaled command
/// at its recorded tick.
pub fn replay(scenario: &Scenario, journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat {
            expected: JOURNAL_FORMAT_VERSION,
            found: journal.format_version,
        });
    }
    let mut session = Session::from_scenario(scenario)?;
    let scenario_hash = session.snapshot_hash();
    if scenario_hash != journal.scenario_hash {
        return Err(ReplayError::ScenarioMismatch {
            journal: journal.scenario_hash,
            scenario: scenario_hash,
        });
    }

    for record in &journal.inputs {
        if record.tick < session.current_tick() {
            return Err(ReplayError::OutOfOrder { seq: record.seq, tick: record.tick });
        }
        session.skip_to_tick(record.tick);
        session
            .apply(record.command)
            .map_err(|source| ReplayError::Board { seq: record.seq, source })?;
    }
    session.skip_to_tick(journal.ticks);

    let result = ReplayResult {
        final_snapshot_hash: session.snapshot_hash(),
        final_tick: session.current_tick(),
        actions_committed: session.actions_committed(),
        history_len: session.history().len(),
    };
    info!(inputs = journal.inputs.len(), ?result, "replay finished");
    Ok(result)
}
