use serde::{Deserialize, Serialize};

use crate::types::Command;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every command a session applied, in order, stamped with the hash of the
/// board it started from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub scenario_hash: u64,
    /// Ticks elapsed when the journal was last written.
    pub ticks: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub tick: u64,
    pub command: Command,
}

impl InputJournal {
    pub fn new(scenario_hash: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, scenario_hash, ticks: 0, inputs: Vec::new() }
    }

    pub fn append(&mut self, tick: u64, command: Command) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, tick, command });
    }
}
