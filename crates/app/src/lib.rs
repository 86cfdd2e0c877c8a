pub mod app_loop;
pub mod camera;
pub mod journal_file;
pub mod launch_args;

use tactics_core::{ConfirmOutcome, TurnState};

pub const APP_NAME: &str = "Tactics";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn turn_state_label(state: TurnState) -> &'static str {
    match state {
        TurnState::SelectUnit => "Select unit",
        TurnState::UnitMovement => "Move unit",
        TurnState::UnitActions => "Unit actions",
    }
}

/// One-line description of a confirm result for the status line.
pub fn outcome_message(outcome: &ConfirmOutcome) -> String {
    match outcome {
        ConfirmOutcome::Selected { unit, legal_count } => {
            format!("Selected unit {unit} ({legal_count} reachable cells)")
        }
        ConfirmOutcome::NoUnit { pos } => format!("No unit at {pos}"),
        ConfirmOutcome::Deselected { unit } => format!("Deselected unit {unit}"),
        ConfirmOutcome::Moved { unit, from, to } => format!("Unit {unit} moved {from} -> {to}"),
        ConfirmOutcome::IllegalMove { unit, target } => {
            format!("Unit {unit} cannot reach {target}")
        }
        ConfirmOutcome::Occupied { target, occupant, .. } => {
            format!("{target} is occupied by unit {occupant}")
        }
        ConfirmOutcome::ActionsClosed { unit } => format!("Unit {unit} is done"),
        ConfirmOutcome::SelectionLost { .. } => "Selection lost; pick a unit".to_string(),
    }
}
