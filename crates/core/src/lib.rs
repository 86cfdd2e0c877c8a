pub mod board;
pub mod content;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod history;
pub mod journal;
pub mod reachability;
pub mod replay;
pub mod scenario;
pub mod session;
pub mod turn;
pub mod types;
pub mod units;

#[cfg(test)]
mod test_support;

pub use board::{Board, Selection, Snapshot};
pub use cursor::Cursor;
pub use error::{BoardError, SetupError};
pub use grid::{Cell, Grid};
pub use history::HistoryLog;
pub use journal::{InputJournal, InputRecord};
pub use reachability::reachable_cells;
pub use replay::*;
pub use scenario::{Scenario, UnitPlacement};
pub use session::{FrameView, Session, TickInput, UnitView};
pub use types::*;
pub use units::{Unit, UnitRegistry};
