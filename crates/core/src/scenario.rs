//! Match setup data: grid size, terrain, cursor start and unit placements.
//!
//! Scenarios are plain TOML documents. Reading the file is the caller's
//! business; this module only parses text and builds the starting board.
//!
//! ```toml
//! width = 4
//! height = 3
//! terrain = ["....", ".#..", "...."]
//! cursor = { x = 0, y = 0 }
//!
//! [[units]]
//! position = { x = 0, y = 1 }
//! job = "Noble"
//! movement = 5 # optional, defaults to the job's base movement
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::content::get_job_stats;
use crate::error::SetupError;
use crate::grid::Grid;
use crate::types::{Job, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPlacement {
    pub position: Pos,
    #[serde(default)]
    pub job: Job,
    /// Overrides the job's base movement when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<i32>,
}

impl UnitPlacement {
    pub fn movement(&self) -> i32 {
        self.movement.unwrap_or_else(|| get_job_stats(self.job).movement)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    /// One string per row, `.` open and `#` blocking. Empty means all open.
    #[serde(default)]
    pub terrain: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Pos>,
    #[serde(default)]
    pub units: Vec<UnitPlacement>,
}

impl Scenario {
    pub fn from_toml_str(text: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(text)?)
    }

    /// A small walled field with one unit of each job, used when no scenario
    /// file is supplied.
    pub fn demo() -> Self {
        let terrain = [
            "..........",
            "..##......",
            "..##...#..",
            ".......#..",
            "....#.....",
            "....#...##",
            "..........",
            "..........",
        ];
        Self {
            width: 10,
            height: 8,
            terrain: terrain.iter().map(|row| row.to_string()).collect(),
            cursor: Some(Pos { y: 3, x: 1 }),
            units: vec![
                UnitPlacement { position: Pos { y: 3, x: 1 }, job: Job::Noble, movement: None },
                UnitPlacement { position: Pos { y: 6, x: 6 }, job: Job::Smallfolk, movement: None },
                UnitPlacement {
                    position: Pos { y: 1, x: 8 },
                    job: Job::Smallfolk,
                    movement: Some(2),
                },
            ],
        }
    }

    /// Builds the starting board. Unit ids follow declaration order.
    pub fn build_board(&self) -> Result<Board, SetupError> {
        let grid = self.build_grid()?;
        let mut board = Board::new(grid);
        if let Some(cursor) = self.cursor {
            board = board.with_cursor(cursor)?;
        }
        for placement in &self.units {
            let id = board.spawn_unit(placement.job, placement.position, placement.movement())?;
            debug!(%id, pos = %placement.position, job = ?placement.job, "unit placed");
        }
        Ok(board)
    }

    fn build_grid(&self) -> Result<Grid, SetupError> {
        if self.terrain.is_empty() {
            return Grid::new(self.width, self.height);
        }
        if self.terrain.len() != self.height {
            return Err(SetupError::TerrainHeight {
                expected: self.height,
                found: self.terrain.len(),
            });
        }
        if let Some((row, found)) = self
            .terrain
            .iter()
            .map(|line| line.chars().count())
            .enumerate()
            .find(|&(_, found)| found != self.width)
        {
            return Err(SetupError::TerrainWidth { row, expected: self.width, found });
        }
        Grid::from_rows(self.terrain.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TurnState, UnitId};

    const SMALL: &str = r#"
width = 4
height = 3
terrain = ["....", ".#..", "...."]
cursor = { x = 2, y = 0 }

[[units]]
position = { x = 0, y = 1 }
job = "Noble"

[[units]]
position = { x = 3, y = 2 }
movement = 1
"#;

    #[test]
    fn parses_and_builds_a_board() {
        let scenario = Scenario::from_toml_str(SMALL).expect("parse");
        let board = scenario.build_board().expect("build");
        assert_eq!((board.grid().width(), board.grid().height()), (4, 3));
        assert!(board.grid().is_blocking(Pos { y: 1, x: 1 }));
        assert_eq!(board.cursor().position(), Pos { y: 0, x: 2 });
        assert_eq!(board.turn_state(), TurnState::SelectUnit);

        let noble = board.unit(UnitId(0)).expect("unit 0");
        assert_eq!((noble.job(), noble.movement()), (Job::Noble, 4));
        let second = board.unit(UnitId(1)).expect("unit 1");
        assert_eq!((second.job(), second.movement()), (Job::Smallfolk, 1));
        assert_eq!(board.grid().occupant_at(Pos { y: 2, x: 3 }), Ok(Some(UnitId(1))));
        board.check_occupancy().expect("consistent");
    }

    #[test]
    fn terrain_must_match_declared_size() {
        let mut scenario = Scenario::from_toml_str(SMALL).expect("parse");
        scenario.height = 4;
        assert!(matches!(
            scenario.build_board(),
            Err(SetupError::TerrainHeight { expected: 4, found: 3 })
        ));

        let mut scenario = Scenario::from_toml_str(SMALL).expect("parse");
        scenario.terrain[2] = "...".to_string();
        assert!(matches!(
            scenario.build_board(),
            Err(SetupError::TerrainWidth { row: 2, expected: 4, found: 3 })
        ));
    }

    #[test]
    fn bad_placements_are_rejected() {
        let mut scenario = Scenario::from_toml_str(SMALL).expect("parse");
        scenario.units[1].position = Pos { y: 1, x: 0 };
        assert!(matches!(
            scenario.build_board(),
            Err(SetupError::DuplicatePlacement { index: 1, occupant: UnitId(0), .. })
        ));

        let mut scenario = Scenario::from_toml_str(SMALL).expect("parse");
        scenario.cursor = Some(Pos { y: 3, x: 0 });
        assert!(matches!(scenario.build_board(), Err(SetupError::CursorOutOfBounds { .. })));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Scenario::from_toml_str("width = \"wide\""),
            Err(SetupError::Parse(_))
        ));
    }

    #[test]
    fn huge_dimensions_fail_before_allocating() {
        let scenario =
            Scenario::from_toml_str("width = 4294967296\nheight = 4294967296\n").expect("parse");
        assert!(matches!(
            scenario.build_board(),
            Err(SetupError::GridTooLarge { width: 4294967296, height: 4294967296, .. })
        ));
    }

    #[test]
    fn missing_terrain_means_open_ground() {
        let scenario = Scenario::from_toml_str("width = 2\nheight = 2\n").expect("parse");
        let board = scenario.build_board().expect("build");
        assert!(board.grid().cells().all(|cell| !board.grid().is_blocking(cell.pos)));
        assert!(board.units().is_empty());
    }

    #[test]
    fn demo_builds() {
        let board = Scenario::demo().build_board().expect("demo");
        assert_eq!(board.units().len(), 3);
        assert_eq!(board.grid().occupant_at(board.cursor().position()), Ok(Some(UnitId(0))));
    }
}
