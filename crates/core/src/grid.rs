//! Battlefield cells: terrain plus an optional occupant id.
//! Terrain is fixed at construction; only occupancy changes during play.

use crate::error::{BoardError, SetupError};
use crate::types::{Direction, Pos, TerrainKind, UnitId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Pos,
    pub terrain: TerrainKind,
    /// Non-owning reference into the unit registry.
    pub occupant: Option<UnitId>,
}

/// Largest cell count a grid may have. Keeps every coordinate within `i32`.
pub const MAX_CELLS: usize = 1 << 20;

/// Checked `width * height` for setup data.
fn cell_count(width: usize, height: usize) -> Result<usize, SetupError> {
    if width == 0 || height == 0 {
        return Err(SetupError::EmptyGrid { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&count| count <= MAX_CELLS)
        .ok_or(SetupError::GridTooLarge { width, height, max: MAX_CELLS })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-`Open` grid.
    pub fn new(width: usize, height: usize) -> Result<Self, SetupError> {
        let count = cell_count(width, height)?;
        Self::from_terrain(width, height, vec![TerrainKind::Open; count])
    }

    /// Builds a grid from row-major terrain, one entry per cell.
    pub fn from_terrain(
        width: usize,
        height: usize,
        terrain: Vec<TerrainKind>,
    ) -> Result<Self, SetupError> {
        if terrain.len() != cell_count(width, height)? {
            return Err(SetupError::TerrainHeight {
                expected: height,
                found: terrain.len() / width,
            });
        }
        let cells = terrain
            .into_iter()
            .enumerate()
            .map(|(index, terrain)| Cell {
                pos: Pos { y: (index / width) as i32, x: (index % width) as i32 },
                terrain,
                occupant: None,
            })
            .collect();
        Ok(Self { width, height, cells })
    }

    /// Parses rows of terrain glyphs (`.` open, `#` blocking).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, SetupError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut terrain = Vec::with_capacity(cell_count(width, height)?);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(SetupError::TerrainWidth { row: row_index, expected: width, found });
            }
            for glyph in row.chars() {
                let kind = TerrainKind::from_glyph(glyph)
                    .ok_or(SetupError::UnknownTerrain { row: row_index, glyph })?;
                terrain.push(kind);
            }
        }
        Self::from_terrain(width, height, terrain)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cell_at(&self, pos: Pos) -> Result<&Cell, BoardError> {
        let index = self.index(pos)?;
        Ok(&self.cells[index])
    }

    /// Overwrites the occupant field only. Keeping the unit's own position in
    /// step is the caller's job; see `Board::move_unit`.
    pub fn set_occupant(&mut self, pos: Pos, occupant: Option<UnitId>) -> Result<(), BoardError> {
        let index = self.index(pos)?;
        self.cells[index].occupant = occupant;
        Ok(())
    }

    pub fn occupant_at(&self, pos: Pos) -> Result<Option<UnitId>, BoardError> {
        self.cell_at(pos).map(|cell| cell.occupant)
    }

    /// True iff the terrain is not `Open`. Positions outside the grid block.
    pub fn is_blocking(&self, pos: Pos) -> bool {
        self.cell_at(pos).map_or(true, |cell| cell.terrain != TerrainKind::Open)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The in-bounds axis-aligned neighbors of `pos`.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| pos.step(direction))
            .filter(|next| self.in_bounds(*next))
    }

    pub fn render_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.terrain.glyph()).collect())
            .collect()
    }

    fn index(&self, pos: Pos) -> Result<usize, BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds { pos, width: self.width, height: self.height });
        }
        Ok((pos.y as usize) * self.width + (pos.x as usize))
    }
}
