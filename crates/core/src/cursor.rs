use crate::error::BoardError;
use crate::types::{Direction, Pos};

/// Player-controlled pointer into the grid. Always inside `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    prev: Pos,
    width: usize,
    height: usize,
}

impl Cursor {
    pub fn new(width: usize, height: usize) -> Self {
        Self { pos: Pos::ORIGIN, prev: Pos::ORIGIN, width, height }
    }

    pub fn at(pos: Pos, width: usize, height: usize) -> Result<Self, BoardError> {
        let cursor = Self { pos, prev: pos, width, height };
        if !cursor.contains(pos) {
            return Err(BoardError::OutOfBounds { pos, width, height });
        }
        Ok(cursor)
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    /// Where the cursor was before its last successful move.
    pub fn previous_position(&self) -> Pos {
        self.prev
    }

    pub fn move_up(&mut self) -> bool {
        self.step(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.step(Direction::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.step(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.step(Direction::Right)
    }

    /// Moves one cell. A move that would leave the grid is a no-op and does
    /// not touch the previous position.
    pub fn step(&mut self, direction: Direction) -> bool {
        let next = self.pos.step(direction);
        if !self.contains(next) {
            return false;
        }
        self.prev = self.pos;
        self.pos = next;
        true
    }

    fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_no_ops_that_keep_previous_position() {
        let mut cursor = Cursor::new(3, 3);
        assert!(!cursor.move_up());
        assert!(!cursor.move_left());
        assert_eq!(cursor.position(), Pos::ORIGIN);
        assert_eq!(cursor.previous_position(), Pos::ORIGIN);

        assert!(cursor.move_right());
        assert!(cursor.move_right());
        assert!(!cursor.move_right());
        assert_eq!(cursor.position(), Pos { y: 0, x: 2 });
        assert_eq!(cursor.previous_position(), Pos { y: 0, x: 1 });
    }

    #[test]
    fn moves_exactly_one_cell_per_command() {
        let mut cursor = Cursor::at(Pos { y: 1, x: 1 }, 3, 3).expect("in bounds");
        cursor.move_down();
        assert_eq!(cursor.position(), Pos { y: 2, x: 1 });
        cursor.move_left();
        assert_eq!(cursor.position(), Pos { y: 2, x: 0 });
        assert_eq!(cursor.previous_position(), Pos { y: 2, x: 1 });
    }

    #[test]
    fn single_cell_grid_never_moves() {
        let mut cursor = Cursor::new(1, 1);
        for direction in Direction::ALL {
            assert!(!cursor.step(direction));
        }
        assert_eq!(cursor.position(), Pos::ORIGIN);
    }

    #[test]
    fn rejects_out_of_bounds_start() {
        assert!(Cursor::at(Pos { y: 0, x: 3 }, 3, 3).is_err());
    }
}
