//! Unit arena. Units are indexed by `UnitId`; cells hold only the id.

use crate::error::BoardError;
use crate::types::{Job, Pos, UnitId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    id: UnitId,
    job: Job,
    pos: Pos,
    movement: i32,
    pos_history: Vec<Pos>,
}

impl Unit {
    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn movement(&self) -> i32 {
        self.movement
    }

    /// Every position the unit has stood on, spawn first. Append-only.
    pub fn pos_history(&self) -> &[Pos] {
        &self.pos_history
    }

    pub(crate) fn relocate(&mut self, to: Pos) {
        self.pos = to;
        self.pos_history.push(to);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitRegistry {
    units: Vec<Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a unit and returns its id. Ids are handed out in creation
    /// order and never reused.
    pub(crate) fn spawn(&mut self, job: Job, pos: Pos, movement: i32) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(Unit { id, job, pos, movement, pos_history: vec![pos] });
        id
    }

    pub fn get(&self, id: UnitId) -> Result<&Unit, BoardError> {
        self.units.get(id.0 as usize).ok_or(BoardError::UnitNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> Result<&mut Unit, BoardError> {
        self.units.get_mut(id.0 as usize).ok_or(BoardError::UnitNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
