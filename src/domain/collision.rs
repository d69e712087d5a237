//! Collision detection against rovers that have finished moving.

use super::{Position, RoverState};

pub trait HasPosition {
    fn occupies_same_cell(&self, other: &dyn HasPosition) -> bool {
        self.cell() == other.cell()
    }

    fn cell(&self) -> Position;
}

impl HasPosition for Position {
    fn cell(&self) -> Position {
        *self
    }
}

impl HasPosition for RoverState {
    fn cell(&self) -> Position {
        self.position()
    }
}

/// Final states of all finished rovers, in the order they finished. Entries are never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Occupancy {
    history: Vec<RoverState>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[RoverState] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_occupied(&self, object: &dyn HasPosition) -> bool {
        self.history.iter().any(|r| r.occupies_same_cell(object))
    }

    pub fn commit(&mut self, state: RoverState) {
        self.history.push(state);
    }
}
