//! Plateau boundary and the rovers already parked on it.

use std::str::FromStr;

use super::{
    basis::{parse_integer, tokens},
    HasPosition, Occupancy, ParseError, Position, RoverState,
};

/// Rectangular region spanning from (0, 0) to the upper right corner, both inclusive.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Plateau {
    upper_right: Position,
}

impl Plateau {
    pub const LOWER_LEFT: Position = Position::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self {
            upper_right: Position::new(x, y),
        }
    }

    pub fn upper_right(&self) -> Position {
        self.upper_right
    }

    pub fn contains(&self, object: &dyn HasPosition) -> bool {
        let position = object.cell();
        (Self::LOWER_LEFT.x()..=self.upper_right.x()).contains(&position.x())
            && (Self::LOWER_LEFT.y()..=self.upper_right.y()).contains(&position.y())
    }
}

impl FromStr for Plateau {
    type Err = ParseError;

    /// Parses the upper right corner `X Y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokens(s, 2)?;
        Ok(Self::new(parse_integer(tokens[0])?, parse_integer(tokens[1])?))
    }
}

/// Reason why a rover cannot be in a given state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Obstruction {
    OutOfBounds,
    Occupied,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    plateau: Plateau,
    occupancy: Occupancy,
}

impl Environment {
    pub fn new(plateau: Plateau) -> Self {
        Self {
            plateau,
            occupancy: Occupancy::new(),
        }
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn contains(&self, object: &dyn HasPosition) -> bool {
        self.plateau.contains(object)
    }

    pub fn is_occupied(&self, object: &dyn HasPosition) -> bool {
        self.occupancy.is_occupied(object)
    }

    /// The boundary is checked before the finished rovers.
    pub fn obstruction(&self, object: &dyn HasPosition) -> Option<Obstruction> {
        if !self.contains(object) {
            Some(Obstruction::OutOfBounds)
        } else if self.is_occupied(object) {
            Some(Obstruction::Occupied)
        } else {
            None
        }
    }

    pub fn is_valid_state(&self, object: &dyn HasPosition) -> bool {
        self.obstruction(object).is_none()
    }

    pub fn commit_final(&mut self, state: RoverState) {
        self.occupancy.commit(state);
    }
}
