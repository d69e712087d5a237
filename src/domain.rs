//! The domain module encapsulates the simulation rules. It defines the `Rover` and its
//! `Environment`, along with the geometry that moves a rover across the plateau.
//!
//! The module performs no I/O. Text enters and leaves it only through the `FromStr` and
//! `Display` implementations of its value types.

mod basis;
mod collision;
mod environment;
mod rover;

pub use basis::{Command, Heading, ParseError, Position, RoverState, Transform};
pub use collision::{HasPosition, Occupancy};
pub use environment::{Environment, Obstruction, Plateau};
pub use rover::{Outcome, Rover};
