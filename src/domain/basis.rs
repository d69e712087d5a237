//! Basic building blocks.

use std::{
    fmt,
    num::ParseIntError,
    slice::Iter,
    str::FromStr,
};

use nalgebra::Vector2;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    x: i64,
    y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// `None` if the result does not fit the coordinate range.
    pub fn checked_offset(&self, offset: Vector2<i64>) -> Option<Position> {
        Some(Self {
            x: self.x.checked_add(offset.x)?,
            y: self.y.checked_add(offset.y)?,
        })
    }
}

impl From<Position> for (i64, i64) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

/// Compass heading. The variants are listed in counter-clockwise order, which is also the order
/// of their angle indices (a left turn adds one step).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

static HEADINGS: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];

impl Heading {
    pub fn iter() -> Iter<'static, Heading> {
        HEADINGS.iter()
    }

    pub fn angle_index(self) -> i64 {
        match self {
            Heading::East => 0,
            Heading::North => 1,
            Heading::West => 2,
            Heading::South => 3,
        }
    }

    /// Any integer is accepted and reduced modulo four.
    pub fn from_angle_index(index: i64) -> Self {
        HEADINGS[index.rem_euclid(HEADINGS.len() as i64) as usize]
    }

    /// Unit step taken when moving forward with this heading.
    pub fn direction(self) -> Vector2<i64> {
        match self {
            Heading::East => Vector2::new(1, 0),
            Heading::North => Vector2::new(0, 1),
            Heading::West => Vector2::new(-1, 0),
            Heading::South => Vector2::new(0, -1),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Heading::East => 'E',
            Heading::North => 'N',
            Heading::West => 'W',
            Heading::South => 'S',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'E' => Ok(Heading::East),
            'N' => Ok(Heading::North),
            'W' => Ok(Heading::West),
            'S' => Ok(Heading::South),
            _ => Err(ParseError::InvalidHeading(value.to_string())),
        }
    }
}

impl FromStr for Heading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Heading::try_from(letter),
            _ => Err(ParseError::InvalidHeading(s.to_string())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Command {
    Left,
    Right,
    Move,
}

impl Command {
    pub fn transform(self) -> Transform {
        match self {
            Command::Left => Transform::TURN_LEFT,
            Command::Right => Transform::TURN_RIGHT,
            Command::Move => Transform::FORWARD,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Move => 'M',
        }
    }

    /// Parses a whole command line. Every letter must be a known command.
    pub fn parse_sequence(line: &str) -> Result<Vec<Command>, ParseError> {
        line.chars().map(Command::try_from).collect()
    }
}

impl TryFrom<char> for Command {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'M' => Ok(Command::Move),
            _ => Err(ParseError::InvalidCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Effect of a single command: a number of forward steps and a number of left rotation steps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transform {
    pub distance: i64,
    pub rotation: i64,
}

impl Transform {
    pub const FORWARD: Transform = Transform::new(1, 0);
    pub const TURN_LEFT: Transform = Transform::new(0, 1);
    pub const TURN_RIGHT: Transform = Transform::new(0, -1);

    pub const fn new(distance: i64, rotation: i64) -> Self {
        Self { distance, rotation }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RoverState {
    position: Position,
    heading: Heading,
}

impl RoverState {
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Applies a transform. Translation follows the heading held before the rotation is applied.
    /// Returns `None` when the new position cannot be represented, which only happens far
    /// outside any plateau.
    pub fn transformed(&self, transform: Transform) -> Option<RoverState> {
        let heading = Heading::from_angle_index(
            self.heading.angle_index() + transform.rotation.rem_euclid(HEADINGS.len() as i64),
        );
        let position = if transform.distance != 0 {
            let direction = self.heading.direction();
            self.position.checked_offset(Vector2::new(
                direction.x.checked_mul(transform.distance)?,
                direction.y.checked_mul(transform.distance)?,
            ))?
        } else {
            self.position
        };
        Some(Self { position, heading })
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

impl FromStr for RoverState {
    type Err = ParseError;

    /// Parses the canonical form `x y H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokens(s, 3)?;
        Ok(Self::new(
            Position::new(parse_integer(tokens[0])?, parse_integer(tokens[1])?),
            tokens[2].parse()?,
        ))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid heading {0:?}")]
    InvalidHeading(String),
    #[error("invalid command {0:?}")]
    InvalidCommand(char),
    #[error("expected {expected} tokens, found {found}")]
    UnexpectedTokenCount { expected: usize, found: usize },
    #[error("invalid integer {token:?}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Splits a line at whitespace and checks the number of tokens.
pub(super) fn tokens(line: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != expected {
        return Err(ParseError::UnexpectedTokenCount {
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

pub(super) fn parse_integer(token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}
