//! Interpretation of rover scripts.
//!
//! The first line holds the upper right corner of the plateau. It is followed by pairs of lines,
//! the initial state of a rover and its commands. Rovers are run one after another, each one
//! parking on the plateau before the next one starts. The final state of every rover is written
//! as soon as it is known.

use std::{
    io::{self, Write},
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Command, Environment, Outcome, ParseError, Plateau, Rover, RoverState};

pub struct Interpreter<L> {
    lines: L,
    line_number: usize,
}

impl<L> Interpreter<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<IntoIter = L, Item = io::Result<String>>,
    {
        Self {
            lines: lines.into_iter(),
            line_number: 0,
        }
    }

    /// Runs the script until the input is exhausted or an empty line is read where the initial
    /// state of a rover is expected.
    pub fn run<W: Write>(mut self, output: &mut W) -> Result<Report, ScriptError> {
        let Some(line) = self.next_line()? else {
            return Ok(Report::default());
        };
        let plateau: Plateau = self.parse(&line)?;
        debug!(upper_right = ?plateau.upper_right(), "Plateau set");

        let mut environment = Environment::new(plateau);
        let mut outcomes = vec![];

        while let Some(line) = self.next_line()? {
            let initial: RoverState = self.parse(&line)?;
            let commands = match self.next_line()? {
                Some(line) => Command::parse_sequence(&line).map_err(|e| self.error(e))?,
                None => vec![],
            };
            debug!(
                rover = outcomes.len(),
                %initial,
                commands = commands.len(),
                "Rover started"
            );

            let mut rover = Rover::new(initial);
            let (state, outcome) = rover.run(&environment, commands);
            info!(rover = outcomes.len(), %state, ?outcome, "Rover finished");

            environment.commit_final(state);
            outcomes.push(outcome);

            writeln!(output, "{state}")?;
            output.flush()?;
        }

        Ok(Report {
            environment,
            outcomes,
        })
    }

    /// Reads the next line without its trailing line break and spaces. Empty lines are
    /// reported as `None`, just like the end of input.
    fn next_line(&mut self) -> Result<Option<String>, ScriptError> {
        let Some(line) = self.lines.next().transpose()? else {
            return Ok(None);
        };
        self.line_number += 1;
        let line = line.trim_end_matches(['\r', '\n', ' ']);
        Ok((!line.is_empty()).then(|| line.to_string()))
    }

    fn parse<T>(&self, line: &str) -> Result<T, ScriptError>
    where
        T: FromStr<Err = ParseError>,
    {
        line.parse().map_err(|e| self.error(e))
    }

    fn error(&self, source: ParseError) -> ScriptError {
        ScriptError::Parse {
            line: self.line_number,
            source,
        }
    }
}

/// Summary of a completed script.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    environment: Environment,
    outcomes: Vec<Outcome>,
}

impl Report {
    /// The plateau together with all parked rovers.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn final_states(&self) -> &[RoverState] {
        self.environment.occupancy().history()
    }

    /// One entry per rover, in input order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("malformed line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("i/o failure")]
    Io(#[from] io::Error),
}
