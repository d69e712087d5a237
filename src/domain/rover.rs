//! Rover driven by a sequence of commands on a plateau shared with previously parked rovers.
//!
//! A rover that starts in an invalid state does not move at all. A rover that would move into
//! an invalid state keeps its last valid state and ignores all remaining commands.

use tracing::{debug, trace};

use super::{Command, Environment, Obstruction, RoverState};

#[derive(Clone, Debug, PartialEq)]
pub struct Rover {
    state: RoverState,
    track: Vec<RoverState>,
    outcome: Option<Outcome>,
}

impl Rover {
    pub fn new(initial: RoverState) -> Self {
        Self {
            state: initial,
            track: vec![initial],
            outcome: None,
        }
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    /// All states the rover has been in, starting with the initial one.
    pub fn track(&self) -> &[RoverState] {
        &self.track
    }

    /// `None` until the rover has been run.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the final state together with the reason the rover stopped.
    pub fn run<I>(&mut self, environment: &Environment, commands: I) -> (RoverState, Outcome)
    where
        I: IntoIterator<Item = Command>,
    {
        let outcome = self.drive(environment, commands);
        self.outcome = Some(outcome);
        (self.state, outcome)
    }

    fn drive<I>(&mut self, environment: &Environment, commands: I) -> Outcome
    where
        I: IntoIterator<Item = Command>,
    {
        if let Some(obstruction) = environment.obstruction(&self.state) {
            debug!(state = %self.state, ?obstruction, "Rover blocked at start");
            return Outcome::BlockedAtStart(obstruction);
        }

        for (step, command) in commands.into_iter().enumerate() {
            // An unrepresentable position lies beyond every plateau.
            let candidate = match self.state.transformed(command.transform()) {
                Some(candidate) => environment
                    .obstruction(&candidate)
                    .map_or(Ok(candidate), Err),
                None => Err(Obstruction::OutOfBounds),
            };
            match candidate {
                Ok(candidate) => {
                    trace!(step, %command, state = %candidate, "Rover stepped");
                    self.state = candidate;
                    self.track.push(candidate);
                }
                Err(obstruction) => {
                    debug!(
                        state = %self.state,
                        step,
                        %command,
                        ?obstruction,
                        "Rover halted"
                    );
                    return Outcome::Halted {
                        step,
                        command,
                        obstruction,
                    };
                }
            }
        }

        Outcome::Completed
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Completed,
    BlockedAtStart(Obstruction),
    /// `step` is the zero-based index of the rejected command.
    Halted {
        step: usize,
        command: Command,
        obstruction: Obstruction,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::super::{Heading, Plateau, Position};
    use super::*;

    const COMMANDS: [Command; 3] = [Command::Left, Command::Right, Command::Move];

    #[rstest]
    #[case::classic_first("1 2 N", "LMLMLMLMM", "1 3 N")]
    #[case::classic_second("3 3 E", "MMRMMRMRRM", "5 1 E")]
    #[case::empty_commands("2 4 W", "", "2 4 W")]
    #[case::spin_in_place("0 0 S", "LLLL", "0 0 S")]
    #[case::stops_at_upper_edge("0 0 N", "MMMMMMMM", "0 5 N")]
    #[case::stops_at_lower_edge("2 2 S", "MMMRMMM", "2 0 S")]
    #[case::first_move_leaves_plateau("0 0 W", "MRM", "0 0 W")]
    #[case::remaining_commands_ignored("5 5 N", "MLM", "5 5 N")]
    fn test_rover_run(#[case] start: &str, #[case] commands: &str, #[case] expected: &str) {
        let environment = Environment::new(Plateau::new(5, 5));
        let mut rover = Rover::new(state(start));
        let (end, _) = rover.run(&environment, commands_from(commands));
        assert_eq!(end, state(expected));
        assert_eq!(rover.state(), end);
    }

    #[test]
    fn test_rover_outcome_completed() {
        let environment = Environment::new(Plateau::new(5, 5));
        let mut rover = Rover::new(state("1 2 N"));
        assert_eq!(rover.outcome(), None);
        let (_, outcome) = rover.run(&environment, commands_from("MM"));
        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(rover.outcome(), Some(outcome));
        assert_eq!(
            rover.track(),
            &[state("1 2 N"), state("1 3 N"), state("1 4 N")]
        );
    }

    #[test]
    fn test_rover_halted_at_boundary() {
        let environment = Environment::new(Plateau::new(2, 2));
        let mut rover = Rover::new(state("0 0 N"));
        let (end, _) = rover.run(&environment, commands_from("MMMM"));
        assert_eq!(end, state("0 2 N"));
        assert_eq!(
            rover.outcome(),
            Some(Outcome::Halted {
                step: 2,
                command: Command::Move,
                obstruction: Obstruction::OutOfBounds,
            })
        );
    }

    #[test]
    fn test_rover_stops_short_of_finished_rover() {
        let mut environment = Environment::new(Plateau::new(5, 5));
        environment.commit_final(state("1 3 N"));
        let mut rover = Rover::new(state("1 0 N"));
        let (end, _) = rover.run(&environment, commands_from("MMMM"));
        assert_eq!(end, state("1 2 N"));
        assert_eq!(
            rover.outcome(),
            Some(Outcome::Halted {
                step: 2,
                command: Command::Move,
                obstruction: Obstruction::Occupied,
            })
        );
    }

    #[test]
    fn test_rover_may_pass_its_own_track() {
        let environment = Environment::new(Plateau::new(5, 5));
        let mut rover = Rover::new(state("1 1 N"));
        let (end, _) = rover.run(&environment, commands_from("MRRMRRM"));
        assert_eq!(end, state("1 2 N"));
        assert_eq!(rover.outcome(), Some(Outcome::Completed));
    }

    #[rstest]
    #[case::east_edge(Plateau::new(i64::MAX, 5), "9223372036854775807 0 E", "LRMM")]
    #[case::north_edge(Plateau::new(5, i64::MAX), "0 9223372036854775807 N", "LRMM")]
    fn test_rover_halted_at_largest_coordinate(
        #[case] plateau: Plateau,
        #[case] start: &str,
        #[case] commands: &str,
    ) {
        let environment = Environment::new(plateau);
        let start = state(start);
        let mut rover = Rover::new(start);
        assert_eq!(
            rover.run(&environment, commands_from(commands)),
            (
                start,
                Outcome::Halted {
                    step: 2,
                    command: Command::Move,
                    obstruction: Obstruction::OutOfBounds,
                }
            )
        );
    }

    #[rstest]
    #[case::outside("7 1 N", Obstruction::OutOfBounds)]
    #[case::negative("-1 -1 E", Obstruction::OutOfBounds)]
    #[case::occupied("3 3 S", Obstruction::Occupied)]
    fn test_rover_blocked_at_start(#[case] start: &str, #[case] obstruction: Obstruction) {
        let mut environment = Environment::new(Plateau::new(5, 5));
        environment.commit_final(RoverState::new(Position::new(3, 3), Heading::North));
        let start = state(start);
        let mut rover = Rover::new(start);
        assert_eq!(
            rover.run(&environment, commands_from("LMMRM")),
            (start, Outcome::BlockedAtStart(obstruction))
        );
        assert_eq!(rover.outcome(), Some(Outcome::BlockedAtStart(obstruction)));
        assert_eq!(rover.track(), &[start]);
    }

    #[test]
    fn test_rover_outside_never_moves() {
        let environment = Environment::new(Plateau::new(3, 3));
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let start = RoverState::new(
                Position::new(rng.random_range(4..20), rng.random_range(-5..20)),
                Heading::from_angle_index(rng.random_range(0..4)),
            );
            let commands = (0..rng.random_range(0..12))
                .map(|_| COMMANDS[rng.random_range(0..COMMANDS.len())])
                .collect::<Vec<_>>();
            assert_eq!(Rover::new(start).run(&environment, commands).0, start);
        }
    }

    #[test]
    fn test_rover_stays_on_plateau() {
        let environment = Environment::new(Plateau::new(4, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let start = RoverState::new(
                Position::new(rng.random_range(0..=4), rng.random_range(0..=2)),
                Heading::from_angle_index(rng.random_range(0..4)),
            );
            let commands = (0..rng.random_range(0..30))
                .map(|_| COMMANDS[rng.random_range(0..COMMANDS.len())])
                .collect::<Vec<_>>();
            let mut rover = Rover::new(start);
            rover.run(&environment, commands);
            assert!(rover.track().iter().all(|s| environment.contains(s)));
        }
    }

    fn state(line: &str) -> RoverState {
        line.parse().unwrap()
    }

    fn commands_from(line: &str) -> Vec<Command> {
        Command::parse_sequence(line).unwrap()
    }
}
