//! Rover state and the movement rule set.

use std::fmt;

use crate::command::Command;
use crate::heading::Heading;
use crate::position::Position;

/// The mutable state of one rover: where it is and which way it faces.
///
/// Created from parsed input, mutated one command at a time during
/// simulation, and reported (or discarded) at the end of the rover's
/// command sequence.
///
/// # Examples
///
/// ```
/// use regolith_core::{Command, Heading, Position, RoverState};
///
/// let mut rover = RoverState::new(Position::new(1, 2), Heading::North);
/// rover.apply(Command::TurnLeft);
/// rover.apply(Command::MoveForward);
/// assert_eq!(rover.position, Position::new(0, 2));
/// assert_eq!(rover.heading, Heading::West);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoverState {
    /// Current grid cell.
    pub position: Position,
    /// Current facing direction.
    pub heading: Heading,
}

impl RoverState {
    /// Construct a rover state.
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Apply one command in place.
    ///
    /// Rotations leave the position untouched; a forward move leaves the
    /// heading untouched. No bounds or occupancy checking happens here;
    /// the simulation loop checks *before* applying each command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TurnLeft => self.heading = self.heading.turned_left(),
            Command::TurnRight => self.heading = self.heading.turned_right(),
            Command::MoveForward => {
                self.position = self.position.offset_by(self.heading.displacement());
            }
        }
    }
}

impl fmt::Display for RoverState {
    /// `x y heading`, the three-token form used in mission input and output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.heading)
    }
}
