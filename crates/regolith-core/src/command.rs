//! Rover commands and command sequences.

use smallvec::SmallVec;

/// A single instruction from a rover's command string.
///
/// Rotations change the heading only; [`MoveForward`](Command::MoveForward)
/// changes the position only. Command sequences are immutable once parsed
/// and are applied strictly one character at a time.
///
/// # Examples
///
/// ```
/// use regolith_core::Command;
///
/// assert_eq!(Command::from_char('L'), Some(Command::TurnLeft));
/// assert_eq!(Command::from_char('M'), Some(Command::MoveForward));
/// assert_eq!(Command::from_char('Q'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90° left in place (`L`).
    TurnLeft,
    /// Rotate 90° right in place (`R`).
    TurnRight,
    /// Move one grid cell in the current heading (`M`).
    MoveForward,
}

impl Command {
    /// Parse a single uppercase command letter.
    ///
    /// Returns `None` for anything outside `L`, `R`, `M`. Callers
    /// normalize case and strip whitespace before parsing.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            'M' => Some(Command::MoveForward),
            _ => None,
        }
    }

    /// The single-letter form used in mission input.
    pub fn as_char(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::MoveForward => 'M',
        }
    }
}

/// An ordered sequence of commands for one rover.
///
/// Uses `SmallVec<[Command; 16]>` to keep typical mission command
/// strings inline; longer sequences spill to the heap transparently.
pub type CommandSeq = SmallVec<[Command; 16]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_accepts_only_uppercase_lrm() {
        assert_eq!(Command::from_char('L'), Some(Command::TurnLeft));
        assert_eq!(Command::from_char('R'), Some(Command::TurnRight));
        assert_eq!(Command::from_char('M'), Some(Command::MoveForward));
        assert_eq!(Command::from_char('l'), None);
        assert_eq!(Command::from_char('P'), None);
        assert_eq!(Command::from_char(' '), None);
    }

    #[test]
    fn as_char_round_trips() {
        for cmd in [Command::TurnLeft, Command::TurnRight, Command::MoveForward] {
            assert_eq!(Command::from_char(cmd.as_char()), Some(cmd));
        }
    }

    #[test]
    fn command_seq_stays_inline_for_short_missions() {
        let seq: CommandSeq = "LMLMLMLMM"
            .chars()
            .filter_map(Command::from_char)
            .collect();
        assert_eq!(seq.len(), 9);
        assert!(!seq.spilled());
    }
}
