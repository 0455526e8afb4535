//! Compass headings and the rotation/displacement rules attached to them.

use std::fmt;

/// The direction a rover is facing.
///
/// Headings rotate through the cycle `N → W → S → E → N` under left
/// turns and the reverse cycle under right turns. Moving forward
/// displaces the rover by [`displacement()`](Heading::displacement)
/// without changing the heading.
///
/// # Examples
///
/// ```
/// use regolith_core::Heading;
///
/// assert_eq!(Heading::North.turned_left(), Heading::West);
/// assert_eq!(Heading::North.turned_right(), Heading::East);
/// assert_eq!(Heading::East.displacement(), (1, 0));
/// assert_eq!(Heading::North.to_string(), "N");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing the positive-y edge of the plateau.
    North,
    /// Facing the negative-y edge of the plateau.
    South,
    /// Facing the positive-x edge of the plateau.
    East,
    /// Facing the negative-x edge of the plateau.
    West,
}

impl Heading {
    /// Returns the `(dx, dy)` offset of one forward move.
    pub fn displacement(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }

    /// The heading after a 90° left (counter-clockwise) turn.
    pub fn turned_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// The heading after a 90° right (clockwise) turn.
    pub fn turned_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Parse a single uppercase heading letter.
    ///
    /// Returns `None` for anything outside `N`, `S`, `E`, `W`. Callers
    /// normalize case before parsing; lowercase input is rejected here.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Heading::North),
            'S' => Some(Heading::South),
            'E' => Some(Heading::East),
            'W' => Some(Heading::West),
            _ => None,
        }
    }

    /// The single-letter form used in mission input and output.
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::South => 'S',
            Heading::East => 'E',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
