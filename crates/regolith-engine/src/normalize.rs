//! Textual normalization of raw request fields.
//!
//! Purely mechanical: case-folding to uppercase, whitespace-stripping
//! of command strings, and whitespace-delimited tokenization of state
//! and corner strings. No validation happens here; malformed input
//! passes through untouched for the validator to flag.

use smallvec::SmallVec;

use crate::request::MissionRequest;

/// Field label for the plateau corner, as used in error messages.
pub(crate) const CORNER_FIELD: &str = "plateau upper-right coordinates";

/// One rover's fields after normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedRover {
    /// 1-based rover index, in input order.
    pub index: u32,
    /// Uppercased, whitespace-split state tokens. A well-formed state
    /// has exactly three; malformed input may have any number.
    pub state_tokens: SmallVec<[String; 3]>,
    /// Uppercased command text with all whitespace removed.
    pub command_text: String,
}

impl NormalizedRover {
    /// Label of this rover's state field, e.g. `Rover 1 State`.
    pub fn state_field(&self) -> String {
        format!("Rover {} State", self.index)
    }

    /// Label of this rover's command field, e.g. `Rover 1 Command`.
    pub fn command_field(&self) -> String {
        format!("Rover {} Command", self.index)
    }
}

/// A whole request after normalization, ready for validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedMission {
    /// Whitespace-split plateau corner tokens. A well-formed corner has
    /// exactly two.
    pub corner_tokens: SmallVec<[String; 2]>,
    /// Per-rover normalized fields, in input order.
    pub rovers: Vec<NormalizedRover>,
}

/// Normalize a raw request.
///
/// # Examples
///
/// ```
/// use regolith_engine::normalize::normalize;
/// use regolith_engine::{MissionRequest, RoverFields};
///
/// let request = MissionRequest::new(
///     "5 5",
///     vec![RoverFields::new("1 2 n", "lmlm lR ")],
/// );
/// let mission = normalize(&request);
/// assert_eq!(mission.rovers[0].state_tokens.as_slice(), ["1", "2", "N"]);
/// assert_eq!(mission.rovers[0].command_text, "LMLMLR");
/// ```
pub fn normalize(request: &MissionRequest) -> NormalizedMission {
    let corner_tokens = request
        .upper_right
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let rovers = request
        .rovers
        .iter()
        .enumerate()
        .map(|(i, fields)| NormalizedRover {
            index: i as u32 + 1,
            state_tokens: fields
                .state
                .to_uppercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            command_text: fields
                .command
                .to_uppercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect(),
        })
        .collect();

    NormalizedMission {
        corner_tokens,
        rovers,
    }
}
