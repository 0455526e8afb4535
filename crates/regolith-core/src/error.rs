//! Validation error taxonomy for mission input.
//!
//! Validation errors are the *expected* return value of a malformed
//! request, not exceptional conditions: they are accumulated into an
//! ordered list and rendered into the mission report. If any exist,
//! simulation never runs.

use std::error::Error;
use std::fmt;

/// A single failed validation check on one input field.
///
/// Each variant carries the human-readable field label it applies to
/// (e.g. `Rover 1 State` or `plateau upper-right coordinates`). The
/// `Display` text matches the report wording exactly; the reporter
/// prefixes each rendered line with `Error: `.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was present but empty.
    MissingEntries {
        /// Label of the offending field.
        field: String,
    },
    /// The field had the wrong number of whitespace-separated tokens.
    InvalidEntryCount {
        /// Label of the offending field.
        field: String,
    },
    /// The field contained a character outside its allowed alphabet.
    InvalidCharacters {
        /// Label of the offending field.
        field: String,
    },
    /// The field's tokens were well-formed but in the wrong order
    /// (the heading token must come last).
    InvalidFieldOrder {
        /// Label of the offending field.
        field: String,
    },
    /// The orientation token was longer than a single letter.
    InvalidOrientationLength {
        /// Label of the offending field.
        field: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEntries { field } => {
                write!(f, "Missing entries for {field}")
            }
            Self::InvalidEntryCount { field } => {
                write!(f, "Invalid number of entries in {field}")
            }
            Self::InvalidCharacters { field } => {
                write!(f, "Invalid entries in {field}")
            }
            Self::InvalidFieldOrder { field } => {
                write!(f, "Invalid order of entries in {field}")
            }
            Self::InvalidOrientationLength { field } => {
                write!(f, "Invalid entries in orientation for {field}")
            }
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_wording() {
        let field = || "Rover 1 State".to_string();
        assert_eq!(
            ValidationError::MissingEntries { field: field() }.to_string(),
            "Missing entries for Rover 1 State"
        );
        assert_eq!(
            ValidationError::InvalidEntryCount { field: field() }.to_string(),
            "Invalid number of entries in Rover 1 State"
        );
        assert_eq!(
            ValidationError::InvalidCharacters { field: field() }.to_string(),
            "Invalid entries in Rover 1 State"
        );
        assert_eq!(
            ValidationError::InvalidFieldOrder { field: field() }.to_string(),
            "Invalid order of entries in Rover 1 State"
        );
        assert_eq!(
            ValidationError::InvalidOrientationLength { field: field() }.to_string(),
            "Invalid entries in orientation for Rover 1 State"
        );
    }
}
