//! Ordered validation checks over a normalized mission.
//!
//! Every field of the request is checked independently (one bad rover
//! never short-circuits the others), but the checks for a *single*
//! field stop at the first matching failure, in a fixed precedence.
//! Errors accumulate in check order: every rover's state (in rover
//! order), then every rover's command, then the plateau corner once.

use regolith_core::ValidationError;

use crate::normalize::{NormalizedMission, NormalizedRover, CORNER_FIELD};

/// Characters allowed anywhere in a state string.
const STATE_ALPHABET: &str = "0123456789NSEW";

/// Characters allowed in a command string.
const COMMAND_ALPHABET: &str = "LRM";

/// Heading letters in compass-pair order; a state's third token must be
/// a contiguous run of this string.
const HEADING_RUN: &str = "NSWE";

/// Run all checks and return the accumulated errors, in check order.
///
/// An empty result means the mission may be simulated. A non-empty
/// result is the expected outcome for malformed input: the caller
/// renders it and skips simulation entirely.
pub fn validate(mission: &NormalizedMission) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for rover in &mission.rovers {
        check_state(rover, &mut errors);
    }
    for rover in &mission.rovers {
        check_command(rover, &mut errors);
    }
    check_corner(mission, &mut errors);
    errors
}

fn in_alphabet(token: &str, alphabet: &str) -> bool {
    token.chars().all(|c| alphabet.contains(c))
}

/// State precedence: missing → token count → alphabet → token order →
/// orientation length. At most one error per state field.
fn check_state(rover: &NormalizedRover, errors: &mut Vec<ValidationError>) {
    let tokens = &rover.state_tokens;

    if tokens.is_empty() {
        errors.push(ValidationError::MissingEntries {
            field: rover.state_field(),
        });
    } else if tokens.len() != 3 {
        errors.push(ValidationError::InvalidEntryCount {
            field: rover.state_field(),
        });
    } else if !tokens.iter().all(|t| in_alphabet(t, STATE_ALPHABET)) {
        errors.push(ValidationError::InvalidCharacters {
            field: rover.state_field(),
        });
    } else if !HEADING_RUN.contains(tokens[2].as_str()) {
        // The heading must come last. A multi-letter token that is still
        // a contiguous compass run (e.g. "NS") is an orientation-length
        // problem, caught below, not an ordering one.
        errors.push(ValidationError::InvalidFieldOrder {
            field: rover.state_field(),
        });
    } else if tokens[2].chars().count() != 1 {
        errors.push(ValidationError::InvalidOrientationLength {
            field: rover.state_field(),
        });
    }
}

/// Commands allow only `L`, `R`, `M`. An empty command string is valid:
/// the rover simply stays put and finalizes at its initial state.
fn check_command(rover: &NormalizedRover, errors: &mut Vec<ValidationError>) {
    if !in_alphabet(&rover.command_text, COMMAND_ALPHABET) {
        errors.push(ValidationError::InvalidCharacters {
            field: rover.command_field(),
        });
    }
}

/// Corner precedence: missing → token count → digits only.
fn check_corner(mission: &NormalizedMission, errors: &mut Vec<ValidationError>) {
    let tokens = &mission.corner_tokens;

    if tokens.is_empty() {
        errors.push(ValidationError::MissingEntries {
            field: CORNER_FIELD.to_string(),
        });
    } else if tokens.len() != 2 {
        errors.push(ValidationError::InvalidEntryCount {
            field: CORNER_FIELD.to_string(),
        });
    } else if !tokens.iter().all(|t| t.chars().all(|c| c.is_ascii_digit())) {
        errors.push(ValidationError::InvalidCharacters {
            field: CORNER_FIELD.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::request::{MissionRequest, RoverFields};

    fn validate_single(state: &str, command: &str, corner: &str) -> Vec<ValidationError> {
        let request = MissionRequest::new(corner, vec![RoverFields::new(state, command)]);
        validate(&normalize(&request))
    }

    #[test]
    fn well_formed_input_passes() {
        assert!(validate_single("1 2 N", "LMLMLMLMM", "5 5").is_empty());
    }

    #[test]
    fn empty_state_is_missing() {
        let errors = validate_single("", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::MissingEntries {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn wrong_token_count_is_invalid_number() {
        let errors = validate_single("1 2 N N", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidEntryCount {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn illegal_state_character_is_invalid_entries() {
        let errors = validate_single("1 2 X", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidCharacters {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn heading_not_last_is_invalid_order() {
        let errors = validate_single("1 N 2", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidFieldOrder {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn compass_run_orientation_is_length_error() {
        // "NS" is a contiguous run of the compass string, so it reaches
        // the length check rather than the ordering check.
        let errors = validate_single("1 2 NS", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidOrientationLength {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn non_run_orientation_is_order_error() {
        // "EW" is not contiguous in "NSWE", so it fails the ordering check.
        let errors = validate_single("1 2 EW", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidFieldOrder {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn at_most_one_error_per_state_field() {
        // Wrong count *and* illegal characters: only the count fires.
        let errors = validate_single("1 X", "LM", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidEntryCount {
                field: "Rover 1 State".into()
            }]
        );
    }

    #[test]
    fn illegal_command_character_is_invalid_entries() {
        let errors = validate_single("1 2 N", "LMLMLMLMMP", "5 5");
        assert_eq!(
            errors,
            vec![ValidationError::InvalidCharacters {
                field: "Rover 1 Command".into()
            }]
        );
    }

    #[test]
    fn empty_command_is_valid() {
        assert!(validate_single("1 2 N", "", "5 5").is_empty());
    }

    #[test]
    fn empty_corner_is_missing() {
        let errors = validate_single("1 2 N", "LM", "");
        assert_eq!(
            errors,
            vec![ValidationError::MissingEntries {
                field: CORNER_FIELD.into()
            }]
        );
    }

    #[test]
    fn corner_token_count_and_digits() {
        assert_eq!(
            validate_single("1 2 N", "LM", "5 5 5"),
            vec![ValidationError::InvalidEntryCount {
                field: CORNER_FIELD.into()
            }]
        );
        assert_eq!(
            validate_single("1 2 N", "LM", "5 N"),
            vec![ValidationError::InvalidCharacters {
                field: CORNER_FIELD.into()
            }]
        );
    }

    #[test]
    fn errors_accumulate_in_check_order() {
        // States for every rover first, then commands, then the corner.
        let request = MissionRequest::new(
            "bad corner here",
            vec![
                RoverFields::new("", "Q"),
                RoverFields::new("1 2 3 4", "LM"),
            ],
        );
        let errors = validate(&normalize(&request));
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingEntries {
                    field: "Rover 1 State".into()
                },
                ValidationError::InvalidEntryCount {
                    field: "Rover 2 State".into()
                },
                ValidationError::InvalidCharacters {
                    field: "Rover 1 Command".into()
                },
                ValidationError::InvalidEntryCount {
                    field: CORNER_FIELD.into()
                },
            ]
        );
    }
}
