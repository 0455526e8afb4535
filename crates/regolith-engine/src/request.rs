//! The mission request: the engine's structured input record.

use indexmap::IndexMap;

/// The raw input fields for one rover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverFields {
    /// The three-token state string, e.g. `"1 2 N"`.
    pub state: String,
    /// The command string, e.g. `"LMLMLMLMM"`.
    pub command: String,
}

impl RoverFields {
    /// Construct rover fields from their raw strings.
    pub fn new(state: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            command: command.into(),
        }
    }
}

/// A complete mission request, as supplied by the external collaborator
/// (typically a web form).
///
/// Fields are raw text exactly as entered: no normalization or
/// validation has happened yet. Rover order is input order and is also
/// the simulation order.
///
/// # Examples
///
/// ```
/// use regolith_engine::{MissionRequest, RoverFields};
///
/// let request = MissionRequest::new(
///     "5 5",
///     vec![RoverFields::new("1 2 N", "LMLMLMLMM")],
/// );
/// assert_eq!(request.rover_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionRequest {
    /// The plateau upper-right corner string, e.g. `"5 5"`.
    pub upper_right: String,
    /// Per-rover raw fields, in input order.
    pub rovers: Vec<RoverFields>,
}

/// The form key carrying the plateau upper-right corner.
pub const UPPER_RIGHT_KEY: &str = "Upper-Right Coordinate";

impl MissionRequest {
    /// Construct a request from its raw fields.
    pub fn new(upper_right: impl Into<String>, rovers: Vec<RoverFields>) -> Self {
        Self {
            upper_right: upper_right.into(),
            rovers,
        }
    }

    /// Build a request from a keyed form-field map.
    ///
    /// The rover count is derived as `(field count - 1) / 2`; rover `i`
    /// is read from the keys `Rover <i> State` and `Rover <i> Command`.
    /// A missing key behaves like an empty form field, which the
    /// validator will flag as missing entries.
    pub fn from_form(fields: &IndexMap<String, String>) -> Self {
        let rover_count = fields.len().saturating_sub(1) / 2;
        let lookup = |key: String| fields.get(&key).cloned().unwrap_or_default();

        let rovers = (1..=rover_count)
            .map(|i| RoverFields {
                state: lookup(format!("Rover {i} State")),
                command: lookup(format!("Rover {i} Command")),
            })
            .collect();

        Self {
            upper_right: lookup(UPPER_RIGHT_KEY.to_string()),
            rovers,
        }
    }

    /// Number of rovers in this request.
    pub fn rover_count(&self) -> usize {
        self.rovers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_form_derives_rover_count() {
        let f = form(&[
            ("Rover 1 Command", "LMLMLMLMM"),
            ("Rover 1 State", "1 2 N"),
            ("Rover 2 Command", "MMRMMRMRRM"),
            ("Rover 2 State", "3 3 E"),
            ("Upper-Right Coordinate", "5 5"),
        ]);
        let request = MissionRequest::from_form(&f);
        assert_eq!(request.rover_count(), 2);
        assert_eq!(request.upper_right, "5 5");
        assert_eq!(request.rovers[0], RoverFields::new("1 2 N", "LMLMLMLMM"));
        assert_eq!(request.rovers[1], RoverFields::new("3 3 E", "MMRMMRMRRM"));
    }

    #[test]
    fn from_form_missing_key_reads_as_empty() {
        // Three fields imply one rover, but its state key is absent.
        let f = form(&[
            ("Rover 1 Command", "LM"),
            ("Upper-Right Coordinate", "5 5"),
            ("unrelated", "x"),
        ]);
        let request = MissionRequest::from_form(&f);
        assert_eq!(request.rover_count(), 1);
        assert_eq!(request.rovers[0].state, "");
    }

    #[test]
    fn from_form_with_no_fields_is_empty() {
        let request = MissionRequest::from_form(&IndexMap::new());
        assert_eq!(request.rover_count(), 0);
        assert_eq!(request.upper_right, "");
    }
}
