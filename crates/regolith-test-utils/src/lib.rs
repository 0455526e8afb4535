//! Test fixtures for Regolith development.
//!
//! Provides [`MissionFormBuilder`] for composing the keyed form-field
//! maps the engine's request boundary accepts, plus canned missions
//! used across the integration suites. Depends only on `indexmap` so
//! it can serve as a dev-dependency anywhere in the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;

/// Builder for the form-field maps supplied by the web collaborator.
///
/// Keys follow the boundary convention: `Upper-Right Coordinate`, and
/// `Rover <i> State` / `Rover <i> Command` numbered from 1 in the order
/// rovers are added.
#[derive(Clone, Debug, Default)]
pub struct MissionFormBuilder {
    upper_right: Option<String>,
    rovers: Vec<(String, String)>,
}

impl MissionFormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plateau upper-right corner field.
    pub fn plateau(mut self, corner: &str) -> Self {
        self.upper_right = Some(corner.to_string());
        self
    }

    /// Append a rover with the given state and command fields.
    pub fn rover(mut self, state: &str, command: &str) -> Self {
        self.rovers.push((state.to_string(), command.to_string()));
        self
    }

    /// Produce the keyed field map, commands first per rover, corner
    /// last, matching the field order the web form posts.
    pub fn build(self) -> IndexMap<String, String> {
        let mut fields = IndexMap::new();
        for (i, (state, command)) in self.rovers.iter().enumerate() {
            fields.insert(format!("Rover {} Command", i + 1), command.clone());
            fields.insert(format!("Rover {} State", i + 1), state.clone());
        }
        fields.insert(
            "Upper-Right Coordinate".to_string(),
            self.upper_right.unwrap_or_default(),
        );
        fields
    }
}

/// The classic two-rover worked example: `5 5` plateau, rovers ending
/// at `1 3 N` and `5 1 E`.
pub fn classic_form() -> IndexMap<String, String> {
    MissionFormBuilder::new()
        .plateau("5 5")
        .rover("1 2 N", "LMLMLMLMM")
        .rover("3 3 E", "MMRMMRMRRM")
        .build()
}
