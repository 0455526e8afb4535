//! Regolith: a sequential rover navigation engine for plateau missions.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Regolith sub-crates. For most users, adding `regolith` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use regolith::prelude::*;
//!
//! // The classic worked example: a 5x5 plateau and two rovers.
//! let request = MissionRequest::new(
//!     "5 5",
//!     vec![
//!         RoverFields::new("1 2 N", "LMLMLMLMM"),
//!         RoverFields::new("3 3 E", "MMRMMRMRRM"),
//!     ],
//! );
//!
//! let report = run_request(&request);
//! assert_eq!(report.lines[0], "Rover 1 final state: 1 3 N ");
//! assert_eq!(report.lines[1], "Rover 2 final state: 5 1 E ");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `regolith-core` | Headings, commands, positions, rover state, outcomes, errors |
//! | [`plateau`] | `regolith-plateau` | Plateau bounds and the occupancy set |
//! | [`engine`] | `regolith-engine` | Request boundary, validation pipeline, simulation, reporting |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`regolith-core`).
///
/// Contains [`types::Heading`], [`types::Command`], [`types::Position`],
/// [`types::RoverState`], [`types::RoverOutcome`], and the
/// [`types::ValidationError`] taxonomy.
pub use regolith_core as types;

/// Plateau geometry and occupancy (`regolith-plateau`).
///
/// Provides [`plateau::Plateau`] bounds checking and the
/// [`plateau::OccupancySet`] of finalized rover positions.
pub use regolith_plateau as plateau;

/// The navigation engine (`regolith-engine`).
///
/// [`engine::Mission`] for the two-phase prepare/run API,
/// [`engine::run_request`] for the one-shot boundary entry point.
pub use regolith_engine as engine;

/// Common imports for typical Regolith usage.
///
/// ```rust
/// use regolith::prelude::*;
/// ```
///
/// This imports the request/report boundary types, the mission API, and
/// the core vocabulary types.
pub mod prelude {
    // Core vocabulary
    pub use regolith_core::{
        Command, CommandSeq, Heading, Position, RoverId, RoverOutcome, RoverState,
        ValidationError,
    };

    // Plateau
    pub use regolith_plateau::{OccupancySet, Plateau};

    // Engine
    pub use regolith_engine::{
        run_request, Mission, MissionMetrics, MissionReport, MissionRequest, MissionRun,
        RoverFields,
    };
}
