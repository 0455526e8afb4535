//! Core types for the Regolith rover navigation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Regolith workspace:
//! headings, commands, positions, rover identifiers and state, per-rover
//! outcomes, and the validation error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod heading;
pub mod id;
pub mod outcome;
pub mod position;
pub mod state;

pub use command::{Command, CommandSeq};
pub use error::ValidationError;
pub use heading::Heading;
pub use id::RoverId;
pub use outcome::RoverOutcome;
pub use position::Position;
pub use state::RoverState;
