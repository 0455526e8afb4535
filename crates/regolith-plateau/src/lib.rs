//! Plateau geometry and occupancy tracking for Regolith missions.
//!
//! This crate defines the [`Plateau`], the bounded rectangular grid
//! rovers move within, and the [`OccupancySet`] of positions held by
//! rovers that have already completed their command sequences. Both are
//! pure data with no simulation logic; the engine crate drives them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod occupancy;
pub mod plateau;

pub use occupancy::OccupancySet;
pub use plateau::Plateau;
