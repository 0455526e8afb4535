//! The Regolith navigation engine.
//!
//! Takes a [`MissionRequest`] (a plateau upper-right corner plus, per
//! rover, a state string and a command string) and produces a
//! [`MissionReport`]: either the accumulated validation errors, or one
//! outcome line per rover, halting at the first rover that is lost or
//! clashes.
//!
//! The engine is a pure function of its input. Each invocation builds
//! fresh per-run state (occupancy, outcomes, metrics); nothing persists
//! between runs. Rovers are simulated strictly in input order, a domain
//! rule reflecting one-at-a-time radio relay control, not a performance
//! shortcut.
//!
//! # Pipeline
//!
//! 1. [`normalize`] — case-folding and tokenization, no validation.
//! 2. [`validate()`] — ordered per-field checks accumulating
//!    [`ValidationError`](regolith_core::ValidationError)s; any error
//!    blocks simulation entirely.
//! 3. [`Mission::run`] — the sequential simulation loop.
//! 4. [`report`] — renders outcomes or errors into ordered text lines.
//!
//! The usual entry point is [`run_request`], which chains all four.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod metrics;
pub mod mission;
pub mod normalize;
pub mod report;
pub mod request;
pub mod validate;

pub use metrics::MissionMetrics;
pub use mission::{run_request, Mission, MissionRun};
pub use report::MissionReport;
pub use request::{MissionRequest, RoverFields};
pub use validate::validate;
