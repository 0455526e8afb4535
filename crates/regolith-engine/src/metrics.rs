//! Per-run counters for the navigation engine.
//!
//! [`MissionMetrics`] captures what one engine invocation did, for
//! telemetry at the collaborator boundary. The engine populates the
//! counters during `run()`; consumers read them from the returned
//! report.

/// Counters collected during a single mission run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissionMetrics {
    /// Number of rovers whose command sequences were executed. Stops
    /// counting when a lost or clashed rover halts the mission.
    pub rovers_simulated: u32,
    /// Rovers that completed their full sequence and were finalized.
    pub rovers_completed: u32,
    /// Rovers reported lost (left the plateau at a check point).
    pub rovers_lost: u32,
    /// Rovers reported clashed (stood on a finalized rover's cell).
    pub rovers_clashed: u32,
    /// Total command characters applied across all simulated rovers.
    pub commands_applied: u64,
    /// Validation errors accumulated, when the request never simulated.
    pub validation_errors: u32,
}
