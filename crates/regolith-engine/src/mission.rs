//! Mission preparation and the sequential simulation loop.
//!
//! The API is two-phase: [`Mission::prepare`] normalizes, validates,
//! and parses a request, returning the accumulated error list if
//! anything is malformed; [`Mission::run`] then executes the rovers
//! strictly in input order. [`run_request`] chains both phases and
//! renders the report, as a pure function of the request, with all
//! per-run state (occupancy, outcomes, metrics) built fresh inside.

use regolith_core::{
    Command, CommandSeq, Heading, Position, RoverId, RoverOutcome, RoverState, ValidationError,
};
use regolith_plateau::{OccupancySet, Plateau};

use crate::metrics::MissionMetrics;
use crate::normalize::{normalize, NormalizedRover, CORNER_FIELD};
use crate::report::MissionReport;
use crate::request::MissionRequest;
use crate::validate::validate;

// ── Parsed per-rover plan ───────────────────────────────────────

/// One rover's parsed starting state and command sequence.
#[derive(Clone, Debug)]
struct RoverPlan {
    id: RoverId,
    start: RoverState,
    commands: CommandSeq,
}

// ── Mission ─────────────────────────────────────────────────────

/// A validated, parsed mission, ready to run.
///
/// Owns all per-run inputs exclusively. Running consumes the mission:
/// every run is a fresh, deterministic, one-shot computation, and no
/// state survives it.
///
/// # Examples
///
/// ```
/// use regolith_engine::{Mission, MissionRequest, RoverFields};
///
/// let request = MissionRequest::new(
///     "5 5",
///     vec![RoverFields::new("1 2 N", "LMLMLMLMM")],
/// );
/// let mission = Mission::prepare(&request).unwrap();
/// let run = mission.run();
/// assert_eq!(run.outcomes.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Mission {
    plateau: Plateau,
    rovers: Vec<RoverPlan>,
}

/// Result of a completed [`Mission::run`].
#[derive(Clone, Debug)]
pub struct MissionRun {
    /// Per-rover outcomes in simulation order. Shorter than the rover
    /// count when a lost or clashed rover halted the mission.
    pub outcomes: Vec<(RoverId, RoverOutcome)>,
    /// Counters populated during the run.
    pub metrics: MissionMetrics,
}

impl Mission {
    /// Normalize, validate, and parse a request.
    ///
    /// # Errors
    ///
    /// Returns the full accumulated list of validation errors, in check
    /// order. A non-empty list is the expected result for malformed
    /// input; simulation must not run in that case.
    pub fn prepare(request: &MissionRequest) -> Result<Self, Vec<ValidationError>> {
        let mission = normalize(request);
        let mut errors = validate(&mission);
        if !errors.is_empty() {
            return Err(errors);
        }

        // Post-validation the corner tokens are digit-only and each
        // state is (digits, digits, heading). Parsing can still fail on
        // values too large for the coordinate type; those surface as
        // invalid entries rather than panics.
        let plateau = parse_corner(&mission.corner_tokens, &mut errors);
        let rovers: Vec<Option<RoverPlan>> = mission
            .rovers
            .iter()
            .map(|rover| parse_rover(rover, &mut errors))
            .collect();

        match plateau {
            Some(plateau) if errors.is_empty() => Ok(Self {
                plateau,
                rovers: rovers.into_iter().flatten().collect(),
            }),
            _ => Err(errors),
        }
    }

    /// The plateau this mission runs on.
    pub fn plateau(&self) -> Plateau {
        self.plateau
    }

    /// Number of rovers queued for simulation.
    pub fn rover_count(&self) -> usize {
        self.rovers.len()
    }

    /// Simulate every rover strictly in input order.
    ///
    /// Each rover runs its full command sequence; its current position
    /// is checked against the plateau bounds and the occupancy set
    /// *before* every command, including the first. A rover that was
    /// ever lost reports `Lost`; otherwise, one that ever stood on a
    /// finalized rover's cell reports `Clashed`; either outcome halts
    /// all remaining rovers. A completed rover's final position joins
    /// the occupancy set before the next rover starts.
    pub fn run(self) -> MissionRun {
        let mut occupancy = OccupancySet::new();
        let mut outcomes = Vec::with_capacity(self.rovers.len());
        let mut metrics = MissionMetrics::default();

        for plan in &self.rovers {
            let outcome = simulate_rover(&self.plateau, &occupancy, plan, &mut metrics);
            metrics.rovers_simulated += 1;

            match outcome {
                RoverOutcome::Completed(state) => {
                    metrics.rovers_completed += 1;
                    occupancy.record(state.position);
                }
                RoverOutcome::Lost => metrics.rovers_lost += 1,
                RoverOutcome::Clashed => metrics.rovers_clashed += 1,
            }

            let halt = outcome.is_terminal();
            outcomes.push((plan.id, outcome));
            if halt {
                break;
            }
        }

        MissionRun { outcomes, metrics }
    }
}

/// Run one rover's full command sequence against the shared rules.
///
/// The lost/clashed conditions are sticky for this rover once observed,
/// but never stop command execution mid-sequence. The position reached
/// *after* the final command is deliberately not checked.
fn simulate_rover(
    plateau: &Plateau,
    occupancy: &OccupancySet,
    plan: &RoverPlan,
    metrics: &mut MissionMetrics,
) -> RoverOutcome {
    let mut state = plan.start;
    let mut lost = false;
    let mut clashed = false;

    for &command in &plan.commands {
        if !plateau.contains(state.position) {
            lost = true;
        }
        if occupancy.is_occupied(state.position) {
            clashed = true;
        }
        state.apply(command);
        metrics.commands_applied += 1;
    }

    if lost {
        RoverOutcome::Lost
    } else if clashed {
        RoverOutcome::Clashed
    } else {
        RoverOutcome::Completed(state)
    }
}

// ── Parse helpers ───────────────────────────────────────────────

fn parse_corner(tokens: &[String], errors: &mut Vec<ValidationError>) -> Option<Plateau> {
    match (tokens[0].parse::<u32>(), tokens[1].parse::<u32>()) {
        (Ok(x_max), Ok(y_max)) => Some(Plateau::new(x_max, y_max)),
        _ => {
            errors.push(ValidationError::InvalidCharacters {
                field: CORNER_FIELD.to_string(),
            });
            None
        }
    }
}

fn parse_rover(rover: &NormalizedRover, errors: &mut Vec<ValidationError>) -> Option<RoverPlan> {
    let invalid = || ValidationError::InvalidCharacters {
        field: rover.state_field(),
    };

    let position = match (
        rover.state_tokens[0].parse::<i32>(),
        rover.state_tokens[1].parse::<i32>(),
    ) {
        (Ok(x), Ok(y)) => Position::new(x, y),
        _ => {
            errors.push(invalid());
            return None;
        }
    };

    let heading = match rover.state_tokens[2].chars().next().and_then(Heading::from_char) {
        Some(heading) => heading,
        None => {
            errors.push(invalid());
            return None;
        }
    };

    let commands: Option<CommandSeq> = rover
        .command_text
        .chars()
        .map(Command::from_char)
        .collect();
    let commands = match commands {
        Some(commands) => commands,
        None => {
            errors.push(ValidationError::InvalidCharacters {
                field: rover.command_field(),
            });
            return None;
        }
    };

    Some(RoverPlan {
        id: RoverId(rover.index),
        start: RoverState::new(position, heading),
        commands,
    })
}

// ── One-shot entry point ────────────────────────────────────────

/// Prepare and run a request, rendering the report in one call.
///
/// This is the boundary the external collaborator talks to: it always
/// produces a [`MissionReport`], whether the request validated or not,
/// and holds no state between invocations.
pub fn run_request(request: &MissionRequest) -> MissionReport {
    match Mission::prepare(request) {
        Ok(mission) => MissionReport::from_run(mission.run()),
        Err(errors) => MissionReport::from_validation_errors(&errors),
    }
}
