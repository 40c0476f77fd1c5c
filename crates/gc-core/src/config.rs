//! Per-run configuration.
//!
//! One `RunConfig` per simulation run, passed into the controller at
//! construction.  There is deliberately no process-wide state: output paths,
//! periods, and corridor identifiers all travel with the run.

use std::path::PathBuf;

use crate::{GcError, GcResult, RegionId, SamplingGrid, TargetId};

/// The three identifiers attached to one corridor.
///
/// Scenario files assign independent id spaces to measurement areas, density
/// data processors, and routing targets; the corridor's position in
/// [`RunConfig::corridors`] is the canonical 0-based index used everywhere
/// else in this framework.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CorridorSpec {
    /// Polygonal measurement area queried from the engine at init.
    pub measurement_area: RegionId,
    /// Data-processor id naming this corridor's column in the persisted
    /// density export (`areaDensityCountingNormed-PID<id>`).
    pub processor_id: u32,
    /// Routing target pedestrians are sent toward when this corridor is
    /// chosen.
    pub target: TargetId,
}

/// Spatial filter attached to outbound commands: only pedestrians inside
/// this box react.  Typically placed directly downstream of the spawn area.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SpawnArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Reaction-model parameters forwarded verbatim to the engine at the
/// `init_control` handshake.  Field names match the engine's JSON contract.
///
/// The Bernoulli parameter scales how certainly pedestrians follow a
/// redirection; it is pass-through configuration, never consumed by the
/// control core itself.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ReactionModel {
    #[serde(rename = "isBernoulliParameterCertain")]
    pub is_bernoulli_parameter_certain: bool,
    #[serde(rename = "BernoulliParameter")]
    pub bernoulli_parameter: f64,
}

impl Default for ReactionModel {
    /// Deterministic redirection: every pedestrian complies.
    fn default() -> Self {
        Self {
            is_bernoulli_parameter_certain: true,
            bernoulli_parameter: 1.0,
        }
    }
}

impl ReactionModel {
    /// A reduced-certainty model with the given compliance probability.
    pub fn with_probability(p: f64) -> Self {
        Self {
            is_bernoulli_parameter_certain: false,
            bernoulli_parameter: p,
        }
    }
}

/// Top-level configuration for one control run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Monitored corridors, in canonical index order.
    pub corridors: Vec<CorridorSpec>,

    /// Seconds between density measurements.
    pub sensing_period_s: f64,

    /// Seconds between re-planning/emission events.  Must be an exact
    /// integer multiple of `sensing_period_s`.
    pub control_period_s: f64,

    /// Name of the control model registered with the engine.
    pub control_model_name: String,

    /// Type of the control model registered with the engine.
    pub control_model_type: String,

    /// First command sequence number; subsequent commands increment by one.
    pub initial_command_id: u32,

    /// Reaction-model handshake parameters.
    pub reaction_model: ReactionModel,

    /// Optional spatial filter attached to every outbound command.
    pub spawn_area: Option<SpawnArea>,

    /// Where this run's exports and the externally persisted density file
    /// live.  Explicit per-run state, never a process-wide working directory.
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Engine-side defaults of the route-choice control model.
    pub const DEFAULT_MODEL_NAME: &'static str = "distributePeds";
    pub const DEFAULT_MODEL_TYPE: &'static str = "RouteChoice";
    pub const DEFAULT_INITIAL_COMMAND_ID: u32 = 111;
    pub const DEFAULT_SENSING_PERIOD_S: f64 = 0.4;
    pub const DEFAULT_CONTROL_PERIOD_S: f64 = 10.0;

    /// Config with the route-choice defaults for the given corridors.
    pub fn route_choice(corridors: Vec<CorridorSpec>, output_dir: PathBuf) -> Self {
        Self {
            corridors,
            sensing_period_s: Self::DEFAULT_SENSING_PERIOD_S,
            control_period_s: Self::DEFAULT_CONTROL_PERIOD_S,
            control_model_name: Self::DEFAULT_MODEL_NAME.to_string(),
            control_model_type: Self::DEFAULT_MODEL_TYPE.to_string(),
            initial_command_id: Self::DEFAULT_INITIAL_COMMAND_ID,
            reaction_model: ReactionModel::default(),
            spawn_area: None,
            output_dir,
        }
    }

    /// Number of monitored corridors.
    #[inline]
    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }

    /// Routing targets in corridor order.
    pub fn target_ids(&self) -> Vec<TargetId> {
        self.corridors.iter().map(|c| c.target).collect()
    }

    /// Density-export processor ids in corridor order.
    pub fn processor_ids(&self) -> Vec<u32> {
        self.corridors.iter().map(|c| c.processor_id).collect()
    }

    /// Validate the config and derive the sensing/control grid.
    pub fn grid(&self) -> GcResult<SamplingGrid> {
        if self.corridors.is_empty() {
            return Err(GcError::Config(
                "at least one corridor must be configured".to_string(),
            ));
        }
        SamplingGrid::new(self.sensing_period_s, self.control_period_s)
    }
}
