//! The engine seam: per-step state snapshots and the control channel.

use gc_core::{Point, RegionId};

use crate::ControlResult;

/// One tracked pedestrian at the moment of a callback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pedestrian {
    pub id: u32,
    pub position: Point,
}

/// Read-only snapshot of the simulation state handed to each lifecycle hook.
#[derive(Clone, Debug, Default)]
pub struct SimState {
    pub pedestrians: Vec<Pedestrian>,
}

impl SimState {
    pub fn new(pedestrians: Vec<Pedestrian>) -> Self {
        Self { pedestrians }
    }

    /// Positions only, in pedestrian order — what the density sampler counts.
    pub fn positions(&self) -> Vec<Point> {
        self.pedestrians.iter().map(|p| p.position).collect()
    }
}

/// The controller's view of the engine's control channel.
///
/// Implementations wrap the actual transport (a TraCI-like TCP client in
/// production, an in-memory script in tests and demos).  All methods are
/// synchronous; the command channel is a write-only, ordered sink with no
/// acknowledgment wait — hand-off returns as soon as the message is queued.
pub trait EngineConnection {
    /// Vertex ring of a named polygon in the scenario, queried once at init
    /// for every configured measurement area.
    fn region_shape(&mut self, region: RegionId) -> ControlResult<Vec<Point>>;

    /// Ask the engine to invoke the next per-step callback at the given
    /// absolute simulated time.
    fn schedule_next_call(&mut self, sim_time_s: f64) -> ControlResult<()>;

    /// Register the control model and forward the reaction-model parameters.
    /// Called exactly once, from `on_init`.
    fn init_control(
        &mut self,
        model_name: &str,
        model_type: &str,
        reaction_model_json: &str,
    ) -> ControlResult<()>;

    /// Hand a serialized redirection command to the control channel.
    fn send_control(&mut self, model_name: &str, message: &str) -> ControlResult<()>;
}
