//! In-memory stand-ins for the external collaborators: the simulation
//! engine's control channel, a synthetic crowd, and the engine-side density
//! data processor.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gc_command::RedirectionCommand;
use gc_control::{ControlError, ControlResult, EngineConnection, Pedestrian, SimState};
use gc_core::{Point, Polygon, RegionId, SamplingGrid};

// ── Scripted engine ───────────────────────────────────────────────────────────

/// Control-channel stand-in.  Serves scenario geometry, records every
/// scheduled callback and sent command, and tracks the currently recommended
/// corridor by decoding outbound commands — the way the live engine's
/// route-choice model would.
pub struct ScriptedEngine {
    shapes: HashMap<u32, Vec<Point>>,
    /// Next callback time requested by the controller.
    pub next_call_s: f64,
    /// Corridor index currently recommended to pedestrians.
    pub recommended: Option<usize>,
    pub commands_sent: usize,
}

impl ScriptedEngine {
    pub fn new(shapes: HashMap<u32, Vec<Point>>) -> Self {
        Self {
            shapes,
            next_call_s: 0.0,
            recommended: None,
            commands_sent: 0,
        }
    }
}

impl EngineConnection for ScriptedEngine {
    fn region_shape(&mut self, region: RegionId) -> ControlResult<Vec<Point>> {
        self.shapes
            .get(&region.0)
            .cloned()
            .ok_or(ControlError::Core(gc_core::GcError::RegionNotFound(region)))
    }

    fn schedule_next_call(&mut self, sim_time_s: f64) -> ControlResult<()> {
        self.next_call_s = sim_time_s;
        Ok(())
    }

    fn init_control(
        &mut self,
        _model_name: &str,
        _model_type: &str,
        _reaction_model_json: &str,
    ) -> ControlResult<()> {
        Ok(())
    }

    fn send_control(&mut self, _model_name: &str, message: &str) -> ControlResult<()> {
        let command = RedirectionCommand::decode(message)
            .map_err(|e| ControlError::Connection(format!("undecodable command: {e}")))?;
        self.recommended = command
            .command
            .probability
            .iter()
            .position(|&p| p == 1.0);
        self.commands_sent += 1;
        Ok(())
    }
}

// ── Synthetic crowd ───────────────────────────────────────────────────────────

/// A toy crowd: per-corridor occupancy that grows where pedestrians are
/// routed and drains everywhere else.  Deterministic for a given seed.
pub struct CrowdModel {
    corridors: Vec<Polygon>,
    occupancy: Vec<f64>,
    rng: SmallRng,
}

/// Pedestrians funneled into the recommended corridor per sensing step.
const INFLOW_PER_STEP: f64 = 1.5;
/// Fraction of each corridor's crowd remaining after one sensing step.
const DRAIN_FACTOR: f64 = 0.9;

impl CrowdModel {
    pub fn new(corridors: Vec<Polygon>, seed: u64) -> Self {
        // Deliberately unbalanced initial load so the greedy policy has
        // something to react to.
        let occupancy = (0..corridors.len())
            .map(|i| 2.0 + 2.0 * (corridors.len() - i) as f64)
            .collect();
        Self {
            corridors,
            occupancy,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Advance one sensing step: inflow into the recommended corridor, decay
    /// everywhere.
    pub fn advance(&mut self, recommended: usize) {
        for occ in &mut self.occupancy {
            *occ *= DRAIN_FACTOR;
        }
        self.occupancy[recommended] += INFLOW_PER_STEP;
    }

    /// Snapshot the crowd as pedestrian positions scattered strictly inside
    /// their corridors.
    pub fn state(&mut self) -> SimState {
        let mut pedestrians = Vec::new();
        let mut id = 0;
        for (polygon, &occ) in self.corridors.iter().zip(&self.occupancy) {
            for _ in 0..occ.round() as usize {
                pedestrians.push(Pedestrian {
                    id,
                    position: random_point_inside(polygon, &mut self.rng),
                });
                id += 1;
            }
        }
        SimState::new(pedestrians)
    }
}

/// Rejection-sample a point strictly inside the polygon.
fn random_point_inside(polygon: &Polygon, rng: &mut SmallRng) -> Point {
    let (min, max) = bounding_box(polygon);
    loop {
        let p = Point::new(
            rng.gen_range(min.x..max.x),
            rng.gen_range(min.y..max.y),
        );
        if polygon.contains(p) {
            return p;
        }
    }
}

fn bounding_box(polygon: &Polygon) -> (Point, Point) {
    let vs = polygon.vertices();
    let mut min = vs[0];
    let mut max = vs[0];
    for v in vs {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    (min, max)
}

// ── Density data processor ────────────────────────────────────────────────────

/// Emulates the engine-side `areaDensityCountingNormed` processors: counts
/// the same crowd over the same polygons, independently of the controller,
/// and persists the whitespace-delimited export the validation step reads.
pub struct DensityProcessor {
    polygons: Vec<Polygon>,
    processor_ids: Vec<u32>,
    grid: SamplingGrid,
    rows: Vec<(u64, Vec<f64>)>,
}

impl DensityProcessor {
    pub fn new(polygons: Vec<Polygon>, processor_ids: Vec<u32>, grid: SamplingGrid) -> Self {
        Self {
            polygons,
            processor_ids,
            grid,
            rows: Vec::new(),
        }
    }

    pub fn record(&mut self, sim_time_s: f64, state: &SimState) {
        let densities = self
            .polygons
            .iter()
            .map(|polygon| {
                let count = state
                    .pedestrians
                    .iter()
                    .filter(|p| polygon.contains(p.position))
                    .count();
                count as f64 / polygon.area()
            })
            .collect();
        self.rows.push((self.grid.time_step(sim_time_s), densities));
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let mut file = std::fs::File::create(path)?;
        write!(file, "timeStep")?;
        for id in &self.processor_ids {
            write!(file, " areaDensityCountingNormed-PID{id}")?;
        }
        writeln!(file)?;
        for (time_step, densities) in &self.rows {
            write!(file, "{time_step}")?;
            for d in densities {
                write!(file, " {d}")?;
            }
            writeln!(file)?;
        }
        Ok(())
    }
}
