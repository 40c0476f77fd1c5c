//! route_choice — scripted-engine demo for the guided-crowds controller.
//!
//! Five parallel corridors connect a spawn area to a destination.  A toy
//! crowd model funnels pedestrians into whichever corridor is currently
//! recommended; the controller measures corridor densities every sensing
//! tick and re-plans every control tick.  Each selection policy runs over
//! the same scenario, writing its exports to its own output directory and
//! finishing with the density-export validation a real run performs.

mod engine;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use gc_control::RunController;
use gc_core::{CorridorSpec, Point, Polygon, RegionId, RunConfig, SpawnArea, TargetId};
use gc_output::{
    validate_density_export, write_corridor_choices, CHOICE_EXPORT_FILE, DENSITY_EXPORT_FILE,
};
use gc_policy::SelectionPolicy;

use engine::{CrowdModel, DensityProcessor, ScriptedEngine};

// ── Constants ─────────────────────────────────────────────────────────────────

const CORRIDOR_COUNT: u32 = 5;
const SEED: u64 = 42;
const HORIZON_S: f64 = 100.0; // 250 sensing steps, 10 control ticks

// ── Scenario geometry ─────────────────────────────────────────────────────────

/// Corridor polygons: 2 m × 15 m rectangles side by side, 2 m apart.
fn corridor_polygon(i: u32) -> Result<Polygon> {
    let x = 10.0 + i as f64 * 4.0;
    Polygon::rectangle(x, 10.0, 2.0, 15.0).context("corridor geometry")
}

fn corridor_specs() -> Vec<CorridorSpec> {
    (0..CORRIDOR_COUNT)
        .map(|i| CorridorSpec {
            measurement_area: RegionId(i + 1),
            processor_id: 14 + i,
            target: TargetId((i + 1) * 10 + 1),
        })
        .collect()
}

// ── One run ───────────────────────────────────────────────────────────────────

fn run_policy(policy: SelectionPolicy) -> Result<()> {
    let output_dir = PathBuf::from(format!("output/route_choice_{policy}"));
    std::fs::create_dir_all(&output_dir)?;

    let mut config = RunConfig::route_choice(corridor_specs(), output_dir.clone());
    config.spawn_area = Some(SpawnArea { x: 0.5, y: 0.5, width: 5.0, height: 15.0 });
    let grid = config.grid()?;

    // Scenario geometry, shared by engine, crowd, and density processor.
    let mut shapes = HashMap::new();
    let mut polygons = Vec::new();
    for (i, spec) in config.corridors.iter().enumerate() {
        let polygon = corridor_polygon(i as u32)?;
        shapes.insert(spec.measurement_area.0, ring_of(&polygon));
        polygons.push(polygon);
    }

    let mut crowd = CrowdModel::new(polygons.clone(), SEED);
    let mut processor = DensityProcessor::new(polygons, config.processor_ids(), grid);
    let processor_ids = config.processor_ids();

    let mut ctrl = RunController::new(config, policy, ScriptedEngine::new(shapes))?;

    // Init at t = 0: handshake, seed measurement, first callback request.
    let state = crowd.state();
    processor.record(0.0, &state);
    ctrl.on_init(0.0, &state)?;

    // The engine's event loop: call back whenever the controller asked.
    let mut t = ctrl.connection().next_call_s;
    while t <= HORIZON_S {
        let recommended = ctrl.connection().recommended.unwrap_or(0);
        crowd.advance(recommended);
        let state = crowd.state();
        processor.record(t, &state);
        ctrl.on_step(t, &state)?;
        t = ctrl.connection().next_call_s;
    }

    // The processor also covers the controller's trailing measurement.
    let state = crowd.state();
    processor.record(t, &state);
    let commands_sent = ctrl.connection().commands_sent;
    let report = ctrl.finalize(&state)?;

    // Exports, then the post-hoc consistency check against them.
    let density_path = output_dir.join(DENSITY_EXPORT_FILE);
    processor.write(&density_path)?;
    write_corridor_choices(&output_dir.join(CHOICE_EXPORT_FILE), &report.choices)?;
    validate_density_export(&report.densities, &processor_ids, &density_path)
        .context("density history diverges from the persisted export")?;

    // Summary.
    println!("policy {policy}:");
    println!("  density samples : {}", report.densities.len());
    println!("  control ticks   : {}", report.choices.len());
    println!("  commands sent   : {commands_sent}");
    let final_densities = &report.densities.last().context("empty history")?.densities;
    let pretty: Vec<String> = final_densities.iter().map(|d| format!("{d:.3}")).collect();
    println!("  final densities : [{}]", pretty.join(", "));
    println!("  exports         : {}", output_dir.display());
    println!();
    Ok(())
}

fn ring_of(polygon: &Polygon) -> Vec<Point> {
    polygon.vertices().to_vec()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== route_choice — guided-crowds controller demo ===");
    println!(
        "Corridors: {CORRIDOR_COUNT}  |  Horizon: {HORIZON_S} s  |  Seed: {SEED}"
    );
    println!();

    for policy in [
        SelectionPolicy::Fixed,
        SelectionPolicy::RoundRobin,
        SelectionPolicy::GreedyMinDensity,
    ] {
        run_policy(policy)?;
    }

    Ok(())
}
