//! The `RunController` struct and its lifecycle hooks.

use gc_command::CommandEmitter;
use gc_core::{Polygon, RunConfig, SamplingGrid};
use gc_measure::{DensityHistory, DensitySampler};
use gc_policy::{CorridorChoice, SelectionPolicy};

use crate::{ControlError, ControlResult, EngineConnection, RunPhase, SimState};

/// Everything a finished run hands to export and post-hoc validation.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// One density sample per sensing tick, seed and trailing measurement
    /// included.
    pub densities: DensityHistory,
    /// One before/after record per control tick.
    pub choices: Vec<CorridorChoice>,
}

/// The density-triggered corridor-selection controller for one run.
///
/// `RunController<C>` owns all per-run state — current corridor, callback
/// schedule, density history, choice audit trail — and a connection `C` to
/// the engine.  The engine invokes [`on_init`][Self::on_init] once, then
/// [`on_step`][Self::on_step] at every sensing tick it was asked to schedule,
/// and the embedding application calls [`finalize`][Self::finalize] after the
/// simulation ends.
///
/// On each step the controller always measures; at control-tick boundaries
/// (one sensing period past each control-period multiple) it additionally
/// re-plans via its [`SelectionPolicy`] and emits a redirection command —
/// unconditionally, even when the chosen corridor is unchanged, so the
/// command cadence stays deterministic for downstream auditing.
pub struct RunController<C: EngineConnection> {
    config: RunConfig,
    grid: SamplingGrid,
    policy: SelectionPolicy,
    conn: C,

    phase: RunPhase,
    /// Built at init from engine-provided geometry; `None` before that.
    sampler: Option<DensitySampler>,
    emitter: CommandEmitter,

    /// Current corridor recommendation, always a valid corridor index.
    current: usize,
    /// Sim time of the most recent executed callback.
    last_callback_s: f64,

    history: DensityHistory,
    choices: Vec<CorridorChoice>,
}

impl<C: EngineConnection> RunController<C> {
    /// Validate the configuration and construct an uninitialized controller.
    ///
    /// Fails fast on a control period that is not an exact multiple of the
    /// sensing period, or an empty corridor list.
    pub fn new(config: RunConfig, policy: SelectionPolicy, conn: C) -> ControlResult<Self> {
        let grid = config.grid()?;
        let emitter = CommandEmitter::new(
            config.target_ids(),
            config.spawn_area,
            config.initial_command_id,
        );

        Ok(Self {
            config,
            grid,
            policy,
            conn,
            phase: RunPhase::Uninitialized,
            sampler: None,
            emitter,
            current: 0,
            last_callback_s: 0.0,
            history: DensityHistory::new(),
            choices: Vec::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[inline]
    pub fn current_corridor(&self) -> usize {
        self.current
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The engine connection (e.g. to inspect a recording mock after a run).
    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn history(&self) -> &DensityHistory {
        &self.history
    }

    pub fn choices(&self) -> &[CorridorChoice] {
        &self.choices
    }

    // ── Lifecycle hooks ───────────────────────────────────────────────────

    /// Engine init callback: handshake, region load, seed measurement.
    ///
    /// Registers the control model (forwarding the reaction-model blob),
    /// loads every configured measurement area's polygon, resets the
    /// histories, records the seed density sample at `sim_time_s`, and
    /// schedules the first per-step callback one sensing period later.
    pub fn on_init(&mut self, sim_time_s: f64, state: &SimState) -> ControlResult<()> {
        if self.phase != RunPhase::Uninitialized {
            return Err(ControlError::Phase { operation: "on_init", phase: self.phase });
        }

        let reaction_json = serde_json::to_string(&self.config.reaction_model)?;
        self.conn.init_control(
            &self.config.control_model_name,
            &self.config.control_model_type,
            &reaction_json,
        )?;

        let mut regions = Vec::with_capacity(self.config.corridor_count());
        for spec in &self.config.corridors {
            let ring = self.conn.region_shape(spec.measurement_area)?;
            let polygon = Polygon::new(ring).map_err(ControlError::Core)?;
            regions.push((spec.measurement_area, polygon));
        }
        let sampler = DensitySampler::new(regions);

        self.history = DensityHistory::new();
        self.choices.clear();
        self.current = 0;

        // Seed measurement, before the first control tick can fire.
        let time_step = self.grid.time_step(sim_time_s);
        sampler.sample_into(&mut self.history, time_step, &state.positions());
        self.sampler = Some(sampler);

        self.last_callback_s = sim_time_s;
        self.conn
            .schedule_next_call(sim_time_s + self.grid.sensing_period_s())?;

        log::info!(
            "control run initialized: {} corridors, {}, policy {}",
            self.config.corridor_count(),
            self.grid,
            self.policy,
        );
        self.phase = RunPhase::Initialized;
        Ok(())
    }

    /// Engine per-step callback at simulated time `sim_time_s`.
    ///
    /// Always: measure and schedule the next callback.  At control ticks:
    /// re-plan, record the [`CorridorChoice`], and emit the redirection
    /// command.
    pub fn on_step(&mut self, sim_time_s: f64, state: &SimState) -> ControlResult<()> {
        if self.phase != RunPhase::Initialized && self.phase != RunPhase::Running {
            return Err(ControlError::Phase { operation: "on_step", phase: self.phase });
        }
        let sampler = self
            .sampler
            .as_ref()
            .ok_or(ControlError::Phase { operation: "on_step", phase: self.phase })?;

        let time_step = self.grid.time_step(sim_time_s);
        sampler.sample_into(&mut self.history, time_step, &state.positions());

        // Sensing and control intervals differ; only re-plan on the control
        // grid (offset one sensing period past each control-period multiple).
        if self.grid.is_control_step(sim_time_s) {
            self.replan_and_emit(sim_time_s)?;
        }

        self.last_callback_s = sim_time_s;
        self.conn
            .schedule_next_call(sim_time_s + self.grid.sensing_period_s())?;
        self.phase = RunPhase::Running;
        Ok(())
    }

    /// Close the run: one trailing measurement, then hand over the data.
    ///
    /// The extra sample at (last callback + one sensing period) closes the
    /// time series so it lines up with the externally persisted density
    /// export row for row.
    pub fn finalize(&mut self, state: &SimState) -> ControlResult<RunReport> {
        if self.phase != RunPhase::Initialized && self.phase != RunPhase::Running {
            return Err(ControlError::Phase { operation: "finalize", phase: self.phase });
        }
        let sampler = self
            .sampler
            .as_ref()
            .ok_or(ControlError::Phase { operation: "finalize", phase: self.phase })?;

        let closing_time_s = self.last_callback_s + self.grid.sensing_period_s();
        let time_step = self.grid.time_step(closing_time_s);
        sampler.sample_into(&mut self.history, time_step, &state.positions());

        self.phase = RunPhase::Finalized;
        log::info!(
            "control run finalized: {} density samples, {} corridor decisions",
            self.history.len(),
            self.choices.len(),
        );

        Ok(RunReport {
            densities: std::mem::take(&mut self.history),
            choices: std::mem::take(&mut self.choices),
        })
    }

    // ── Control tick ──────────────────────────────────────────────────────

    fn replan_and_emit(&mut self, sim_time_s: f64) -> ControlResult<()> {
        let old = self.current;
        let new = self.policy.select(
            old,
            &self.history,
            self.grid.steps_per_control(),
            self.config.corridor_count(),
        )?;
        self.current = new;
        self.choices.push(CorridorChoice {
            sim_time_s,
            old_corridor: old,
            new_corridor: new,
        });

        let command = self.emitter.redirect_to(new)?;
        log::info!(
            "t = {sim_time_s} s: corridor {old} -> {new} (target {}, command {})",
            self.config.corridors[new].target,
            command.command_id,
        );

        let message = command.encode()?;
        self.conn
            .send_control(&self.config.control_model_name, &message)
    }
}
