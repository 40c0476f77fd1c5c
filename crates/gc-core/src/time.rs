//! The sensing/control time grid.
//!
//! # Design
//!
//! The engine reports simulated time as `f64` seconds, but all cadence
//! decisions are made on an integer *sensing-step index*:
//!
//!   step k  ≘  sim time k × sensing_period
//!
//! so no floating-point modulo is ever trusted.  The control period must be
//! an exact integer multiple of the sensing period — this is a configuration
//! invariant checked once at construction, not a runtime computable.
//!
//! Export time steps are 1-based: sim time 0.0 s is `timeStep` 1, matching
//! the external density processor's convention.

use crate::{GcError, GcResult};

/// Tolerance when checking the control/sensing ratio for integrality.
const RATIO_EPS: f64 = 1e-9;

/// Step arithmetic for one run's sensing and control periods.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplingGrid {
    sensing_period_s: f64,
    control_period_s: f64,
    /// Sensing steps per control window: control_period ÷ sensing_period.
    steps_per_control: u32,
}

impl SamplingGrid {
    /// Validate the two periods and derive the steps-per-control ratio.
    ///
    /// Fails fast if either period is non-positive or the ratio is not an
    /// exact integer.
    pub fn new(sensing_period_s: f64, control_period_s: f64) -> GcResult<Self> {
        if sensing_period_s <= 0.0 || control_period_s <= 0.0 {
            return Err(GcError::Config(format!(
                "periods must be positive (sensing {sensing_period_s} s, control {control_period_s} s)"
            )));
        }

        let ratio = control_period_s / sensing_period_s;
        if (ratio - ratio.round()).abs() > RATIO_EPS || ratio < 1.0 - RATIO_EPS {
            return Err(GcError::Config(format!(
                "control period {control_period_s} s is not an integer multiple \
                 of sensing period {sensing_period_s} s"
            )));
        }

        Ok(Self {
            sensing_period_s,
            control_period_s,
            steps_per_control: ratio.round() as u32,
        })
    }

    #[inline]
    pub fn sensing_period_s(&self) -> f64 {
        self.sensing_period_s
    }

    #[inline]
    pub fn control_period_s(&self) -> f64 {
        self.control_period_s
    }

    /// Sensing steps in one control window (the greedy policy's averaging
    /// window length).
    #[inline]
    pub fn steps_per_control(&self) -> usize {
        self.steps_per_control as usize
    }

    /// Nearest sensing-step index for a reported sim time (0 at t = 0).
    #[inline]
    pub fn step_index(&self, sim_time_s: f64) -> u64 {
        (sim_time_s / self.sensing_period_s).round() as u64
    }

    /// 1-based export time step: sim time 0.0 s maps to time step 1.
    #[inline]
    pub fn time_step(&self, sim_time_s: f64) -> u64 {
        self.step_index(sim_time_s) + 1
    }

    /// Does a step at `sim_time_s` fall on a control-tick boundary?
    ///
    /// Control ticks sit on the sensing grid offset by one sensing period:
    /// steps k = 1, 1 + N, 1 + 2N, … where N = steps_per_control.  This is
    /// the integer form of `(T − sensing) mod control == 0`.
    pub fn is_control_step(&self, sim_time_s: f64) -> bool {
        let k = self.step_index(sim_time_s);
        k >= 1 && (k - 1) % self.steps_per_control as u64 == 0
    }
}

impl std::fmt::Display for SamplingGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sense every {} s, control every {} s ({} steps)",
            self.sensing_period_s, self.control_period_s, self.steps_per_control
        )
    }
}
