//! The per-control-tick audit record.

/// One corridor decision: simulated time plus the corridor index before and
/// after re-planning.  Appended once per control tick; exported post-run as
/// the `timeStep,OldCorridor,NewCorridor` table.
///
/// `sim_time_s` is simulated seconds, stored under the `timeStep` header in
/// the export for compatibility with the historical output format.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CorridorChoice {
    pub sim_time_s: f64,
    pub old_corridor: usize,
    pub new_corridor: usize,
}
