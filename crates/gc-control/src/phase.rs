//! Run lifecycle phases.

use std::fmt;

/// Where a run currently is in its lifecycle.
///
/// Transitions are strictly forward; calling a hook from the wrong phase is
/// a [`ControlError::Phase`][crate::ControlError::Phase], never a panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunPhase {
    /// Constructed, engine handshake not yet performed.
    Uninitialized,
    /// Handshake done, regions loaded, seed measurement taken.
    Initialized,
    /// At least one per-step callback processed.
    Running,
    /// Histories handed off; no further hooks accepted.
    Finalized,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Uninitialized => "uninitialized",
            RunPhase::Initialized => "initialized",
            RunPhase::Running => "running",
            RunPhase::Finalized => "finalized",
        };
        f.write_str(name)
    }
}
