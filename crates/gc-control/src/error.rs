//! Error types for gc-control.

use thiserror::Error;

use gc_command::CommandError;
use gc_core::GcError;
use gc_policy::PolicyError;

use crate::RunPhase;

/// Errors surfaced by the run controller and the engine connection.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("{operation} called in phase \"{phase}\"")]
    Phase {
        operation: &'static str,
        phase: RunPhase,
    },

    #[error(transparent)]
    Core(#[from] GcError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("reaction-model codec error: {0}")]
    Handshake(#[from] serde_json::Error),

    #[error("engine connection error: {0}")]
    Connection(String),
}

/// Shorthand result type for gc-control.
pub type ControlResult<T> = Result<T, ControlError>;
