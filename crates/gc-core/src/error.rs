//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `GcError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::RegionId;

/// The top-level error type for `gc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error("region {0} not found in scenario")]
    RegionNotFound(RegionId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gc-*` crates.
pub type GcResult<T> = Result<T, GcError>;
