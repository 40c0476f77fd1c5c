//! `gc-core` — foundational types for the guided-crowds control framework.
//!
//! This crate is a dependency of every other `gc-*` crate.  It intentionally
//! has no `gc-*` dependencies and minimal external ones (only `serde` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `RegionId`, `TargetId`                                  |
//! | [`geo`]    | `Point`, `Polygon` (area, strict containment)           |
//! | [`time`]   | `SamplingGrid` — sensing/control step arithmetic        |
//! | [`config`] | `RunConfig`, `CorridorSpec`, `ReactionModel`, `SpawnArea` |
//! | [`error`]  | `GcError`, `GcResult`                                   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CorridorSpec, ReactionModel, RunConfig, SpawnArea};
pub use error::{GcError, GcResult};
pub use geo::{Point, Polygon};
pub use ids::{RegionId, TargetId};
pub use time::SamplingGrid;
