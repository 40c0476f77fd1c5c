//! `gc-policy` — corridor selection.
//!
//! The three historical controller flavours (no control, open loop, closed
//! loop) differed in exactly one decision: which corridor to recommend next.
//! They are expressed here as a closed tagged union rather than an override
//! chain — the run controller is one state machine parameterized by a
//! [`SelectionPolicy`] value.

pub mod choice;
pub mod error;
pub mod policy;

#[cfg(test)]
mod tests;

pub use choice::CorridorChoice;
pub use error::{PolicyError, PolicyResult};
pub use policy::SelectionPolicy;
