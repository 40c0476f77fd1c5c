//! `gc-command` — redirection commands for the engine's control channel.
//!
//! The emitter builds the structured command document and serializes it to
//! JSON; it performs no network I/O.  Hand-off to the engine is the run
//! controller's job, through its connection seam.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "commandId": 111,
//!   "command": { "targetIds": [11, 21, 31, 41, 51],
//!                "probability": [0.0, 1.0, 0.0, 0.0, 0.0] },
//!   "space": { "x": 0.5, "y": 0.5, "width": 5.0, "height": 15.0 }
//! }
//! ```
//!
//! `space` is optional; without it the command applies everywhere.

pub mod emitter;
pub mod error;
pub mod wire;

#[cfg(test)]
mod tests;

pub use emitter::CommandEmitter;
pub use error::{CommandError, CommandResult};
pub use wire::{RedirectionCommand, RouteChoiceCommand};
