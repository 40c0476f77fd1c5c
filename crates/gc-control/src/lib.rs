//! `gc-control` — the run-controller state machine.
//!
//! The external simulation engine drives a cooperative, single-threaded event
//! loop and invokes the controller's lifecycle hooks synchronously:
//!
//! ```text
//! Uninitialized ──on_init──▶ Initialized ──on_step──▶ Running ─┐
//!                                              ▲               │ on_step
//!                                              └───────────────┘
//!                            Running/Initialized ──finalize──▶ Finalized
//! ```
//!
//! Every hook is a total, synchronous function; nothing blocks, suspends, or
//! re-enters.  The engine seam is the [`EngineConnection`] trait — region
//! geometry and callback scheduling inbound, the control handshake and
//! serialized commands outbound.

pub mod connection;
pub mod controller;
pub mod error;
pub mod phase;


pub use connection::{EngineConnection, Pedestrian, SimState};
pub use controller::{RunController, RunReport};
pub use error::{ControlError, ControlResult};
pub use phase::RunPhase;
