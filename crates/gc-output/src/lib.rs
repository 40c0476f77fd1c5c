//! `gc-output` — run exports and post-hoc consistency validation.
//!
//! Two artifacts per run:
//!
//! | File              | Producer        | Role here                         |
//! |-------------------|-----------------|-----------------------------------|
//! | `path_choice.txt` | this crate      | corridor-choice audit export (CSV)|
//! | `densities.txt`   | external engine | read back and checked against the |
//! |                   | data processor  | in-memory density history         |
//!
//! The density check runs at finalize time, never during the run.  A
//! divergence confined to the very last row is downgraded to a warning
//! (simulated-time rounding at the final step is a known effect); anything
//! earlier is a hard validation error.

pub mod choices;
pub mod density;
pub mod error;


pub use choices::{write_corridor_choices, write_corridor_choices_to, CHOICE_EXPORT_FILE};
pub use density::{validate_density_export, validate_density_reader, DENSITY_EXPORT_FILE};
pub use error::{OutputError, OutputResult};
