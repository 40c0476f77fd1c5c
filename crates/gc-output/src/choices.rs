//! The corridor-choice export.
//!
//! Comma-separated, one row per control tick:
//!
//! ```csv
//! timeStep,OldCorridor,NewCorridor
//! 0.4,0,2
//! 10.4,2,4
//! ```
//!
//! `timeStep` holds simulated seconds — the historical export format names
//! the column this way, and downstream tooling keys on it.

use std::io::Write;
use std::path::Path;

use gc_policy::CorridorChoice;

use crate::OutputResult;

/// Default file name inside a run's output directory.
pub const CHOICE_EXPORT_FILE: &str = "path_choice.txt";

/// Write the choice audit trail to `path`.
pub fn write_corridor_choices(path: &Path, choices: &[CorridorChoice]) -> OutputResult<()> {
    let file = std::fs::File::create(path)?;
    write_corridor_choices_to(file, choices)
}

/// Like [`write_corridor_choices`] but writes to any `Write` sink.
pub fn write_corridor_choices_to<W: Write>(
    writer: W,
    choices: &[CorridorChoice],
) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["timeStep", "OldCorridor", "NewCorridor"])?;
    for choice in choices {
        csv_writer.write_record(&[
            choice.sim_time_s.to_string(),
            choice.old_corridor.to_string(),
            choice.new_corridor.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
