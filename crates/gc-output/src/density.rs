//! Post-hoc validation of the persisted density export.
//!
//! The engine-side data processor writes a whitespace-delimited table: a
//! `timeStep` index column followed by one `areaDensityCountingNormed-PID<id>`
//! column per corridor.  Column order in the file is not guaranteed — both
//! sides are sorted by column name before comparison, and values are rounded
//! to 8 decimals, matching the historical comparison procedure.

use std::io::Read;
use std::path::Path;

use gc_measure::DensityHistory;

use crate::{OutputError, OutputResult};

/// File name of the engine-side density export inside a run's output
/// directory.
pub const DENSITY_EXPORT_FILE: &str = "densities.txt";

/// Comparison precision: decimal digits kept on both sides.
const PRECISION_DIGITS: i32 = 8;

/// Column-name prefix used by the engine's normed density-counting processor.
const COLUMN_PREFIX: &str = "areaDensityCountingNormed-PID";

/// Validate the in-memory history against the persisted export at `path`.
///
/// `processor_ids` are the corridor's data-processor ids in corridor order
/// (the order of each sample's density vector).
///
/// A divergence confined to the last row is logged at `warn` and tolerated;
/// any other divergence is an error.
pub fn validate_density_export(
    history: &DensityHistory,
    processor_ids: &[u32],
    path: &Path,
) -> OutputResult<()> {
    let file = std::fs::File::open(path)?;
    validate_density_reader(history, processor_ids, file)
}

/// Like [`validate_density_export`] but reads from any `Read` source.
pub fn validate_density_reader<R: Read>(
    history: &DensityHistory,
    processor_ids: &[u32],
    reader: R,
) -> OutputResult<()> {
    let expected = expected_table(history, processor_ids);
    let persisted = read_export(reader)?;

    if persisted.columns != expected.columns {
        return Err(OutputError::ColumnMismatch {
            expected: expected.columns,
            got: persisted.columns,
        });
    }
    if persisted.rows.len() != expected.rows.len() {
        return Err(OutputError::RowCountMismatch {
            expected: expected.rows.len(),
            got: persisted.rows.len(),
        });
    }

    let row_count = expected.rows.len();
    for (row_idx, (ours, theirs)) in expected.rows.iter().zip(&persisted.rows).enumerate() {
        let last_row = row_idx + 1 == row_count;
        if ours.time_step != theirs.time_step {
            // Simulated time may differ for the very last step, shifting the
            // final row's index as well as its values.
            if last_row {
                log::warn!(
                    "density export diverges in the last row only \
                     (timeStep recorded {}, persisted {}) — skipped",
                    ours.time_step,
                    theirs.time_step,
                );
                return Ok(());
            }
            return Err(OutputError::Parse(format!(
                "timeStep index diverges at row {}: recorded {}, persisted {}",
                row_idx, ours.time_step, theirs.time_step
            )));
        }
        for (col_idx, (&a, &b)) in ours.values.iter().zip(&theirs.values).enumerate() {
            if (a - b).abs() > 1e-9 {
                if last_row {
                    log::warn!(
                        "density export diverges in the last row only \
                         (timeStep {}, column {}): recorded {a}, persisted {b} — skipped",
                        ours.time_step,
                        expected.columns[col_idx],
                    );
                    return Ok(());
                }
                return Err(OutputError::DensityMismatch {
                    time_step: ours.time_step,
                    column: expected.columns[col_idx].clone(),
                    recorded: a,
                    persisted: b,
                });
            }
        }
    }
    Ok(())
}

// ── Table plumbing ────────────────────────────────────────────────────────────

struct Row {
    time_step: u64,
    values: Vec<f64>,
}

struct Table {
    /// Density column names, sorted.
    columns: Vec<String>,
    rows: Vec<Row>,
}

fn round_to_precision(v: f64) -> f64 {
    let scale = 10f64.powi(PRECISION_DIGITS);
    (v * scale).round() / scale
}

/// Project the in-memory history into a name-sorted, rounded table.
fn expected_table(history: &DensityHistory, processor_ids: &[u32]) -> Table {
    let mut order: Vec<usize> = (0..processor_ids.len()).collect();
    let names: Vec<String> = processor_ids
        .iter()
        .map(|id| format!("{COLUMN_PREFIX}{id}"))
        .collect();
    order.sort_by(|&a, &b| names[a].cmp(&names[b]));

    let columns = order.iter().map(|&i| names[i].clone()).collect();
    let rows = history
        .samples()
        .iter()
        .map(|sample| Row {
            time_step: sample.time_step,
            values: order
                .iter()
                .map(|&i| round_to_precision(sample.densities[i]))
                .collect(),
        })
        .collect();

    Table { columns, rows }
}

/// Parse the whitespace-delimited export, sorting columns by name.
fn read_export<R: Read>(reader: R) -> OutputResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut iter = headers.iter();
    match iter.next() {
        Some("timeStep") => {}
        other => {
            return Err(OutputError::Parse(format!(
                "expected leading timeStep column, found {other:?}"
            )));
        }
    }
    let names: Vec<String> = iter.map(str::to_string).collect();
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by(|&a, &b| names[a].cmp(&names[b]));
    let columns: Vec<String> = order.iter().map(|&i| names[i].clone()).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let time_step = fields
            .next()
            .ok_or_else(|| OutputError::Parse("empty export row".to_string()))?
            .parse::<u64>()
            .map_err(|e| OutputError::Parse(format!("bad timeStep: {e}")))?;

        let raw: Vec<f64> = fields
            .map(|f| {
                f.parse::<f64>()
                    .map_err(|e| OutputError::Parse(format!("bad density value {f:?}: {e}")))
            })
            .collect::<OutputResult<_>>()?;
        if raw.len() != names.len() {
            return Err(OutputError::Parse(format!(
                "row for timeStep {time_step} has {} values, expected {}",
                raw.len(),
                names.len()
            )));
        }

        rows.push(Row {
            time_step,
            values: order.iter().map(|&i| round_to_precision(raw[i])).collect(),
        });
    }

    Ok(Table { columns, rows })
}
