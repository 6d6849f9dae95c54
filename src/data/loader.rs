use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ColumnNames;
use crate::error::{PlotError, PlotResult};
use crate::training::history::MseHistory;

/// The three required fields, in `[iteration, train, val]` order.
#[derive(Debug, Deserialize)]
struct RawRow {
    iteration: Option<f64>,
    train_mse: Option<f64>,
    val_mse: Option<f64>,
}

impl RawRow {
    fn complete(&self) -> Option<(f64, f64, f64)> {
        match (self.iteration, self.train_mse, self.val_mse) {
            (Some(it), Some(train), Some(val))
                if it.is_finite() && train.is_finite() && val.is_finite() =>
            {
                Some((it, train, val))
            }
            _ => None,
        }
    }
}

fn column_index(headers: &StringRecord, name: &str) -> PlotResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PlotError::missing_column(name))
}

/// Read the whole history at `csv_path`.
///
/// Columns are found by exact header name, so extra columns and any column
/// order are accepted. Rows with an empty or non-finite value in one of the
/// three columns cannot be plotted and are skipped, which drops that
/// iteration from both series; a value that is not a number aborts the load.
pub fn load_history(csv_path: &Path, columns: &ColumnNames) -> PlotResult<MseHistory> {
    let file = File::open(csv_path)?;
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = rdr.headers()?.clone();
    let indices = [
        column_index(&headers, &columns.iteration)?,
        column_index(&headers, &columns.train_mse)?,
        column_index(&headers, &columns.val_mse)?,
    ];

    let mut history = MseHistory::default();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let projected: StringRecord = indices
            .iter()
            .map(|&i| record.get(i).unwrap_or(""))
            .collect();
        let row: RawRow = projected
            .deserialize(None)
            .map_err(|source| PlotError::InvalidRow { line, source })?;

        match row.complete() {
            Some((iteration, train, val)) => history.record(iteration, train, val),
            None => {
                skipped += 1;
                warn!(line, "skipping row with a missing value");
            }
        }
    }

    debug!(
        rows = history.len(),
        skipped,
        "loaded history from '{}'",
        csv_path.display()
    );

    if history.is_empty() {
        return Err(PlotError::EmptyHistory {
            path: csv_path.to_path_buf(),
        });
    }

    Ok(history)
}

/// Write `history` in the same layout [`load_history`] reads, overwriting
/// `csv_path`.
pub fn write_history(csv_path: &Path, history: &MseHistory, columns: &ColumnNames) -> PlotResult<()> {
    let mut wtr = Writer::from_path(csv_path)?;
    wtr.write_record([&columns.iteration, &columns.train_mse, &columns.val_mse])?;

    // f64's Display drops the fraction of whole numbers, so iterations stay "1", "2", ...
    for row in history.iter() {
        wtr.write_record([
            row.iteration.to_string(),
            row.train_mse.to_string(),
            row.val_mse.to_string(),
        ])?;
    }
    wtr.flush()?;

    debug!(rows = history.len(), "wrote history to '{}'", csv_path.display());
    Ok(())
}
