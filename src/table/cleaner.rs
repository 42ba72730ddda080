//! Column-wise cleaning of state and district names in tabular files.
//!
//! The cleaner runs a linear pipeline: load the table, locate the state
//! and district columns by name, correct both columns in place against
//! the builtin dictionaries, and serialize the result. There is no
//! partial success: either both columns are fully corrected and the
//! output file is written, or the operation fails with an error.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::correction::corrector::FuzzyCorrector;
use crate::correction::dictionary::{DISTRICT_MAP, STATE_MAP};
use crate::error::{GeoCleanError, Result};
use crate::table::format::Table;

/// Summary of a completed clean operation.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Name of the column cleaned against the state dictionary.
    pub state_column: String,
    /// Name of the column cleaned against the district dictionary.
    pub district_column: String,
    /// Number of data rows processed.
    pub rows: usize,
    /// Cells replaced in the state column.
    pub state_corrections: usize,
    /// Cells replaced in the district column.
    pub district_corrections: usize,
}

/// Clean a tabular file and write the result.
///
/// The table is loaded from `input_path` (format chosen by extension),
/// the first column whose name contains "state" and the first whose name
/// contains "district" are corrected against the builtin dictionaries,
/// and the table is written to `output_path` in the format implied by
/// its extension. Untouched columns and rows are preserved as loaded.
///
/// Fails with [`GeoCleanError::MissingColumn`] when either column cannot
/// be located; any other failure propagates as a generic processing
/// error.
pub fn clean_file(input_path: &Path, output_path: &Path) -> Result<CleanReport> {
    let mut table = Table::load(input_path)?;

    // Both lookups run before either error is raised, so whichever
    // column is absent can be reported.
    let state_column = table.find_column("state");
    let district_column = table.find_column("district");

    let state_column =
        state_column.ok_or_else(|| GeoCleanError::missing_column("State column not found"))?;
    let district_column = district_column
        .ok_or_else(|| GeoCleanError::missing_column("District column not found"))?;

    let report = CleanReport {
        state_column: table.columns()[state_column].clone(),
        district_column: table.columns()[district_column].clone(),
        rows: table.row_count(),
        state_corrections: correct_column(
            &mut table,
            state_column,
            &FuzzyCorrector::new(&STATE_MAP),
        ),
        district_corrections: correct_column(
            &mut table,
            district_column,
            &FuzzyCorrector::new(&DISTRICT_MAP),
        ),
    };

    table.save(output_path)?;

    info!(
        rows = report.rows,
        state_corrections = report.state_corrections,
        district_corrections = report.district_corrections,
        "cleaned {} into {}",
        input_path.display(),
        output_path.display()
    );

    Ok(report)
}

/// Correct every cell of one column in place, returning the number of
/// cells that changed.
fn correct_column(table: &mut Table, column: usize, corrector: &FuzzyCorrector) -> usize {
    let mut replaced = 0;
    table.map_column(column, |cell| {
        let corrected = corrector.correct(cell);
        if corrected != *cell {
            replaced += 1;
        }
        corrected
    });
    replaced
}
