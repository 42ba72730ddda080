//! Table loading and serialization for delimited text and spreadsheets.
//!
//! The on-disk format is chosen by file extension on both the input and
//! output side: `.csv` selects the delimited-text parser, every other
//! extension is handed to the spreadsheet reader. Spreadsheets are read
//! with `calamine` (which also handles legacy `.xls` workbooks) and
//! written with `rust_xlsxwriter`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::cell::CellValue;
use crate::error::{GeoCleanError, Result};

/// Formats a table can be read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-delimited text (`.csv`).
    Delimited,
    /// Spreadsheet workbook (`.xlsx`, `.xls`).
    Spreadsheet,
}

impl TableFormat {
    /// Select the format for a path. `.csv` selects delimited text;
    /// every other extension is treated as a spreadsheet.
    pub fn from_path(path: &Path) -> TableFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => TableFormat::Delimited,
            _ => TableFormat::Spreadsheet,
        }
    }
}

/// An in-memory rectangular table with named columns.
///
/// A table is created by loading an input file, mutated in place by the
/// cleaner, and destroyed after serialization. Each clean operation owns
/// its table exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Get the column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the data rows.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a data row. The row must have one cell per column.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(GeoCleanError::other(format!(
                "row has {} cells but the table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Index of the first column whose name contains `needle`, compared
    /// case-insensitively. When several column names qualify, the first
    /// in file order wins; that is an intentional policy, not an attempt
    /// to guess the best candidate.
    pub fn find_column(&self, needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        self.columns
            .iter()
            .position(|name| name.to_lowercase().contains(&needle))
    }

    /// Replace every cell in the given column with `f(cell)`.
    pub fn map_column<F>(&mut self, column: usize, mut f: F)
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        for row in &mut self.rows {
            row[column] = f(&row[column]);
        }
    }

    /// Load a table from a file, format chosen by extension.
    pub fn load(path: &Path) -> Result<Table> {
        let table = match TableFormat::from_path(path) {
            TableFormat::Delimited => Table::read_csv(path)?,
            TableFormat::Spreadsheet => Table::read_spreadsheet(path)?,
        };
        debug!(
            columns = table.columns.len(),
            rows = table.rows.len(),
            "loaded table from {}",
            path.display()
        );
        Ok(table)
    }

    /// Write the table to a file, format chosen by extension. Column
    /// order and all cell values are preserved as held in memory.
    pub fn save(&self, path: &Path) -> Result<()> {
        match TableFormat::from_path(path) {
            TableFormat::Delimited => self.write_csv(path)?,
            TableFormat::Spreadsheet => self.write_spreadsheet(path)?,
        }
        debug!(rows = self.rows.len(), "wrote table to {}", path.display());
        Ok(())
    }

    fn read_csv(path: &Path) -> Result<Table> {
        let mut reader = csv::Reader::from_path(path)?;
        let columns = reader.headers()?.iter().map(str::to_string).collect();

        let mut table = Table::new(columns);
        for record in reader.records() {
            let record = record?;
            let row = record.iter().map(CellValue::from_csv_field).collect();
            table.push_row(row)?;
        }
        Ok(table)
    }

    fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_spreadsheet(path: &Path) -> Result<Table> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| GeoCleanError::spreadsheet("workbook has no worksheets"))??;

        let mut rows = range.rows();
        let columns = match rows.next() {
            Some(header) => header.iter().map(header_name).collect(),
            None => Vec::new(),
        };

        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row.iter().map(cell_from_data).collect())?;
        }
        Ok(table)
    }

    fn write_spreadsheet(&self, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, name) in self.columns.iter().enumerate() {
            sheet.write_string(0, col as u16, name)?;
        }

        for (r, row) in self.rows.iter().enumerate() {
            let row_idx = (r + 1) as u32;
            for (c, cell) in row.iter().enumerate() {
                let col_idx = c as u16;
                match cell {
                    CellValue::Missing => {}
                    CellValue::Text(s) => {
                        sheet.write_string(row_idx, col_idx, s)?;
                    }
                    CellValue::Integer(i) => {
                        sheet.write_number(row_idx, col_idx, *i as f64)?;
                    }
                    CellValue::Float(v) => {
                        sheet.write_number(row_idx, col_idx, *v)?;
                    }
                    CellValue::Bool(b) => {
                        sheet.write_boolean(row_idx, col_idx, *b)?;
                    }
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}

/// Render a header cell as a column name.
fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a spreadsheet cell into a [`CellValue`].
fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        other => CellValue::Text(other.to_string()),
    }
}
