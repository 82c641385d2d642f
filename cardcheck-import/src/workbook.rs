//! Checklist workbook loading.
//!
//! Only the first column of the `Base` and `Autographs` sheets is kept; the
//! extractor never looks anywhere else.

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use cardcheck_catalog::types::ChecklistSheet;

use crate::ImportError;

/// A single first-column cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
    /// Boolean cell: neither a name nor the end of a block.
    Other,
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Float(n) => Cell::Number(*n),
            Data::Int(n) => Cell::Number(*n as f64),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::Bool(_) => Cell::Other,
            // Error values read back as blank
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// The first column of one sheet, top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetColumn {
    cells: Vec<Cell>,
}

impl SheetColumn {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The checklist sheets found in a workbook.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: HashMap<ChecklistSheet, SheetColumn>,
}

impl Workbook {
    /// Add or replace a sheet's column.
    pub fn with_sheet(mut self, sheet: ChecklistSheet, cells: Vec<Cell>) -> Self {
        self.sheets.insert(sheet, SheetColumn::new(cells));
        self
    }

    pub fn sheet(&self, sheet: ChecklistSheet) -> Option<&SheetColumn> {
        self.sheets.get(&sheet)
    }
}

/// Read the checklist sheets of a workbook file.
///
/// Any format calamine recognizes is accepted. A sheet that fails to parse
/// is logged and treated as missing.
pub fn load_workbook(path: &Path) -> Result<Workbook, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }

    let mut source = open_workbook_auto(path)?;
    let names = source.sheet_names();
    let mut workbook = Workbook::default();

    for sheet in [ChecklistSheet::Base, ChecklistSheet::Autographs] {
        let name = sheet.sheet_name();
        if !names.iter().any(|n| n == name) {
            log::debug!("Sheet '{}' not present in {}", name, path.display());
            continue;
        }

        match source.worksheet_range(name) {
            Ok(range) => {
                let cells: Vec<Cell> = range
                    .rows()
                    .map(|row| row.first().map(Cell::from).unwrap_or(Cell::Empty))
                    .collect();
                log::debug!("Sheet '{}': {} rows", name, cells.len());
                workbook = workbook.with_sheet(sheet, cells);
            }
            Err(e) => {
                log::warn!("Could not read sheet '{}' in {}: {}", name, path.display(), e);
            }
        }
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_is_other_and_error_is_empty() {
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Other);
        assert_eq!(
            Cell::from(&Data::Error(calamine::CellErrorType::NA)),
            Cell::Empty
        );
    }

    #[test]
    fn ints_become_numbers() {
        assert_eq!(Cell::from(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(
            Cell::from(&Data::String("Gold".into())),
            Cell::Text("Gold".into())
        );
    }
}
