//! Parallel-name extraction from checklist sheets.
//!
//! Vendor checklists list parallels in the first column under a `Parallels:`
//! marker row, ending at the first card number or blank row:
//!
//! ```text
//! Parallels:
//! Silver
//! Gold /10
//! 1            <- card numbers start, block ends
//! ```
//!
//! The base sheet has one such block. The autographs sheet repeats it once
//! per autograph subset, so scanning resumes after each block.

use cardcheck_catalog::parallel_name::{classify_tab_group, infer_badges};
use cardcheck_catalog::types::{ChecklistSheet, ClassifiedParallel};

use crate::workbook::{Cell, SheetColumn, Workbook};

/// Marker text that opens a parallels block (compared after trimming).
pub const PARALLELS_MARKER: &str = "Parallels:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for a marker.
    Scanning,
    /// Inside a block; text cells are names.
    Collecting,
    /// Single-block sheet whose block has ended.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blocks {
    Single,
    Multiple,
}

/// Collect trimmed parallel names from a sheet column.
fn scan_names(column: &SheetColumn, blocks: Blocks) -> Vec<String> {
    let mut names = Vec::new();

    column
        .cells()
        .iter()
        .fold(ScanState::Scanning, |state, cell| match (state, cell) {
            (ScanState::Finished, _) => ScanState::Finished,
            (_, Cell::Text(text)) if text.trim() == PARALLELS_MARKER => ScanState::Collecting,
            (ScanState::Scanning, _) => ScanState::Scanning,
            (ScanState::Collecting, Cell::Text(text)) => {
                let name = text.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
                ScanState::Collecting
            }
            (ScanState::Collecting, Cell::Other) => ScanState::Collecting,
            (ScanState::Collecting, Cell::Number(_) | Cell::Empty) => match blocks {
                Blocks::Single => ScanState::Finished,
                Blocks::Multiple => ScanState::Scanning,
            },
        });

    names
}

fn classify(name: String, sheet: ChecklistSheet) -> ClassifiedParallel {
    let badges = infer_badges(&name, sheet.is_auto());
    ClassifiedParallel {
        tab_group: classify_tab_group(sheet, &badges),
        raw_name: name,
        sheet,
        badges,
    }
}

fn extract(workbook: &Workbook, sheet: ChecklistSheet, blocks: Blocks) -> Vec<ClassifiedParallel> {
    let Some(column) = workbook.sheet(sheet) else {
        return Vec::new();
    };

    scan_names(column, blocks)
        .into_iter()
        .map(|name| classify(name, sheet))
        .collect()
}

/// Parallels from the first marker block of the `Base` sheet.
pub fn extract_base_parallels(workbook: &Workbook) -> Vec<ClassifiedParallel> {
    extract(workbook, ChecklistSheet::Base, Blocks::Single)
}

/// Parallels from every marker block of the `Autographs` sheet.
pub fn extract_auto_parallels(workbook: &Workbook) -> Vec<ClassifiedParallel> {
    extract(workbook, ChecklistSheet::Autographs, Blocks::Multiple)
}

/// Base parallels followed by autograph parallels, in sheet order.
pub fn classify_workbook(workbook: &Workbook) -> Vec<ClassifiedParallel> {
    let mut all = extract_base_parallels(workbook);
    all.extend(extract_auto_parallels(workbook));
    all
}
