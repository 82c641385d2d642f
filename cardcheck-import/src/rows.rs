//! Projection of classified parallels into insert rows.

use std::collections::HashSet;

use cardcheck_catalog::parallel_name::parallel_slug;
use cardcheck_catalog::types::{ClassifiedParallel, InsertRow, PRODUCT_ID_PLACEHOLDER};

use crate::extract::classify_workbook;
use crate::progress::ImportProgress;
use crate::workbook::Workbook;

/// Project classified parallels into insert rows for `product_id`.
///
/// Autograph rows get an `auto-` slug prefix so a base and an autograph
/// parallel with the same name stay distinct.
pub fn to_insert_rows(classified: &[ClassifiedParallel], product_id: &str) -> Vec<InsertRow> {
    classified
        .iter()
        .map(|c| InsertRow {
            product_id: product_id.to_string(),
            name: c.raw_name.clone(),
            slug: parallel_slug(&c.raw_name, c.badges.is_auto),
            badges: c.badges,
        })
        .collect()
}

/// Keep the first row for each `(product_id, slug, is_auto)`.
pub fn dedupe_rows(rows: &[InsertRow]) -> Vec<InsertRow> {
    let mut seen: HashSet<(&str, &str, bool)> = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let key = (row.product_id.as_str(), row.slug.as_str(), row.badges.is_auto);
        if seen.insert(key) {
            out.push(row.clone());
        } else {
            log::debug!("Dropping duplicate parallel '{}' ({})", row.name, row.slug);
        }
    }

    out
}

/// Everything produced by classifying one workbook.
#[derive(Debug, Clone, Default)]
pub struct ClassifyReport {
    /// Every extracted parallel, before slugging and de-duplication.
    pub classified: Vec<ClassifiedParallel>,
    /// De-duplicated rows keyed by the product id placeholder.
    pub rows: Vec<InsertRow>,
    /// Rows dropped as duplicates.
    pub duplicates: usize,
}

impl ClassifyReport {
    pub fn base_count(&self) -> usize {
        self.classified.iter().filter(|c| !c.badges.is_auto).count()
    }

    pub fn auto_count(&self) -> usize {
        self.classified.iter().filter(|c| c.badges.is_auto).count()
    }
}

/// Run the whole classifier over a loaded workbook.
pub fn classify(workbook: &Workbook, progress: &dyn ImportProgress) -> ClassifyReport {
    progress.on_phase("Classifying checklist parallels");

    let classified = classify_workbook(workbook);
    let total = classified.len();
    for (i, c) in classified.iter().enumerate() {
        progress.on_row(i + 1, total, &c.raw_name);
    }

    let all_rows = to_insert_rows(&classified, PRODUCT_ID_PLACEHOLDER);
    let rows = dedupe_rows(&all_rows);
    let duplicates = all_rows.len() - rows.len();

    let report = ClassifyReport {
        classified,
        rows,
        duplicates,
    };
    progress.on_complete(&format!(
        "Classified {} base and {} autograph parallels ({} rows, {} duplicates dropped)",
        report.base_count(),
        report.auto_count(),
        report.rows.len(),
        report.duplicates,
    ));
    report
}
