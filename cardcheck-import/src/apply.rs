//! Insert classified checklist rows into the local catalog database.

use cardcheck_catalog::types::InsertRow;
use cardcheck_db::operations;
use rusqlite::Connection;

use crate::ImportError;
use crate::progress::ImportProgress;

/// Statistics from applying rows to one product.
#[derive(Debug, Default)]
pub struct ApplyStats {
    pub created: u64,
    pub existing: u64,
}

/// Insert `rows` as parallels of `product_id`.
///
/// Each row's product key is replaced with `product_id`. Rows whose
/// `(product_id, slug, is_auto)` already exists are left untouched. New rows
/// take their position in `rows` as sort order. Runs in one transaction.
pub fn apply_rows(
    conn: &Connection,
    product_id: &str,
    rows: &[InsertRow],
    progress: Option<&dyn ImportProgress>,
) -> Result<ApplyStats, ImportError> {
    let mut stats = ApplyStats::default();
    let tx = conn.unchecked_transaction()?;

    for (i, row) in rows.iter().enumerate() {
        if operations::parallel_exists(&tx, product_id, &row.slug, row.badges.is_auto)? {
            log::debug!("Parallel '{}' already exists, skipping", row.slug);
            stats.existing += 1;
        } else {
            let row = InsertRow {
                product_id: product_id.to_string(),
                ..row.clone()
            };
            operations::insert_parallel(&tx, &row, Some(i as i64))?;
            stats.created += 1;
        }

        if let Some(p) = progress {
            p.on_row(i + 1, rows.len(), &row.name);
        }
    }

    tx.commit()?;
    Ok(stats)
}
