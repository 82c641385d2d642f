//! Output formats for classified checklists.

use cardcheck_catalog::types::{ClassifiedParallel, InsertRow};

/// Output for a checklist that yielded nothing.
pub const NO_ROWS_SQL: &str = "-- No rows generated.\n";

const SQL_HEADER: &str = "-- Paste into the backend SQL editor
-- 1) Replace __PRODUCT_ID__ with the real products.id for this set
-- 2) Run

insert into parallels (
  product_id,
  name,
  slug,
  is_auto,
  is_numbered,
  serial_max,
  is_fotl_hit,
  is_hobby_exclusive,
  is_retail_exclusive,
  is_sp,
  is_ssp
) values
";

/// Escape a string for a single-quoted SQL literal.
pub fn sql_escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render rows as one batched `insert into parallels` statement.
pub fn to_sql_insert(rows: &[InsertRow]) -> String {
    if rows.is_empty() {
        return NO_ROWS_SQL.to_string();
    }

    let values: Vec<String> = rows.iter().map(sql_values).collect();

    let mut sql = String::from(SQL_HEADER);
    sql.push_str(&values.join(",\n"));
    sql.push_str(";\n");
    sql
}

fn sql_values(row: &InsertRow) -> String {
    let b = &row.badges;
    let serial_max = b
        .serial_max
        .map_or_else(|| "null".to_string(), |n| n.to_string());

    format!(
        "(\n  '{}',\n  '{}',\n  '{}',\n  {},\n  {},\n  {},\n  {},\n  {},\n  {},\n  {},\n  {}\n)",
        sql_escape(&row.product_id),
        sql_escape(&row.name),
        sql_escape(&row.slug),
        b.is_auto,
        b.is_numbered,
        serial_max,
        b.is_fotl_hit,
        b.is_hobby_exclusive,
        b.is_retail_exclusive,
        b.is_sp,
        b.is_ssp,
    )
}

/// Pretty JSON dump of the classified parallels.
pub fn to_json(classified: &[ClassifiedParallel]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(classified)
}
