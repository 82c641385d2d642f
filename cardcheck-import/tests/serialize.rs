use cardcheck_catalog::types::*;
use cardcheck_db::*;
use cardcheck_import::*;

fn row(name: &str, slug: &str, badges: BadgeSet) -> InsertRow {
    InsertRow {
        product_id: PRODUCT_ID_PLACEHOLDER.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        badges,
    }
}

fn gold() -> InsertRow {
    row(
        "Gold /10",
        "gold-10",
        BadgeSet {
            is_numbered: true,
            serial_max: Some(10),
            ..Default::default()
        },
    )
}

#[test]
fn no_rows_is_comment_only() {
    assert_eq!(to_sql_insert(&[]), "-- No rows generated.\n");
    assert_eq!(NO_ROWS_SQL, "-- No rows generated.\n");
}

#[test]
fn single_row_layout() {
    let sql = to_sql_insert(&[gold()]);
    assert!(sql.starts_with("-- "));
    assert!(sql.contains("-- 1) Replace __PRODUCT_ID__ with the real products.id for this set\n"));
    assert!(sql.contains(
        ") values\n(\n  '__PRODUCT_ID__',\n  'Gold /10',\n  'gold-10',\n  false,\n  true,\n  10,\n  false,\n  false,\n  false,\n  false,\n  false\n);\n"
    ));
    assert!(sql.ends_with(");\n"));
}

#[test]
fn rows_are_comma_separated_and_nulls_rendered() {
    let silver = row("Kaboom! It's Silver", "kaboom-it-s-silver", BadgeSet::default());
    let sql = to_sql_insert(&[silver, gold()]);
    assert!(sql.contains("'Kaboom! It''s Silver'"));
    assert!(sql.contains("  false,\n  false,\n  null,\n"));
    assert!(sql.contains("\n),\n(\n"));
    assert_eq!(sql.matches("insert into parallels").count(), 1);
}

#[test]
fn generated_sql_runs_against_local_schema() {
    let conn = open_memory().unwrap();
    upsert_product(
        &conn,
        &Product {
            id: "p-prizm".to_string(),
            full_display_name: "2024-25 Panini Prizm Basketball".to_string(),
            slug: "prizm".to_string(),
            year: 2024,
            is_active: true,
            manufacturer_id: None,
            sport_id: None,
        },
    )
    .unwrap();

    let workbook = Workbook::default()
        .with_sheet(
            ChecklistSheet::Base,
            vec![
                "Parallels:".into(),
                "Silver".into(),
                "Gold /199".into(),
                "Red FOTL /25".into(),
                12345.0.into(),
            ],
        )
        .with_sheet(
            ChecklistSheet::Autographs,
            vec!["Parallels:".into(), "Silver".into(), Cell::Empty],
        );
    let report = classify(&workbook, &SilentProgress);
    let sql = to_sql_insert(&report.rows).replace(PRODUCT_ID_PLACEHOLDER, "p-prizm");
    conn.execute_batch(&sql).unwrap();

    let parallels = parallels_for_product(&conn, "p-prizm").unwrap();
    assert_eq!(parallels.len(), 4);

    let red = find_parallel_by_slug(&conn, "p-prizm", "red-fotl-25")
        .unwrap()
        .unwrap();
    assert!(red.badges.is_fotl_hit);
    assert_eq!(red.badges.serial_max, Some(25));

    let auto = find_parallel_by_slug(&conn, "p-prizm", "auto-silver")
        .unwrap()
        .unwrap();
    assert!(auto.badges.is_auto);
}
