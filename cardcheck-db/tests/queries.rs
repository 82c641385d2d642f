use cardcheck_catalog::types::*;
use cardcheck_db::*;
use rusqlite::Connection;

fn product(id: &str, name: &str, year: i32, manufacturer: Option<&str>, sport: Option<&str>) -> Product {
    Product {
        id: id.to_string(),
        full_display_name: name.to_string(),
        slug: cardcheck_catalog::slugify(name),
        year,
        is_active: true,
        manufacturer_id: manufacturer.map(str::to_string),
        sport_id: sport.map(str::to_string),
    }
}

fn setup() -> Connection {
    let conn = open_memory().unwrap();
    upsert_manufacturer(
        &conn,
        &Manufacturer {
            id: "m1".to_string(),
            name: "Panini".to_string(),
            slug: "panini".to_string(),
        },
    )
    .unwrap();
    upsert_sport(
        &conn,
        &Sport {
            id: "s1".to_string(),
            name: "Basketball".to_string(),
            slug: "basketball".to_string(),
        },
    )
    .unwrap();

    upsert_product(&conn, &product("a", "Prizm", 2023, Some("m1"), Some("s1"))).unwrap();
    upsert_product(&conn, &product("b", "Select", 2024, Some("m1"), Some("s1"))).unwrap();
    upsert_product(&conn, &product("c", "Mystery Box", 2024, None, None)).unwrap();

    let mut hidden = product("d", "Hidden", 2025, Some("m1"), Some("s1"));
    hidden.is_active = false;
    upsert_product(&conn, &hidden).unwrap();
    conn
}

fn add_parallel(conn: &Connection, name: &str, is_auto: bool, sort_order: Option<i64>) -> String {
    let row = InsertRow {
        product_id: "a".to_string(),
        name: name.to_string(),
        slug: cardcheck_catalog::slugify(name),
        badges: BadgeSet {
            is_auto,
            ..Default::default()
        },
    };
    insert_parallel(conn, &row, sort_order).unwrap()
}

#[test]
fn active_products_ordered_newest_then_name() {
    let conn = setup();
    let products = active_products(&conn).unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Mystery Box", "Select", "Prizm"]);
}

#[test]
fn missing_references_resolve_to_unknown() {
    let conn = setup();
    let mystery = find_product_by_slug(&conn, "mystery-box").unwrap().unwrap();
    assert_eq!(mystery.manufacturer_name, UNKNOWN_NAME);
    assert_eq!(mystery.manufacturer_slug, UNKNOWN_SLUG);
    assert_eq!(mystery.sport_name, UNKNOWN_NAME);
    assert_eq!(mystery.sport_slug, UNKNOWN_SLUG);

    let prizm = find_product_by_slug(&conn, "prizm").unwrap().unwrap();
    assert_eq!(prizm.manufacturer_name, "Panini");
    assert_eq!(prizm.sport_slug, "basketball");
}

#[test]
fn product_slug_lookup_misses() {
    let conn = setup();
    assert!(find_product_by_slug(&conn, "nope").unwrap().is_none());
    // Inactive products are still reachable by slug
    assert!(find_product_by_slug(&conn, "hidden").unwrap().is_some());
}

#[test]
fn parallels_sorted_by_order_then_name() {
    let conn = setup();
    add_parallel(&conn, "Silver", false, None);
    add_parallel(&conn, "Gold", false, None);
    add_parallel(&conn, "Base", false, Some(1));
    add_parallel(&conn, "Red", false, Some(2));

    let parallels = parallels_for_product(&conn, "a").unwrap();
    let names: Vec<&str> = parallels.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Base", "Red", "Gold", "Silver"]);
}

#[test]
fn parallel_slug_prefers_base_over_auto() {
    let conn = setup();
    let auto_id = add_parallel(&conn, "Silver", true, None);
    let base_id = add_parallel(&conn, "Silver", false, None);

    let found = find_parallel_by_slug(&conn, "a", "silver").unwrap().unwrap();
    assert_eq!(found.id, base_id);
    assert_ne!(found.id, auto_id);
    assert!(find_parallel_by_slug(&conn, "b", "silver").unwrap().is_none());
}

#[test]
fn images_scoped_to_product() {
    let conn = setup();
    let id = add_parallel(&conn, "Silver", false, None);
    insert_parallel_image(&conn, &id, "a/x/front-1.jpg").unwrap();
    insert_parallel_image(&conn, &id, "a/x/back-2.jpg").unwrap();

    let images = images_for_product(&conn, "a").unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].storage_path, "a/x/front-1.jpg");
    assert!(images_for_product(&conn, "b").unwrap().is_empty());
}

#[test]
fn stats_count_everything() {
    let conn = setup();
    add_parallel(&conn, "Silver", false, None);
    add_parallel(&conn, "Rookie Ink", true, None);

    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(stats.manufacturers, 1);
    assert_eq!(stats.sports, 1);
    assert_eq!(stats.products, 4);
    assert_eq!(stats.active_products, 3);
    assert_eq!(stats.parallels, 2);
    assert_eq!(stats.auto_parallels, 1);
    assert_eq!(stats.images, 0);
}
