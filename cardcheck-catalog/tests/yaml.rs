use cardcheck_catalog::{load_catalog, load_manufacturers, load_products, load_sports};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_manufacturer_from_yaml() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("manufacturers");
    fs::create_dir(&dir).unwrap();

    write_yaml(
        &dir,
        "panini.yaml",
        r#"
id: panini
name: Panini
slug: panini
"#,
    );

    let manufacturers = load_manufacturers(&dir).unwrap();
    assert_eq!(manufacturers.len(), 1);
    assert_eq!(manufacturers[0].id, "panini");
    assert_eq!(manufacturers[0].name, "Panini");
}

#[test]
fn load_sports_sorted_by_file_name() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("sports");
    fs::create_dir(&dir).unwrap();

    write_yaml(&dir, "football.yml", "id: football\nname: Football\nslug: football\n");
    write_yaml(
        &dir,
        "basketball.yaml",
        "id: basketball\nname: Basketball\nslug: basketball\n",
    );
    write_yaml(&dir, "notes.txt", "not yaml");

    let sports = load_sports(&dir).unwrap();
    let ids: Vec<_> = sports.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["basketball", "football"]);
}

#[test]
fn load_products_from_list_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("products");
    fs::create_dir(&dir).unwrap();

    write_yaml(
        &dir,
        "2024.yaml",
        r#"
- id: 7d1f0e5c-prizm-bk-2024
  full_display_name: "2024-25 Panini Prizm Basketball"
  slug: 2024-25-panini-prizm-basketball
  year: 2024
  manufacturer_id: panini
  sport_id: basketball
- id: 5a2e9b11-chrome-fb-2024
  full_display_name: "2024 Topps Chrome Football"
  slug: 2024-topps-chrome-football
  year: 2024
  is_active: false
"#,
    );

    let products = load_products(&dir).unwrap();
    assert_eq!(products.len(), 2);
    assert!(products[0].is_active, "is_active defaults to true");
    assert_eq!(products[0].manufacturer_id.as_deref(), Some("panini"));
    assert!(!products[1].is_active);
    assert!(products[1].sport_id.is_none());
}

#[test]
fn load_catalog_reads_all_sections() {
    let tmp = TempDir::new().unwrap();
    for sub in ["manufacturers", "sports", "products"] {
        fs::create_dir(tmp.path().join(sub)).unwrap();
    }
    write_yaml(
        &tmp.path().join("manufacturers"),
        "topps.yaml",
        "id: topps\nname: Topps\nslug: topps\n",
    );
    write_yaml(
        &tmp.path().join("sports"),
        "baseball.yaml",
        "id: baseball\nname: Baseball\nslug: baseball\n",
    );
    write_yaml(
        &tmp.path().join("products"),
        "2025.yaml",
        "- id: p1\n  full_display_name: 2025 Topps Series 1\n  slug: 2025-topps-series-1\n  year: 2025\n",
    );

    let (manufacturers, sports, products) = load_catalog(tmp.path()).unwrap();
    assert_eq!(manufacturers.len(), 1);
    assert_eq!(sports.len(), 1);
    assert_eq!(products.len(), 1);
}

#[test]
fn malformed_yaml_reports_path() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("sports");
    fs::create_dir(&dir).unwrap();
    write_yaml(&dir, "broken.yaml", "id: [unclosed\n");

    let err = load_sports(&dir).unwrap_err();
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn missing_dir_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nonexistent");
    let result = load_manufacturers(&missing).unwrap();
    assert!(result.is_empty());
}
