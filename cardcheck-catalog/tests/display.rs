use cardcheck_catalog::display::{badge_checklist, display_parallel_name};
use cardcheck_catalog::infer_badges;

#[test]
fn strips_dash_serial_suffix() {
    assert_eq!(display_parallel_name("Blue Ice - /99"), "Blue Ice");
    assert_eq!(display_parallel_name("Blue Ice -/99"), "Blue Ice");
}

#[test]
fn keeps_serial_without_dash() {
    assert_eq!(display_parallel_name("Blue Ice /99"), "Blue Ice /99");
}

#[test]
fn removes_fotl_word() {
    assert_eq!(display_parallel_name("Gold FOTL /10"), "Gold /10");
    assert_eq!(display_parallel_name("fotl Red Pulsar"), "Red Pulsar");
    assert_eq!(display_parallel_name("REDFOTL"), "REDFOTL");
}

#[test]
fn collapses_whitespace_and_trailing_dash() {
    assert_eq!(display_parallel_name("  Neon   Green  \u{2013} "), "Neon Green");
}

#[test]
fn checklist_for_numbered_fotl() {
    let badges = infer_badges("Red FOTL /25", false);
    let items = badge_checklist(&badges);

    let keys: Vec<_> = items.iter().map(|i| i.key).collect();
    assert_eq!(keys, vec!["serial", "fotl", "hobby", "retail", "sp", "ssp"]);

    assert_eq!(items[0].label, "Serial numbered /25");
    assert!(items[0].active);
    assert!(items[1].active);
    assert!(items[2..].iter().all(|i| !i.active));
}

#[test]
fn checklist_for_unnumbered() {
    let items = badge_checklist(&infer_badges("Silver", false));
    assert_eq!(items[0].label, "Not numbered");
    assert!(!items[0].active);
}
