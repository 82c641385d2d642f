use cardcheck_catalog::parallel_name::{
    classify_tab_group, infer_badges, parallel_slug, parse_serial_info, slugify,
};
use cardcheck_catalog::{BadgeSet, ChecklistSheet, TabGroup};

#[test]
fn slash_number_is_serial_run() {
    let info = parse_serial_info("Prizm /25");
    assert!(info.is_numbered);
    assert_eq!(info.serial_max, Some(25));
}

#[test]
fn first_slash_number_wins() {
    let info = parse_serial_info("Color Blast /10 /5");
    assert_eq!(info.serial_max, Some(10));
}

#[test]
fn later_slash_never_replaces_first_run() {
    let zero = parse_serial_info("Foo /0 /5");
    assert!(zero.is_numbered);
    assert_eq!(zero.serial_max, Some(0));

    let huge = parse_serial_info("Huge /99999999999 /5");
    assert!(huge.is_numbered);
    assert_eq!(huge.serial_max, Some(u32::MAX));
}

#[test]
fn one_of_one() {
    let info = parse_serial_info("Black 1/1");
    assert!(info.is_numbered);
    assert_eq!(info.serial_max, Some(1));
}

#[test]
fn unnumbered_name() {
    let info = parse_serial_info("Silver");
    assert!(!info.is_numbered);
    assert!(info.serial_max.is_none());
}

#[test]
fn serial_run_without_space() {
    assert_eq!(parse_serial_info("Gold/10").serial_max, Some(10));
}

#[test]
fn fotl_detection_is_case_insensitive_substring() {
    for name in ["Red FOTL", "red fotl", "REDFOTL"] {
        assert!(infer_badges(name, false).is_fotl_hit, "{name}");
    }
    assert!(!infer_badges("Red Foil", false).is_fotl_hit);
}

#[test]
fn auto_flag_comes_from_caller() {
    assert!(infer_badges("Silver", true).is_auto);
    assert!(!infer_badges("Autograph Silver", false).is_auto);
}

#[test]
fn unruled_badges_stay_false() {
    let badges = infer_badges("Hobby Retail SP SSP Exclusive /5", false);
    assert!(!badges.is_hobby_exclusive);
    assert!(!badges.is_retail_exclusive);
    assert!(!badges.is_sp);
    assert!(!badges.is_ssp);
}

#[test]
fn numbered_iff_serial_max_present() {
    for name in ["Silver", "Gold /10", "Black 1/1", "Red FOTL", "Wave /0"] {
        let badges = infer_badges(name, false);
        assert_eq!(badges.is_numbered, badges.serial_max.is_some(), "{name}");
    }
}

#[test]
fn tab_groups() {
    let numbered = infer_badges("Gold /10", false);
    let plain = infer_badges("Silver", false);
    let auto_numbered = infer_badges("Gold /10", true);

    assert_eq!(classify_tab_group(ChecklistSheet::Base, &numbered), TabGroup::BaseSerial);
    assert_eq!(classify_tab_group(ChecklistSheet::Base, &plain), TabGroup::BaseNonSerial);
    assert_eq!(
        classify_tab_group(ChecklistSheet::Autographs, &auto_numbered),
        TabGroup::Autos
    );
    assert_eq!(
        classify_tab_group(ChecklistSheet::Autographs, &BadgeSet::default()),
        TabGroup::Autos
    );
}

#[test]
fn slug_examples() {
    assert_eq!(slugify("Black & Gold /25"), "black-and-gold-25");
    assert_eq!(slugify("  Red Wave  "), "red-wave");
    assert_eq!(slugify("--Pink  Ice--"), "pink-ice");
    assert_eq!(slugify("Green (Choice) - /8"), "green-choice-8");
    assert_eq!(slugify("Mojo!!!"), "mojo");
    assert_eq!(slugify("***"), "");
}

#[test]
fn slug_is_idempotent() {
    for name in ["Black & Gold /25", "Gold Vinyl 1/1", "Red/White/Blue", "Été Prizm"] {
        let once = slugify(name);
        assert_eq!(slugify(&once), once, "{name}");
    }
}

#[test]
fn auto_slug_prefix() {
    assert_eq!(parallel_slug("Gold", false), "gold");
    assert_eq!(parallel_slug("Gold", true), "auto-gold");
    assert_eq!(parallel_slug("Black & Gold /25", true), "auto-black-and-gold-25");
}
