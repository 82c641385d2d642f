//! Parser for parallel names as they appear in vendor checklists.
//!
//! Checklist entries are free text with a few conventions that encode metadata:
//! ```text
//! Gold /10          serial-numbered to 10
//! Black 1/1         one-of-one
//! Red FOTL /25      first-off-the-line exclusive, numbered to 25
//! ```
//!
//! This module extracts the serial run size and badge flags from that text,
//! assigns a UI tab group, and derives the slug used as the stored key.

use crate::types::{BadgeSet, ChecklistSheet, TabGroup};

/// Serial-numbering information parsed from a parallel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerialInfo {
    pub is_numbered: bool,
    pub serial_max: Option<u32>,
}

/// Determine whether a name denotes a limited print run.
///
/// # Examples
///
/// ```
/// use cardcheck_catalog::parallel_name::parse_serial_info;
///
/// let info = parse_serial_info("Prizm /25");
/// assert!(info.is_numbered);
/// assert_eq!(info.serial_max, Some(25));
///
/// // Only the first run is honored.
/// assert_eq!(parse_serial_info("Color Blast /10 /5").serial_max, Some(10));
///
/// assert!(!parse_serial_info("Silver").is_numbered);
/// ```
pub fn parse_serial_info(name: &str) -> SerialInfo {
    if let Some(max) = first_serial_run(name) {
        return SerialInfo {
            is_numbered: true,
            serial_max: Some(max),
        };
    }

    if name.contains("1/1") {
        return SerialInfo {
            is_numbered: true,
            serial_max: Some(1),
        };
    }

    SerialInfo::default()
}

/// Value of the first `/` immediately followed by a decimal digit run.
///
/// Only that first run counts, whatever its value. `/0` gives 0 and a run
/// past `u32::MAX` saturates.
fn first_serial_run(name: &str) -> Option<u32> {
    let bytes = name.as_bytes();

    let start = bytes
        .windows(2)
        .position(|pair| pair[0] == b'/' && pair[1].is_ascii_digit())?
        + 1;

    let value = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u32, |acc, &b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
    Some(value)
}

/// Infer the badge set for a checklist name.
///
/// `is_auto` comes from the sheet the name was read on, not from the text.
/// Hobby/retail exclusivity and SP/SSP have no text rule yet and stay false.
pub fn infer_badges(name: &str, is_auto: bool) -> BadgeSet {
    let serial = parse_serial_info(name);

    BadgeSet {
        is_hobby_exclusive: false,
        is_retail_exclusive: false,
        is_fotl_hit: name.to_lowercase().contains("fotl"),
        is_numbered: serial.is_numbered,
        is_auto,
        is_sp: false,
        is_ssp: false,
        serial_max: serial.serial_max,
    }
}

/// Assign a parallel to its UI tab. The autographs sheet wins over numbering.
pub fn classify_tab_group(sheet: ChecklistSheet, badges: &BadgeSet) -> TabGroup {
    match sheet {
        ChecklistSheet::Autographs => TabGroup::Autos,
        ChecklistSheet::Base if badges.is_numbered => TabGroup::BaseSerial,
        ChecklistSheet::Base => TabGroup::BaseNonSerial,
    }
}

/// Convert a display name to a URL- and key-safe slug.
///
/// Lowercases, spells out `&`, and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, with no leading or trailing hyphen.
///
/// # Examples
///
/// ```
/// use cardcheck_catalog::parallel_name::slugify;
///
/// assert_eq!(slugify("Black & Gold /25"), "black-and-gold-25");
/// assert_eq!(slugify("black-and-gold-25"), "black-and-gold-25");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug for a stored parallel. Autograph parallels get an `auto-` prefix so
/// they never collide with a base parallel of the same name.
pub fn parallel_slug(name: &str, is_auto: bool) -> String {
    let slug = slugify(name);
    if is_auto {
        format!("auto-{slug}")
    } else {
        slug
    }
}
