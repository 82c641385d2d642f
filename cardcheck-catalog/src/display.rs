//! Display helpers for the set detail listing.

use crate::types::BadgeSet;

/// One line of a parallel's badge checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub key: &'static str,
    pub label: String,
    pub active: bool,
}

/// Clean up a stored parallel name for display.
///
/// Drops a trailing ` - /99` serial suffix and the word `FOTL`, since both are
/// shown as badges instead.
///
/// # Examples
///
/// ```
/// use cardcheck_catalog::display::display_parallel_name;
///
/// assert_eq!(display_parallel_name("Gold Shimmer - /10"), "Gold Shimmer");
/// assert_eq!(display_parallel_name("Red FOTL"), "Red");
/// assert_eq!(display_parallel_name("Silver"), "Silver");
/// ```
pub fn display_parallel_name(name: &str) -> String {
    let without_suffix = strip_serial_suffix(name);
    let without_fotl = remove_word_ci(without_suffix, "fotl");
    let collapsed = without_fotl.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .strip_suffix(['-', '\u{2013}'])
        .unwrap_or(&collapsed);
    trimmed.trim().to_string()
}

/// Strip a trailing `<ws>-<ws>/<digits>` suffix, if present.
fn strip_serial_suffix(name: &str) -> &str {
    let digits_start = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if digits_start.len() == name.len() {
        return name;
    }
    let Some(before_slash) = digits_start.strip_suffix('/') else {
        return name;
    };
    let Some(before_dash) = before_slash.trim_end().strip_suffix('-') else {
        return name;
    };
    before_dash.trim_end()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Remove every whole-word, ASCII case-insensitive occurrence of `word`.
fn remove_word_ci(text: &str, word: &str) -> String {
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for (start, _) in lower.match_indices(word) {
        let end = start + word.len();
        let before_ok = !text[..start].chars().next_back().is_some_and(is_word_char);
        let after_ok = !text[end..].chars().next().is_some_and(is_word_char);
        if before_ok && after_ok {
            out.push_str(&text[cursor..start]);
            cursor = end;
        }
    }

    out.push_str(&text[cursor..]);
    out
}

/// Build the badge checklist shown next to a parallel.
pub fn badge_checklist(badges: &BadgeSet) -> Vec<ChecklistItem> {
    let serial_label = match badges.serial_max {
        Some(max) => format!("Serial numbered /{max}"),
        None => "Not numbered".to_string(),
    };

    vec![
        ChecklistItem {
            key: "serial",
            label: serial_label,
            active: badges.serial_max.is_some(),
        },
        ChecklistItem {
            key: "fotl",
            label: "FOTL exclusive".to_string(),
            active: badges.is_fotl_hit,
        },
        ChecklistItem {
            key: "hobby",
            label: "Hobby exclusive".to_string(),
            active: badges.is_hobby_exclusive,
        },
        ChecklistItem {
            key: "retail",
            label: "Retail exclusive".to_string(),
            active: badges.is_retail_exclusive,
        },
        ChecklistItem {
            key: "sp",
            label: "SP (short print)".to_string(),
            active: badges.is_sp,
        },
        ChecklistItem {
            key: "ssp",
            label: "SSP (super short print)".to_string(),
            active: badges.is_ssp,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fotl_inside_a_word_is_kept() {
        assert_eq!(remove_word_ci("REDFOTL", "fotl"), "REDFOTL");
        assert_eq!(remove_word_ci("Red fotl Wave", "fotl"), "Red  Wave");
    }

    #[test]
    fn serial_suffix_requires_dash() {
        assert_eq!(strip_serial_suffix("Gold /10"), "Gold /10");
        assert_eq!(strip_serial_suffix("Gold-/10"), "Gold");
    }

    #[test]
    fn trailing_dash_left_by_fotl_removal() {
        assert_eq!(display_parallel_name("Blue - FOTL"), "Blue");
    }
}
