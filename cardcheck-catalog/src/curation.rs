//! Admin curation helpers: badge edits and per-parallel card images.
//!
//! Images live in object storage under
//! `<product_id>/<parallel_id>/<front|back>-<unique>.<ext>`; the side is
//! encoded in the file name so it can be recovered from the path alone.

use std::collections::HashMap;

use crate::types::{BadgeKey, BadgeSet, ImageSide, ParallelImage};

/// Badge keys whose value differs between `initial` and `edited`.
///
/// A row with no changed keys does not need saving.
pub fn changed_badges(initial: &BadgeSet, edited: &BadgeSet) -> Vec<BadgeKey> {
    BadgeKey::ALL
        .into_iter()
        .filter(|&key| initial.get(key) != edited.get(key))
        .collect()
}

impl ImageSide {
    /// Recover the side from a storage path, if it was encoded there.
    pub fn detect(path: &str) -> Option<ImageSide> {
        let p = path.to_lowercase();
        // "front-" also covers "/front-"
        if p.contains("front-") || p.contains("/front/") {
            Some(ImageSide::Front)
        } else if p.contains("back-") || p.contains("/back/") {
            Some(ImageSide::Back)
        } else {
            None
        }
    }
}

/// Extension of an uploaded file name, lowercased; `jpg` when there is none.
pub fn file_ext(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => "jpg".to_string(),
    }
}

/// Storage path for a card image.
pub fn image_storage_path(
    product_id: &str,
    parallel_id: &str,
    side: ImageSide,
    unique: &str,
    file_name: &str,
) -> String {
    format!(
        "{product_id}/{parallel_id}/{side}-{unique}.{}",
        file_ext(file_name)
    )
}

/// Storage path for a new upload, with a random unique component.
pub fn new_image_path(
    product_id: &str,
    parallel_id: &str,
    side: ImageSide,
    file_name: &str,
) -> String {
    let unique = uuid::Uuid::new_v4().to_string();
    image_storage_path(product_id, parallel_id, side, &unique, file_name)
}

/// Shorten a long path to `max` characters around a middle ellipsis.
pub fn short_path(path: &str, max: usize) -> String {
    let len = path.chars().count();
    if len <= max {
        return path.to_string();
    }
    let half = max / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(len - half).collect();
    format!("{head}\u{2026}{tail}")
}

/// Images known for one parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageEntry {
    /// All image rows, including ones whose side could not be detected.
    pub count: usize,
    /// First image detected as a front.
    pub front: Option<ParallelImage>,
    /// First image detected as a back.
    pub back: Option<ParallelImage>,
}

impl ImageEntry {
    pub fn side(&self, side: ImageSide) -> Option<&ParallelImage> {
        match side {
            ImageSide::Front => self.front.as_ref(),
            ImageSide::Back => self.back.as_ref(),
        }
    }
}

/// Per-parallel image lookup built from `parallel_images` rows.
#[derive(Debug, Clone, Default)]
pub struct ImageIndex {
    entries: HashMap<String, ImageEntry>,
}

impl ImageIndex {
    pub fn build(images: &[ParallelImage]) -> Self {
        let mut entries: HashMap<String, ImageEntry> = HashMap::new();

        for image in images {
            let entry = entries.entry(image.parallel_id.clone()).or_default();
            entry.count += 1;

            let slot = match ImageSide::detect(&image.storage_path) {
                Some(ImageSide::Front) => &mut entry.front,
                Some(ImageSide::Back) => &mut entry.back,
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(image.clone());
            }
        }

        Self { entries }
    }

    pub fn get(&self, parallel_id: &str) -> Option<&ImageEntry> {
        self.entries.get(parallel_id)
    }

    pub fn image(&self, parallel_id: &str, side: ImageSide) -> Option<&ParallelImage> {
        self.get(parallel_id).and_then(|e| e.side(side))
    }

    pub fn count(&self, parallel_id: &str) -> usize {
        self.get(parallel_id).map_or(0, |e| e.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ext_falls_back_to_jpg() {
        assert_eq!(file_ext("scan"), "jpg");
        assert_eq!(file_ext("scan."), "jpg");
        assert_eq!(file_ext("Scan.Front.PNG"), "png");
    }

    #[test]
    fn short_path_keeps_both_ends() {
        let shortened = short_path("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(shortened, "abcde\u{2026}vwxyz");
        assert_eq!(short_path("short", 10), "short");
    }
}
