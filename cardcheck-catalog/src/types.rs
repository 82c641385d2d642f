//! Data model types for the card catalog.
//!
//! These types mirror the backend schema (manufacturers, sports, products,
//! parallels, parallel images) plus the intermediate records produced by the
//! checklist classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Reference data ──────────────────────────────────────────────────────────

/// A card manufacturer (Panini, Topps, ...), loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A sport a product belongs to, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// ── Product ─────────────────────────────────────────────────────────────────

/// A product set, e.g. "2024-25 Panini Prizm Basketball".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub full_display_name: String,
    pub slug: String,
    pub year: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub manufacturer_id: Option<String>,
    #[serde(default)]
    pub sport_id: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Flattened product row used by the browse listing.
///
/// Manufacturer and sport are resolved to display names; a product without
/// one gets `Unknown` / `unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub year: i32,
    pub manufacturer_name: String,
    pub manufacturer_slug: String,
    pub sport_name: String,
    pub sport_slug: String,
}

/// Display name used when a product has no manufacturer or sport.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Slug used when a product has no manufacturer or sport.
pub const UNKNOWN_SLUG: &str = "unknown";

// ── Badges ──────────────────────────────────────────────────────────────────

/// Badge attributes of a parallel.
///
/// Field order is the serialized order of the checklist dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSet {
    pub is_hobby_exclusive: bool,
    pub is_retail_exclusive: bool,
    pub is_fotl_hit: bool,
    pub is_numbered: bool,
    pub is_auto: bool,
    pub is_sp: bool,
    pub is_ssp: bool,
    pub serial_max: Option<u32>,
}

/// A toggleable badge flag, in admin display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKey {
    HobbyExclusive,
    RetailExclusive,
    FotlHit,
    Numbered,
    Auto,
    Sp,
    Ssp,
}

impl BadgeKey {
    pub const ALL: [BadgeKey; 7] = [
        BadgeKey::HobbyExclusive,
        BadgeKey::RetailExclusive,
        BadgeKey::FotlHit,
        BadgeKey::Numbered,
        BadgeKey::Auto,
        BadgeKey::Sp,
        BadgeKey::Ssp,
    ];

    /// Column name in the `parallels` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::HobbyExclusive => "is_hobby_exclusive",
            Self::RetailExclusive => "is_retail_exclusive",
            Self::FotlHit => "is_fotl_hit",
            Self::Numbered => "is_numbered",
            Self::Auto => "is_auto",
            Self::Sp => "is_sp",
            Self::Ssp => "is_ssp",
        }
    }

    /// Short label shown on badge toggles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HobbyExclusive => "Hobby",
            Self::RetailExclusive => "Retail",
            Self::FotlHit => "FOTL",
            Self::Numbered => "#'d",
            Self::Auto => "Auto",
            Self::Sp => "SP",
            Self::Ssp => "SSP",
        }
    }
}

impl fmt::Display for BadgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for BadgeKey {
    type Err = String;

    /// Accepts the column name (`is_sp`), the bare name (`sp`), or the label (`SP`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("is_").unwrap_or(&lower);
        match bare {
            "hobby_exclusive" | "hobby" => Ok(Self::HobbyExclusive),
            "retail_exclusive" | "retail" => Ok(Self::RetailExclusive),
            "fotl_hit" | "fotl" => Ok(Self::FotlHit),
            "numbered" | "#'d" => Ok(Self::Numbered),
            "auto" => Ok(Self::Auto),
            "sp" => Ok(Self::Sp),
            "ssp" => Ok(Self::Ssp),
            _ => Err(format!("unknown badge '{s}'")),
        }
    }
}

impl BadgeSet {
    pub fn get(&self, key: BadgeKey) -> bool {
        match key {
            BadgeKey::HobbyExclusive => self.is_hobby_exclusive,
            BadgeKey::RetailExclusive => self.is_retail_exclusive,
            BadgeKey::FotlHit => self.is_fotl_hit,
            BadgeKey::Numbered => self.is_numbered,
            BadgeKey::Auto => self.is_auto,
            BadgeKey::Sp => self.is_sp,
            BadgeKey::Ssp => self.is_ssp,
        }
    }

    pub fn set(&mut self, key: BadgeKey, value: bool) {
        let slot = match key {
            BadgeKey::HobbyExclusive => &mut self.is_hobby_exclusive,
            BadgeKey::RetailExclusive => &mut self.is_retail_exclusive,
            BadgeKey::FotlHit => &mut self.is_fotl_hit,
            BadgeKey::Numbered => &mut self.is_numbered,
            BadgeKey::Auto => &mut self.is_auto,
            BadgeKey::Sp => &mut self.is_sp,
            BadgeKey::Ssp => &mut self.is_ssp,
        };
        *slot = value;
    }
}

// ── Checklist classification ────────────────────────────────────────────────

/// The checklist workbook sheet a parallel was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistSheet {
    Base,
    Autographs,
}

impl ChecklistSheet {
    /// Sheet name as it appears in the workbook.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Autographs => "Autographs",
        }
    }

    /// Autograph sheets carry the auto badge regardless of name text.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Autographs)
    }
}

/// UI tab a parallel is listed under. Exactly one per parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabGroup {
    BaseNonSerial,
    BaseSerial,
    Autos,
}

impl TabGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseNonSerial => "base-non-serial",
            Self::BaseSerial => "base-serial",
            Self::Autos => "autos",
        }
    }
}

/// A parallel name read from a checklist sheet, with its inferred badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedParallel {
    pub raw_name: String,
    pub sheet: ChecklistSheet,
    pub tab_group: TabGroup,
    pub badges: BadgeSet,
}

/// Insert-ready projection of a [`ClassifiedParallel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertRow {
    /// Product key; the literal placeholder until the operator substitutes it.
    pub product_id: String,
    pub name: String,
    pub slug: String,
    pub badges: BadgeSet,
}

/// Placeholder written in place of the real `products.id`.
pub const PRODUCT_ID_PLACEHOLDER: &str = "__PRODUCT_ID__";

// ── Parallel ────────────────────────────────────────────────────────────────

/// A stored parallel of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parallel {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub slug: String,
    pub badges: BadgeSet,
    pub sort_order: Option<i64>,
}

// ── Images ──────────────────────────────────────────────────────────────────

/// Which face of the card an image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSide {
    Front,
    Back,
}

impl ImageSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for ImageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(format!("unknown image side '{other}' (expected front or back)")),
        }
    }
}

/// A stored image record for a parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelImage {
    pub id: i64,
    pub parallel_id: String,
    pub storage_path: String,
}
