//! Trading-card catalog data model, parallel-name parsing, and browse/curation helpers.
//!
//! This crate defines the catalog entities (manufacturers, sports, products,
//! parallels, images) without any database dependencies. Consumers can use
//! these types directly for serialization, display, or passing to
//! `cardcheck-db` for persistence.

pub mod browse;
pub mod curation;
pub mod display;
pub mod parallel_name;
pub mod types;
pub mod yaml;

pub use browse::{
    BrowseFilter, Facet, Facets, ProductGroup, SortOrder, facets, filter_and_sort, group_products,
};
pub use curation::{
    ImageEntry, ImageIndex, changed_badges, file_ext, image_storage_path, new_image_path,
    short_path,
};
pub use display::{ChecklistItem, badge_checklist, display_parallel_name};
pub use parallel_name::{
    SerialInfo, classify_tab_group, infer_badges, parallel_slug, parse_serial_info, slugify,
};
pub use types::*;
pub use yaml::{load_catalog, load_manufacturers, load_products, load_sports};
