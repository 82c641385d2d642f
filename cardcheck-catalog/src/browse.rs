//! Filtering, sorting, and grouping of the active product listing.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use crate::types::ProductSummary;

/// Ordering of the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Year descending.
    #[default]
    Newest,
    /// Year ascending.
    Oldest,
    /// Name A to Z.
    Az,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Az => "az",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "az" | "a-z" | "name" => Ok(Self::Az),
            other => Err(format!("unknown sort order '{other}' (expected newest, oldest, or az)")),
        }
    }
}

/// Browse filter state. `None` on any field means "all".
#[derive(Debug, Clone, Default)]
pub struct BrowseFilter {
    pub search: Option<String>,
    pub sport: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<i32>,
    pub sort: SortOrder,
}

/// A selectable filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub slug: String,
    pub name: String,
}

/// Distinct filter values present in a product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Sorted by name.
    pub sports: Vec<Facet>,
    /// Sorted by name.
    pub manufacturers: Vec<Facet>,
    /// Newest first.
    pub years: Vec<i32>,
}

/// A run of products sharing sport and manufacturer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    /// `"<sport> • <manufacturer>"`.
    pub label: String,
    pub products: Vec<ProductSummary>,
}

/// Collect the distinct sports, manufacturers, and years of a product list.
pub fn facets(products: &[ProductSummary]) -> Facets {
    // Later entries win for a repeated slug
    let mut sports: HashMap<&str, &str> = HashMap::new();
    let mut manufacturers: HashMap<&str, &str> = HashMap::new();
    let mut years = BTreeSet::new();

    for p in products {
        sports.insert(&p.sport_slug, &p.sport_name);
        manufacturers.insert(&p.manufacturer_slug, &p.manufacturer_name);
        years.insert(p.year);
    }

    Facets {
        sports: sorted_facets(sports),
        manufacturers: sorted_facets(manufacturers),
        years: years.into_iter().rev().collect(),
    }
}

fn sorted_facets(map: HashMap<&str, &str>) -> Vec<Facet> {
    let mut facets: Vec<Facet> = map
        .into_iter()
        .map(|(slug, name)| Facet {
            slug: slug.to_string(),
            name: name.to_string(),
        })
        .collect();
    facets.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.slug.cmp(&b.slug)));
    facets
}

/// Case-insensitive name ordering with a case-sensitive tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn matches_search(p: &ProductSummary, term: &str) -> bool {
    p.name.to_lowercase().contains(term)
        || p.manufacturer_name.to_lowercase().contains(term)
        || p.sport_name.to_lowercase().contains(term)
        || p.year.to_string().contains(term)
}

/// Apply the filter and sort order, returning a new list.
pub fn filter_and_sort(products: &[ProductSummary], filter: &BrowseFilter) -> Vec<ProductSummary> {
    let term = filter
        .search
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase);

    let mut result: Vec<ProductSummary> = products
        .iter()
        .filter(|p| term.as_deref().is_none_or(|t| matches_search(p, t)))
        .filter(|p| filter.sport.as_deref().is_none_or(|s| p.sport_slug == s))
        .filter(|p| {
            filter
                .manufacturer
                .as_deref()
                .is_none_or(|m| p.manufacturer_slug == m)
        })
        .filter(|p| filter.year.is_none_or(|y| p.year == y))
        .cloned()
        .collect();

    match filter.sort {
        SortOrder::Newest => result.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOrder::Oldest => result.sort_by(|a, b| a.year.cmp(&b.year)),
        SortOrder::Az => result.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }

    result
}

/// Group an already sorted list by sport and manufacturer.
///
/// Groups appear in the order their first product appears; products keep
/// their relative order within a group.
pub fn group_products(products: &[ProductSummary]) -> Vec<ProductGroup> {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for p in products {
        let label = format!("{} \u{2022} {}", p.sport_name, p.manufacturer_name);
        match index.get(&label) {
            Some(&i) => groups[i].products.push(p.clone()),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(ProductGroup {
                    label,
                    products: vec![p.clone()],
                });
            }
        }
    }

    groups
}
