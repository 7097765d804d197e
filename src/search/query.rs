use crate::models::{Catalog, Property};
use crate::search::criteria::{Criteria, SortMode};
use crate::search::normalize::normalize;
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashSet};

/// Membership test for the favorites filter
pub trait FavoriteIds {
    fn contains_id(&self, id: &str) -> bool;
}

impl FavoriteIds for IndexSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl FavoriteIds for BTreeSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl FavoriteIds for HashSet<String> {
    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }
}

/// Run one search over the catalog.
///
/// Pure: the catalog is never reordered and repeated calls with the same
/// inputs give the same answer. Text search runs first, then every active
/// attribute filter (all must hold), then a stable sort so ties keep
/// catalog load order.
pub fn query<'a, F: FavoriteIds + ?Sized>(
    catalog: &'a Catalog,
    favorites: &F,
    criteria: &Criteria,
) -> Vec<&'a Property> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let needle = criteria.search.trim();
    let needle = (!needle.is_empty()).then(|| normalize(needle));

    let mut matched: Vec<&Property> = catalog
        .iter()
        .filter(|p| needle.as_deref().map_or(true, |n| matches_text(p, n)))
        .filter(|p| matches_filters(p, favorites, criteria))
        .collect();

    match criteria.sort {
        SortMode::Recent => matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::PriceAsc => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    matched
}

fn matches_text(property: &Property, needle: &str) -> bool {
    [&property.name, &property.address, &property.description]
        .iter()
        .any(|field| normalize(field).contains(needle))
}

fn matches_filters<F: FavoriteIds + ?Sized>(
    property: &Property,
    favorites: &F,
    criteria: &Criteria,
) -> bool {
    let city = criteria.city.as_ref().map_or(true, |c| &property.city == c);
    let price = property.price >= criteria.min_price && property.price <= criteria.max_price;
    let bedrooms = criteria.bedrooms.matches(property.bedrooms);
    let tags = criteria.tags.iter().all(|t| property.has_tag(t));
    let favorite = !criteria.favorites_only || favorites.contains_id(&property.id);

    city && price && bedrooms && tags && favorite
}
