use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Spacing between synthetic recency stamps, in milliseconds
pub const RECENCY_STEP_MS: i64 = 60_000;

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub price: f64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area_sqm: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    /// Listing kind as published by the data source ("Residence" or anything else)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Recency ordinal assigned when the catalog is loaded
    #[serde(default)]
    pub timestamp: i64,
}

impl Property {
    /// Cover image, if the record has any images at all
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The full set of listings for a session.
///
/// Built once from the records handed over by a data source and read-only
/// afterwards: there is no way to add, remove or reorder entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from records in load order, stamping recency so that
    /// the last record is the most recent: `now - (N-1-index) * 60s`.
    pub fn from_records(mut records: Vec<Property>, now_ms: i64) -> Self {
        let n = records.len() as i64;
        for (index, property) in records.iter_mut().enumerate() {
            property.timestamp = now_ms - (n - 1 - index as i64) * RECENCY_STEP_MS;
        }
        Self { properties: records }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Featured listings in load order, at most `limit` of them
    pub fn featured(&self, limit: usize) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.is_featured)
            .take(limit)
            .collect()
    }

    /// Distinct cities, sorted
    pub fn cities(&self) -> Vec<&str> {
        self.properties
            .iter()
            .map(|p| p.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
