//! Listing catalog browser: loads a static set of property records and
//! answers search, filter and sort queries over it, with a locally
//! persisted favorites set.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod search;
pub mod view;

pub use catalog::{load_catalog, CatalogSource};
pub use favorites::{FavoritesStore, FileStorage, MemoryStorage};
pub use models::{Catalog, Property};
pub use search::{query, Criteria, RawCriteria};
