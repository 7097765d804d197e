use crate::error::Result;
use crate::models::Property;
use async_trait::async_trait;

/// Common trait for everything that can hand over the listings document.
/// Records come back in load order; stamping recency is the catalog's job.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every listing record
    async fn fetch(&self) -> Result<Vec<Property>>;

    /// Human-readable location of the source, for logs
    fn describe(&self) -> String;
}
