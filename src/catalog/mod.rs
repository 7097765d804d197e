pub mod file;
pub mod http;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use traits::CatalogSource;

use crate::error::Result;
use crate::models::Catalog;
use chrono::Utc;
use tracing::{info, warn};

/// Pick a source for a location: http(s) URLs go over the network,
/// anything else is treated as a file path.
pub fn source_for(location: &str) -> Result<Box<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Load the session catalog. A failing source yields an empty catalog;
/// the failure is logged and never propagated.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.fetch().await {
        Ok(records) => {
            info!("Loaded {} properties from {}", records.len(), source.describe());
            Catalog::from_records(records, Utc::now().timestamp_millis())
        }
        Err(e) => {
            warn!("Failed to load properties from {}: {}", source.describe(), e);
            Catalog::empty()
        }
    }
}
