use crate::catalog::traits::CatalogSource;
use crate::error::Result;
use crate::models::Property;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Listings read from a JSON file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Property>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes from {}", raw.len(), self.path.display());
        Ok(serde_json::from_str(&raw)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
