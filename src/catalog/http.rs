use crate::catalog::traits::CatalogSource;
use crate::error::{CatalogError, Result};
use crate::models::Property;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Listings fetched with a GET from a fixed URL
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("listing-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Property>> {
        debug!("Fetching URL: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Data source returned status: {}", response.status());
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of JSON", body.len());

        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
