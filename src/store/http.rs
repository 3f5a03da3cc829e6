use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::error::{CatalogError, CatalogResult, Resource};
use crate::model::{AttributeGroupMeta, RawProduct};
use crate::store::traits::CatalogSource;

/// Fetches both catalogs over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    products_url: String,
    attributes_url: String,
}

impl HttpCatalogSource {
    pub fn new(client: Client, products_url: impl Into<String>, attributes_url: impl Into<String>) -> Self {
        Self {
            client,
            products_url: products_url.into(),
            attributes_url: attributes_url.into(),
        }
    }

    /// Build a source with its own client, applying the configured timeout
    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::new(
            client,
            config.products_url.clone(),
            config.attributes_url.clone(),
        ))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: Resource, url: &str) -> CatalogResult<T> {
        log::debug!("Fetching {} from {}", resource, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::unavailable(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::unavailable(
                resource,
                format!("upstream returned status {}", status),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::unavailable(resource, e))?;

        serde_json::from_slice(&body).map_err(|e| CatalogError::malformed(resource, e))
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<RawProduct>> {
        self.fetch_json(Resource::Products, &self.products_url).await
    }

    async fn fetch_attribute_meta(&self) -> CatalogResult<Vec<AttributeGroupMeta>> {
        self.fetch_json(Resource::AttributeMeta, &self.attributes_url)
            .await
    }
}
