//! Read-only Docker Registry v2 client
//!
//! Implements the two listing calls the sync pipeline needs:
//! - Catalog listing (GET /v2/_catalog)
//! - Tag listing (GET /v2/{name}/tags/list)
//!
//! Both speak plain HTTP without credentials. Neither follows pagination:
//! whatever the first page holds is the listing.

use crate::common::traits::RegistryReader;
use crate::error::handlers::{HttpErrorHandler, NetworkErrorHandler};
use crate::error::{Result, SyncError};
use crate::logging::{Logger, Verbosity};
use crate::registry::types::{CatalogResponse, TagListResponse};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::LINK;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RegistryClientBuilder {
    timeout: Duration,
    output: Option<Logger>,
}

impl RegistryClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            output: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_logger(mut self, output: Logger) -> Self {
        self.output = Some(output);
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SyncError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(RegistryClient {
            client,
            timeout: self.timeout,
            output: self
                .output
                .unwrap_or_else(|| Logger::new(env!("CARGO_PKG_NAME"), Verbosity::default())),
        })
    }
}

impl Default for RegistryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct RegistryClient {
    client: Client,
    timeout: Duration,
    output: Logger,
}

impl RegistryClient {
    pub fn builder() -> RegistryClientBuilder {
        RegistryClientBuilder::new()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn catalog_url(endpoint: &str) -> Result<Url> {
        Ok(Url::parse(&format!("http://{}/v2/_catalog", endpoint))?)
    }

    pub fn tags_url(endpoint: &str, repository: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "http://{}/v2/{}/tags/list",
            endpoint, repository
        ))?)
    }

    /// List every repository the registry exposes, in registry order
    pub async fn fetch_catalog(&self, endpoint: &str) -> Result<Vec<String>> {
        self.output.info("Fetching source catalog...");

        let url = Self::catalog_url(endpoint)?;
        let catalog: CatalogResponse = self.get_json(&url, "catalog").await?;

        let repositories = catalog.repositories.ok_or_else(|| {
            self.output.error("Failed to fetch catalog");
            HttpErrorHandler::missing_field("repositories", "catalog", url.as_str())
        })?;

        self.output.json(&repositories);
        Ok(repositories)
    }

    /// List every tag of one repository, in registry order
    pub async fn fetch_tags(&self, endpoint: &str, repository: &str) -> Result<Vec<String>> {
        self.output.info(&format!(
            "Fetching source container image tags for {}...",
            repository
        ));

        let url = Self::tags_url(endpoint, repository)?;
        let listing: TagListResponse = self.get_json(&url, "tags").await?;

        let tags = listing.tags.ok_or_else(|| {
            self.output.error("Failed to fetch tags");
            HttpErrorHandler::missing_field("tags", "tags", url.as_str())
        })?;

        self.output.json(&tags);
        Ok(tags)
    }

    /// GET `url` and decode the body, whatever the status code says
    async fn get_json<T: DeserializeOwned>(&self, url: &Url, operation: &str) -> Result<T> {
        self.output.debug(&format!("GET {}", url));

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            self.output
                .error(&format!("Failed to fetch {}: {}", operation, e));
            NetworkErrorHandler::handle_network_error(&e, &format!("{} listing", operation))
        })?;

        let status = response.status();
        if !status.is_success() {
            self.output
                .warning(&HttpErrorHandler::describe_status(status, &format!("{} listing", operation)));
        }

        if let Some(link) = response.headers().get(LINK) {
            self.output.warning(&format!(
                "Registry returned a partial {} listing (Link: {}); further pages are not fetched",
                operation,
                link.to_str().unwrap_or("<non-ascii>")
            ));
        }

        let body = response.text().await.map_err(|e| {
            NetworkErrorHandler::handle_network_error(&e, &format!("reading {} response", operation))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            self.output
                .error(&format!("Failed to fetch {}", operation));
            HttpErrorHandler::undecodable(operation, url.as_str(), &e)
        })
    }
}

#[async_trait]
impl RegistryReader for RegistryClient {
    async fn fetch_catalog(&self, endpoint: &str) -> Result<Vec<String>> {
        RegistryClient::fetch_catalog(self, endpoint).await
    }

    async fn fetch_tags(&self, endpoint: &str, repository: &str) -> Result<Vec<String>> {
        RegistryClient::fetch_tags(self, endpoint, repository).await
    }
}
