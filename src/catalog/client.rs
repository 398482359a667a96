//! HTTP catalog source backed by the public NUSMods v2 API.

use crate::catalog::model::CatalogModule;
use crate::catalog::CatalogSource;
use crate::config::CatalogConfig;
use crate::error::{ApiError, CatalogError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.nusmods.com/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CATALOG_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches general module records over HTTP. One request per module, no retries.
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(CATALOG_HTTP_CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a prepared client, e.g. one with custom proxy or TLS settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    /// General (all-terms) endpoint. Term-scoped paths are not used.
    pub fn module_url(&self, academic_year: &str, module_code: &str) -> String {
        format!(
            "{}/{}/modules/{}.json",
            self.base_url, academic_year, module_code
        )
    }
}

fn map_request_error(error: reqwest::Error, url: &str) -> CatalogError {
    if error.is_timeout() {
        CatalogError::Timeout(url.to_string())
    } else if error.is_connect() {
        CatalogError::Request(format!("Connection error for {}: {}", url, error))
    } else {
        CatalogError::Request(format!("{}: {}", url, error))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_module(
        &self,
        academic_year: &str,
        module_code: &str,
    ) -> Result<CatalogModule, CatalogError> {
        let url = self.module_url(academic_year, module_code);
        debug!(url = %url, module_code, "Fetching catalog module");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_request_error(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                module_code: module_code.to_string(),
            });
        }

        response.json::<CatalogModule>().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout(url.clone())
            } else {
                CatalogError::Decode(format!("{}: {}", module_code, e))
            }
        })
    }

    fn source_name(&self) -> &str {
        "http"
    }
}
