//! HTTP data source

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::{Result, ToolkitError};

use super::{DataSource, Document};

/// Published location of the directory data
pub const DEFAULT_BASE_URL: &str = "https://escola-de-dados.github.io/toolkit_ddj/data/";

/// Fetches documents relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut builder = Client::builder().timeout(timeout);
        // Local mirrors are reached directly
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ToolkitError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Full URL of a document
    pub fn url(&self, document: Document) -> String {
        format!("{}{}", self.base_url, document.file_name())
    }
}

fn is_loopback(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);
    rest.starts_with("localhost") || rest.starts_with("127.") || rest.starts_with("[::1]")
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, document: Document) -> Result<String> {
        let url = self.url(document);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ToolkitError::Fetch(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ToolkitError::Fetch(format!("{} returned {}", url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| ToolkitError::Fetch(format!("Failed to read body of {}: {}", url, e)))
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}
