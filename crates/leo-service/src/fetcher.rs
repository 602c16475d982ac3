//! reqwest-backed knowledge-document fetcher.

use serde_json::Value;

use leo_core::errors::KbError;
use leo_kb::store::{DocKey, DocumentFetcher};

/// Fetches knowledge documents over HTTPS. Documents are JSON blobs on
/// static storage; a non-2xx status or a non-JSON body is a fetch failure
/// the store degrades on.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, key: DocKey, url: &str) -> Result<Value, KbError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| KbError::FetchFailed {
                key: key.name().to_string(),
                reason: e.to_string(),
            })?;

        response.json().await.map_err(|e| KbError::ParseFailed {
            key: key.name().to_string(),
            reason: e.to_string(),
        })
    }
}
