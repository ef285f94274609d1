//! Transport for the two operations against the GitHub Contents API. Each
//! call performs exactly one outbound request and hands the raw status and
//! body to `common::requests` for interpretation; no retries, no explicit
//! timeout beyond the browser's.

use gloo_net::http::Request;

use common::config::AppConfig;
use common::error::{RemoteReadError, RemoteWriteError};
use common::model::record::{Fields, Record};
use common::requests::{self, UpdateRequest};

const API_ROOT: &str = "https://api.github.com";

pub struct GithubClient {
    config: AppConfig,
}

impl GithubClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.config.token)
    }

    /// Authenticated read of the managed file: rows plus the revision marker
    /// that a later save must present.
    pub async fn fetch_document(&self) -> Result<(Vec<Fields>, String), RemoteReadError> {
        let response = Request::get(&self.config.contents_url(API_ROOT))
            .header("Authorization", &self.auth_header())
            .send()
            .await
            .map_err(|e| RemoteReadError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteReadError::Network(e.to_string()))?;
        requests::parse_contents(status, &body)
    }

    /// Conditional write of the current rows under `sha`. Returns the new
    /// revision marker; a stale `sha` comes back as a distinct conflict.
    pub async fn save_document(
        &self,
        records: &[Record],
        sha: &str,
    ) -> Result<String, RemoteWriteError> {
        let response = Request::put(&self.config.contents_url(API_ROOT))
            .header("Authorization", &self.auth_header())
            .json(&UpdateRequest::new(records, sha))
            .map_err(|e| RemoteWriteError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteWriteError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteWriteError::Network(e.to_string()))?;
        requests::parse_update(status, &body)
    }
}
