//! Minimal SecurityTrails v1 client.
//!
//! Covers exactly the two calls the pipeline needs: the liveness probe and
//! the subdomain lookup. Credential rejection is its own error variant so
//! callers can word the failure for the operator instead of leaking an
//! HTTP status.

use serde::Deserialize;
use thiserror::Error;

use nukr_common::debug;

const API_ROOT: &str = "https://api.securitytrails.com/v1";

#[derive(Debug, Error)]
pub enum SecurityTrailsError {
    /// The service refused the configured API key.
    #[error("SecurityTrails rejected the API key")]
    InvalidKey,

    /// Any other non-success HTTP response.
    #[error("SecurityTrails returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// `GET /domain/{domain}/subdomains` response body.
///
/// The service omits `subdomains` entirely for domains it holds no data
/// on; that decodes as an empty list. Unknown fields (`endpoint`, `meta`)
/// are ignored.
#[derive(Debug, Deserialize)]
struct SubdomainsResponse {
    #[serde(default)]
    subdomains: Vec<String>,
}

pub struct SecurityTrails {
    client: reqwest::Client,
    api_key: String,
    root: String,
}

impl SecurityTrails {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_root(api_key, API_ROOT)
    }

    /// Client against an alternative endpoint root. Lets tests point at a
    /// local server.
    pub fn with_root(api_key: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            root: root.into(),
        }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, SecurityTrailsError> {
        debug!("GET {}{}", self.root, path);
        let response = self
            .client
            .get(format!("{}{}", self.root, path))
            .header("APIKEY", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            Err(SecurityTrailsError::InvalidKey)
        } else {
            Err(SecurityTrailsError::Status(status))
        }
    }

    /// Liveness probe. Fails with [`SecurityTrailsError::InvalidKey`] when
    /// the credential is bad.
    pub async fn ping(&self) -> Result<(), SecurityTrailsError> {
        self.get("/ping").await.map(|_| ())
    }

    /// Known subdomain labels for `domain`, in response order.
    pub async fn domain_subdomains(
        &self,
        domain: &str,
    ) -> Result<Vec<String>, SecurityTrailsError> {
        let response = self.get(&format!("/domain/{domain}/subdomains")).await?;
        let body: SubdomainsResponse = response.json().await?;
        Ok(body.subdomains)
    }
}
