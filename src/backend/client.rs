use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::notification::BackendNotification;
use crate::backend::url::BackendUrl;

/// Route listing rules the backend could not transform.
pub const WARNINGS_PATH: &str = "control/warnings";
/// Route reporting whether clingraph visualization is enabled.
pub const CLINGRAPH_PATH: &str = "control/clingraph";
/// Route serving the transformation rows of the graph.
pub const TRANSFORMATIONS_PATH: &str = "graph/transformations";

#[derive(Debug, Deserialize)]
struct ClingraphUsage {
    using_clingraph: bool,
}

/// HTTP client for the backend endpoints the dashboard state depends on.
///
/// No timeout is configured: a hanging backend leaves the request pending,
/// and only the mount guard of the caller decides whether its result is
/// still applied.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
}

impl BackendClient {
    pub fn new() -> Result<Self, BackendError> {
        let http = Client::builder()
            .user_agent(concat!("viasp-dash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(BackendError::Client)?;
        Ok(Self { http })
    }

    /// `GET control/warnings`.
    pub async fn fetch_warnings(
        &self,
        backend: &BackendUrl,
    ) -> Result<Vec<BackendNotification>, BackendError> {
        self.get_json(backend.resolve(WARNINGS_PATH)).await
    }

    /// `GET control/clingraph`.
    pub async fn fetch_clingraph_usage(&self, backend: &BackendUrl) -> Result<bool, BackendError> {
        let usage: ClingraphUsage = self.get_json(backend.resolve(CLINGRAPH_PATH)).await?;
        Ok(usage.using_clingraph)
    }

    /// Check that `graph/transformations` is reachable.
    ///
    /// Only transport failures count; status and body are not inspected.
    pub async fn probe_transformations(&self, backend: &BackendUrl) -> Result<(), BackendError> {
        let url = backend.resolve(TRANSFORMATIONS_PATH);
        self.http
            .get(&url)
            .send()
            .await
            .map_err(|source| BackendError::Connection { url, source })?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, BackendError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| BackendError::Connection {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| BackendError::Decode { url, source })
    }
}
