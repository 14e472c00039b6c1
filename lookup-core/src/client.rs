use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::WeatherRecord;

/// Every way a single lookup can fail. The `Display` output of each variant
/// is the exact message shown to the user.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backend answered with a non-2xx status. `detail` carries the
    /// backend's own explanation when its error body had one.
    #[error("{}", .detail.as_deref().unwrap_or("Failed to submit lookup request"))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },

    /// The request never completed: connect failure, DNS, or the body could
    /// not be read.
    #[error("Network error: Could not connect to the server")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 2xx but the body was not a weather record.
    #[error("Failed to parse weather data returned by the server")]
    MalformedBody(#[from] serde_json::Error),
}

/// Backend collaborator seam: anything that can produce the weather record
/// stored under an identifier.
#[async_trait]
pub trait WeatherStore: Send + Sync + Debug {
    async fn fetch_record(&self, id: &str) -> Result<WeatherRecord, LookupError>;
}

/// HTTP implementation against the weather data backend.
#[derive(Debug, Clone)]
pub struct HttpWeatherStore {
    base_url: String,
    http: Client,
}

impl HttpWeatherStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

/// Error body of the backend, `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[async_trait]
impl WeatherStore for HttpWeatherStore {
    async fn fetch_record(&self, id: &str) -> Result<WeatherRecord, LookupError> {
        // The identifier goes into the path verbatim, no percent-encoding.
        let url = format!("{}/weather/{}", self.base_url, id);
        debug!("GET {url}");

        let res = self
            .http
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!("backend answered {status} ({} bytes)", body.len());

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail);
            return Err(LookupError::Rejected { status, detail });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
