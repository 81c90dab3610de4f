//! Results collector client
//!
//! The collector accepts a whole batch in one request: a form-encoded POST
//! of the JSON-serialized records to `/result/add/json/`. Transmission is
//! blocking and all-or-nothing; a rejected or unreachable collector fails
//! the run.

use crate::{SpeedRecord, UploadError};
use tracing::info;

/// Anything that can accept a finished result batch.
///
/// The production implementation is [`SpeedCenterClient`]; tests substitute
/// an in-memory recorder.
pub trait ResultSink {
    /// Submit the batch. Called at most once per run.
    fn submit(&self, batch: &[SpeedRecord]) -> Result<(), UploadError>;
}

/// HTTP client for a codespeed-style results collector.
#[derive(Debug)]
pub struct SpeedCenterClient {
    base_url: String,
    token: String,
    http: reqwest::blocking::Client,
}

impl SpeedCenterClient {
    /// Create a client for the collector at `base_url`, authenticating with
    /// the given API token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, UploadError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("benchrelay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            token: token.into(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/result/add/json/", self.base_url)
    }
}

impl ResultSink for SpeedCenterClient {
    fn submit(&self, batch: &[SpeedRecord]) -> Result<(), UploadError> {
        let payload = serde_json::to_string(batch)?;

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.token)
            .form(&[("json", payload.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(UploadError::Rejected { status, body });
        }

        info!(records = batch.len(), url = %self.endpoint(), "batch accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_trailing_slash() {
        let with = SpeedCenterClient::new("https://speed.example.io/", "t").unwrap();
        let without = SpeedCenterClient::new("https://speed.example.io", "t").unwrap();
        assert_eq!(with.endpoint(), "https://speed.example.io/result/add/json/");
        assert_eq!(with.endpoint(), without.endpoint());
    }
}
