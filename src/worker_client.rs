//! HTTP client for the weather worker that hosts the game oracle.

use crate::oracle::{Oracle, OracleError, Verdict};
use crate::weather::WeatherReport;
use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

/// Client for the weather worker endpoint.
///
/// The worker serves both halves of the external interface from one URL:
/// a POST evaluates a guess against the secret city, a GET returns the
/// forecast payload.
#[derive(Debug, Clone)]
pub struct WorkerClient {
    /// Base URL of the worker.
    base_url: String,
    /// Shared HTTP client.
    client: reqwest::Client,
}

impl WorkerClient {
    /// Creates a client for the given worker base URL.
    #[instrument]
    pub fn new(base_url: String) -> Self {
        debug!("Creating worker client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The worker base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads the response body, folding non-success statuses into errors.
    ///
    /// The body is read as text before parsing so error messages can carry
    /// the offending payload.
    async fn read_body(response: reqwest::Response) -> Result<String, OracleError> {
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read worker response");
            OracleError::new(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = %status, response = %text, "Worker returned error status");
            return Err(OracleError::new(format!(
                "Worker error {}: {}",
                status, text
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl Oracle for WorkerClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn evaluate(&self, guess: &str) -> Result<Verdict, OracleError> {
        debug!("Sending guess to worker");

        let request_body = serde_json::json!({ "guess": guess });

        let response = self
            .client
            .post(&self.base_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Worker request failed");
                OracleError::new(format!("Worker request failed: {}", e))
            })?;

        let text = Self::read_body(response).await?;

        debug!(response_length = text.len(), "Parsing verdict");
        let verdict: Verdict = serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, response = %text, "Failed to parse verdict");
            OracleError::new(format!("Failed to parse verdict: {}", e))
        })?;

        info!(
            distance_km = verdict.distance_km,
            direction = %verdict.direction,
            correct = verdict.correct,
            "Guess evaluated"
        );
        Ok(verdict)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn conditions(&self) -> Result<WeatherReport, OracleError> {
        debug!("Fetching forecast from worker");

        let response = self.client.get(&self.base_url).send().await.map_err(|e| {
            error!(error = ?e, "Worker request failed");
            OracleError::new(format!("Worker request failed: {}", e))
        })?;

        let text = Self::read_body(response).await?;

        debug!(response_length = text.len(), "Parsing forecast");
        let report: WeatherReport = serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, response = %text, "Failed to parse forecast");
            OracleError::new(format!("Failed to parse forecast: {}", e))
        })?;

        info!(samples = report.hourly.len(), "Forecast fetched");
        Ok(report)
    }
}
