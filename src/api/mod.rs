use reqwest::Client;
use std::time::Duration;

use crate::config::PredictionConfig;

mod error;
pub mod payload;

pub use error::ApiError;
pub use payload::{PredictionRequest, PredictionResponse};

/// Fixed path of the prediction endpoint, appended to the configured base URL.
pub const PREDICT_PATH: &str = "/api/predict";

/// HTTP client for the remote prediction service.
///
/// One request per call, bounded by the configured timeout, no retries.
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(config: &PredictionConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Unknown(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    /// POST the request and decode the success body.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        let url = self.endpoint();

        tracing::debug!(
            "Requesting prediction from {} ({} workouts, {} metric samples)",
            url,
            request.workout_history.len(),
            request.fitness_metrics.len()
        );

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PredictionClient::new(&PredictionConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = PredictionConfig {
            base_url: "http://models.local:8000/".to_string(),
            ..Default::default()
        };
        let client = PredictionClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://models.local:8000/api/predict");
    }
}
