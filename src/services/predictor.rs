use crate::models::{JobAttributes, PredictionResult, UpstreamPredictionRequest};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the prediction endpoint
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Prediction API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the remote salary-prediction endpoint
///
/// Sends one set of job attributes per request and expects a JSON body with
/// a numeric `predicted_salary`. There are no retries: a failed call is
/// reported to the dashboard as-is.
pub struct PredictionClient {
    endpoint: String,
    client: Client,
}

impl PredictionClient {
    /// Create a new prediction client
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a salary prediction for the given attributes
    pub async fn predict(&self, attributes: &JobAttributes) -> Result<PredictionResult, PredictionError> {
        let body = UpstreamPredictionRequest::from(attributes.clone());

        tracing::debug!("Requesting prediction from {}: {:?}", self.endpoint, attributes);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Prediction API error: {} - {}", status, text);
            return Err(PredictionError::ApiError(format!(
                "Failed to fetch prediction: {}",
                status
            )));
        }

        let json: Value = response.json().await?;
        tracing::info!("Prediction response: {}", json);

        parse_prediction(&json)
    }
}

/// Extract the prediction from the endpoint's JSON body
pub fn parse_prediction(json: &Value) -> Result<PredictionResult, PredictionError> {
    let predicted_salary = json
        .get("predicted_salary")
        .and_then(Value::as_f64)
        .filter(|s| s.is_finite())
        .ok_or_else(|| PredictionError::InvalidResponse("Missing numeric predicted_salary".into()))?;

    let predicted_range = json
        .get("predicted_range")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(PredictionResult {
        predicted_salary,
        predicted_range,
    })
}
