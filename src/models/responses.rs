use serde::{Deserialize, Serialize};
use crate::core::SalaryRange;
use crate::models::domain::SalaryCharts;
use crate::services::CacheStats;

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "predictionId")]
    pub prediction_id: String,
    #[serde(rename = "predictedSalary")]
    pub predicted_salary: f64,
    /// Bracket label, `None` when the prediction falls outside the historical range
    #[serde(rename = "salaryRange")]
    pub salary_range: Option<String>,
    pub message: String,
    pub cached: bool,
    pub charts: SalaryCharts,
}

/// One row of the range table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeEntry {
    pub lower: i64,
    pub upper: i64,
    pub label: String,
}

impl From<&SalaryRange> for RangeEntry {
    fn from(range: &SalaryRange) -> Self {
        Self {
            lower: range.lower,
            upper: range.upper,
            label: range.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub records: usize,
    pub cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
