use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::JobAttributes;

/// Request for a salary prediction
///
/// Fields are optional so a cleared dropdown (missing key or `null`) reaches
/// the handler and is reported as an incomplete selection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1))]
    #[serde(default, alias = "job_title", rename = "jobTitle")]
    pub job_title: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "experience_level", rename = "experienceLevel")]
    pub experience_level: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "employee_country", rename = "employeeCountry")]
    pub employee_country: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "company_country", rename = "companyCountry")]
    pub company_country: Option<String>,
}

impl PredictRequest {
    /// Trimmed attributes to forward upstream
    pub fn attributes(&self) -> JobAttributes {
        JobAttributes {
            job_title: trimmed(&self.job_title),
            experience_level: trimmed(&self.experience_level),
            employee_country: trimmed(&self.employee_country),
            company_country: trimmed(&self.company_country),
        }
    }

    /// True when any field is missing, null or blank after trimming
    pub fn has_blank_field(&self) -> bool {
        [
            &self.job_title,
            &self.experience_level,
            &self.employee_country,
            &self.company_country,
        ]
        .iter()
        .any(|f| f.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}

fn trimmed(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Query parameters for the charts endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsQuery {
    #[serde(alias = "job_title", rename = "jobTitle")]
    pub job_title: Option<String>,
}

/// Body sent to the prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamPredictionRequest {
    pub inputs: Vec<JobAttributes>,
}

impl From<JobAttributes> for UpstreamPredictionRequest {
    fn from(attributes: JobAttributes) -> Self {
        Self { inputs: vec![attributes] }
    }
}
