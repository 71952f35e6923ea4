use serde::{Deserialize, Serialize};

/// One historical salary observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub job_title: String,
    pub experience_level: String,
    /// Residence region of the employee (continent-level grouping)
    pub employee_residence: String,
    pub employee_country: String,
    pub company_country: String,
    pub salary_in_usd: f64,
}

/// Column used to group records for the charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    EmployeeCountry,
    EmployeeResidence,
}

impl GroupKey {
    /// Extract the grouping value from a record
    pub fn value<'a>(&self, record: &'a SalaryRecord) -> &'a str {
        match self {
            GroupKey::EmployeeCountry => &record.employee_country,
            GroupKey::EmployeeResidence => &record.employee_residence,
        }
    }
}

/// Median salary of one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMedian {
    pub group: String,
    #[serde(rename = "medianSalaryUsd")]
    pub median_salary_usd: f64,
}

/// A styled chart data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    #[serde(rename = "medianSalaryUsd")]
    pub median_salary_usd: f64,
    pub color: String,
}

/// A titled chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

/// Chart data for one job title: a choropleth by country and a bar chart by region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryCharts {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub map: ChartSeries,
    pub bar: ChartSeries,
}

/// Selectable values and defaults for the dashboard dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    #[serde(rename = "jobTitles")]
    pub job_titles: Vec<String>,
    #[serde(rename = "experienceLevels")]
    pub experience_levels: Vec<String>,
    #[serde(rename = "employeeCountries")]
    pub employee_countries: Vec<String>,
    #[serde(rename = "companyCountries")]
    pub company_countries: Vec<String>,
    pub defaults: OptionDefaults,
}

/// Initially selected dropdown values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDefaults {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(rename = "experienceLevel")]
    pub experience_level: String,
    #[serde(rename = "employeeCountry")]
    pub employee_country: String,
    #[serde(rename = "companyCountry")]
    pub company_country: String,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            job_title: "Software Engineer".to_string(),
            experience_level: "Mid_level".to_string(),
            employee_country: "United States".to_string(),
            company_country: "United States".to_string(),
        }
    }
}

/// Job attributes forwarded to the prediction endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobAttributes {
    pub job_title: String,
    pub experience_level: String,
    pub employee_country: String,
    pub company_country: String,
}

/// Prediction returned by the remote endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_salary: f64,
    /// Pre-labeled bracket from the endpoint; informational only
    #[serde(default)]
    pub predicted_range: Option<String>,
}
