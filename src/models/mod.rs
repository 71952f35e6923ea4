// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{SalaryRecord, GroupKey, GroupMedian, ChartPoint, ChartSeries, SalaryCharts, DashboardOptions, OptionDefaults, JobAttributes, PredictionResult};
pub use requests::{PredictRequest, ChartsQuery, UpstreamPredictionRequest};
pub use responses::{PredictResponse, RangeEntry, HealthResponse, ErrorResponse};
