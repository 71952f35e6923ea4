//! Salary Dash - backend for the salary prediction dashboard
//!
//! This library turns a remote salary prediction into a salary bracket
//! computed from a historical dataset, and prepares the median salary charts
//! shown next to it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_ranges, bucket_for, RangeTable, SalaryRange, RangeError};
pub use crate::models::{SalaryRecord, PredictRequest, PredictResponse, SalaryCharts};
