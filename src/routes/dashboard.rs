use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{build_charts, RangeTable};
use crate::models::{ChartsQuery, ErrorResponse, HealthResponse, PredictRequest, PredictResponse, RangeEntry, SalaryCharts};
use crate::services::{CacheKey, Dataset, PredictionCache, PredictionClient};
use std::sync::Arc;

const INCOMPLETE_FIELDS_MESSAGE: &str = "Please complete all fields.";
const PREDICTION_FAILED_MESSAGE: &str = "There was an error obtaining the prediction. Please try again later.";

/// Application state shared across all handlers
///
/// Everything here is built once at start-up; the dataset and range table
/// are never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub ranges: Arc<RangeTable>,
    pub predictor: Arc<PredictionClient>,
    pub cache: Arc<PredictionCache>,
}

/// Configure all dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/options", web::get().to(get_options))
        .route("/ranges", web::get().to(get_ranges))
        .route("/charts", web::get().to(get_charts))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        records: state.dataset.len(),
        cache: state.cache.stats(),
    })
}

/// Dropdown values for the dashboard
///
/// GET /api/v1/options
async fn get_options(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.dataset.options())
}

/// Salary brackets derived from the historical dataset
///
/// GET /api/v1/ranges
async fn get_ranges(state: web::Data<AppState>) -> impl Responder {
    let entries: Vec<RangeEntry> = state.ranges.ranges().iter().map(RangeEntry::from).collect();
    HttpResponse::Ok().json(entries)
}

/// Chart data for one job title
///
/// GET /api/v1/charts?jobTitle={jobTitle}
async fn get_charts(
    state: web::Data<AppState>,
    query: web::Query<ChartsQuery>,
) -> impl Responder {
    let job_title = match query.job_title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing jobTitle parameter".to_string(),
                message: "jobTitle query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    HttpResponse::Ok().json(build_charts(state.dataset.records(), job_title))
}

/// Salary prediction endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "jobTitle": "Data Scientist",
///   "experienceLevel": "Senior",
///   "employeeCountry": "Spain",
///   "companyCountry": "Spain"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if req.validate().is_err() || req.has_blank_field() {
        tracing::info!("Incomplete prediction request: {:?}", req);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: INCOMPLETE_FIELDS_MESSAGE.to_string(),
            status_code: 400,
        });
    }

    let attributes = req.attributes();
    let cache_key = CacheKey::prediction(&attributes);

    let cached_prediction = state.cache.get(&cache_key).await;
    let (prediction, cached) = match cached_prediction {
        Some(prediction) => (prediction, true),
        None => match state.predictor.predict(&attributes).await {
            Ok(prediction) => {
                state.cache.insert(cache_key, prediction.clone()).await;
                (prediction, false)
            }
            Err(e) => {
                tracing::error!("Prediction request failed for {:?}: {}", attributes, e);
                return HttpResponse::BadGateway().json(ErrorResponse {
                    error: "Prediction unavailable".to_string(),
                    message: PREDICTION_FAILED_MESSAGE.to_string(),
                    status_code: 502,
                });
            }
        },
    };

    // The bracket is always recomputed locally; the endpoint's label is only logged
    let salary_range = state
        .ranges
        .bucket_for(prediction.predicted_salary)
        .map(|r| r.to_string());

    if let Some(upstream) = &prediction.predicted_range {
        tracing::debug!("Upstream range: {}, local range: {:?}", upstream, salary_range);
    }

    let charts: SalaryCharts = build_charts(state.dataset.records(), &attributes.job_title);

    let response = PredictResponse {
        prediction_id: uuid::Uuid::new_v4().to_string(),
        predicted_salary: prediction.predicted_salary,
        message: prediction_message(prediction.predicted_salary, salary_range.as_deref()),
        salary_range,
        cached,
        charts,
    };

    tracing::info!(
        "Predicted {:.0} USD for {} (range: {:?}, cached: {})",
        response.predicted_salary,
        attributes.job_title,
        response.salary_range,
        cached
    );

    HttpResponse::Ok().json(response)
}

/// Human readable summary of a prediction
pub fn prediction_message(predicted_salary: f64, salary_range: Option<&str>) -> String {
    match salary_range {
        Some(range) => format!(
            "The predicted salary is {:.0} USD, within the range {}",
            predicted_salary, range
        ),
        None => format!(
            "The predicted salary is {:.0} USD, outside the historical salary ranges (range unknown)",
            predicted_salary
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_message() {
        assert_eq!(
            prediction_message(105_000.4, Some("100,000 - 110,000")),
            "The predicted salary is 105000 USD, within the range 100,000 - 110,000"
        );
        assert!(prediction_message(1.0, None).contains("range unknown"));
    }
}
