// Service exports
pub mod cache;
pub mod dataset;
pub mod predictor;

pub use cache::{PredictionCache, CacheKey, CacheStats};
pub use dataset::{Dataset, DatasetError};
pub use predictor::{PredictionClient, PredictionError};
