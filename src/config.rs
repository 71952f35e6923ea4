use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub prediction: PredictionSettings,
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub ranges: RangeSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionSettings {
    pub host: String,
    #[serde(default = "default_prediction_port")]
    pub port: u16,
    #[serde(default = "default_prediction_path")]
    pub path: String,
    pub timeout_secs: Option<u64>,
}

impl PredictionSettings {
    /// Full URL of the prediction endpoint
    pub fn endpoint_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        format!("{}:{}/{}", base, self.port, self.path.trim_start_matches('/'))
    }
}

fn default_prediction_port() -> u16 { 8001 }
fn default_prediction_path() -> String { "/api/v1/predict".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RangeSettings {
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            bucket_count: default_bucket_count(),
        }
    }
}

fn default_bucket_count() -> usize { 25 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub capacity: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn with_overrides(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
            self.format = format;
        }
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SALARY__)
    /// 5. `API_URL`, the prediction host used by existing deployments
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SALARY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SALARY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_api_url(settings, std::env::var("API_URL").ok())?;

        settings.try_deserialize()
    }
}

/// Override the prediction host with `API_URL` when it is set
fn apply_api_url(settings: Config, api_url: Option<String>) -> Result<Config, ConfigError> {
    match api_url.filter(|u| !u.trim().is_empty()) {
        Some(host) => Config::builder()
            .add_source(settings)
            .set_override("prediction.host", host)?
            .build(),
        None => Ok(settings),
    }
}
