use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::assessment::CategoryCounts;
use crate::workflows::reports::ReportPricing;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine and its HTTP surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
    pub billing: BillingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = CategoryCounts::standard();
        let counts = CategoryCounts::new(
            question_count("ESGEN_ENVIRONMENTAL_QUESTIONS", defaults.environmental)?,
            question_count("ESGEN_SOCIAL_QUESTIONS", defaults.social)?,
            question_count("ESGEN_GOVERNANCE_QUESTIONS", defaults.governance)?,
        );

        let price = env::var("ESGEN_REPORT_PRICE")
            .unwrap_or_else(|_| "299.0".to_string())
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or(ConfigError::InvalidPrice)?;

        let currency = env::var("ESGEN_REPORT_CURRENCY")
            .unwrap_or_else(|_| "HKD".to_string())
            .trim()
            .to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrency { value: currency });
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig { counts },
            billing: BillingConfig { price, currency },
        })
    }
}

fn question_count(var: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidQuestionCount { var }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Default per-category draw for random assessments.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    pub counts: CategoryCounts,
}

/// Fee charged for a full report.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    pub price: f64,
    pub currency: String,
}

impl BillingConfig {
    pub fn pricing(&self) -> ReportPricing {
        ReportPricing {
            amount: self.price,
            currency: self.currency.clone(),
            payment_required: self.price > 0.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidQuestionCount { var: &'static str },
    InvalidPrice,
    InvalidCurrency { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidQuestionCount { var } => {
                write!(f, "{var} must be a non-negative integer")
            }
            ConfigError::InvalidPrice => {
                write!(f, "ESGEN_REPORT_PRICE must be a non-negative number")
            }
            ConfigError::InvalidCurrency { value } => {
                write!(
                    f,
                    "ESGEN_REPORT_CURRENCY must be a three letter code, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidQuestionCount { .. }
            | ConfigError::InvalidPrice
            | ConfigError::InvalidCurrency { .. } => None,
        }
    }
}
