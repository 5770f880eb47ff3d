use axum::http::header::{HeaderValue, InvalidHeaderValue};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Default `Cache-Control` for badge responses. Badges change daily, so
/// embedding hosts must not keep stale copies.
pub const DEFAULT_BADGE_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

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

/// Top-level configuration for the badge service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub badge: BadgeConfig,
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

        let cache_control = env::var("APP_BADGE_CACHE_CONTROL")
            .unwrap_or_else(|_| DEFAULT_BADGE_CACHE_CONTROL.to_string());
        if cache_control.trim().is_empty() {
            return Err(ConfigError::EmptyCacheControl);
        }
        HeaderValue::from_str(&cache_control)
            .map_err(|source| ConfigError::InvalidCacheControl { source })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            badge: BadgeConfig { cache_control },
        })
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

/// Response policy for rendered badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeConfig {
    pub cache_control: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            cache_control: DEFAULT_BADGE_CACHE_CONTROL.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptyCacheControl,
    InvalidCacheControl { source: InvalidHeaderValue },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EmptyCacheControl => {
                write!(f, "APP_BADGE_CACHE_CONTROL must not be empty")
            }
            ConfigError::InvalidCacheControl { .. } => {
                write!(f, "APP_BADGE_CACHE_CONTROL must be a valid HTTP header value")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::EmptyCacheControl => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidCacheControl { source } => Some(source),
        }
    }
}
