/// Configuration management for Posts Service
///
/// Values come from environment variables, optionally seeded from a `.env`
/// file in the working directory.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// HTTP worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` for any
    pub allowed_origins: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                env: "development".to_string(),
                host: "0.0.0.0".to_string(),
                port: 3001,
                workers: 4,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("POSTS_SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("POSTS_SERVICE_PORT must be a valid port, got {raw:?}"))?,
            None => defaults.app.port,
        };

        let workers = match lookup("POSTS_SERVICE_WORKERS") {
            Some(raw) => {
                let workers = raw.trim().parse::<usize>().with_context(|| {
                    format!("POSTS_SERVICE_WORKERS must be a positive integer, got {raw:?}")
                })?;
                anyhow::ensure!(workers > 0, "POSTS_SERVICE_WORKERS must be at least 1");
                workers
            }
            None => defaults.app.workers,
        };

        Ok(Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or(defaults.app.env),
                host: lookup("POSTS_SERVICE_HOST").unwrap_or(defaults.app.host),
                port,
                workers,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or(defaults.cors.allowed_origins),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

impl CorsConfig {
    /// Trimmed, non-empty origins from the configured list
    pub fn origins(&self) -> Vec<&str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect()
    }

    pub fn allows_any(&self) -> bool {
        self.origins().contains(&"*")
    }
}
