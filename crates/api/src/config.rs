use std::path::PathBuf;
use std::str::FromStr;

use realtrust_core::media::{
    ImageStorageMode, DEFAULT_UPLOAD_PREFIX, MAX_JSON_BODY_BYTES, MAX_UPLOAD_BYTES,
};

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} is invalid: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long a request waits for a database connection (default: `5`).
    pub db_acquire_timeout_secs: u64,
    /// The single image representation this deployment accepts.
    pub image_storage: ImageStorageMode,
    /// Directory holding stored-mode image files.
    pub upload_dir: PathBuf,
    /// URL path prefix the upload directory is served under.
    pub upload_url_prefix: String,
    /// Externally visible origin used to build stored image URLs.
    pub public_base_url: String,
    /// Request body ceiling for JSON payloads.
    pub json_body_limit: usize,
    /// Ceiling for a single uploaded image.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `HOST`                    | `0.0.0.0`                    |
    /// | `PORT`                    | `5000`                       |
    /// | `CORS_ORIGINS`            | `*`                          |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                         |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                          |
    /// | `IMAGE_STORAGE`           | `inline`                     |
    /// | `UPLOAD_DIR`              | `uploads`                    |
    /// | `UPLOAD_URL_PREFIX`       | `/uploads`                   |
    /// | `PUBLIC_BASE_URL`         | `http://localhost:{PORT}`    |
    /// | `JSON_BODY_LIMIT_BYTES`   | `10485760`                   |
    /// | `MAX_UPLOAD_BYTES`        | `15728640`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port: u16 = parse("PORT", &var("PORT", "5000"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let image_storage: ImageStorageMode = var("IMAGE_STORAGE", "inline")
            .parse()
            .map_err(|reason| ConfigError {
                var: "IMAGE_STORAGE",
                reason,
            })?;

        let upload_url_prefix = format!(
            "/{}",
            var("UPLOAD_URL_PREFIX", DEFAULT_UPLOAD_PREFIX).trim_matches('/')
        );
        if upload_url_prefix == "/" {
            return Err(ConfigError {
                var: "UPLOAD_URL_PREFIX",
                reason: "must not be the root path".into(),
            });
        }

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs: parse("REQUEST_TIMEOUT_SECS", &var("REQUEST_TIMEOUT_SECS", "30"))?,
            db_acquire_timeout_secs: parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                &var("DB_ACQUIRE_TIMEOUT_SECS", "5"),
            )?,
            image_storage,
            upload_dir: PathBuf::from(var("UPLOAD_DIR", "uploads")),
            upload_url_prefix,
            public_base_url: var("PUBLIC_BASE_URL", &format!("http://localhost:{port}")),
            json_body_limit: parse(
                "JSON_BODY_LIMIT_BYTES",
                &var("JSON_BODY_LIMIT_BYTES", &MAX_JSON_BODY_BYTES.to_string()),
            )?,
            max_upload_bytes: parse(
                "MAX_UPLOAD_BYTES",
                &var("MAX_UPLOAD_BYTES", &MAX_UPLOAD_BYTES.to_string()),
            )?,
        })
    }

    /// Whether any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
    })
}
