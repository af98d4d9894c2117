use blockcopy_cloudinary::CloudinaryConfig;
use blockcopy_core::session::{SessionPolicy, DEFAULT_REMEMBER_DAYS, DEFAULT_TTL_HOURS};
use blockcopy_openrouter::catalog::{is_curated, DEFAULT_MODEL};
use blockcopy_openrouter::client::DEFAULT_BASE_URL as OPENROUTER_BASE_URL;
use blockcopy_openrouter::OpenRouterConfig;

/// Default cap on multipart upload bodies (25 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The external
/// collaborators are optional: without credentials the AI and upload
/// endpoints answer 503.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted upload body in bytes.
    pub max_upload_bytes: usize,
    /// Lifetimes of newly issued sessions.
    pub session: SessionPolicy,
    pub openrouter: Option<OpenRouterConfig>,
    pub cloudinary: Option<CloudinaryConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                           |
    /// |--------------------------|-----------------------------------|
    /// | `HOST`                   | `0.0.0.0`                         |
    /// | `PORT`                   | `3000`                            |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`           |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                              |
    /// | `SESSION_TTL_HOURS`      | `24`                              |
    /// | `SESSION_REMEMBER_DAYS`  | `30`                              |
    /// | `MAX_UPLOAD_BYTES`       | `26214400`                        |
    /// | `OPENROUTER_API_KEY`     | unset (AI disabled)               |
    /// | `OPENROUTER_MODEL`       | `openai/gpt-4.5-preview`          |
    /// | `OPENROUTER_BASE_URL`    | `https://openrouter.ai/api/v1`    |
    /// | `OPENROUTER_REFERER`     | `http://localhost:3000`           |
    /// | `CLOUDINARY_CLOUD_NAME`  | unset (uploads disabled)          |
    /// | `CLOUDINARY_API_KEY`     | unset                             |
    /// | `CLOUDINARY_API_SECRET`  | unset                             |
    /// | `CLOUDINARY_BASE_URL`    | `https://api.cloudinary.com/v1_1` |
    ///
    /// Panics on malformed numeric values so misconfiguration fails fast.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let ttl_hours: i64 = var("SESSION_TTL_HOURS")
            .map(|v| v.parse().expect("SESSION_TTL_HOURS must be a valid i64"))
            .unwrap_or(DEFAULT_TTL_HOURS);

        let remember_days: i64 = var("SESSION_REMEMBER_DAYS")
            .map(|v| v.parse().expect("SESSION_REMEMBER_DAYS must be a valid i64"))
            .unwrap_or(DEFAULT_REMEMBER_DAYS);

        let max_upload_bytes: usize = var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let openrouter = non_empty(var("OPENROUTER_API_KEY")).map(|api_key| {
            let default_model = non_empty(var("OPENROUTER_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.into());
            if !is_curated(&default_model) {
                tracing::warn!(model = %default_model, "OPENROUTER_MODEL is not in the curated model list");
            }
            OpenRouterConfig {
                api_key,
                base_url: non_empty(var("OPENROUTER_BASE_URL"))
                    .unwrap_or_else(|| OPENROUTER_BASE_URL.into()),
                default_model,
                referer: non_empty(var("OPENROUTER_REFERER"))
                    .unwrap_or_else(|| "http://localhost:3000".into()),
            }
        });

        let cloudinary = match (
            non_empty(var("CLOUDINARY_CLOUD_NAME")),
            non_empty(var("CLOUDINARY_API_KEY")),
            non_empty(var("CLOUDINARY_API_SECRET")),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => {
                let mut config = CloudinaryConfig::new(cloud_name, api_key, api_secret);
                if let Some(base_url) = non_empty(var("CLOUDINARY_BASE_URL")) {
                    config.base_url = base_url;
                }
                Some(config)
            }
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            session: SessionPolicy {
                ttl: chrono::Duration::hours(ttl_hours),
                remember_ttl: chrono::Duration::days(remember_days),
            },
            openrouter,
            cloudinary,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
