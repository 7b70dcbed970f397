use std::env;

use payouts::ProviderConfig;
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RATE_LIMIT_RPM: u32 = 60;
const DEFAULT_STATIC_DIR: &str = "./static";

/// Server configuration, built once in `main` and shared read-only with
/// every handler. Request paths never touch the environment.
#[derive(Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// CORS allowed origins (empty = localhost-only dev default)
    pub allowed_origins: Vec<String>,
    /// Rate limit requests per minute per IP
    pub rate_limit_rpm: u32,
    /// Directory served at `/` (landing page)
    pub static_dir: String,
    /// Bearer token required for /metrics (None = public)
    pub metrics_token: Option<String>,
    /// Bitnob API base URL and secret key
    pub provider: ProviderConfig,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("allowed_origins", &self.allowed_origins)
            .field("rate_limit_rpm", &self.rate_limit_rpm)
            .field("static_dir", &self.static_dir)
            .field(
                "metrics_token",
                &self.metrics_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("provider", &self.provider)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins: Vec<String> = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let rate_limit_rpm = env::var("RATE_LIMIT_RPM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_RPM);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        let metrics_token = env::var("METRICS_TOKEN").ok().filter(|s| !s.is_empty());

        let provider = ProviderConfig::from_env();

        // A malformed base URL fails startup. An absent one does not: the
        // payout handler reports it per request, with the correlation
        // reference attached.
        if let Some(ref api_url) = provider.api_url {
            Url::parse(api_url).map_err(|_| ConfigError::InvalidUrl(api_url.clone()))?;
        }

        if provider.credentials().is_none() {
            tracing::warn!(
                "API_URL and/or BITNOB_SECRET_KEY not set — payout requests \
                 will fail with 'Missing API configuration' until both are configured"
            );
        }

        if metrics_token.is_none() {
            tracing::warn!("METRICS_TOKEN not set — /metrics endpoint is publicly accessible");
        }

        Ok(Self {
            port,
            allowed_origins,
            rate_limit_rpm,
            static_dir,
            metrics_token,
            provider,
        })
    }
}
