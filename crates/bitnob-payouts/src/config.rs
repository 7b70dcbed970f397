use std::env;

/// Bitnob API configuration, read once at process start.
///
/// Both values are optional here: a deployment without them still serves
/// traffic, and each payout attempt fails with
/// [`PayoutError::MissingConfig`](crate::PayoutError::MissingConfig) carrying
/// its correlation reference. Request handlers never read the environment
/// themselves.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    /// Base URL of the Bitnob API (e.g. `https://sandboxapi.bitnob.co/api/v1`).
    pub api_url: Option<String>,
    /// Bearer secret key for the Bitnob API.
    pub secret_key: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_url", &self.api_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Borrowed view of a fully configured provider.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub api_url: &'a str,
    pub secret_key: &'a str,
}

impl ProviderConfig {
    /// Read `API_URL` and `BITNOB_SECRET_KEY` from the environment.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("API_URL").ok().filter(|s| !s.is_empty()),
            secret_key: env::var("BITNOB_SECRET_KEY").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Both values, or `None` if either is missing.
    pub fn credentials(&self) -> Option<Credentials<'_>> {
        match (&self.api_url, &self.secret_key) {
            (Some(api_url), Some(secret_key)) => Some(Credentials {
                api_url,
                secret_key,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_values() {
        let config = ProviderConfig {
            api_url: Some("https://api.example.com".to_string()),
            secret_key: None,
        };
        assert!(config.credentials().is_none());

        let config = ProviderConfig {
            api_url: Some("https://api.example.com".to_string()),
            secret_key: Some("sk_test".to_string()),
        };
        let creds = config.credentials().unwrap();
        assert_eq!(creds.api_url, "https://api.example.com");
        assert_eq!(creds.secret_key, "sk_test");
    }

    #[test]
    fn debug_redacts_secret() {
        let config = ProviderConfig {
            api_url: Some("https://api.example.com".to_string()),
            secret_key: Some("sk_live_very_secret".to_string()),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk_live_very_secret"));
    }
}
