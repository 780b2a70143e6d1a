//! Client configuration.

/// Build/runtime environment the client is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, including the `/api/v1` prefix.
    pub api_url: String,
    pub environment: Environment,
    /// Whether a failed initial load shows the fixed demo data set instead
    /// of an error.
    pub demo_fallback: bool,
}

impl ClientConfig {
    /// Production defaults pointing at `api_url`: no demo fallback.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            environment: Environment::Production,
            demo_fallback: false,
        }
    }

    /// Development defaults: demo fallback on.
    pub fn development(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            environment: Environment::Development,
            demo_fallback: true,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `PETCARE_API_URL`       | `http://localhost:3000/api/v1`   |
    /// | `PETCARE_ENV`           | `production`                     |
    /// | `PETCARE_DEMO_FALLBACK` | on in development, off otherwise |
    ///
    /// Unrecognised values are logged and replaced by the default.
    pub fn from_env() -> Self {
        let api_url = std::env::var("PETCARE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/v1".into());

        let environment = match std::env::var("PETCARE_ENV") {
            Ok(raw) => Environment::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unrecognised PETCARE_ENV, assuming production");
                Environment::Production
            }),
            Err(_) => Environment::Production,
        };

        let default_fallback = environment == Environment::Development;
        let demo_fallback = match std::env::var("PETCARE_DEMO_FALLBACK") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unrecognised PETCARE_DEMO_FALLBACK, using default");
                default_fallback
            }),
            Err(_) => default_fallback,
        };

        Self {
            api_url,
            environment,
            demo_fallback,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
