use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
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
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Translation provider endpoints and credentials.
    pub providers: ProviderConfig,
}

/// Endpoints and credentials for the external translation providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the MyMemory `get` endpoint.
    pub mymemory_url: String,
    /// Base URL of the LibreTranslate `translate` endpoint.
    pub libretranslate_url: String,
    /// Optional LibreTranslate API key, sent as a bearer token when present.
    pub libretranslate_api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `HOST`                    | `0.0.0.0`                   |
    /// | `PORT`                    | `3000`                      |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                        |
    /// | `MYMEMORY_API_URL`        | production MyMemory URL     |
    /// | `LIBRETRANSLATE_API_URL`  | production LibreTranslate URL |
    /// | `LIBRETRANSLATE_API_KEY`  | unset (keyless calls)       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            providers: ProviderConfig::from_env(),
        }
    }
}

impl ProviderConfig {
    /// Load provider endpoints from environment variables with defaults.
    ///
    /// An empty `LIBRETRANSLATE_API_KEY` is treated as unset.
    pub fn from_env() -> Self {
        let mymemory_url = std::env::var("MYMEMORY_API_URL")
            .unwrap_or_else(|_| anubad_providers::mymemory::DEFAULT_API_URL.into());

        let libretranslate_url = std::env::var("LIBRETRANSLATE_API_URL")
            .unwrap_or_else(|_| anubad_providers::libretranslate::DEFAULT_API_URL.into());

        let libretranslate_api_key = std::env::var("LIBRETRANSLATE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Self {
            mymemory_url,
            libretranslate_url,
            libretranslate_api_key,
        }
    }
}
