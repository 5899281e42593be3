/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 5002 | HTTP listen port |
/// | DATABASE_PATH | storefront.db | SQLite database file (`:memory:` for tests) |
/// | ENVIRONMENT | development | development \| production |
/// | FRONTEND_ORIGIN | http://localhost:5173 | Allowed CORS origin |
/// | ADMIN_USERNAME | (unset) | Admin principal seeded at startup |
/// | ADMIN_PASSWORD | (unset) | Password for the seeded principal |
///
/// The persistent store is selected here, once, at process start. There
/// is no runtime fallback between stores.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database path, or `:memory:` for an in-memory store
    pub database_path: String,
    /// Running environment: development | production
    pub environment: String,
    /// Origin allowed to send credentialed requests
    pub cors_origin: String,
    /// Admin principal provisioned at startup when both are set
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5002),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "storefront.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            admin_username: std::env::var("ADMIN_USERNAME").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// Override database path and port, commonly used in tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
