use crate::auth::jwt::JwtConfig;

/// Which [`GameStore`](prosperity_db::store::GameStore) adapter the server runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at the given URL.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process memory; data is lost on restart.
    Memory,
}

/// How the acting user is resolved for each request.
#[derive(Debug, Clone)]
pub enum IdentityConfig {
    /// Built-in two-player roster selected by the `user_id` cookie.
    Roster {
        /// Whether the login cookie carries the `Secure` attribute.
        cookie_secure: bool,
    },
    /// HS256 bearer tokens issued by an external identity provider.
    Jwt(JwtConfig),
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
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
    pub store: StoreBackend,
    pub identity: IdentityConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE`                | `postgres`                 |
    /// | `DATABASE_URL`         | required for `postgres`    |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `IDENTITY_PROVIDER`    | `roster`                   |
    /// | `COOKIE_SECURE`        | `false`                    |
    /// | `JWT_SECRET`           | required for `jwt`         |
    ///
    /// # Panics
    ///
    /// Panics on malformed values or a missing required variable, so that
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store = match std::env::var("STORE").as_deref().unwrap_or("postgres") {
            "postgres" => StoreBackend::Postgres {
                database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
                max_connections: std::env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "20".into())
                    .parse()
                    .expect("DB_MAX_CONNECTIONS must be a valid u32"),
            },
            "memory" => StoreBackend::Memory,
            other => panic!("STORE must be 'postgres' or 'memory', got '{other}'"),
        };

        let identity = match std::env::var("IDENTITY_PROVIDER")
            .as_deref()
            .unwrap_or("roster")
        {
            "roster" => IdentityConfig::Roster {
                cookie_secure: std::env::var("COOKIE_SECURE")
                    .unwrap_or_else(|_| "false".into())
                    .parse()
                    .expect("COOKIE_SECURE must be 'true' or 'false'"),
            },
            "jwt" => IdentityConfig::Jwt(JwtConfig::from_env()),
            other => panic!("IDENTITY_PROVIDER must be 'roster' or 'jwt', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store,
            identity,
        }
    }
}
