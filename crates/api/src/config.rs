use axum::http::HeaderValue;

/// Which [`Store`](tracker_db::Store) implementation backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Deployment environment. Only `development` exposes error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL (or MONGODB_URI) must be set when STORE_BACKEND=postgres")]
    MissingDatabaseUrl,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Connection string for the PostgreSQL store.
    pub database_url: Option<String>,
    pub store_backend: StoreBackend,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                                         |
    /// |------------------------|-------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                       |
    /// | `PORT`                 | `5000`                                          |
    /// | `DATABASE_URL`         | falls back to `MONGODB_URI`                     |
    /// | `STORE_BACKEND`        | `postgres`                                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173,http://localhost:3000`   |
    /// | `APP_ENV`              | falls back to `NODE_ENV`, then `production`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or("PORT", lookup("PORT"), 5000u16, "a valid port number")?;

        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("MONGODB_URI"))
            .filter(|url| !url.trim().is_empty());

        let store_backend = match lookup("STORE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "STORE_BACKEND",
                    expected: "`postgres` or `memory`",
                    value: other.to_string(),
                })
            }
        };

        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173,http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if let Some(bad) = cors_origins
            .iter()
            .find(|origin| origin.parse::<HeaderValue>().is_err())
        {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: bad.clone(),
            });
        }

        let environment = match lookup("APP_ENV").or_else(|| lookup("NODE_ENV")).as_deref() {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        };

        Ok(Self {
            host,
            port,
            database_url,
            store_backend,
            cors_origins,
            environment,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_database_url() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/tracker")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn legacy_variable_names_accepted() {
        let config = load(&[
            ("MONGODB_URI", "postgres://localhost/tracker"),
            ("NODE_ENV", "development"),
        ])
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/tracker")
        );
        assert!(config.environment.is_development());
    }

    #[test]
    fn postgres_backend_requires_url() {
        assert_matches!(load(&[]), Err(ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn memory_backend_needs_no_url() {
        let config = load(&[("STORE_BACKEND", "memory")]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn invalid_port_reported() {
        let err = load(&[("STORE_BACKEND", "memory"), ("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
    }

    #[test]
    fn unknown_backend_reported() {
        let err = load(&[("STORE_BACKEND", "mongo")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "STORE_BACKEND", .. });
    }

    #[test]
    fn cors_origins_split_and_trimmed() {
        let config = load(&[
            ("STORE_BACKEND", "memory"),
            ("CORS_ORIGINS", " https://a.example , ,https://b.example"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, ["https://a.example", "https://b.example"]);
    }
}
