//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Run pending migrations before serving.
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            auto_migrate: lookup("DB_AUTO_MIGRATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_database() {
        let config = config(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(!config.auto_migrate);
    }

    #[test]
    fn database_settings_are_read() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/blog"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("DB_AUTO_MIGRATE", "true"),
            ("PORT", "9000"),
        ]);
        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/blog");
        assert_eq!(db.max_connections, 25);
        assert_eq!(db.min_connections, 1);
        assert!(config.auto_migrate);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = config(&[("PORT", "http"), ("DATABASE_URL", "x"), ("DB_MAX_CONNECTIONS", "-")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.unwrap().max_connections, 10);
    }
}
