use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `APP_PORT` wins over
    /// `PORT`; unparsable numbers are an error rather than a silent default.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid port {p:?}: {e}"))?,
            None => 3000,
        };
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(n) => n
                .parse::<u32>()
                .map_err(|e| anyhow::anyhow!("invalid DB_MAX_CONNECTIONS {n:?}: {e}"))?,
            None => 5,
        };
        Ok(Self {
            port,
            database_url,
            host,
            db_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_local_sqlite_file() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn app_port_takes_precedence_over_port() {
        let config = config_from(&[("APP_PORT", "8080"), ("PORT", "9090")]).unwrap();
        assert_eq!(config.port, 8080);

        let config = config_from(&[("PORT", "9090")]).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn blank_database_url_falls_back_to_default() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);

        let config = config_from(&[("DATABASE_URL", "postgres://localhost/blog")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/blog");
    }

    #[test]
    fn rejects_garbage_port() {
        assert!(config_from(&[("APP_PORT", "not-a-port")]).is_err());
    }
}
