//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file) using the `envy` crate, then handed to `main` as an
//! immutable value.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DB_CONN` (required): PostgreSQL connection string
/// - `PORT` (optional): HTTP listen port, defaults to 8080
/// - `DB_MAX_CONNECTIONS` (optional): connection pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_conn: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present;
    /// variables already set in the environment take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns an error if `DB_CONN` is missing or a value cannot be parsed
    /// into its expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let config: Config =
            envy::from_iter(vars(&[("DB_CONN", "postgres://localhost/feeds")])).unwrap();

        assert_eq!(config.db_conn, "postgres://localhost/feeds");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = envy::from_iter(vars(&[
            ("DB_CONN", "postgres://db/feeds"),
            ("PORT", "9000"),
            ("DB_MAX_CONNECTIONS", "20"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.db_max_connections, 20);
    }

    #[test]
    fn missing_connection_string_is_an_error() {
        let result: Result<Config, _> = envy::from_iter(vars(&[("PORT", "9000")]));
        assert!(result.is_err());
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let result: Result<Config, _> = envy::from_iter(vars(&[
            ("DB_CONN", "postgres://db/feeds"),
            ("PORT", "eighty"),
        ]));
        assert!(result.is_err());
    }
}
