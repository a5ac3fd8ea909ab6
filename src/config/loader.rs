//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Environment variable overriding the listener port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env(msg) => write!(f, "Environment error: {}", msg),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration for this process.
///
/// Reads the file named by `CONFIG_PATH` when set, otherwise starts from
/// defaults, then applies the `PORT` override before validating.
pub fn load() -> Result<ServiceConfig, ConfigError> {
    let mut config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => {
            let content = fs::read_to_string(Path::new(&path)).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        Err(_) => ServiceConfig::default(),
    };

    if let Ok(raw) = env::var(PORT_VAR) {
        let port: u16 = raw
            .parse()
            .map_err(|_| ConfigError::Env(format!("{} is not a valid port: {:?}", PORT_VAR, raw)))?;
        config.listener.bind_address = replace_port(&config.listener.bind_address, port);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Swap the port component of a `host:port` bind address.
fn replace_port(bind_address: &str, port: u16) -> String {
    match bind_address.rsplit_once(':') {
        Some((host, _)) => format!("{}:{}", host, port),
        None => format!("{}:{}", bind_address, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_port_swaps_existing_port() {
        assert_eq!(replace_port("0.0.0.0:3000", 8080), "0.0.0.0:8080");
        assert_eq!(replace_port("127.0.0.1:80", 3000), "127.0.0.1:3000");
    }

    #[test]
    fn test_replace_port_appends_when_missing() {
        assert_eq!(replace_port("0.0.0.0", 3000), "0.0.0.0:3000");
    }

    #[test]
    fn test_load_config_round_trip() {
        let dir = std::env::temp_dir().join("so-profile-api-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("service.toml");
        fs::write(
            &path,
            r#"
            [listener]
            bind_address = "127.0.0.1:4000"

            [upstream]
            site = "stackoverflow"
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(config.upstream.request_timeout_secs, 5);
    }

    #[test]
    fn test_port_override_wins() {
        // Both PORT cases share one test; parallel tests must not race on
        // the process environment.
        env::remove_var(CONFIG_PATH_VAR);
        env::set_var(PORT_VAR, "4500");
        let config = load().unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:4500");

        env::set_var(PORT_VAR, "not-a-port");
        assert!(matches!(load(), Err(ConfigError::Env(_))));
        env::remove_var(PORT_VAR);
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let dir = std::env::temp_dir().join("so-profile-api-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        fs::write(&path, "listener = \"not a table\"").unwrap();

        match load_config(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
