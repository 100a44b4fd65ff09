//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ApiConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "TRIP_CONFIG";

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}': expected a port number")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<ApiConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply a `PORT` value on top of a loaded configuration.
///
/// `None` and blank values leave the configured port untouched.
pub fn apply_port_override(config: &mut ApiConfig, port: Option<&str>) -> Result<(), ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    config.listener.port = raw
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;

    validate_config(config).map_err(ConfigError::Validation)
}

/// Resolve the process configuration.
///
/// Reads the file named by `TRIP_CONFIG` when set (defaults otherwise), then
/// applies the `PORT` override.
pub fn load_from_env() -> Result<ApiConfig, ConfigError> {
    let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_config(Path::new(&path))?,
        None => ApiConfig::default(),
    };

    let port = std::env::var(PORT_ENV).ok();
    apply_port_override(&mut config, port.as_deref())?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            [listener]
            port = 9000

            [dataset]
            path = "/srv/trip.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.dataset.path, "/srv/trip.json");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.cors.enabled);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 0").unwrap();

        match load_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::ZeroRequestTimeout]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_port_override() {
        let mut config = ApiConfig::default();

        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.listener.port, 8080);

        apply_port_override(&mut config, Some("")).unwrap();
        assert_eq!(config.listener.port, 8080);

        apply_port_override(&mut config, Some("9000")).unwrap();
        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_port_override_rejects_garbage() {
        let mut config = ApiConfig::default();

        let err = apply_port_override(&mut config, Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));

        let err = apply_port_override(&mut config, Some("0")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
