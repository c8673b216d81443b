//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load, override, normalize and validate the configuration.
///
/// Without a file path the built-in defaults are used. Environment
/// variables win over file values.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    normalize(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(value) = env::var("KLANT_BIND_ADDRESS") {
        config.listener.bind_address = value;
    }
    if let Ok(value) = env::var("KLANT_ENVIRONMENT") {
        config.service.environment = value;
    }
    if let Ok(value) = env::var("KLANT_SUBPATH") {
        config.service.subpath = Some(value);
    }
    if let Ok(value) = env::var("KLANT_ALLOWED_HOSTS") {
        config.security.allowed_hosts = value
            .split(',')
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .collect();
    }
    if let Ok(value) = env::var("KLANT_LOG_LEVEL") {
        config.observability.log_level = value;
    }
}

/// A configured subpath always gains a leading slash and loses any
/// trailing one, so it can be glued directly onto component base paths.
fn normalize(config: &mut AppConfig) {
    if let Some(subpath) = config.service.subpath.take() {
        let trimmed = subpath.trim_end_matches('/');
        if !trimmed.is_empty() {
            let rooted = if trimmed.starts_with('/') {
                trimmed.to_string()
            } else {
                format!("/{trimmed}")
            };
            config.service.subpath = Some(rooted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subpath_gains_leading_slash() {
        let mut config = AppConfig::default();
        config.service.subpath = Some("gateway".to_string());
        normalize(&mut config);
        assert_eq!(config.service.subpath.as_deref(), Some("/gateway"));
    }

    #[test]
    fn rooted_subpath_kept_and_trailing_slash_dropped() {
        let mut config = AppConfig::default();
        config.service.subpath = Some("/gateway/".to_string());
        normalize(&mut config);
        assert_eq!(config.service.subpath.as_deref(), Some("/gateway"));
    }

    #[test]
    fn empty_subpath_cleared() {
        let mut config = AppConfig::default();
        config.service.subpath = Some("/".to_string());
        normalize(&mut config);
        assert_eq!(config.service.subpath, None);
    }

    #[test]
    fn parses_minimal_config_file() {
        let raw = r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [[components]]
            name = "klanten"
            base_path = "/klanten/api/v1"
            api_version = "1.0.0"
        "#;

        let config: AppConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.components.len(), 1);
        assert!(config.components[0].enabled);
        assert_eq!(config.components[0].api_version.to_string(), "1.0.0");
    }
}
