//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses parse, paths are rooted, names are unique
//! - Validate value ranges (timeouts > 0, body size > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig -> Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address `{0}` is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("component name must not be empty")]
    EmptyComponentName,

    #[error("component `{0}` is declared more than once")]
    DuplicateComponent(String),

    #[error("component `{name}` base path `{path}` must start with `/`")]
    UnrootedBasePath { name: String, path: String },

    #[error("component `{name}` base path `{path}` must not end with `/`")]
    TrailingSlashBasePath { name: String, path: String },

    #[error("version mapping prefix `{0}` must start with `/`")]
    UnrootedMappingPrefix(String),

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodySize,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_level `{0}` is not a recognized level")]
    UnknownLogLevel(String),
}

/// Validate a loaded configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for component in &config.components {
        if component.name.is_empty() {
            errors.push(ValidationError::EmptyComponentName);
        } else if !seen.insert(component.name.as_str()) {
            errors.push(ValidationError::DuplicateComponent(component.name.clone()));
        }

        if !component.base_path.starts_with('/') {
            errors.push(ValidationError::UnrootedBasePath {
                name: component.name.clone(),
                path: component.base_path.clone(),
            });
        } else if component.base_path.ends_with('/') {
            // Trailing slashes (and a bare "/") cannot be nested as routes.
            errors.push(ValidationError::TrailingSlashBasePath {
                name: component.name.clone(),
                path: component.base_path.clone(),
            });
        }
    }

    for mapping in &config.version_mapping {
        if !mapping.path_prefix.starts_with('/') {
            errors.push(ValidationError::UnrootedMappingPrefix(
                mapping.path_prefix.clone(),
            ));
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodySize);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::MappingConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.components[1].name = "klanten".to_string();
        config.components[1].base_path = "contactmomenten/api/v1".to_string();
        config.version_mapping.push(MappingConfig {
            path_prefix: "no-slash".to_string(),
            version: "1.0.0".parse().unwrap(),
        });
        config.security.max_body_size = 0;
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 6);
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".to_string()
        )));
        assert!(errors.contains(&ValidationError::DuplicateComponent("klanten".to_string())));
        assert!(errors.contains(&ValidationError::UnrootedBasePath {
            name: "klanten".to_string(),
            path: "contactmomenten/api/v1".to_string(),
        }));
        assert!(errors.contains(&ValidationError::UnrootedMappingPrefix(
            "no-slash".to_string()
        )));
        assert!(errors.contains(&ValidationError::ZeroBodySize));
        assert!(errors.contains(&ValidationError::UnknownLogLevel(
            "verbose".to_string()
        )));
    }

    #[test]
    fn trailing_slash_base_path_rejected() {
        let mut config = AppConfig::default();
        config.components[0].base_path = "/klanten/api/v1/".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TrailingSlashBasePath {
                name: "klanten".to_string(),
                path: "/klanten/api/v1/".to_string(),
            }]
        );
    }

    #[test]
    fn metrics_address_checked_only_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nonsense".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidMetricsAddress(
                "nonsense".to_string()
            )]
        );
    }
}
