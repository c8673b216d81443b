//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files. The
//! loaded configuration is immutable for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::versioning::ApiVersion;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Service identity (name, environment, mount subpath).
    pub service: ServiceConfig,

    /// Versioned API components served by this gateway.
    pub components: Vec<ComponentConfig>,

    /// Extra path-prefix to version entries beyond the components.
    pub version_mapping: Vec<MappingConfig>,

    /// Security hardening settings.
    pub security: SecurityConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            service: ServiceConfig::default(),
            components: default_components(),
            version_mapping: Vec::new(),
            security: SecurityConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Service identity and mounting.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Human-readable service name, reported on the index endpoint.
    pub name: String,

    /// Deployment environment label (e.g., "production", "staging").
    pub environment: String,

    /// Optional path under which the whole service is mounted.
    /// Normalized to carry a leading slash during loading.
    pub subpath: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "klant-gateway".to_string(),
            environment: String::new(),
            subpath: None,
        }
    }
}

impl ServiceConfig {
    /// Qualify a path with the configured subpath, if any.
    pub fn prefixed(&self, path: &str) -> String {
        match &self.subpath {
            Some(subpath) => format!("{subpath}{path}"),
            None => path.to_string(),
        }
    }
}

/// One independently versioned sub-API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentConfig {
    /// Unique component identifier (e.g., "klanten").
    pub name: String,

    /// Path prefix under which the component is served.
    pub base_path: String,

    /// Declared API version, stamped on matching responses.
    pub api_version: ApiVersion,

    /// Optional YAML file holding the component's API description
    /// document. A minimal document is generated when absent.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    /// Disabled components register no routes and no version mapping.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_components() -> Vec<ComponentConfig> {
    vec![
        ComponentConfig {
            name: "klanten".to_string(),
            base_path: "/klanten/api/v1".to_string(),
            api_version: ApiVersion::new(1, 0, 0),
            schema_path: None,
            enabled: true,
        },
        ComponentConfig {
            name: "contactmomenten".to_string(),
            base_path: "/contactmomenten/api/v1".to_string(),
            api_version: ApiVersion::new(1, 0, 0),
            schema_path: None,
            enabled: true,
        },
    ]
}

/// Extra version mapping entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappingConfig {
    /// Path prefix to match.
    pub path_prefix: String,

    /// Version bound to the prefix.
    pub version: ApiVersion,
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security response headers.
    pub enable_headers: bool,

    /// Host names accepted in the `Host` header. Empty = accept any.
    pub allowed_hosts: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            allowed_hosts: Vec::new(),
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
