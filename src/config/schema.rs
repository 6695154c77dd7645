//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Remote scripting backend.
    pub backend: BackendConfig,

    /// Cross-origin policy for the web client.
    pub cors: CorsConfig,

    /// File attachment constraints for KPI updates.
    pub upload: UploadConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Backend endpoint configuration.
///
/// The backend is a single POST endpoint accepting `{ action, ...payload }`.
/// No timeout is configured beyond the transport default; a hung backend call
/// hangs the corresponding client request.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend URL. Must be supplied via config file or environment.
    pub url: String,
}

/// Cross-origin configuration. Exactly one origin is allowed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// The single allowed origin for browser clients.
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// File attachment constraints.
///
/// Two independent caps are kept on purpose: the hard cap bounds the request
/// body at the transport layer, the soft cap is checked explicitly in the
/// update handler with its own message.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Transport-level request body cap in bytes.
    pub hard_limit_bytes: usize,

    /// Explicit per-file cap in bytes, checked in the handler.
    pub soft_limit_bytes: usize,

    /// MIME types accepted for the proof attachment.
    pub allowed_mime_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            hard_limit_bytes: 5 * 1024 * 1024,
            soft_limit_bytes: 3 * 1024 * 1024,
            allowed_mime_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "application/pdf".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [backend]
            url = "https://script.example.com/exec"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.url, "https://script.example.com/exec");
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
        assert_eq!(config.upload.hard_limit_bytes, 5 * 1024 * 1024);
        assert_eq!(config.upload.soft_limit_bytes, 3 * 1024 * 1024);
        assert_eq!(config.upload.allowed_mime_types.len(), 3);
    }

    #[test]
    fn upload_caps_are_overridable() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upload]
            hard_limit_bytes = 1024
            soft_limit_bytes = 512
            "#,
        )
        .unwrap();

        assert_eq!(config.upload.hard_limit_bytes, 1024);
        assert_eq!(config.upload.soft_limit_bytes, 512);
    }
}
