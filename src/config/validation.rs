//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (size caps, addresses)
//! - Check the backend URL is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingBackendUrl,
    InvalidBackendUrl(String),
    InvalidBindAddress(String),
    InvalidAllowedOrigin(String),
    EmptyMimeAllowList,
    ZeroSoftCap,
    SoftCapAboveHardCap { soft: usize, hard: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingBackendUrl => {
                write!(f, "backend.url must be set (config file or KPI_GATEWAY_BACKEND_URL)")
            }
            ValidationError::InvalidBackendUrl(url) => {
                write!(f, "backend.url is not an absolute http(s) URL: {}", url)
            }
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a valid socket address: {}", addr)
            }
            ValidationError::InvalidAllowedOrigin(origin) => {
                write!(f, "cors.allowed_origin is not a valid origin: {}", origin)
            }
            ValidationError::EmptyMimeAllowList => {
                write!(f, "upload.allowed_mime_types must not be empty")
            }
            ValidationError::ZeroSoftCap => {
                write!(f, "upload.soft_limit_bytes must be greater than zero")
            }
            ValidationError::SoftCapAboveHardCap { soft, hard } => {
                write!(
                    f,
                    "upload.soft_limit_bytes ({}) exceeds upload.hard_limit_bytes ({})",
                    soft, hard
                )
            }
        }
    }
}

/// Validate a parsed configuration, collecting every problem.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backend.url.is_empty() {
        errors.push(ValidationError::MissingBackendUrl);
    } else {
        match Url::parse(&config.backend.url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => errors.push(ValidationError::InvalidBackendUrl(config.backend.url.clone())),
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.cors.allowed_origin.parse::<HeaderValue>().is_err()
        || config.cors.allowed_origin.is_empty()
    {
        errors.push(ValidationError::InvalidAllowedOrigin(
            config.cors.allowed_origin.clone(),
        ));
    }

    if config.upload.allowed_mime_types.is_empty() {
        errors.push(ValidationError::EmptyMimeAllowList);
    }

    if config.upload.soft_limit_bytes == 0 {
        errors.push(ValidationError::ZeroSoftCap);
    }

    if config.upload.soft_limit_bytes > config.upload.hard_limit_bytes {
        errors.push(ValidationError::SoftCapAboveHardCap {
            soft: config.upload.soft_limit_bytes,
            hard: config.upload.hard_limit_bytes,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
