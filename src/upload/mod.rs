//! Per-request file attachment handling.
//!
//! # Responsibilities
//! - Enforce the MIME allow-list and the explicit soft size cap
//! - Encode accepted attachments as `data:<mime>;base64,<data>` URIs
//!
//! # Design Decisions
//! - An [`Attachment`] lives only inside one update request; nothing is
//!   retained after the response is sent
//! - The transport-level hard cap is enforced separately by the body limit
//!   layer on the upload route

use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::config::UploadConfig;
use crate::error::GatewayError;

/// One uploaded file, held in memory for the duration of a request.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub bytes: Bytes,
    pub mime: String,
}

impl Attachment {
    /// Encode as a base64 data URI for the outbound payload.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }
}

/// Size and type constraints for one update request, derived from config.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed_mime_types: Vec<String>,
    soft_limit_bytes: usize,
}

impl UploadPolicy {
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            allowed_mime_types: config.allowed_mime_types.clone(),
            soft_limit_bytes: config.soft_limit_bytes,
        }
    }

    /// Reject MIME types outside the allow-list. Checked before the field
    /// body is read.
    pub fn check_mime(&self, mime: &str) -> Result<(), GatewayError> {
        if self.allowed_mime_types.iter().any(|allowed| allowed == mime) {
            Ok(())
        } else {
            Err(GatewayError::UnsupportedMediaType(
                "Tipe file tidak diizinkan. Maksimal JPG, PNG, atau PDF.".to_string(),
            ))
        }
    }

    /// Reject files over the soft cap. A file exactly at the cap passes.
    pub fn check_size(&self, size: usize) -> Result<(), GatewayError> {
        if size > self.soft_limit_bytes {
            Err(GatewayError::PayloadTooLarge(
                "File terlalu besar. Maksimal 3 MB agar aman di sistem.".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate and take ownership of an uploaded file.
    pub fn accept(&self, mime: String, bytes: Bytes) -> Result<Attachment, GatewayError> {
        self.check_mime(&mime)?;
        self.check_size(bytes.len())?;
        Ok(Attachment { bytes, mime })
    }
}
