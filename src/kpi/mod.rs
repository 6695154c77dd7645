//! KPI domain subsystem: record types and batch cross-validation.

pub mod types;
pub mod validator;

pub use types::{BackendEnvelope, IndicatorMaster, IndicatorSubmission, KpiBatchRequest};
pub use validator::{validate_batch, VARIABLE_TARGET_MARKER};
