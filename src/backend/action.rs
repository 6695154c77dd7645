//! Outbound payload union for the scripting backend.
//!
//! Every request the gateway forwards is one of these variants; the wire
//! shape is the variant's fields plus the `action` discriminator the backend
//! dispatches on.

use serde::Serialize;

use crate::kpi::KpiBatchRequest;

/// One action-tagged payload for the backend.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action")]
pub enum BackendAction {
    #[serde(rename = "register")]
    Register {
        email: String,
        password: String,
        name: String,
    },

    #[serde(rename = "login")]
    Login { email: String, password: String },

    #[serde(rename = "getIndikatorData")]
    GetIndikatorData,

    /// Carries the client's full batch body, extra fields included.
    #[serde(rename = "kpiBatch")]
    KpiBatch(KpiBatchRequest),

    #[serde(rename = "getKpiByUser")]
    GetKpiByUser { email: String },

    /// `bukti` is a base64 data URI, or the empty string when no file was
    /// attached. Never null.
    #[serde(rename = "updateKPI")]
    UpdateKpi {
        id: String,
        actual: String,
        email: String,
        bukti: String,
    },

    #[serde(rename = "getSubmittedKPI")]
    GetSubmittedKpi { email: String },
}

impl BackendAction {
    /// Wire tag, for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            BackendAction::Register { .. } => "register",
            BackendAction::Login { .. } => "login",
            BackendAction::GetIndikatorData => "getIndikatorData",
            BackendAction::KpiBatch(_) => "kpiBatch",
            BackendAction::GetKpiByUser { .. } => "getKpiByUser",
            BackendAction::UpdateKpi { .. } => "updateKPI",
            BackendAction::GetSubmittedKpi { .. } => "getSubmittedKPI",
        }
    }
}
