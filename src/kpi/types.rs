//! KPI record types exchanged with the client and the backend.
//!
//! The backend is a spreadsheet, so target cells arrive with loose typing:
//! strings, numbers, or nothing at all. [`target_text`] normalizes them the
//! way the rest of the system expects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Master indicator definition, authoritative for target immutability.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorMaster {
    #[serde(default)]
    pub nama: String,
    #[serde(default)]
    pub indikator_kpi: String,
    #[serde(default)]
    pub target: Value,
}

/// One submitted indicator row from the client. Unknown fields are kept and
/// forwarded untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndicatorSubmission {
    #[serde(default)]
    pub indikator_kpi: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub target: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full `/api/kpi-batch` request body. The whole body, extra fields included,
/// is forwarded to the backend once validation passes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KpiBatchRequest {
    pub indikator_list: Vec<IndicatorSubmission>,
    #[serde(default)]
    pub nama: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{ result, message }` envelope the backend wraps every reply in. `message`
/// is a string on most actions and the master list on `getIndikatorData`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendEnvelope {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub message: Value,
}

impl BackendEnvelope {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    /// Master records carried in `message`. Anything that is not an array of
    /// records is treated as an empty list.
    pub fn master_records(self) -> Vec<IndicatorMaster> {
        serde_json::from_value(self.message).unwrap_or_default()
    }
}

/// Text form of a target cell: null/absent becomes the empty string, numbers
/// and booleans their plain text form.
pub fn target_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batch_request_keeps_extra_fields() {
        let body = json!({
            "indikator_list": [
                { "indikator_kpi": "Sales", "target": "100", "bulan": "Januari" }
            ],
            "nama": "Alice",
            "periode": "2026-01"
        });

        let request: KpiBatchRequest = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(request.indikator_list.len(), 1);
        assert_eq!(request.extra["periode"], "2026-01");
        assert_eq!(request.indikator_list[0].extra["bulan"], "Januari");

        // Round-trips without loss.
        assert_eq!(serde_json::to_value(&request).unwrap(), body);
    }

    #[test]
    fn envelope_with_non_array_message_yields_empty_master_list() {
        let envelope: BackendEnvelope =
            serde_json::from_value(json!({ "result": "success", "message": "ok" })).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.master_records().is_empty());
    }

    #[test]
    fn target_text_coerces_loose_cell_types() {
        assert_eq!(target_text(&Value::Null), "");
        assert_eq!(target_text(&json!("95%")), "95%");
        assert_eq!(target_text(&json!(90)), "90");
        assert_eq!(target_text(&json!(true)), "true");
    }
}
