//! Batch cross-validation against master indicator records.
//!
//! The backend's master data is the single source of truth for target
//! immutability: a client may not alter a fixed target, but a master target
//! carrying the variable marker may be set freely.

use crate::error::GatewayError;
use crate::kpi::types::{target_text, IndicatorMaster, IndicatorSubmission};

/// Marker substring in a master target that declares the target variable.
/// Matched case-insensitively.
pub const VARIABLE_TARGET_MARKER: &str = "fluktuatif";

/// Check every submitted row against the master list.
///
/// Fail-fast: the first violation rejects the whole batch, naming the
/// offending indicator. No partial acceptance.
pub fn validate_batch(
    nama: &str,
    items: &[IndicatorSubmission],
    master: &[IndicatorMaster],
) -> Result<(), GatewayError> {
    for item in items {
        let record = master
            .iter()
            .find(|m| m.nama == nama && m.indikator_kpi == item.indikator_kpi);

        let Some(record) = record else {
            return Err(GatewayError::validation(format!(
                "Indikator \"{}\" tidak ditemukan.",
                item.indikator_kpi
            )));
        };

        let master_target = target_text(&record.target).to_lowercase();
        let submitted_target = target_text(&item.target).to_lowercase();

        if master_target.contains(VARIABLE_TARGET_MARKER) {
            continue;
        }

        if master_target != submitted_target {
            return Err(GatewayError::validation(format!(
                "Target untuk indikator \"{}\" tidak boleh diubah.",
                item.indikator_kpi
            )));
        }
    }

    Ok(())
}
