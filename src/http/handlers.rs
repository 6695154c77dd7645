//! One handler per gateway endpoint.
//!
//! Every handler follows the same contract: validate locally, build one
//! [`BackendAction`], forward it exactly once, relay the backend's JSON body
//! with status 200. Failures return [`GatewayError`] and are rendered by the
//! central mapping layer.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::backend::BackendAction;
use crate::error::{GatewayError, GatewayResult};
use crate::http::server::AppState;
use crate::kpi::{validate_batch, BackendEnvelope, KpiBatchRequest};
use crate::upload::{Attachment, UploadPolicy};

/// Forward one action and relay the reply. Transport failures are logged and
/// collapsed into the route's localized message.
async fn relay(
    state: &AppState,
    action: &BackendAction,
    failure_message: &str,
) -> GatewayResult<Json<Value>> {
    match state.backend.dispatch(action).await {
        Ok(body) => Ok(Json(body)),
        Err(error) => {
            tracing::error!(action = action.tag(), %error, "Backend call failed");
            Err(GatewayError::backend(failure_message))
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Ini adalah API Indikator KPI</h1>")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> GatewayResult<Json<Value>> {
    if body.email.is_empty() || body.password.is_empty() || body.name.is_empty() {
        return Err(GatewayError::validation(
            "Email, password, dan nama wajib diisi!",
        ));
    }

    let action = BackendAction::Register {
        email: body.email,
        password: body.password,
        name: body.name,
    };
    relay(&state, &action, "Terjadi kesalahan saat registrasi.").await
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> GatewayResult<Json<Value>> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(GatewayError::validation("Email dan password wajib diisi!"));
    }

    let action = BackendAction::Login {
        email: body.email,
        password: body.password,
    };
    relay(&state, &action, "Terjadi kesalahan saat login.").await
}

/// Batch submission: one fresh master fetch, full cross-validation, then one
/// forward of the complete original body.
pub async fn kpi_batch(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> GatewayResult<Json<Value>> {
    let request: KpiBatchRequest = serde_json::from_value(body)
        .map_err(|_| GatewayError::validation("Indikator KPI tidak valid."))?;

    if request.indikator_list.is_empty() {
        return Err(GatewayError::validation("Indikator KPI tidak valid."));
    }

    let master_reply = state
        .backend
        .dispatch(&BackendAction::GetIndikatorData)
        .await
        .map_err(|error| {
            tracing::error!(%error, "Master indicator fetch failed");
            GatewayError::backend("Gagal mengirim KPI.")
        })?;

    let envelope: BackendEnvelope = serde_json::from_value(master_reply).unwrap_or_default();
    if !envelope.is_success() {
        return Err(GatewayError::backend(
            "Gagal validasi indikator (master data).",
        ));
    }

    let master = envelope.master_records();
    validate_batch(&request.nama, &request.indikator_list, &master)?;

    relay(&state, &BackendAction::KpiBatch(request), "Gagal mengirim KPI.").await
}

pub async fn indikator_data(State(state): State<AppState>) -> GatewayResult<Json<Value>> {
    relay(
        &state,
        &BackendAction::GetIndikatorData,
        "Gagal mengambil indikator!",
    )
    .await
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmailParams {
    pub email: String,
}

pub async fn kpi_my(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> GatewayResult<Json<Value>> {
    if params.email.is_empty() {
        return Err(GatewayError::validation("Email wajib dikirim"));
    }

    let action = BackendAction::GetKpiByUser {
        email: params.email,
    };
    relay(&state, &action, "Gagal mengambil KPI user").await
}

pub async fn kpi_by_user(
    State(state): State<AppState>,
    Json(body): Json<EmailParams>,
) -> GatewayResult<Json<Value>> {
    if body.email.is_empty() {
        return Err(GatewayError::validation("Email wajib dikirim"));
    }

    let action = BackendAction::GetKpiByUser { email: body.email };
    relay(&state, &action, "Gagal mengambil data KPI").await
}

pub async fn kpi_submitted(
    State(state): State<AppState>,
    Json(body): Json<EmailParams>,
) -> GatewayResult<Json<Value>> {
    if body.email.is_empty() {
        return Err(GatewayError::validation("Email wajib dikirim"));
    }

    let action = BackendAction::GetSubmittedKpi { email: body.email };
    relay(&state, &action, "Gagal mengambil KPI yang sudah dikirim").await
}

/// KPI update with an optional proof file. The attachment is owned by this
/// handler and dropped on every exit path.
pub async fn kpi_update(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> GatewayResult<Json<Value>> {
    let policy = UploadPolicy::from_config(&state.config.upload);

    let mut kpi_key = String::new();
    let mut actual = String::new();
    let mut email = String::new();
    let mut attachment: Option<Attachment> = None;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("kpiKey") => kpi_key = field.text().await.map_err(map_multipart_error)?,
            Some("actual") => actual = field.text().await.map_err(map_multipart_error)?,
            Some("email") => email = field.text().await.map_err(map_multipart_error)?,
            Some("buktiFile") => {
                let mime = field.content_type().unwrap_or_default().to_string();
                policy.check_mime(&mime)?;
                let bytes = field.bytes().await.map_err(map_multipart_error)?;
                attachment = Some(policy.accept(mime, bytes)?);
            }
            _ => continue,
        }
    }

    if kpi_key.is_empty() || email.is_empty() {
        return Err(GatewayError::validation("kpiKey dan email wajib diisi!"));
    }

    let bukti = attachment
        .as_ref()
        .map(Attachment::to_data_uri)
        .unwrap_or_default();

    let action = BackendAction::UpdateKpi {
        id: kpi_key,
        actual,
        email,
        bukti,
    };
    relay(&state, &action, "Gagal update KPI").await
}

/// Failures while reading the multipart body. Hitting the transport-level
/// body cap surfaces here as 413.
fn map_multipart_error(error: MultipartError) -> GatewayError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GatewayError::PayloadTooLarge("Ukuran file maksimal 5 MB.".to_string())
    } else {
        GatewayError::Validation("Form data tidak valid.".to_string())
    }
}
