//! Axum route handlers for the Email API.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::mailer::{MailError, ReportEmail};
use crate::state::AppState;

const DATA_URL_PREFIX: &str = "base64,";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendReportRequest {
    pub email: Option<String>,
    pub pdf_base64: Option<String>,
    pub name: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SendReportResponse {
    pub message: String,
}

/// POST /api/v1/email/report
pub async fn handle_send_report(
    State(state): State<AppState>,
    Json(request): Json<SendReportRequest>,
) -> Result<Json<SendReportResponse>, AppError> {
    let to = non_blank(request.email.as_deref());
    let pdf = non_blank(request.pdf_base64.as_deref());
    let (Some(to), Some(pdf)) = (to, pdf) else {
        return Err(AppError::Validation(
            "email and pdfBase64 are required".to_string(),
        ));
    };

    let pdf_base64 = validate_pdf_base64(pdf)?;

    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| AppError::Mail(MailError::NotConfigured.to_string()))?;

    mailer
        .send_report(&ReportEmail {
            to,
            name: request.name.as_deref(),
            score: request.score,
            pdf_base64,
        })
        .await
        .map_err(|e| AppError::Mail(e.to_string()))?;

    Ok(Json(SendReportResponse {
        message: "Email sent successfully".to_string(),
    }))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Strips a `data:application/pdf;base64,` prefix and checks the payload decodes.
fn validate_pdf_base64(raw: &str) -> Result<&str, AppError> {
    let payload = match raw.split_once(DATA_URL_PREFIX) {
        Some((head, rest)) if head.starts_with("data:") => rest,
        _ => raw,
    };

    STANDARD
        .decode(payload)
        .map_err(|e| AppError::Validation(format!("pdfBase64 is not valid base64: {e}")))?;

    Ok(payload)
}
