//! Prescription endpoints.
//!
//! - `POST /api/v1/prescription/create`
//! - `GET /api/v1/prescription/`
//! - `GET /api/v1/prescription/:id`
//! - `GET /api/v1/prescription/report/:report_id`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoints::parse_id;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::prescription;
use crate::models::Prescription;
use crate::validation;

#[derive(Serialize)]
pub struct PrescriptionResponse {
    pub message: &'static str,
    pub prescription: Prescription,
}

#[derive(Serialize)]
pub struct PrescriptionsResponse {
    pub message: &'static str,
    pub prescriptions: Vec<Prescription>,
}

/// Creating a prescription also marks its report verified; the two
/// writes share one transaction.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PrescriptionResponse>), ApiError> {
    let data = validation::validate_prescription(&body)?;

    let mut conn = ctx.lock_db()?;
    let created = prescription::insert_verifying_report(&mut conn, &data)?;

    Ok((
        StatusCode::CREATED,
        Json(PrescriptionResponse {
            message: "Prescription created successfully",
            prescription: created,
        }),
    ))
}

pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<PrescriptionsResponse>, ApiError> {
    let conn = ctx.lock_db()?;
    let prescriptions = prescription::list_all(&conn)?;
    Ok(Json(PrescriptionsResponse {
        message: "Prescriptions retrieved successfully",
        prescriptions,
    }))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PrescriptionResponse>, ApiError> {
    let id = parse_id(&id, "Invalid ID format")?;

    let conn = ctx.lock_db()?;
    let found = prescription::get_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Prescription not found".into()))?;

    Ok(Json(PrescriptionResponse {
        message: "Prescription retrieved successfully",
        prescription: found,
    }))
}

pub async fn by_report(
    State(ctx): State<ApiContext>,
    Path(report_id): Path<String>,
) -> Result<Json<PrescriptionResponse>, ApiError> {
    let report_id = parse_id(&report_id, "Invalid ID format")?;

    let conn = ctx.lock_db()?;
    let found = prescription::get_by_report_id(&conn, report_id)?
        .ok_or_else(|| ApiError::NotFound("Prescription not found".into()))?;

    Ok(Json(PrescriptionResponse {
        message: "Prescription retrieved successfully",
        prescription: found,
    }))
}
