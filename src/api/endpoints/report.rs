//! Medical report endpoints.
//!
//! - `POST /api/v1/reports/create`
//! - `GET /api/v1/reports/`
//! - `GET /api/v1/reports/:id`
//! - `PUT /api/v1/reports/:id`
//! - `GET /api/v1/reports/caretaker/:caretaker_id`
//! - `GET /api/v1/reports/doctor/:doctor_id`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoints::parse_id;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::report;
use crate::models::{Report, ReportSummary};
use crate::validation;

#[derive(Serialize)]
pub struct ReportResponse {
    pub message: &'static str,
    pub report: Report,
}

#[derive(Serialize)]
pub struct ReportsResponse {
    pub message: &'static str,
    pub reports: Vec<Report>,
}

#[derive(Serialize)]
pub struct ReportSummariesResponse {
    pub message: &'static str,
    pub reports: Vec<ReportSummary>,
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ReportResponse>), ApiError> {
    let data = validation::validate_report(&body)?;

    let conn = ctx.lock_db()?;
    let created = report::insert(&conn, &data)?;

    Ok((
        StatusCode::CREATED,
        Json(ReportResponse {
            message: "Report created successfully",
            report: created,
        }),
    ))
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<ReportsResponse>, ApiError> {
    let conn = ctx.lock_db()?;
    let reports = report::list_all(&conn)?;
    Ok(Json(ReportsResponse {
        message: "Reports retrieved successfully",
        reports,
    }))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let id = parse_id(&id, "Invalid ID format")?;

    let conn = ctx.lock_db()?;
    let found = report::get_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Report not found".into()))?;

    Ok(Json(ReportResponse {
        message: "Report retrieved successfully",
        report: found,
    }))
}

/// Only the verified flag is mutable after creation.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<ReportResponse>, ApiError> {
    let id = parse_id(&id, "Invalid ID format")?;

    let verified = body
        .get("verified")
        .and_then(Value::as_bool)
        .ok_or_else(|| ApiError::BadRequest("Verified must be a boolean".into()))?;

    let conn = ctx.lock_db()?;
    let updated = report::set_verified(&conn, id, verified)?
        .ok_or_else(|| ApiError::NotFound("Report not found".into()))?;

    Ok(Json(ReportResponse {
        message: "Report updated successfully",
        report: updated,
    }))
}

pub async fn by_caretaker(
    State(ctx): State<ApiContext>,
    Path(caretaker_id): Path<String>,
) -> Result<Json<ReportSummariesResponse>, ApiError> {
    let caretaker_id = parse_id(&caretaker_id, "Invalid caretaker ID format")?;

    let conn = ctx.lock_db()?;
    let reports = report::list_by_caretaker(&conn, caretaker_id)?;
    Ok(Json(ReportSummariesResponse {
        message: "Reports retrieved successfully",
        reports,
    }))
}

pub async fn by_doctor(
    State(ctx): State<ApiContext>,
    Path(doctor_id): Path<String>,
) -> Result<Json<ReportSummariesResponse>, ApiError> {
    let doctor_id = parse_id(&doctor_id, "Invalid doctor ID format")?;

    let conn = ctx.lock_db()?;
    let reports = report::list_by_doctor(&conn, doctor_id)?;
    Ok(Json(ReportSummariesResponse {
        message: "Reports retrieved successfully",
        reports,
    }))
}
