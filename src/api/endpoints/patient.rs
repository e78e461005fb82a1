//! Patient endpoints.
//!
//! - `POST /api/v1/patient/`
//! - `GET /api/v1/patient/`
//! - `GET /api/v1/patient/:id`
//! - `GET /api/v1/patient/oldagehome/:old_age_home_id`
//! - `GET /api/v1/patient/caretaker/:caretaker_id`
//! - `GET /api/v1/patient/doctor/:doctor_id`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoints::parse_id;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::patient;
use crate::models::Patient;
use crate::validation;

#[derive(Serialize)]
pub struct PatientResponse {
    pub message: &'static str,
    pub patient: Patient,
}

#[derive(Serialize)]
pub struct PatientsResponse {
    pub message: &'static str,
    pub patients: Vec<Patient>,
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PatientResponse>), ApiError> {
    let data = validation::validate_patient(&body)?;

    let conn = ctx.lock_db()?;
    let created = patient::insert(&conn, &data)?;

    Ok((
        StatusCode::CREATED,
        Json(PatientResponse {
            message: "Patient created successfully",
            patient: created,
        }),
    ))
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<PatientsResponse>, ApiError> {
    let conn = ctx.lock_db()?;
    let patients = patient::list_all(&conn)?;
    Ok(Json(PatientsResponse {
        message: "Patients retrieved successfully",
        patients,
    }))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, ApiError> {
    let id = parse_id(&id, "Invalid ID format")?;

    let conn = ctx.lock_db()?;
    let found = patient::get_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))?;

    Ok(Json(PatientResponse {
        message: "Patient retrieved successfully",
        patient: found,
    }))
}

pub async fn by_old_age_home(
    State(ctx): State<ApiContext>,
    Path(old_age_home_id): Path<String>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let old_age_home_id = parse_id(&old_age_home_id, "Invalid old age home ID format")?;

    let conn = ctx.lock_db()?;
    let patients = patient::list_by_old_age_home(&conn, old_age_home_id)?;
    Ok(Json(PatientsResponse {
        message: "Patients retrieved successfully",
        patients,
    }))
}

pub async fn by_caretaker(
    State(ctx): State<ApiContext>,
    Path(caretaker_id): Path<String>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let caretaker_id = parse_id(&caretaker_id, "Invalid caretaker ID format")?;

    let conn = ctx.lock_db()?;
    let patients = patient::list_by_caretaker(&conn, caretaker_id)?;
    Ok(Json(PatientsResponse {
        message: "Patients retrieved successfully",
        patients,
    }))
}

pub async fn by_doctor(
    State(ctx): State<ApiContext>,
    Path(doctor_id): Path<String>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let doctor_id = parse_id(&doctor_id, "Invalid doctor ID format")?;

    let conn = ctx.lock_db()?;
    let patients = patient::list_by_doctor(&conn, doctor_id)?;
    Ok(Json(PatientsResponse {
        message: "Patients retrieved successfully",
        patients,
    }))
}
