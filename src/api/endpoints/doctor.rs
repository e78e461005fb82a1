//! Doctor account and directory endpoints.
//!
//! - `POST /api/v1/doctor/signup`
//! - `POST /api/v1/doctor/signin`
//! - `GET /api/v1/doctor/all`
//! - `GET /api/v1/doctor/:id`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoints::parse_id;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::credentials;
use crate::db;
use crate::db::repository::doctor;
use crate::models::{Doctor, DoctorPublic};
use crate::validation;

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    #[serde(rename = "newDoctor")]
    pub new_doctor: Doctor,
}

#[derive(Serialize)]
pub struct SigninResponse {
    pub message: &'static str,
    pub doctor: Doctor,
}

#[derive(Serialize)]
pub struct DoctorsResponse {
    pub message: &'static str,
    pub doctors: Vec<DoctorPublic>,
}

#[derive(Serialize)]
pub struct DoctorResponse {
    pub message: &'static str,
    pub doctor: DoctorPublic,
}

pub async fn signup(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let data = validation::validate_signup(&body)?;

    let hash = credentials::hash_password(&data.password, ctx.bcrypt_cost)?;

    let conn = ctx.lock_db()?;
    if doctor::get_by_email(&conn, &data.email)?.is_some() {
        return Err(ApiError::Conflict("Email already in use".into()));
    }
    let created = doctor::insert(&conn, &data.username, &data.email, &hash).map_err(|err| {
        if db::is_unique_violation(&err) {
            ApiError::Conflict("Email already in use".into())
        } else {
            ApiError::from(err)
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully",
            new_doctor: created,
        }),
    ))
}

pub async fn signin(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<Json<SigninResponse>, ApiError> {
    let data = validation::validate_signin(&body)?;

    let account = {
        let conn = ctx.lock_db()?;
        doctor::get_by_email(&conn, &data.email)?
    };

    let account = account.ok_or(ApiError::Unauthorized)?;
    if !credentials::verify_password(&data.password, &account.password) {
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(SigninResponse {
        message: "Login successful",
        doctor: account,
    }))
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<DoctorsResponse>, ApiError> {
    let conn = ctx.lock_db()?;
    let doctors = doctor::list_all(&conn)?;
    Ok(Json(DoctorsResponse {
        message: "Doctors fetched successfully",
        doctors,
    }))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<DoctorResponse>, ApiError> {
    let id = parse_id(&id, "Invalid ID format")?;

    let conn = ctx.lock_db()?;
    let found = doctor::get_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Doctor not found".into()))?;

    Ok(Json(DoctorResponse {
        message: "Doctor retrieved successfully",
        doctor: found,
    }))
}
