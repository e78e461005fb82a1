//! Old age home endpoints.
//!
//! - `POST /api/v1/oldagehome/create`
//! - `GET /api/v1/oldagehome/:id`
//! - `GET /api/v1/oldagehome/caretaker/:caretaker_id`
//! - `GET /api/v1/oldagehome/doctor/:doctor_id`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoints::parse_id;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db;
use crate::db::repository::{caretaker, doctor, old_age_home};
use crate::models::OldAgeHome;
use crate::validation;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    #[serde(rename = "oldAgeHome")]
    pub old_age_home: OldAgeHome,
}

#[derive(Serialize)]
pub struct HomesResponse {
    pub message: &'static str,
    #[serde(rename = "oldAgeHomes")]
    pub old_age_homes: Vec<OldAgeHome>,
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<HomeResponse>), ApiError> {
    let data = validation::validate_old_age_home(&body)?;

    let conn = ctx.lock_db()?;

    if caretaker::get_by_id(&conn, data.assigned_caretaker_id)?.is_none() {
        return Err(ApiError::NotFound("Caretaker not found".into()));
    }
    if doctor::get_by_id(&conn, data.assigned_doctor_id)?.is_none() {
        return Err(ApiError::NotFound("Doctor not found".into()));
    }
    if old_age_home::get_by_caretaker_id(&conn, data.assigned_caretaker_id)?.is_some() {
        return Err(ApiError::Conflict(
            "Caretaker already has an assigned old age home".into(),
        ));
    }

    // The UNIQUE column catches a concurrent create racing past the
    // check above
    let created = old_age_home::insert(&conn, &data).map_err(|err| {
        if db::is_unique_violation(&err) {
            ApiError::Conflict("Caretaker already has an assigned old age home".into())
        } else {
            ApiError::from(err)
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(HomeResponse {
            message: "Old age home created successfully",
            old_age_home: created,
        }),
    ))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<HomeResponse>, ApiError> {
    let id = parse_id(&id, "Invalid ID format")?;

    let conn = ctx.lock_db()?;
    let found = old_age_home::get_by_id(&conn, id)?
        .ok_or_else(|| ApiError::NotFound("Old age home not found".into()))?;

    Ok(Json(HomeResponse {
        message: "Old age home retrieved successfully",
        old_age_home: found,
    }))
}

pub async fn by_caretaker(
    State(ctx): State<ApiContext>,
    Path(caretaker_id): Path<String>,
) -> Result<Json<HomeResponse>, ApiError> {
    let caretaker_id = parse_id(&caretaker_id, "Invalid caretaker ID format")?;

    let conn = ctx.lock_db()?;
    let found = old_age_home::get_by_caretaker_id(&conn, caretaker_id)?
        .ok_or_else(|| ApiError::NotFound("No old age home found for this caretaker".into()))?;

    Ok(Json(HomeResponse {
        message: "Old age home retrieved successfully",
        old_age_home: found,
    }))
}

pub async fn by_doctor(
    State(ctx): State<ApiContext>,
    Path(doctor_id): Path<String>,
) -> Result<Json<HomesResponse>, ApiError> {
    let doctor_id = parse_id(&doctor_id, "Invalid doctor ID format")?;

    let conn = ctx.lock_db()?;
    let homes = old_age_home::list_by_doctor_id(&conn, doctor_id)?;

    // A doctor with no facilities is a miss, unlike patient listings
    if homes.is_empty() {
        return Err(ApiError::NotFound(
            "No old age homes found for this doctor".into(),
        ));
    }

    Ok(Json(HomesResponse {
        message: "Old age homes retrieved successfully",
        old_age_homes: homes,
    }))
}
