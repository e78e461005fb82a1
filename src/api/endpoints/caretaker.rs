//! Caretaker account endpoints.
//!
//! - `POST /api/v1/caretaker/signup`
//! - `POST /api/v1/caretaker/signin`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::credentials;
use crate::db;
use crate::db::repository::caretaker;
use crate::models::Caretaker;
use crate::validation;

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    #[serde(rename = "newCaretaker")]
    pub new_caretaker: Caretaker,
}

#[derive(Serialize)]
pub struct SigninResponse {
    pub message: &'static str,
    pub caretaker: Caretaker,
}

pub async fn signup(
    State(ctx): State<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let data = validation::validate_signup(&body)?;

    // Hash before taking the lock; bcrypt is deliberately slow
    let hash = credentials::hash_password(&data.password, ctx.bcrypt_cost)?;

    let conn = ctx.lock_db()?;
    if caretaker::get_by_email(&conn, &data.email)?.is_some() {
        return Err(ApiError::Conflict("Email already in use".into()));
    }
    let created =
        caretaker::insert(&conn, &data.username, &data.email, &hash).map_err(|err| {
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
            new_caretaker: created,
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
        caretaker::get_by_email(&conn, &data.email)?
    };

    // Unknown email and wrong password answer identically
    let account = account.ok_or(ApiError::Unauthorized)?;
    if !credentials::verify_password(&data.password, &account.password) {
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(SigninResponse {
        message: "Login successful",
        caretaker: account,
    }))
}
