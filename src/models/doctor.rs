use chrono::NaiveDateTime;
use serde::Serialize;

/// Reviewing physician account. Referenced by facilities, patients and
/// reports; issues prescriptions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// bcrypt hash — never serialized into API responses.
    #[serde(skip_serializing)]
    pub password: String,
    pub specialization: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Projection served by doctor lookups — no password column selected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub specialization: Option<String>,
}
