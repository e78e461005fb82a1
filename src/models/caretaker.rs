use chrono::NaiveDateTime;
use serde::Serialize;

/// Front-line staff account. Owns at most one old age home and submits
/// health reports for its patients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Caretaker {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// bcrypt hash — never serialized into API responses.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
