use chrono::NaiveDateTime;
use serde::Serialize;

/// An old age home facility. Owned by exactly one caretaker (enforced at
/// creation time and by a UNIQUE constraint) and assigned one doctor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OldAgeHome {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub current_occupancy: i64,
    pub assigned_caretaker_id: i64,
    pub assigned_doctor_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated creation payload for an old age home.
#[derive(Debug, Clone)]
pub struct NewOldAgeHome {
    pub name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub current_occupancy: i64,
    pub assigned_caretaker_id: i64,
    pub assigned_doctor_id: i64,
}
