use chrono::NaiveDateTime;
use serde::Serialize;

use super::enums::Gender;

/// A resident of an old age home.
///
/// The caretaker/doctor assignments are nullable at the storage level;
/// the creation payload requires both, so rows written through the API
/// always carry them. The odd lowercase `assignedcaretakerId` key is the
/// wire name the UI already depends on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub blood_group: String,
    pub contact: String,
    pub medical_history: Vec<String>,
    pub old_age_home_id: i64,
    #[serde(rename = "assignedcaretakerId")]
    pub assigned_caretaker_id: Option<i64>,
    pub assigned_doctor_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated creation payload for a patient.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub blood_group: String,
    pub contact: String,
    pub medical_history: Vec<String>,
    pub old_age_home_id: i64,
    pub assigned_caretaker_id: i64,
    pub assigned_doctor_id: i64,
}
