use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A doctor's medicine list tied to one report. Creating a prescription
/// verifies the report in the same transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub report_id: i64,
    pub medicines: Vec<Medicine>,
    pub created_at: NaiveDateTime,
}

/// One prescribed medicine. Stored inside the prescription row as a JSON
/// array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

/// Validated creation payload for a prescription.
#[derive(Debug, Clone)]
pub struct NewPrescription {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub report_id: i64,
    pub medicines: Vec<Medicine>,
}
