use chrono::NaiveDateTime;
use serde::Serialize;

/// A symptom submission plus externally produced analysis, awaiting
/// doctor verification. `verified` flips to true when a prescription is
/// issued against the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub symptoms: String,
    pub detailed_analysis: String,
    pub precautions: Vec<String>,
    pub type_of_doctors: String,
    pub predictions: Vec<String>,
    pub patient_id: i64,
    pub caretaker_id: i64,
    pub doctor_id: i64,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}

/// Row shape for the caretaker/doctor report listings — joined with the
/// patient name so the list view doesn't need a second lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub id: i64,
    pub patient_id: i64,
    pub patient: Option<PatientRef>,
    pub detailed_analysis: String,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientRef {
    pub name: String,
}

/// Validated creation payload for a report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub symptoms: String,
    pub detailed_analysis: String,
    pub precautions: Vec<String>,
    pub type_of_doctors: String,
    pub predictions: Vec<String>,
    pub patient_id: i64,
    pub caretaker_id: i64,
    pub doctor_id: i64,
    pub verified: bool,
}
