use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{NewReport, PatientRef, Report, ReportSummary};

pub fn insert(conn: &Connection, report: &NewReport) -> Result<Report, DatabaseError> {
    conn.execute(
        "INSERT INTO reports (symptoms, detailed_analysis, precautions, type_of_doctors,
         predictions, patient_id, caretaker_id, doctor_id, verified)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            report.symptoms,
            report.detailed_analysis,
            serde_json::to_string(&report.precautions)?,
            report.type_of_doctors,
            serde_json::to_string(&report.predictions)?,
            report.patient_id,
            report.caretaker_id,
            report.doctor_id,
            report.verified,
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_by_id(conn, id)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation("report row missing after insert".into())
    })
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Report>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("{SELECT_REPORT} WHERE id = ?1"),
            params![id],
            report_row_from_rusqlite,
        )
        .optional()?;
    row.map(report_from_row).transpose()
}

pub fn list_all(conn: &Connection) -> Result<Vec<Report>, DatabaseError> {
    let mut stmt = conn.prepare(SELECT_REPORT)?;
    let rows = stmt.query_map([], report_row_from_rusqlite)?;

    let mut reports = Vec::new();
    for row in rows {
        reports.push(report_from_row(row?)?);
    }
    Ok(reports)
}

/// Set the verified flag, returning the updated row. `None` when no such
/// report exists.
pub fn set_verified(
    conn: &Connection,
    id: i64,
    verified: bool,
) -> Result<Option<Report>, DatabaseError> {
    let changed = conn.execute(
        "UPDATE reports SET verified = ?1 WHERE id = ?2",
        params![verified, id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get_by_id(conn, id)
}

pub fn list_by_caretaker(
    conn: &Connection,
    caretaker_id: i64,
) -> Result<Vec<ReportSummary>, DatabaseError> {
    list_summaries(conn, "r.caretaker_id", caretaker_id)
}

pub fn list_by_doctor(
    conn: &Connection,
    doctor_id: i64,
) -> Result<Vec<ReportSummary>, DatabaseError> {
    list_summaries(conn, "r.doctor_id", doctor_id)
}

/// Listing rows joined with the patient name, oldest first.
fn list_summaries(
    conn: &Connection,
    scope_column: &str,
    id: i64,
) -> Result<Vec<ReportSummary>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT r.id, r.patient_id, p.name, r.detailed_analysis, r.verified, r.created_at
         FROM reports r
         LEFT JOIN patients p ON p.id = r.patient_id
         WHERE {scope_column} = ?1
         ORDER BY r.created_at"
    ))?;

    let rows = stmt.query_map(params![id], |row| {
        Ok(ReportSummary {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            patient: row.get::<_, Option<String>>(2)?.map(|name| PatientRef { name }),
            detailed_analysis: row.get(3)?,
            verified: row.get(4)?,
            created_at: row.get(5)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

const SELECT_REPORT: &str = "SELECT id, symptoms, detailed_analysis, precautions,
         type_of_doctors, predictions, patient_id, caretaker_id, doctor_id, verified, created_at
         FROM reports";

struct ReportRow {
    id: i64,
    symptoms: String,
    detailed_analysis: String,
    precautions: String,
    type_of_doctors: String,
    predictions: String,
    patient_id: i64,
    caretaker_id: i64,
    doctor_id: i64,
    verified: bool,
    created_at: chrono::NaiveDateTime,
}

fn report_row_from_rusqlite(row: &rusqlite::Row<'_>) -> Result<ReportRow, rusqlite::Error> {
    Ok(ReportRow {
        id: row.get(0)?,
        symptoms: row.get(1)?,
        detailed_analysis: row.get(2)?,
        precautions: row.get(3)?,
        type_of_doctors: row.get(4)?,
        predictions: row.get(5)?,
        patient_id: row.get(6)?,
        caretaker_id: row.get(7)?,
        doctor_id: row.get(8)?,
        verified: row.get(9)?,
        created_at: row.get(10)?,
    })
}

fn report_from_row(row: ReportRow) -> Result<Report, DatabaseError> {
    Ok(Report {
        id: row.id,
        symptoms: row.symptoms,
        detailed_analysis: row.detailed_analysis,
        precautions: serde_json::from_str(&row.precautions)?,
        type_of_doctors: row.type_of_doctors,
        predictions: serde_json::from_str(&row.predictions)?,
        patient_id: row.patient_id,
        caretaker_id: row.caretaker_id,
        doctor_id: row.doctor_id,
        verified: row.verified,
        created_at: row.created_at,
    })
}
