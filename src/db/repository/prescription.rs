use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{NewPrescription, Prescription};

/// Insert a prescription and mark its report verified in one transaction.
///
/// The two writes commit or roll back together, so a prescription can
/// never exist alongside an unverified report.
pub fn insert_verifying_report(
    conn: &mut Connection,
    prescription: &NewPrescription,
) -> Result<Prescription, DatabaseError> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO prescriptions (patient_id, doctor_id, report_id, medicines)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            prescription.patient_id,
            prescription.doctor_id,
            prescription.report_id,
            serde_json::to_string(&prescription.medicines)?,
        ],
    )?;
    let id = tx.last_insert_rowid();

    tx.execute(
        "UPDATE reports SET verified = 1 WHERE id = ?1",
        params![prescription.report_id],
    )?;

    let created = get_by_id(&tx, id)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation("prescription row missing after insert".into())
    })?;
    tx.commit()?;
    Ok(created)
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Prescription>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("{SELECT_PRESCRIPTION} WHERE id = ?1"),
            params![id],
            prescription_row_from_rusqlite,
        )
        .optional()?;
    row.map(prescription_from_row).transpose()
}

/// Singular lookup: one prescription per report by convention.
pub fn get_by_report_id(
    conn: &Connection,
    report_id: i64,
) -> Result<Option<Prescription>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("{SELECT_PRESCRIPTION} WHERE report_id = ?1"),
            params![report_id],
            prescription_row_from_rusqlite,
        )
        .optional()?;
    row.map(prescription_from_row).transpose()
}

pub fn list_all(conn: &Connection) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(SELECT_PRESCRIPTION)?;
    let rows = stmt.query_map([], prescription_row_from_rusqlite)?;

    let mut prescriptions = Vec::new();
    for row in rows {
        prescriptions.push(prescription_from_row(row?)?);
    }
    Ok(prescriptions)
}

const SELECT_PRESCRIPTION: &str =
    "SELECT id, patient_id, doctor_id, report_id, medicines, created_at FROM prescriptions";

struct PrescriptionRow {
    id: i64,
    patient_id: i64,
    doctor_id: i64,
    report_id: i64,
    medicines: String,
    created_at: chrono::NaiveDateTime,
}

fn prescription_row_from_rusqlite(
    row: &rusqlite::Row<'_>,
) -> Result<PrescriptionRow, rusqlite::Error> {
    Ok(PrescriptionRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        report_id: row.get(3)?,
        medicines: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn prescription_from_row(row: PrescriptionRow) -> Result<Prescription, DatabaseError> {
    Ok(Prescription {
        id: row.id,
        patient_id: row.patient_id,
        doctor_id: row.doctor_id,
        report_id: row.report_id,
        medicines: serde_json::from_str(&row.medicines)?,
        created_at: row.created_at,
    })
}
