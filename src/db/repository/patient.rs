use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Gender, NewPatient, Patient};

pub fn insert(conn: &Connection, patient: &NewPatient) -> Result<Patient, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (name, age, gender, blood_group, contact, medical_history,
         old_age_home_id, assigned_caretaker_id, assigned_doctor_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            patient.name,
            patient.age,
            patient.gender.as_str(),
            patient.blood_group,
            patient.contact,
            serde_json::to_string(&patient.medical_history)?,
            patient.old_age_home_id,
            patient.assigned_caretaker_id,
            patient.assigned_doctor_id,
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_by_id(conn, id)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation("patient row missing after insert".into())
    })
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let row = conn
        .query_row(
            &format!("{SELECT_PATIENT} WHERE id = ?1"),
            params![id],
            patient_row_from_rusqlite,
        )
        .optional()?;
    row.map(patient_from_row).transpose()
}

pub fn list_all(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    collect_patients(conn, SELECT_PATIENT, &[])
}

pub fn list_by_old_age_home(
    conn: &Connection,
    old_age_home_id: i64,
) -> Result<Vec<Patient>, DatabaseError> {
    collect_patients(
        conn,
        &format!("{SELECT_PATIENT} WHERE old_age_home_id = ?1"),
        &[&old_age_home_id],
    )
}

pub fn list_by_caretaker(
    conn: &Connection,
    caretaker_id: i64,
) -> Result<Vec<Patient>, DatabaseError> {
    collect_patients(
        conn,
        &format!("{SELECT_PATIENT} WHERE assigned_caretaker_id = ?1"),
        &[&caretaker_id],
    )
}

pub fn list_by_doctor(conn: &Connection, doctor_id: i64) -> Result<Vec<Patient>, DatabaseError> {
    collect_patients(
        conn,
        &format!("{SELECT_PATIENT} WHERE assigned_doctor_id = ?1"),
        &[&doctor_id],
    )
}

const SELECT_PATIENT: &str = "SELECT id, name, age, gender, blood_group, contact,
         medical_history, old_age_home_id, assigned_caretaker_id, assigned_doctor_id,
         created_at, updated_at
         FROM patients";

fn collect_patients(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, patient_row_from_rusqlite)?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(patient_from_row(row?)?);
    }
    Ok(patients)
}

// Internal row type — JSON and enum columns decode outside the rusqlite closure
struct PatientRow {
    id: i64,
    name: String,
    age: i64,
    gender: String,
    blood_group: String,
    contact: String,
    medical_history: String,
    old_age_home_id: i64,
    assigned_caretaker_id: Option<i64>,
    assigned_doctor_id: Option<i64>,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
}

fn patient_row_from_rusqlite(row: &rusqlite::Row<'_>) -> Result<PatientRow, rusqlite::Error> {
    Ok(PatientRow {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        blood_group: row.get(4)?,
        contact: row.get(5)?,
        medical_history: row.get(6)?,
        old_age_home_id: row.get(7)?,
        assigned_caretaker_id: row.get(8)?,
        assigned_doctor_id: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn patient_from_row(row: PatientRow) -> Result<Patient, DatabaseError> {
    Ok(Patient {
        id: row.id,
        name: row.name,
        age: row.age,
        gender: Gender::from_str(&row.gender)?,
        blood_group: row.blood_group,
        contact: row.contact,
        medical_history: serde_json::from_str(&row.medical_history)?,
        old_age_home_id: row.old_age_home_id,
        assigned_caretaker_id: row.assigned_caretaker_id,
        assigned_doctor_id: row.assigned_doctor_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::db::repository::{caretaker, doctor, old_age_home};
    use crate::models::NewOldAgeHome;

    fn seed_home(conn: &Connection) {
        caretaker::insert(conn, "alice", "a@x.com", "h").unwrap();
        doctor::insert(conn, "drbob", "b@x.com", "h").unwrap();
        old_age_home::insert(
            conn,
            &NewOldAgeHome {
                name: "Sunrise Care".into(),
                phone_number: "9876543210".into(),
                address: "1 Main Street".into(),
                city: "Pune".into(),
                state: "Maharashtra".into(),
                pincode: "411001".into(),
                current_occupancy: 0,
                assigned_caretaker_id: 1,
                assigned_doctor_id: 1,
            },
        )
        .unwrap();
    }

    fn sample_patient() -> NewPatient {
        NewPatient {
            name: "Ravi Kumar".into(),
            age: 82,
            gender: Gender::Male,
            blood_group: "O+".into(),
            contact: "9876543210".into(),
            medical_history: vec!["hypertension".into(), "diabetes".into()],
            old_age_home_id: 1,
            assigned_caretaker_id: 1,
            assigned_doctor_id: 1,
        }
    }

    #[test]
    fn insert_roundtrips_history_and_gender() {
        let conn = open_memory_database().unwrap();
        seed_home(&conn);

        let patient = insert(&conn, &sample_patient()).unwrap();
        assert_eq!(patient.gender, Gender::Male);
        assert_eq!(patient.medical_history.len(), 2);

        let fetched = get_by_id(&conn, patient.id).unwrap().unwrap();
        assert_eq!(fetched.medical_history, patient.medical_history);
    }

    #[test]
    fn listings_scope_by_foreign_key() {
        let conn = open_memory_database().unwrap();
        seed_home(&conn);
        insert(&conn, &sample_patient()).unwrap();

        assert_eq!(list_by_old_age_home(&conn, 1).unwrap().len(), 1);
        assert_eq!(list_by_caretaker(&conn, 1).unwrap().len(), 1);
        assert_eq!(list_by_doctor(&conn, 1).unwrap().len(), 1);
        // Misses are empty collections, not errors
        assert!(list_by_doctor(&conn, 99).unwrap().is_empty());
    }

    #[test]
    fn empty_medical_history_allowed() {
        let conn = open_memory_database().unwrap();
        seed_home(&conn);
        let mut new_patient = sample_patient();
        new_patient.medical_history = Vec::new();
        let patient = insert(&conn, &new_patient).unwrap();
        assert!(patient.medical_history.is_empty());
    }
}
