use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{NewOldAgeHome, OldAgeHome};

pub fn insert(conn: &Connection, home: &NewOldAgeHome) -> Result<OldAgeHome, DatabaseError> {
    conn.execute(
        "INSERT INTO old_age_homes (name, phone_number, address, city, state, pincode,
         current_occupancy, assigned_caretaker_id, assigned_doctor_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            home.name,
            home.phone_number,
            home.address,
            home.city,
            home.state,
            home.pincode,
            home.current_occupancy,
            home.assigned_caretaker_id,
            home.assigned_doctor_id,
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_by_id(conn, id)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation("old age home row missing after insert".into())
    })
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<OldAgeHome>, DatabaseError> {
    conn.query_row(
        &format!("{SELECT_HOME} WHERE id = ?1"),
        params![id],
        home_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Singular lookup: a caretaker owns at most one home, so this is a
/// point query, not a listing.
pub fn get_by_caretaker_id(
    conn: &Connection,
    caretaker_id: i64,
) -> Result<Option<OldAgeHome>, DatabaseError> {
    conn.query_row(
        &format!("{SELECT_HOME} WHERE assigned_caretaker_id = ?1"),
        params![caretaker_id],
        home_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn list_by_doctor_id(
    conn: &Connection,
    doctor_id: i64,
) -> Result<Vec<OldAgeHome>, DatabaseError> {
    let mut stmt = conn.prepare(&format!("{SELECT_HOME} WHERE assigned_doctor_id = ?1"))?;
    let rows = stmt.query_map(params![doctor_id], home_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

const SELECT_HOME: &str = "SELECT id, name, phone_number, address, city, state, pincode,
         current_occupancy, assigned_caretaker_id, assigned_doctor_id, created_at, updated_at
         FROM old_age_homes";

fn home_from_row(row: &rusqlite::Row<'_>) -> Result<OldAgeHome, rusqlite::Error> {
    Ok(OldAgeHome {
        id: row.get(0)?,
        name: row.get(1)?,
        phone_number: row.get(2)?,
        address: row.get(3)?,
        city: row.get(4)?,
        state: row.get(5)?,
        pincode: row.get(6)?,
        current_occupancy: row.get(7)?,
        assigned_caretaker_id: row.get(8)?,
        assigned_doctor_id: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}
