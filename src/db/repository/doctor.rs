use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Doctor, DoctorPublic};

pub fn insert(
    conn: &Connection,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Doctor, DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (username, email, password) VALUES (?1, ?2, ?3)",
        params![username, email, password_hash],
    )?;
    let id = conn.last_insert_rowid();
    conn.query_row(
        "SELECT id, username, email, password, specialization, created_at, updated_at
         FROM doctors WHERE id = ?1",
        params![id],
        doctor_from_row,
    )
    .map_err(DatabaseError::from)
}

pub fn get_by_email(conn: &Connection, email: &str) -> Result<Option<Doctor>, DatabaseError> {
    conn.query_row(
        "SELECT id, username, email, password, specialization, created_at, updated_at
         FROM doctors WHERE email = ?1",
        params![email],
        doctor_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// Public projection — the password column is never selected.
pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<DoctorPublic>, DatabaseError> {
    conn.query_row(
        "SELECT id, username, email, specialization FROM doctors WHERE id = ?1",
        params![id],
        doctor_public_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn list_all(conn: &Connection) -> Result<Vec<DoctorPublic>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, username, email, specialization FROM doctors")?;
    let rows = stmt.query_map([], doctor_public_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

fn doctor_from_row(row: &rusqlite::Row<'_>) -> Result<Doctor, rusqlite::Error> {
    Ok(Doctor {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        specialization: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn doctor_public_from_row(row: &rusqlite::Row<'_>) -> Result<DoctorPublic, rusqlite::Error> {
    Ok(DoctorPublic {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        specialization: row.get(3)?,
    })
}
