use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Caretaker;

pub fn insert(
    conn: &Connection,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Caretaker, DatabaseError> {
    conn.execute(
        "INSERT INTO caretakers (username, email, password) VALUES (?1, ?2, ?3)",
        params![username, email, password_hash],
    )?;
    let id = conn.last_insert_rowid();
    get_by_id(conn, id)?.ok_or_else(|| {
        DatabaseError::ConstraintViolation("caretaker row missing after insert".into())
    })
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Caretaker>, DatabaseError> {
    conn.query_row(
        "SELECT id, username, email, password, created_at, updated_at
         FROM caretakers WHERE id = ?1",
        params![id],
        caretaker_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn get_by_email(conn: &Connection, email: &str) -> Result<Option<Caretaker>, DatabaseError> {
    conn.query_row(
        "SELECT id, username, email, password, created_at, updated_at
         FROM caretakers WHERE email = ?1",
        params![email],
        caretaker_from_row,
    )
    .optional()
    .map_err(DatabaseError::from)
}

fn caretaker_from_row(row: &rusqlite::Row<'_>) -> Result<Caretaker, rusqlite::Error> {
    Ok(Caretaker {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    #[test]
    fn insert_returns_created_row() {
        let conn = open_memory_database().unwrap();
        let caretaker = insert(&conn, "alice123", "alice@x.com", "$2b$04$hash").unwrap();
        assert_eq!(caretaker.id, 1);
        assert_eq!(caretaker.username, "alice123");
        assert_eq!(caretaker.email, "alice@x.com");
    }

    #[test]
    fn get_by_email_finds_existing() {
        let conn = open_memory_database().unwrap();
        insert(&conn, "alice123", "alice@x.com", "$2b$04$hash").unwrap();
        let found = get_by_email(&conn, "alice@x.com").unwrap();
        assert!(found.is_some());
        assert!(get_by_email(&conn, "nobody@x.com").unwrap().is_none());
    }

    #[test]
    fn get_by_id_miss_is_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_by_id(&conn, 42).unwrap().is_none());
    }
}
