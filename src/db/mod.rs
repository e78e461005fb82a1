pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("JSON column error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

/// True when the error is a UNIQUE-constraint rejection. Used to map a
/// racing duplicate insert to the same 409 the application pre-check
/// produces.
pub fn is_unique_violation(err: &DatabaseError) -> bool {
    match err {
        DatabaseError::Sqlite(rusqlite::Error::SqliteFailure(e, _)) => {
            e.code == rusqlite::ErrorCode::ConstraintViolation
        }
        _ => false,
    }
}
