//! Shared types for the API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::api::error::ApiError;

/// Shared context for all route handlers.
///
/// The connection lives behind a mutex; rusqlite connections are not
/// Sync, and the mutex serializes handler access to the database.
#[derive(Clone)]
pub struct ApiContext {
    db: Arc<Mutex<Connection>>,
    pub bcrypt_cost: u32,
}

impl ApiContext {
    pub fn new(conn: Connection, bcrypt_cost: u32) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            bcrypt_cost,
        }
    }

    pub fn lock_db(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".into()))
    }
}
