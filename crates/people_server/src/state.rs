//! Shared application state.
//!
//! # Responsibility
//! - Own the single database connection for the life of the server.
//! - Run blocking queries off the async executor.
//!
//! # Invariants
//! - At most one query touches the connection at a time.
//! - A query that panics fails only its own request; the lock is recovered
//!   for the next one since queries never leave the connection mid-write.
//! - The connection is only closed once every clone of the state is gone.

use crate::error::ApiError;
use log::warn;
use people_core::{PersonService, RepoResult, SqlitePersonRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `query` against a service bound to the shared connection.
    ///
    /// The closure executes on the blocking pool while holding the lock.
    pub async fn with_service<T, F>(&self, query: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: for<'c> FnOnce(&PersonService<SqlitePersonRepository<'c>>) -> RepoResult<T>
            + Send
            + 'static,
    {
        let db = Arc::clone(&self.db);
        let joined = tokio::task::spawn_blocking(move || {
            let conn = lock_recovering(&db);
            let service = PersonService::new(SqlitePersonRepository::new(&conn));
            query(&service).map_err(ApiError::from)
        })
        .await;

        match joined {
            Ok(result) => result,
            Err(err) => Err(ApiError::Internal(format!("query task failed: {err}"))),
        }
    }

    /// Closes the connection if this is the last handle to it.
    ///
    /// Returns `false` when other clones are still alive; the connection is
    /// then closed when the last clone drops.
    pub fn close(self) -> Result<bool, rusqlite::Error> {
        match Arc::try_unwrap(self.db) {
            Ok(mutex) => {
                let conn = mutex.into_inner().unwrap_or_else(PoisonError::into_inner);
                conn.close().map_err(|(_, err)| err)?;
                Ok(true)
            }
            Err(_) => {
                warn!("event=db_close module=http status=deferred reason=shared_handle");
                Ok(false)
            }
        }
    }
}

fn lock_recovering(db: &Mutex<Connection>) -> MutexGuard<'_, Connection> {
    db.lock().unwrap_or_else(|poisoned| {
        warn!("event=db_lock module=http status=recovered reason=poisoned");
        db.clear_poison();
        poisoned.into_inner()
    })
}
