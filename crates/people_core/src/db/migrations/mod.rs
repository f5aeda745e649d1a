//! Embedded schema for the person/address/geography tables.
//!
//! The people API never writes application data. This module only exists so
//! a writable handle pointed at a fresh file ends up with the five tables the
//! read queries join over, and so a read-only handle can prove the file it
//! was given already has them.
//!
//! # Responsibility
//! - Create the schema on writable handles whose `user_version` is behind.
//! - Verify the schema on read-only handles without touching the file.
//! - Refuse files stamped by a newer build in both modes.
//!
//! # Invariants
//! - Script versions are strictly increasing, starting at 1.
//! - Pending scripts and the `user_version` stamp commit together or not at all.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_person_schema.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings a writable connection up to `latest_version()`.
///
/// A file already at the latest version is left untouched.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = checked_user_version(conn)?;
    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > from)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in pending {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    Ok(())
}

/// Checks that a connection which must not be written to is already current.
pub fn verify_schema_version(conn: &Connection) -> DbResult<()> {
    let found = checked_user_version(conn)?;
    let expected = latest_version();
    if found != expected {
        return Err(DbError::SchemaVersionMismatch {
            db_version: found,
            expected,
        });
    }

    Ok(())
}

/// Reads `user_version`, rejecting versions this build does not know.
fn checked_user_version(conn: &Connection) -> DbResult<u32> {
    let found = current_user_version(conn)?;
    let latest = latest_version();
    if found > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: latest,
        });
    }
    Ok(found)
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
