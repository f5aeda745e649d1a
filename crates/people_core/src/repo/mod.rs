//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the read contracts used by the service layer.
//! - Isolate SQLite query text from HTTP and service code.
//!
//! # Invariants
//! - Repository APIs distinguish input validation errors from storage errors.

pub mod person_repo;
