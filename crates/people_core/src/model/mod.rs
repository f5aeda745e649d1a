//! Flat records produced by the people queries.
//!
//! # Responsibility
//! - Define the JSON wire shape of every API payload.
//! - Validate the only piece of user input that reaches SQL: the country code.
//!
//! # Invariants
//! - Records are transient: built from one row scan, serialized, dropped.
//! - Field order mirrors the column order of the query that fills them.

pub mod country_code;
pub mod person;
