//! Person and per-country aggregate records.
//!
//! # Invariants
//! - Nullable name parts stay `Option` end to end and serialize as `null`.
//! - JSON field names are part of the public API and must not drift.

use serde::{Deserialize, Serialize};

/// One person joined with the state and country of one of their addresses.
///
/// A person with several addresses yields one record per address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Business entity identifier of the person row.
    pub id: i64,
    pub title: Option<String>,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "middlename")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub suffix: Option<String>,
    /// State or province code, e.g. `WA`.
    #[serde(rename = "scode")]
    pub state_code: String,
    /// Country or region code, e.g. `US`.
    #[serde(rename = "ccode")]
    pub country_code: String,
    /// State or province display name.
    pub state: String,
    /// Country or region display name.
    pub country: String,
}

/// Number of person/address rows located in one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Count")]
    pub count: i64,
}
