//! Validated country code used to filter people.
//!
//! # Invariants
//! - A `CountryCode` holds 1 to 3 ASCII letters or digits, nothing else.
//! - The raw value is kept as given; matching against stored codes is exact.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static COUNTRY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,3}$").expect("valid country code regex"));

const MAX_ECHOED_CHARS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryCodeError {
    Empty,
    Malformed(String),
}

impl Display for CountryCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "country code cannot be empty"),
            Self::Malformed(value) => write!(
                f,
                "invalid country code `{value}`; expected 1-3 ASCII letters or digits"
            ),
        }
    }
}

impl Error for CountryCodeError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(value: &str) -> Result<Self, CountryCodeError> {
        if value.is_empty() {
            return Err(CountryCodeError::Empty);
        }
        if !COUNTRY_CODE_RE.is_match(value) {
            let echoed: String = value.chars().take(MAX_ECHOED_CHARS).collect();
            return Err(CountryCodeError::Malformed(echoed));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryCode, CountryCodeError};

    #[test]
    fn accepts_alpha2_and_alpha3_codes() {
        assert_eq!(CountryCode::parse("US").unwrap().as_str(), "US");
        assert_eq!(CountryCode::parse("DEU").unwrap().as_str(), "DEU");
    }

    #[test]
    fn rejects_empty_code() {
        assert_eq!(CountryCode::parse(""), Err(CountryCodeError::Empty));
    }

    #[test]
    fn rejects_quote_and_sql_fragments() {
        let err = CountryCode::parse("US' OR '1'='1").unwrap_err();
        assert!(matches!(err, CountryCodeError::Malformed(_)));
        assert!(CountryCode::parse("U'").is_err());
        assert!(CountryCode::parse("USAX").is_err());
        assert!(CountryCode::parse("U S").is_err());
    }

    #[test]
    fn malformed_error_truncates_echoed_value() {
        let long = "x".repeat(100);
        match CountryCode::parse(&long).unwrap_err() {
            CountryCodeError::Malformed(echoed) => assert_eq!(echoed.len(), 32),
            other => panic!("unexpected error: {other}"),
        }
    }
}
