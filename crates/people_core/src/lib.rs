//! Core data access for the people API.
//! Owns configuration, logging bootstrap, the SQLite gateway and the fixed
//! person queries served over HTTP.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
#[doc(hidden)]
pub mod testing;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::country_code::{CountryCode, CountryCodeError};
pub use model::person::{CountryCount, Person};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use service::person_service::PersonService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
