//! Person query use cases.
//!
//! # Invariants
//! - Country codes are validated before any repository call.
//! - Service layer remains storage-agnostic.

use crate::model::country_code::CountryCode;
use crate::model::person::{CountryCount, Person};
use crate::repo::person_repo::{PersonRepository, RepoResult};
use log::debug;

/// Use-case service over a person repository.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every person joined with address location.
    pub fn list_people(&self) -> RepoResult<Vec<Person>> {
        let people = self.repo.list_people()?;
        debug!(
            "event=list_people module=service status=ok rows={}",
            people.len()
        );
        Ok(people)
    }

    /// Lists people located in the country identified by `raw_code`.
    ///
    /// # Contract
    /// - An empty `raw_code` behaves like `list_people`.
    /// - A malformed code returns `RepoError::Validation` and runs no query.
    /// - An unknown but well-formed code returns an empty list.
    pub fn list_people_in_country(&self, raw_code: &str) -> RepoResult<Vec<Person>> {
        if raw_code.is_empty() {
            return self.list_people();
        }

        let code = CountryCode::parse(raw_code)?;
        let people = self.repo.list_people_by_country(&code)?;
        debug!(
            "event=list_people_by_country module=service status=ok code={} rows={}",
            code,
            people.len()
        );
        Ok(people)
    }

    /// Returns per-country counts, largest first.
    pub fn country_counts(&self) -> RepoResult<Vec<CountryCount>> {
        let counts = self.repo.count_by_country()?;
        debug!(
            "event=country_counts module=service status=ok groups={}",
            counts.len()
        );
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::PersonService;
    use crate::model::country_code::CountryCode;
    use crate::model::person::{CountryCount, Person};
    use crate::repo::person_repo::{PersonRepository, RepoError, RepoResult};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRepo {
        calls: RefCell<Vec<String>>,
    }

    impl PersonRepository for &RecordingRepo {
        fn list_people(&self) -> RepoResult<Vec<Person>> {
            self.calls.borrow_mut().push("list".to_string());
            Ok(Vec::new())
        }

        fn list_people_by_country(&self, code: &CountryCode) -> RepoResult<Vec<Person>> {
            self.calls.borrow_mut().push(format!("country:{code}"));
            Ok(Vec::new())
        }

        fn count_by_country(&self) -> RepoResult<Vec<CountryCount>> {
            self.calls.borrow_mut().push("count".to_string());
            Ok(Vec::new())
        }
    }

    #[test]
    fn empty_code_falls_back_to_full_listing() {
        let repo = RecordingRepo::default();
        let service = PersonService::new(&repo);

        service.list_people_in_country("").unwrap();
        assert_eq!(*repo.calls.borrow(), vec!["list".to_string()]);
    }

    #[test]
    fn valid_code_is_passed_through() {
        let repo = RecordingRepo::default();
        let service = PersonService::new(&repo);

        service.list_people_in_country("CA").unwrap();
        assert_eq!(*repo.calls.borrow(), vec!["country:CA".to_string()]);
    }

    #[test]
    fn malformed_code_never_reaches_repository() {
        let repo = RecordingRepo::default();
        let service = PersonService::new(&repo);

        let err = service.list_people_in_country("US' --").unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(repo.calls.borrow().is_empty());
    }
}
