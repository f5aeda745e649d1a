//! Person read queries and their SQLite implementation.
//!
//! # Responsibility
//! - Own the fixed join and aggregate SQL served by the API.
//! - Bind each result row to a record by column ordinal.
//!
//! # Invariants
//! - User input only reaches SQL as a bound parameter.
//! - A row that cannot be scanned fails the whole query; partial lists are
//!   never returned.

use crate::db::DbError;
use crate::model::country_code::{CountryCode, CountryCodeError};
use crate::model::person::{CountryCount, Person};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Person joined through address and state to country, one row per address.
///
/// Column order is the ordinal contract used by `parse_person_row`.
const PERSON_SELECT_SQL: &str = "SELECT
    person.business_entity_id,
    person.title,
    person.first_name,
    person.middle_name,
    person.last_name,
    person.suffix,
    state_province.state_province_code,
    state_province.country_region_code,
    state_province.name,
    country_region.name
FROM person
JOIN business_entity_address
    ON person.business_entity_id = business_entity_address.business_entity_id
JOIN address
    ON business_entity_address.address_id = address.address_id
JOIN state_province
    ON address.state_province_id = state_province.state_province_id
JOIN country_region
    ON state_province.country_region_code = country_region.country_region_code";

const PERSON_ORDER_SQL: &str =
    "ORDER BY person.business_entity_id ASC, business_entity_address.address_id ASC";

const COUNTRY_COUNT_SQL: &str = "SELECT
    country_region.name AS country,
    COUNT(person.business_entity_id) AS business_sum
FROM person
JOIN business_entity_address
    ON business_entity_address.business_entity_id = person.business_entity_id
JOIN address
    ON address.address_id = business_entity_address.address_id
JOIN state_province
    ON state_province.state_province_id = address.state_province_id
JOIN country_region
    ON country_region.country_region_code = state_province.country_region_code
GROUP BY country_region.name
ORDER BY business_sum DESC, country_region.name ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(CountryCodeError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<CountryCodeError> for RepoError {
    fn from(value: CountryCodeError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::InvalidColumnType(index, name, kind) => Self::InvalidData(format!(
                "column {index} (`{name}`) has unexpected type {kind}"
            )),
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Read-only access to people and their locations.
pub trait PersonRepository {
    fn list_people(&self) -> RepoResult<Vec<Person>>;
    fn list_people_by_country(&self, code: &CountryCode) -> RepoResult<Vec<Person>>;
    fn count_by_country(&self) -> RepoResult<Vec<CountryCount>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn list_people(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL}\n{PERSON_ORDER_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }

    fn list_people_by_country(&self, code: &CountryCode) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PERSON_SELECT_SQL}
WHERE country_region.country_region_code = ?1
{PERSON_ORDER_SQL};"
        ))?;
        let mut rows = stmt.query(params![code.as_str()])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }

    fn count_by_country(&self) -> RepoResult<Vec<CountryCount>> {
        let mut stmt = self.conn.prepare(COUNTRY_COUNT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut counts = Vec::new();

        while let Some(row) = rows.next()? {
            counts.push(CountryCount {
                country: row.get(0)?,
                count: row.get(1)?,
            });
        }

        Ok(counts)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    Ok(Person {
        id: row.get(0)?,
        title: row.get(1)?,
        first_name: row.get(2)?,
        middle_name: row.get(3)?,
        last_name: row.get(4)?,
        suffix: row.get(5)?,
        state_code: row.get(6)?,
        country_code: row.get(7)?,
        state: row.get(8)?,
        country: row.get(9)?,
    })
}
