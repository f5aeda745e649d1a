mod common;

use common::{open_seeded_db, SAMPLE_ROW_COUNT};
use people_core::db::open_db_in_memory;
use people_core::{
    CountryCode, PersonRepository, PersonService, RepoError, SqlitePersonRepository,
};
use rusqlite::Connection;
use std::collections::HashMap;

#[test]
fn list_people_returns_one_row_per_address() {
    let conn = open_seeded_db();
    let repo = SqlitePersonRepository::new(&conn);

    let people = repo.list_people().unwrap();
    assert_eq!(people.len(), SAMPLE_ROW_COUNT);

    let ids: Vec<i64> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 5]);

    let jossef = &people[3];
    assert_eq!(jossef.title.as_deref(), Some("Mr."));
    assert_eq!(jossef.first_name, "Jossef");
    assert_eq!(jossef.middle_name, None);
    assert_eq!(jossef.last_name, "Goldberg");
    assert_eq!(jossef.suffix.as_deref(), Some("Jr."));
    assert_eq!(jossef.state_code, "BY");
    assert_eq!(jossef.country_code, "DE");
    assert_eq!(jossef.state, "Bayern");
    assert_eq!(jossef.country, "Germany");
}

#[test]
fn filtered_list_is_subset_of_full_list_for_every_country() {
    let conn = open_seeded_db();
    let repo = SqlitePersonRepository::new(&conn);
    let all = repo.list_people().unwrap();
    let names = country_names(&conn);

    for (code, name) in &names {
        let filtered = repo
            .list_people_by_country(&CountryCode::parse(code).unwrap())
            .unwrap();
        let expected: Vec<_> = all
            .iter()
            .filter(|p| &p.country_code == code)
            .cloned()
            .collect();

        assert_eq!(filtered, expected, "country {code}");
        for person in &filtered {
            assert_eq!(&person.country, name);
            assert_eq!(&person.country_code, code);
        }
    }
}

#[test]
fn country_without_residents_and_unknown_code_yield_empty_lists() {
    let conn = open_seeded_db();
    let repo = SqlitePersonRepository::new(&conn);

    let france = repo
        .list_people_by_country(&CountryCode::parse("FR").unwrap())
        .unwrap();
    assert!(france.is_empty());

    let unknown = repo
        .list_people_by_country(&CountryCode::parse("ZZ").unwrap())
        .unwrap();
    assert!(unknown.is_empty());
}

#[test]
fn country_code_match_is_exact() {
    let conn = open_seeded_db();
    let repo = SqlitePersonRepository::new(&conn);

    let lower = repo
        .list_people_by_country(&CountryCode::parse("us").unwrap())
        .unwrap();
    assert!(lower.is_empty());
}

#[test]
fn country_counts_are_descending_and_sum_to_people_rows() {
    let conn = open_seeded_db();
    let repo = SqlitePersonRepository::new(&conn);

    let counts = repo.count_by_country().unwrap();
    let summary: Vec<(&str, i64)> = counts
        .iter()
        .map(|c| (c.country.as_str(), c.count))
        .collect();
    assert_eq!(
        summary,
        vec![("United States", 3), ("Canada", 2), ("Germany", 1)]
    );

    assert!(counts.windows(2).all(|pair| pair[0].count >= pair[1].count));

    let total: i64 = counts.iter().map(|c| c.count).sum();
    assert_eq!(total as usize, repo.list_people().unwrap().len());
}

#[test]
fn country_count_ties_are_ordered_by_name() {
    let conn = open_seeded_db();
    conn.execute_batch(
        "INSERT INTO address VALUES (6, '1 Rue de Rivoli', 'Paris', 5, '75001');
         INSERT INTO business_entity_address VALUES (1, 6);",
    )
    .unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let counts = repo.count_by_country().unwrap();
    let names: Vec<&str> = counts.iter().map(|c| c.country.as_str()).collect();
    assert_eq!(names, vec!["United States", "Canada", "France", "Germany"]);
}

#[test]
fn empty_dataset_returns_empty_lists() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    assert!(repo.list_people().unwrap().is_empty());
    assert!(repo
        .list_people_by_country(&CountryCode::parse("US").unwrap())
        .unwrap()
        .is_empty());
    assert!(repo.count_by_country().unwrap().is_empty());
}

#[test]
fn service_treats_empty_code_as_full_listing() {
    let conn = open_seeded_db();
    let service = PersonService::new(SqlitePersonRepository::new(&conn));

    assert_eq!(
        service.list_people_in_country("").unwrap(),
        service.list_people().unwrap()
    );
}

#[test]
fn service_rejects_injection_shaped_code_and_leaves_tables_intact() {
    let conn = open_seeded_db();
    let service = PersonService::new(SqlitePersonRepository::new(&conn));

    for raw in ["US' OR '1'='1", "US'; DROP TABLE person; --", "'"] {
        let err = service.list_people_in_country(raw).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)), "{raw}: {err}");
    }

    assert_eq!(service.list_people().unwrap().len(), SAMPLE_ROW_COUNT);
}

#[test]
fn missing_table_surfaces_as_db_error() {
    let conn = open_seeded_db();
    conn.execute_batch("PRAGMA foreign_keys = OFF; DROP TABLE country_region;")
        .unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    assert!(matches!(repo.list_people(), Err(RepoError::Db(_))));
    assert!(matches!(repo.count_by_country(), Err(RepoError::Db(_))));
}

fn country_names(conn: &Connection) -> HashMap<String, String> {
    let mut stmt = conn
        .prepare("SELECT country_region_code, name FROM country_region;")
        .unwrap();
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .unwrap();
    rows.map(|row| row.unwrap()).collect()
}
