//! Seed data shared by the integration suites of this workspace.
//!
//! Kept in the library so every crate exercises the same rows.

use crate::db::{open_db_in_memory, DbResult};
use rusqlite::Connection;

/// Four countries, one of which (FR) has no residents. Person 5 has two
/// addresses (US and CA), so `/people` yields six rows for five people.
pub const SAMPLE_DATA_SQL: &str = "
INSERT INTO country_region (country_region_code, name) VALUES
    ('US', 'United States'),
    ('CA', 'Canada'),
    ('DE', 'Germany'),
    ('FR', 'France');

INSERT INTO state_province (state_province_id, state_province_code, country_region_code, name) VALUES
    (1, 'WA', 'US', 'Washington'),
    (2, 'CA', 'US', 'California'),
    (3, 'ON', 'CA', 'Ontario'),
    (4, 'BY', 'DE', 'Bayern'),
    (5, '75', 'FR', 'Seine (Paris)');

INSERT INTO address (address_id, address_line1, city, state_province_id, postal_code) VALUES
    (1, '1970 Napa Ct.', 'Bothell', 1, '98011'),
    (2, '9833 Mt. Dias Blv.', 'Los Angeles', 2, '90012'),
    (3, '7484 Roundtree Drive', 'Toronto', 3, 'M4B 1V4'),
    (4, 'Kurfuerstenstrasse 12', 'Muenchen', 4, '80074'),
    (5, '2137 Birchwood Dr', 'Redmond', 1, '98052');

INSERT INTO person (business_entity_id, title, first_name, middle_name, last_name, suffix) VALUES
    (1, NULL, 'Ken', 'J', 'Sanchez', NULL),
    (2, NULL, 'Terri', 'Lee', 'Duffy', NULL),
    (3, 'Ms.', 'Gail', 'A', 'Erickson', NULL),
    (4, 'Mr.', 'Jossef', NULL, 'Goldberg', 'Jr.'),
    (5, NULL, 'Dylan', 'A', 'Miller', NULL);

INSERT INTO business_entity_address (business_entity_id, address_id) VALUES
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (5, 3);
";

/// Rows returned by the full people listing over `SAMPLE_DATA_SQL`.
pub const SAMPLE_ROW_COUNT: usize = 6;

pub fn seed_sample_data(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SAMPLE_DATA_SQL)?;
    Ok(())
}

/// Opens a migrated in-memory database holding `SAMPLE_DATA_SQL`.
pub fn open_seeded_db() -> DbResult<Connection> {
    let conn = open_db_in_memory()?;
    seed_sample_data(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::open_seeded_db;

    #[test]
    fn seeded_db_holds_five_people_across_six_addresses() {
        let conn = open_seeded_db().unwrap();
        let people: i64 = conn
            .query_row("SELECT COUNT(*) FROM person;", [], |row| row.get(0))
            .unwrap();
        let links: i64 = conn
            .query_row("SELECT COUNT(*) FROM business_entity_address;", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(people, 5);
        assert_eq!(links, 6);
    }
}
