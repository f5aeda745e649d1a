#![allow(dead_code)]

use rusqlite::Connection;

pub use people_core::testing::SAMPLE_ROW_COUNT;

pub fn open_seeded_db() -> Connection {
    people_core::testing::open_seeded_db().unwrap()
}
