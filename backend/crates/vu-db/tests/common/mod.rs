#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{credential, discord_id, uuid};
pub use test_db::create_test_database;
