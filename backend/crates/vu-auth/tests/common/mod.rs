#![allow(dead_code)]

use vu_core::CredentialRecord;
use vu_db::Database;

use tempfile::TempDir;

/// File-backed store in a temp dir; keep the `TempDir` alive for the test
pub async fn create_test_database() -> (TempDir, Database) {
    let temp = TempDir::new().expect("temp dir");
    let database = Database::open(&temp.path().join("links.db"), 1)
        .await
        .expect("open database");
    database.migrate().await.expect("migrate");
    (temp, database)
}

pub async fn seed_key(database: &Database, key: &str, permissions: &[&str]) {
    database
        .api_keys()
        .create(&CredentialRecord {
            id: format!("id-{}", key),
            key: key.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        })
        .await
        .expect("seed api key");
}
