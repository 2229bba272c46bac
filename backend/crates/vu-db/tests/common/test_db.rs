use vu_db::Database;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// In-memory store with migrations applied
pub async fn create_test_database() -> Database {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    let database = Database::from_pool(pool);
    database.migrate().await.expect("Failed to run migrations");
    database
}
