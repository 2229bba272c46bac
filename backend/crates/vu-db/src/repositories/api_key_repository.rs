use crate::DbErrorResult;

use vu_core::CredentialRecord;

use chrono::Utc;
use sqlx::SqlitePool;

/// Read access to API credentials. Keys are provisioned out of band;
/// [`ApiKeyRepository::create`] exists for that tooling and for tests.
#[derive(Clone)]
pub struct ApiKeyRepository {
    pool: SqlitePool,
}

impl ApiKeyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<CredentialRecord>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT id, key FROM vu_api_keys WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        let Some((id, key)) = row else {
            return Ok(None);
        };

        let permissions: Vec<String> = sqlx::query_scalar(
            r#"
                SELECT permission
                FROM vu_api_key_permissions
                WHERE api_key_id = ?
                ORDER BY permission
                "#,
        )
        .bind(&id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(CredentialRecord {
            id,
            key,
            permissions,
        }))
    }

    pub async fn create(&self, record: &CredentialRecord) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO vu_api_keys (id, key, created_at) VALUES (?, ?, ?)")
            .bind(&record.id)
            .bind(&record.key)
            .bind(Utc::now().timestamp())
            .execute(&mut *tx)
            .await?;

        for permission in &record.permissions {
            sqlx::query(
                "INSERT OR IGNORE INTO vu_api_key_permissions (api_key_id, permission) VALUES (?, ?)",
            )
            .bind(&record.id)
            .bind(permission)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
