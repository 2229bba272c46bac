use crate::{DbError, DbErrorResult};

use vu_core::{DiscordId, MappingRecord, MinecraftUuid};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

const TABLE: &str = "vu_links";

/// Persisted Discord ID <-> Minecraft UUID links.
///
/// Keyed by Discord ID. [`LinkRepository::upsert`] also evicts any other
/// row holding the same UUID, so a UUID is linked to at most one Discord
/// account at a time.
#[derive(Clone)]
pub struct LinkRepository {
    pool: SqlitePool,
}

impl LinkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_uuid(&self, uuid: &MinecraftUuid) -> DbErrorResult<Option<MappingRecord>> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
                SELECT discord_id, uuid
                FROM vu_links
                WHERE uuid = ?
                ORDER BY linked_at DESC
                LIMIT 1
                "#,
        )
        .bind(uuid.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::to_record).transpose()
    }

    pub async fn find_by_discord_id(
        &self,
        discord_id: DiscordId,
    ) -> DbErrorResult<Option<MappingRecord>> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
                SELECT discord_id, uuid
                FROM vu_links
                WHERE discord_id = ?
                "#,
        )
        .bind(discord_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::to_record).transpose()
    }

    /// Insert or overwrite the link for `record.discord_id`. Last write wins.
    pub async fn upsert(&self, record: &MappingRecord) -> DbErrorResult<()> {
        let discord_id = record.discord_id.to_string();
        let now = Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vu_links WHERE uuid = ? AND discord_id <> ?")
            .bind(record.uuid.as_str())
            .bind(&discord_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
                INSERT INTO vu_links (discord_id, uuid, linked_at)
                VALUES (?, ?, ?)
                ON CONFLICT(discord_id) DO UPDATE SET
                    uuid = excluded.uuid,
                    linked_at = excluded.linked_at
                "#,
        )
        .bind(&discord_id)
        .bind(record.uuid.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Returns the number of links removed; zero is not an error
    pub async fn delete_by_uuid(&self, uuid: &MinecraftUuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM vu_links WHERE uuid = ?")
            .bind(uuid.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of links removed; zero is not an error
    pub async fn delete_by_discord_id(&self, discord_id: DiscordId) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM vu_links WHERE discord_id = ?")
            .bind(discord_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[track_caller]
    fn to_record((discord_id, uuid): (String, String)) -> DbErrorResult<MappingRecord> {
        let discord_id = DiscordId::parse(&discord_id).map_err(|e| DbError::InvalidRow {
            table: TABLE,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let uuid = MinecraftUuid::parse(&uuid).map_err(|e| DbError::InvalidRow {
            table: TABLE,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(MappingRecord::new(uuid, discord_id))
    }
}
