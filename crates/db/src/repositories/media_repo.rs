//! Repository for the `media_assets` table.

use sqlx::PgPool;

use lws_core::types::DbId;

use crate::models::media::MediaAsset;

const COLUMNS: &str = "id, full_url, thumbnail_url, alt_text, created_at";

/// Read access to media assets referenced by slides.
pub struct MediaRepo;

impl MediaRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_assets WHERE id = $1");
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch-fetch the assets for one render pass. Ids that do not
    /// resolve are simply absent from the result; the renderer treats
    /// those slides as having no background.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<MediaAsset>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM media_assets WHERE id = ANY($1)");
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
