//! Repository for the `sliders` table.

use serde_json::Value;
use sqlx::PgPool;

use lws_core::container::{COPY_SUFFIX, STATUS_DRAFT};
use lws_core::types::DbId;

use crate::models::slider::{
    CreateSlider, PublishedSlider, SaveSliderContent, Slider, SliderSummary, UpdateSlider,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, status, slides, settings, created_at, updated_at";

/// Listing columns: blob payloads replaced by the stored slide count.
const SUMMARY_COLUMNS: &str =
    "id, title, status, jsonb_array_length(slides)::bigint AS slide_count, updated_at";

/// Provides CRUD operations for sliders.
pub struct SliderRepo;

impl SliderRepo {
    /// Insert a new slider, returning the created row.
    ///
    /// Missing status defaults to draft; missing blobs default to the
    /// empty slide list and the empty settings object, which decodes
    /// to the canonical defaults.
    pub async fn create(pool: &PgPool, input: &CreateSlider) -> Result<Slider, sqlx::Error> {
        let query = format!(
            "INSERT INTO sliders (title, status, slides, settings)
             VALUES ($1, COALESCE($2, '{STATUS_DRAFT}'), COALESCE($3, '[]'::jsonb), COALESCE($4, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .bind(&input.slides)
            .bind(&input.settings)
            .fetch_one(pool)
            .await
    }

    /// Find a slider by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sliders WHERE id = $1");
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sliders, most recently updated first, without blob
    /// payloads.
    pub async fn list(pool: &PgPool) -> Result<Vec<SliderSummary>, sqlx::Error> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM sliders ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, SliderSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Published sliders for embed pickers, alphabetical by title.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<PublishedSlider>, sqlx::Error> {
        sqlx::query_as::<_, PublishedSlider>(
            "SELECT id, title FROM sliders WHERE status = 'published' ORDER BY title ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update container metadata. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSlider,
    ) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "UPDATE sliders SET
                title = COALESCE($2, title),
                status = COALESCE($3, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Persist a full content save from the editor.
    ///
    /// A missing slide list is an intentional clear and becomes the
    /// empty array; a missing settings object leaves stored settings
    /// unchanged. Callers sanitize both blobs before this point.
    pub async fn save_content(
        pool: &PgPool,
        id: DbId,
        input: &SaveSliderContent,
    ) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "UPDATE sliders SET
                slides = COALESCE($2, '[]'::jsonb),
                settings = COALESCE($3, settings),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .bind(&input.slides)
            .bind(&input.settings)
            .fetch_optional(pool)
            .await
    }

    /// Replace only the slide list, used by reorder.
    pub async fn set_slides(
        pool: &PgPool,
        id: DbId,
        slides: &Value,
    ) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "UPDATE sliders SET slides = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .bind(slides)
            .fetch_optional(pool)
            .await
    }

    /// Copy a slider into a new draft row with a suffixed title.
    ///
    /// Returns `None` if the source does not exist.
    pub async fn duplicate(pool: &PgPool, id: DbId) -> Result<Option<Slider>, sqlx::Error> {
        let query = format!(
            "INSERT INTO sliders (title, status, slides, settings)
             SELECT title || $2, '{STATUS_DRAFT}', slides, settings FROM sliders WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slider>(&query)
            .bind(id)
            .bind(COPY_SUFFIX)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slider by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
