//! Media asset model.

use serde::Serialize;
use sqlx::FromRow;

use lws_core::types::{DbId, Timestamp};

/// A media asset row from the `media_assets` table.
///
/// Slides reference assets by id; renders resolve those ids to URLs
/// through `MediaRepo::find_by_ids`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaAsset {
    pub id: DbId,
    pub full_url: String,
    pub thumbnail_url: Option<String>,
    pub alt_text: Option<String>,
    pub created_at: Timestamp,
}
