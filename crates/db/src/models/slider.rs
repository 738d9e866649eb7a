//! Slider container model and DTOs.
//!
//! Slides and settings are stored as JSONB blobs on the container row.
//! The row carries them as raw [`serde_json::Value`]s; decoding into
//! typed slides and settings happens in `lws-core`, whose decoders are
//! total over malformed stored data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use lws_core::types::{DbId, Timestamp};

/// A slider row from the `sliders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slider {
    pub id: DbId,
    pub title: String,
    pub status: String,
    pub slides: Value,
    pub settings: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing row: container metadata plus the stored slide count, no
/// blob payloads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SliderSummary {
    pub id: DbId,
    pub title: String,
    pub status: String,
    pub slide_count: i64,
    pub updated_at: Timestamp,
}

/// Selector row for embed pickers: published sliders only, id and
/// title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublishedSlider {
    pub id: DbId,
    pub title: String,
}

/// DTO for creating a new slider. Slides and settings start from
/// their canonical defaults unless provided.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlider {
    pub title: String,
    pub status: Option<String>,
    pub slides: Option<Value>,
    pub settings: Option<Value>,
}

/// DTO for updating container metadata. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSlider {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// DTO for a full content save from the editor.
///
/// A missing `slides` array means the user removed every slide, so it
/// persists as the empty array rather than being left unchanged. A
/// missing `settings` object leaves the stored settings untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSliderContent {
    pub slides: Option<Value>,
    pub settings: Option<Value>,
}
