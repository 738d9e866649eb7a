//! Handlers for the `/sliders` resource.
//!
//! All routes require an editing role. Slide and settings blobs are
//! sanitized through `lws_core::sanitize` before they reach the
//! database, so stored content is trusted by the renderer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lws_core::container::{validate_status, validate_title};
use lws_core::error::CoreError;
use lws_core::sanitize::{sanitize_settings, sanitize_slide, settings_from_stored, slides_from_stored};
use lws_core::settings::SliderSettings;
use lws_core::slide::Slide;
use lws_core::types::{DbId, Timestamp};
use lws_db::models::slider::{CreateSlider, SaveSliderContent, Slider, SliderSummary, UpdateSlider};
use lws_db::repositories::SliderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Full slider payload with decoded blobs.
///
/// The row stores slides and settings as raw JSONB; responses decode
/// them through the lenient stored-data decoders so clients always see
/// well-formed content.
#[derive(Debug, Serialize)]
pub struct SliderDetail {
    pub id: DbId,
    pub title: String,
    pub status: String,
    pub slides: Vec<Slide>,
    pub settings: SliderSettings,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Slider> for SliderDetail {
    fn from(row: Slider) -> Self {
        Self {
            id: row.id,
            title: row.title,
            status: row.status,
            slides: slides_from_stored(&row.slides),
            settings: settings_from_stored(&row.settings),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    /// Current positions in their new display order. Positions not
    /// listed are removed; out-of-range positions are skipped.
    pub order: Vec<usize>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Slider",
        id,
    })
}

/// Sanitize a raw slide-list blob into its canonical stored form.
///
/// Non-array input and non-object entries degrade to defaults rather
/// than erroring, mirroring the stored-data decoders.
fn sanitized_slides(raw: &Value) -> AppResult<Value> {
    let slides: Vec<Slide> = match raw.as_array() {
        Some(entries) => entries.iter().map(sanitize_slide).collect(),
        None => Vec::new(),
    };
    serde_json::to_value(slides).map_err(|e| AppError::InternalError(e.to_string()))
}

fn sanitized_settings(raw: &Value) -> AppResult<Value> {
    serde_json::to_value(sanitize_settings(raw)).map_err(|e| AppError::InternalError(e.to_string()))
}

/// GET /api/v1/sliders
pub async fn list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
) -> AppResult<Json<DataResponse<Vec<SliderSummary>>>> {
    let sliders = SliderRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sliders }))
}

/// POST /api/v1/sliders
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateSlider>,
) -> AppResult<(StatusCode, Json<DataResponse<SliderDetail>>)> {
    validate_title(&input.title)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let sanitized = CreateSlider {
        title: input.title.trim().to_string(),
        status: input.status,
        slides: input.slides.as_ref().map(sanitized_slides).transpose()?,
        settings: input.settings.as_ref().map(sanitized_settings).transpose()?,
    };

    let slider = SliderRepo::create(&state.pool, &sanitized).await?;
    tracing::info!(slider_id = slider.id, "Slider created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: slider.into(),
        }),
    ))
}

/// GET /api/v1/sliders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SliderDetail>>> {
    let slider = SliderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: slider.into(),
    }))
}

/// PUT /api/v1/sliders/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlider>,
) -> AppResult<Json<DataResponse<SliderDetail>>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let patch = UpdateSlider {
        title: input.title.map(|t| t.trim().to_string()),
        status: input.status,
    };

    let slider = SliderRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: slider.into(),
    }))
}

/// DELETE /api/v1/sliders/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SliderRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(slider_id = id, "Slider deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// PUT /api/v1/sliders/{id}/content
///
/// Full content save from the editor. A request without a slide list
/// clears every slide; a request without settings leaves the stored
/// settings untouched.
pub async fn save_content(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<SaveSliderContent>,
) -> AppResult<Json<DataResponse<SliderDetail>>> {
    let sanitized = SaveSliderContent {
        slides: input.slides.as_ref().map(sanitized_slides).transpose()?,
        settings: input.settings.as_ref().map(sanitized_settings).transpose()?,
    };

    let slider = SliderRepo::save_content(&state.pool, id, &sanitized)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(slider_id = id, "Slider content saved");
    Ok(Json(DataResponse {
        data: slider.into(),
    }))
}

/// POST /api/v1/sliders/{id}/reorder
pub async fn reorder(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<DataResponse<SliderDetail>>> {
    if input.order.is_empty() {
        return Err(AppError::BadRequest("Order must not be empty".into()));
    }

    let slider = SliderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let slides = slides_from_stored(&slider.slides);
    let reordered = lws_core::reorder::reorder(&slides, &input.order);
    let blob =
        serde_json::to_value(reordered).map_err(|e| AppError::InternalError(e.to_string()))?;

    let slider = SliderRepo::set_slides(&state.pool, id, &blob)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: slider.into(),
    }))
}

/// POST /api/v1/sliders/{id}/duplicate
pub async fn duplicate(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<SliderDetail>>)> {
    let copy = SliderRepo::duplicate(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(source_id = id, copy_id = copy.id, "Slider duplicated");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: copy.into() }),
    ))
}
