//! Public embed handlers: published-slider listing, markup rendering,
//! and shortcode expansion.
//!
//! These routes are unauthenticated. They expose only published
//! content, and an unknown or unpublished slider renders as empty
//! output with a 200 rather than leaking existence through a 404.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use lws_core::container::STATUS_PUBLISHED;
use lws_core::render::{self, MediaUrls, RenderOptions, RenderOutput, ResolvedMedia};
use lws_core::sanitize::{settings_from_stored, slides_from_stored};
use lws_core::settings::SettingsOverrides;
use lws_core::shortcode;
use lws_core::slide::{BgType, Slide};
use lws_core::types::DbId;
use lws_db::models::slider::PublishedSlider;
use lws_db::repositories::{MediaRepo, SliderRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Per-embed query parameters, all optional.
///
/// Boolean flags use the tri-state wire form (`on` / `off` / absent
/// meaning "inherit"); anything unrecognized is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub autoplay: Option<String>,
    pub dots: Option<String>,
    pub arrows: Option<String>,
    #[serde(rename = "loop")]
    pub loop_enabled: Option<String>,
    pub transition: Option<String>,
    pub min_height: Option<String>,
    pub reduced_motion: Option<String>,
}

impl RenderQuery {
    fn to_options(&self) -> RenderOptions {
        let overrides = SettingsOverrides::from_block_attrs(
            self.autoplay.as_deref().unwrap_or(""),
            self.dots.as_deref().unwrap_or(""),
            self.arrows.as_deref().unwrap_or(""),
            self.loop_enabled.as_deref().unwrap_or(""),
            self.transition.as_deref().unwrap_or(""),
            self.min_height.as_deref().unwrap_or(""),
        );
        let reduced_motion = matches!(
            self.reduced_motion.as_deref(),
            Some("1") | Some("true") | Some("on")
        );
        RenderOptions {
            overrides,
            reduced_motion,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    /// Arbitrary text that may contain `[lw_slider id="N"]` markers.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub content: String,
    /// Whether any marker expanded to non-empty slider markup.
    pub needs_assets: bool,
}

/// Batch-resolve the media referenced by image slides for one render.
async fn resolve_media(pool: &PgPool, slides: &[Slide]) -> AppResult<ResolvedMedia> {
    let mut ids: Vec<DbId> = slides
        .iter()
        .filter(|s| s.active && s.bg_type == BgType::Image && s.bg_image_id > 0)
        .map(|s| s.bg_image_id)
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let mut media = ResolvedMedia::default();
    for asset in MediaRepo::find_by_ids(pool, &ids).await? {
        media.insert(
            asset.id,
            MediaUrls {
                full: asset.full_url,
                thumbnail: asset.thumbnail_url,
            },
        );
    }
    Ok(media)
}

/// Render one published slider, or empty output when the id does not
/// resolve to a published slider.
async fn render_published(
    pool: &PgPool,
    id: DbId,
    options: &RenderOptions,
) -> AppResult<RenderOutput> {
    let Some(slider) = SliderRepo::find_by_id(pool, id).await? else {
        return Ok(RenderOutput::empty());
    };
    if slider.status != STATUS_PUBLISHED {
        return Ok(RenderOutput::empty());
    }

    let slides = slides_from_stored(&slider.slides);
    let settings = settings_from_stored(&slider.settings);
    let media = resolve_media(pool, &slides).await?;

    Ok(render::render(id, &slides, &settings, &media, options))
}

/// GET /api/v1/embed/sliders
pub async fn list_published(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PublishedSlider>>>> {
    let sliders = SliderRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: sliders }))
}

/// GET /api/v1/embed/sliders/{id}/render
pub async fn render_slider(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<RenderQuery>,
) -> AppResult<Json<DataResponse<RenderOutput>>> {
    let output = render_published(&state.pool, id, &query.to_options()).await?;
    Ok(Json(DataResponse { data: output }))
}

/// POST /api/v1/embed/expand
///
/// Expand every shortcode marker in a block of text into slider
/// markup. Markers for unknown or unpublished sliders expand to the
/// empty string.
pub async fn expand(
    State(state): State<AppState>,
    Json(input): Json<ExpandRequest>,
) -> AppResult<Json<DataResponse<ExpandResponse>>> {
    let ids = shortcode::parse_ids(&input.content);

    let options = RenderOptions::default();
    let mut rendered: HashMap<DbId, RenderOutput> = HashMap::new();
    for id in ids {
        let output = render_published(&state.pool, id, &options).await?;
        rendered.insert(id, output);
    }

    let needs_assets = rendered.values().any(|o| o.needs_assets);
    let content = shortcode::expand(&input.content, |id| {
        rendered
            .get(&id)
            .map(|o| o.html.clone())
            .unwrap_or_default()
    });

    Ok(Json(DataResponse {
        data: ExpandResponse {
            content,
            needs_assets,
        },
    }))
}
