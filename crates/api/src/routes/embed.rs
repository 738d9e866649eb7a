//! Route definitions for the public `/embed` surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::embed;
use crate::state::AppState;

/// Routes mounted at `/embed`. Public, published content only.
///
/// ```text
/// GET  /sliders               -> list_published
/// GET  /sliders/{id}/render   -> render_slider
/// POST /expand                -> expand
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sliders", get(embed::list_published))
        .route("/sliders/{id}/render", get(embed::render_slider))
        .route("/expand", post(embed::expand))
}
