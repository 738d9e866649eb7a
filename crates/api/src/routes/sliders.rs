//! Route definitions for the `/sliders` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::sliders;
use crate::state::AppState;

/// Routes mounted at `/sliders`. All require an editing role.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// PUT    /{id}/content       -> save_content
/// POST   /{id}/reorder       -> reorder
/// POST   /{id}/duplicate     -> duplicate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sliders::list).post(sliders::create))
        .route(
            "/{id}",
            get(sliders::get_by_id)
                .put(sliders::update)
                .delete(sliders::delete),
        )
        .route("/{id}/content", put(sliders::save_content))
        .route("/{id}/reorder", post(sliders::reorder))
        .route("/{id}/duplicate", post(sliders::duplicate))
}
