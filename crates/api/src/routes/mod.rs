pub mod embed;
pub mod health;
pub mod sliders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sliders                         list, create (editor)
/// /sliders/{id}                    get, update, delete (editor)
/// /sliders/{id}/content            save content (editor)
/// /sliders/{id}/reorder            reorder slides (editor)
/// /sliders/{id}/duplicate          duplicate (editor)
///
/// /embed/sliders                   published sliders (public)
/// /embed/sliders/{id}/render       render markup (public)
/// /embed/expand                    expand shortcode markers (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sliders", sliders::router())
        .nest("/embed", embed::router())
}
