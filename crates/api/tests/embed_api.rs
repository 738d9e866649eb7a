//! HTTP-level integration tests for the public embed surface:
//! published listings, markup rendering with per-embed overrides, and
//! shortcode expansion.

mod common;

use axum::http::StatusCode;
use common::{body_json, editor_token, post_json, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn published_slider_with_slides(pool: &PgPool, title: &str) -> i64 {
    let token = editor_token();
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/sliders",
        json!({"title": title, "status": "published"}),
        &token,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let save = put_json_auth(
        app,
        &format!("/api/v1/sliders/{id}/content"),
        json!({
            "slides": [
                {"headline": "Hi", "bg_type": "color", "bg_color": "#112233", "active": "1"},
                {"headline": "Hidden", "bg_type": "color", "bg_color": "#445566"}
            ],
            "settings": {"autoplay": true}
        }),
        &token,
    )
    .await;
    assert_eq!(save.status(), StatusCode::OK);
    id
}

// ---------------------------------------------------------------------------
// Published listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_exposes_only_published_sliders(pool: PgPool) {
    let token = editor_token();
    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/sliders",
        json!({"title": "Draft one"}),
        &token,
    )
    .await;
    published_slider_with_slides(&pool, "Live one").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/embed/sliders").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Live one"]);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn render_returns_markup_for_active_slides_only(pool: PgPool) {
    let id = published_slider_with_slides(&pool, "Hero").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/embed/sliders/{id}/render")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let html = json["data"]["html"].as_str().unwrap();
    assert_eq!(json["data"]["needs_assets"], true);
    // The inactive second slide is filtered out.
    assert_eq!(html.matches("<li").count(), 1);
    assert!(html.contains("background-color:#112233;"));
    assert!(html.contains(&format!("id=\"lw-slider-{id}\"")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn render_of_unknown_slider_is_empty_200(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/embed/sliders/999999/render").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["html"], "");
    assert_eq!(json["data"]["needs_assets"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn render_of_draft_slider_is_empty_200(pool: PgPool) {
    let token = editor_token();
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/sliders",
        json!({"title": "Unreleased"}),
        &token,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/embed/sliders/{id}/render")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["html"], "");
    assert_eq!(json["data"]["needs_assets"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn render_applies_query_overrides(pool: PgPool) {
    let id = published_slider_with_slides(&pool, "Overridden").await;

    let app = common::build_test_app(pool);
    let response = common::get(
        app,
        &format!("/api/v1/embed/sliders/{id}/render?autoplay=off&transition=fade&min_height=600"),
    )
    .await;

    let json = body_json(response).await;
    let html = json["data"]["html"].as_str().unwrap();
    assert!(html.contains("&quot;type&quot;:&quot;fade&quot;"));
    assert!(!html.contains("&quot;interval&quot;"));
    assert!(html.contains("min-height:600px;"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn render_honors_reduced_motion(pool: PgPool) {
    let id = published_slider_with_slides(&pool, "Calm").await;

    let app = common::build_test_app(pool);
    let response = common::get(
        app,
        &format!("/api/v1/embed/sliders/{id}/render?reduced_motion=1"),
    )
    .await;

    let json = body_json(response).await;
    let html = json["data"]["html"].as_str().unwrap();
    assert!(html.contains("&quot;autoplay&quot;:false"));
    assert!(html.contains("&quot;speed&quot;:0"));
}

// ---------------------------------------------------------------------------
// Shortcode expansion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn expand_replaces_markers_with_markup(pool: PgPool) {
    let id = published_slider_with_slides(&pool, "Embedded").await;

    let app = common::build_test_app(pool);
    let content = format!("before [lw_slider id=\"{id}\"] after");
    let response = post_json(app, "/api/v1/embed/expand", json!({"content": content})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let expanded = json["data"]["content"].as_str().unwrap();
    assert!(expanded.starts_with("before "));
    assert!(expanded.ends_with(" after"));
    assert!(expanded.contains(&format!("id=\"lw-slider-{id}\"")));
    assert_eq!(json["data"]["needs_assets"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expand_of_unknown_marker_removes_it(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/embed/expand",
        json!({"content": "x [lw_slider id=\"999999\"] y"}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["content"], "x  y");
    assert_eq!(json["data"]["needs_assets"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expand_leaves_plain_text_untouched(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/embed/expand",
        json!({"content": "no markers here"}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["content"], "no markers here");
    assert_eq!(json["data"]["needs_assets"], false);
}
