//! Domain logic for the slider content service.
//!
//! Everything in this crate is pure and synchronous: typed slide and
//! settings records with their canonical defaults, the total sanitizer
//! that turns untrusted form payloads into valid records, the settings
//! resolver for per-embed overrides, the carousel config builder, the
//! Maud markup renderer, the reorder/duplicate service, shortcode
//! expansion, and the editor form-state model. Persistence and HTTP
//! live in `lws-db` and `lws-api`.

pub mod carousel;
pub mod container;
pub mod editor;
pub mod error;
pub mod render;
pub mod reorder;
pub mod sanitize;
pub mod settings;
pub mod shortcode;
pub mod slide;
pub mod types;
