//! HTTP handlers, grouped by resource.

pub mod embed;
pub mod sliders;
