//! Slide records: one visual panel with background, overlay, text, and
//! call-to-action fields.
//!
//! Every enum here carries its exact wire form in the serde rename so a
//! stored blob round-trips byte-for-byte, and exposes `parse` for the
//! sanitizer's exact-match-or-default policy.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Background mode for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BgType {
    #[default]
    Image,
    Color,
}

impl BgType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "image" => Some(Self::Image),
            "color" => Some(Self::Color),
            _ => None,
        }
    }
}

/// Background image anchor, one of the nine compass positions.
///
/// The wire form doubles as the CSS `background-position` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BgPosition {
    #[serde(rename = "left top")]
    LeftTop,
    #[serde(rename = "center top")]
    CenterTop,
    #[serde(rename = "right top")]
    RightTop,
    #[serde(rename = "left center")]
    LeftCenter,
    #[default]
    #[serde(rename = "center center")]
    CenterCenter,
    #[serde(rename = "right center")]
    RightCenter,
    #[serde(rename = "left bottom")]
    LeftBottom,
    #[serde(rename = "center bottom")]
    CenterBottom,
    #[serde(rename = "right bottom")]
    RightBottom,
}

impl BgPosition {
    /// All nine allowed values, in option-list order.
    pub const ALL: [Self; 9] = [
        Self::LeftTop,
        Self::CenterTop,
        Self::RightTop,
        Self::LeftCenter,
        Self::CenterCenter,
        Self::RightCenter,
        Self::LeftBottom,
        Self::CenterBottom,
        Self::RightBottom,
    ];

    pub fn as_css(&self) -> &'static str {
        match self {
            Self::LeftTop => "left top",
            Self::CenterTop => "center top",
            Self::RightTop => "right top",
            Self::LeftCenter => "left center",
            Self::CenterCenter => "center center",
            Self::RightCenter => "right center",
            Self::LeftBottom => "left bottom",
            Self::CenterBottom => "center bottom",
            Self::RightBottom => "right bottom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_css() == value)
    }
}

/// Hyperlink target for the slide link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

impl LinkTarget {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::SameTab => "_self",
            Self::NewTab => "_blank",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "_self" => Some(Self::SameTab),
            "_blank" => Some(Self::NewTab),
            _ => None,
        }
    }
}

/// Whether the whole slide or only an explicit button is clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaMode {
    #[default]
    FullSlide,
    Button,
}

impl CtaMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_slide" => Some(Self::FullSlide),
            "button" => Some(Self::Button),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Slide record
// ---------------------------------------------------------------------------

/// Default slide background color.
pub const DEFAULT_BG_COLOR: &str = "#f0f0f0";

/// Default overlay opacity (percent).
pub const DEFAULT_OVERLAY_OPACITY: u8 = 50;

/// A fully-populated slide record.
///
/// Invariants (maintained by [`crate::sanitize::sanitize_slide`]):
/// `overlay_opacity` is in `[0, 100]`; every enum field holds one of its
/// declared values; `bg_image_id == 0` means no image is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub active: bool,
    pub bg_type: BgType,
    pub bg_image_id: DbId,
    pub bg_color: String,
    pub bg_position: BgPosition,
    /// Hex color, or empty for no overlay.
    pub overlay_color: String,
    pub overlay_opacity: u8,
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    /// Normalized URL, or empty for no link.
    pub link_url: String,
    pub link_target: LinkTarget,
    pub cta_mode: CtaMode,
    pub button_text: String,
    /// Alt text for the background image.
    pub image_alt: String,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            title: String::new(),
            active: true,
            bg_type: BgType::Image,
            bg_image_id: 0,
            bg_color: DEFAULT_BG_COLOR.to_string(),
            bg_position: BgPosition::CenterCenter,
            overlay_color: String::new(),
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            headline: String::new(),
            subheadline: String::new(),
            description: String::new(),
            link_url: String::new(),
            link_target: LinkTarget::SameTab,
            cta_mode: CtaMode::FullSlide,
            button_text: String::new(),
            image_alt: String::new(),
        }
    }
}

impl Slide {
    /// Whether this slide has a non-empty link URL.
    pub fn has_link(&self) -> bool {
        !self.link_url.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bg_position_wire_form_round_trips() {
        for pos in BgPosition::ALL {
            let json = serde_json::to_value(pos).unwrap();
            assert_eq!(json, serde_json::Value::String(pos.as_css().to_string()));
            let back: BgPosition = serde_json::from_value(json).unwrap();
            assert_eq!(back, pos);
        }
    }

    #[test]
    fn bg_position_parse_rejects_unknown() {
        assert_eq!(BgPosition::parse("center"), None);
        assert_eq!(BgPosition::parse("top left"), None);
        assert_eq!(BgPosition::parse("center center"), Some(BgPosition::CenterCenter));
    }

    #[test]
    fn link_target_wire_form() {
        assert_eq!(
            serde_json::to_value(LinkTarget::NewTab).unwrap(),
            serde_json::json!("_blank")
        );
        assert_eq!(LinkTarget::parse("_top"), None);
    }

    #[test]
    fn cta_mode_wire_form() {
        assert_eq!(
            serde_json::to_value(CtaMode::FullSlide).unwrap(),
            serde_json::json!("full_slide")
        );
        assert_eq!(CtaMode::parse("button"), Some(CtaMode::Button));
    }

    #[test]
    fn default_slide_matches_canonical_defaults() {
        let s = Slide::default();
        assert!(s.active);
        assert_eq!(s.bg_type, BgType::Image);
        assert_eq!(s.bg_image_id, 0);
        assert_eq!(s.bg_color, "#f0f0f0");
        assert_eq!(s.bg_position, BgPosition::CenterCenter);
        assert_eq!(s.overlay_color, "");
        assert_eq!(s.overlay_opacity, 50);
        assert_eq!(s.cta_mode, CtaMode::FullSlide);
        assert_eq!(s.link_target, LinkTarget::SameTab);
    }
}
