//! Slider settings: the per-container settings record, per-embed
//! overrides, and the resolver producing effective settings for one
//! render.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Transition type between slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    #[default]
    Slide,
    Fade,
}

impl Transition {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "slide" => Some(Self::Slide),
            "fade" => Some(Self::Fade),
            _ => None,
        }
    }
}

/// Horizontal content alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignH {
    Left,
    #[default]
    Center,
    Right,
}

impl AlignH {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Vertical content alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignV {
    Top,
    #[default]
    Center,
    Bottom,
}

impl AlignV {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Settings record
// ---------------------------------------------------------------------------

/// Minimum allowed container height in pixels.
pub const MIN_HEIGHT_FLOOR: u32 = 100;

/// Maximum allowed container height in pixels.
pub const MIN_HEIGHT_CEILING: u32 = 1200;

/// Minimum autoplay delay in milliseconds.
pub const AUTOPLAY_DELAY_FLOOR: u32 = 1000;

/// Maximum autoplay delay in milliseconds.
pub const AUTOPLAY_DELAY_CEILING: u32 = 30_000;

/// The settings record owned by one slider container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    pub min_height_desktop: u32,
    pub min_height_mobile: u32,
    pub dots: bool,
    pub arrows: bool,
    pub arrows_mobile: bool,
    pub autoplay: bool,
    pub autoplay_delay: u32,
    pub transition: Transition,
    #[serde(rename = "loop")]
    pub loop_enabled: bool,
    pub content_align_h: AlignH,
    pub content_align_v: AlignV,
    pub use_default_styles: bool,
    /// Sanitized CSS class token, or empty.
    pub custom_class: String,
    pub swipe: bool,
    pub keyboard: bool,
    pub pause_on_hover: bool,
    pub hide_on_mobile: bool,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min_height_desktop: 400,
            min_height_mobile: 280,
            dots: true,
            arrows: true,
            arrows_mobile: false,
            autoplay: false,
            autoplay_delay: 5000,
            transition: Transition::Slide,
            loop_enabled: true,
            content_align_h: AlignH::Center,
            content_align_v: AlignV::Center,
            use_default_styles: true,
            custom_class: String::new(),
            swipe: true,
            keyboard: true,
            pause_on_hover: false,
            hide_on_mobile: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Sparse per-embed setting overrides.
///
/// Only this fixed whitelist of scalar keys may be overridden at an
/// embed point; absent keys fall through to the stored settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverrides {
    pub autoplay: Option<bool>,
    pub dots: Option<bool>,
    pub arrows: Option<bool>,
    #[serde(rename = "loop")]
    pub loop_enabled: Option<bool>,
    pub transition: Option<Transition>,
    pub min_height_desktop: Option<u32>,
}

/// Parse a block-style tri-state flag: `"on"` / `"off"` / anything else
/// meaning "inherit".
pub fn tri_state(value: &str) -> Option<bool> {
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

impl SettingsOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build an override set from block-style attribute strings.
    ///
    /// Booleans use the tri-state wire form; `transition` must match an
    /// allowed value exactly; `min_height` must be numeric. Anything
    /// unrecognized is simply not overridden. The height override is
    /// clamped to the same bounds as the stored record so effective
    /// settings cannot escape the dimension invariant.
    pub fn from_block_attrs(
        autoplay: &str,
        dots: &str,
        arrows: &str,
        loop_enabled: &str,
        transition: &str,
        min_height: &str,
    ) -> Self {
        Self {
            autoplay: tri_state(autoplay),
            dots: tri_state(dots),
            arrows: tri_state(arrows),
            loop_enabled: tri_state(loop_enabled),
            transition: Transition::parse(transition),
            min_height_desktop: min_height
                .parse::<u32>()
                .ok()
                .map(|h| h.clamp(MIN_HEIGHT_FLOOR, MIN_HEIGHT_CEILING)),
        }
    }
}

impl SliderSettings {
    /// Merge per-embed overrides onto this record, producing the
    /// effective settings for one render.
    ///
    /// A shallow merge: every present override key replaces the stored
    /// value, absent keys fall through. There are no nested structures
    /// to deep-merge.
    pub fn resolve(&self, overrides: &SettingsOverrides) -> SliderSettings {
        let mut effective = self.clone();
        if let Some(autoplay) = overrides.autoplay {
            effective.autoplay = autoplay;
        }
        if let Some(dots) = overrides.dots {
            effective.dots = dots;
        }
        if let Some(arrows) = overrides.arrows {
            effective.arrows = arrows;
        }
        if let Some(loop_enabled) = overrides.loop_enabled {
            effective.loop_enabled = loop_enabled;
        }
        if let Some(transition) = overrides.transition {
            effective.transition = transition;
        }
        if let Some(height) = overrides.min_height_desktop {
            effective.min_height_desktop = height;
        }
        effective
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_canonical_defaults() {
        let s = SliderSettings::default();
        assert_eq!(s.min_height_desktop, 400);
        assert_eq!(s.min_height_mobile, 280);
        assert!(s.dots);
        assert!(s.arrows);
        assert!(!s.arrows_mobile);
        assert!(!s.autoplay);
        assert_eq!(s.autoplay_delay, 5000);
        assert_eq!(s.transition, Transition::Slide);
        assert!(s.loop_enabled);
        assert_eq!(s.content_align_h, AlignH::Center);
        assert_eq!(s.content_align_v, AlignV::Center);
        assert!(s.use_default_styles);
        assert!(s.swipe);
        assert!(s.keyboard);
        assert!(!s.pause_on_hover);
    }

    #[test]
    fn loop_serializes_under_its_wire_name() {
        let json = serde_json::to_value(SliderSettings::default()).unwrap();
        assert_eq!(json["loop"], serde_json::json!(true));
        assert!(json.get("loop_enabled").is_none());
    }

    #[test]
    fn resolve_with_empty_overrides_is_identity() {
        let stored = SliderSettings {
            autoplay: true,
            min_height_desktop: 620,
            ..SliderSettings::default()
        };
        let effective = stored.resolve(&SettingsOverrides::default());
        assert_eq!(effective, stored);
    }

    #[test]
    fn override_wins_over_stored_value() {
        let stored = SliderSettings {
            autoplay: true,
            ..SliderSettings::default()
        };
        let overrides = SettingsOverrides {
            autoplay: Some(false),
            ..SettingsOverrides::default()
        };
        assert!(!stored.resolve(&overrides).autoplay);
    }

    #[test]
    fn override_applies_all_whitelisted_keys() {
        let overrides = SettingsOverrides {
            autoplay: Some(true),
            dots: Some(false),
            arrows: Some(false),
            loop_enabled: Some(false),
            transition: Some(Transition::Fade),
            min_height_desktop: Some(550),
        };
        let effective = SliderSettings::default().resolve(&overrides);
        assert!(effective.autoplay);
        assert!(!effective.dots);
        assert!(!effective.arrows);
        assert!(!effective.loop_enabled);
        assert_eq!(effective.transition, Transition::Fade);
        assert_eq!(effective.min_height_desktop, 550);
        // Keys outside the whitelist are untouched.
        assert_eq!(effective.min_height_mobile, 280);
    }

    #[test]
    fn block_attrs_tri_state_parsing() {
        let ov = SettingsOverrides::from_block_attrs("on", "off", "", "nonsense", "fade", "500");
        assert_eq!(ov.autoplay, Some(true));
        assert_eq!(ov.dots, Some(false));
        assert_eq!(ov.arrows, None);
        assert_eq!(ov.loop_enabled, None);
        assert_eq!(ov.transition, Some(Transition::Fade));
        assert_eq!(ov.min_height_desktop, Some(500));
    }

    #[test]
    fn block_attrs_clamp_min_height() {
        let ov = SettingsOverrides::from_block_attrs("", "", "", "", "", "5000");
        assert_eq!(ov.min_height_desktop, Some(MIN_HEIGHT_CEILING));
        let ov = SettingsOverrides::from_block_attrs("", "", "", "", "", "10");
        assert_eq!(ov.min_height_desktop, Some(MIN_HEIGHT_FLOOR));
        let ov = SettingsOverrides::from_block_attrs("", "", "", "", "", "not a number");
        assert_eq!(ov.min_height_desktop, None);
    }

    #[test]
    fn empty_override_set_reports_empty() {
        assert!(SettingsOverrides::default().is_empty());
        let ov = SettingsOverrides {
            dots: Some(true),
            ..SettingsOverrides::default()
        };
        assert!(!ov.is_empty());
    }
}
