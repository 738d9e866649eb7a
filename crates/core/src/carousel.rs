//! Carousel configuration builder.
//!
//! Translates effective settings plus the active-slide count into the
//! configuration schema consumed by the client-side carousel widget.
//! The blob is serialized into a `data-` attribute by the renderer and
//! parsed by the widget initializer; key names are the widget's, hence
//! the camelCase renames.

use serde::{Serialize, Serializer};

use crate::settings::{SliderSettings, Transition};

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// Carousel movement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselType {
    Slide,
    Loop,
    Fade,
}

/// Keyboard handling: the widget takes the string `"global"` to enable
/// page-wide key bindings, or the boolean `false` to disable them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    Global,
    Disabled,
}

impl Serialize for KeyboardMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Global => serializer.serialize_str("global"),
            Self::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// The widget configuration blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselConfig {
    #[serde(rename = "type")]
    pub kind: CarouselType,
    pub pagination: bool,
    pub arrows: bool,
    pub drag: bool,
    pub keyboard: KeyboardMode,
    /// Fade transitions require wraparound to animate correctly, so
    /// the builder forces this on rather than leaving it to the
    /// widget's own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewind: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(rename = "pauseOnHover", skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(rename = "rewindSpeed", skip_serializing_if = "Option::is_none")]
    pub rewind_speed: Option<u32>,
}

impl CarouselConfig {
    /// Build the widget configuration from effective settings and the
    /// number of active slides. Deterministic; rules apply in order:
    ///
    /// 1. type is `loop` when looping, else `slide`
    /// 2. pagination requires dots AND more than one slide
    /// 3. arrows require the arrow setting AND more than one slide
    /// 4. drag mirrors swipe; keyboard is `"global"` or off
    /// 5. a fade transition overrides the type and forces `rewind`
    /// 6. autoplay adds the interval and pause-on-hover group
    pub fn build(settings: &SliderSettings, active_slide_count: usize) -> Self {
        let mut config = Self {
            kind: if settings.loop_enabled {
                CarouselType::Loop
            } else {
                CarouselType::Slide
            },
            pagination: settings.dots && active_slide_count > 1,
            arrows: settings.arrows && active_slide_count > 1,
            drag: settings.swipe,
            keyboard: if settings.keyboard {
                KeyboardMode::Global
            } else {
                KeyboardMode::Disabled
            },
            rewind: None,
            autoplay: None,
            interval: None,
            pause_on_hover: None,
            speed: None,
            rewind_speed: None,
        };

        if settings.transition == Transition::Fade {
            config.kind = CarouselType::Fade;
            config.rewind = Some(true);
        }

        if settings.autoplay {
            config.autoplay = Some(true);
            config.interval = Some(settings.autoplay_delay);
            config.pause_on_hover = Some(settings.pause_on_hover);
        }

        config
    }

    /// Apply the client's reduced-motion preference on top of the
    /// server-computed config: no autoplay, zero transition speeds.
    pub fn apply_reduced_motion(&mut self) {
        self.autoplay = Some(false);
        self.interval = None;
        self.pause_on_hover = None;
        self.speed = Some(0);
        self.rewind_speed = Some(0);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
