//! Total sanitizers turning raw form payloads into valid records.
//!
//! Input is an untyped JSON mapping straight off the wire: keys may be
//! missing, values may be the wrong type, strings may be attacker
//! controlled. Output is always a fully-populated record inside its
//! declared domain. No path errors; malformed values are replaced by
//! the field default (enums, colors), clamped (bounded integers), or
//! stripped (text, URLs).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::settings::{
    AlignH, AlignV, SliderSettings, Transition, AUTOPLAY_DELAY_CEILING, AUTOPLAY_DELAY_FLOOR,
    MIN_HEIGHT_CEILING, MIN_HEIGHT_FLOOR,
};
use crate::slide::{
    BgPosition, BgType, CtaMode, LinkTarget, Slide, DEFAULT_BG_COLOR, DEFAULT_OVERLAY_OPACITY,
};
use crate::types::DbId;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("valid regex"));

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// URL schemes allowed through the sanitizer.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

// ---------------------------------------------------------------------------
// Field policies
// ---------------------------------------------------------------------------

/// Checkbox semantics: a present, non-empty, non-`"0"`, non-zero value
/// is true; anything else (including an absent key) is false.
fn checkbox(raw: &Value, key: &str) -> bool {
    match raw.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        _ => false,
    }
}

/// Coerce a value to a non-negative integer: numbers take their
/// absolute value, strings are parsed (unparseable means zero).
fn non_negative_int(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.unsigned_abs())
            .or_else(|| n.as_f64().map(|f| f.abs() as u64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|i| i.unsigned_abs())
            .or_else(|_| s.trim().parse::<f64>().map(|f| f.abs() as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Bounded integer: coerce to non-negative, then clamp into
/// `[floor, ceiling]`. An absent key takes the default before clamping.
fn clamped_int(raw: &Value, key: &str, default: u32, floor: u32, ceiling: u32) -> u32 {
    let coerced = match raw.get(key) {
        Some(v) => non_negative_int(v).min(u32::MAX as u64) as u32,
        None => default,
    };
    coerced.clamp(floor, ceiling)
}

/// Opaque media reference: non-negative id, zero meaning "none".
fn media_id(raw: &Value, key: &str) -> DbId {
    raw.get(key)
        .map(|v| non_negative_int(v).min(i64::MAX as u64) as DbId)
        .unwrap_or(0)
}

/// Exact-match enum lookup; anything else yields the caller's default.
fn enum_field<T>(raw: &Value, key: &str, parse: fn(&str) -> Option<T>, default: T) -> T {
    raw.get(key)
        .and_then(Value::as_str)
        .and_then(parse)
        .unwrap_or(default)
}

/// Strict hex color (`#rgb` or `#rrggbb`), else the fallback.
fn hex_color(raw: &Value, key: &str, fallback: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| HEX_COLOR_RE.is_match(s))
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// Single-line plain text: markup removed, control characters removed,
/// whitespace collapsed, trimmed.
fn text(raw: &Value, key: &str) -> String {
    let Some(s) = raw.get(key).and_then(Value::as_str) else {
        return String::new();
    };
    let without_tags = TAG_RE.replace_all(s, "");
    let mut out = String::with_capacity(without_tags.len());
    let mut last_was_space = true;
    for c in without_tags.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else if !c.is_control() {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim_end().to_string()
}

/// Multi-line plain text: markup and control characters removed but
/// newlines preserved (normalized to `\n`), trimmed.
fn multiline_text(raw: &Value, key: &str) -> String {
    let Some(s) = raw.get(key).and_then(Value::as_str) else {
        return String::new();
    };
    let without_tags = TAG_RE.replace_all(s, "");
    let normalized = without_tags.replace("\r\n", "\n").replace('\r', "\n");
    let cleaned: String = normalized
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect();
    cleaned.trim().to_string()
}

/// Returns true when the URL's scheme, if any, is on the safe list.
///
/// Scheme-less values (relative paths, fragments, protocol-relative
/// `//host` forms) are considered safe; the dangerous case is an
/// explicit scheme like `javascript:`.
fn has_safe_scheme(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };
    // A ':' after the first path/query/fragment delimiter is not a
    // scheme separator (e.g. "/path?q=a:b").
    if url[..colon]
        .chars()
        .any(|c| c == '/' || c == '?' || c == '#')
    {
        return true;
    }
    let scheme = url[..colon].to_ascii_lowercase();
    SAFE_SCHEMES.contains(&scheme.as_str())
}

/// Normalized URL: whitespace and control characters stripped, unsafe
/// schemes rejected outright (empty result).
fn url(raw: &Value, key: &str) -> String {
    let Some(s) = raw.get(key).and_then(Value::as_str) else {
        return String::new();
    };
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    if cleaned.is_empty() || !has_safe_scheme(&cleaned) {
        return String::new();
    }
    cleaned
}

/// Single CSS class token: only `[A-Za-z0-9_-]` survives.
fn css_class(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(|s| {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Record sanitizers
// ---------------------------------------------------------------------------

/// Sanitize one raw slide mapping into a valid [`Slide`].
///
/// Total: any JSON value (not just objects) produces a well-formed
/// record. Unknown enum values are silently replaced by the field
/// default, never rejected.
pub fn sanitize_slide(raw: &Value) -> Slide {
    Slide {
        title: text(raw, "title"),
        active: checkbox(raw, "active"),
        bg_type: enum_field(raw, "bg_type", BgType::parse, BgType::Image),
        bg_image_id: media_id(raw, "bg_image_id"),
        bg_color: hex_color(raw, "bg_color", DEFAULT_BG_COLOR),
        bg_position: enum_field(raw, "bg_position", BgPosition::parse, BgPosition::CenterCenter),
        overlay_color: hex_color(raw, "overlay_color", ""),
        overlay_opacity: clamped_int(raw, "overlay_opacity", DEFAULT_OVERLAY_OPACITY as u32, 0, 100)
            as u8,
        headline: text(raw, "headline"),
        subheadline: text(raw, "subheadline"),
        description: multiline_text(raw, "description"),
        link_url: url(raw, "link_url"),
        link_target: enum_field(raw, "link_target", LinkTarget::parse, LinkTarget::SameTab),
        cta_mode: enum_field(raw, "cta_mode", CtaMode::parse, CtaMode::FullSlide),
        button_text: text(raw, "button_text"),
        image_alt: text(raw, "image_alt"),
    }
}

/// Sanitize one raw settings mapping into a valid [`SliderSettings`].
pub fn sanitize_settings(raw: &Value) -> SliderSettings {
    SliderSettings {
        min_height_desktop: clamped_int(
            raw,
            "min_height_desktop",
            400,
            MIN_HEIGHT_FLOOR,
            MIN_HEIGHT_CEILING,
        ),
        min_height_mobile: clamped_int(
            raw,
            "min_height_mobile",
            280,
            MIN_HEIGHT_FLOOR,
            MIN_HEIGHT_CEILING,
        ),
        dots: checkbox(raw, "dots"),
        arrows: checkbox(raw, "arrows"),
        arrows_mobile: checkbox(raw, "arrows_mobile"),
        autoplay: checkbox(raw, "autoplay"),
        autoplay_delay: clamped_int(
            raw,
            "autoplay_delay",
            5000,
            AUTOPLAY_DELAY_FLOOR,
            AUTOPLAY_DELAY_CEILING,
        ),
        transition: enum_field(raw, "transition", Transition::parse, Transition::Slide),
        loop_enabled: checkbox(raw, "loop"),
        content_align_h: enum_field(raw, "content_align_h", AlignH::parse, AlignH::Center),
        content_align_v: enum_field(raw, "content_align_v", AlignV::parse, AlignV::Center),
        use_default_styles: checkbox(raw, "use_default_styles"),
        custom_class: css_class(raw, "custom_class"),
        swipe: checkbox(raw, "swipe"),
        keyboard: checkbox(raw, "keyboard"),
        pause_on_hover: checkbox(raw, "pause_on_hover"),
        hide_on_mobile: checkbox(raw, "hide_on_mobile"),
    }
}

/// Overlay a stored object's keys onto the serialized default record.
///
/// Stored blobs may predate newly added keys, so absent keys must take
/// the field default rather than the unchecked-checkbox reading a form
/// submission gets.
fn overlay_on_defaults<T: serde::Serialize>(defaults: &T, raw: &Value) -> Value {
    let mut merged = serde_json::to_value(defaults).unwrap_or_default();
    if let (Some(base), Some(over)) = (merged.as_object_mut(), raw.as_object()) {
        for (key, value) in over {
            base.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Default-fill a stored settings blob for rendering.
///
/// Keys present in the blob keep their stored truthiness; missing keys
/// are filled from [`SliderSettings::default`]. A non-object blob
/// (including one never saved) decodes to the canonical defaults.
pub fn settings_from_stored(stored: &Value) -> SliderSettings {
    if stored.is_object() {
        sanitize_settings(&overlay_on_defaults(&SliderSettings::default(), stored))
    } else {
        SliderSettings::default()
    }
}

/// Default-fill a stored slide collection for rendering.
///
/// Each slide object is overlaid on [`Slide::default`] before
/// sanitizing, so a stored slide missing `active` stays active.
pub fn slides_from_stored(stored: &Value) -> Vec<Slide> {
    stored
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| sanitize_slide(&overlay_on_defaults(&Slide::default(), item)))
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
