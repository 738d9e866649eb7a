//! The `[lw_slider id="…"]` text macro.
//!
//! Editors embed sliders in arbitrary content with a shortcode; this
//! module finds every occurrence and replaces it with whatever the
//! caller's render function returns. Any `[lw_slider…]` macro is
//! consumed: one without a usable positive id expands to nothing.
//! Other bracketed text passes through as-is.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::DbId;

static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[lw_slider(\s[^\]]*)?\]").expect("valid regex"));

static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bid\s*=\s*(?:"(\d+)"|'(\d+)'|(\d+))"#).expect("valid regex")
});

/// Extract the slider id from one shortcode match.
fn captured_id(caps: &Captures<'_>) -> Option<DbId> {
    let attrs = caps.get(1)?.as_str();
    let id = ID_ATTR_RE.captures(attrs)?;
    id.get(1)
        .or_else(|| id.get(2))
        .or_else(|| id.get(3))
        .and_then(|m| m.as_str().parse::<DbId>().ok())
        .filter(|id| *id > 0)
}

/// Collect the distinct slider ids referenced by shortcodes in
/// `content`, in first-occurrence order.
pub fn parse_ids(content: &str) -> Vec<DbId> {
    let mut ids = Vec::new();
    for caps in SHORTCODE_RE.captures_iter(content) {
        if let Some(id) = captured_id(&caps) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Replace every shortcode in `content` with `render(id)`.
///
/// Invalid macros (no id attribute, id zero, or a malformed id value)
/// are replaced with the empty string; text outside shortcodes passes
/// through untouched.
pub fn expand<F>(content: &str, mut render: F) -> String
where
    F: FnMut(DbId) -> String,
{
    SHORTCODE_RE
        .replace_all(content, |caps: &Captures<'_>| match captured_id(caps) {
            Some(id) => render(id),
            None => String::new(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_quoted_and_bare_ids() {
        let content = r#"a [lw_slider id="3"] b [lw_slider id='4'] c [lw_slider id=5] d"#;
        let out = expand(content, |id| format!("<{id}>"));
        assert_eq!(out, "a <3> b <4> c <5> d");
    }

    #[test]
    fn zero_id_expands_to_nothing() {
        let out = expand(r#"x [lw_slider id="0"] y"#, |_| "NOPE".to_string());
        assert_eq!(out, "x  y");
    }

    #[test]
    fn malformed_macros_expand_to_nothing() {
        let out = expand("a [lw_slider] b [lw_slider id=abc] c", |_| "X".to_string());
        assert_eq!(out, "a  b  c");
        assert!(parse_ids("[lw_slider] [lw_slider id=abc]").is_empty());
    }

    #[test]
    fn foreign_macros_pass_through_untouched() {
        let content = "[other id=\"3\"] [lw_sliderx id=\"3\"]";
        assert_eq!(expand(content, |_| "X".to_string()), content);
    }

    #[test]
    fn parse_ids_deduplicates_in_order() {
        let content = r#"[lw_slider id="7"] [lw_slider id="2"] [lw_slider id="7"]"#;
        assert_eq!(parse_ids(content), vec![7, 2]);
    }

    #[test]
    fn whitespace_around_equals_is_tolerated() {
        let out = expand(r#"[lw_slider id = "9" ]"#, |id| format!("ok{id}"));
        assert_eq!(out, "ok9");
    }

    #[test]
    fn plain_content_is_untouched() {
        let content = "no shortcodes here";
        assert_eq!(expand(content, |_| "X".to_string()), content);
        assert!(parse_ids(content).is_empty());
    }
}
