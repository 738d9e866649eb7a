//! Server-side markup renderer.
//!
//! Produces the carousel DOM contract consumed by the client widget:
//! a wrapper carrying the class list, the serialized
//! [`CarouselConfig`] in a `data-lw-slider` attribute, and an inline
//! minimum height; a track/list pair; one list item per active slide;
//! and a companion `<style>` block for the breakpoint-conditional
//! mobile height, which the config blob cannot express.
//!
//! Rendering never fails. No active slides means empty output, an
//! unresolvable image reference means no background, and both are
//! silent degradations rather than errors.

use std::collections::HashMap;

use maud::{html, Markup, PreEscaped};
use serde::Serialize;

use crate::carousel::CarouselConfig;
use crate::settings::{SettingsOverrides, SliderSettings};
use crate::slide::{BgType, CtaMode, LinkTarget, Slide};
use crate::types::DbId;

/// Viewport width at which the mobile minimum height applies.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

// ---------------------------------------------------------------------------
// Media resolution
// ---------------------------------------------------------------------------

/// Media size variant requested from the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVariant {
    Full,
    Thumbnail,
}

/// Resolves opaque media ids to URLs.
///
/// The renderer is synchronous, so callers resolve ahead of time (a
/// batch query in production, a literal map in tests) and hand the
/// result in behind this trait.
pub trait MediaResolver {
    fn resolve_url(&self, media_id: DbId, variant: SizeVariant) -> Option<String>;
}

/// URL variants for one media asset.
#[derive(Debug, Clone)]
pub struct MediaUrls {
    pub full: String,
    pub thumbnail: Option<String>,
}

/// Map-backed [`MediaResolver`]. The empty map resolves nothing.
#[derive(Debug, Clone, Default)]
pub struct ResolvedMedia {
    urls: HashMap<DbId, MediaUrls>,
}

impl ResolvedMedia {
    pub fn insert(&mut self, media_id: DbId, urls: MediaUrls) {
        self.urls.insert(media_id, urls);
    }
}

impl MediaResolver for ResolvedMedia {
    fn resolve_url(&self, media_id: DbId, variant: SizeVariant) -> Option<String> {
        let urls = self.urls.get(&media_id)?;
        match variant {
            SizeVariant::Full => Some(urls.full.clone()),
            SizeVariant::Thumbnail => urls.thumbnail.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Render input/output
// ---------------------------------------------------------------------------

/// Per-render adjustments layered on the stored records.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Per-embed setting overrides.
    pub overrides: SettingsOverrides,
    /// Client reduced-motion preference; forces autoplay off and
    /// zeroes transition speeds in the emitted config.
    pub reduced_motion: bool,
}

/// The result of one render call.
///
/// `needs_assets` replaces the classic process-wide "enqueue assets"
/// flag: each call reports whether it produced markup that needs the
/// shared client assets, and the caller aggregates across calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderOutput {
    pub html: String,
    pub needs_assets: bool,
}

impl RenderOutput {
    pub fn empty() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Render a slider container.
///
/// Filters `slides` to the active ones preserving order; zero active
/// slides is a defined terminal case producing empty output.
pub fn render(
    slider_id: DbId,
    slides: &[Slide],
    stored: &SliderSettings,
    media: &dyn MediaResolver,
    options: &RenderOptions,
) -> RenderOutput {
    let active: Vec<&Slide> = slides.iter().filter(|s| s.active).collect();
    if active.is_empty() {
        return RenderOutput::empty();
    }

    let settings = stored.resolve(&options.overrides);

    let mut config = CarouselConfig::build(&settings, active.len());
    if options.reduced_motion {
        config.apply_reduced_motion();
    }
    let config_json = serde_json::to_string(&config).unwrap_or_default();

    let element_id = format!("lw-slider-{slider_id}");
    let class_list = format!("{} splide", build_css_class(&settings));

    let markup = html! {
        div class=(class_list)
            id=(element_id)
            data-lw-slider=(config_json)
            style=(format!("min-height:{}px;", settings.min_height_desktop)) {
            div class="splide__track" {
                ul class="splide__list" {
                    @for slide in &active {
                        (slide_markup(slide, &settings, media))
                    }
                }
            }
        }
        style { (responsive_css(slider_id, &settings)) }
    };

    RenderOutput {
        html: markup.into_string(),
        needs_assets: true,
    }
}

/// Compose the wrapper class list. Order matters for cascade
/// precedence: base class, conditional styled class, conditional
/// no-arrows-on-mobile class, then the sanitized custom class.
fn build_css_class(settings: &SliderSettings) -> String {
    let mut classes = vec!["lw-slider"];

    if settings.use_default_styles {
        classes.push("lw-slider--styled");
    }
    if !settings.arrows_mobile {
        classes.push("lw-slider--no-arrows-mobile");
    }
    if !settings.custom_class.is_empty() {
        classes.push(&settings.custom_class);
    }

    classes.join(" ")
}

/// The breakpoint-conditional minimum height, which the data-attribute
/// config cannot express.
fn responsive_css(slider_id: DbId, settings: &SliderSettings) -> String {
    format!(
        "#lw-slider-{id}{{min-height:{desktop}px}}\
         @media(max-width:{bp}px){{#lw-slider-{id}{{min-height:{mobile}px}}}}",
        id = slider_id,
        desktop = settings.min_height_desktop,
        mobile = settings.min_height_mobile,
        bp = MOBILE_BREAKPOINT_PX,
    )
}

// ---------------------------------------------------------------------------
// Per-slide markup
// ---------------------------------------------------------------------------

fn slide_markup(slide: &Slide, settings: &SliderSettings, media: &dyn MediaResolver) -> Markup {
    let style = background_style(slide, media);
    let full_slide_link = slide.has_link() && slide.cta_mode == CtaMode::FullSlide;

    html! {
        li class="splide__slide" style=(style) {
            (overlay_markup(slide))
            @if full_slide_link {
                a href=(slide.link_url)
                  target=(slide.link_target.as_attr())
                  rel=[rel_for(slide.link_target)]
                  class="lw-slider__link" {
                    (content_markup(slide, settings))
                }
            } @else {
                (content_markup(slide, settings))
            }
        }
    }
}

/// Inline background for one slide: a flat color, a resolved image, or
/// nothing when the image reference no longer resolves.
fn background_style(slide: &Slide, media: &dyn MediaResolver) -> String {
    match slide.bg_type {
        BgType::Color => format!("background-color:{};", slide.bg_color),
        BgType::Image => {
            if slide.bg_image_id == 0 {
                return String::new();
            }
            match media.resolve_url(slide.bg_image_id, SizeVariant::Full) {
                Some(url) => format!(
                    "background-image:url({url});background-size:cover;background-position:{};",
                    slide.bg_position.as_css()
                ),
                None => String::new(),
            }
        }
    }
}

fn overlay_markup(slide: &Slide) -> Markup {
    if slide.overlay_color.is_empty() {
        return PreEscaped(String::new());
    }
    let opacity = slide.overlay_opacity as f64 / 100.0;
    html! {
        div class="lw-slider__overlay"
            style=(format!("background-color:{};opacity:{opacity};", slide.overlay_color)) {}
    }
}

fn content_markup(slide: &Slide, settings: &SliderSettings) -> Markup {
    let align_classes = format!(
        "lw-slider__content lw-align-{} lw-valign-{}",
        settings.content_align_h.as_str(),
        settings.content_align_v.as_str()
    );
    let show_button =
        slide.has_link() && slide.cta_mode == CtaMode::Button && !slide.button_text.is_empty();

    html! {
        div class=(align_classes) {
            @if !slide.headline.is_empty() {
                h2 class="lw-slider__headline" { (slide.headline) }
            }
            @if !slide.subheadline.is_empty() {
                p class="lw-slider__subheadline" { (slide.subheadline) }
            }
            @if !slide.description.is_empty() {
                p class="lw-slider__description" { (slide.description) }
            }
            @if show_button {
                a href=(slide.link_url)
                  target=(slide.link_target.as_attr())
                  rel=[rel_for(slide.link_target)]
                  class="lw-slider__button" {
                    (slide.button_text)
                }
            }
        }
    }
}

/// New-tab links get a `rel` guard so the destination page cannot
/// reach back to the opener.
fn rel_for(target: LinkTarget) -> Option<&'static str> {
    match target {
        LinkTarget::NewTab => Some("noopener"),
        LinkTarget::SameTab => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
