//! Editor form state for the slide list.
//!
//! The admin editor shows one collapsible card per slide. Every form
//! control on a card is addressed by the card's position, so any
//! structural change (add, remove, duplicate, reorder) must leave the
//! list contiguously indexed from zero. Rather than patching index
//! fragments in attribute strings after the fact, the state here is
//! structural and the `name`/`id`/`for`/`data-index` attribute values
//! are generated from the current position on demand.

use serde::{Deserialize, Serialize};

use crate::reorder;
use crate::slide::Slide;

/// One collapsible card in the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideCard {
    pub slide: Slide,
    /// Whether the card body is open in the editor.
    pub expanded: bool,
}

/// Attribute values for one form control, derived from the card's
/// current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttrs {
    /// Form submission name, e.g. `lw_slider_slides[2][headline]`.
    pub name: String,
    /// Element id, e.g. `lw-slide-2-headline`. Labels point at this
    /// via their `for` attribute.
    pub id: String,
}

/// Form submission name for a slide field at `index`.
pub fn field_name(index: usize, field: &str) -> String {
    format!("lw_slider_slides[{index}][{field}]")
}

/// Element id for a slide field at `index`. Doubles as the matching
/// label's `for` value.
pub fn field_id(index: usize, field: &str) -> String {
    format!("lw-slide-{index}-{field}")
}

pub fn field_attrs(index: usize, field: &str) -> FieldAttrs {
    FieldAttrs {
        name: field_name(index, field),
        id: field_id(index, field),
    }
}

/// The ordered slide list as the editor sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorState {
    pub cards: Vec<SlideCard>,
}

impl EditorState {
    /// Build the state from stored slides. Cards start collapsed.
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self {
            cards: slides
                .into_iter()
                .map(|slide| SlideCard {
                    slide,
                    expanded: false,
                })
                .collect(),
        }
    }

    /// The slides in display order, ready to persist.
    pub fn into_slides(self) -> Vec<Slide> {
        self.cards.into_iter().map(|card| card.slide).collect()
    }

    /// Append a fresh slide and open its card for editing.
    ///
    /// Returns the new card's index.
    pub fn add(&mut self) -> usize {
        self.cards.push(SlideCard {
            slide: Slide::default(),
            expanded: true,
        });
        self.cards.len() - 1
    }

    /// Remove the card at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.cards.len() {
            self.cards.remove(index);
        }
    }

    /// Insert a copy of the card at `index` directly after it. The
    /// copy starts collapsed. Returns the copy's index, or `None`
    /// when `index` is out of range.
    pub fn duplicate(&mut self, index: usize) -> Option<usize> {
        let source = self.cards.get(index)?;
        let copy = SlideCard {
            slide: source.slide.clone(),
            expanded: false,
        };
        self.cards.insert(index + 1, copy);
        Some(index + 1)
    }

    /// Flip the open/closed state of one card.
    pub fn toggle_expanded(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.expanded = !card.expanded;
        }
    }

    pub fn set_active(&mut self, index: usize, active: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.slide.active = active;
        }
    }

    /// Rearrange cards per `order`, with the same omission semantics
    /// as [`reorder::reorder`]: listed positions survive in the given
    /// order, unlisted positions are dropped.
    pub fn apply_order(&mut self, order: &[usize]) {
        let reordered: Vec<SlideCard> = order
            .iter()
            .filter_map(|&i| self.cards.get(i).cloned())
            .collect();
        self.cards = reordered;
    }

    /// Persist-ready slide list applying the display order to stored
    /// slides that never went through the editor.
    pub fn ordered_slides(slides: &[Slide], order: &[usize]) -> Vec<Slide> {
        reorder::reorder(slides, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Slide {
        Slide {
            title: title.to_string(),
            ..Slide::default()
        }
    }

    fn state_of(titles: &[&str]) -> EditorState {
        EditorState::from_slides(titles.iter().map(|t| titled(t)).collect())
    }

    fn titles(state: &EditorState) -> Vec<String> {
        state.cards.iter().map(|c| c.slide.title.clone()).collect()
    }

    #[test]
    fn field_attrs_follow_position() {
        assert_eq!(field_name(2, "headline"), "lw_slider_slides[2][headline]");
        assert_eq!(field_id(2, "headline"), "lw-slide-2-headline");
        let attrs = field_attrs(0, "bg_color");
        assert_eq!(attrs.name, "lw_slider_slides[0][bg_color]");
        assert_eq!(attrs.id, "lw-slide-0-bg_color");
    }

    #[test]
    fn from_slides_starts_collapsed() {
        let state = state_of(&["a", "b"]);
        assert!(state.cards.iter().all(|c| !c.expanded));
    }

    #[test]
    fn add_appends_an_open_default_card() {
        let mut state = state_of(&["a"]);
        let index = state.add();
        assert_eq!(index, 1);
        assert!(state.cards[1].expanded);
        assert!(state.cards[1].slide.active);
        assert_eq!(state.cards[1].slide.title, "");
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut state = state_of(&["a", "b", "c"]);
        state.remove(1);
        assert_eq!(titles(&state), ["a", "c"]);
        // Attribute values regenerate from the new positions.
        assert_eq!(field_id(1, "title"), "lw-slide-1-title");
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut state = state_of(&["a"]);
        state.remove(5);
        assert_eq!(titles(&state), ["a"]);
    }

    #[test]
    fn duplicate_inserts_the_copy_directly_after() {
        let mut state = state_of(&["a", "b"]);
        let index = state.duplicate(0);
        assert_eq!(index, Some(1));
        assert_eq!(titles(&state), ["a", "a", "b"]);
        assert!(!state.cards[1].expanded);
    }

    #[test]
    fn duplicate_out_of_range_returns_none() {
        let mut state = state_of(&["a"]);
        assert_eq!(state.duplicate(3), None);
        assert_eq!(state.cards.len(), 1);
    }

    #[test]
    fn toggle_and_set_active_address_one_card() {
        let mut state = state_of(&["a", "b"]);
        state.toggle_expanded(1);
        assert!(!state.cards[0].expanded);
        assert!(state.cards[1].expanded);

        state.set_active(0, false);
        assert!(!state.cards[0].slide.active);
        assert!(state.cards[1].slide.active);
    }

    #[test]
    fn apply_order_rearranges_and_drops_unlisted() {
        let mut state = state_of(&["a", "b", "c"]);
        state.apply_order(&[2, 0]);
        assert_eq!(titles(&state), ["c", "a"]);
    }

    #[test]
    fn apply_order_skips_out_of_range_positions() {
        let mut state = state_of(&["a", "b"]);
        state.apply_order(&[1, 9, 0]);
        assert_eq!(titles(&state), ["b", "a"]);
    }

    #[test]
    fn round_trip_preserves_slides() {
        let state = state_of(&["a", "b"]);
        let slides = state.into_slides();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "a");
        assert_eq!(slides[1].title, "b");
    }
}
