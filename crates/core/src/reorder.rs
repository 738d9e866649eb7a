//! Reorder service for slide collections.
//!
//! A reorder request carries the desired position → old-index mapping
//! produced by the editor's drag-and-drop. Indices referring to slots
//! that do not exist are silently skipped, and any old index omitted
//! from the order is dropped from the result. The drop-by-omission
//! behavior is part of the service contract: a partial order doubles
//! as a delete, matching the editor's remove-then-save flow.

use crate::slide::Slide;

/// Reorder `slides` according to `order`, a sequence of old indices in
/// the desired new positions. Referenced records are preserved
/// verbatim.
pub fn reorder(slides: &[Slide], order: &[usize]) -> Vec<Slide> {
    order
        .iter()
        .filter_map(|&old_index| slides.get(old_index).cloned())
        .collect()
}
