// =============================================================================
// Folio Web - Pointer Parallax
// =============================================================================
// Pointer-driven depth offsets for the hero, the profile card, and the
// decorative blobs, all relative to the home section's rect.
// =============================================================================

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, DomRect, MouseEvent, TouchEvent};

use crate::utils;

const HERO_FACTORS: (f64, f64) = (12.0, 10.0);
const PROFILE_FACTORS: (f64, f64) = (10.0, 8.0);
const PROFILE_ROTATION_FACTOR: f64 = 3.0;
const BLOB_DEPTH_STEP: f64 = 6.0;
const BLOB_ROTATION_STEP: f64 = 6.0;

// -----------------------------------------------------------------------------
// Offset and Transform Math
// -----------------------------------------------------------------------------

/// Pointer offset normalized against a reference rect's center.
pub(crate) fn normalized_offset(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let center_x = left + width / 2.0;
    let center_y = top + height / 2.0;
    ((client_x - center_x) / width, (client_y - center_y) / height)
}

pub(crate) fn hero_transform(px: f64, py: f64) -> String {
    format!(
        "translate3d({}px, {}px, 0)",
        px * HERO_FACTORS.0,
        py * HERO_FACTORS.1
    )
}

pub(crate) fn profile_transform(px: f64, py: f64) -> String {
    format!(
        "translate3d({}px, {}px, 0) rotateY({}deg)",
        px * PROFILE_FACTORS.0,
        py * PROFILE_FACTORS.1,
        px * PROFILE_ROTATION_FACTOR
    )
}

/// Blobs sit at increasing depth, each with a fixed per-index rotation.
pub(crate) fn blob_transform(px: f64, py: f64, index: usize) -> String {
    let depth = (index as f64 + 1.0) * BLOB_DEPTH_STEP;
    format!(
        "translate3d({}px, {}px, 0) rotate({}deg)",
        px * depth,
        py * depth,
        index as f64 * BLOB_ROTATION_STEP
    )
}

// -----------------------------------------------------------------------------
// Wiring
// -----------------------------------------------------------------------------

fn apply_pointer(client_x: f64, client_y: f64, reference: &DomRect) {
    let width = reference.width();
    let height = reference.height();
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let (px, py) =
        normalized_offset(client_x, client_y, reference.left(), reference.top(), width, height);

    // Every absent element is skipped silently
    if let Some(hero) = utils::query(".hero-container") {
        utils::set_transform(&hero, &hero_transform(px, py));
    }
    if let Some(profile) = utils::query(".profile-card") {
        utils::set_transform(&profile, &profile_transform(px, py));
    }
    for (index, blob) in utils::query_all(".blob").iter().enumerate() {
        utils::set_transform(blob, &blob_transform(px, py, index));
    }
}

/// Wire window-level pointer and touch tracking against the reference
/// element's rect. Returns false when the reference element is missing.
pub(super) fn init(reference_id: &str) -> bool {
    let reference = match utils::by_id(reference_id) {
        Some(el) => el,
        None => return false,
    };

    {
        let reference = reference.clone();
        let on_mouse = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = reference.get_bounding_client_rect();
            apply_pointer(event.client_x() as f64, event.client_y() as f64, &rect);
        });
        let _ = utils::window()
            .add_event_listener_with_callback("mousemove", on_mouse.as_ref().unchecked_ref());
        on_mouse.forget();
    }

    {
        // Touch tracking is passive: it never blocks scrolling
        let on_touch = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let touch = match event.touches().item(0) {
                Some(touch) => touch,
                None => return,
            };
            let rect = reference.get_bounding_client_rect();
            apply_pointer(touch.client_x() as f64, touch.client_y() as f64, &rect);
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = utils::window().add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_touch.as_ref().unchecked_ref(),
            &options,
        );
        on_touch.forget();
    }

    true
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_at_the_center() {
        let (px, py) = normalized_offset(500.0, 300.0, 0.0, 0.0, 1000.0, 600.0);
        assert_eq!(px, 0.0);
        assert_eq!(py, 0.0);
    }

    #[test]
    fn offset_reaches_half_at_the_edges() {
        let (px, py) = normalized_offset(1000.0, 0.0, 0.0, 0.0, 1000.0, 600.0);
        assert_eq!(px, 0.5);
        assert_eq!(py, -0.5);
    }

    #[test]
    fn offset_accounts_for_the_rect_origin() {
        let (px, py) = normalized_offset(150.0, 250.0, 100.0, 200.0, 100.0, 100.0);
        assert_eq!(px, 0.0);
        assert_eq!(py, 0.0);
    }

    #[test]
    fn hero_transform_scales_by_its_factors() {
        assert_eq!(hero_transform(0.5, -0.5), "translate3d(6px, -5px, 0)");
        assert_eq!(hero_transform(0.0, 0.0), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn profile_transform_adds_a_rotation() {
        assert_eq!(
            profile_transform(0.5, 0.5),
            "translate3d(5px, 4px, 0) rotateY(1.5deg)"
        );
    }

    #[test]
    fn blob_depth_grows_with_index() {
        assert_eq!(
            blob_transform(0.5, 0.5, 0),
            "translate3d(3px, 3px, 0) rotate(0deg)"
        );
        assert_eq!(
            blob_transform(0.5, 0.5, 2),
            "translate3d(9px, 9px, 0) rotate(12deg)"
        );
    }
}
