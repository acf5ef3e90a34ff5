// =============================================================================
// Folio Web - Tilt Cards
// =============================================================================
// Pointer-tracking tilt for the social and project card collections. Social
// cards additionally flip on click.
// =============================================================================

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::utils;

const FLIP_CLASS: &str = "flip";

// -----------------------------------------------------------------------------
// Tilt Math
// -----------------------------------------------------------------------------

/// Per-collection tilt tuning.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TiltStyle {
    pub rotate_y_factor: f64,
    pub rotate_x_factor: f64,
    pub scale: f64,
    pub lift_px: f64,
}

/// Social cards tilt harder and pop more than project cards.
pub(crate) const SOCIAL_TILT: TiltStyle = TiltStyle {
    rotate_y_factor: 10.0,
    rotate_x_factor: 8.0,
    scale: 1.03,
    lift_px: -8.0,
};

pub(crate) const PROJECT_TILT: TiltStyle = TiltStyle {
    rotate_y_factor: 6.0,
    rotate_x_factor: 4.0,
    scale: 1.01,
    lift_px: -8.0,
};

/// Pointer offset within the card box, mapped to [-0.5, 0.5] per axis.
pub(crate) fn card_offset(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    (
        (client_x - left) / width - 0.5,
        (client_y - top) / height - 0.5,
    )
}

pub(crate) fn tilt_transform(px: f64, py: f64, style: &TiltStyle) -> String {
    format!(
        "translateY({}px) rotateX({}deg) rotateY({}deg) scale({})",
        style.lift_px,
        -py * style.rotate_x_factor,
        px * style.rotate_y_factor,
        style.scale
    )
}

// -----------------------------------------------------------------------------
// Wiring
// -----------------------------------------------------------------------------

fn wire_card(card: &Element, style: TiltStyle, reset_on_blur: bool, flip_on_click: bool) {
    if !utils::mark_once(card, "data-tilt-wired") {
        return;
    }

    {
        let card = card.clone();
        let value = card.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = value.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let (px, py) = card_offset(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );
            utils::set_transform(&value, &tilt_transform(px, py, &style));
        });
        let _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }

    {
        let card = card.clone();
        let value = card.clone();
        let on_leave = Closure::<dyn FnMut()>::new(move || utils::clear_transform(&value));
        let _ =
            card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }

    if reset_on_blur {
        let card = card.clone();
        let value = card.clone();
        let on_blur = Closure::<dyn FnMut()>::new(move || utils::clear_transform(&value));
        let _ = card.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
        on_blur.forget();
    }

    if flip_on_click {
        let card = card.clone();
        let value = card.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let _ = value.class_list().toggle(FLIP_CLASS);
        });
        let _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// Wire every social card: strong tilt plus flip-on-click.
pub(super) fn init_social_cards() {
    for card in utils::query_all(".social-card") {
        wire_card(&card, SOCIAL_TILT, false, true);
    }
}

/// Wire every project card: subtle tilt, reset on focus loss, no flip.
pub(super) fn init_project_cards() {
    for card in utils::query_all(".project-card") {
        wire_card(&card, PROJECT_TILT, true, false);
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_spans_half_a_card_in_each_direction() {
        assert_eq!(card_offset(0.0, 0.0, 0.0, 0.0, 200.0, 100.0), (-0.5, -0.5));
        assert_eq!(card_offset(200.0, 100.0, 0.0, 0.0, 200.0, 100.0), (0.5, 0.5));
        assert_eq!(card_offset(100.0, 50.0, 0.0, 0.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn offset_accounts_for_the_card_origin() {
        assert_eq!(
            card_offset(350.0, 450.0, 300.0, 400.0, 100.0, 100.0),
            (0.0, 0.0)
        );
    }

    #[test]
    fn social_tilt_rotates_harder_than_project_tilt() {
        assert_eq!(
            tilt_transform(0.5, 0.5, &SOCIAL_TILT),
            "translateY(-8px) rotateX(-4deg) rotateY(5deg) scale(1.03)"
        );
        assert_eq!(
            tilt_transform(0.5, 0.5, &PROJECT_TILT),
            "translateY(-8px) rotateX(-2deg) rotateY(3deg) scale(1.01)"
        );
    }

    #[test]
    fn vertical_offset_tips_the_card_away_from_the_pointer() {
        // Pointer in the lower half tips the top edge toward the viewer
        assert_eq!(
            tilt_transform(0.0, 0.25, &SOCIAL_TILT),
            "translateY(-8px) rotateX(-2deg) rotateY(0deg) scale(1.03)"
        );
    }
}
