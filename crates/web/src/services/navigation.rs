// =============================================================================
// Folio Web - Navigation Controller
// =============================================================================
// Mobile menu wiring, section-aware nav highlighting, and smooth in-page
// scrolling.
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{InitError, Module};
use crate::utils;

/// Fraction of a section that must be visible before it becomes active.
const SECTION_VISIBILITY_THRESHOLD: f64 = 0.4;

const MENU_BUTTON_ID: &str = "mobile-menu-button";
const MENU_ID: &str = "mobile-menu";
const HIDDEN_CLASS: &str = "hidden";
const ACTIVE_CLASS: &str = "active";
const ENTRANCE_CLASS: &str = "fade-in-section";

// -----------------------------------------------------------------------------
// Navigation Controller
// -----------------------------------------------------------------------------

/// Singleton wiring navigation behavior onto the current document.
#[derive(Clone, Default)]
pub struct NavigationController {
    /// Live section observer; replaced wholesale on re-init.
    observer: Rc<RefCell<Option<IntersectionObserver>>>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smooth-scroll a section into view by id. Unknown ids are ignored.
    pub fn navigate_to_section(&self, section_id: &str) {
        if let Some(section) = utils::by_id(section_id) {
            scroll_to(&section);
        }
    }

    fn setup_mobile_menu(&self) {
        let button = match utils::by_id(MENU_BUTTON_ID) {
            Some(el) => el,
            None => return,
        };
        let menu = match utils::by_id(MENU_ID) {
            Some(el) => el,
            None => return,
        };
        if !utils::mark_once(&menu, "data-nav-wired") {
            return;
        }

        // Toggle on the hamburger button
        {
            let menu = menu.clone();
            let on_toggle = Closure::<dyn FnMut()>::new(move || {
                let _ = menu.class_list().toggle(HIDDEN_CLASS);
            });
            let _ = button
                .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
            on_toggle.forget();
        }

        // Close when a link inside the menu is clicked
        for link in utils::query_all(&format!("#{} a", MENU_ID)) {
            let menu = menu.clone();
            let on_link = Closure::<dyn FnMut()>::new(move || {
                let _ = menu.class_list().add_1(HIDDEN_CLASS);
            });
            let _ =
                link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref());
            on_link.forget();
        }

        // Close on a click landing outside both the open menu and its button
        {
            let on_outside_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let target = match event.target().and_then(|t| t.dyn_into::<Node>().ok()) {
                    Some(node) => node,
                    None => return,
                };
                if menu.class_list().contains(HIDDEN_CLASS) {
                    return;
                }
                if menu.contains(Some(&target)) || button.contains(Some(&target)) {
                    return;
                }
                let _ = menu.class_list().add_1(HIDDEN_CLASS);
            });
            let _ = utils::document().add_event_listener_with_callback(
                "click",
                on_outside_click.as_ref().unchecked_ref(),
            );
            on_outside_click.forget();
        }
    }

    fn setup_scroll_observer(&self) -> Result<(), InitError> {
        // Replace any observer from a previous init
        if let Some(old) = self.observer.borrow_mut().take() {
            old.disconnect();
        }

        let sections = utils::query_all("section");
        if sections.is_empty() {
            return Ok(());
        }

        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        activate_section(&entry.target());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(SECTION_VISIBILITY_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .map_err(|e| InitError::new("navigation", format!("{:?}", e)))?;
        on_intersect.forget();

        for section in &sections {
            observer.observe(section);
        }
        *self.observer.borrow_mut() = Some(observer);
        Ok(())
    }

    fn setup_smooth_scroll(&self) {
        for anchor in utils::query_all("a[href^=\"#\"]") {
            if !utils::mark_once(&anchor, "data-scroll-wired") {
                continue;
            }
            let link = anchor.clone();
            let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let href = link.get_attribute("href").unwrap_or_default();
                if !is_section_link(&href) {
                    return;
                }
                if let Some(target) = utils::query(&href) {
                    event.prevent_default();
                    scroll_to(&target);
                }
            });
            let _ =
                anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }
}

impl Module for NavigationController {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn init(&self) -> Result<(), InitError> {
        self.setup_mobile_menu();
        self.setup_scroll_observer()?;
        self.setup_smooth_scroll();
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Section Activation
// -----------------------------------------------------------------------------

/// Reflect a newly visible section into nav-link state and the URL fragment.
fn activate_section(section: &Element) {
    let section_id = section.id();
    if section_id.is_empty() {
        return;
    }

    for link in utils::query_all(".nav-link") {
        let _ = link.class_list().remove_1(ACTIVE_CLASS);
    }
    for link in utils::query_all(&format!(".nav-link[data-section=\"{}\"]", section_id)) {
        let _ = link.class_list().add_1(ACTIVE_CLASS);
    }

    let _ = section.class_list().add_1(ENTRANCE_CLASS);

    // Rewrite the fragment without scrolling or reloading
    if let Ok(history) = utils::window().history() {
        let _ = history.replace_state_with_url(
            &JsValue::NULL,
            "",
            Some(&format!("#{}", section_id)),
        );
    }
}

/// True for in-page anchors (`#section`), false for the bare `#`.
fn is_section_link(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}

fn scroll_to(el: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_a_section_link() {
        assert!(!is_section_link("#"));
        assert!(!is_section_link(""));
        assert!(!is_section_link("/about"));
        assert!(!is_section_link("https://example.com/#home"));
    }

    #[test]
    fn fragment_hrefs_are_section_links() {
        assert!(is_section_link("#home"));
        assert!(is_section_link("#projects"));
    }
}
