// =============================================================================
// Folio Web - Icon Renderer Capability
// =============================================================================
// Optional hook into the icon library the host document ships (Lucide).
// Icon glyphs are placeholder elements that must be regenerated after new
// markup is injected or the theme changes.
// =============================================================================

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::utils;

const GLOBAL_NAME: &str = "lucide";
const CREATE_ICONS_FN: &str = "createIcons";

/// Handle to the icon library's no-arg regeneration entry point.
#[derive(Clone)]
pub struct IconRenderer {
    library: JsValue,
    create_icons: Function,
}

impl IconRenderer {
    /// Probe the window object for the icon library. Absence is normal:
    /// pages that ship without the library simply skip icon regeneration.
    pub fn detect() -> Option<Self> {
        let library = Reflect::get(&utils::window(), &JsValue::from_str(GLOBAL_NAME)).ok()?;
        if library.is_undefined() || library.is_null() {
            return None;
        }
        let create_icons = Reflect::get(&library, &JsValue::from_str(CREATE_ICONS_FN))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some(Self {
            library,
            create_icons,
        })
    }

    /// Regenerate icon glyphs now.
    pub fn refresh(&self) {
        if let Err(err) = self.create_icons.call0(&self.library) {
            log::warn!("Icon refresh failed: {:?}", err);
        }
    }

    /// Regenerate icon glyphs after `delay_ms`, letting style and layout
    /// settle first.
    pub fn refresh_after(&self, delay_ms: u32) {
        let renderer = self.clone();
        Timeout::new(delay_ms, move || renderer.refresh()).forget();
    }
}
