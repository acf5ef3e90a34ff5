// =============================================================================
// Folio Web - Theme Controller
// =============================================================================
// Persisted light/dark preference, applied as a `dark` class on the document
// element.
// =============================================================================

use gloo_storage::{LocalStorage, Storage as _};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use super::{icons::IconRenderer, InitError, Module};
use crate::config::SiteConfig;
use crate::utils;

const DARK_CLASS: &str = "dark";
const TOGGLE_ID: &str = "theme-toggle";

// -----------------------------------------------------------------------------
// Theme Preference
// -----------------------------------------------------------------------------

/// Light/dark preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Absence and unrecognized values read as dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

// -----------------------------------------------------------------------------
// Theme Controller
// -----------------------------------------------------------------------------

/// Singleton owning the persisted theme preference and the root style flag.
#[derive(Clone)]
pub struct ThemeController {
    storage_key: String,
    icon_refresh_delay_ms: u32,
    icons: Option<IconRenderer>,
}

impl ThemeController {
    pub fn new(config: &SiteConfig, icons: Option<IconRenderer>) -> Self {
        Self {
            storage_key: config.theme_storage_key.clone(),
            icon_refresh_delay_ms: config.icon_refresh_delay_ms,
            icons,
        }
    }

    /// Read the persisted preference through the raw storage handle, so the
    /// stored value stays the literal `light`/`dark` string.
    fn load(&self) -> Theme {
        let stored = LocalStorage::raw().get_item(&self.storage_key).ok().flatten();
        Theme::from_stored(stored.as_deref())
    }

    fn persist(&self, theme: Theme) {
        let _ = LocalStorage::raw().set_item(&self.storage_key, theme.as_str());
    }

    /// Reflect a preference into the root style flag.
    fn apply(&self, theme: Theme) {
        if let Some(root) = utils::document().document_element() {
            let classes = root.class_list();
            let _ = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
        }
    }

    /// Whether the applied state is currently dark.
    pub fn is_dark(&self) -> bool {
        utils::document()
            .document_element()
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    /// Current applied theme.
    pub fn current(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Flip between light and dark, persisting the new value.
    pub fn toggle(&self) {
        let next = self.current().flipped();
        self.persist(next);
        self.apply(next);
        self.refresh_icons();
    }

    fn refresh_icons(&self) {
        if let Some(icons) = &self.icons {
            icons.refresh_after(self.icon_refresh_delay_ms);
        }
    }
}

impl Module for ThemeController {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn init(&self) -> Result<(), InitError> {
        self.apply(self.load());

        // The toggle control lives in the injected header, so a re-init after
        // fragment load is the path that usually wires it.
        if let Some(button) = utils::by_id(TOGGLE_ID) {
            if utils::mark_once(&button, "data-theme-wired") {
                let controller = self.clone();
                let on_click = Closure::<dyn FnMut()>::new(move || controller.toggle());
                button
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                    .map_err(|e| InitError::new("theme", format!("{:?}", e)))?;
                on_click.forget();
            }
        }

        self.refresh_icons();
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_unrecognized_values_read_as_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn storage_representation_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn double_flip_restores_the_original() {
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }
}
