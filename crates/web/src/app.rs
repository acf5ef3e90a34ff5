// =============================================================================
// Folio Web - Site Composition Root
// =============================================================================
// Table of Contents:
// 1. Site
// 2. Boot Sequencing
// =============================================================================

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::config::SiteConfig;
use crate::services::{
    AnimationController, FragmentLoader, IconRenderer, Module, NavigationController,
    ThemeController,
};
use crate::utils;

// -----------------------------------------------------------------------------
// 1. Site
// -----------------------------------------------------------------------------

/// The site's presentation layer: one instance of every UI service, wired
/// together here instead of through ambient globals.
pub struct Site {
    fragments: FragmentLoader,
    icons: Option<IconRenderer>,
    navigation: NavigationController,
    theme: ThemeController,
    animations: AnimationController,
}

impl Site {
    /// Construct the service singletons and resolve optional capabilities.
    ///
    /// Capability probing expects the host document's scripts to have run,
    /// so callers go through `launch` rather than constructing early.
    pub fn new(config: SiteConfig) -> Self {
        let icons = IconRenderer::detect();
        Self {
            fragments: FragmentLoader::new(config.fragment_base.clone()),
            navigation: NavigationController::new(),
            theme: ThemeController::new(&config, icons.clone()),
            animations: AnimationController::new(),
            icons,
        }
    }

    /// Build the composition root and boot it now, or once `DOMContentLoaded`
    /// fires if the document is still parsing.
    pub fn launch(config: SiteConfig) {
        if utils::document().ready_state() == "loading" {
            let once = Closure::once(move || Site::new(config).boot());
            let _ = utils::document()
                .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref());
            once.forget();
        } else {
            Site::new(config).boot();
        }
    }

    // -------------------------------------------------------------------------
    // 2. Boot Sequencing
    // -------------------------------------------------------------------------

    /// Bring every module up against the current document, then load the
    /// shared fragments and re-initialize against the injected markup.
    pub fn boot(self) {
        // Independent first pass, so the page works even if fragment loading
        // stalls. Module init is idempotent, so the post-injection pass below
        // is free to run it again.
        let modules: [&dyn Module; 3] = [&self.navigation, &self.theme, &self.animations];
        for module in modules {
            if let Err(err) = module.init() {
                log::warn!("{} init error: {}", module.name(), err);
            }
        }

        spawn_local(async move {
            let modules: [&dyn Module; 3] = [&self.navigation, &self.theme, &self.animations];
            self.fragments
                .init_common(self.icons.as_ref(), &modules)
                .await;
        });
    }
}
