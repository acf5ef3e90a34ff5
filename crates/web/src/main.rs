// =============================================================================
// Folio Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use folio_web::{Site, SiteConfig};

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logger (ignore if already initialized by wasm_bindgen start)
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Folio Web...");

    // Wire the UI controllers onto the host document
    Site::launch(SiteConfig::default());
}
