// =============================================================================
// Folio Web - Site Configuration
// =============================================================================

/// Tunables for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Base path shared HTML fragments are fetched from.
    pub fragment_base: String,

    /// localStorage key holding the persisted theme preference.
    pub theme_storage_key: String,

    /// Delay before regenerating icon glyphs, letting style and layout
    /// settle after a theme change or fragment injection.
    pub icon_refresh_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fragment_base: "/components".to_string(),
            theme_storage_key: "theme".to_string(),
            icon_refresh_delay_ms: 50,
        }
    }
}
