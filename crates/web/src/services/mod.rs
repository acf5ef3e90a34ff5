// =============================================================================
// Folio Web - UI Service Modules
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Module Init Interface
// =============================================================================

pub mod animation;
pub mod fragments;
pub mod icons;
pub mod navigation;
pub mod theme;

pub use animation::AnimationController;
pub use fragments::{FragmentLoader, FragmentSpec};
pub use icons::IconRenderer;
pub use navigation::NavigationController;
pub use theme::{Theme, ThemeController};

use thiserror::Error;

// -----------------------------------------------------------------------------
// 3. Module Init Interface
// -----------------------------------------------------------------------------

/// Error raised when a UI module fails to wire itself onto the document.
#[derive(Error, Debug, Clone)]
#[error("{module}: {message}")]
pub struct InitError {
    pub module: &'static str,
    pub message: String,
}

impl InitError {
    pub fn new(module: &'static str, message: impl Into<String>) -> Self {
        Self {
            module,
            message: message.into(),
        }
    }
}

/// Init interface shared by the modules the fragment loader brings up after
/// injecting shared markup.
///
/// `init` must tolerate running more than once: it re-queries element
/// references and reassigns module state instead of assuming a fresh
/// document, so the independent boot path and the post-injection path can
/// both call it.
pub trait Module {
    /// Module name used in log output.
    fn name(&self) -> &'static str;

    /// Wire the module against the current document state.
    fn init(&self) -> Result<(), InitError>;
}
