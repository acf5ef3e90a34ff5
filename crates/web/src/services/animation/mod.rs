// =============================================================================
// Folio Web - Animation Controller
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Animation Controller
// =============================================================================
// Drives the ambient particle canvas plus the parallax and tilt-card
// flourishes. Every subsystem degrades to a silent no-op when its target
// elements are missing.
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Submodules
// -----------------------------------------------------------------------------

mod canvas;
mod parallax;
pub mod particles;
mod tilt;

pub use particles::{Particle, ParticleField};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use canvas::{ParticleSurface, StopToken};

use super::{InitError, Module};

const CANVAS_ID: &str = "particles-canvas";
const HOME_ID: &str = "home";

// -----------------------------------------------------------------------------
// 2. Animation Controller
// -----------------------------------------------------------------------------

/// Singleton driving the decorative animation subsystems.
#[derive(Clone, Default)]
pub struct AnimationController {
    /// Token for the running particle loop; replaced wholesale on re-init.
    render_loop: Rc<RefCell<Option<StopToken>>>,
    /// Window-level parallax listeners survive re-init, so they wire once.
    parallax_wired: Rc<Cell<bool>>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self::default()
    }

    fn init_particles(&self) {
        // Cancel any loop from a previous init before attaching afresh
        if let Some(token) = self.render_loop.borrow_mut().take() {
            token.stop();
        }
        if let Some(surface) = ParticleSurface::attach(CANVAS_ID, HOME_ID) {
            *self.render_loop.borrow_mut() = Some(surface.run());
        }
    }

    fn init_parallax(&self) {
        if self.parallax_wired.get() {
            return;
        }
        if parallax::init(HOME_ID) {
            self.parallax_wired.set(true);
        }
    }
}

impl Module for AnimationController {
    fn name(&self) -> &'static str {
        "animations"
    }

    fn init(&self) -> Result<(), InitError> {
        self.init_particles();
        self.init_parallax();
        tilt::init_social_cards();
        tilt::init_project_cards();
        Ok(())
    }
}
