// =============================================================================
// Folio Web - Particle Surface Driver
// =============================================================================
// Owns the canvas 2D rendering of a ParticleField and the animation-frame
// loop advancing it.
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::particles::{Particle, ParticleField};
use crate::utils;

/// White-tinted core brightness relative to the particle's base alpha.
const CORE_ALPHA_BOOST: f64 = 1.5;

/// Brand indigo the dots fade through.
const BRAND_RGB: &str = "99,102,241";

// -----------------------------------------------------------------------------
// Stop Token
// -----------------------------------------------------------------------------

/// Handle used to cancel a running render loop.
///
/// The loop checks it every frame; once stopped it simply does not
/// reschedule. Re-init stops the previous loop before starting a new one, so
/// stale loops never pile up against the same surface.
#[derive(Clone, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

// -----------------------------------------------------------------------------
// Particle Surface
// -----------------------------------------------------------------------------

/// Canvas-backed particle surface sized from its containing element.
pub struct ParticleSurface {
    canvas: HtmlCanvasElement,
    container: Element,
    context: CanvasRenderingContext2d,
    field: Rc<RefCell<ParticleField>>,
}

impl ParticleSurface {
    /// Attach to the canvas/container pair. Either element missing means the
    /// page has no animation surface, which is not an error.
    pub fn attach(canvas_id: &str, container_id: &str) -> Option<Self> {
        let canvas = utils::by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let container = utils::by_id(container_id)?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            container,
            context,
            field: Rc::new(RefCell::new(ParticleField::new())),
        })
    }

    /// Recompute the surface pixel size from the container's layout box.
    pub fn resize(&self) {
        let width = self.container.client_width().max(0) as u32;
        let height = self.container.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.borrow_mut().resize(width as f64, height as f64);
    }

    /// Throw away the current particle set and build a fresh one.
    pub fn create_particles(&self) {
        self.field.borrow_mut().repopulate(&mut js_sys::Math::random);
    }

    fn render_frame(&self) {
        let mut field = self.field.borrow_mut();
        field.step();
        self.context
            .clear_rect(0.0, 0.0, field.width(), field.height());
        for particle in field.particles() {
            self.draw_particle(particle);
        }
    }

    /// Soft dot: white-tinted center fading through the brand color to
    /// transparent at the particle's radius.
    fn draw_particle(&self, p: &Particle) {
        let gradient = match self
            .context
            .create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.radius)
        {
            Ok(gradient) => gradient,
            Err(_) => return,
        };
        let _ = gradient.add_color_stop(
            0.0,
            &format!("rgba(255,255,255,{})", p.alpha * CORE_ALPHA_BOOST),
        );
        let _ = gradient.add_color_stop(0.5, &format!("rgba({},{})", BRAND_RGB, p.alpha));
        let _ = gradient.add_color_stop(1.0, &format!("rgba({},0)", BRAND_RGB));
        self.context.begin_path();
        self.context.set_fill_style_canvas_gradient(&gradient);
        let _ = self
            .context
            .arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
        self.context.fill();
    }

    /// Size the surface, seed the first particle set, and start the
    /// self-rescheduling render loop.
    ///
    /// The returned token stops the loop; the loop also ends on its own once
    /// the canvas leaves the document.
    pub fn run(self) -> StopToken {
        let token = StopToken::new();
        let surface = Rc::new(self);

        surface.resize();
        surface.create_particles();

        // Full reset on window resize
        {
            let surface = surface.clone();
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                surface.resize();
                surface.create_particles();
            });
            let _ = utils::window()
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            on_resize.forget();
        }

        // The frame closure holds itself through this handle so it can keep
        // rescheduling; the Option exists only for the initial construction.
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_handle = frame.clone();
        let loop_token = token.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            if loop_token.is_stopped() || !surface.canvas.is_connected() {
                return;
            }
            surface.render_frame();
            request_frame(&frame_handle);
        }));
        request_frame(&frame);

        token
    }
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(closure) = frame.borrow().as_ref() {
        let _ = utils::window().request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
