// =============================================================================
// Folio Web - Particle Field Model
// =============================================================================
// DOM-free particle state: sizing, population, and per-frame stepping. The
// canvas driver owns rendering.
// =============================================================================

/// Surface area, in square pixels, backing one particle.
const AREA_PER_PARTICLE: f64 = 60000.0;

/// Floor on the particle count, so small surfaces still get a visible field.
const MIN_PARTICLES: usize = 20;

/// Particles wrap to the opposite edge once they drift this far outside.
const WRAP_MARGIN: f64 = 10.0;

/// A single ambient particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
}

/// The live particle set for one animation surface.
///
/// At most one field is live per surface; `repopulate` replaces the whole
/// set rather than appending to it.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Particle count for a surface of the given dimensions.
    pub fn target_count(width: f64, height: f64) -> usize {
        MIN_PARTICLES.max(((width * height) / AREA_PER_PARTICLE).floor() as usize)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current particles, for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adopt new surface dimensions. The particle set is untouched; callers
    /// follow up with `repopulate` for the full reset.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Replace the whole particle set, sized for the current dimensions.
    ///
    /// `rand` supplies uniform values in `[0, 1)`.
    pub fn repopulate<R: FnMut() -> f64>(&mut self, rand: &mut R) {
        let count = Self::target_count(self.width, self.height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: rand() * self.width,
                y: rand() * self.height,
                radius: 1.0 + rand() * 3.0,
                vx: (rand() - 0.5) * 0.3,
                vy: (rand() - 0.5) * 0.3,
                alpha: 0.08 + rand() * 0.15,
            });
        }
    }

    /// Advance every particle one frame, wrapping toroidally at the margin.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < -WRAP_MARGIN {
                p.x = self.width + WRAP_MARGIN;
            }
            if p.x > self.width + WRAP_MARGIN {
                p.x = -WRAP_MARGIN;
            }
            if p.y < -WRAP_MARGIN {
                p.y = self.height + WRAP_MARGIN;
            }
            if p.y > self.height + WRAP_MARGIN {
                p.y = -WRAP_MARGIN;
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic [0,1) sequence for repopulation.
    fn cycle(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    fn lone(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            radius: 2.0,
            vx,
            vy,
            alpha: 0.1,
        }
    }

    fn field_with(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    #[test]
    fn count_has_a_floor_of_twenty() {
        assert_eq!(ParticleField::target_count(0.0, 0.0), 20);
        assert_eq!(ParticleField::target_count(100.0, 100.0), 20);
        // 1200 * 1000 / 60000 = 20 exactly
        assert_eq!(ParticleField::target_count(1200.0, 1000.0), 20);
    }

    #[test]
    fn count_scales_with_area() {
        // 1920 * 1080 = 2_073_600 -> floor(34.56)
        assert_eq!(ParticleField::target_count(1920.0, 1080.0), 34);
        assert_eq!(ParticleField::target_count(3000.0, 2000.0), 100);
    }

    #[test]
    fn repopulate_replaces_the_previous_set() {
        let mut field = ParticleField::new();
        field.resize(3000.0, 2000.0);
        field.repopulate(&mut cycle(&[0.5]));
        assert_eq!(field.len(), 100);

        // Shrinking follows the new dimensions' formula, not the old count
        field.resize(100.0, 100.0);
        field.repopulate(&mut cycle(&[0.5]));
        assert_eq!(field.len(), 20);
    }

    #[test]
    fn repopulated_particles_stay_in_their_ranges() {
        let mut field = ParticleField::new();
        field.resize(800.0, 600.0);
        field.repopulate(&mut cycle(&[0.0, 0.25, 0.5, 0.75, 0.999]));
        assert!(!field.is_empty());
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.vx >= -0.15 && p.vx < 0.15);
            assert!(p.vy >= -0.15 && p.vy < 0.15);
            assert!(p.alpha >= 0.08 && p.alpha < 0.23);
        }
    }

    #[test]
    fn step_advances_by_velocity() {
        let mut field = field_with(200.0, 100.0, vec![lone(50.0, 40.0, 0.1, -0.05)]);
        field.step();
        let p = &field.particles()[0];
        assert!((p.x - 50.1).abs() < 1e-9);
        assert!((p.y - 39.95).abs() < 1e-9);
    }

    #[test]
    fn step_wraps_toroidally_on_every_edge() {
        let mut field = field_with(
            200.0,
            100.0,
            vec![
                lone(-10.05, 50.0, -0.1, 0.0),  // leaves past the left margin
                lone(210.05, 50.0, 0.1, 0.0),   // right
                lone(100.0, -10.05, 0.0, -0.1), // top
                lone(100.0, 110.05, 0.0, 0.1),  // bottom
            ],
        );
        field.step();
        let ps = field.particles();
        assert_eq!(ps.len(), 4); // count is invariant across steps
        assert_eq!(ps[0].x, 210.0); // width + margin
        assert_eq!(ps[1].x, -10.0);
        assert_eq!(ps[2].y, 110.0); // height + margin
        assert_eq!(ps[3].y, -10.0);
    }

    #[test]
    fn steady_state_steps_never_change_the_count() {
        let mut field = ParticleField::new();
        field.resize(640.0, 480.0);
        field.repopulate(&mut cycle(&[0.1, 0.9, 0.4, 0.6]));
        let count = field.len();
        for _ in 0..1000 {
            field.step();
        }
        assert_eq!(field.len(), count);
        for p in field.particles() {
            assert!(p.x >= -10.0 && p.x <= 650.0);
            assert!(p.y >= -10.0 && p.y <= 490.0);
        }
    }
}
