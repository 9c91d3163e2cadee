//! Particle set and per-tick update rules.

use rand::Rng;
use tracing::debug;

use crate::config::FieldConfig;

/// A single drifting sprite. Radius, velocity and opacity are drawn once at
/// spawn and never change; only the position is mutated by [`Field::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

/// An ordered set of particles bound to a rectangular surface.
///
/// The whole set is generated once at spawn; particles are never added or
/// removed afterwards. `active` is the cooperative stop flag: the hosting
/// frame loop reads it before every pass, and [`Field::tick`] becomes a
/// no-op once it is cleared.
#[derive(Clone, Debug)]
pub struct Field {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    active: bool,
}

impl Field {
    /// Spawn `config.count` particles with independently sampled position,
    /// radius, velocity and opacity. Positions are uniform over
    /// `[0, width) x [0, height)`; particles are not coupled in any way, so
    /// generation order has no effect on the distribution.
    pub fn spawn(config: &FieldConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                radius: rng.gen_range(config.radius.clone()),
                dx: rng.gen_range(config.drift_x.clone()),
                dy: rng.gen_range(config.drift_y.clone()),
                opacity: rng.gen_range(config.opacity.clone()),
            })
            .collect();
        debug!(count = config.count, width, height, "field spawned");
        Self {
            particles,
            width,
            height,
            active: true,
        }
    }

    /// Build a field from explicit particles. Deterministic alternative to
    /// [`Field::spawn`] for callers that already know the layout.
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
            active: true,
        }
    }

    /// Advance every particle one velocity step and wrap edge crossings.
    ///
    /// The wrap is a hard edge reset, not a modulo: a particle that leaves
    /// through one edge reappears exactly on the opposite boundary the same
    /// frame it crosses. Comparisons are strict, so a particle landing
    /// precisely on an edge stays there until the next step carries it over.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;
            if p.x < 0.0 {
                p.x = self.width;
            }
            if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            }
            if p.y > self.height {
                p.y = 0.0;
            }
        }
    }

    /// Run one draw+update pass if the field is still active: the draw
    /// callback sees the current positions, then every particle advances
    /// one step. Returns whether the pass ran, which the frame loop uses
    /// to decide on rescheduling. A stopped field draws nothing.
    pub fn render_pass(&mut self, draw: impl FnOnce(&Self)) -> bool {
        if !self.active {
            return false;
        }
        draw(self);
        self.tick();
        true
    }

    /// Update the surface bounds after a viewport resize. Particles keep
    /// their coordinates and wrap against the new bounds on their next edge
    /// crossing; nothing is regenerated or repositioned.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Clear the active flag. Idempotent; safe to call any number of times.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            debug!(count = self.particles.len(), "field stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    const W: f64 = 100.0;
    const H: f64 = 100.0;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn one(x: f64, y: f64, dx: f64, dy: f64) -> Field {
        Field::from_particles(
            vec![Particle {
                x,
                y,
                radius: 2.0,
                dx,
                dy,
                opacity: 0.3,
            }],
            W,
            H,
        )
    }

    #[test]
    fn spawn_positions_are_inside_the_half_open_bounds() {
        let field = Field::spawn(&FieldConfig::page(), 640.0, 360.0, &mut rng());
        for p in field.particles() {
            assert!((0.0..640.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..360.0).contains(&p.y), "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn spawn_samples_within_the_configured_ranges() {
        let config = FieldConfig::section();
        let field = Field::spawn(&config, W, H, &mut rng());
        for p in field.particles() {
            assert!(config.radius.contains(&p.radius));
            assert!(config.drift_x.contains(&p.dx));
            assert!(config.drift_y.contains(&p.dy));
            assert!(config.opacity.contains(&p.opacity));
        }
    }

    #[test]
    fn spawn_creates_exactly_the_configured_count() {
        let field = Field::spawn(&FieldConfig::page(), W, H, &mut rng());
        assert_eq!(field.len(), 48);
    }

    #[test]
    fn positions_stay_bounded_across_many_ticks() {
        let mut field = Field::spawn(&FieldConfig::section(), W, H, &mut rng());
        for _ in 0..10_000 {
            field.tick();
            for p in field.particles() {
                // A left/top crossing parks the particle exactly on the far
                // boundary for one frame, so the closed interval is the
                // invariant here; the half-open one holds at spawn.
                assert!((0.0..=W).contains(&p.x), "x escaped: {}", p.x);
                assert!((0.0..=H).contains(&p.y), "y escaped: {}", p.y);
            }
        }
    }

    #[test]
    fn only_position_changes_across_ticks() {
        let mut field = Field::spawn(&FieldConfig::section(), W, H, &mut rng());
        let before = field.particles().to_vec();
        for _ in 0..500 {
            field.tick();
        }
        for (a, b) in before.iter().zip(field.particles()) {
            assert_eq!(a.radius, b.radius);
            assert_eq!(a.dx, b.dx);
            assert_eq!(a.dy, b.dy);
            assert_eq!(a.opacity, b.opacity);
        }
    }

    #[test]
    fn right_edge_crossing_resets_to_zero() {
        // x = 98 + 5 = 103 > 100, so the wrap is a hard reset to 0, not
        // 103 mod 100.
        let mut field = one(98.0, 50.0, 5.0, 0.0);
        field.tick();
        assert_eq!(field.particles()[0].x, 0.0);
        assert_eq!(field.particles()[0].y, 50.0);
    }

    #[test]
    fn left_edge_crossing_resets_to_width() {
        let mut field = one(1.0, 50.0, -5.0, 0.0);
        field.tick();
        assert_eq!(field.particles()[0].x, W);
    }

    #[test]
    fn bottom_edge_crossing_resets_to_zero() {
        let mut field = one(50.0, 99.0, 0.0, 3.0);
        field.tick();
        assert_eq!(field.particles()[0].y, 0.0);
    }

    #[test]
    fn top_edge_crossing_resets_to_height() {
        let mut field = one(50.0, 1.0, 0.0, -3.0);
        field.tick();
        assert_eq!(field.particles()[0].y, H);
    }

    #[test]
    fn landing_exactly_on_the_edge_does_not_wrap() {
        // Strict comparison: x = 95 + 5 = 100 is not > 100 yet.
        let mut field = one(95.0, 50.0, 5.0, 0.0);
        field.tick();
        assert_eq!(field.particles()[0].x, W);
        // The next step carries it over and triggers the reset.
        field.tick();
        assert_eq!(field.particles()[0].x, 0.0);
    }

    #[test]
    fn zero_velocity_particles_never_move() {
        let particles: Vec<Particle> = (0..48)
            .map(|i| Particle {
                x: f64::from(i),
                y: f64::from(i),
                radius: 2.0,
                dx: 0.0,
                dy: 0.0,
                opacity: 0.2,
            })
            .collect();
        let mut field = Field::from_particles(particles.clone(), W, H);
        for _ in 0..1000 {
            field.tick();
        }
        assert_eq!(field.particles(), &particles[..]);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut field = Field::spawn(&FieldConfig::section(), W, H, &mut rng());
        field.stop();
        let after_first = field.particles().to_vec();
        field.stop();
        assert!(!field.is_active());
        assert_eq!(field.particles(), &after_first[..]);
    }

    #[test]
    fn tick_after_stop_leaves_positions_untouched() {
        let mut field = one(50.0, 50.0, 5.0, 5.0);
        field.stop();
        field.tick();
        assert_eq!(field.particles()[0].x, 50.0);
        assert_eq!(field.particles()[0].y, 50.0);
    }

    #[test]
    fn stop_before_the_first_pass_draws_nothing() {
        // A field torn down before its first scheduled frame fires must
        // never reach the draw callback.
        let mut field = Field::spawn(&FieldConfig::section(), W, H, &mut rng());
        field.stop();
        let mut draws = 0;
        let ran = field.render_pass(|_| draws += 1);
        assert!(!ran);
        assert_eq!(draws, 0);
    }

    #[test]
    fn active_pass_draws_once_then_advances() {
        let mut field = one(98.0, 50.0, 5.0, 0.0);
        let mut draws = 0;
        let ran = field.render_pass(|f| {
            draws += 1;
            // The draw callback sees the pre-step position.
            assert_eq!(f.particles()[0].x, 98.0);
        });
        assert!(ran);
        assert_eq!(draws, 1);
        assert_eq!(field.particles()[0].x, 0.0);
    }

    #[test]
    fn resize_changes_only_the_bounds() {
        let mut field = Field::spawn(&FieldConfig::section(), W, H, &mut rng());
        let before = field.particles().to_vec();
        field.resize(250.0, 75.0);
        assert_eq!(field.width(), 250.0);
        assert_eq!(field.height(), 75.0);
        assert_eq!(field.len(), before.len());
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn particles_outside_shrunk_bounds_wrap_on_their_next_crossing() {
        // Shrinking does not reclip: a particle at x = 90 survives a resize
        // to width 50 and wraps once its own drift carries it past the new
        // right edge.
        let mut field = one(90.0, 10.0, 4.0, 0.0);
        field.resize(50.0, 50.0);
        assert_eq!(field.particles()[0].x, 90.0);
        field.tick();
        assert_eq!(field.particles()[0].x, 0.0);
    }
}
