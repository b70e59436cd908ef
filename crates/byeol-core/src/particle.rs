//! A single moving point in the constellation.

use rand::Rng;

use crate::params;
use crate::surface::{Bounds, Surface};

/// A point particle with a velocity and a finite lifetime.
///
/// Particles are never destroyed; when the lifetime runs out the particle
/// is re-randomized in place and keeps going.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Current x position in surface units.
    x: f64,
    /// Current y position in surface units.
    y: f64,
    /// Velocity along the x axis, in surface units per tick.
    velocity_x: f64,
    /// Velocity along the y axis, in surface units per tick.
    velocity_y: f64,
    /// Remaining lifetime in ticks.
    life: f64,
}

impl Particle {
    /// Create a particle with fully randomized state within `bounds`.
    pub fn spawn(bounds: Bounds, rng: &mut impl Rng) -> Self {
        let mut particle = Self {
            x: 0.0,
            y: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            life: 0.0,
        };
        particle.respawn(bounds, rng);
        particle
    }

    /// Age the particle by one tick, respawning it when the lifetime runs
    /// out. Runs before [`advance`](Self::advance), so a just-respawned
    /// particle still moves on the same tick.
    pub fn tick_life(&mut self, bounds: Bounds, rng: &mut impl Rng) {
        if self.life < 1.0 {
            self.respawn(bounds, rng);
        } else {
            self.life -= 1.0;
        }
    }

    /// Advance the position by one velocity step, reflecting off the edges
    /// of `bounds`.
    ///
    /// The reflection check runs before the move, so a particle can sit at
    /// most one velocity step outside the surface until its next reflection.
    /// A surface that shrank since the last tick is handled the same way:
    /// stranded particles drift back in on their own.
    pub fn advance(&mut self, bounds: Bounds) {
        if (self.x + self.velocity_x > bounds.width && self.velocity_x > 0.0)
            || (self.x + self.velocity_x < 0.0 && self.velocity_x < 0.0)
        {
            self.velocity_x = -self.velocity_x;
        }
        if (self.y + self.velocity_y > bounds.height && self.velocity_y > 0.0)
            || (self.y + self.velocity_y < 0.0 && self.velocity_y < 0.0)
        {
            self.velocity_y = -self.velocity_y;
        }

        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Draw the particle as a filled dot.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.x, self.y, params::PARTICLE_RADIUS, params::PARTICLE_COLOR);
    }

    /// Current position in surface units.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Current velocity in surface units per tick.
    pub fn velocity(&self) -> (f64, f64) {
        (self.velocity_x, self.velocity_y)
    }

    /// Remaining lifetime in ticks.
    pub fn life(&self) -> f64 {
        self.life
    }

    fn respawn(&mut self, bounds: Bounds, rng: &mut impl Rng) {
        self.x = rng.gen_range(0.0..bounds.width);
        self.y = rng.gen_range(0.0..bounds.height);
        self.velocity_x = Self::random_velocity(rng);
        self.velocity_y = Self::random_velocity(rng);
        self.life = rng.gen_range(0.0..params::LIFESPAN_TICKS);
    }

    fn random_velocity(rng: &mut impl Rng) -> f64 {
        rng.gen_range(-params::MAX_VELOCITY..params::MAX_VELOCITY)
    }

    #[cfg(test)]
    pub(crate) fn with_state(x: f64, y: f64, velocity_x: f64, velocity_y: f64, life: f64) -> Self {
        Self { x, y, velocity_x, velocity_y, life }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const BOUNDS: Bounds = Bounds { width: 200.0, height: 120.0 };

    #[test]
    fn reflects_when_next_step_would_cross_the_right_edge() {
        let mut particle = Particle::with_state(199.75, 50.0, 0.5, 0.0, 100.0);
        particle.advance(BOUNDS);
        assert_eq!(particle.velocity(), (-0.5, 0.0));
        assert_eq!(particle.position(), (199.25, 50.0));
    }

    #[test]
    fn reflects_when_next_step_would_cross_the_top_edge() {
        let mut particle = Particle::with_state(50.0, 0.25, 0.0, -0.5, 100.0);
        particle.advance(BOUNDS);
        assert_eq!(particle.velocity(), (0.0, 0.5));
        assert_eq!(particle.position(), (50.0, 0.75));
    }

    #[test]
    fn moving_away_from_an_edge_does_not_reflect() {
        let mut particle = Particle::with_state(199.75, 50.0, -0.5, 0.0, 100.0);
        particle.advance(BOUNDS);
        assert_eq!(particle.velocity(), (-0.5, 0.0));
        assert_eq!(particle.position(), (199.25, 50.0));
    }

    #[test]
    fn stays_within_one_step_of_bounds_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particle = Particle::spawn(BOUNDS, &mut rng);
        for _ in 0..10_000 {
            particle.tick_life(BOUNDS, &mut rng);
            particle.advance(BOUNDS);
            let (x, y) = particle.position();
            assert!(x >= -params::MAX_VELOCITY && x <= BOUNDS.width + params::MAX_VELOCITY);
            assert!(y >= -params::MAX_VELOCITY && y <= BOUNDS.height + params::MAX_VELOCITY);
        }
    }

    #[test]
    fn life_decrements_by_one_per_tick() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut particle = Particle::with_state(10.0, 10.0, 0.1, 0.1, 5.0);
        particle.tick_life(BOUNDS, &mut rng);
        assert_eq!(particle.life(), 4.0);
    }

    #[test]
    fn expired_particle_respawns_with_fresh_state_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut particle = Particle::with_state(-5.0, -5.0, 9.0, 9.0, 0.5);
        particle.tick_life(BOUNDS, &mut rng);

        let (x, y) = particle.position();
        assert!((0.0..BOUNDS.width).contains(&x));
        assert!((0.0..BOUNDS.height).contains(&y));

        let (vx, vy) = particle.velocity();
        assert!((-params::MAX_VELOCITY..params::MAX_VELOCITY).contains(&vx));
        assert!((-params::MAX_VELOCITY..params::MAX_VELOCITY).contains(&vy));

        assert!((0.0..params::LIFESPAN_TICKS).contains(&particle.life()));
    }

    #[test]
    fn spawned_particles_start_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let particle = Particle::spawn(BOUNDS, &mut rng);
            let (x, y) = particle.position();
            assert!((0.0..BOUNDS.width).contains(&x));
            assert!((0.0..BOUNDS.height).contains(&y));
        }
    }
}
