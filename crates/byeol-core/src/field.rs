//! The particle registry and per-tick orchestration.

use rand::Rng;

use crate::link::Link;
use crate::params;
use crate::particle::Particle;
use crate::surface::{Bounds, Surface};

/// An ordered collection of particles plus the per-tick draw logic.
///
/// The collection is populated once at startup and never resized by the
/// animation loop; expired particles respawn in place.
#[derive(Debug, Default)]
pub struct Constellation {
    /// All live particles, in insertion order.
    particles: Vec<Particle>,
}

impl Constellation {
    /// Create an empty constellation.
    pub fn new() -> Self {
        Self { particles: Vec::new() }
    }

    /// Fill the registry with `count` randomly placed particles.
    pub fn populate(&mut self, count: usize, bounds: Bounds, rng: &mut impl Rng) {
        for _ in 0..count {
            self.push(Particle::spawn(bounds, rng));
        }
    }

    /// Append a particle.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the registry holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particle at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Iterate over all particles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Run one simulation-and-render tick.
    ///
    /// Strict order: clear the background, then age, move and draw every
    /// particle, then draw the links between the updated positions.
    pub fn tick(&mut self, bounds: Bounds, rng: &mut impl Rng, surface: &mut impl Surface) {
        surface.clear(params::BACKGROUND_COLOR);

        for particle in &mut self.particles {
            particle.tick_life(bounds, rng);
            particle.advance(bounds);
            particle.draw(surface);
        }

        self.draw_links(surface);
    }

    /// Brute-force link scan over every ordered pair.
    ///
    /// Both (i, j) and (j, i) are visited, so each close pair draws twice,
    /// once per direction. Self-pairs are skipped.
    fn draw_links(&self, surface: &mut impl Surface) {
        for i in 0..self.particles.len() {
            for j in 0..self.particles.len() {
                if i == j {
                    continue;
                }

                let link = Link::between(self.particles[i].position(), self.particles[j].position());
                if link.visible(params::LINK_DISTANCE) {
                    let (x1, y1, x2, y2) = link.endpoints();
                    surface.stroke_line(
                        x1,
                        y1,
                        x2,
                        y2,
                        params::PARTICLE_COLOR,
                        link.opacity(params::LINK_DISTANCE),
                    );
                }
            }
        }
    }
}
