//! Simulation core for the byeol constellation animation.
//!
//! A fixed population of particles drifts across a bounded surface,
//! reflecting off the edges and respawning when their lifetime runs out.
//! Particles close to each other are joined by lines whose alpha fades
//! with distance. The core is renderer-agnostic: everything is drawn
//! through the [`Surface`] trait.

mod color;
mod field;
mod link;
pub mod params;
mod particle;
mod surface;

pub use color::Rgb;
pub use field::Constellation;
pub use link::Link;
pub use particle::Particle;
pub use surface::{Bounds, Surface};
