//! Fixed animation parameters.
//!
//! The classic constellation look: a hundred slow red particles joined by
//! lines that fade with distance. All values are build-time constants in
//! surface units (braille dots when rendered to a terminal).

use crate::color::Rgb;

/// Background fill color.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(17, 17, 19);

/// Particle and link color.
pub const PARTICLE_COLOR: Rgb = Rgb::new(255, 40, 40);

/// Particle radius.
pub const PARTICLE_RADIUS: f64 = 3.0;

/// Number of particles in the constellation.
pub const PARTICLE_COUNT: usize = 100;

/// Maximum particle speed per axis, in surface units per tick.
pub const MAX_VELOCITY: f64 = 0.5;

/// Maximum distance at which two particles are joined by a link.
pub const LINK_DISTANCE: f64 = 150.0;

/// Particle lifespan in seconds.
pub const LIFESPAN_SECONDS: f64 = 70.0;

/// Simulation ticks per second of lifespan.
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Particle lifespan in ticks.
pub const LIFESPAN_TICKS: f64 = LIFESPAN_SECONDS * TICKS_PER_SECOND;
