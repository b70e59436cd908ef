//! Drawing surface abstraction.

use crate::color::Rgb;

/// Dimensions of the drawing surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from a width and height.
    pub fn of(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Drawing primitives the simulation renders through.
///
/// The terminal renderer implements this over a ratatui canvas; tests use a
/// recording implementation to observe the draw sequence.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Draw a filled circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);

    /// Draw a line segment from `(x1, y1)` to `(x2, y2)` with the given
    /// stroke alpha in `[0, 1]`.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb, alpha: f64);
}
