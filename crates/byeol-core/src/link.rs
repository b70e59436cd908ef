//! Distance probe between two particle positions.

/// A candidate line between two positions.
///
/// Links carry no identity: they are recomputed for every ordered pair on
/// every tick and nothing about them survives the frame.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    length: f64,
}

impl Link {
    /// Probe the segment between two positions.
    pub fn between(a: (f64, f64), b: (f64, f64)) -> Self {
        let (x1, y1) = a;
        let (x2, y2) = b;
        let length = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        Self { x1, y1, x2, y2, length }
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Whether the endpoints are close enough for the link to be drawn.
    pub fn visible(&self, threshold: f64) -> bool {
        self.length < threshold
    }

    /// Stroke alpha for a visible link: approaches 1 at zero distance and 0
    /// at `threshold`. Only meaningful when [`visible`](Self::visible) holds.
    pub fn opacity(&self, threshold: f64) -> f64 {
        1.0 - self.length / threshold
    }

    /// Segment endpoints as `(x1, y1, x2, y2)`.
    pub fn endpoints(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }
}
