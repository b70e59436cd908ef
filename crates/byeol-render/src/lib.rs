//! Terminal rendering for the constellation simulation.
//!
//! Draws the particle field onto a ratatui braille canvas covering the
//! whole frame. Surface units map to braille dots: two per cell
//! horizontally, four per cell vertically.

use std::cell::RefCell;

use byeol_core::{Bounds, Constellation, Rgb, Surface, params};
use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Context, Line, Points},
};

/// Surface dimensions for a terminal area, in braille dots.
pub fn surface_bounds(area: Rect) -> Bounds {
    Bounds::of(f64::from(area.width) * 2.0, f64::from(area.height) * 4.0)
}

/// Run one simulation tick and render it onto the full frame.
///
/// `Canvas::paint` takes an `Fn` closure, so the mutable simulation state
/// is handed in behind `RefCell`s.
pub fn render(frame: &mut Frame, constellation: &RefCell<Constellation>, rng: &RefCell<impl Rng>) {
    let area = frame.area();
    let bounds = surface_bounds(area);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(to_color(params::BACKGROUND_COLOR))
        .x_bounds([0.0, bounds.width])
        .y_bounds([0.0, bounds.height])
        .paint(|ctx| {
            let mut surface = CanvasSurface { ctx };
            constellation
                .borrow_mut()
                .tick(bounds, &mut *rng.borrow_mut(), &mut surface);
        });

    frame.render_widget(canvas, area);
}

/// Map a simulation color onto a terminal color.
fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// [`Surface`] implementation over a ratatui canvas context.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self, _color: Rgb) {
        // The canvas background color repaints the full area before the
        // paint closure runs; nothing further to do here.
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        // Braille dots have no filled-arc primitive, so rasterize the disc
        // as a point cloud.
        let reach = radius.ceil() as i32;
        let mut coords = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let (fx, fy) = (f64::from(dx), f64::from(dy));
                if fx * fx + fy * fy <= radius * radius {
                    coords.push((x + fx, y + fy));
                }
            }
        }
        self.ctx.draw(&Points { coords: &coords, color: to_color(color) });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb, alpha: f64) {
        // Terminals have no alpha channel; fade toward the background
        // color instead.
        let faded = color.blend_over(params::BACKGROUND_COLOR, alpha);
        self.ctx.draw(&Line { x1, y1, x2, y2, color: to_color(faded) });
    }
}
