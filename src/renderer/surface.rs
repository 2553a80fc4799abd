//! Immediate-mode 2D drawing surface
//! Everything the renderer draws goes through this trait, in plot-space coordinates
use glam::DVec2;

use crate::math::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: &'static str,
    pub size_px: f64,
}

impl TextStyle {
    /// CSS font shorthand, e.g. `24px Helvetica`
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// A host-provided 2D surface with a uniform scale transform.
///
/// Coordinates passed to the drawing calls are in plot space: device pixels divided by
/// the scale last set through [`DrawSurface::set_uniform_scale`].
pub trait DrawSurface {
    /// Whether the surface can still be drawn on. A discarded surface skips frames.
    fn is_available(&self) -> bool {
        true
    }

    /// Replace the current transform with a uniform scale; `1.0` is the identity
    fn set_uniform_scale(&mut self, scale: f64);

    fn clear_rect(&mut self, origin: DVec2, size: DVec2);

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64);

    /// Draw `text` with its baseline at `position`, centered horizontally on `position`
    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle, color: Color);
}
