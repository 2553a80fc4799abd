//! `DrawSurface` backed by an egui painter
//! egui has no transform stack, so the uniform scale is applied to every shape here
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use glam::DVec2;

use super::surface::{DrawSurface, TextStyle};
use crate::math::Color;

pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    scale: f32,
}

impl<'a> EguiSurface<'a> {
    /// Paint into `rect`, whose top-left corner becomes the plot-space origin
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            scale: 1.0,
        }
    }

    /// Size of the painted area in whole points
    pub fn device_size(&self) -> (u32, u32) {
        (
            self.rect.width().max(0.0) as u32,
            self.rect.height().max(0.0) as u32,
        )
    }

    fn to_screen(&self, point: DVec2) -> Pos2 {
        self.rect.min + Vec2::new(point.x as f32, point.y as f32) * self.scale
    }

    fn to_screen_length(&self, length: f64) -> f32 {
        length as f32 * self.scale
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn set_uniform_scale(&mut self, scale: f64) {
        self.scale = scale as f32;
    }

    fn clear_rect(&mut self, _origin: DVec2, _size: DVec2) {
        // egui starts every frame from an empty canvas
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        let rect = Rect::from_min_max(self.to_screen(origin), self.to_screen(origin + size));
        self.painter
            .rect_filled(rect, CornerRadius::ZERO, Color32::from(color));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.painter.circle_filled(
            self.to_screen(center),
            self.to_screen_length(radius),
            Color32::from(color),
        );
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64) {
        self.painter.circle_stroke(
            self.to_screen(center),
            self.to_screen_length(radius),
            Stroke::new(self.to_screen_length(line_width), Color32::from(color)),
        );
    }

    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle, color: Color) {
        // Canvas text sits on its baseline, which egui approximates with the bottom edge
        self.painter.text(
            self.to_screen(position),
            Align2::CENTER_BOTTOM,
            text,
            FontId::proportional(self.to_screen_length(style.size_px)),
            Color32::from(color),
        );
    }
}
