//! `DrawSurface` backed by an HTML canvas 2D context
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{DrawSurface, TextStyle};
use crate::math::{Color, TAU};
use crate::{ExplorerError, ExplorerResult};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> ExplorerResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| surface_error("failed to get 2d context", &e))?
            .ok_or_else(|| {
                ExplorerError::SurfaceUnavailable("canvas has no 2d context".to_string())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                ExplorerError::SurfaceUnavailable("2d context has an unexpected type".to_string())
            })?;

        Ok(Self { canvas, context })
    }

    /// Match the canvas backing store to its container. Resizing a canvas resets its
    /// transform, which the next frame sets again.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn circle_path(&self, center: DVec2, radius: f64) -> bool {
        self.context.begin_path();
        match self.context.arc(center.x, center.y, radius.max(0.0), 0.0, TAU) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Canvas arc failed: {:?}", e);
                false
            }
        }
    }
}

fn surface_error(context: &str, error: &JsValue) -> ExplorerError {
    ExplorerError::SurfaceUnavailable(format!("{context}: {error:?}"))
}

impl DrawSurface for CanvasSurface {
    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }

    fn set_uniform_scale(&mut self, scale: f64) {
        if let Err(e) = self.context.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0) {
            log::warn!("Failed to set canvas transform: {:?}", e);
        }
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.context.clear_rect(origin.x, origin.y, size.x, size.y);
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        self.context.begin_path();
        self.context.rect(origin.x, origin.y, size.x, size.y);
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        if self.circle_path(center, radius) {
            self.context.set_fill_style_str(&color.to_css());
            self.context.fill();
        }
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64) {
        if self.circle_path(center, radius) {
            self.context.set_line_width(line_width);
            self.context.set_stroke_style_str(&color.to_css());
            self.context.stroke();
        }
    }

    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle, color: Color) {
        self.context.set_font(&style.css_font());
        self.context.set_text_align("center");
        self.context.set_fill_style_str(&color.to_css());
        if let Err(e) = self.context.fill_text(text, position.x, position.y) {
            log::debug!("Canvas text failed: {:?}", e);
        }
    }
}
