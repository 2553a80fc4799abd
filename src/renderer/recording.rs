//! Surface that records draw calls instead of rasterizing them
//! Used for headless frame inspection and for exercising the renderer in tests
use glam::DVec2;

use super::surface::{DrawSurface, TextStyle};
use crate::math::Color;

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetScale(f64),
    ClearRect {
        origin: DVec2,
        size: DVec2,
    },
    FillRect {
        origin: DVec2,
        size: DVec2,
        color: Color,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        color: Color,
        line_width: f64,
    },
    FillText {
        text: String,
        position: DVec2,
        style: TextStyle,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    available: bool,
    scale: f64,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            available: true,
            scale: 1.0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain everything recorded so far, typically one frame's worth
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current transform scale
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Simulate the host discarding the surface
    pub fn discard(&mut self) {
        self.available = false;
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (DVec2, f64, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn stroked_circles(&self) -> impl Iterator<Item = (DVec2, f64, Color, f64)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
                line_width,
            } => Some((*center, *radius, *color, *line_width)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn is_available(&self) -> bool {
        self.available
    }

    fn set_uniform_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: Color, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            style: *style,
            color,
        });
    }
}
