use serde::{Deserialize, Serialize};

use gilib_core::Affine;

/// A 2D drawing surface with canvas-style immediate-mode primitives.
///
/// Rectangle calls take the two corners `(x1, y1)` and `(x2, y2)` exactly as
/// the caller authored them; backends map them onto their native form.
pub trait DrawSurface {
    /// Width in device pixels.
    fn width(&self) -> f64;
    /// Height in device pixels.
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn fill_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn stroke_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);

    /// Replace the current transform. Subsequent coordinates are mapped by it.
    fn set_transform(&mut self, transform: Affine);
}

/// Anything that can paint itself onto a surface.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    ClearRect { x1: f64, y1: f64, x2: f64, y2: f64 },
    FillRect { x1: f64, y1: f64, x2: f64, y2: f64 },
    StrokeRect { x1: f64, y1: f64, x2: f64, y2: f64 },
    FillStyle { style: String },
    StrokeStyle { style: String },
    LineWidth { width: f64 },
    Transform { matrix: [f64; 6] },
}

/// In-memory surface that records every call in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::ClearRect { x1, y1, x2, y2 });
    }

    fn fill_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::FillRect { x1, y1, x2, y2 });
    }

    fn stroke_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::StrokeRect { x1, y1, x2, y2 });
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::FillStyle {
            style: style.to_string(),
        });
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::StrokeStyle {
            style: style.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth { width });
    }

    fn set_transform(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::Transform {
            matrix: transform.as_array(),
        });
    }
}
