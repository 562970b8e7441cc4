//! Draw commands handed to the host's immediate-mode canvas

use serde::{Deserialize, Serialize};

use crate::Vector2;

/// 8-bit RGBA stroke colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a fractional alpha, clamped to 0..=255
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: alpha.clamp(0.0, 255.0) as u8,
            ..self
        }
    }
}

/// Colors for map and view elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(10, 30, 60);
    pub const WALL: Color = Color::rgb(255, 255, 255);
    pub const FRAME: Color = Color::rgb(255, 255, 255);
    pub const BAIT: Color = Color::rgb(255, 0, 0);
    pub const CHEESE: Color = Color::rgb(255, 255, 0);
    pub const PLAYER: Color = Color::rgb(255, 255, 0);
    pub const BEAM: Color = Color::rgba(255, 255, 0, 50);
    pub const HIT_POINT: Color = Color::rgb(255, 255, 0);
    pub const SCORE: Color = Color::rgb(255, 255, 255);
}

/// Stroke weights
pub mod weights {
    pub const MAP_LINE: f64 = 3.0;
    pub const BAIT: f64 = 5.0;
    pub const PLAYER: f64 = 20.0;
    pub const BEAM: f64 = 2.0;
    pub const HIT_POINT: f64 = 10.0;
    pub const FRAME: f64 = 8.0;
    pub const WALL_SLICE: f64 = 5.0;
    pub const CHEESE_SLICE: f64 = 7.0;
    pub const TEXT: f64 = 3.0;
}

/// One immediate-mode drawing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear { color: Color },
    Line {
        from: Vector2,
        to: Vector2,
        color: Color,
        weight: f64,
    },
    Point {
        at: Vector2,
        color: Color,
        weight: f64,
    },
    /// Outlined, unfilled rectangle
    Rect {
        origin: Vector2,
        size: Vector2,
        color: Color,
        weight: f64,
    },
    Text {
        text: String,
        at: Vector2,
        size: f64,
        color: Color,
        weight: f64,
    },
}

impl DrawCommand {
    pub fn line(from: Vector2, to: Vector2, color: Color, weight: f64) -> Self {
        Self::Line {
            from,
            to,
            color,
            weight,
        }
    }

    pub fn point(at: Vector2, color: Color, weight: f64) -> Self {
        Self::Point { at, color, weight }
    }
}
