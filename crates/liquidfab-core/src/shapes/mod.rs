//! Drawable shapes: the circle model and the path records it shares with the engine.

mod circle;
mod plus;

pub use circle::Circle;
pub use plus::PlusIcon;

use kurbo::{BezPath, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Default button color (RGB 62, 83, 219).
pub const DEFAULT_COLOR: SerializableColor = SerializableColor::new(62, 83, 219, 255);

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Blend a color toward white by `scale` (0 = unchanged, 1 = white), fully opaque.
///
/// Used for the pressed state of the button and its cells.
pub fn whiten(color: Color, scale: f64) -> Color {
    let rgba = color.to_rgba8();
    let channel = |c: u8| {
        let c = f64::from(c) / 255.0;
        ((c + (1.0 - c) * scale).clamp(0.0, 1.0) * 255.0).round() as u8
    };
    Color::from_rgba8(channel(rgba.r), channel(rgba.g), channel(rgba.b), 255)
}

/// Same color with its alpha replaced (`alpha` in `[0, 1]`).
pub fn with_alpha(color: Color, alpha: f64) -> Color {
    let rgba = color.to_rgba8();
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, a)
}

/// Drop shadow applied to resting cells and the main button.
#[derive(Debug, Clone, Copy)]
pub struct Shadow {
    pub color: Color,
    pub radius: f64,
    pub opacity: f64,
    pub offset: kurbo::Vec2,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            radius: 2.0,
            opacity: 0.1,
            offset: kurbo::Vec2::new(4.0, 4.0),
        }
    }
}

/// A closed, filled path with its fill color.
#[derive(Debug, Clone)]
pub struct FilledPath {
    pub path: BezPath,
    pub color: Color,
}

impl FilledPath {
    pub fn new(path: BezPath, color: Color) -> Self {
        Self { path, color }
    }
}

/// Capability shared by everything that can be handed to a [`DrawTarget`].
pub trait Drawable {
    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Fill color.
    fn fill(&self) -> Color;

    /// Get the bounding box in local coordinates.
    fn bounds(&self) -> Rect;
}

impl Drawable for FilledPath {
    fn to_path(&self) -> BezPath {
        self.path.clone()
    }

    fn fill(&self) -> Color {
        self.color
    }

    fn bounds(&self) -> Rect {
        kurbo::Shape::bounding_box(&self.path)
    }
}

/// Sink for rendered geometry (the host UI layer, an SVG writer, a test recorder...).
pub trait DrawTarget {
    /// Fill a closed path.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke a path with round caps.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fill a path with a drop shadow underneath. Defaults to a plain fill.
    fn fill_path_with_shadow(&mut self, path: &BezPath, color: Color, _shadow: &Shadow) {
        self.fill_path(path, color);
    }

    /// Fill any [`Drawable`].
    fn draw(&mut self, shape: &dyn Drawable) {
        self.fill_path(&shape.to_path(), shape.fill());
    }
}
