//! Sub-button cells.

use crate::shapes::{Circle, DrawTarget, Drawable, Shadow, whiten, with_alpha};
use kurbo::{Point, Rect, RoundedRect, Shape as KurboShape};
use peniko::Color;

/// Fraction of the cell diameter used by its content.
const INTERNAL_RATIO: f64 = 0.75;

/// What a cell shows. The host UI resolves the name to an image or view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Image(String),
    View(String),
}

/// A circular sub-button revealed when the button opens.
#[derive(Debug, Clone)]
pub struct Cell {
    circle: Circle,
    content: CellContent,
    normal_color: Color,
    interactive: bool,
    shadow: bool,
    /// Signed fade from the last animation frame; negative while closing.
    fade: f64,
}

impl Cell {
    pub fn new(content: CellContent) -> Self {
        let color = Color::WHITE;
        Self {
            circle: Circle::new(Point::ZERO, 0.0, color),
            content,
            normal_color: color,
            interactive: false,
            shadow: false,
            fade: 0.0,
        }
    }

    pub fn image(name: impl Into<String>) -> Self {
        Self::new(CellContent::Image(name.into()))
    }

    pub fn view(label: impl Into<String>) -> Self {
        Self::new(CellContent::View(label.into()))
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    pub fn content(&self) -> &CellContent {
        &self.content
    }

    pub fn center(&self) -> Point {
        self.circle.center()
    }

    pub fn set_center(&mut self, center: Point) {
        self.circle.set_center(center);
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.circle.set_radius(radius);
    }

    pub fn color(&self) -> Color {
        self.normal_color
    }

    pub fn set_color(&mut self, color: Color) {
        self.normal_color = color;
        self.circle.set_color(color);
    }

    /// Pressed-state highlight.
    pub fn set_touching(&mut self, touching: bool) {
        let color = if touching {
            whiten(self.normal_color, 0.5)
        } else {
            self.normal_color
        };
        self.circle.set_color(color);
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    pub fn append_shadow(&mut self) {
        self.shadow = true;
    }

    pub fn erase_shadow(&mut self) {
        self.shadow = false;
    }

    /// Apply the content fade for animation progress `key`.
    pub fn update(&mut self, key: f64, open: bool) {
        let ratio = (2.0 * (key * key - 0.5)).max(0.0);
        self.fade = if open { ratio } else { -ratio };
    }

    /// Content opacity in `[0, 1]`.
    pub fn content_alpha(&self) -> f64 {
        self.fade.clamp(0.0, 1.0)
    }

    /// Frame of the content inside the disk.
    pub fn content_rect(&self) -> Rect {
        let half = self.radius() * INTERNAL_RATIO;
        Rect::from_center_size(self.center(), (half * 2.0, half * 2.0))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.circle.contains(point)
    }

    /// Draw the disk, then a placeholder for the content at its current opacity.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        if self.shadow {
            target.fill_path_with_shadow(self.circle.path(), self.circle.color(), &Shadow::default());
        } else {
            target.draw(&self.circle);
        }
        let alpha = self.content_alpha();
        if alpha > 0.0 {
            let rect = self.content_rect();
            let placeholder = RoundedRect::from_rect(rect, rect.width() * 0.2);
            target.fill_path(&placeholder.to_path(0.1), with_alpha(Color::WHITE, alpha));
        }
    }
}
