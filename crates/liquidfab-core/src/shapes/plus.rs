//! Plus icon drawn on top of the main button.

use crate::geometry::circle_point;
use kurbo::{BezPath, Point};
use peniko::Color;
use std::f64::consts::FRAC_PI_2;

/// Two crossing strokes, rotated as the button opens.
#[derive(Debug, Clone, Copy)]
pub struct PlusIcon {
    pub center: Point,
    /// Half the length of each stroke.
    pub radius: f64,
    /// Rotation in radians.
    pub rotation: f64,
    pub color: Color,
    pub line_width: f64,
}

impl PlusIcon {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            rotation: 0.0,
            color: Color::WHITE,
            line_width: 3.0,
        }
    }

    /// The four stroke endpoints, a quarter turn apart.
    pub fn points(&self) -> [Point; 4] {
        [0.0, 1.0, 2.0, 3.0].map(|k| circle_point(self.center, self.radius, FRAC_PI_2 * k + self.rotation))
    }

    /// Open path with one subpath per stroke.
    pub fn to_path(&self) -> BezPath {
        let p = self.points();
        let mut path = BezPath::new();
        path.move_to(p[0]);
        path.line_to(p[2]);
        path.move_to(p[1]);
        path.line_to(p[3]);
        path
    }
}
