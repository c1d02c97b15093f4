//! Circle shape: the body the liquid engine connects.

use super::Drawable;
use crate::geometry::circle_point;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape, Vec2};
use peniko::Color;

/// Flattening tolerance for the disk path.
const PATH_TOLERANCE: f64 = 0.1;

/// A positioned, colored disk.
///
/// The filled disk path is cached and re-rendered whenever the center,
/// radius or color changes.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    color: Color,
    path: BezPath,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        let mut circle = Self {
            center,
            radius,
            color,
            path: BezPath::new(),
        };
        circle.redraw();
        circle
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
        self.redraw();
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.redraw();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.redraw();
    }

    /// Move the circle by a delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.set_center(self.center + delta);
    }

    /// Point on the boundary at angle `rad` (radians, measured from +x).
    pub fn circle_point(&self, rad: f64) -> Point {
        circle_point(self.center, self.radius, rad)
    }

    /// Check if a point lies inside the disk (boundary included).
    pub fn contains(&self, point: Point) -> bool {
        (point - self.center).hypot() <= self.radius
    }

    /// Distance between the two centers.
    pub fn distance_to(&self, other: &Circle) -> f64 {
        (other.center - self.center).hypot()
    }

    /// The cached disk path.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }

    fn redraw(&mut self) {
        self.path = self.as_kurbo().to_path(PATH_TOLERANCE);
    }
}

impl Drawable for Circle {
    fn to_path(&self) -> BezPath {
        self.path.clone()
    }

    fn fill(&self) -> Color {
        self.color
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point::new(x, y), r, Color::BLACK)
    }

    #[test]
    fn test_circle_point() {
        let c = circle(10.0, 10.0, 5.0);
        let p = c.circle_point(0.0);
        assert!((p.x - 15.0).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
        let p = c.circle_point(PI);
        assert!((p.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_setters_redraw_path() {
        let mut c = circle(0.0, 0.0, 10.0);
        let before = c.bounds();
        c.set_radius(20.0);
        let after = KurboShape::bounding_box(c.path());
        assert!((after.width() - 40.0).abs() < 0.5);
        assert!(before.width() < after.width());

        c.set_center(Point::new(100.0, 0.0));
        let moved = KurboShape::bounding_box(c.path());
        assert!((moved.center().x - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_translate() {
        let mut c = circle(1.0, 2.0, 3.0);
        c.translate(Vec2::new(4.0, -2.0));
        assert!((c.center().x - 5.0).abs() < f64::EPSILON);
        assert!(c.center().y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains() {
        let c = circle(0.0, 0.0, 10.0);
        assert!(c.contains(Point::new(10.0, 0.0)));
        assert!(!c.contains(Point::new(10.0, 1.0)));
    }

    #[test]
    fn test_bounds() {
        let c = circle(50.0, 50.0, 20.0);
        let bounds = c.bounds();
        assert!((bounds.x0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
