//! Liquid connector engine.
//!
//! Given two circles, the engine decides whether they are close enough to
//! merge and, if so, emits one or two filled outlines that approximate the
//! membrane of a liquid bridge between them:
//!
//! - above `angle_thresh` the circles are joined by a single lens-shaped
//!   path whose waist is pulled toward the crossing of the tangent chords,
//!   controlled by `viscosity`;
//! - between 0 and `angle_thresh` the bridge has snapped and each circle
//!   grows a small bulge reaching toward the other.
//!
//! The engine assumes every circle it sees shares one color.

use crate::geometry::{deg_to_rad, intersection, mid, split};
use crate::layer::ShapeLayer;
use crate::shapes::{Circle, DrawTarget, FilledPath};
use kurbo::{BezPath, Point};
use log::trace;
use peniko::Color;
use std::f64::consts::FRAC_PI_2;

/// Ratio below which split bulges sit on the crossing point.
pub const CONNECT_THRESH: f64 = 0.3;

/// Half-angle of the split-branch chords, in degrees.
pub const SPLIT_ANGLE_DEGREES: f64 = 60.0;

pub const DEFAULT_ANGLE_THRESH: f64 = 0.5;
pub const DEFAULT_VISCOSITY: f64 = 0.65;
pub const DEFAULT_ANGLE_OPEN: f64 = 1.0;

/// Connector engine with its shape layer.
#[derive(Debug, Clone)]
pub struct LiquidEngine {
    radius_thresh: f64,
    pub angle_thresh: f64,
    pub viscosity: f64,
    pub angle_open: f64,
    color: Color,
    layer: ShapeLayer,
}

impl LiquidEngine {
    /// Create an engine. A negative `radius_thresh` is treated as 0.
    pub fn new(radius_thresh: f64, angle_thresh: f64) -> Self {
        Self {
            radius_thresh: radius_thresh.max(0.0),
            angle_thresh,
            viscosity: DEFAULT_VISCOSITY,
            angle_open: DEFAULT_ANGLE_OPEN,
            color: Color::from_rgba8(255, 0, 0, 255),
            layer: ShapeLayer::new(),
        }
    }

    pub fn with_viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = viscosity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn radius_thresh(&self) -> f64 {
        self.radius_thresh
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn layer(&self) -> &ShapeLayer {
        &self.layer
    }

    /// Add the connector shapes for `circle`/`other` to the layer.
    ///
    /// Returns the number of shapes added (0, 1 or 2).
    pub fn push(&mut self, circle: &Circle, other: &Circle) -> usize {
        let Some(paths) = self.generate_connected_path(circle, other) else {
            return 0;
        };
        let count = paths.len();
        for path in paths {
            self.layer.push(FilledPath::new(path, self.color));
        }
        trace!("liquid engine pushed {count} shape(s)");
        count
    }

    /// Discard every accumulated shape.
    pub fn clear(&mut self) {
        self.layer.clear();
    }

    /// Hand the accumulated shapes to a draw target.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        self.layer.draw(target);
    }

    /// Whether the gap between the two circles is below `radius_thresh`.
    pub fn is_connected(&self, circle: &Circle, other: &Circle) -> bool {
        let distance = circle.distance_to(other);
        distance - circle.radius() - other.radius() < self.radius_thresh
    }

    /// Blend ratio in `[0, 1]`; 1 means deeply merged.
    pub fn circle_ratio(&self, circle: &Circle, other: &Circle) -> f64 {
        let distance = circle.distance_to(other);
        let ratio = 1.0
            - (distance - self.radius_thresh)
                / (circle.radius() + other.radius() + self.radius_thresh);
        ratio.clamp(0.0, 1.0)
    }

    /// Connector outlines for a pair, or `None` when the pair contributes nothing.
    pub fn generate_connected_path(&self, circle: &Circle, other: &Circle) -> Option<Vec<BezPath>> {
        if !self.is_connected(circle, other) {
            return None;
        }
        let ratio = self.circle_ratio(circle, other);
        if (self.angle_thresh..=1.0).contains(&ratio) {
            self.normal_path(circle, other).map(|path| vec![path])
        } else if (0.0..self.angle_thresh).contains(&ratio) {
            let parts = self.split_path(circle, other, ratio);
            if parts.is_empty() { None } else { Some(parts) }
        } else {
            None
        }
    }

    /// Boundary points at `±angle` around the direction toward `other`.
    fn connected_points_at(circle: &Circle, other: &Circle, angle: f64) -> (Point, Point) {
        let radian = (other.center() - circle.center()).atan2();
        (circle.circle_point(radian + angle), circle.circle_point(radian - angle))
    }

    /// Boundary points whose spread widens as the circles merge.
    fn connected_points(&self, circle: &Circle, other: &Circle) -> (Point, Point) {
        let ratio = self.circle_ratio(circle, other);
        let ratio = (ratio + CONNECT_THRESH) / (1.0 + CONNECT_THRESH);
        let angle = FRAC_PI_2 * self.angle_open * ratio;
        Self::connected_points_at(circle, other, angle)
    }

    fn normal_path(&self, circle: &Circle, other: &Circle) -> Option<BezPath> {
        let (p1, p2) = self.connected_points(circle, other);
        let (p3, p4) = self.connected_points(other, circle);
        let crossed = intersection(p1, p3, p2, p4)?;

        let r = self.circle_ratio(circle, other);
        let rate = (1.0 - r) / (1.0 - self.angle_thresh) * self.viscosity;
        // Each edge bows from its chord midpoint toward the crossing point.
        let r1 = mid(p2, p3);
        let r2 = mid(p1, p4);
        let ctrl = split(mid(r1, crossed), r2, rate);
        let ctrl2 = split(mid(r2, crossed), r1, rate);

        let mut path = BezPath::new();
        path.move_to(p1);
        path.quad_to(ctrl, p4);
        path.line_to(p3);
        path.quad_to(ctrl2, p2);
        path.close_path();
        Some(path)
    }

    fn split_path(&self, circle: &Circle, other: &Circle, ratio: f64) -> Vec<BezPath> {
        let angle = deg_to_rad(SPLIT_ANGLE_DEGREES);
        let (p1, p2) = Self::connected_points_at(circle, other, angle);
        let (p3, p4) = Self::connected_points_at(other, circle, angle);
        let Some(crossed) = intersection(p1, p3, p2, p4) else {
            return Vec::new();
        };

        let (d1, _) = Self::connected_points_at(circle, other, 0.0);
        let (d2, _) = Self::connected_points_at(other, circle, 0.0);
        let r = (ratio - CONNECT_THRESH) / (self.angle_thresh - CONNECT_THRESH);
        let weight = r * r;

        let bulge = |from: Point, to: Point, ctrl: Point| {
            let mut path = BezPath::new();
            path.move_to(from);
            path.quad_to(ctrl, to);
            path.close_path();
            path
        };
        vec![
            bulge(p1, p2, split(d2, crossed, weight)),
            bulge(p3, p4, split(d1, crossed, weight)),
        ]
    }
}
