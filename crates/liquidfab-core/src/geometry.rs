//! 2D point helpers used by the liquid engine.
//!
//! Plain arithmetic (add, subtract, scale, dot, cross, length) comes from
//! `kurbo::Point` / `kurbo::Vec2`. This module adds the interpolation and
//! intersection helpers the connector geometry is built from.

use kurbo::{Point, Vec2};

/// Minimum `|area + area2|` for [`intersection`] to report a crossing.
pub const INTERSECTION_EPSILON: f64 = 0.1;

/// Weighted blend of two points: `a * ratio + b * (1 - ratio)`.
///
/// Note the weight applies to `a`: `split(a, b, 1.0) == a`.
pub fn split(a: Point, b: Point, ratio: f64) -> Point {
    Point::new(
        a.x * ratio + b.x * (1.0 - ratio),
        a.y * ratio + b.y * (1.0 - ratio),
    )
}

/// Midpoint of two points.
pub fn mid(a: Point, b: Point) -> Point {
    split(a, b, 0.5)
}

/// Unit vector in the direction of `v`, or `None` for a zero vector.
pub fn normalized(v: Vec2) -> Option<Vec2> {
    let len = v.hypot();
    if len < f64::EPSILON {
        return None;
    }
    Some(v / len)
}

/// Intersection of the lines through `from → to` and `from2 → to2`.
///
/// Returns `None` when the lines are parallel or nearly so.
pub fn intersection(from: Point, to: Point, from2: Point, to2: Point) -> Option<Point> {
    intersection_with_tolerance(from, to, from2, to2, INTERSECTION_EPSILON)
}

/// [`intersection`] with an explicit degeneracy tolerance.
pub fn intersection_with_tolerance(
    from: Point,
    to: Point,
    from2: Point,
    to2: Point,
    tolerance: f64,
) -> Option<Point> {
    let ac = to - from;
    let bd = to2 - from2;
    let ab = from2 - from;
    let bc = to - from2;

    let area = bd.cross(ab);
    let area2 = bd.cross(bc);
    let denom = area + area2;

    if denom.abs() < tolerance {
        return None;
    }
    let ratio = area / denom;
    Some(from + ac * ratio)
}

/// Point on a circle of `radius` around `center` at angle `rad`.
pub fn circle_point(center: Point, radius: f64, rad: f64) -> Point {
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// `n` evenly spaced values from `from` to `to` inclusive.
pub fn lin_space(from: f64, to: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..n)
            .map(|i| (to - from) * i as f64 / (n - 1) as f64 + from)
            .collect(),
    }
}
