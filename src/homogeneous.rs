//! Homogeneous-coordinate helpers for pixel lines.
//!
//! A pixel point `(x, y)` lifts to `(x, y, 1)`; the line through two points is
//! their cross product and the meeting point of two lines is the cross
//! product of the lines. A zero third component means the lines meet at
//! infinity, i.e. they are parallel.
use crate::lines::PixelPoint;
use nalgebra::Vector3;
use serde::Serialize;

/// Outcome of intersecting two lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intersection {
    Point([f64; 2]),
    Parallel,
}

impl Intersection {
    /// Finite point, or `[+inf, +inf]` for parallel lines.
    pub fn to_point(self) -> [f64; 2] {
        match self {
            Intersection::Point(p) => p,
            Intersection::Parallel => [f64::INFINITY, f64::INFINITY],
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, Intersection::Parallel)
    }
}

#[inline]
pub fn lift(p: PixelPoint) -> Vector3<f64> {
    Vector3::new(f64::from(p[0]), f64::from(p[1]), 1.0)
}

/// Homogeneous line through `p` and `q`.
#[inline]
pub fn line_through(p: PixelPoint, q: PixelPoint) -> Vector3<f64> {
    lift(p).cross(&lift(q))
}

/// Meeting point of two homogeneous lines.
pub fn meet(l1: &Vector3<f64>, l2: &Vector3<f64>) -> Intersection {
    let v = l1.cross(l2);
    if v[2] == 0.0 {
        return Intersection::Parallel;
    }
    Intersection::Point([v[0] / v[2], v[1] / v[2]])
}

/// Intersection of the line through `a1`, `a2` with the line through `b1`, `b2`.
pub fn intersect_lines(
    a1: PixelPoint,
    a2: PixelPoint,
    b1: PixelPoint,
    b2: PixelPoint,
) -> Intersection {
    meet(&line_through(a1, a2), &line_through(b1, b2))
}
