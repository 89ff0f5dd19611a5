use stability_diamonds::{ImageSize, RawLine};
use std::f64::consts::FRAC_PI_4;

pub const SIDE: usize = 512;
pub const REFERENCE_ROW: f64 = 255.0;

pub fn square_image() -> ImageSize {
    ImageSize::new(SIDE, SIDE).expect("non-empty image")
}

/// Hough line with normal angle `theta` passing through pixel `(x, y)`.
pub fn hough_through(x: f64, y: f64, theta: f64) -> RawLine {
    RawLine::new(x * theta.cos() + y * theta.sin(), theta)
}

/// Edge rising left to right (pixel gradient -1) crossing the reference row at `x`.
pub fn rising_edge(x: f64) -> RawLine {
    hough_through(x, REFERENCE_ROW, FRAC_PI_4)
}

/// Edge falling left to right (pixel gradient +1) crossing the reference row at `x`.
pub fn falling_edge(x: f64) -> RawLine {
    hough_through(x, REFERENCE_ROW, 3.0 * FRAC_PI_4)
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
