use serde::{Deserialize, Serialize};

/// Line in Hough normal form as reported by the upstream detector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawLine {
    /// Signed distance from the image origin (pixels).
    pub rho: f64,
    /// Angle of the line normal (radians).
    pub theta: f64,
}

impl RawLine {
    pub fn new(rho: f64, theta: f64) -> Self {
        Self { rho, theta }
    }

    /// Unit normal `(cos θ, sin θ)`.
    #[inline]
    pub fn normal(&self) -> [f64; 2] {
        [self.theta.cos(), self.theta.sin()]
    }

    /// Closest point of the line to the image origin.
    #[inline]
    pub fn foot_point(&self) -> [f64; 2] {
        let [a, b] = self.normal();
        [a * self.rho, b * self.rho]
    }
}
