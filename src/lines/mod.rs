//! Raw Hough-style lines and their normalized two-point form.
//!
//! A line detector reports each line in normal form `(ρ, θ)`:
//! `x·cos θ + y·sin θ = ρ`. Normalization projects the foot point
//! `(ρ cos θ, ρ sin θ)` a fixed distance along the line direction in both
//! senses, giving two integer endpoints well outside the image frame. From
//! those endpoints we derive
//! - the pixel-space `gradient` (`dy/dx`, y pointing down),
//! - the physical `slope` (`-gradient`, "up" positive),
//! - the `x_intercept` where the line crosses the image reference row.
//!
//! Vertical lines (both endpoints share a column) have no slope and are
//! filtered here; horizontal lines survive normalization and are dropped by
//! the family classifier.

mod normalized;
mod raw;

pub use normalized::{normalize_line, NormalizedLine, PixelPoint};
pub use raw::RawLine;

/// Distance (pixels) each endpoint is projected from the foot point.
pub const DEFAULT_PROJECTION_DISTANCE: f64 = 1000.0;
