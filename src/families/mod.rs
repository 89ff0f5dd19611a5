//! Slope-sign families with ordered near-duplicate suppression.
//!
//! Each normalized line is routed by the sign of its physical slope into one
//! of two [`LineFamily`] instances. A family keeps its members ascending by
//! x-intercept and rejects a candidate whose intercept is strictly closer
//! than the proximity threshold to any retained member. Arrival order
//! matters: the first detection of an edge wins, later near-duplicates are
//! dropped.
//!
//! Both scans (conflict check and insertion position) are linear, so a run
//! over `n` lines is O(n²). Line counts per diagram are in the tens.

mod classify;
mod family;

pub use classify::{classify, SlopeSign};
pub use family::{Insertion, LineFamily};

use crate::lines::NormalizedLine;

/// What happened to a line offered to [`LineFamilies::ingest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Routing {
    /// Zero slope; not part of any family.
    Horizontal,
    Family {
        sign: SlopeSign,
        insertion: Insertion,
    },
}

/// The positive- and negative-slope families of one run.
#[derive(Clone, Debug)]
pub struct LineFamilies {
    pub positive: LineFamily,
    pub negative: LineFamily,
}

impl LineFamilies {
    pub fn new(threshold: f64) -> Self {
        Self {
            positive: LineFamily::new(SlopeSign::Positive, threshold),
            negative: LineFamily::new(SlopeSign::Negative, threshold),
        }
    }

    pub fn family(&self, sign: SlopeSign) -> &LineFamily {
        match sign {
            SlopeSign::Positive => &self.positive,
            SlopeSign::Negative => &self.negative,
        }
    }

    pub fn family_mut(&mut self, sign: SlopeSign) -> &mut LineFamily {
        match sign {
            SlopeSign::Positive => &mut self.positive,
            SlopeSign::Negative => &mut self.negative,
        }
    }

    /// Classifies `line` and offers it to the matching family.
    pub fn ingest(&mut self, line: NormalizedLine) -> Routing {
        match classify(&line) {
            Some(sign) => Routing::Family {
                sign,
                insertion: self.family_mut(sign).insert(line),
            },
            None => Routing::Horizontal,
        }
    }
}
