use crate::lines::NormalizedLine;
use serde::{Deserialize, Serialize};

/// Slope sign shared by every member of a line family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeSign {
    Positive,
    Negative,
}

impl SlopeSign {
    pub fn label(&self) -> &'static str {
        match self {
            SlopeSign::Positive => "positive",
            SlopeSign::Negative => "negative",
        }
    }
}

/// Routes a line by the sign of its physical slope. Horizontal (and NaN)
/// slopes carry no diamond-edge information and yield `None`.
#[inline]
pub fn classify(line: &NormalizedLine) -> Option<SlopeSign> {
    if line.slope > 0.0 {
        Some(SlopeSign::Positive)
    } else if line.slope < 0.0 {
        Some(SlopeSign::Negative)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(slope: f64) -> NormalizedLine {
        NormalizedLine {
            x_intercept: 0.0,
            slope,
            endpoint1: [0, 0],
            endpoint2: [1, 0],
        }
    }

    #[test]
    fn routes_by_slope_sign() {
        assert_eq!(classify(&line(0.5)), Some(SlopeSign::Positive));
        assert_eq!(classify(&line(-3.0)), Some(SlopeSign::Negative));
    }

    #[test]
    fn drops_horizontal_and_undefined() {
        assert_eq!(classify(&line(0.0)), None);
        assert_eq!(classify(&line(-0.0)), None);
        assert_eq!(classify(&line(f64::NAN)), None);
    }
}
