use super::SlopeSign;
use crate::lines::NormalizedLine;

/// Outcome of offering a candidate line to a [`LineFamily`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Insertion {
    /// Stored at `index` in ascending intercept order.
    Accepted { index: usize },
    /// Within the threshold of an already retained member.
    Rejected { blocking_intercept: f64 },
}

impl Insertion {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Insertion::Accepted { .. })
    }
}

/// Lines of one slope sign, ascending by x-intercept, with near-duplicates
/// suppressed on arrival.
///
/// Intercepts and full line records are kept as parallel sequences so the
/// intercept scans stay on a dense `Vec<f64>`. Acceptance is
/// first-come-first-served: a candidate is rejected if *any* retained member
/// lies strictly closer than `threshold`, so no two retained members are ever
/// within the threshold of each other.
#[derive(Clone, Debug)]
pub struct LineFamily {
    sign: SlopeSign,
    threshold: f64,
    intercepts: Vec<f64>,
    lines: Vec<NormalizedLine>,
}

impl LineFamily {
    pub fn new(sign: SlopeSign, threshold: f64) -> Self {
        Self {
            sign,
            threshold,
            intercepts: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn sign(&self) -> SlopeSign {
        self.sign
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Retained x-intercepts, ascending.
    pub fn intercepts(&self) -> &[f64] {
        &self.intercepts
    }

    /// Retained lines, in the same order as [`Self::intercepts`].
    pub fn lines(&self) -> &[NormalizedLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&NormalizedLine> {
        self.lines.get(index)
    }

    pub fn last(&self) -> Option<&NormalizedLine> {
        self.lines.last()
    }

    pub fn into_lines(self) -> Vec<NormalizedLine> {
        self.lines
    }

    /// Offers `candidate` to the family. Rejected candidates leave the family
    /// untouched.
    pub fn insert(&mut self, candidate: NormalizedLine) -> Insertion {
        let x = candidate.x_intercept;
        if let Some(blocking) = self.conflicting_intercept(x) {
            return Insertion::Rejected {
                blocking_intercept: blocking,
            };
        }
        let index = self.insertion_index(x);
        self.intercepts.insert(index, x);
        self.lines.insert(index, candidate);
        Insertion::Accepted { index }
    }

    /// First retained intercept (ascending) strictly within the threshold of `x`.
    pub fn conflicting_intercept(&self, x: f64) -> Option<f64> {
        self.intercepts
            .iter()
            .copied()
            .find(|&member| (x - member).abs() < self.threshold)
    }

    /// Position before the first intercept greater than `x`, or the end.
    fn insertion_index(&self, x: f64) -> usize {
        self.intercepts
            .iter()
            .position(|&member| member > x)
            .unwrap_or(self.intercepts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_at(x_intercept: f64) -> NormalizedLine {
        NormalizedLine {
            x_intercept,
            slope: 1.0,
            endpoint1: [0, 0],
            endpoint2: [1, -1],
        }
    }

    fn family(xs: &[f64]) -> LineFamily {
        let mut fam = LineFamily::new(SlopeSign::Positive, 20.0);
        for &x in xs {
            fam.insert(line_at(x));
        }
        fam
    }

    #[test]
    fn first_candidate_lands_at_front() {
        let mut fam = LineFamily::new(SlopeSign::Negative, 20.0);
        assert_eq!(fam.insert(line_at(42.0)), Insertion::Accepted { index: 0 });
        assert_eq!(fam.intercepts(), &[42.0]);
    }

    #[test]
    fn keeps_ascending_order_regardless_of_arrival() {
        let fam = family(&[100.0, 50.0, 200.0, 150.0, 0.0]);
        assert_eq!(fam.intercepts(), &[0.0, 50.0, 100.0, 150.0, 200.0]);
        let from_lines: Vec<f64> = fam.lines().iter().map(|l| l.x_intercept).collect();
        assert_eq!(from_lines, fam.intercepts());
    }

    #[test]
    fn largest_candidate_is_appended() {
        let mut fam = family(&[10.0, 60.0]);
        assert_eq!(fam.insert(line_at(90.0)), Insertion::Accepted { index: 2 });
        assert_eq!(fam.intercepts(), &[10.0, 60.0, 90.0]);
    }

    #[test]
    fn rejects_near_duplicate_without_mutation() {
        let mut fam = family(&[100.0, 200.0]);
        let outcome = fam.insert(line_at(188.5));
        assert_eq!(
            outcome,
            Insertion::Rejected {
                blocking_intercept: 200.0
            }
        );
        assert_eq!(fam.intercepts(), &[100.0, 200.0]);
        assert_eq!(fam.len(), 2);
    }

    #[test]
    fn exact_threshold_distance_is_accepted() {
        let mut fam = family(&[100.0, 150.0]);
        assert_eq!(fam.insert(line_at(130.0)), Insertion::Accepted { index: 1 });
        assert_eq!(fam.intercepts(), &[100.0, 130.0, 150.0]);
    }

    #[test]
    fn chain_checks_every_retained_member() {
        // 15 is too close to 0; 30 is then checked against 0 only.
        let fam = family(&[0.0, 15.0, 30.0, 45.0]);
        assert_eq!(fam.intercepts(), &[0.0, 30.0]);
    }

    #[test]
    fn first_arrival_wins() {
        let a = family(&[10.0, 25.0]);
        let b = family(&[25.0, 10.0]);
        assert_eq!(a.intercepts(), &[10.0]);
        assert_eq!(b.intercepts(), &[25.0]);
    }

    #[test]
    fn retained_members_are_pairwise_separated() {
        let xs = [
            12.0, 340.5, 19.0, 77.0, 80.0, 500.0, 61.0, 330.0, 355.0, 499.0, 140.0, 121.0,
        ];
        let fam = family(&xs);
        let kept = fam.intercepts();
        for w in kept.windows(2) {
            assert!(w[0] < w[1], "not ascending: {kept:?}");
        }
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                assert!((a - b).abs() >= fam.threshold(), "{a} vs {b}");
            }
        }
    }
}
