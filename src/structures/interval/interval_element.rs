use super::interval::Interval;
use crate::structures::element::Element;
use crate::types::err::IntervalError;

/// A subset of the extended real line, represented as a normalised, pairwise-disjoint,
/// ascending list of closed [`Interval`]s.
///
/// "Normalised" means every constructor and operation here leaves the list sorted by start
/// bound with no two entries overlapping or touching; [`conjunction`](Element::conjunction)
/// and [`disjunction`](Element::disjunction) always produce a value in this form, so equality
/// can compare the interval lists directly rather than doing a semantic containment check.
///
/// [`opposite`](Element::opposite) treats the boundary points of an interval as having measure
/// zero: the complement of `[a, b]` is represented as the closed pair `(-∞, a]` and `[b, ∞)`
/// rather than the open `(-∞, a)` and `(b, ∞)` that would be set-theoretically exact. This
/// matches every other cardinality and combination computation here, which is phrased in
/// terms of interval length rather than point membership.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalElement {
    intervals: Vec<Interval>,
}

fn normalise(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|interval| !interval.is_empty());
    intervals.sort_by(|a, b| a.start().partial_cmp(&b.start()).expect("no NaN bounds remain"));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if last.merges_with(&interval) => *last = last.merge(&interval),
            _ => merged.push(interval),
        }
    }
    merged
}

impl IntervalElement {
    /// The empty element: no intervals.
    pub fn empty() -> Self {
        IntervalElement { intervals: vec![] }
    }

    /// The complete element: the whole extended real line.
    pub fn complete() -> Self {
        IntervalElement {
            intervals: vec![Interval::complete()],
        }
    }

    /// Builds an element from a set of intervals, sorting and merging overlapping or touching
    /// entries and dropping any empty intervals.
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        IntervalElement {
            intervals: normalise(intervals),
        }
    }

    /// Convenience constructor for the common case of a single closed interval.
    pub fn from_bounds(start: f64, end: f64) -> Result<Self, IntervalError> {
        let interval = Interval::closed(start, end)?;
        Ok(IntervalElement::from_intervals(vec![interval]))
    }

    /// The disjoint, sorted intervals making up this element.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The total length of this element, possibly infinite. Zero for the empty element.
    pub fn card(&self) -> f64 {
        self.intervals.iter().map(Interval::size).sum()
    }

    /// The complement of this element within the extended real line.
    pub fn opposite(&self) -> Self {
        if self.intervals.is_empty() {
            return IntervalElement::complete();
        }

        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);
        let first = &self.intervals[0];
        if first.start() != f64::NEG_INFINITY {
            gaps.push(
                Interval::closed(f64::NEG_INFINITY, first.start())
                    .expect("-infinity <= any start"),
            );
        }
        for pair in self.intervals.windows(2) {
            gaps.push(
                Interval::closed(pair[0].end(), pair[1].start())
                    .expect("sorted, non-touching intervals leave end <= next start"),
            );
        }
        let last = self.intervals.last().expect("checked non-empty above");
        if last.end() != f64::INFINITY {
            gaps.push(Interval::closed(last.end(), f64::INFINITY).expect("any end <= infinity"));
        }

        IntervalElement::from_intervals(gaps)
    }

    /// Set-theoretic intersection.
    pub fn conjunction(&self, other: &Self) -> Self {
        let mut pieces = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                let piece = a.intersect(b);
                if !piece.is_empty() {
                    pieces.push(piece);
                }
            }
        }
        IntervalElement::from_intervals(pieces)
    }

    /// Set-theoretic union.
    pub fn disjunction(&self, other: &Self) -> Self {
        let mut pieces = self.intervals.clone();
        pieces.extend(other.intervals.iter().copied());
        IntervalElement::from_intervals(pieces)
    }

    /// Whether `self` is a subset of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        &self.conjunction(other) == self
    }

    /// Always `true`: every `IntervalElement` belongs to the same frame, the extended real
    /// line.
    pub fn is_compatible(&self, _other: &Self) -> bool {
        true
    }

    /// Whether this element is empty.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether this element is the whole extended real line.
    pub fn is_complete(&self) -> bool {
        self.intervals.len() == 1
            && self.intervals[0].start() == f64::NEG_INFINITY
            && self.intervals[0].end() == f64::INFINITY
    }

    /// The empty element.
    pub fn get_empty(&self) -> Self {
        IntervalElement::empty()
    }

    /// The complete element.
    pub fn get_complete(&self) -> Self {
        IntervalElement::complete()
    }
}

impl Element for IntervalElement {
    fn opposite(&self) -> Self {
        self.opposite()
    }

    fn conjunction(&self, other: &Self) -> Result<Self, crate::types::err::ElementError> {
        Ok(self.conjunction(other))
    }

    fn disjunction(&self, other: &Self) -> Result<Self, crate::types::err::ElementError> {
        Ok(self.disjunction(other))
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn is_compatible(&self, other: &Self) -> bool {
        self.is_compatible(other)
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn is_complete(&self) -> bool {
        self.is_complete()
    }

    fn get_empty(&self) -> Self {
        self.get_empty()
    }

    fn get_complete(&self) -> Self {
        self.get_complete()
    }

    fn card(&self) -> f64 {
        self.card()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_of_a_single_interval_is_two_rays() {
        let e = IntervalElement::from_bounds(0.0, 1.0).unwrap();
        let opp = e.opposite();
        assert_eq!(opp.intervals().len(), 2);
        assert_eq!(opp.card(), f64::INFINITY);
    }

    #[test]
    fn opposite_is_involutive_up_to_boundary_measure_zero() {
        let e = IntervalElement::from_bounds(0.0, 1.0).unwrap();
        assert_eq!(e.opposite().opposite(), e);
    }

    #[test]
    fn conjunction_of_overlapping_bounds() {
        let a = IntervalElement::from_bounds(0.0, 2.0).unwrap();
        let b = IntervalElement::from_bounds(1.0, 3.0).unwrap();
        let inter = a.conjunction(&b);
        assert_eq!(inter.card(), 1.0);
    }

    #[test]
    fn disjunction_merges_touching_intervals() {
        let a = IntervalElement::from_bounds(0.0, 1.0).unwrap();
        let b = IntervalElement::from_bounds(1.0, 2.0).unwrap();
        let union = a.disjunction(&b);
        assert_eq!(union.intervals().len(), 1);
        assert_eq!(union.card(), 2.0);
    }

    #[test]
    fn empty_and_complete_are_opposites() {
        assert_eq!(IntervalElement::empty().opposite(), IntervalElement::complete());
        assert_eq!(IntervalElement::complete().opposite(), IntervalElement::empty());
    }

    #[test]
    fn is_subset_holds_for_a_contained_interval() {
        let small = IntervalElement::from_bounds(1.0, 2.0).unwrap();
        let large = IntervalElement::from_bounds(0.0, 3.0).unwrap();
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
    }
}
