use log::trace;

use super::combination::{self, Rule};
use super::distance;
use super::focal::FocalElement;
use crate::config::Config;
use crate::misc::log::targets;
use crate::structures::element::Element;
use crate::types::err::{CombinationError, Error, FunctionError};

/// A mass function over a frame of discernment: an ordered, duplicate-free list of
/// [`FocalElement`]s.
///
/// The list is kept in insertion order and deduplicated by element equality on every mutation,
/// per the invariant that exactly one focal exists per distinct element. Lookups use a linear
/// scan; for the focal counts this library is built for (at most a few dozen per function)
/// that beats the bookkeeping of a hash map, and it keeps combination's inner loop free of
/// hashing.
#[derive(Clone, Debug)]
pub struct MassFunction<E: Element> {
    focals: Vec<FocalElement<E>>,
}

impl<E: Element> Default for MassFunction<E> {
    fn default() -> Self {
        MassFunction::empty()
    }
}

impl<E: Element> MassFunction<E> {
    /// A mass function with no focals and no frame established yet.
    pub fn empty() -> Self {
        MassFunction { focals: Vec::new() }
    }

    /// Builds a mass function from a list of `(element, value)` pairs, merging duplicate
    /// elements by summing their values (the same accumulation [`add_mass`](Self::add_mass)
    /// performs).
    pub fn from_focals<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (E, f64)>,
    {
        let mut mf = MassFunction::empty();
        for (element, value) in pairs {
            mf.add_mass(element, value)?;
        }
        Ok(mf)
    }

    /// Whether this mass function has no focals.
    pub fn is_empty(&self) -> bool {
        self.focals.is_empty()
    }

    /// The focals of this mass function, in insertion order.
    pub fn focals(&self) -> impl Iterator<Item = &FocalElement<E>> {
        self.focals.iter()
    }

    /// The number of distinct focals.
    pub fn focal_count(&self) -> usize {
        self.focals.len()
    }

    fn index_of(&self, element: &E) -> Option<usize> {
        self.focals.iter().position(|f| f.element() == element)
    }

    fn check_compatible(&self, element: &E) -> Result<(), FunctionError> {
        if let Some(first) = self.focals.first() {
            if !first.element().is_compatible(element) {
                return Err(FunctionError::IncompatibleFrame);
            }
        }
        Ok(())
    }

    /// The frame's empty element, taken from the first focal. `None` if this function has no
    /// focals yet.
    pub(crate) fn frame_empty(&self) -> Option<E> {
        self.focals.first().map(|f| f.element().get_empty())
    }

    /// The frame's complete element, taken from the first focal. `None` if this function has
    /// no focals yet.
    pub(crate) fn frame_complete(&self) -> Option<E> {
        self.focals.first().map(|f| f.element().get_complete())
    }

    /// Adds `delta` to the value stored for `element`, inserting a new focal if one is not
    /// already present. Fails with
    /// [`IncompatibleFrame`](FunctionError::IncompatibleFrame) if the function is non-empty and
    /// `element` does not share the established frame.
    pub fn add_mass(&mut self, element: E, delta: f64) -> Result<(), Error> {
        self.check_compatible(&element)?;
        match self.index_of(&element) {
            Some(index) => {
                let updated = self.focals[index].value() + delta;
                self.focals[index].set_value(updated);
            }
            None => self.focals.push(FocalElement::new(element, delta)),
        }
        Ok(())
    }

    /// Subtracts `delta` from the value stored for `element`; equivalent to
    /// `add_mass(element, -delta)`. If `element` is not present, it is inserted with value
    /// `-delta` (so that [`difference`](Self::difference) is well-defined even when the two
    /// functions don't share every focal).
    pub fn remove_mass(&mut self, element: E, delta: f64) -> Result<(), Error> {
        self.add_mass(element, -delta)
    }

    /// Deletes the focal for `element` outright, regardless of its value.
    pub(crate) fn remove_focal(&mut self, element: &E) {
        self.focals.retain(|f| f.element() != element);
    }

    /// Empties the focal set.
    pub fn clear(&mut self) {
        self.focals.clear();
    }

    /// Drops every focal whose value's magnitude is below ε = 2·10⁻⁶.
    pub fn clean(&mut self) {
        self.clean_with(&Config::default());
    }

    /// [`clean`](Self::clean) with a caller-supplied tolerance.
    pub fn clean_with(&mut self, config: &Config) {
        let before = self.focals.len();
        self.focals.retain(|f| f.value().abs() > config.epsilon);
        if self.focals.len() != before {
            trace!(target: targets::CLEAN, "dropped {} focal(s) below epsilon", before - self.focals.len());
        }
    }

    /// Divides every value by the sum of all values. Fails with
    /// [`EmptyFunction`](FunctionError::EmptyFunction) if there are no focals. A mass function
    /// whose values already sum to zero is left unchanged rather than divided by zero.
    pub fn normalise(&mut self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(FunctionError::EmptyFunction.into());
        }
        let sum: f64 = self.focals.iter().map(|f| f.value()).sum();
        if sum != 0.0 {
            for focal in &mut self.focals {
                focal.set_value(focal.value() / sum);
            }
        }
        Ok(())
    }

    /// Whether the values sum to 1 within ε.
    pub fn has_valid_sum(&self) -> bool {
        self.has_valid_sum_with(&Config::default())
    }

    /// [`has_valid_sum`](Self::has_valid_sum) with a caller-supplied tolerance.
    pub fn has_valid_sum_with(&self, config: &Config) -> bool {
        let sum: f64 = self.focals.iter().map(|f| f.value()).sum();
        (sum - 1.0).abs() <= config.epsilon
    }

    /// Whether every value lies in `[0, 1]`.
    pub fn has_valid_values(&self) -> bool {
        self.focals.iter().all(|f| (0.0..=1.0).contains(&f.value()))
    }

    /// Whether this function is valid: [`has_valid_sum`](Self::has_valid_sum) and
    /// [`has_valid_values`](Self::has_valid_values) both hold.
    pub fn is_valid(&self) -> bool {
        self.has_valid_sum() && self.has_valid_values()
    }

    /// The mass stored for `element`, or 0 if it is not a focal.
    pub fn m(&self, element: &E) -> f64 {
        self.index_of(element)
            .map(|i| self.focals[i].value())
            .unwrap_or(0.0)
    }

    /// Belief: the sum of mass over non-empty focals that are subsets of `a`. `bel(∅) = 0`.
    pub fn bel(&self, a: &E) -> Result<f64, Error> {
        self.check_compatible(a)?;
        Ok(self
            .focals
            .iter()
            .filter(|f| !f.element().is_empty() && f.element().is_subset(a))
            .map(|f| f.value())
            .sum())
    }

    /// Plausibility: the sum of mass over focals intersecting `a`. `pl(∅) = 1` by the
    /// convention this library adopts as a seed value for generic code, not the 0 a direct
    /// reading of the formula would give.
    pub fn pl(&self, a: &E) -> Result<f64, Error> {
        self.check_compatible(a)?;
        if a.is_empty() {
            return Ok(1.0);
        }
        let mut sum = 0.0;
        for focal in &self.focals {
            let intersection = focal.element().conjunction(a)?;
            if !intersection.is_empty() {
                sum += focal.value();
            }
        }
        Ok(sum)
    }

    /// Commonality: the sum of mass over focals that are supersets of `a`. `q(∅) = 1`.
    pub fn q(&self, a: &E) -> Result<f64, Error> {
        self.check_compatible(a)?;
        if a.is_empty() {
            return Ok(1.0);
        }
        Ok(self
            .focals
            .iter()
            .filter(|f| a.is_subset(f.element()))
            .map(|f| f.value())
            .sum())
    }

    /// Pignistic probability: the mass of each non-empty focal, split proportionally to how
    /// much of it lies in `a`. `bet_p(∅) = 0`.
    pub fn bet_p(&self, a: &E) -> Result<f64, Error> {
        self.check_compatible(a)?;
        let mut sum = 0.0;
        for focal in &self.focals {
            if focal.element().is_empty() {
                continue;
            }
            let card = focal.element().card();
            if card == 0.0 {
                continue;
            }
            let overlap = focal.element().conjunction(a)?.card();
            sum += focal.value() * overlap / card;
        }
        Ok(sum)
    }

    /// `Σ m(f)/|f|` over non-empty focals.
    pub fn specificity(&self) -> f64 {
        self.focals
            .iter()
            .filter(|f| !f.element().is_empty())
            .filter(|f| f.element().card() != 0.0)
            .map(|f| f.value() / f.element().card())
            .sum()
    }

    /// `Σ m(f)·log₂|f|` over non-empty focals.
    pub fn non_specificity(&self) -> f64 {
        self.focals
            .iter()
            .filter(|f| !f.element().is_empty())
            .map(|f| f.value() * f.element().card().log2())
            .sum()
    }

    /// `−Σ m(f)·log₂ BetP(f)` over non-empty focals.
    pub fn discrepancy(&self) -> Result<f64, Error> {
        let mut sum = 0.0;
        for focal in &self.focals {
            if focal.element().is_empty() {
                continue;
            }
            let bet_p = self.bet_p(focal.element())?;
            if bet_p > 0.0 {
                sum -= focal.value() * bet_p.log2();
            }
        }
        Ok(sum)
    }

    /// New mass function with every value multiplied by `(1 - alpha)` and mass `alpha` added
    /// to the empty element. Fails with [`OutOfRange`](FunctionError::OutOfRange) if `alpha`
    /// is outside `[0, 1]`, or [`EmptyFunction`](FunctionError::EmptyFunction) if this function
    /// has no focals (there would be no frame to find the empty element of).
    pub fn weakening(&self, alpha: f64) -> Result<Self, Error> {
        self.scale_and_seed(alpha, self.frame_empty())
    }

    /// New mass function with every value multiplied by `(1 - alpha)` and mass `alpha` added
    /// to the complete element. Models "source reliability `1 - alpha`".
    pub fn discounting(&self, alpha: f64) -> Result<Self, Error> {
        self.scale_and_seed(alpha, self.frame_complete())
    }

    fn scale_and_seed(&self, alpha: f64, seed: Option<E>) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(FunctionError::OutOfRange.into());
        }
        let seed = seed.ok_or(FunctionError::EmptyFunction)?;
        let mut result = MassFunction::empty();
        for focal in &self.focals {
            result.add_mass(focal.element().clone(), focal.value() * (1.0 - alpha))?;
        }
        result.add_mass(seed, alpha)?;
        Ok(result)
    }

    /// Conditions this function on `e`: the Smets-conjunctive combination with the categorical
    /// mass function `{(e, 1)}`. Fails with [`EmptyElement`](FunctionError::EmptyElement) if
    /// `e` is empty, or [`EmptyFunction`](FunctionError::EmptyFunction) if this function has no
    /// focals.
    pub fn conditioning(&self, e: &E) -> Result<Self, Error> {
        if self.is_empty() {
            return Err(FunctionError::EmptyFunction.into());
        }
        if e.is_empty() {
            return Err(FunctionError::EmptyElement.into());
        }
        self.check_compatible(e)?;
        let categorical = MassFunction::from_focals([(e.clone(), 1.0)])?;
        self.combination_smets(&[&categorical])
    }

    /// Unnormalised conjunctive combination (Smets' rule). N-ary inputs fold left.
    pub fn combination_smets(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::smets(self, others)
    }

    /// Smets' rule, then the empty focal is removed and the result normalised. Fails with
    /// [`TotalConflict`](CombinationError::TotalConflict) if the post-Smets empty mass equals
    /// one.
    pub fn combination_dempster(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::dempster(self, others)
    }

    /// Smets' rule with disjunction in place of conjunction.
    pub fn combination_disjunctive(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::disjunctive(self, others)
    }

    /// Smets' rule, then any mass at the empty element is moved onto the complete element.
    pub fn combination_yager(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::yager(self, others)
    }

    /// Dubois-Prade's rule: over the Cartesian product of all inputs' focals, mass is assigned
    /// to the intersection when non-empty and to the union otherwise.
    pub fn combination_dubois_prade(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::dubois_prade(self, others)
    }

    /// The arithmetic mean of the focal values across all inputs.
    pub fn combination_average(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::average(self, others)
    }

    /// Murphy's rule: average the inputs, then Dempster-combine the average with itself
    /// `n - 1` times.
    pub fn combination_murphy(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::murphy(self, others)
    }

    /// Chen's rule: weight each input by a similarity-derived credibility, sum the weighted
    /// inputs, then Dempster-combine the result with itself `n - 1` times.
    pub fn combination_chen(&self, others: &[&Self]) -> Result<Self, Error> {
        combination::chen(self, others)
    }

    /// Dispatches to one of the eight named combination rules. Static facade: fails with
    /// [`NotEnoughInputs`](CombinationError::NotEnoughInputs) if `others` is empty (fewer than
    /// two mass functions total).
    pub fn combination(&self, rule: Rule, others: &[&Self]) -> Result<Self, Error> {
        if others.is_empty() {
            return Err(CombinationError::NotEnoughInputs.into());
        }
        trace!(target: targets::COMBINATION, "dispatching {rule:?} over {} input(s)", 1 + others.len());
        match rule {
            Rule::Smets => self.combination_smets(others),
            Rule::Dempster => self.combination_dempster(others),
            Rule::Disjunctive => self.combination_disjunctive(others),
            Rule::Yager => self.combination_yager(others),
            Rule::DuboisPrade => self.combination_dubois_prade(others),
            Rule::Average => self.combination_average(others),
            Rule::Murphy => self.combination_murphy(others),
            Rule::Chen => self.combination_chen(others),
        }
    }

    /// Element-wise `self − other`, via [`remove_mass`](Self::remove_mass) semantics (may
    /// produce negative values; not a proper mass function).
    pub(crate) fn difference(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.clone();
        for focal in &other.focals {
            result.remove_mass(focal.element().clone(), focal.value())?;
        }
        Ok(result)
    }

    /// The Jousselme distance between `self` and `other`.
    pub fn distance(&self, other: &Self) -> Result<f64, Error> {
        distance::distance(self, other)
    }

    /// The mean pairwise Jousselme distance across a group of three or more mass functions.
    pub fn distance_n(group: &[&Self]) -> Result<f64, Error> {
        distance::distance_n(group)
    }

    /// `½(cos(π·distance(self, other)) + 1)`.
    pub fn similarity(&self, other: &Self) -> Result<f64, Error> {
        distance::similarity(self, other)
    }

    /// The sum of [`similarity`](Self::similarity) between `self` and every member of
    /// `cohort`. Includes the similarity with `self` if `self` is a member of `cohort`.
    pub fn support(&self, cohort: &[&Self]) -> Result<f64, Error> {
        distance::support(self, cohort)
    }

    /// The mass assigned to the empty element after `d` successive Smets self-combinations.
    /// Fails with [`OutOfRange`](FunctionError::OutOfRange) if `d < 1`.
    pub fn auto_conflict(&self, d: u32) -> Result<f64, Error> {
        distance::auto_conflict(self, d)
    }

    /// Returns the elements of `set` whose `f`-value is the strict maximum among those with
    /// `0 < |e| ≤ max_card` and `f(e) ≠ 0`; ties all included.
    pub fn get_max<F>(f: F, max_card: f64, set: &crate::sets::Set<E>) -> Result<Vec<(E, f64)>, Error>
    where
        F: Fn(&E) -> Result<f64, Error>,
    {
        super::decision::get_extreme(set, f, max_card, super::decision::Extreme::Max)
    }

    /// Returns the elements of `set` whose `f`-value is the strict minimum among those with
    /// `0 < |e| ≤ max_card` and `f(e) ≠ 0`; ties all included.
    pub fn get_min<F>(f: F, max_card: f64, set: &crate::sets::Set<E>) -> Result<Vec<(E, f64)>, Error>
    where
        F: Fn(&E) -> Result<f64, Error>,
    {
        super::decision::get_extreme(set, f, max_card, super::decision::Extreme::Min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::discrete::DiscreteElement;

    fn el(n: usize, bits: u32) -> DiscreteElement {
        DiscreteElement::from_bits(n, &[bits]).unwrap()
    }

    #[test]
    fn add_mass_is_commutative_in_the_accumulated_sense() {
        let mut a = MassFunction::empty();
        a.add_mass(el(2, 0b01), 0.2).unwrap();
        a.add_mass(el(2, 0b01), 0.3).unwrap();

        let mut b = MassFunction::empty();
        b.add_mass(el(2, 0b01), 0.5).unwrap();

        assert_eq!(a.m(&el(2, 0b01)), b.m(&el(2, 0b01)));
    }

    #[test]
    fn bel_pl_q_bet_p_match_the_worked_example() {
        let m = MassFunction::from_focals([
            (el(2, 0b01), 0.1),
            (el(2, 0b10), 0.3),
            (el(2, 0b11), 0.6),
        ])
        .unwrap();

        assert_eq!(m.bel(&el(2, 0b01)).unwrap(), 0.1);
        assert_eq!(m.bel(&el(2, 0b10)).unwrap(), 0.3);
        assert_eq!(m.bel(&el(2, 0b11)).unwrap(), 1.0);

        assert!((m.pl(&el(2, 0b01)).unwrap() - 0.7).abs() < 1e-12);
        assert!((m.pl(&el(2, 0b10)).unwrap() - 0.9).abs() < 1e-12);
        assert_eq!(m.pl(&el(2, 0b11)).unwrap(), 1.0);

        assert!((m.q(&el(2, 0b01)).unwrap() - 0.7).abs() < 1e-12);
        assert!((m.q(&el(2, 0b10)).unwrap() - 0.9).abs() < 1e-12);
        assert_eq!(m.q(&el(2, 0b11)).unwrap(), 0.6);

        assert!((m.bet_p(&el(2, 0b01)).unwrap() - 0.4).abs() < 1e-12);
        assert!((m.bet_p(&el(2, 0b10)).unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(m.bet_p(&el(2, 0b11)).unwrap(), 1.0);
    }

    #[test]
    fn pl_and_q_of_empty_are_one_by_convention() {
        let m = MassFunction::from_focals([(el(2, 0b01), 0.4), (el(2, 0b11), 0.6)]).unwrap();
        let empty = el(2, 0b00);
        assert_eq!(m.pl(&empty).unwrap(), 1.0);
        assert_eq!(m.q(&empty).unwrap(), 1.0);
        assert_eq!(m.bel(&empty).unwrap(), 0.0);
    }

    #[test]
    fn discounting_matches_the_worked_example() {
        let m = MassFunction::from_focals([
            (el(2, 0b01), 0.1),
            (el(2, 0b10), 0.3),
            (el(2, 0b11), 0.6),
        ])
        .unwrap();
        let discounted = m.discounting(0.1).unwrap();
        assert!((discounted.m(&el(2, 0b01)) - 0.09).abs() < 1e-12);
        assert!((discounted.m(&el(2, 0b10)) - 0.27).abs() < 1e-12);
        assert!((discounted.m(&el(2, 0b11)) - 0.64).abs() < 1e-12);
    }

    #[test]
    fn weakening_seeds_the_empty_element_instead_of_complete() {
        let m = MassFunction::from_focals([(el(2, 0b01), 0.4), (el(2, 0b11), 0.6)]).unwrap();
        let weakened = m.weakening(0.2).unwrap();
        assert!((weakened.m(&el(2, 0b01)) - 0.32).abs() < 1e-12);
        assert!((weakened.m(&el(2, 0b11)) - 0.48).abs() < 1e-12);
        assert!((weakened.m(&el(2, 0b00)) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn conditioning_matches_smets_with_categorical() {
        let m = MassFunction::from_focals([
            (el(2, 0b01), 0.1),
            (el(2, 0b10), 0.3),
            (el(2, 0b11), 0.6),
        ])
        .unwrap();
        let mut conditioned = m.conditioning(&el(2, 0b01)).unwrap();
        conditioned.clean();

        assert!((conditioned.m(&el(2, 0b01)) - 0.7).abs() < 1e-12);
        assert_eq!(conditioned.m(&el(2, 0b00)), 0.3);
        assert_eq!(conditioned.focal_count(), 2);
    }

    #[test]
    fn normalise_is_idempotent() {
        let mut m = MassFunction::from_focals([(el(2, 0b01), 2.0), (el(2, 0b11), 2.0)]).unwrap();
        m.normalise().unwrap();
        assert!(m.has_valid_sum());
        let before = m.m(&el(2, 0b01));
        m.normalise().unwrap();
        assert_eq!(m.m(&el(2, 0b01)), before);
    }

    #[test]
    fn normalise_fails_on_empty_function() {
        let mut m: MassFunction<DiscreteElement> = MassFunction::empty();
        assert_eq!(m.normalise(), Err(FunctionError::EmptyFunction.into()));
    }
}
