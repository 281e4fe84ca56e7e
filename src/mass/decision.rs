/*!
`getMax`/`getMin`: extracting decision-worthy elements from a criterion function under a
cardinality bound.
*/

use log::warn;

use super::mass_function::MassFunction;
use crate::misc::log::targets;
use crate::sets::powerset;
use crate::sets::Set;
use crate::structures::discrete::DiscreteElement;
use crate::structures::element::Element;
use crate::types::err::{Error, FunctionError};

/// Which extreme [`get_extreme`] is looking for.
pub(super) enum Extreme {
    Max,
    Min,
}

/// Shared implementation of `getMax`/`getMin`: filters `set` to `0 < |e| ≤ max_card` and
/// `f(e) ≠ 0`, then returns every element attaining the strict extreme among what is left.
pub(super) fn get_extreme<E, F>(
    set: &Set<E>,
    f: F,
    max_card: f64,
    extreme: Extreme,
) -> Result<Vec<(E, f64)>, Error>
where
    E: Element,
    F: Fn(&E) -> Result<f64, Error>,
{
    if max_card <= 0.0 {
        return Err(FunctionError::OutOfRange.into());
    }

    let mut candidates = Vec::new();
    for element in set.iter() {
        let card = element.card();
        if card <= 0.0 || card > max_card {
            continue;
        }
        let value = f(element)?;
        if value != 0.0 {
            candidates.push((element.clone(), value));
        }
    }

    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let extreme_value = match extreme {
        Extreme::Max => candidates
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max),
        Extreme::Min => candidates
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::INFINITY, f64::min),
    };

    Ok(candidates
        .into_iter()
        .filter(|(_, v)| *v == extreme_value)
        .collect())
}

impl MassFunction<DiscreteElement> {
    /// The vacuous mass function over a frame of size `n`: a single focal, the complete
    /// element, holding all of the mass.
    pub fn vacuous(n: usize) -> Result<Self, Error> {
        MassFunction::from_focals([(DiscreteElement::complete(n)?, 1.0)])
    }

    /// [`MassFunction::get_max`], defaulting `set` to the power set of this function's frame.
    /// Warns that this scan is exponential in the frame size.
    pub fn get_max_over_frame<F>(&self, f: F, max_card: f64) -> Result<Vec<(DiscreteElement, f64)>, Error>
    where
        F: Fn(&DiscreteElement) -> Result<f64, Error>,
    {
        warn!(
            target: targets::DECISION,
            "scanning the full power set of the frame is exponential in its size"
        );
        let n = self
            .frame_complete()
            .ok_or(FunctionError::EmptyFunction)?
            .size();
        let set = powerset::power_set(n)?;
        get_extreme(&set, f, max_card, Extreme::Max)
    }

    /// [`MassFunction::get_min`], defaulting `set` to the power set of this function's frame.
    /// Warns that this scan is exponential in the frame size.
    pub fn get_min_over_frame<F>(&self, f: F, max_card: f64) -> Result<Vec<(DiscreteElement, f64)>, Error>
    where
        F: Fn(&DiscreteElement) -> Result<f64, Error>,
    {
        warn!(
            target: targets::DECISION,
            "scanning the full power set of the frame is exponential in its size"
        );
        let n = self
            .frame_complete()
            .ok_or(FunctionError::EmptyFunction)?
            .size();
        let set = powerset::power_set(n)?;
        get_extreme(&set, f, max_card, Extreme::Min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(n: usize, bits: u32) -> DiscreteElement {
        DiscreteElement::from_bits(n, &[bits]).unwrap()
    }

    #[test]
    fn get_max_returns_ties_and_excludes_zero() {
        let m = MassFunction::from_focals([
            (el(3, 0b001), 0.4),
            (el(3, 0b010), 0.4),
            (el(3, 0b100), 0.0),
            (el(3, 0b111), 0.2),
        ])
        .unwrap();
        let set: Set<DiscreteElement> = m.focals().map(|f| f.element().clone()).collect();

        let result = MassFunction::get_max(|e| Ok(m.m(e)), 3.0, &set).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|(_, v)| *v == 0.4));
    }

    #[test]
    fn get_max_respects_cardinality_bound() {
        let m = MassFunction::from_focals([(el(3, 0b001), 0.3), (el(3, 0b111), 0.7)]).unwrap();
        let set: Set<DiscreteElement> = m.focals().map(|f| f.element().clone()).collect();

        let result = MassFunction::get_max(|e| Ok(m.m(e)), 1.0, &set).unwrap();
        assert_eq!(result, vec![(el(3, 0b001), 0.3)]);
    }

    #[test]
    fn get_extreme_rejects_non_positive_max_card() {
        let set: Set<DiscreteElement> = Set::new();
        let err = MassFunction::<DiscreteElement>::get_max(|_| Ok(1.0), 0.0, &set).unwrap_err();
        assert_eq!(err, FunctionError::OutOfRange.into());
    }
}
