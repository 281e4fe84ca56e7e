/*!
The eight combination rules and the dispatcher over them.

Rules 1-4 (Smets, Dempster, Disjunctive, Yager) share a pairwise fold: build a fresh result by
taking every pair of focals across two functions and routing `m(f₁)·m(f₂)` somewhere, then fold
that across however many `others` are supplied. Dubois-Prade instead needs the full Cartesian
product of every input's focals at once, the tree of focals, so it is not expressed in terms of
the pairwise fold. Average, Murphy, and Chen build on top of these.
*/

use super::mass_function::MassFunction;
use crate::config::DEFAULT_EPSILON;
use crate::structures::element::Element;
use crate::types::err::{CombinationError, Error, FunctionError};

/// A combination rule, for use with [`MassFunction::combination`](super::MassFunction::combination).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    /// Unnormalised conjunctive combination.
    Smets,
    /// Smets, then remove the empty focal and normalise.
    Dempster,
    /// Smets with disjunction in place of conjunction.
    Disjunctive,
    /// Smets, then move empty mass onto the complete element.
    Yager,
    /// Mass goes to the intersection when non-empty, to the union otherwise.
    DuboisPrade,
    /// Arithmetic mean of the inputs' focal values.
    Average,
    /// Average, then Dempster-combined with itself `n - 1` times.
    Murphy,
    /// Similarity-weighted credibility average, then Dempster-combined with itself `n - 1`
    /// times.
    Chen,
}

fn pairwise<E, F>(
    a: &MassFunction<E>,
    b: &MassFunction<E>,
    combine: F,
) -> Result<MassFunction<E>, Error>
where
    E: Element,
    F: Fn(&E, &E) -> Result<E, crate::types::err::ElementError>,
{
    let mut result = MassFunction::empty();
    for fa in a.focals() {
        for fb in b.focals() {
            let target = combine(fa.element(), fb.element())?;
            result.add_mass(target, fa.value() * fb.value())?;
        }
    }
    Ok(result)
}

fn fold<E, F>(first: &MassFunction<E>, others: &[&MassFunction<E>], step: F) -> Result<MassFunction<E>, Error>
where
    E: Element,
    F: Fn(&MassFunction<E>, &MassFunction<E>) -> Result<MassFunction<E>, Error>,
{
    if first.is_empty() {
        return Err(FunctionError::EmptyFunction.into());
    }
    let mut accumulator = first.clone();
    for other in others {
        if other.is_empty() {
            return Err(FunctionError::EmptyFunction.into());
        }
        accumulator = step(&accumulator, other)?;
    }
    Ok(accumulator)
}

pub(super) fn smets<E: Element>(m: &MassFunction<E>, others: &[&MassFunction<E>]) -> Result<MassFunction<E>, Error> {
    fold(m, others, |a, b| pairwise(a, b, Element::conjunction))
}

pub(super) fn disjunctive<E: Element>(
    m: &MassFunction<E>,
    others: &[&MassFunction<E>],
) -> Result<MassFunction<E>, Error> {
    fold(m, others, |a, b| pairwise(a, b, Element::disjunction))
}

pub(super) fn dempster<E: Element>(m: &MassFunction<E>, others: &[&MassFunction<E>]) -> Result<MassFunction<E>, Error> {
    let mut combined = smets(m, others)?;
    let empty = combined
        .frame_empty()
        .expect("smets on non-empty inputs yields a non-empty frame");
    let empty_mass = combined.m(&empty);
    if empty_mass >= 1.0 - DEFAULT_EPSILON {
        return Err(CombinationError::TotalConflict.into());
    }
    combined.remove_focal(&empty);
    combined.normalise()?;
    Ok(combined)
}

pub(super) fn yager<E: Element>(m: &MassFunction<E>, others: &[&MassFunction<E>]) -> Result<MassFunction<E>, Error> {
    let mut combined = smets(m, others)?;
    let empty = combined
        .frame_empty()
        .expect("smets on non-empty inputs yields a non-empty frame");
    let empty_mass = combined.m(&empty);
    if empty_mass != 0.0 {
        combined.remove_focal(&empty);
        combined.add_mass(empty.get_complete(), empty_mass)?;
    }
    Ok(combined)
}

pub(super) fn dubois_prade<E: Element>(
    m: &MassFunction<E>,
    others: &[&MassFunction<E>],
) -> Result<MassFunction<E>, Error> {
    if m.is_empty() {
        return Err(FunctionError::EmptyFunction.into());
    }
    for other in others {
        if other.is_empty() {
            return Err(FunctionError::EmptyFunction.into());
        }
    }

    let mut tuples: Vec<Vec<(E, f64)>> = m
        .focals()
        .map(|f| vec![(f.element().clone(), f.value())])
        .collect();

    for other in others {
        let mut expanded = Vec::with_capacity(tuples.len() * other.focal_count());
        for tuple in &tuples {
            for f in other.focals() {
                let mut next = tuple.clone();
                next.push((f.element().clone(), f.value()));
                expanded.push(next);
            }
        }
        tuples = expanded;
    }

    let mut result = MassFunction::empty();
    for tuple in tuples {
        let mut intersection = tuple[0].0.clone();
        let mut union = tuple[0].0.clone();
        let mut product = tuple[0].1;
        for (element, value) in &tuple[1..] {
            intersection = intersection.conjunction(element)?;
            union = union.disjunction(element)?;
            product *= value;
        }
        let target = if !intersection.is_empty() { intersection } else { union };
        result.add_mass(target, product)?;
    }
    Ok(result)
}

fn union_of_focal_elements<E: Element>(functions: &[&MassFunction<E>]) -> Vec<E> {
    let mut elements: Vec<E> = Vec::new();
    for function in functions {
        for focal in function.focals() {
            if !elements.contains(focal.element()) {
                elements.push(focal.element().clone());
            }
        }
    }
    elements
}

pub(super) fn average<E: Element>(m: &MassFunction<E>, others: &[&MassFunction<E>]) -> Result<MassFunction<E>, Error> {
    if m.is_empty() {
        return Err(FunctionError::EmptyFunction.into());
    }
    for other in others {
        if other.is_empty() {
            return Err(FunctionError::EmptyFunction.into());
        }
    }

    let mut all = vec![m];
    all.extend_from_slice(others);
    let n = all.len() as f64;

    let mut result = MassFunction::empty();
    for element in union_of_focal_elements(&all) {
        let sum: f64 = all.iter().map(|f| f.m(&element)).sum();
        let mean = sum / n;
        if mean != 0.0 {
            result.add_mass(element, mean)?;
        }
    }
    Ok(result)
}

pub(super) fn murphy<E: Element>(m: &MassFunction<E>, others: &[&MassFunction<E>]) -> Result<MassFunction<E>, Error> {
    let mean = average(m, others)?;
    let mut result = mean.clone();
    for _ in 0..others.len() {
        result = dempster(&result, &[&mean])?;
    }
    Ok(result)
}

pub(super) fn chen<E: Element>(m: &MassFunction<E>, others: &[&MassFunction<E>]) -> Result<MassFunction<E>, Error> {
    if m.is_empty() {
        return Err(FunctionError::EmptyFunction.into());
    }
    for other in others {
        if other.is_empty() {
            return Err(FunctionError::EmptyFunction.into());
        }
    }

    let mut all = vec![m];
    all.extend_from_slice(others);

    let mut supports = Vec::with_capacity(all.len());
    for function in &all {
        supports.push(function.support(&all)? - 1.0);
    }
    let total: f64 = supports.iter().sum();

    let mut weighted = MassFunction::empty();
    for element in union_of_focal_elements(&all) {
        let mut sum = 0.0;
        for (function, support) in all.iter().zip(&supports) {
            let credibility = if total != 0.0 {
                support / total
            } else {
                1.0 / all.len() as f64
            };
            sum += credibility * function.m(&element);
        }
        if sum != 0.0 {
            weighted.add_mass(element, sum)?;
        }
    }

    let mut result = weighted.clone();
    for _ in 0..others.len() {
        result = dempster(&result, &[&weighted])?;
    }
    Ok(result)
}
