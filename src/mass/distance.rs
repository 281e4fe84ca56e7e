/*!
Jousselme distance, similarity, support, and auto-conflict.
*/

use super::mass_function::MassFunction;
use crate::structures::element::Element;
use crate::types::err::{Error, FunctionError};

fn jousselme_cell<E: Element>(a: &E, b: &E) -> Result<f64, Error> {
    if a.is_empty() && b.is_empty() {
        return Ok(1.0);
    }
    let intersection = a.conjunction(b)?.card();
    let union = a.disjunction(b)?.card();
    if union == 0.0 {
        Ok(1.0)
    } else {
        Ok(intersection / union)
    }
}

/// The Jousselme distance between `m` and `other`.
pub(super) fn distance<E: Element>(m: &MassFunction<E>, other: &MassFunction<E>) -> Result<f64, Error> {
    if m.is_empty() || other.is_empty() {
        return Err(FunctionError::EmptyFunction.into());
    }
    let diff = m.difference(other)?;
    let focals: Vec<_> = diff.focals().collect();

    let mut accumulator = 0.0;
    for fi in &focals {
        for fj in &focals {
            let cell = jousselme_cell(fi.element(), fj.element())?;
            accumulator += fi.value() * fj.value() * cell;
        }
    }
    Ok((0.5 * accumulator).max(0.0).sqrt())
}

/// The mean pairwise Jousselme distance across a group of mass functions.
pub(super) fn distance_n<E: Element>(group: &[&MassFunction<E>]) -> Result<f64, Error> {
    if group.len() < 2 {
        return Err(FunctionError::EmptyFunction.into());
    }
    let mut sum = 0.0;
    let mut count = 0usize;
    for i in 0..group.len() {
        for j in (i + 1)..group.len() {
            sum += distance(group[i], group[j])?;
            count += 1;
        }
    }
    Ok(sum / count as f64)
}

/// `½(cos(π·distance(m, other)) + 1)`.
pub(super) fn similarity<E: Element>(m: &MassFunction<E>, other: &MassFunction<E>) -> Result<f64, Error> {
    let d = distance(m, other)?;
    Ok(0.5 * ((std::f64::consts::PI * d).cos() + 1.0))
}

/// The sum of similarity between `m` and every member of `cohort`.
pub(super) fn support<E: Element>(m: &MassFunction<E>, cohort: &[&MassFunction<E>]) -> Result<f64, Error> {
    let mut sum = 0.0;
    for other in cohort {
        sum += similarity(m, other)?;
    }
    Ok(sum)
}

/// The mass at the empty element after `d` successive Smets self-combinations of `m`.
pub(super) fn auto_conflict<E: Element>(m: &MassFunction<E>, d: u32) -> Result<f64, Error> {
    if d < 1 {
        return Err(FunctionError::OutOfRange.into());
    }
    if m.is_empty() {
        return Err(FunctionError::EmptyFunction.into());
    }
    let mut current = m.clone();
    for _ in 0..d {
        current = current.combination_smets(&[&current])?;
    }
    let empty = current.frame_empty().expect("non-empty function has a frame");
    Ok(current.m(&empty))
}
