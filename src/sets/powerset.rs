/*!
Generators over the discrete elements of a frame.

Every function here is exponential in `n` by nature: [`power_set`] and
[`subsets_of`] materialize up to `2^n` elements. They exist because decision-support queries
and some combination-rule scaffolding (Dubois-Prade's tree of focals) are naturally phrased
against "every subset", not because the rest of the library pays this cost anywhere else; see
[`ElementEnumerator`](crate::structures::discrete::ElementEnumerator), which these are built
on, for the one place the exponential cost is unavoidable.
*/

use crate::sets::Set;
use crate::structures::discrete::{DiscreteElement, ElementEnumerator};
use crate::types::err::ElementError;

/// The `n` singleton elements of an `n`-atom frame, one per atom.
pub fn atoms(n: usize) -> Result<Set<DiscreteElement>, ElementError> {
    let mut set = Set::new();
    for atom in 0..n {
        let element = DiscreteElement::singleton(n, atom)?;
        set.add(element)?;
    }
    Ok(set)
}

/// Every element of an `n`-atom frame, from ∅ to the complete element.
pub fn power_set(n: usize) -> Result<Set<DiscreteElement>, ElementError> {
    let mut set = Set::new();
    for element in ElementEnumerator::new(n)? {
        set.add(element)?;
    }
    Ok(set)
}

/// Every element of an `n`-atom frame whose cardinality does not exceed `max_card`.
pub fn partial_power_set(n: usize, max_card: u32) -> Result<Set<DiscreteElement>, ElementError> {
    let mut set = Set::new();
    for element in ElementEnumerator::new(n)? {
        if element.card() <= max_card {
            set.add(element)?;
        }
    }
    Ok(set)
}

/// Every subset of a given element, including ∅ and the element itself.
pub fn subsets_of(e: &DiscreteElement) -> Result<Set<DiscreteElement>, ElementError> {
    let mut set = Set::new();
    for candidate in ElementEnumerator::new(e.size())? {
        if candidate.is_subset(e) {
            set.add(candidate)?;
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_set_has_two_to_the_n_elements_with_extremes() {
        let set = power_set(3).unwrap();
        assert_eq!(set.card(), 8);
        assert!(set.contains(&DiscreteElement::empty(3).unwrap()));
        assert!(set.contains(&DiscreteElement::complete(3).unwrap()));
    }

    #[test]
    fn atoms_are_all_singletons() {
        let set = atoms(4).unwrap();
        assert_eq!(set.card(), 4);
        assert!(set.iter().all(|e| e.card() == 1));
    }

    #[test]
    fn partial_power_set_respects_the_cardinality_bound() {
        let set = partial_power_set(4, 2).unwrap();
        assert!(set.iter().all(|e| e.card() <= 2));
        assert!(set.contains(&DiscreteElement::empty(4).unwrap()));
        assert!(!set.contains(&DiscreteElement::complete(4).unwrap()));
    }

    #[test]
    fn subsets_of_an_element_are_bounded_by_its_bits() {
        let e = DiscreteElement::from_bits(4, &[0b0101]).unwrap();
        let subsets = subsets_of(&e).unwrap();
        assert_eq!(subsets.card(), 4);
        for subset in subsets.iter() {
            assert!(subset.is_subset(&e));
        }
    }
}
