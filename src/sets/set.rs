use crate::structures::element::Element;
use crate::types::err::ElementError;

/// An ordered, duplicate-free collection of elements drawn from a single frame.
///
/// Membership uses [`Element::eq`](PartialEq::eq), so a `Set<DiscreteElement>` deduplicates by
/// bit pattern rather than by insertion identity. The frame is established by the first
/// element inserted; every later insertion is checked against it with
/// [`is_compatible`](Element::is_compatible).
#[derive(Clone, Debug)]
pub struct Set<E: Element> {
    elements: Vec<E>,
}

impl<E: Element> Default for Set<E> {
    fn default() -> Self {
        Set::new()
    }
}

impl<E: Element> Set<E> {
    /// An empty set, with no frame yet established.
    pub fn new() -> Self {
        Set {
            elements: Vec::new(),
        }
    }

    /// Inserts `element`, doing nothing if an equal element is already present. Fails with
    /// [`IncompatibleFrame`](ElementError::IncompatibleFrame) if the set is non-empty and
    /// `element` does not share the existing frame.
    pub fn add(&mut self, element: E) -> Result<(), ElementError> {
        if let Some(first) = self.elements.first() {
            if !first.is_compatible(&element) {
                return Err(ElementError::IncompatibleFrame);
            }
        }
        if !self.elements.contains(&element) {
            self.elements.push(element);
        }
        Ok(())
    }

    /// The number of distinct elements in this set.
    pub fn card(&self) -> usize {
        self.elements.len()
    }

    /// Whether this set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    /// Whether `element` is a member of this set.
    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Whether every element of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.iter().all(|e| other.contains(e))
    }

    /// The set of elements present in either `self` or `other`.
    pub fn union(&self, other: &Self) -> Result<Self, ElementError> {
        let mut result = self.clone();
        for element in other.iter() {
            result.add(element.clone())?;
        }
        Ok(result)
    }

    /// The set of elements present in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        Set {
            elements: self
                .elements
                .iter()
                .filter(|e| other.contains(e))
                .cloned()
                .collect(),
        }
    }
}

impl<E: Element> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Set::new();
        for element in iter {
            set.add(element)
                .expect("iterator produced elements from more than one frame");
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::discrete::DiscreteElement;

    #[test]
    fn duplicates_are_not_added_twice() {
        let mut set = Set::new();
        set.add(DiscreteElement::empty(3).unwrap()).unwrap();
        set.add(DiscreteElement::empty(3).unwrap()).unwrap();
        assert_eq!(set.card(), 1);
    }

    #[test]
    fn rejects_incompatible_frame() {
        let mut set = Set::new();
        set.add(DiscreteElement::empty(2).unwrap()).unwrap();
        let err = set.add(DiscreteElement::empty(3).unwrap()).unwrap_err();
        assert_eq!(err, ElementError::IncompatibleFrame);
    }

    #[test]
    fn union_and_intersection() {
        let a: Set<DiscreteElement> = [
            DiscreteElement::from_bits(3, &[0b001]).unwrap(),
            DiscreteElement::from_bits(3, &[0b010]).unwrap(),
        ]
        .into_iter()
        .collect();
        let b: Set<DiscreteElement> = [
            DiscreteElement::from_bits(3, &[0b010]).unwrap(),
            DiscreteElement::from_bits(3, &[0b100]).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(a.union(&b).unwrap().card(), 3);
        assert_eq!(a.intersection(&b).card(), 1);
        assert!(a.intersection(&b).is_subset(&a));
    }
}
