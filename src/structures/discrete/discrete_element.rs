use std::cell::Cell;

use super::bits::{self, Word};
use crate::structures::element::Element;
use crate::structures::reference_list::ReferenceList;
use crate::types::err::{Error, ElementError};

/// A subset of a finite frame of `n` atoms (`n ≥ 2`), packed one bit per atom.
///
/// Two elements are only ever compared or combined when their `n` agrees; every method here
/// that takes another `DiscreteElement` either returns `false` or fails with
/// [`IncompatibleSize`](ElementError::IncompatibleSize) otherwise, rather than panicking.
///
/// Cardinality (the number of set bits) is cached on first read: bit-twiddling it back out of
/// the packed words is cheap, but [`card`](DiscreteElement::card) is called from the hot loop
/// of `getMax`/`getMin` and the specificity measures, so a [`Cell`] holds the memoized count.
#[derive(Clone, Debug)]
pub struct DiscreteElement {
    size: usize,
    words: Vec<Word>,
    card: Cell<Option<u32>>,
}

impl PartialEq for DiscreteElement {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.words == other.words
    }
}

impl Eq for DiscreteElement {}

impl DiscreteElement {
    fn from_words_unchecked(size: usize, mut words: Vec<Word>) -> Self {
        bits::mask_top(&mut words, size);
        DiscreteElement {
            size,
            words,
            card: Cell::new(None),
        }
    }

    /// The empty element (∅) of an `n`-atom frame.
    pub fn empty(n: usize) -> Result<Self, ElementError> {
        if n < 2 {
            return Err(ElementError::OutOfRange);
        }
        Ok(DiscreteElement::from_words_unchecked(
            n,
            vec![0; bits::num_words(n)],
        ))
    }

    /// The complete element (the whole frame) of an `n`-atom frame.
    pub fn complete(n: usize) -> Result<Self, ElementError> {
        Ok(DiscreteElement::empty(n)?.opposite())
    }

    /// Builds an element directly from its packed words. Fails with
    /// [`OutOfRange`](ElementError::OutOfRange) if `words` is the wrong length for `n`, or if
    /// any bit beyond `n` is set.
    pub fn from_bits(n: usize, words: &[Word]) -> Result<Self, ElementError> {
        if n < 2 {
            return Err(ElementError::OutOfRange);
        }
        if words.len() != bits::num_words(n) {
            return Err(ElementError::OutOfRange);
        }
        if let Some(&top) = words.last() {
            if top & !bits::top_mask(n) != 0 {
                return Err(ElementError::OutOfRange);
            }
        }
        Ok(DiscreteElement::from_words_unchecked(n, words.to_vec()))
    }

    /// The singleton element containing only atom `index` of an `n`-atom frame. Fails with
    /// [`OutOfRange`](ElementError::OutOfRange) if `index >= n`.
    pub fn singleton(n: usize, index: usize) -> Result<Self, ElementError> {
        if index >= n {
            return Err(ElementError::OutOfRange);
        }
        let mut words = vec![0 as Word; bits::num_words(n)];
        let (word_idx, mask) = bits::bit_location(index);
        words[word_idx] |= mask;
        DiscreteElement::from_bits(n, &words)
    }

    /// Builds an element from the atoms named in `labels`, resolved against `refs`. Fails with
    /// [`UnknownLabel`](crate::types::err::ReferenceListError::UnknownLabel) if a label is not
    /// present in `refs`, or [`OutOfRange`](ElementError::OutOfRange) if `refs` names fewer
    /// than two atoms.
    pub fn from_labels(refs: &ReferenceList, labels: &[&str]) -> Result<Self, Error> {
        let n = refs.len();
        if n < 2 {
            return Err(ElementError::OutOfRange.into());
        }
        let mut words = vec![0 as Word; bits::num_words(n)];
        for label in labels {
            let index = refs.index_of(label)?;
            let (word_idx, mask) = bits::bit_location(index);
            words[word_idx] |= mask;
        }
        Ok(DiscreteElement::from_words_unchecked(n, words))
    }

    /// The size `n` of the frame this element belongs to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The packed words backing this element, one atom per bit in atom order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The number of atoms set in this element, i.e. |e|. Memoized after the first call.
    pub fn card(&self) -> u32 {
        if let Some(card) = self.card.get() {
            return card;
        }
        let card = bits::popcount(&self.words);
        self.card.set(Some(card));
        card
    }

    /// The complement of this element within its frame.
    pub fn opposite(&self) -> Self {
        let mut words: Vec<Word> = self.words.iter().map(|word| !word).collect();
        bits::mask_top(&mut words, self.size);
        DiscreteElement::from_words_unchecked(self.size, words)
    }

    /// Set-theoretic intersection. Fails with
    /// [`IncompatibleSize`](ElementError::IncompatibleSize) if the two elements belong to
    /// differently sized frames.
    pub fn conjunction(&self, other: &Self) -> Result<Self, ElementError> {
        if !self.is_compatible(other) {
            return Err(ElementError::IncompatibleSize);
        }
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        Ok(DiscreteElement::from_words_unchecked(self.size, words))
    }

    /// Set-theoretic union. Fails with [`IncompatibleSize`](ElementError::IncompatibleSize) if
    /// the two elements belong to differently sized frames.
    pub fn disjunction(&self, other: &Self) -> Result<Self, ElementError> {
        if !self.is_compatible(other) {
            return Err(ElementError::IncompatibleSize);
        }
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a | b)
            .collect();
        Ok(DiscreteElement::from_words_unchecked(self.size, words))
    }

    /// Whether `self` is a subset of `other`. Returns `false`, rather than an error, when the
    /// two belong to differently sized frames.
    pub fn is_subset(&self, other: &Self) -> bool {
        if !self.is_compatible(other) {
            return false;
        }
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0)
    }

    /// Whether `self` and `other` belong to the same frame.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.size == other.size
    }

    /// Whether this element is ∅.
    pub fn is_empty(&self) -> bool {
        self.card() == 0
    }

    /// Whether this element is the whole frame.
    pub fn is_complete(&self) -> bool {
        self.card() as usize == self.size
    }

    /// The empty element of the frame this element belongs to.
    pub fn get_empty(&self) -> Self {
        DiscreteElement::empty(self.size).expect("size already validated at construction")
    }

    /// The complete element of the frame this element belongs to.
    pub fn get_complete(&self) -> Self {
        self.get_empty().opposite()
    }
}

impl Element for DiscreteElement {
    fn opposite(&self) -> Self {
        self.opposite()
    }

    fn conjunction(&self, other: &Self) -> Result<Self, ElementError> {
        self.conjunction(other)
    }

    fn disjunction(&self, other: &Self) -> Result<Self, ElementError> {
        self.disjunction(other)
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
        self.card() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_complete_are_opposites() {
        let empty = DiscreteElement::empty(3).unwrap();
        let complete = DiscreteElement::complete(3).unwrap();
        assert_eq!(empty.opposite(), complete);
        assert_eq!(complete.opposite(), empty);
        assert_eq!(empty.card(), 0);
        assert_eq!(complete.card(), 3);
    }

    #[test]
    fn rejects_frames_below_two_atoms() {
        assert_eq!(DiscreteElement::empty(1), Err(ElementError::OutOfRange));
        assert_eq!(DiscreteElement::empty(0), Err(ElementError::OutOfRange));
    }

    #[test]
    fn from_bits_rejects_excess_bits() {
        assert_eq!(
            DiscreteElement::from_bits(2, &[0b111]),
            Err(ElementError::OutOfRange)
        );
    }

    #[test]
    fn conjunction_and_disjunction_are_de_morgan_dual() {
        let a = DiscreteElement::from_bits(4, &[0b0011]).unwrap();
        let b = DiscreteElement::from_bits(4, &[0b0101]).unwrap();
        let lhs = a.conjunction(&b).unwrap().opposite();
        let rhs = a.opposite().disjunction(&b.opposite()).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn is_subset_false_across_incompatible_sizes() {
        let a = DiscreteElement::empty(2).unwrap();
        let b = DiscreteElement::empty(3).unwrap();
        assert!(!a.is_subset(&b));
        assert!(!a.is_compatible(&b));
    }

    #[test]
    fn card_is_memoized_and_correct_across_word_boundary() {
        let e = DiscreteElement::from_bits(40, &[Word::MAX, 0b1111]).unwrap();
        assert_eq!(e.card(), 36);
        assert_eq!(e.card(), 36);
    }

    #[test]
    fn from_labels_resolves_against_reference_list() {
        let refs = ReferenceList::new(["Yes", "No", "Maybe"]).unwrap();
        let e = DiscreteElement::from_labels(&refs, &["Yes", "Maybe"]).unwrap();
        assert_eq!(e.card(), 2);
        assert!(e.is_subset(&DiscreteElement::complete(3).unwrap()));
    }
}
