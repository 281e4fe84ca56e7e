/*!
An ordered, duplicate-free list of atom labels, used to build a
[`DiscreteElement`](crate::structures::discrete::DiscreteElement) from human-readable names
instead of a raw bit pattern.
*/

use crate::types::err::ReferenceListError;

/// A frame's atom labels, in the order their bit positions occupy.
///
/// `ReferenceList` itself carries no element algebra: it is a lookup table from label to bit
/// index and back, consulted by
/// [`DiscreteElement::from_labels`](crate::structures::discrete::DiscreteElement::from_labels)
/// and nowhere else.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferenceList {
    labels: Vec<String>,
}

impl ReferenceList {
    /// Builds a reference list from atom labels, in bit-position order. Fails with
    /// [`DuplicateLabel`](ReferenceListError::DuplicateLabel) if any label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, ReferenceListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Vec::new();
        for label in labels {
            let label = label.into();
            if list.contains(&label) {
                return Err(ReferenceListError::DuplicateLabel);
            }
            list.push(label);
        }
        Ok(ReferenceList { labels: list })
    }

    /// The number of atoms this reference list names.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether this reference list names no atoms.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The bit index of a label, if present.
    pub fn index_of(&self, label: &str) -> Result<usize, ReferenceListError> {
        self.labels
            .iter()
            .position(|candidate| candidate == label)
            .ok_or(ReferenceListError::UnknownLabel)
    }

    /// The label at a bit index, if in range.
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Checks that this reference list names exactly `size` atoms, as required before using it
    /// to build an element of that size.
    pub fn check_size(&self, size: usize) -> Result<(), ReferenceListError> {
        if self.labels.len() == size {
            Ok(())
        } else {
            Err(ReferenceListError::LengthMismatch)
        }
    }

    /// Iterates the labels in bit-position order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_labels() {
        let err = ReferenceList::new(["Yes", "No", "Yes"]).unwrap_err();
        assert_eq!(err, ReferenceListError::DuplicateLabel);
    }

    #[test]
    fn index_round_trips() {
        let refs = ReferenceList::new(["Yes", "No"]).unwrap();
        assert_eq!(refs.index_of("No"), Ok(1));
        assert_eq!(refs.label_at(1), Some("No"));
        assert_eq!(refs.index_of("Maybe"), Err(ReferenceListError::UnknownLabel));
    }

    #[test]
    fn size_check() {
        let refs = ReferenceList::new(["Yes", "No"]).unwrap();
        assert!(refs.check_size(2).is_ok());
        assert_eq!(refs.check_size(3), Err(ReferenceListError::LengthMismatch));
    }
}
