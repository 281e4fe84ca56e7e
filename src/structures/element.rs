use crate::types::err::ElementError;

/// The capability a type must satisfy to stand in for `E` in
/// [`MassFunction<E>`](crate::mass::MassFunction).
///
/// An implementor represents a subset of some fixed frame of discernment. Two elements are
/// only ever combined, compared, or tested for subset/compatibility when they share the same
/// frame; [`is_compatible`](Element::is_compatible) is how callers (and the mass-function
/// engine internally) check this before doing anything that would otherwise panic or silently
/// produce nonsense.
///
/// Nothing here assumes the frame is finite in cardinality terms:
/// [`card`](Element::card) returns a `f64` because
/// [`IntervalElement`](crate::structures::interval::IntervalElement)'s cardinality is a real
/// number (and can be infinite), while
/// [`DiscreteElement`](crate::structures::discrete::DiscreteElement) exposes its own `card`
/// as a `u32` for precise counting; the two are unrelated methods of the same name, the
/// inherent one shadows this trait method in ordinary calls.
pub trait Element: Clone + PartialEq {
    /// The complement of `self` within its frame.
    fn opposite(&self) -> Self;

    /// Set-theoretic intersection (⊓). Fails with
    /// [`IncompatibleFrame`](ElementError::IncompatibleFrame) if `self` and `other` do not
    /// share a frame.
    fn conjunction(&self, other: &Self) -> Result<Self, ElementError>;

    /// Set-theoretic union (⊔). Fails with
    /// [`IncompatibleFrame`](ElementError::IncompatibleFrame) if `self` and `other` do not
    /// share a frame.
    fn disjunction(&self, other: &Self) -> Result<Self, ElementError>;

    /// Whether `self` is a subset of `other`. Returns `false`, rather than an error, when the
    /// two do not share a frame.
    fn is_subset(&self, other: &Self) -> bool;

    /// Whether `self` and `other` share a frame and may be combined or compared directly.
    fn is_compatible(&self, other: &Self) -> bool;

    /// Whether `self` is the empty element of its frame.
    fn is_empty(&self) -> bool;

    /// Whether `self` is the complete element (the whole frame) of its frame.
    fn is_complete(&self) -> bool;

    /// The empty element of the frame `self` belongs to.
    fn get_empty(&self) -> Self;

    /// The complete element of the frame `self` belongs to.
    fn get_complete(&self) -> Self;

    /// A frame-aware measure of cardinality, used generically wherever the engine compares or
    /// bounds an element's size (specificity, non-specificity, `getMax`/`getMin`'s `maxCard`
    /// bound). Concrete element types also expose a same-named inherent `card` with a more
    /// precise return type; that inherent method is what ordinary callers should reach for.
    fn card(&self) -> f64;
}
