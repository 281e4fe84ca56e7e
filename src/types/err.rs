/*!
Error types used in the library.

Names of the error enums mostly overlap with the module they originate from, so `err::{self}`
is often used to prefix use of the types with `err::`.

No operation in this crate retries, logs, or otherwise "fixes up" a bad input: every error
here is surfaced to the caller, and a failing call leaves no observable side effect because
results are always freshly allocated.
*/

/// A union of every error kind raised by the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An error from element construction or algebra.
    Element(ElementError),

    /// An error from a reference list of atom labels.
    ReferenceList(ReferenceListError),

    /// An error from interval construction.
    Interval(IntervalError),

    /// An error from a mass function's mutation, query, discounting, or conditioning methods.
    Function(FunctionError),

    /// An error from a combination rule.
    Combination(CombinationError),
}

impl From<ElementError> for Error {
    fn from(e: ElementError) -> Self {
        Error::Element(e)
    }
}

impl From<ReferenceListError> for Error {
    fn from(e: ReferenceListError) -> Self {
        Error::ReferenceList(e)
    }
}

impl From<IntervalError> for Error {
    fn from(e: IntervalError) -> Self {
        Error::Interval(e)
    }
}

impl From<FunctionError> for Error {
    fn from(e: FunctionError) -> Self {
        Error::Function(e)
    }
}

impl From<CombinationError> for Error {
    fn from(e: CombinationError) -> Self {
        Error::Combination(e)
    }
}

/// Errors from element construction and algebra.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementError {
    /// Two discrete elements were combined or compared but their frame sizes (`n`) differ.
    IncompatibleSize,

    /// An element was added to a [`Set`](crate::sets::Set) or
    /// [`MassFunction`](crate::mass::MassFunction) whose frame is incompatible with the
    /// frame established by the first element inserted.
    IncompatibleFrame,

    /// A frame size `n` was zero or negative, a `maxCard` bound was zero or negative, or a
    /// candidate bit pattern exceeded the `n`-bit range of the frame.
    OutOfRange,
}

/// Errors from a [`ReferenceList`](crate::structures::reference_list::ReferenceList) of atom
/// labels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReferenceListError {
    /// A label already present in the list was inserted again.
    DuplicateLabel,

    /// A reference list's length does not match the size of the element it labels.
    LengthMismatch,

    /// A label passed to an element constructor is not present in the reference list.
    UnknownLabel,
}

/// Errors from [`Interval`](crate::structures::interval::Interval) construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IntervalError {
    /// The interval constructor was called with `start > end` (a `NaN` pair is accepted and
    /// signals the empty interval, so this is not raised for `NaN`).
    InvalidInterval,
}

/// Errors from a mass function's mutation, query, discounting, or conditioning methods.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FunctionError {
    /// An operation requiring at least one focal element (normalise, conditioning,
    /// combination, distance, support, auto-conflict) was called on a mass function with no
    /// focals.
    EmptyFunction,

    /// Conditioning was attempted on the empty element.
    EmptyElement,

    /// A discounting/weakening factor was outside `[0, 1]`, a `maxCard` bound was zero or
    /// negative, or an auto-conflict degree was less than one.
    OutOfRange,

    /// The element passed to an operation is incompatible with the mass function's frame.
    IncompatibleFrame,
}

/// Errors from a combination rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CombinationError {
    /// A static combination facade was called with fewer than two mass functions in total.
    NotEnoughInputs,

    /// Dempster combination found the accumulated mass at the empty element equal to one
    /// after the conjunctive step: every pair of focals conflicted.
    TotalConflict,

    /// The dispatcher was called with an unrecognised rule tag.
    Unsupported,

    /// The mass functions being combined are not pairwise compatible (differing frames).
    IncompatibleFrame,
}

impl From<ElementError> for FunctionError {
    fn from(e: ElementError) -> Self {
        match e {
            ElementError::IncompatibleFrame => FunctionError::IncompatibleFrame,
            ElementError::IncompatibleSize => FunctionError::IncompatibleFrame,
            ElementError::OutOfRange => FunctionError::OutOfRange,
        }
    }
}

impl From<ElementError> for CombinationError {
    fn from(e: ElementError) -> Self {
        match e {
            ElementError::IncompatibleFrame | ElementError::IncompatibleSize => {
                CombinationError::IncompatibleFrame
            }
            ElementError::OutOfRange => CombinationError::IncompatibleFrame,
        }
    }
}

impl From<FunctionError> for CombinationError {
    fn from(e: FunctionError) -> Self {
        match e {
            FunctionError::EmptyFunction => CombinationError::NotEnoughInputs,
            FunctionError::IncompatibleFrame => CombinationError::IncompatibleFrame,
            FunctionError::EmptyElement | FunctionError::OutOfRange => {
                CombinationError::IncompatibleFrame
            }
        }
    }
}
