/*!
The abstract elements of a solve: subsets of a finite frame of discernment, represented either
as bit-packed [discrete](discrete) elements or as finite unions of real
[intervals](interval).

Both representations satisfy the same [`Element`] capability, which is everything the
generic [mass-function engine](crate::mass) needs: conjunction, disjunction, opposite,
subset testing, compatibility testing, equality, emptiness/completeness testing, and
cardinality.

[`MassFunction`](crate::mass::MassFunction) is generic over any type implementing `Element`,
rather than going through a runtime vtable, since combination's inner loop is
performance-critical.
*/

pub mod element;
pub use element::Element;

pub mod reference_list;

pub mod discrete;

pub mod interval;
