/*!
Bit-packed subsets of a finite `n`-atom frame.

[`DiscreteElement`] is the workhorse [`Element`](crate::structures::Element) implementation:
every set operation is a handful of word-level bitwise ops, and
[`ElementEnumerator`](enumerator::ElementEnumerator) walks every element of a frame without
ever materializing all `2^n` of them at once.
*/

mod bits;

mod discrete_element;
pub use discrete_element::DiscreteElement;

pub mod enumerator;
pub use enumerator::ElementEnumerator;
