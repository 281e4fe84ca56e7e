/*!
Ordered, duplicate-free collections of [`Element`](crate::structures::Element)s, and the
power-set generators built on top of them.
*/

mod set;
pub use set::Set;

pub mod powerset;
