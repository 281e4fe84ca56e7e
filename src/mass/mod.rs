/*!
Mass functions: the core data structure of the library. A [`MassFunction`] assigns a value to
each of a finite set of [`FocalElement`]s drawn from some [`Element`](crate::structures::element::Element)
implementation, and supports the queries, transformations, and combination rules built on top
of that assignment.
*/

mod combination;
mod decision;
mod distance;
mod focal;
mod mass_function;

pub use combination::Rule;
pub use focal::FocalElement;
pub use mass_function::MassFunction;
