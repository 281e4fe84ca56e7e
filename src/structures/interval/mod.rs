/*!
Subsets of the extended real line, represented as unions of closed intervals.
*/

mod interval;
pub use interval::Interval;

mod interval_element;
pub use interval_element::IntervalElement;
