//! Version ranges: comparators, conjunctions and `||` unions

mod comparator;
mod operator;
mod set;

pub use comparator::Comparator;
pub use operator::{InvalidOperatorError, Operator};
pub use set::{ComparatorSet, RangeSet};
