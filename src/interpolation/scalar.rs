//! Numeric bound shared by the builder, evaluator and solver.
//!
//! Anything implementing [`num_traits::Num`] qualifies. The intended
//! coordinate type is [`num_rational::BigRational`], where every operation
//! used here is exact. Machine integers work as long as the system stays
//! integral. `f64` is accepted but carries no stability guarantee: the
//! solver pivots on the first non-zero entry, however small.

use std::fmt::Debug;

use num_traits::Num;

pub trait Scalar: Clone + Debug + Num {}

impl<T> Scalar for T where T: Clone + Debug + Num {}
