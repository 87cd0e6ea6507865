//! Shared type aliases used throughout the crate.

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
pub use num_traits::{Signed, Zero};

/// The exact rational type all coordinates and predicates are expressed over.
pub type Rat = BigRational;

/// Builds a [`Rat`] from a plain integer, for literals in tests and constructors.
pub fn rat(n: i64) -> Rat {
    Rat::from_integer(BigInt::from(n))
}
