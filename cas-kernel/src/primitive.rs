//! Functions to construct exact [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given numerator and denominator. The result is always in
/// lowest terms with a positive denominator.
///
/// # Panics
///
/// Panics if the denominator is zero.
pub fn rational<N, D>(num: N, den: D) -> Rational
where
    Integer: From<N> + From<D>,
{
    Rational::from((Integer::from(num), Integer::from(den)))
}

/// Returns `n!` for a machine-sized `n`.
pub fn factorial(n: u32) -> Integer {
    Integer::from(Integer::factorial(n))
}
