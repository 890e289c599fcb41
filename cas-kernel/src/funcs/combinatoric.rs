//! Exact evaluation of the Levi-Civita symbol.

use crate::{error::type_mismatch, expr::Expr, funcs::Func, primitive::factorial};
use cas_error::Error;
use rug::Rational;

/// Computes the generalized Levi-Civita value of the given numbers:
///
/// ```text
///  n-1  (  n-1              )
///   Π   (   Π   (x_j - x_i) ) / i!
///  i=0  ( j=i+1             )
/// ```
///
/// For a permutation of distinct integers `1..=n`, the result is the sign of the permutation.
/// If any two values are equal, one of the differences is zero and so is the result. All
/// arithmetic is exact.
///
/// ```
/// use cas_kernel::{funcs::combinatoric::alternating_product, primitive::rational};
///
/// let values = [1, 3, 2].map(|n| rational(n, 1));
/// assert_eq!(alternating_product(&values), -1);
/// ```
pub fn alternating_product(values: &[Rational]) -> Rational {
    let n = values.len();
    let mut result = Rational::from(1);
    for i in 0..n {
        for j in i + 1..n {
            result *= Rational::from(&values[j] - &values[i]);
        }
        // `i` is bounded by the number of arguments, which always fits
        result /= factorial(i as u32);
    }
    result
}

/// Computes the Levi-Civita value of the given arguments, which must all be numbers.
///
/// Returns a [`TypeMismatch`](crate::error::TypeMismatch) error pointing at the first argument
/// that is not a number.
pub fn eval_levi_civita(args: &[Expr]) -> Result<Rational, Error> {
    let values = args.iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.to_rational().ok_or_else(|| type_mismatch(&Func::LeviCivita, args, index))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(alternating_product(&values))
}

#[cfg(test)]
mod tests {
    use crate::{error::TypeMismatch, primitive::rational, symbol::Symbol};
    use super::*;

    fn ints(values: &[i32]) -> Vec<Rational> {
        values.iter().map(|&n| rational(n, 1)).collect()
    }

    /// Sign of a permutation, computed by counting inversions.
    fn inversion_sign(perm: &[i32]) -> i32 {
        let mut sign = 1;
        for i in 0..perm.len() {
            for j in i + 1..perm.len() {
                if perm[i] > perm[j] {
                    sign = -sign;
                }
            }
        }
        sign
    }

    #[test]
    fn permutations_of_three() {
        let cases = [
            ([1, 2, 3], 1),
            ([1, 3, 2], -1),
            ([2, 1, 3], -1),
            ([2, 3, 1], 1),
            ([3, 1, 2], 1),
            ([3, 2, 1], -1),
        ];
        for (perm, sign) in cases {
            assert_eq!(alternating_product(&ints(&perm)), sign, "{:?}", perm);
        }
    }

    #[test]
    fn permutations_of_four_match_inversion_count() {
        let mut perm = [1, 2, 3, 4];
        // walk through all 24 permutations with Heap's algorithm
        let mut c = [0usize; 4];
        assert_eq!(alternating_product(&ints(&perm)), inversion_sign(&perm));
        let mut i = 0;
        while i < perm.len() {
            if c[i] < i {
                if i % 2 == 0 {
                    perm.swap(0, i);
                } else {
                    perm.swap(c[i], i);
                }
                assert_eq!(alternating_product(&ints(&perm)), inversion_sign(&perm), "{:?}", perm);
                c[i] += 1;
                i = 0;
            } else {
                c[i] = 0;
                i += 1;
            }
        }
    }

    #[test]
    fn repeated_values_are_zero() {
        assert_eq!(alternating_product(&ints(&[1, 2, 2])), 0);
        assert_eq!(alternating_product(&ints(&[4, 1, 4, 2])), 0);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(alternating_product(&[]), 1);
        assert_eq!(alternating_product(&ints(&[7])), 1);
    }

    #[test]
    fn non_permutation_values_are_exact() {
        // (3 - 0) / 0! * 1 / 1! = 3
        assert_eq!(alternating_product(&ints(&[0, 3])), 3);
        // (1/2 - 0) = 1/2
        assert_eq!(alternating_product(&[rational(0, 1), rational(1, 2)]), rational(1, 2));
    }

    #[test]
    fn symbolic_argument_is_a_type_mismatch() {
        let args = [Expr::from(1), Expr::from(2), Expr::symbol(Symbol::new("k"))];
        let err = eval_levi_civita(&args).unwrap_err();
        assert_eq!(err.downcast_ref::<TypeMismatch>(), Some(&TypeMismatch {
            name: "LeviCivita".to_string(),
            index: 2,
            found: "a symbol",
        }));
    }
}
