//! The Kronecker delta.
//!
//! `d(i,j)` is 1 if its two indices are equal and 0 otherwise. Building a delta applies these
//! rules, in order:
//!
//! 1. If the first index orders after the second (see [`Expr`]'s ordering), the indices are
//!    swapped. The delta is symmetric, so `d(j,i)` and `d(i,j)` build the same node.
//! 2. If the indices are strictly equal, the result is 1.
//! 3. If the difference of the indices simplifies to a number, the result is 1 if that number
//!    is zero, and 0 otherwise. For example, `d(i,i + 1) = 0`.
//! 4. If one index lies below the Fermi level and the other above, they can never coincide, and
//!    the result is 0.
//!
//! Otherwise, the delta stays unevaluated.
//!
//! ```
//! use cas_kernel::{expr::Expr, funcs::kronecker_delta::kronecker_delta, symbol::Symbol};
//!
//! let i = Expr::symbol(Symbol::new("i"));
//! let j = Expr::symbol(Symbol::new("j"));
//!
//! assert_eq!(kronecker_delta(3, 3), Expr::from(1));
//! assert_eq!(kronecker_delta(1, 2), Expr::from(0));
//! assert_eq!(kronecker_delta(i.clone(), i.clone()), Expr::from(1));
//! assert_eq!(kronecker_delta(i.clone(), i.clone() + Expr::from(1)), Expr::from(0));
//! assert_eq!(kronecker_delta(j.clone(), i.clone()).to_string(), "d(i,j)");
//! ```

pub mod preference;

use crate::{
    assumptions::Assumption,
    expr::{Expr, Primary},
    funcs::Func,
    simplify::simplify,
};
use log::trace;
use preference::Level;

/// Builds the Kronecker delta `d(i,j)`, canonicalizing it.
pub fn kronecker_delta(i: impl Into<Expr>, j: impl Into<Expr>) -> Expr {
    eval(i.into(), j.into())
}

/// Applies the canonicalization rules to `d(i,j)`.
pub(crate) fn eval(i: Expr, j: Expr) -> Expr {
    if i > j {
        trace!("event=canonicalize func=KroneckerDelta rule=swap");
        return eval(j, i);
    }

    if i == j {
        trace!("event=canonicalize func=KroneckerDelta rule=equal result=1");
        return Expr::from(1);
    }

    let diff = simplify(&(i.clone() - j.clone()));
    if diff.is_number() {
        let result = if diff.is_zero() { 1 } else { 0 };
        trace!("event=canonicalize func=KroneckerDelta rule=numeric_difference result={}", result);
        return Expr::from(result);
    }

    if (i.is(Assumption::BelowFermi) && j.is(Assumption::AboveFermi))
        || (j.is(Assumption::BelowFermi) && i.is(Assumption::AboveFermi))
    {
        trace!("event=canonicalize func=KroneckerDelta rule=level_exclusion result=0");
        return Expr::from(0);
    }

    trace!("event=canonicalize func=KroneckerDelta rule=none");
    Expr::Primary(Primary::Call(Func::KroneckerDelta, vec![i, j]))
}

/// A borrowed view of an unevaluated Kronecker delta node, giving access to the properties
/// derived from its indices.
///
/// None of the properties are stored: each is computed from the assumptions of the indices when
/// asked for.
#[derive(Debug, Clone, Copy)]
pub struct KroneckerDelta<'a> {
    i: &'a Expr,
    j: &'a Expr,
}

impl<'a> KroneckerDelta<'a> {
    /// Returns a view of the expression if it is a Kronecker delta node.
    pub fn from_expr(expr: &'a Expr) -> Option<Self> {
        match expr.as_call() {
            Some((Func::KroneckerDelta, [i, j])) => Some(Self { i, j }),
            _ => None,
        }
    }

    /// The two indices of the delta, in canonical order.
    pub fn indices(&self) -> [&'a Expr; 2] {
        [self.i, self.j]
    }

    fn levels(&self) -> [Level; 2] {
        [Level::of(self.i), Level::of(self.j)]
    }

    /// True if the delta can be non-zero above the Fermi level.
    ///
    /// ```
    /// use cas_kernel::{funcs::kronecker_delta::{kronecker_delta, KroneckerDelta}, symbol::Symbol};
    ///
    /// let a = Symbol::above_fermi("a");
    /// let i = Symbol::below_fermi("i");
    /// let (p, q) = (Symbol::new("p"), Symbol::new("q"));
    ///
    /// let is_above = |x: &Symbol, y: &Symbol| {
    ///     KroneckerDelta::from_expr(&kronecker_delta(x, y)).unwrap().is_above_fermi()
    /// };
    /// assert!(is_above(&p, &a));
    /// assert!(!is_above(&p, &i));
    /// assert!(is_above(&p, &q));
    /// ```
    pub fn is_above_fermi(&self) -> bool {
        preference::can_be_above(self.levels())
    }

    /// True if the delta can be non-zero below the Fermi level.
    pub fn is_below_fermi(&self) -> bool {
        preference::can_be_below(self.levels())
    }

    /// True if the delta is restricted to above the Fermi level.
    pub fn is_only_above_fermi(&self) -> bool {
        let [first, second] = self.levels();
        first.above || second.above
    }

    /// True if the delta is restricted to below the Fermi level.
    pub fn is_only_below_fermi(&self) -> bool {
        let [first, second] = self.levels();
        first.below || second.below
    }

    /// True if the indices are both above or both below the Fermi level, or if neither carries
    /// any information about it.
    pub fn indices_contain_equal_information(&self) -> bool {
        preference::contain_equal_information(self.levels())
    }

    /// The index preferred to keep in the final expression: the one with more information about
    /// the Fermi level, or the first index if both carry the same information.
    pub fn preferred_index(&self) -> &'a Expr {
        self.indices()[preference::preferred_slot(self.levels())]
    }

    /// The index preferred to substitute away in the final expression; the index that is not
    /// the [preferred index](Self::preferred_index).
    pub fn killable_index(&self) -> &'a Expr {
        self.indices()[1 - preference::preferred_slot(self.levels())]
    }
}

impl Expr {
    /// If the expression is a Kronecker delta node, returns a view of it.
    pub fn as_kronecker_delta(&self) -> Option<KroneckerDelta<'_>> {
        KroneckerDelta::from_expr(self)
    }
}
