//! The Levi-Civita symbol.
//!
//! `LeviCivita(i, j, k, ...)` is the sign of the permutation given by its arguments: 1 for even
//! permutations, -1 for odd permutations, and 0 if any argument repeats. Building the symbol
//! applies these rules, in order:
//!
//! 1. If every argument is an integer, the result is computed exactly with
//!    [`alternating_product`].
//! 2. If any two arguments are strictly equal, the result is 0.
//!
//! Otherwise, the symbol stays unevaluated. Arguments are never reordered, since swapping two of
//! them flips the sign.
//!
//! ```
//! use cas_kernel::{expr::Expr, funcs::levi_civita::levi_civita, symbol::Symbol};
//!
//! let i = Expr::symbol(Symbol::new("i"));
//! let j = Expr::symbol(Symbol::new("j"));
//!
//! assert_eq!(levi_civita([1, 2, 3]), Expr::from(1));
//! assert_eq!(levi_civita([1, 3, 2]), Expr::from(-1));
//! assert_eq!(levi_civita([i.clone(), j.clone(), i.clone()]), Expr::from(0));
//! assert_eq!(levi_civita([i, j]).to_string(), "LeviCivita(i, j)");
//! ```

use crate::{
    expr::{Expr, Primary},
    funcs::{combinatoric::{alternating_product, eval_levi_civita}, Func},
};
use cas_error::Error;
use log::{debug, trace};

/// Builds the Levi-Civita symbol with the given arguments, canonicalizing it.
pub fn levi_civita<I>(args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    eval(args.into_iter().map(Into::into).collect())
}

/// Builds the Levi-Civita symbol with the given arguments. This is another name for
/// [`levi_civita`].
pub fn eijk<I>(args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    levi_civita(args)
}

/// Returns true if any two of the expressions are strictly equal.
fn has_repeats(args: &[Expr]) -> bool {
    let mut sorted = args.iter().collect::<Vec<_>>();
    sorted.sort();
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}

/// Applies the canonicalization rules to `LeviCivita(args)`.
pub(crate) fn eval(args: Vec<Expr>) -> Expr {
    if args.iter().all(Expr::is_integer) {
        let values = args.iter()
            .filter_map(Expr::to_rational)
            .collect::<Vec<_>>();
        let result = alternating_product(&values);
        trace!("event=canonicalize func=LeviCivita rule=integer_arguments result={}", result);
        return Expr::number(result);
    }

    if has_repeats(&args) {
        trace!("event=canonicalize func=LeviCivita rule=repeated_argument result=0");
        return Expr::from(0);
    }

    trace!("event=canonicalize func=LeviCivita rule=none");
    Expr::Primary(Primary::Call(Func::LeviCivita, args))
}

/// A borrowed view of the arguments of a Levi-Civita symbol, which can be forced to evaluate.
#[derive(Debug, Clone, Copy)]
pub struct LeviCivita<'a> {
    args: &'a [Expr],
}

impl<'a> LeviCivita<'a> {
    /// Creates a view over the given arguments. The arguments do not need to be canonical.
    pub fn new(args: &'a [Expr]) -> Self {
        Self { args }
    }

    /// Returns a view of the expression if it is a Levi-Civita node.
    pub fn from_expr(expr: &'a Expr) -> Option<Self> {
        match expr.as_call() {
            Some((Func::LeviCivita, args)) => Some(Self::new(args)),
            _ => None,
        }
    }

    /// The arguments of the symbol.
    pub fn args(&self) -> &'a [Expr] {
        self.args
    }

    /// Forces numeric evaluation of the symbol.
    ///
    /// Unlike building the symbol, this evaluates any numeric arguments, including non-integer
    /// rationals, with the generalized formula of [`alternating_product`].
    ///
    /// Returns a [`TypeMismatch`](crate::error::TypeMismatch) error if any argument is not a
    /// number.
    pub fn doit(&self) -> Result<Expr, Error> {
        debug!("event=doit func=LeviCivita args={}", self.args.len());
        eval_levi_civita(self.args).map(Expr::number)
    }
}

impl Expr {
    /// If the expression is a Levi-Civita node, returns a view of it.
    pub fn as_levi_civita(&self) -> Option<LeviCivita<'_>> {
        LeviCivita::from_expr(self)
    }
}
