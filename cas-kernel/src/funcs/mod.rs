//! Function constructs and the rules that canonicalize them.
//!
//! A function call is built through [`Func::build`] (or the typed constructors in each submodule,
//! such as [`kronecker_delta::kronecker_delta`]). Building a call runs the construct's
//! canonicalization rules, which decide between three outcomes:
//!
//! - the call reduces to a **terminal value**, such as `KroneckerDelta(3, 3) = 1`;
//! - the call is rebuilt in a **canonical form**, such as `KroneckerDelta(j, i) = d(i,j)`;
//! - the call is returned **unevaluated**, with its arguments preserved.
//!
//! Canonicalization is idempotent: building a call from the arguments of a canonical call
//! returns the same call.

pub mod combinatoric;
pub mod kronecker_delta;
pub mod levi_civita;

use crate::{error::wrong_argument_count, expr::{Expr, Primary}};
use cas_error::Error;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies the function applied in a [`Primary::Call`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// The Kronecker delta, `d(i,j)`. See [`kronecker_delta`].
    KroneckerDelta,

    /// The Levi-Civita symbol. See [`levi_civita`].
    LeviCivita,

    /// An undefined function, such as `f(x)`. Calls to undefined functions never evaluate.
    Named(String),
}

/// Options that control how a function call is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Whether to run the canonicalization rules. If `false`, the call is returned unevaluated
    /// with its arguments in the given order (the arity is still checked).
    pub evaluate: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { evaluate: true }
    }
}

impl Func {
    /// The name of the function.
    pub fn name(&self) -> &str {
        match self {
            Self::KroneckerDelta => "KroneckerDelta",
            Self::LeviCivita => "LeviCivita",
            Self::Named(name) => name,
        }
    }

    /// The exact number of arguments the function requires, or `None` if it accepts any number.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::KroneckerDelta => Some(2),
            Self::LeviCivita | Self::Named(_) => None,
        }
    }

    /// Whether the value of the function commutes with other factors under multiplication.
    pub fn is_commutative(&self) -> bool {
        true
    }

    /// Whether the function is its own Hermitian adjoint.
    pub fn is_self_adjoint(&self) -> bool {
        matches!(self, Self::KroneckerDelta | Self::LeviCivita)
    }

    /// Builds a call to this function with the given arguments, canonicalizing it.
    ///
    /// Returns an error if the number of arguments does not match the function's
    /// [arity](Self::arity).
    pub fn build(&self, args: Vec<Expr>) -> Result<Expr, Error> {
        self.build_with(args, BuildOptions::default())
    }

    /// Builds a call to this function with the given arguments and options.
    ///
    /// Returns an error if the number of arguments does not match the function's
    /// [arity](Self::arity).
    pub fn build_with(&self, args: Vec<Expr>, options: BuildOptions) -> Result<Expr, Error> {
        if let Some(expected) = self.arity() {
            if args.len() != expected {
                return Err(wrong_argument_count(self, &args, expected));
            }
        }

        if options.evaluate {
            Ok(self.eval(args))
        } else {
            trace!("event=canonicalize func={} rule=skipped", self.name());
            Ok(Expr::Primary(Primary::Call(self.clone(), args)))
        }
    }

    /// Runs the canonicalization rules of this function on arguments whose count is already
    /// known to be valid.
    pub(crate) fn eval(&self, args: Vec<Expr>) -> Expr {
        match self {
            Self::KroneckerDelta => match <[Expr; 2]>::try_from(args) {
                Ok([i, j]) => kronecker_delta::eval(i, j),
                Err(args) => Expr::Primary(Primary::Call(Self::KroneckerDelta, args)),
            },
            Self::LeviCivita => levi_civita::eval(args),
            Self::Named(_) => Expr::Primary(Primary::Call(self.clone(), args)),
        }
    }
}

/// Returns the plain-text rendering of a call to `func` with the given arguments.
///
/// Spans of errors produced while building or evaluating a call point into this text.
pub fn render_call(func: &Func, args: &[Expr]) -> String {
    crate::fmt::call_layout(func, args).0
}

#[cfg(test)]
mod tests {
    use crate::{error::WrongArgumentCount, symbol::Symbol};
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::symbol(Symbol::new(name))
    }

    #[test]
    fn kronecker_delta_requires_two_arguments() {
        for args in [vec![], vec![sym("i")], vec![sym("i"), sym("j"), sym("k")]] {
            let given = args.len();
            let err = Func::KroneckerDelta.build(args).unwrap_err();
            assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount {
                name: "KroneckerDelta".to_string(),
                expected: 2,
                given,
            }));
        }
    }

    #[test]
    fn arity_is_checked_without_evaluation() {
        let options = BuildOptions { evaluate: false };
        assert!(Func::KroneckerDelta.build_with(vec![sym("i")], options).is_err());
    }

    #[test]
    fn unevaluated_build_keeps_arguments() {
        let options = BuildOptions { evaluate: false };
        let expr = Func::KroneckerDelta.build_with(vec![Expr::from(3), Expr::from(3)], options).unwrap();
        assert_eq!(expr.to_string(), "d(3,3)");

        let expr = Func::KroneckerDelta.build_with(vec![sym("j"), sym("i")], options).unwrap();
        assert_eq!(expr.to_string(), "d(j,i)");
    }

    #[test]
    fn levi_civita_accepts_any_arity() {
        assert_eq!(Func::LeviCivita.build(vec![]).unwrap(), Expr::from(1));
        assert_eq!(Func::LeviCivita.build(vec![Expr::from(5)]).unwrap(), Expr::from(1));
    }

    #[test]
    fn named_functions_stay_unevaluated() {
        let f = Func::Named("f".to_string());
        let expr = f.build(vec![Expr::from(1), Expr::from(1)]).unwrap();
        assert_eq!(expr.to_string(), "f(1, 1)");
        assert!(f.is_commutative());
        assert!(!f.is_self_adjoint());
    }

    #[test]
    fn render() {
        assert_eq!(render_call(&Func::LeviCivita, &[sym("i"), Expr::from(2)]), "LeviCivita(i, 2)");
    }
}
