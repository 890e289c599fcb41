//! Errors produced while building or evaluating function constructs.
//!
//! The spans of every error point into the plain-text rendering of the offending call, as
//! returned by [`render_call`](crate::funcs::render_call).

use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::{Error, ErrorKind, EXPR};
use crate::{expr::Expr, fmt::call_layout, funcs::Func};

/// A numeric-only operation received an argument that is not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function can only be computed from numeric arguments", self.name),
    labels = [format!("argument #{} is {}", self.index + 1, self.found)],
    help = format!("substitute a {} for every symbolic argument first", "number".fg(EXPR)),
)]
pub struct TypeMismatch {
    /// The name of the function being computed.
    pub name: String,

    /// The position of the first non-numeric argument.
    pub index: usize,

    /// What was found in place of a number.
    pub found: &'static str,
}

/// A function was given the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of arguments given to the `{}` function", self.name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.expected,
        self.given
    )
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// Builds a [`TypeMismatch`] error for the argument at `index` of the given call.
pub(crate) fn type_mismatch(func: &Func, args: &[Expr], index: usize) -> Error {
    let (_, spans) = call_layout(func, args);
    Error::new(vec![spans[index].clone()], TypeMismatch {
        name: func.name().to_string(),
        index,
        found: args[index].kind_name(),
    })
}

/// Builds a [`WrongArgumentCount`] error spanning the whole call.
pub(crate) fn wrong_argument_count(func: &Func, args: &[Expr], expected: usize) -> Error {
    let (text, _) = call_layout(func, args);
    Error::new(vec![0..text.len()], WrongArgumentCount {
        name: func.name().to_string(),
        expected,
        given: args.len(),
    })
}

#[cfg(test)]
mod tests {
    use crate::{funcs::render_call, symbol::Symbol};
    use super::*;

    fn strip(report: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
    }

    #[test]
    fn type_mismatch_points_at_argument() {
        let args = [Expr::from(1), Expr::symbol(Symbol::new("k")), Expr::from(3)];
        let err = type_mismatch(&Func::LeviCivita, &args, 1);
        let src = render_call(&Func::LeviCivita, &args);

        assert_eq!(&src[err.spans[0].clone()], "k");

        let report = strip(&err.report_to_string("expr", &src));
        assert!(report.contains("the `LeviCivita` function can only be computed from numeric arguments"));
        assert!(report.contains("argument #2 is a symbol"));
    }

    #[test]
    fn wrong_argument_count_spans_call() {
        let args = [Expr::symbol(Symbol::new("i"))];
        let err = wrong_argument_count(&Func::KroneckerDelta, &args, 2);
        let src = render_call(&Func::KroneckerDelta, &args);
        assert_eq!(&src[err.spans[0].clone()], "d(i)");

        let report = strip(&err.report_to_string("expr", &src));
        assert!(report.contains("wrong number of arguments given to the `KroneckerDelta` function"));
        assert!(report.contains("takes 2 argument(s); there are 1 argument(s)"));
    }
}
