//! Rendering hooks for expressions.
//!
//! The kernel only provides the data for each rendering; layout decisions beyond a single node
//! belong to whatever printer consumes them. Three renderings are available:
//!
//! - plain text, through [`Display`](std::fmt::Display) (`d(i,j)`, `LeviCivita(i, j, k)`);
//! - typeset LaTeX, through the [`Latex`] trait (`\delta_{i j}`, `\varepsilon_{i j k}`);
//! - a constructor-style representation, through [`Expr::repr`] (`KroneckerDelta(i,j)`).

use crate::{expr::{Expr, Primary}, funcs::Func};
use std::{
    fmt::{Display, Formatter, Result},
    ops::Range,
};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// The name a call is printed with in plain text, and the separator placed between arguments.
fn plain_call_parts(func: &Func) -> (&str, &'static str) {
    match func {
        Func::KroneckerDelta => ("d", ","),
        Func::LeviCivita => ("LeviCivita", ", "),
        Func::Named(name) => (name.as_str(), ", "),
    }
}

/// Lays out the plain-text rendering of a call, returning the text and the span of each argument
/// within it.
pub(crate) fn call_layout(func: &Func, args: &[Expr]) -> (String, Vec<Range<usize>>) {
    let (name, separator) = plain_call_parts(func);
    let mut text = format!("{}(", name);
    let mut spans = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            text.push_str(separator);
        }
        let start = text.len();
        text.push_str(&arg.to_string());
        spans.push(start..text.len());
    }
    text.push(')');
    (text, spans)
}

/// Writes `items` separated by `separator`, formatting each one with `write`.
fn write_joined<T>(
    f: &mut Formatter,
    items: &[T],
    separator: &str,
    mut write: impl FnMut(&mut Formatter, &T) -> Result,
) -> Result {
    let mut iter = items.iter();
    if let Some(item) = iter.next() {
        write(f, item)?;
        for item in iter {
            write!(f, "{}", separator)?;
            write(f, item)?;
        }
    }
    Ok(())
}

impl Latex for Primary {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Rational(num) => {
                if *num.numer() < 0 {
                    write!(f, "-\\frac{{{}}}{{{}}}", -num.numer().clone(), num.denom())
                } else {
                    write!(f, "\\frac{{{}}}{{{}}}", num.numer(), num.denom())
                }
            },
            Self::Symbol(sym) => write!(f, "{}", sym.name()),
            Self::Call(Func::KroneckerDelta, args) => {
                write!(f, "\\delta_{{")?;
                write_joined(f, args, " ", |f, arg| arg.fmt_latex(f))?;
                write!(f, "}}")
            },
            Self::Call(Func::LeviCivita, args) => {
                write!(f, "\\varepsilon_{{")?;
                write_joined(f, args, " ", |f, arg| arg.fmt_latex(f))?;
                write!(f, "}}")
            },
            Self::Call(Func::Named(name), args) => {
                write!(f, "\\operatorname{{{}}}\\left(", name)?;
                write_joined(f, args, ", ", |f, arg| arg.fmt_latex(f))?;
                write!(f, "\\right)")
            },
        }
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        let paren = |f: &mut Formatter, child: &Expr, parent: &Expr| {
            if child.needs_parens_in(parent) {
                write!(f, "\\left(")?;
                child.fmt_latex(f)?;
                write!(f, "\\right)")
            } else {
                child.fmt_latex(f)
            }
        };

        match self {
            Self::Primary(primary) => primary.fmt_latex(f),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    term.fmt_latex(f)?;
                }
                for term in iter {
                    match term.negated_term() {
                        Some(negated @ Self::Add(_)) => {
                            write!(f, " - \\left(")?;
                            negated.fmt_latex(f)?;
                            write!(f, "\\right)")?;
                        },
                        Some(negated) => {
                            write!(f, " - ")?;
                            negated.fmt_latex(f)?;
                        },
                        None => {
                            write!(f, " + ")?;
                            term.fmt_latex(f)?;
                        },
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => write_joined(f, factors, " ", |f, factor| paren(f, factor, self)),
            Self::Exp(base, exp) => {
                paren(f, base, self)?;
                write!(f, "^{{")?;
                exp.fmt_latex(f)?;
                write!(f, "}}")
            },
        }
    }
}

/// A wrapper type that formats an [`Expr`] in constructor style, created by [`Expr::repr`].
pub struct Repr<'a>(&'a Expr);

impl Display for Repr<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0 {
            Expr::Primary(Primary::Integer(num)) => write!(f, "Integer({})", num),
            Expr::Primary(Primary::Rational(num)) => {
                write!(f, "Rational({}, {})", num.numer(), num.denom())
            },
            Expr::Primary(Primary::Symbol(sym)) => write!(f, "Symbol('{}')", sym.name()),
            Expr::Primary(Primary::Call(Func::KroneckerDelta, args)) => {
                write!(f, "KroneckerDelta(")?;
                write_joined(f, args, ",", |f, arg| write!(f, "{}", arg))?;
                write!(f, ")")
            },
            Expr::Primary(Primary::Call(func, args)) => {
                write!(f, "{}(", func.name())?;
                write_joined(f, args, ", ", |f, arg| write!(f, "{}", arg.repr()))?;
                write!(f, ")")
            },
            Expr::Add(terms) => {
                write!(f, "Add(")?;
                write_joined(f, terms, ", ", |f, term| write!(f, "{}", term.repr()))?;
                write!(f, ")")
            },
            Expr::Mul(factors) => {
                write!(f, "Mul(")?;
                write_joined(f, factors, ", ", |f, factor| write!(f, "{}", factor.repr()))?;
                write!(f, ")")
            },
            Expr::Exp(base, exp) => write!(f, "Pow({}, {})", base.repr(), exp.repr()),
        }
    }
}

impl Expr {
    /// Returns a wrapper that formats the expression in constructor style, such as
    /// `KroneckerDelta(i,j)` or `Add(Symbol('x'), Integer(1))`.
    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }
}
