//! A representation of mathematical expressions that is easy to manipulate symbolically.
//!
//! Expressions are trees of [`Expr`] nodes. The leaves are [`Primary`] values: exact numbers,
//! [`Symbol`]s, and function calls. Sums and products **flatten** their operands, so `x + (y + z)`
//! is a single [`Expr::Add`] node with three children.
//!
//! Nodes are immutable once built: every operation in this crate returns a new tree instead of
//! changing an existing one, so trees can be freely shared between threads.
//!
//! # Strict equality
//!
//! Determining if two expressions are mathematically equal is as hard as simplifying them, so
//! the [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **strict equality**
//! instead. Two expressions are strictly equal if:
//!
//! - They are the same type of expression (i.e. both [`Expr::Primary`], both [`Expr::Add`], etc.).
//! - If both are [`Expr::Primary`], both have equal values. Symbols must agree in name **and**
//! assumptions, and calls must agree in function and arguments, in order.
//! - If both are [`Expr::Add`] or [`Expr::Mul`], both have strictly equal terms / factors, in any
//! order (counting repeats).
//! - If both are [`Expr::Exp`], both have strictly equal base and exponent.
//!
//! Strict equality never reports false positives: strictly equal expressions are always
//! mathematically equal.
//!
//! # Ordering
//!
//! [`Expr`] is also totally ordered, consistently with strict equality. Numbers come first
//! (ordered by value), then symbols (by name, then assumptions), then function calls, powers,
//! products and sums. Function constructs such as the
//! [Kronecker delta](crate::funcs::kronecker_delta) use this order to put their arguments into
//! a canonical order.

mod iter;

use crate::{
    assumptions::Assumption,
    funcs::{levi_civita::LeviCivita, Func},
    primitive::int,
    simplify::simplify,
    symbol::Symbol,
};
use cas_error::Error;
pub use iter::ExprIter;
use log::trace;
use rug::{Integer, Rational};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// A single term / factor, such as a number, symbol, or function call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// An integer, such as `2` or `-144`.
    Integer(Integer),

    /// A rational number, such as `1/2`. Numbers built with [`Expr::number`] or the arithmetic
    /// operators never land here with a denominator of 1, but one built by hand might; every
    /// query on [`Expr`] treats such a value as the integer it is.
    Rational(Rational),

    /// A symbol, such as `i` or `p`.
    Symbol(Symbol),

    /// A function call, such as `d(i,j)` or `f(x, y)`.
    Call(Func, Vec<Expr>),
}

impl Primary {
    /// Rank of the variant in the total order.
    fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Rational(_) => 0,
            Self::Symbol(_) => 1,
            Self::Call(..) => 2,
        }
    }
}

impl Ord for Primary {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs.cmp(rhs),
            (Self::Rational(lhs), Self::Rational(rhs)) => lhs.cmp(rhs),
            (Self::Integer(lhs), Self::Rational(rhs)) => Rational::from(lhs).cmp(rhs),
            (Self::Rational(lhs), Self::Integer(rhs)) => lhs.cmp(&Rational::from(rhs)),
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs.cmp(rhs),
            (Self::Call(lhs_func, lhs_args), Self::Call(rhs_func, rhs_args)) => {
                lhs_func.cmp(rhs_func).then_with(|| lhs_args.cmp(rhs_args))
            },
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Primary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Primary {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Primary {}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Rational(num) => write!(f, "{}/{}", num.numer(), num.denom()),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Call(func, args) => write!(f, "{}", crate::fmt::call_layout(func, args).0),
        }
    }
}

/// A mathematical expression with information about its terms and factors.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together.
    Mul(Vec<Expr>),

    /// An expression raised to a power.
    Exp(Box<Expr>, Box<Expr>),
}

/// Compares two lists of expressions as multisets.
fn cmp_unordered(lhs: &[Expr], rhs: &[Expr]) -> Ordering {
    let mut lhs = lhs.iter().collect::<Vec<_>>();
    let mut rhs = rhs.iter().collect::<Vec<_>>();
    lhs.sort();
    rhs.sort();
    lhs.cmp(&rhs)
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs.cmp(rhs),
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                cmp_unordered(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base.cmp(rhs_base).then_with(|| lhs_exp.cmp(rhs_exp))
            },
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Expr {}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                    for term in iter {
                        match term.negated_term() {
                            Some(negated @ Self::Add(_)) => write!(f, " - ({})", negated)?,
                            Some(negated) => write!(f, " - {}", negated)?,
                            None => write!(f, " + {}", term)?,
                        }
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => {
                let mut iter = factors.iter();
                if let Some(factor) = iter.next() {
                    if factor.needs_parens_in(self) {
                        write!(f, "({})", factor)?;
                    } else {
                        write!(f, "{}", factor)?;
                    }
                    for factor in iter {
                        if factor.needs_parens_in(self) {
                            write!(f, " * ({})", factor)?;
                        } else {
                            write!(f, " * {}", factor)?;
                        }
                    }
                }
                Ok(())
            },
            Self::Exp(base, exp) => {
                if base.needs_parens_in(self) {
                    write!(f, "({})", base)?;
                } else {
                    write!(f, "{}", base)?;
                }
                write!(f, "^")?;
                if exp.needs_parens_in(self) {
                    write!(f, "({})", exp)
                } else {
                    write!(f, "{}", exp)
                }
            },
        }
    }
}

impl Expr {
    /// Rank of the variant in the total order.
    fn rank(&self) -> u8 {
        match self {
            Self::Primary(primary) => primary.rank(),
            Self::Exp(..) => 3,
            Self::Mul(_) => 4,
            Self::Add(_) => 5,
        }
    }

    /// Binding strength of the expression when printed; higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Add(_) => 1,
            Self::Mul(_) => 2,
            Self::Exp(..) => 3,
            // negative numbers and fractions print with an operator in front / in the middle
            Self::Primary(Primary::Integer(n)) if *n < 0 => 2,
            Self::Primary(Primary::Rational(_)) => 2,
            Self::Primary(_) => 4,
        }
    }

    /// Returns true if this expression must be wrapped in parentheses when printed as an operand
    /// of `parent`.
    pub(crate) fn needs_parens_in(&self, parent: &Self) -> bool {
        match parent {
            Self::Exp(..) => self.precedence() <= parent.precedence(),
            _ => self.precedence() < parent.precedence(),
        }
    }

    /// Creates an expression holding the given exact number, as a [`Primary::Integer`] if it is
    /// an integer, or a [`Primary::Rational`] otherwise.
    pub fn number(num: Rational) -> Self {
        if *num.denom() == 1 {
            Self::Primary(Primary::Integer(num.into_numer_denom().0))
        } else {
            Self::Primary(Primary::Rational(num))
        }
    }

    /// Creates a symbol expression.
    pub fn symbol(sym: Symbol) -> Self {
        Self::Primary(Primary::Symbol(sym))
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Integer`], returns the contained integer.
    pub fn into_integer(self) -> Option<Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is an integer, including a [`Primary::Rational`] with a
    /// denominator of 1.
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Primary(Primary::Integer(_)) => true,
            Self::Primary(Primary::Rational(num)) => *num.denom() == 1,
            _ => false,
        }
    }

    /// Returns true if the expression is a concrete number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_) | Primary::Rational(_)))
    }

    /// If the expression is a concrete number, returns its exact value.
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(Rational::from(int)),
            Self::Primary(Primary::Rational(num)) => Some(num.clone()),
            _ => None,
        }
    }

    /// Returns true if the expression is the number zero.
    pub fn is_zero(&self) -> bool {
        self.as_integer().map(|n| n.is_zero()).unwrap_or(false)
    }

    /// Returns true if the expression is the number one.
    pub fn is_one(&self) -> bool {
        self.as_integer().map(|n| *n == 1).unwrap_or(false)
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Call`], returns the function and its arguments.
    pub fn as_call(&self) -> Option<(&Func, &[Expr])> {
        match self {
            Self::Primary(Primary::Call(func, args)) => Some((func, args)),
            _ => None,
        }
    }

    /// A short description of the kind of expression, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primary(Primary::Integer(_)) => "an integer",
            Self::Primary(Primary::Rational(_)) => "a rational number",
            Self::Primary(Primary::Symbol(_)) => "a symbol",
            Self::Primary(Primary::Call(..)) => "a function call",
            Self::Add(_) => "a sum",
            Self::Mul(_) => "a product",
            Self::Exp(..) => "a power",
        }
    }

    /// Returns true if the given assumption is known to hold for this expression.
    ///
    /// Symbols report their declared assumptions. Numbers report the facts that follow from
    /// their value. For any other expression, nothing is known and this returns `false`.
    pub fn is(&self, assumption: Assumption) -> bool {
        match self {
            Self::Primary(Primary::Symbol(sym)) => sym.is(assumption),
            Self::Primary(Primary::Integer(n)) => match assumption {
                Assumption::Integer | Assumption::Real | Assumption::Hermitian => true,
                Assumption::Nonnegative => *n >= 0,
                Assumption::AboveFermi | Assumption::BelowFermi => false,
            },
            Self::Primary(Primary::Rational(n)) => match assumption {
                Assumption::Real | Assumption::Hermitian => true,
                Assumption::Nonnegative => *n >= 0,
                Assumption::Integer => *n.denom() == 1,
                Assumption::AboveFermi | Assumption::BelowFermi => false,
            },
            _ => false,
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or an [`Expr::Primary`] containing the integer 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::from(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::from(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// If the expression is a term with a negative numeric coefficient, returns the same term
    /// with the sign flipped, so that a sum can print it after a minus sign.
    ///
    /// `-3` -> `3`, `-1*x` -> `x`, `x*y*-2` -> `2*x*y`
    pub(crate) fn negated_term(&self) -> Option<Expr> {
        match self {
            Self::Primary(Primary::Integer(n)) if *n < 0 => Some(Self::from(-n.clone())),
            Self::Primary(Primary::Rational(n)) if *n < 0 => Some(Self::number(-n.clone())),
            Self::Mul(factors) => {
                let mut coefficient = Rational::from(1);
                let mut rest = Vec::with_capacity(factors.len());
                for factor in factors {
                    match factor.to_rational() {
                        Some(value) => coefficient *= value,
                        None => rest.push(factor.clone()),
                    }
                }
                if coefficient >= 0 {
                    return None;
                }

                let coefficient = -coefficient;
                if coefficient != 1 {
                    rest.insert(0, Self::number(coefficient));
                }
                Some(Self::Mul(rest).downgrade())
            },
            _ => None,
        }
    }

    /// Folds a compound expression with no free symbols into its simplest form, which for sums,
    /// products and powers of numbers is a single number. Anything else is returned as is.
    ///
    /// `1 + 1` -> `2`
    fn fold_constant(self) -> Expr {
        if matches!(self, Self::Primary(_)) || !self.free_symbols().is_empty() {
            return self;
        }

        let folded = simplify(&self);
        trace!("event=fold_constant from={} to={}", self, folded);
        folded
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first). Function call arguments are visited before the call itself.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the set of symbols appearing anywhere in the expression.
    pub fn free_symbols(&self) -> BTreeSet<&Symbol> {
        self.post_order_iter()
            .filter_map(Expr::as_symbol)
            .collect()
    }

    /// Rebuilds the expression, applying `f` to every direct child. Function calls are rebuilt
    /// through `call`, which decides whether the call is canonicalized again.
    fn map_children<E>(
        &self,
        mut f: impl FnMut(&Expr) -> Result<Expr, E>,
        call: impl FnOnce(&Func, Vec<Expr>) -> Result<Expr, E>,
    ) -> Result<Expr, E> {
        Ok(match self {
            Self::Primary(Primary::Call(func, args)) => {
                let args = args.iter().map(&mut f).collect::<Result<Vec<_>, E>>()?;
                call(func, args)?
            },
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => Self::Add(terms.iter().map(f).collect::<Result<Vec<_>, E>>()?),
            Self::Mul(factors) => Self::Mul(factors.iter().map(f).collect::<Result<Vec<_>, E>>()?),
            Self::Exp(base, exp) => Self::Exp(Box::new(f(base)?), Box::new(f(exp)?)),
        })
    }

    /// Replaces every occurrence of the symbol `old` with `new`.
    ///
    /// Every function call that is rebuilt is canonicalized again, so a construct that was left
    /// unevaluated because its arguments were symbolic may now evaluate. Before that, any
    /// argument left without free symbols is folded, so `LeviCivita(i + 1, 3, 1)` with `i = 1`
    /// sees the integer `2`. Other sums and products are **not** simplified; use
    /// [`simplify`](crate::simplify::simplify) for that.
    pub fn subs(&self, old: &Symbol, new: &Expr) -> Expr {
        if self.as_symbol() == Some(old) {
            return new.clone();
        }

        let result: Result<Expr, std::convert::Infallible> = self.map_children(
            |child| Ok(child.subs(old, new)),
            |func, args| Ok(func.eval(fold_arguments(args))),
        );
        match result {
            Ok(expr) => expr,
            Err(never) => match never {},
        }
    }

    /// Replaces every subexpression strictly equal to `old` with `new`, without canonicalizing
    /// anything that is rebuilt.
    pub fn xreplace(&self, old: &Expr, new: &Expr) -> Expr {
        if self == old {
            return new.clone();
        }

        let result: Result<Expr, std::convert::Infallible> = self.map_children(
            |child| Ok(child.xreplace(old, new)),
            |func, args| Ok(Expr::Primary(Primary::Call(func.clone(), args))),
        );
        match result {
            Ok(expr) => expr,
            Err(never) => match never {},
        }
    }

    /// Forces evaluation of every construct in the expression.
    ///
    /// Levi-Civita nodes are computed numerically (see [`LeviCivita::doit`]), and all other
    /// function calls are canonicalized again with their forced arguments. Arguments without
    /// free symbols are folded first, as in [`Expr::subs`].
    ///
    /// Returns an error if a Levi-Civita node still holds a non-numeric argument.
    pub fn doit(&self) -> Result<Expr, Error> {
        self.map_children(Expr::doit, |func, args| {
            let args = fold_arguments(args);
            match func {
                Func::LeviCivita => LeviCivita::new(&args).doit(),
                _ => Ok(func.eval(args)),
            }
        })
    }

    /// Returns the Hermitian adjoint of the expression, if it is known.
    ///
    /// Numbers are real and therefore self-adjoint, as are the Kronecker delta and the
    /// Levi-Civita symbol. Symbols are self-adjoint if they are assumed to be real or Hermitian.
    /// The adjoint of a sum is the sum of the adjoints, and the adjoint of a product is the
    /// product of the adjoints in reverse order. Any other expression returns `None`.
    pub fn adjoint(&self) -> Option<Expr> {
        match self {
            Self::Primary(Primary::Integer(_) | Primary::Rational(_)) => Some(self.clone()),
            Self::Primary(Primary::Symbol(sym)) => {
                if sym.is(Assumption::Real) || sym.is(Assumption::Hermitian) {
                    Some(self.clone())
                } else {
                    None
                }
            },
            Self::Primary(Primary::Call(func, _)) => {
                if func.is_self_adjoint() {
                    Some(self.clone())
                } else {
                    None
                }
            },
            Self::Add(terms) => terms.iter()
                .map(Expr::adjoint)
                .collect::<Option<Vec<_>>>()
                .map(Self::Add),
            Self::Mul(factors) => factors.iter()
                .rev()
                .map(Expr::adjoint)
                .collect::<Option<Vec<_>>>()
                .map(Self::Mul),
            Self::Exp(base, exp) => {
                if exp.is_number() {
                    Some(Self::Exp(Box::new(base.adjoint()?), exp.clone()))
                } else {
                    None
                }
            },
        }
    }
}

/// Folds every call argument that has no free symbols.
fn fold_arguments(args: Vec<Expr>) -> Vec<Expr> {
    args.into_iter().map(Expr::fold_constant).collect()
}

impl From<Integer> for Expr {
    fn from(int: Integer) -> Self {
        Self::Primary(Primary::Integer(int))
    }
}

impl From<Rational> for Expr {
    fn from(num: Rational) -> Self {
        Self::number(num)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::Primary(Primary::Integer(int(n)))
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::Primary(Primary::Integer(int(n)))
    }
}

impl From<Symbol> for Expr {
    fn from(sym: Symbol) -> Self {
        Self::symbol(sym)
    }
}

impl From<&Symbol> for Expr {
    fn from(sym: &Symbol) -> Self {
        Self::symbol(sym.clone())
    }
}

/// Adds two [`Primary`]s together. If both are numbers, they are added exactly. Otherwise, the
/// two [`Primary`]s are wrapped in an [`Expr::Add`].
impl Add<Primary> for Primary {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => Expr::from(lhs + rhs),
            (lhs @ (Primary::Integer(_) | Primary::Rational(_)), rhs @ (Primary::Integer(_) | Primary::Rational(_))) => {
                let lhs = Expr::Primary(lhs);
                let rhs = Expr::Primary(rhs);
                match (lhs.to_rational(), rhs.to_rational()) {
                    (Some(l), Some(r)) => Expr::number(l + r),
                    _ => Expr::Add(vec![lhs, rhs]),
                }
            },
            (lhs, rhs) => Expr::Add(vec![Expr::Primary(lhs), Expr::Primary(rhs)]),
        }
    }
}

/// Multiplies two [`Primary`]s together. If both are numbers, they are multiplied exactly.
/// Otherwise, the two [`Primary`]s are wrapped in an [`Expr::Mul`].
impl Mul<Primary> for Primary {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => Expr::from(lhs * rhs),
            (lhs @ (Primary::Integer(_) | Primary::Rational(_)), rhs @ (Primary::Integer(_) | Primary::Rational(_))) => {
                let lhs = Expr::Primary(lhs);
                let rhs = Expr::Primary(rhs);
                match (lhs.to_rational(), rhs.to_rational()) {
                    (Some(l), Some(r)) => Expr::number(l * r),
                    _ => Expr::Mul(vec![lhs, rhs]),
                }
            },
            (lhs, rhs) => Expr::Mul(vec![Expr::Primary(lhs), Expr::Primary(rhs)]),
        }
    }
}

/// Adds two [`Expr`]s together. No simplification is done, except for the case where the operands
/// are a mix of [`Primary`] and / or [`Expr::Add`], in which case both are combined in one list
/// of terms (flattening).
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs + rhs,
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Subtracts two [`Expr`]s, as `lhs + -1 * rhs`. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs.neg()
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done, except for the case where the
/// operands are a mix of [`Primary`] and / or [`Expr::Mul`], in which case both are combined in
/// one list of factors (flattening).
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs * rhs,
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(int)) => Self::Primary(Primary::Integer(-int)),
            Self::Primary(Primary::Rational(num)) => Self::Primary(Primary::Rational(-num)),
            expr => Self::from(-1) * expr,
        }
    }
}
