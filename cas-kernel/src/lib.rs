//! Symbolic expression kernel with canonicalizing special functions.
//!
//! This crate represents mathematical expressions as immutable trees of [`expr::Expr`] nodes,
//! built from exact numbers, [`symbol::Symbol`]s carrying [`assumptions::Assumptions`], sums,
//! products, powers, and function calls. Building a call to one of the special functions in
//! [`funcs`] runs its canonicalization rules, which decide whether the call reduces to a value,
//! is rebuilt in canonical form, or stays unevaluated.
//!
//! Two special functions are provided:
//!
//! - the [Kronecker delta](funcs::kronecker_delta), with the index-preference rules used to
//! contract it against other expressions;
//! - the [Levi-Civita symbol](funcs::levi_civita), evaluated exactly from its arguments.
//!
//! ```
//! use cas_kernel::{
//!     expr::Expr,
//!     funcs::{kronecker_delta::kronecker_delta, levi_civita::levi_civita},
//!     symbol::Symbol,
//! };
//!
//! let i = Symbol::below_fermi("i");
//! let a = Symbol::above_fermi("a");
//! let p = Symbol::new("p");
//!
//! // indices on opposite sides of the Fermi level never coincide
//! assert_eq!(kronecker_delta(&i, &a), Expr::from(0));
//!
//! let delta = kronecker_delta(&p, &i);
//! let view = delta.as_kronecker_delta().unwrap();
//! assert_eq!(view.killable_index(), &Expr::from(&p));
//!
//! assert_eq!(levi_civita([3, 2, 1]), Expr::from(-1));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`serde`] traits for expressions, symbols, and assumptions.
//!
//! [`serde`]: https://crates.io/crates/serde

pub mod assumptions;
pub mod error;
pub mod expr;
pub mod fmt;
pub mod funcs;
pub mod primitive;
pub mod simplify;
pub mod step_collector;
pub mod symbol;
