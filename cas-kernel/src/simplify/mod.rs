//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a simpler,
//! equivalent form. It does this by repeatedly applying rewriting rules to the expression in
//! multiple passes, until no more rules apply.
//!
//! The simplifier is deliberately small: it flattens sums and products, distributes products over
//! sums, combines like terms and factors with exact rational coefficients, and evaluates numeric
//! powers. This is enough to decide whether the difference of two expressions is a constant, which
//! is how the [Kronecker delta](crate::funcs::kronecker_delta) decides `d(i,i + 1) = 0`.
//!
//! Function calls are simplified by simplifying their arguments, then canonicalizing the call
//! again.

pub mod rules;
pub mod step;

use crate::{expr::{Expr, Primary}, step_collector::StepCollector};
use log::trace;
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> (Expr, bool) {
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    loop {
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules::all(&expr, step_collector) {
            trace!("event=simplify result={}", new_expr);
            expr = new_expr;
            changed_in_this_pass = true;
            changed_at_least_once = true;
        }

        // then begin recursing into the expression's children
        match expr {
            Expr::Primary(Primary::Call(ref func, ref args)) => {
                let mut args_changed = false;
                let new_args = args.iter()
                    .map(|arg| {
                        let (arg, changed) = inner_simplify(arg, step_collector);
                        args_changed |= changed;
                        arg
                    })
                    .collect::<Vec<_>>();

                if !args_changed {
                    return (expr, changed_at_least_once);
                }

                step_collector.push(Step::EvaluateCall);
                expr = func.eval(new_args);
                changed_in_this_pass = true;
                changed_at_least_once = true;
            },
            Expr::Primary(_) => return (expr, changed_at_least_once),
            Expr::Add(ref mut terms) => {
                for term in terms.iter_mut() {
                    let result = inner_simplify(term, step_collector);
                    *term = result.0;
                    // use |= instead of = to not reset these variables to false if already true
                    changed_in_this_pass |= result.1;
                    changed_at_least_once |= result.1;
                }
            },
            Expr::Mul(ref mut factors) => {
                for factor in factors.iter_mut() {
                    let result = inner_simplify(factor, step_collector);
                    *factor = result.0;
                    changed_in_this_pass |= result.1;
                    changed_at_least_once |= result.1;
                }
            },
            Expr::Exp(ref mut lhs, ref mut rhs) => {
                let result_l = inner_simplify(lhs, step_collector);
                let result_r = inner_simplify(rhs, step_collector);

                **lhs = result_l.0;
                **rhs = result_r.0;
                changed_in_this_pass |= result_l.1 || result_r.1;
                changed_at_least_once |= result_l.1 || result_r.1;
            },
        }

        if !changed_in_this_pass {
            break;
        }
    }

    (expr, changed_at_least_once)
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ()).0
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps).0;
    (expr, steps)
}
