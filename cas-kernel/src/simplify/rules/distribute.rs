//! Simplification rules related to the distributive property.

use crate::{
    expr::Expr,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `a*(b+c) = a*b + a*c`
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        // find the first `Expr::Add`, and distribute every other factor over it
        let idx = factors.iter().position(|factor| matches!(factor, Expr::Add(_)))?;
        let mut factors_to_distribute = factors.to_vec();
        let Expr::Add(add_factor_terms) = factors_to_distribute.remove(idx) else {
            return None;
        };
        if factors_to_distribute.is_empty() {
            return Some(Expr::Add(add_factor_terms));
        }

        let new_terms = add_factor_terms.into_iter()
            .map(|term| Expr::Mul(factors_to_distribute.clone()) * term)
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// Applies all distribution rules.
///
/// The distributive property may or may not reduce the complexity of the expression, since it can
/// introduce additional operations. However, it is necessary for like terms to be combined.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use crate::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::symbol(Symbol::new(name))
    }

    #[test]
    fn negate_sum() {
        let expr = Expr::Mul(vec![Expr::from(-1), sym("a") + sym("b")]);
        assert_eq!(distributive_property(&expr, &mut ()), Some(Expr::Add(vec![
            Expr::Mul(vec![Expr::from(-1), sym("a")]),
            Expr::Mul(vec![Expr::from(-1), sym("b")]),
        ])));
    }

    #[test]
    fn no_sum() {
        let expr = Expr::Mul(vec![Expr::from(2), sym("a")]);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
