//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::{
    expr::Expr,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};
use rug::Rational;

/// `a*(b*c) = a*b*c`
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Expr::Mul(_))) {
            return None;
        }

        let new_factors = factors.iter()
            .flat_map(|factor| match factor {
                Expr::Mul(inner) => inner.clone(),
                factor => vec![factor.clone()],
            })
            .collect::<Vec<_>>();
        Some(Expr::Mul(new_factors))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(Expr::is_zero) {
            Some(Expr::from(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Multiplies all numeric factors together exactly, placing the product first.
///
/// `2*a*3 = 6*a`
/// `(1/2)*a*4 = 2*a`
pub fn combine_numeric_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().filter(|factor| factor.is_number()).count() < 2 {
            return None;
        }

        let mut product = Rational::from(1);
        let mut new_factors = vec![];
        for factor in factors {
            match factor.to_rational() {
                Some(value) => product *= value,
                None => new_factors.push(factor.clone()),
            }
        }

        new_factors.insert(0, Expr::number(product));
        Some(Expr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineNumericFactors);
    Some(opt)
}

/// Combines non-numeric factors with strictly equal bases.
///
/// `a*a = a^2`
/// `a^b*a^c = a^(b+c)`
/// etc.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut new_factors = factors.to_vec();
        let mut current_factor_idx = 0;

        /// Utility function to extract the base and exponent of an expression. If the expression
        /// is not [`Expr::Exp`], the exponent is `1`.
        ///
        /// - `a^b` -> `(a, b)`
        /// - `a` -> `(a, 1)`
        fn get_exp(expr: &Expr) -> (Expr, Expr) {
            match expr {
                Expr::Exp(lhs, rhs) => (*lhs.clone(), *rhs.clone()),
                expr => (expr.clone(), Expr::from(1)),
            }
        }

        // this is O(n^2) worst case, due to scanning the whole vec for each factor
        while current_factor_idx < new_factors.len() {
            if new_factors[current_factor_idx].is_number() {
                current_factor_idx += 1;
                continue;
            }

            let (current_factor, mut current_factor_exp) = get_exp(&new_factors[current_factor_idx]);
            let mut combined = false;

            // look at every factor after `current_factor`
            let mut next_factor_idx = current_factor_idx + 1;
            while next_factor_idx < new_factors.len() {
                let (next_factor, next_factor_exp) = get_exp(&new_factors[next_factor_idx]);

                // bases must be strictly equal
                if current_factor == next_factor {
                    current_factor_exp = current_factor_exp + next_factor_exp;
                    new_factors.remove(next_factor_idx);
                    combined = true;
                } else {
                    next_factor_idx += 1;
                }
            }

            if combined {
                new_factors[current_factor_idx] = Expr::Exp(
                    Box::new(current_factor),
                    Box::new(current_factor_exp),
                );
            }

            current_factor_idx += 1;
        }

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| combine_numeric_factors(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::{primitive::rational, symbol::Symbol};
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::symbol(Symbol::new(name))
    }

    #[test]
    fn numeric_factors() {
        let expr = Expr::Mul(vec![Expr::from(2), sym("a"), Expr::number(rational(3, 4))]);
        assert_eq!(
            combine_numeric_factors(&expr, &mut ()),
            Some(Expr::Mul(vec![Expr::number(rational(3, 2)), sym("a")])),
        );
    }

    #[test]
    fn like_factors() {
        let expr = Expr::Mul(vec![
            sym("a"),
            sym("b"),
            Expr::Exp(Box::new(sym("a")), Box::new(Expr::from(2))),
        ]);
        let mut steps = Vec::new();
        assert_eq!(combine_like_factors(&expr, &mut steps), Some(Expr::Mul(vec![
            Expr::Exp(Box::new(sym("a")), Box::new(Expr::from(3))),
            sym("b"),
        ])));
        assert_eq!(steps, [Step::CombineLikeFactors]);
    }

    #[test]
    fn zero_and_one() {
        let expr = Expr::Mul(vec![sym("a"), Expr::from(0)]);
        assert_eq!(all(&expr, &mut ()), Some(Expr::from(0)));

        let expr = Expr::Mul(vec![Expr::from(1), sym("a")]);
        assert_eq!(all(&expr, &mut ()), Some(sym("a")));
    }
}
