//! Simplification rules for expressions involving addition, including combining like terms.

use crate::{
    expr::Expr,
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};
use rug::Rational;

/// `a+(b+c) = a+b+c`
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Add(_))) {
            return None;
        }

        let new_terms = terms.iter()
            .flat_map(|term| match term {
                Expr::Add(inner) => inner.clone(),
                term => vec![term.clone()],
            })
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::Add(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Splits a term into its numeric coefficient and the rest of the term. Numbers have no rest.
///
/// - `3` -> `(3, None)`
/// - `3*a*b` -> `(3, Some(a*b))`
/// - `a` -> `(1, Some(a))`
fn split_coefficient(term: &Expr) -> (Rational, Option<Expr>) {
    if let Some(value) = term.to_rational() {
        return (value, None);
    }

    match term {
        Expr::Mul(factors) => {
            let mut coefficient = Rational::from(1);
            let mut rest = Vec::with_capacity(factors.len());
            for factor in factors {
                match factor.to_rational() {
                    Some(value) => coefficient *= value,
                    None => rest.push(factor.clone()),
                }
            }

            if rest.is_empty() {
                (coefficient, None)
            } else {
                (coefficient, Some(Expr::Mul(rest).downgrade()))
            }
        },
        term => (Rational::from(1), Some(term.clone())),
    }
}

/// Rebuilds a term from its numeric coefficient and the rest of the term.
fn join_coefficient(coefficient: Rational, rest: Option<Expr>) -> Expr {
    match rest {
        None => Expr::number(coefficient),
        Some(rest) if coefficient == 1 => rest,
        Some(Expr::Mul(mut factors)) => {
            factors.insert(0, Expr::number(coefficient));
            Expr::Mul(factors)
        },
        Some(rest) => Expr::Mul(vec![Expr::number(coefficient), rest]),
    }
}

/// Combines like terms, adding their numeric coefficients exactly. Terms whose coefficients sum
/// to zero are dropped.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `a-a = 0`
/// `1+2 = 3`
/// etc.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        // this is O(n^2) worst case, due to scanning the groups for each term
        let mut groups: Vec<(Option<Expr>, Rational)> = Vec::new();
        for term in terms {
            let (coefficient, rest) = split_coefficient(term);
            match groups.iter_mut().find(|(other, _)| *other == rest) {
                Some((_, sum)) => *sum += coefficient,
                None => groups.push((rest, coefficient)),
            }
        }

        let cancelled = groups.iter().any(|(_, coefficient)| *coefficient == 0);
        if groups.len() == terms.len() && !cancelled {
            return None;
        }

        let new_terms = groups.into_iter()
            .filter(|(_, coefficient)| *coefficient != 0)
            .map(|(rest, coefficient)| join_coefficient(coefficient, rest))
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
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
    fn split() {
        let term = Expr::Mul(vec![Expr::from(3), sym("a"), Expr::number(rational(1, 2))]);
        assert_eq!(split_coefficient(&term), (rational(3, 2), Some(sym("a"))));
        assert_eq!(split_coefficient(&Expr::from(4)), (rational(4, 1), None));
        assert_eq!(split_coefficient(&sym("b")), (rational(1, 1), Some(sym("b"))));
    }

    #[test]
    fn combine() {
        let expr = Expr::Add(vec![
            sym("a"),
            Expr::Mul(vec![Expr::from(2), sym("a")]),
            Expr::from(1),
            Expr::number(rational(1, 2)),
        ]);
        let mut steps = Vec::new();
        let combined = combine_like_terms(&expr, &mut steps).unwrap();
        assert_eq!(combined, Expr::Add(vec![
            Expr::Mul(vec![Expr::from(3), sym("a")]),
            Expr::number(rational(3, 2)),
        ]));
        assert_eq!(steps, [Step::CombineLikeTerms]);
    }

    #[test]
    fn cancel() {
        let expr = sym("a") - sym("a");
        assert_eq!(combine_like_terms(&expr, &mut ()), Some(Expr::from(0)));
    }

    #[test]
    fn nothing_to_combine() {
        let expr = sym("a") + sym("b");
        assert_eq!(all(&expr, &mut ()), None);
    }
}
