//! Simplification rules for power expressions.

use crate::{
    expr::Expr,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use log::trace;
use rug::{ops::PowAssign, Rational};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        if rhs.is_zero() {
            Some(Expr::from(1))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `0^a = 0`, for positive numbers `a`
///
/// `0^0` is handled by the [`power_zero`] rule.
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if lhs.is_zero() && rhs.to_rational()? > 0 {
            Some(Expr::from(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| {
        if lhs.is_one() {
            Some(Expr::from(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`, for integers `c`
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        match lhs {
            Expr::Exp(base, exponent) if rhs.is_integer() => Some(Expr::Exp(
                base.clone(),
                Box::new(*exponent.clone() * rhs.clone()),
            )),
            _ => None,
        }
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// Largest result, in bits of numerator or denominator, that [`numeric_power`] will compute.
pub const MAX_POWER_BITS: u64 = 1 << 16;

/// Computes numeric powers with integer exponents exactly.
///
/// Powers whose result would need more than [`MAX_POWER_BITS`] bits are left alone.
///
/// `2^3 = 8`
/// `(1/2)^-2 = 4`
pub fn numeric_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        let mut base = lhs.to_rational()?;
        let exponent = rhs.as_integer()?.to_i32()?;
        if base == 0 && exponent < 0 {
            return None;
        }

        let base_bits = base.numer().significant_bits().max(base.denom().significant_bits());
        if u64::from(base_bits) * u64::from(exponent.unsigned_abs()) > MAX_POWER_BITS {
            trace!("event=skip_numeric_power base_bits={} exponent={}", base_bits, exponent);
            return None;
        }

        base.pow_assign(exponent);
        Some(Expr::number(base))
    })?;

    step_collector.push(Step::NumericPower);
    Some(opt)
}

/// Applies all power rules.
///
/// All power rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
        .or_else(|| numeric_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::{primitive::rational, symbol::Symbol};
    use pretty_assertions::assert_eq;
    use super::*;

    fn pow(base: Expr, exp: Expr) -> Expr {
        Expr::Exp(Box::new(base), Box::new(exp))
    }

    #[test]
    fn numeric() {
        assert_eq!(numeric_power(&pow(Expr::from(2), Expr::from(3)), &mut ()), Some(Expr::from(8)));
        assert_eq!(
            numeric_power(&pow(Expr::number(rational(1, 2)), Expr::from(-2)), &mut ()),
            Some(Expr::from(4)),
        );
        assert_eq!(
            numeric_power(&pow(Expr::from(2), Expr::from(-1)), &mut ()),
            Some(Expr::number(rational(1, 2))),
        );
    }

    #[test]
    fn huge_numeric_power_is_left_alone() {
        let huge = pow(Expr::from(2), Expr::from(2_000_000_000));
        assert_eq!(all(&huge, &mut ()), None);
        assert_eq!(
            numeric_power(&pow(Expr::number(rational(1, 3)), Expr::from(-100_000)), &mut ()),
            None,
        );

        // the bound is on the result, so a small base may go further
        let limit = i32::try_from(MAX_POWER_BITS / 2).unwrap();
        assert!(numeric_power(&pow(Expr::from(2), Expr::from(limit)), &mut ()).is_some());
        assert_eq!(numeric_power(&pow(Expr::from(2), Expr::from(limit + 1)), &mut ()), None);

        let x = Expr::symbol(Symbol::new("x"));
        let delta = crate::funcs::kronecker_delta::kronecker_delta(huge.clone(), x.clone());
        assert_eq!(delta.as_kronecker_delta().unwrap().indices(), [&x, &huge]);
    }

    #[test]
    fn zero_base_with_negative_exponent_is_left_alone() {
        assert_eq!(all(&pow(Expr::from(0), Expr::from(-1)), &mut ()), None);
    }

    #[test]
    fn trivial_powers() {
        let x = Expr::symbol(Symbol::new("x"));
        assert_eq!(all(&pow(x.clone(), Expr::from(0)), &mut ()), Some(Expr::from(1)));
        assert_eq!(all(&pow(x.clone(), Expr::from(1)), &mut ()), Some(x.clone()));
        assert_eq!(all(&pow(Expr::from(1), x.clone()), &mut ()), Some(Expr::from(1)));
        assert_eq!(all(&pow(Expr::from(0), Expr::from(2)), &mut ()), Some(Expr::from(0)));
    }
}
