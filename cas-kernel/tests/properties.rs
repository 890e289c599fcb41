use cas_kernel::{
    error::TypeMismatch,
    expr::Expr,
    funcs::{
        kronecker_delta::kronecker_delta,
        levi_civita::{levi_civita, LeviCivita},
        BuildOptions,
        Func,
    },
    primitive::rational,
    symbol::Symbol,
};
use pretty_assertions::assert_eq;

fn sym(name: &str) -> Expr {
    Expr::symbol(Symbol::new(name))
}

fn above(name: &str) -> Expr {
    Expr::symbol(Symbol::above_fermi(name))
}

fn below(name: &str) -> Expr {
    Expr::symbol(Symbol::below_fermi(name))
}

/// A mix of numbers, plain symbols, level-marked symbols, and compound expressions.
fn sample_indices() -> Vec<Expr> {
    vec![
        Expr::from(-2),
        Expr::from(0),
        Expr::from(3),
        Expr::number(rational(1, 2)),
        sym("i"),
        sym("j"),
        sym("p"),
        above("a"),
        above("b"),
        below("i"),
        below("k"),
        sym("i") + Expr::from(1),
        sym("i") + sym("k"),
        Expr::from(2) * sym("j"),
    ]
}

#[test]
fn kronecker_delta_is_idempotent() {
    for a in sample_indices() {
        for b in sample_indices() {
            let built = kronecker_delta(a.clone(), b.clone());
            if let Some((func, args)) = built.as_call() {
                let rebuilt = func.build(args.to_vec()).unwrap();
                assert_eq!(rebuilt, built, "d({}, {})", a, b);
            }
        }
    }
}

#[test]
fn kronecker_delta_is_symmetric() {
    for a in sample_indices() {
        for b in sample_indices() {
            assert_eq!(
                kronecker_delta(a.clone(), b.clone()),
                kronecker_delta(b.clone(), a.clone()),
                "d({}, {})", a, b,
            );
        }
    }
}

#[test]
fn kronecker_delta_of_equal_indices_is_one() {
    for x in sample_indices() {
        assert_eq!(kronecker_delta(x.clone(), x.clone()), Expr::from(1), "d({}, {})", x, x);
    }
}

#[test]
fn kronecker_delta_across_the_fermi_level_is_zero() {
    for i in [below("i"), below("j")] {
        for a in [above("a"), above("b")] {
            assert_eq!(kronecker_delta(i.clone(), a.clone()), Expr::from(0));
            assert_eq!(kronecker_delta(a.clone(), i.clone()), Expr::from(0));
        }
    }
}

#[test]
fn levi_civita_with_repeats_is_zero() {
    let pool = [sym("i"), sym("j"), sym("k"), Expr::from(1), sym("i") + sym("j")];
    for n in 2..=4 {
        for repeated in &pool {
            for position in 1..n {
                let mut args = pool.iter()
                    .filter(|arg| *arg != repeated)
                    .take(n - 2)
                    .cloned()
                    .collect::<Vec<_>>();
                args.insert(0, repeated.clone());
                args.insert(position, repeated.clone());
                assert_eq!(levi_civita(args.clone()), Expr::from(0), "{:?}", args);
            }
        }
    }
}

#[test]
fn levi_civita_permutation_values() {
    assert_eq!(levi_civita([1, 2, 3]), Expr::from(1));
    assert_eq!(levi_civita([1, 3, 2]), Expr::from(-1));
    assert_eq!(levi_civita([2, 1, 3]), Expr::from(-1));
    assert_eq!(levi_civita([2, 3, 1]), Expr::from(1));
    assert_eq!(levi_civita([3, 1, 2]), Expr::from(1));
    assert_eq!(levi_civita([3, 2, 1]), Expr::from(-1));
    assert_eq!(levi_civita([1, 2, 2]), Expr::from(0));
}

#[test]
fn preferred_and_killable_indices() {
    let (a, i, j, p) = (above("a"), below("i"), below("j"), sym("p"));

    let delta = kronecker_delta(p.clone(), i.clone());
    let view = delta.as_kronecker_delta().unwrap();
    assert_eq!((view.preferred_index(), view.killable_index()), (&i, &p));

    let delta = kronecker_delta(p.clone(), a.clone());
    let view = delta.as_kronecker_delta().unwrap();
    assert_eq!((view.preferred_index(), view.killable_index()), (&a, &p));

    let delta = kronecker_delta(i.clone(), j.clone());
    let view = delta.as_kronecker_delta().unwrap();
    assert_eq!((view.preferred_index(), view.killable_index()), (&i, &j));
}

#[test]
fn forced_evaluation_of_symbolic_levi_civita_fails() {
    let expr = levi_civita([Expr::from(1), sym("j"), Expr::from(3)]);
    let err = expr.doit().unwrap_err();
    assert!(err.is::<TypeMismatch>());

    let view = expr.as_levi_civita().unwrap();
    assert!(LeviCivita::new(view.args()).doit().is_err());
}

#[test]
fn end_to_end() {
    assert_eq!(kronecker_delta(3, 3), Expr::from(1));
    assert_eq!(kronecker_delta(1, 2), Expr::from(0));
    assert_eq!(levi_civita([1, 2, 3]), Expr::from(1));
    assert_eq!(levi_civita([1, 3, 2]), Expr::from(-1));

    let ijk = levi_civita([sym("i"), sym("j"), sym("k")]);
    assert_eq!(ijk.as_call(), Some((&Func::LeviCivita, &[sym("i"), sym("j"), sym("k")][..])));
}

#[test]
fn substitution_then_evaluation() {
    let (i, j) = (Symbol::new("i"), Symbol::new("j"));
    let delta = kronecker_delta(&i, &j);
    assert_eq!(delta.subs(&j, &Expr::from(&i)), Expr::from(1));
    assert_eq!(delta.subs(&i, &Expr::from(2)).subs(&j, &Expr::from(5)), Expr::from(0));

    // structural replacement leaves the rebuilt call alone until forced
    let replaced = delta.xreplace(&Expr::from(&j), &Expr::from(&i));
    assert_eq!(replaced.to_string(), "d(i,i)");
    assert_eq!(replaced.doit().unwrap(), Expr::from(1));
}

#[test]
fn compound_indices_evaluate_once_bound() {
    let (i, j, k) = (Symbol::new("i"), Symbol::new("j"), Symbol::new("k"));
    let shifted = Expr::from(&i) + Expr::from(1);

    let eps = levi_civita([shifted.clone(), Expr::from(&j), Expr::from(&k)]);
    let bound = eps.subs(&i, &Expr::from(1)).subs(&j, &Expr::from(3)).subs(&k, &Expr::from(1));
    assert_eq!(bound, Expr::from(1));

    let eps = levi_civita([shifted.clone(), Expr::from(2), Expr::from(&k)]);
    assert_eq!(eps.subs(&i, &Expr::from(1)), Expr::from(0));

    let options = BuildOptions { evaluate: false };
    let eps = Func::LeviCivita
        .build_with(vec![Expr::from(1) + Expr::from(&k), Expr::from(3), Expr::from(1)], options)
        .unwrap()
        .xreplace(&Expr::from(&k), &Expr::from(1));
    assert_eq!(eps.doit().unwrap(), Expr::from(1));
}

#[test]
fn unevaluated_build_then_doit() {
    let options = BuildOptions { evaluate: false };
    let delta = Func::KroneckerDelta
        .build_with(vec![sym("j"), sym("j") + Expr::from(1)], options)
        .unwrap();
    assert!(delta.as_kronecker_delta().is_some());
    assert_eq!(delta.doit().unwrap(), Expr::from(0));
}

#[test]
fn expressions_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expr>();
    assert_send_sync::<cas_error::Error>();

    let delta = kronecker_delta(sym("p"), below("i"));
    let handles = (0..4)
        .map(|_| {
            let delta = delta.clone();
            std::thread::spawn(move || {
                let view = delta.as_kronecker_delta().map(|view| view.preferred_index().clone());
                (kronecker_delta(below("i"), sym("p")), view)
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        let (rebuilt, preferred) = handle.join().unwrap();
        assert_eq!(rebuilt, delta);
        assert_eq!(preferred, Some(below("i")));
    }
}
