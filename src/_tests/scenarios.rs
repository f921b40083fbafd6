//! **(internal)** The concrete seed scenarios S1-S6 plus the two-variable sanity check, encoded as
//! exact-value regression tests against [`crate::evaluate`].

use crate::kripke::{ExplicitKripkeStructure, Variable};
use crate::{evaluate, AtomicFormula, ComparisonOp, Formula};

/// The one-variable graph used throughout: `0 -> 1 -> 2 -> 2`, `max = 2`.
fn linear_graph() -> ExplicitKripkeStructure {
    ExplicitKripkeStructure::new(
        vec![Variable::new("x", 2)],
        vec![vec![0], vec![1], vec![2]],
        vec![(vec![0], vec![1]), (vec![1], vec![2]), (vec![2], vec![2])],
    )
}

fn ge(value: i64) -> Formula {
    Formula::atomic(AtomicFormula::prop("x", ComparisonOp::Ge, value))
}

/// Surface the evaluator's `log::debug!`/`trace!` output under `cargo test -- --nocapture` with
/// `RUST_LOG` set; harmless (and a no-op) otherwise, since a later `try_init` call in the same
/// process is ignored.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn s1_atomic_axis_weighted_scores() {
    init_logging();
    let ks = linear_graph();
    let table = evaluate(&ge(2), &ks).unwrap();
    assert_eq!(table.root_score(&vec![0]).unwrap(), -1.0);
    assert_eq!(table.root_score(&vec![1]).unwrap(), -0.5);
    assert_eq!(table.root_score(&vec![2]).unwrap(), 1.0);
}

#[test]
fn s2_ef_reaches_every_state() {
    let ks = linear_graph();
    let table = evaluate(&Formula::ef(ge(2)), &ks).unwrap();
    for state in [vec![0], vec![1], vec![2]] {
        assert_eq!(table.root_score(&state).unwrap(), 1.0);
    }
}

#[test]
fn s3_ag_propagates_the_permanent_violation_at_state_zero() {
    let ks = linear_graph();
    let table = evaluate(&Formula::ag(ge(1)), &ks).unwrap();
    assert_eq!(table.root_score(&vec![0]).unwrap(), -1.0);
    assert_eq!(table.root_score(&vec![1]).unwrap(), 1.0);
    assert_eq!(table.root_score(&vec![2]).unwrap(), 1.0);
}

#[test]
fn s4_au_is_satisfied_everywhere() {
    let ks = linear_graph();
    let root = Formula::au(ge(0), ge(2));
    let table = evaluate(&root, &ks).unwrap();
    for state in [vec![0], vec![1], vec![2]] {
        assert_eq!(table.root_score(&state).unwrap(), 1.0);
    }
}

#[test]
fn s5_aw_degenerates_to_ag_when_the_right_operand_is_unreachable() {
    let ks = linear_graph();
    let root = Formula::aw(ge(2), ge(3));
    let ag = Formula::ag(ge(2));
    let table = evaluate(&root, &ks).unwrap();
    let ag_table = evaluate(&ag, &ks).unwrap();
    for state in [vec![0], vec![1], vec![2]] {
        assert_eq!(
            table.root_score(&state).unwrap(),
            ag_table.root_score(&state).unwrap()
        );
    }
    assert_eq!(table.root_score(&vec![2]).unwrap(), 1.0);
    assert!(table.root_score(&vec![1]).unwrap() < 0.0);
    assert!(table.root_score(&vec![0]).unwrap() < 0.0);
}

#[test]
fn s6_ex_looks_exactly_one_step_ahead() {
    let ks = linear_graph();
    let table = evaluate(&Formula::ex(ge(2)), &ks).unwrap();
    assert_eq!(table.root_score(&vec![1]).unwrap(), 1.0);
    assert_eq!(table.root_score(&vec![0]).unwrap(), -0.5);
}

#[test]
fn two_variable_conjunction_matches_the_pointwise_min() {
    let state = vec![1, 1];
    let ks = ExplicitKripkeStructure::new(
        vec![Variable::new("x", 2), Variable::new("y", 2)],
        vec![state.clone()],
        vec![(state.clone(), state.clone())],
    );
    let x_ge_2 = Formula::atomic(AtomicFormula::prop("x", ComparisonOp::Ge, 2));
    let y_le_0 = Formula::atomic(AtomicFormula::prop("y", ComparisonOp::Le, 0));
    let table = evaluate(&Formula::conjunction(x_ge_2.clone(), y_le_0.clone()), &ks).unwrap();
    let expected = table
        .score(&state, &x_ge_2)
        .unwrap()
        .min(table.score(&state, &y_le_0).unwrap());
    assert_eq!(table.root_score(&state).unwrap(), expected);
}
