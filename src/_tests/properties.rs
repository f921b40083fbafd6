//! **(internal)** Property-style tests over small randomly generated graphs and formulae, covering
//! the quantified invariants of §8 that aren't pinned down by a single concrete scenario.

use rand::Rng;

use crate::kripke::{ExplicitKripkeStructure, Variable};
use crate::{evaluate, AtomicFormula, ComparisonOp, Formula, KripkeStructure};

const MAX_VALUE: u32 = 4;
const ITERATIONS: usize = 30;

fn random_graph(rng: &mut impl Rng, num_states: usize, state_order: &[usize]) -> ExplicitKripkeStructure {
    let states: Vec<Vec<u32>> = (0..num_states).map(|i| vec![i as u32 % (MAX_VALUE + 1)]).collect();
    let mut edges = Vec::new();
    for i in 0..num_states {
        let out_degree = rng.gen_range(1..=2);
        for _ in 0..out_degree {
            let j = rng.gen_range(0..num_states);
            edges.push((states[i].clone(), states[j].clone()));
        }
    }
    let ordered_states: Vec<Vec<u32>> = state_order.iter().map(|&i| states[i].clone()).collect();
    ExplicitKripkeStructure::new(vec![Variable::new("x", MAX_VALUE)], ordered_states, edges)
}

fn random_atomic(rng: &mut impl Rng) -> Formula {
    let value = rng.gen_range(0..=MAX_VALUE as i64);
    let op = if rng.gen_bool(0.5) { ComparisonOp::Ge } else { ComparisonOp::Le };
    Formula::atomic(AtomicFormula::prop("x", op, value))
}

#[test]
fn invariant_1_scores_stay_in_unit_range() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let num_states = rng.gen_range(2..=6);
        let order: Vec<usize> = (0..num_states).collect();
        let ks = random_graph(&mut rng, num_states, &order);
        let phi = random_atomic(&mut rng);
        let psi = random_atomic(&mut rng);
        let wrapped = [
            phi.clone(),
            Formula::ag(phi.clone()),
            Formula::eg(phi.clone()),
            Formula::af(phi.clone()),
            Formula::ef(phi.clone()),
            Formula::ax(phi.clone()),
            Formula::ex(phi.clone()),
            Formula::au(phi.clone(), psi.clone()),
            Formula::eu(phi.clone(), psi.clone()),
            Formula::aw(phi.clone(), psi.clone()),
            Formula::ew(phi, psi),
        ];
        for formula in wrapped {
            let table = evaluate(&formula, &ks).unwrap();
            for state in ks.states() {
                let score = table.root_score(state).unwrap();
                assert!((-1.0..=1.0).contains(&score), "{} out of range at {state:?}", formula.key());
            }
        }
    }
}

#[test]
fn invariant_2_boolean_constants_are_the_lattice_extremes() {
    let mut rng = rand::thread_rng();
    let num_states = 3;
    let order: Vec<usize> = (0..num_states).collect();
    let ks = random_graph(&mut rng, num_states, &order);
    let true_table = evaluate(&Formula::boolean(true), &ks).unwrap();
    let false_table = evaluate(&Formula::boolean(false), &ks).unwrap();
    for state in ks.states() {
        assert_eq!(true_table.root_score(state).unwrap(), 1.0);
        assert_eq!(false_table.root_score(state).unwrap(), -1.0);
    }
}

#[test]
fn invariant_5_lattice_laws_hold() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let num_states = rng.gen_range(2..=5);
        let order: Vec<usize> = (0..num_states).collect();
        let ks = random_graph(&mut rng, num_states, &order);
        let phi = random_atomic(&mut rng);
        let psi = random_atomic(&mut rng);

        let conj = Formula::conjunction(phi.clone(), psi.clone());
        let conj_swapped = Formula::conjunction(psi.clone(), phi.clone());
        let disj = Formula::disjunction(phi.clone(), psi.clone());
        let idempotent_conj = Formula::conjunction(phi.clone(), phi.clone());

        let table = evaluate(&conj, &ks).unwrap();
        let table_swapped = evaluate(&conj_swapped, &ks).unwrap();
        let disj_table = evaluate(&disj, &ks).unwrap();
        let phi_table = evaluate(&phi, &ks).unwrap();
        let psi_table = evaluate(&psi, &ks).unwrap();
        let idempotent_table = evaluate(&idempotent_conj, &ks).unwrap();

        for state in ks.states() {
            let p = phi_table.root_score(state).unwrap();
            let q = psi_table.root_score(state).unwrap();
            assert_eq!(table.root_score(state).unwrap(), p.min(q));
            assert_eq!(disj_table.root_score(state).unwrap(), p.max(q));
            assert_eq!(table.root_score(state).unwrap(), table_swapped.root_score(state).unwrap());
            assert_eq!(idempotent_table.root_score(state).unwrap(), p);
        }
    }
}

#[test]
fn invariant_6_ax_never_exceeds_ex() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let num_states = rng.gen_range(2..=5);
        let order: Vec<usize> = (0..num_states).collect();
        let ks = random_graph(&mut rng, num_states, &order);
        let phi = random_atomic(&mut rng);
        let ax_table = evaluate(&Formula::ax(phi.clone()), &ks).unwrap();
        let ex_table = evaluate(&Formula::ex(phi), &ks).unwrap();
        for state in ks.states() {
            assert!(ax_table.root_score(state).unwrap() <= ex_table.root_score(state).unwrap());
        }
    }
}

#[test]
fn invariant_8_fixed_point_is_stable_under_re_evaluation() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let num_states = rng.gen_range(2..=5);
        let order: Vec<usize> = (0..num_states).collect();
        let ks = random_graph(&mut rng, num_states, &order);
        let phi = random_atomic(&mut rng);
        let root = Formula::ag(phi);
        let first = evaluate(&root, &ks).unwrap();
        let second = evaluate(&root, &ks).unwrap();
        for state in ks.states() {
            assert_eq!(first.root_score(state).unwrap(), second.root_score(state).unwrap());
        }
    }
}

#[test]
fn invariant_9_weak_until_is_the_max_of_ag_and_au() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let num_states = rng.gen_range(2..=5);
        let order: Vec<usize> = (0..num_states).collect();
        let ks = random_graph(&mut rng, num_states, &order);
        let phi = random_atomic(&mut rng);
        let psi = random_atomic(&mut rng);
        let aw_table = evaluate(&Formula::aw(phi.clone(), psi.clone()), &ks).unwrap();
        let ag_table = evaluate(&Formula::ag(phi.clone()), &ks).unwrap();
        let au_table = evaluate(&Formula::au(phi, psi), &ks).unwrap();
        for state in ks.states() {
            let expected = ag_table.root_score(state).unwrap().max(au_table.root_score(state).unwrap());
            assert_eq!(aw_table.root_score(state).unwrap(), expected);
        }
    }
}

#[test]
fn invariant_10_result_is_independent_of_state_enumeration_order() {
    let mut rng = rand::thread_rng();
    for _ in 0..ITERATIONS {
        let num_states = rng.gen_range(2..=5);
        let forward: Vec<usize> = (0..num_states).collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let forward_ks = random_graph(&mut rng, num_states, &forward);
        // Re-derive the same edge structure for the reversed enumeration order by rebuilding from
        // the same seed state vectors, only the dense id assignment order differs.
        let reversed_ks = ExplicitKripkeStructure::new(
            vec![Variable::new("x", MAX_VALUE)],
            reversed.iter().map(|&i| forward_ks.states()[i].clone()).collect(),
            forward
                .iter()
                .flat_map(|&i| {
                    forward_ks
                        .successors(&forward_ks.states()[i])
                        .iter()
                        .map(move |t| (forward_ks.states()[i].clone(), t.clone()))
                })
                .collect(),
        );

        let phi = random_atomic(&mut rng);
        let root = Formula::ag(phi);
        let forward_table = evaluate(&root, &forward_ks).unwrap();
        let reversed_table = evaluate(&root, &reversed_ks).unwrap();
        for state in forward_ks.states() {
            assert_eq!(
                forward_table.root_score(state).unwrap(),
                reversed_table.root_score(state).unwrap()
            );
        }
    }
}
