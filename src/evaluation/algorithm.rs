//! The per-subformula dispatcher (C5): given a subformula and its already-evaluated children,
//! fills in its row of the result table.

use log::debug;

use crate::domain::DomainOfValidity;
use crate::error::ModelCheckingError;
use crate::evaluation::context::EvaluationContext;
use crate::evaluation::table::ResultTable;
use crate::evaluation::worklist::{run_global_future, run_until, GlobalFutureKind, UntilKind};
use crate::formula::Formula;
use crate::kernel::{score_against_domain, KernelConfig};
use crate::kripke::Variable;

fn child_row(
    ctx: &EvaluationContext,
    table: &ResultTable,
    child: &Formula,
) -> Result<Vec<f64>, ModelCheckingError> {
    let id = ctx
        .subformula_id(&child.key())
        .ok_or_else(|| ModelCheckingError::MissingSubformulaScore {
            subformula_key: child.key(),
            state: Vec::new(),
        })?;
    (0..ctx.num_states())
        .map(|state_id| {
            table
                .get(id, state_id)
                .ok_or_else(|| ModelCheckingError::MissingSubformulaScore {
                    subformula_key: child.key(),
                    state: ctx.states()[state_id].clone(),
                })
        })
        .collect()
}

fn successor_lists(ctx: &EvaluationContext) -> Vec<Vec<usize>> {
    (0..ctx.num_states()).map(|s| ctx.successors(s).to_vec()).collect()
}

fn predecessor_lists(ctx: &EvaluationContext) -> Vec<Vec<usize>> {
    (0..ctx.num_states()).map(|s| ctx.predecessors(s).to_vec()).collect()
}

/// Evaluate a single subformula node, writing its score at every state into `table`. Must be
/// called in the post-order produced by [`crate::formula::get_subformulae`] so every child's row
/// is already present.
pub fn eval_node(
    ctx: &EvaluationContext,
    table: &mut ResultTable,
    variables: &[Variable],
    config: &KernelConfig,
    formula: &Formula,
) -> Result<(), ModelCheckingError> {
    let id = ctx
        .subformula_id(&formula.key())
        .expect("subformula was not registered in the evaluation context");
    if ctx.num_states() > 0 && table.get(id, 0).is_some() {
        // Already materialised, e.g. as an AW/EW intermediate evaluated earlier in post-order.
        return Ok(());
    }
    debug!(
        "evaluating subformula `{}` (height {})",
        formula.key(),
        formula.height()
    );

    match formula {
        Formula::Atomic(atomic) => {
            let ambient = DomainOfValidity::full(variables);
            let max_values: Vec<u32> = variables.iter().map(|v| v.max_value).collect();
            let dov = atomic.yield_dov(&ambient, variables)?;
            let row: Vec<f64> = ctx
                .states()
                .iter()
                .map(|state| score_against_domain(&dov, state, &max_values, config))
                .collect();
            table.set_all(id, &row);
        }
        Formula::Boolean(value) => {
            let score = if *value { 1.0 } else { -1.0 };
            table.set_all(id, &vec![score; ctx.num_states()]);
        }
        Formula::Conjunction(l, r) => {
            let left = child_row(ctx, table, l)?;
            let right = child_row(ctx, table, r)?;
            let row: Vec<f64> = left.iter().zip(&right).map(|(a, b)| a.min(*b)).collect();
            table.set_all(id, &row);
        }
        Formula::Disjunction(l, r) => {
            let left = child_row(ctx, table, l)?;
            let right = child_row(ctx, table, r)?;
            let row: Vec<f64> = left.iter().zip(&right).map(|(a, b)| a.max(*b)).collect();
            table.set_all(id, &row);
        }
        Formula::Ax(phi) => {
            let phi_row = child_row(ctx, table, phi)?;
            let row: Vec<f64> = (0..ctx.num_states())
                .map(|s| {
                    ctx.successors(s)
                        .iter()
                        .map(|&t| phi_row[t])
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();
            table.set_all(id, &row);
        }
        Formula::Ex(phi) => {
            let phi_row = child_row(ctx, table, phi)?;
            let row: Vec<f64> = (0..ctx.num_states())
                .map(|s| {
                    ctx.successors(s)
                        .iter()
                        .map(|&t| phi_row[t])
                        .fold(f64::NEG_INFINITY, f64::max)
                })
                .collect();
            table.set_all(id, &row);
        }
        Formula::Ag(phi) => {
            let phi_row = child_row(ctx, table, phi)?;
            let row = run_global_future(
                GlobalFutureKind::Ag,
                &successor_lists(ctx),
                &predecessor_lists(ctx),
                &phi_row,
            );
            table.set_all(id, &row);
        }
        Formula::Eg(phi) => {
            let phi_row = child_row(ctx, table, phi)?;
            let row = run_global_future(
                GlobalFutureKind::Eg,
                &successor_lists(ctx),
                &predecessor_lists(ctx),
                &phi_row,
            );
            table.set_all(id, &row);
        }
        Formula::Af(phi) => {
            let phi_row = child_row(ctx, table, phi)?;
            let row = run_global_future(
                GlobalFutureKind::Af,
                &successor_lists(ctx),
                &predecessor_lists(ctx),
                &phi_row,
            );
            table.set_all(id, &row);
        }
        Formula::Ef(phi) => {
            let phi_row = child_row(ctx, table, phi)?;
            let row = run_global_future(
                GlobalFutureKind::Ef,
                &successor_lists(ctx),
                &predecessor_lists(ctx),
                &phi_row,
            );
            table.set_all(id, &row);
        }
        Formula::Au(l, r) => {
            let phi_row = child_row(ctx, table, l)?;
            let psi_row = child_row(ctx, table, r)?;
            let row = run_until(
                UntilKind::Au,
                &successor_lists(ctx),
                &predecessor_lists(ctx),
                &phi_row,
                &psi_row,
            );
            table.set_all(id, &row);
        }
        Formula::Eu(l, r) => {
            let phi_row = child_row(ctx, table, l)?;
            let psi_row = child_row(ctx, table, r)?;
            let row = run_until(
                UntilKind::Eu,
                &successor_lists(ctx),
                &predecessor_lists(ctx),
                &phi_row,
                &psi_row,
            );
            table.set_all(id, &row);
        }
        Formula::Aw(l, r) => {
            let ag = Formula::ag((**l).clone());
            let au = Formula::au((**l).clone(), (**r).clone());
            let ag_row = child_row(ctx, table, &ag)?;
            let au_row = child_row(ctx, table, &au)?;
            let row: Vec<f64> = ag_row.iter().zip(&au_row).map(|(a, b)| a.max(*b)).collect();
            table.set_all(id, &row);
        }
        Formula::Ew(l, r) => {
            let eg = Formula::eg((**l).clone());
            let eu = Formula::eu((**l).clone(), (**r).clone());
            let eg_row = child_row(ctx, table, &eg)?;
            let eu_row = child_row(ctx, table, &eu)?;
            let row: Vec<f64> = eg_row.iter().zip(&eu_row).map(|(a, b)| a.max(*b)).collect();
            table.set_all(id, &row);
        }
    }
    Ok(())
}
