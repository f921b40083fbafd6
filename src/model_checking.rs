//! High-level functionality regarding the whole model-checking process: the single public entry
//! point that normalises a formula, enumerates its subformulae, and drives the evaluator.

use log::info;

use crate::error::ModelCheckingError;
use crate::evaluation::algorithm::eval_node;
use crate::evaluation::{EvaluationContext, ResultTable};
use crate::formula::{eliminate_negation, get_subformulae, Formula};
use crate::kernel::KernelConfig;
use crate::kripke::{KripkeStructure, State};

/// The outcome of a top-level evaluation: every subformula's score at every state, queryable by
/// the original (possibly negation-bearing) formula and state.
pub struct EvaluationTable {
    ctx: EvaluationContext,
    table: ResultTable,
    root: Formula,
}

impl EvaluationTable {
    /// The final score of the evaluated root formula at `state`.
    pub fn root_score(&self, state: &State) -> Result<f64, ModelCheckingError> {
        self.score(state, &self.root)
    }

    /// The score of any subformula of the evaluated tree at `state`. `formula` is matched by its
    /// canonical key, so an equivalent but differently-built tree still resolves correctly.
    pub fn score(&self, state: &State, formula: &Formula) -> Result<f64, ModelCheckingError> {
        let state_id = self
            .ctx
            .state_id(state)
            .ok_or_else(|| ModelCheckingError::OutOfRangeCoordinate {
                variable: "<state>".to_string(),
                value: -1,
                max: 0,
                state: state.clone(),
            })?;
        let subformula_id = self.ctx.subformula_id(&formula.key()).ok_or_else(|| {
            ModelCheckingError::MissingSubformulaScore {
                subformula_key: formula.key(),
                state: state.clone(),
            }
        })?;
        self.table
            .get(subformula_id, state_id)
            .ok_or_else(|| ModelCheckingError::MissingSubformulaScore {
                subformula_key: formula.key(),
                state: state.clone(),
            })
    }
}

/// Evaluate `root` over `kripke`, with the default kernel configuration (`wᵢ = 1/max_vᵢ`). See
/// [`evaluate_with_config`] to override the axis-weighting scheme.
pub fn evaluate(
    root: &Formula,
    kripke: &impl KripkeStructure,
) -> Result<EvaluationTable, ModelCheckingError> {
    evaluate_with_config(root, kripke, &KernelConfig::default())
}

/// Evaluate `root` over `kripke` with an explicit [`KernelConfig`].
///
/// `kripke` is validated (arity, coordinate ranges, no sinks) before any scoring begins; `root` is
/// first rewritten by [`eliminate_negation`] so no `Negation` node survives, then its subformulae
/// are enumerated in dependency order and evaluated one by one, each writing into the shared
/// result table before any subformula that depends on it is reached.
pub fn evaluate_with_config(
    root: &Formula,
    kripke: &impl KripkeStructure,
    config: &KernelConfig,
) -> Result<EvaluationTable, ModelCheckingError> {
    kripke.validate()?;
    let normalized = eliminate_negation(root);
    let subformulae = get_subformulae(&normalized);
    let ctx = EvaluationContext::new(kripke, &subformulae);
    let mut table = ResultTable::new(ctx.num_subformulae(), ctx.num_states());

    info!(
        "evaluating {} distinct subformulae over {} states",
        ctx.num_subformulae(),
        ctx.num_states()
    );
    for subformula in ctx.subformulae_in_order().to_vec() {
        eval_node(&ctx, &mut table, kripke.variables(), config, &subformula)?;
    }

    Ok(EvaluationTable {
        ctx,
        table,
        root: normalized,
    })
}
