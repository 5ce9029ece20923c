//! # Reading strategies from a tableau
//!
//! The optimal strategy of player 1 is found in the objective row below the slack columns, that of
//! player 2 in the right-hand side of the rows in which its decision variables are basic.
use log::{debug, warn};

use crate::algorithm::simplex::PivotRecord;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::game::strategy::MixedStrategy;
use crate::data::number_types::traits::Field;
use crate::error::SolveError;

/// How to find the row in which a decision variable is basic.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum StrategyMapping {
    /// Follow the pivots: a decision variable is basic in the row where it last entered the basis,
    /// unless another variable entered the basis in that row afterwards.
    #[default]
    EnteringColumn,
    /// Decision variable `j` is basic in the row of the `j`-th pivot.
    ///
    /// This ignores which column entered the basis. It only gives the right answer when the
    /// decision variables entered in order and never left the basis again.
    PivotOrder,
}

impl StrategyMapping {
    /// For each decision variable, the constraint row in which it is basic, if any.
    ///
    /// # Arguments
    ///
    /// * `pivots`: All pivots that were performed, in order.
    /// * `nr_decision_variables`: Number of decision variables, which are the first columns.
    pub fn basis_rows(self, pivots: &[PivotRecord], nr_decision_variables: usize) -> Vec<Option<usize>> {
        let mut order = vec![None; nr_decision_variables];

        match self {
            StrategyMapping::EnteringColumn => {
                for &PivotRecord { row, column } in pivots {
                    // The variable that was basic in this row leaves the basis
                    for basic_row in order.iter_mut() {
                        if *basic_row == Some(row) {
                            *basic_row = None;
                        }
                    }
                    if column < nr_decision_variables {
                        order[column] = Some(row);
                    }
                }
            },
            StrategyMapping::PivotOrder => {
                for (basic_row, pivot) in order.iter_mut().zip(pivots) {
                    *basic_row = Some(pivot.row);
                }
            },
        }

        order
    }
}

/// Compute the optimal strategies and the value of the game.
///
/// # Arguments
///
/// * `terminal`: Optimal tableau.
/// * `pivots`: The pivots that lead from the initial tableau to `terminal`.
/// * `mapping`: How to determine in which row a decision variable is basic.
///
/// # Return value
///
/// The strategy of player 1, that of player 2 and the value of the game.
///
/// # Errors
///
/// `DegenerateResult` when the objective value of `terminal` is (negligibly close to) zero or not
/// finite, such that it can't be inverted.
pub fn extract_strategies<F: Field>(
    terminal: &Tableau<F>,
    pivots: &[PivotRecord],
    mapping: StrategyMapping,
) -> Result<(MixedStrategy<F>, MixedStrategy<F>, F), SolveError> {
    let v = terminal.objective_function_value();
    if v.is_negligible() || !v.is_finite() {
        warn!("can't extract strategies from a tableau with objective value {v}");
        return Err(SolveError::DegenerateResult { objective: v.to_string() });
    }

    let value = F::one() / v - terminal.shift();

    let objective_row = terminal.objective_row();
    let nr_decision_variables = terminal.nr_decision_variables();
    let player_one = (0..terminal.nr_slack_variables())
        .map(|i| objective_row[nr_decision_variables + i].clone() / v)
        .collect();

    let player_two = mapping.basis_rows(pivots, nr_decision_variables).into_iter()
        .map(|basic_row| match basic_row {
            Some(row) => terminal.rhs(row).clone() / v,
            None => F::zero(),
        })
        .collect();
    debug!("value {value} from objective value {v} and shift {}", terminal.shift());

    Ok((MixedStrategy::new(player_one), MixedStrategy::new(player_two), value))
}
