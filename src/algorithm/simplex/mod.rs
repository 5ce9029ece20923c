//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the tableau simplex method for
//! matrix games. Starting from a tableau with the slack variables as a feasible basis, pivots are
//! performed until the objective row has no negative coefficients left.
use log::{debug, info, warn};

use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{RatioTest, Tableau};
use crate::algorithm::simplex::tableau::history::TableauHistory;
use crate::data::number_types::traits::Field;

pub mod extraction;
pub mod strategy;
pub mod tableau;

/// The position of a pivot that was performed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PivotRecord {
    /// Index of the constraint row whose basic variable left the basis.
    pub row: usize,
    /// Index of the column whose variable entered the basis.
    pub column: usize,
}

/// What happened when attempting a single pivot.
#[derive(Clone, Debug, PartialEq)]
pub enum PivotOutcome<F> {
    /// A pivot was performed, resulting in a new tableau.
    Pivoted {
        /// The tableau after the pivot.
        tableau: Tableau<F>,
        /// Where the pivot took place.
        record: PivotRecord,
    },
    /// No column has a negative objective coefficient; the tableau is optimal.
    Optimal,
    /// The column has a negative objective coefficient, but no row qualifies in the ratio test.
    Unbounded {
        /// The selected pivot column.
        column: usize,
    },
}

/// Attempt a single pivot.
///
/// The input tableau is not modified; if a pivot is possible, a new tableau is returned.
pub fn step<F, PR>(tableau: &Tableau<F>, rule: &mut PR, ratio_test: RatioTest) -> PivotOutcome<F>
where
    F: Field,
    PR: PivotRule<F>,
{
    match rule.select_primal_pivot_column(tableau) {
        Some((column, cost)) => match tableau.select_primal_pivot_row(column, ratio_test) {
            Some(row) => {
                let tableau = tableau.pivot(row, column);
                debug!(
                    "pivot on row {row}, column {column} (cost {cost}), objective is now {}",
                    tableau.objective_function_value(),
                );
                PivotOutcome::Pivoted { tableau, record: PivotRecord { row, column } }
            },
            None => PivotOutcome::Unbounded { column },
        },
        None => PivotOutcome::Optimal,
    }
}

/// How the simplex method stopped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Termination {
    /// The last tableau in the history is optimal.
    Optimal,
    /// The linear program has no finite optimum, increasing the variable of this column.
    Unbounded {
        /// The selected pivot column for which no pivot row could be found.
        column: usize,
    },
    /// The maximum number of pivots was performed without reaching an optimum.
    IterationLimit,
}

/// All that was computed during one run of the simplex method.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<F> {
    /// Every tableau produced, the initial one first.
    pub history: TableauHistory<F>,
    /// The pivot performed to reach each tableau after the initial one.
    pub pivots: Vec<PivotRecord>,
    /// Reason for stopping.
    pub termination: Termination,
}

/// Maximize the objective value of the tableau.
///
/// While calling this method, a number of requirements should be satisfied:
/// - The slack variables (or some other set of variables) form a basis
/// - All constraint values are nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `initial`: Tableau to start from.
/// * `max_iterations`: Maximum number of pivots, to guard against cycling.
/// * `ratio_test`: Which rows qualify when selecting a pivot row.
///
/// # Return value
///
/// All tableaus and pivots, and a `Termination` indicating whether the last tableau is optimal.
pub fn primal<F, PR>(initial: Tableau<F>, max_iterations: usize, ratio_test: RatioTest) -> Run<F>
where
    F: Field,
    PR: PivotRule<F>,
{
    let mut rule = PR::new();
    let mut history = TableauHistory::new(initial);
    let mut pivots = Vec::new();

    let termination = loop {
        // Only an optimal tableau may still be reached once the cap is hit
        if pivots.len() == max_iterations && rule.select_primal_pivot_column(history.terminal()).is_some() {
            warn!("stopping after {max_iterations} pivots without reaching an optimum");
            break Termination::IterationLimit;
        }

        match step(history.terminal(), &mut rule, ratio_test) {
            PivotOutcome::Pivoted { tableau, record } => {
                history.push(tableau);
                pivots.push(record);
            },
            PivotOutcome::Optimal => {
                info!(
                    "optimal after {} pivots with objective value {}",
                    pivots.len(), history.terminal().objective_function_value(),
                );
                break Termination::Optimal;
            },
            PivotOutcome::Unbounded { column } => {
                warn!("unbounded in column {column} after {} pivots", pivots.len());
                break Termination::Unbounded { column };
            },
        }
    };

    Run { history, pivots, termination }
}
