//! # Data structures for Simplex
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
//!
//! A tableau for a game with `m` pure strategies for player 1 and `n` pure strategies for player 2
//! has `m + 1` rows and `n + m + 1` columns. The first `n` columns belong to the decision
//! variables (one for each pure strategy of player 2), the next `m` to the slack variables (one for
//! each pure strategy of player 1) and the last column is the right-hand side. The last row is the
//! objective row.
use std::iter::{once, repeat_n};

use log::trace;

use crate::data::game::payoff::PayoffMatrix;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Field;
use crate::error::SolveError;

pub mod history;

/// Which constraint rows qualify in the ratio test, see `Tableau::select_primal_pivot_row`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RatioTest {
    /// Rows with a positive coefficient in the pivot column and a non-negative ratio.
    ///
    /// A zero ratio (a zero right-hand side) is a valid, degenerate pivot. This keeps every
    /// right-hand side non-negative.
    #[default]
    MinimumRatio,
    /// Rows with a non-zero coefficient in the pivot column and a strictly positive ratio.
    ///
    /// On degenerate tableaus, this can pivot on a negative coefficient and make a right-hand
    /// side negative, or find no row at all for a bounded problem.
    StrictlyPositive,
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// A tableau is never changed after creation; a pivot produces a new tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Represents a matrix of size (s + 1) x (x + s + 1): constraints, objective row and the
    /// right-hand side.
    matrix: DenseMatrix<F>,
    /// Number of slack variables `s`, equal to the number of constraint rows.
    nr_slack_variables: usize,
    /// Number of decision variables `x`.
    nr_decision_variables: usize,
    /// Constant `k` that was added to all payoffs to make them strictly positive.
    shift: F,
}

impl<F: Field> Tableau<F> {
    /// Create the initial tableau of the linear program that is equivalent to a matrix game.
    ///
    /// All payoffs are shifted by `k = max(0, 1 - min(payoff))`, such that they are at least one.
    /// The tableau then represents
    ///
    /// ```text
    /// max  sum_j x_j
    /// s.t. sum_j (payoff[r][j] + k) x_j + s_r = 1    for all r
    ///      x, s >= 0
    /// ```
    ///
    /// with the slack variables as the initial (feasible) basis.
    pub fn new(payoff: &PayoffMatrix<F>) -> Self {
        let nr_slack_variables = payoff.nr_rows();
        let nr_decision_variables = payoff.nr_columns();

        let shift = {
            let candidate = F::one() - payoff.min();
            if candidate.is_positive() { candidate } else { F::zero() }
        };

        let mut rows = payoff.rows()
            .enumerate()
            .map(|(r, payoffs)| {
                payoffs.iter()
                    .map(|value| value.clone() + &shift)
                    .chain((0..nr_slack_variables).map(|i| if i == r { F::one() } else { F::zero() }))
                    .chain(once(F::one()))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        rows.push(
            repeat_n(-F::one(), nr_decision_variables)
                .chain(repeat_n(F::zero(), nr_slack_variables + 1))
                .collect()
        );

        let nr_columns = nr_decision_variables + nr_slack_variables + 1;
        Self {
            matrix: DenseMatrix::from_data_unchecked(rows, nr_columns),
            nr_slack_variables,
            nr_decision_variables,
            shift,
        }
    }

    /// Create a tableau from its rows.
    ///
    /// The number of slack variables is derived from the number of rows. Used to continue from a
    /// known tableau, or to construct tableaus that can't result from a payoff matrix.
    ///
    /// # Arguments
    ///
    /// * `rows`: The constraint rows followed by the objective row.
    /// * `nr_decision_variables`: Number of columns belonging to decision variables.
    /// * `shift`: Constant that was added to the payoffs.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if there is no constraint row, no decision variable, the rows are of
    /// different lengths or the number of columns doesn't match the number of variables.
    pub fn from_rows(
        rows: Vec<Vec<F>>,
        nr_decision_variables: usize,
        shift: F,
    ) -> Result<Self, SolveError> {
        let matrix = DenseMatrix::from_data(rows)?;
        let nr_slack_variables = matrix.nr_rows() - 1;

        if nr_slack_variables == 0
            || nr_decision_variables == 0
            || matrix.nr_columns() != nr_decision_variables + nr_slack_variables + 1 {
            return Err(SolveError::InvalidDimensions {
                rows: matrix.nr_rows(),
                columns: matrix.nr_columns(),
            });
        }

        Ok(Self { matrix, nr_slack_variables, nr_decision_variables, shift })
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the qualifying constraint row with
    /// the minimal ratio between the right-hand side and the column. Ratios that differ by a
    /// negligible amount are equal, and when there are multiple choices, the first row is chosen.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the pivot column, in range `0` until `self.nr_variables()`.
    /// * `ratio_test`: Which rows qualify.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize, ratio_test: RatioTest) -> Option<usize> {
        debug_assert!(column < self.nr_variables());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_slack_variables {
            let xij = self.get(row, column);
            let ratio = match ratio_test {
                RatioTest::MinimumRatio => {
                    if !xij.is_positive() || xij.is_negligible() {
                        continue;
                    }

                    let ratio = self.rhs(row).clone() / xij;
                    if ratio.is_negative() {
                        continue;
                    }
                    ratio
                },
                RatioTest::StrictlyPositive => {
                    if xij.is_zero() {
                        continue;
                    }

                    let ratio = self.rhs(row).clone() / xij;
                    if !ratio.is_positive() || !ratio.is_finite() {
                        continue;
                    }
                    ratio
                },
            };
            trace!("row {row}, column {column}: ratio {ratio}");

            match &mut min_values {
                Some((min_index, min_ratio)) => {
                    if ratio < *min_ratio && !(min_ratio.clone() - &ratio).is_negligible() {
                        *min_index = row;
                        *min_ratio = ratio;
                    }
                },
                None => min_values = Some((row, ratio)),
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Pivot on the element at (`pivot_row`, `pivot_column`).
    ///
    /// The pivot row is divided by the pivot element. From each other row, including the objective
    /// row, the multiple of the new pivot row is subtracted that makes its entry in the pivot
    /// column zero. All values are read from `self`, so no partially updated row is ever read.
    /// Negligible results are stored as exact zeros.
    ///
    /// # Return value
    ///
    /// A new tableau with the same shift; `self` is not modified.
    pub fn pivot(&self, pivot_row: usize, pivot_column: usize) -> Self {
        debug_assert!(pivot_row < self.nr_slack_variables);
        debug_assert!(pivot_column < self.nr_variables());
        debug_assert!(!self.get(pivot_row, pivot_column).is_zero());

        let pivot_value = self.get(pivot_row, pivot_column);
        let new_pivot_row = self.matrix.row(pivot_row).iter()
            .map(|value| trim(value.clone() / pivot_value))
            .collect::<Vec<_>>();

        let rows = self.matrix.rows()
            .enumerate()
            .map(|(row, old)| if row == pivot_row {
                new_pivot_row.clone()
            } else {
                let factor = &old[pivot_column];
                old.iter()
                    .zip(&new_pivot_row)
                    .map(|(value, pivot_row_value)| trim(value.clone() - factor.clone() * pivot_row_value))
                    .collect()
            })
            .collect();

        Self {
            matrix: DenseMatrix::from_data_unchecked(rows, self.nr_columns()),
            nr_slack_variables: self.nr_slack_variables,
            nr_decision_variables: self.nr_decision_variables,
            shift: self.shift.clone(),
        }
    }

    /// Value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> &F {
        self.matrix.get_value(i, j)
    }

    /// All values of row `i`, including the right-hand side.
    pub fn row(&self, i: usize) -> &[F] {
        self.matrix.row(i)
    }

    /// The coefficients of the objective function, followed by the objective value.
    pub fn objective_row(&self) -> &[F] {
        self.matrix.row(self.objective_row_index())
    }

    /// Right-hand side of row `i`.
    pub fn rhs(&self, i: usize) -> &F {
        self.matrix.get_value(i, self.rhs_column_index())
    }

    /// Get the value of the current solution, in the bottom right corner of the tableau.
    pub fn objective_function_value(&self) -> &F {
        self.rhs(self.objective_row_index())
    }

    /// Constant `k` that was added to all payoffs.
    pub fn shift(&self) -> &F {
        &self.shift
    }

    /// Index of the objective row, which is the last row.
    pub fn objective_row_index(&self) -> usize {
        self.nr_slack_variables
    }

    /// Index of the right-hand side column, which is the last column.
    pub fn rhs_column_index(&self) -> usize {
        self.nr_variables()
    }

    /// Number of slack variables, equal to the number of constraint rows.
    pub fn nr_slack_variables(&self) -> usize {
        self.nr_slack_variables
    }

    /// Number of decision variables.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Number of variables, these are all columns except the right-hand side.
    pub fn nr_variables(&self) -> usize {
        self.nr_decision_variables + self.nr_slack_variables
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of columns in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// All rows of the tableau, the objective row last.
    pub fn into_rows(self) -> Vec<Vec<F>> {
        self.matrix.data()
    }
}

/// Replace a value that is likely only a rounding error by zero.
fn trim<F: Field>(value: F) -> F {
    if value.is_negligible() { F::zero() } else { value }
}
