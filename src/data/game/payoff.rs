//! # Payoff matrix
//!
//! Entry `(i, j)` is what player 1 (choosing a row) receives from player 2 (choosing a column) when
//! pure strategies `i` and `j` are played.
use std::slice::Iter;

use itertools::iproduct;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::Field;
use crate::error::SolveError;

/// Payoffs to player 1, validated to be a non-empty rectangle of finite numbers.
///
/// Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffMatrix<F> {
    matrix: DenseMatrix<F>,
}

impl<F: Field> PayoffMatrix<F> {
    /// Create a new payoff matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: One `Vec` per pure strategy of player 1, each containing a payoff per pure strategy
    /// of player 2.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` when there are no rows or columns, or when the rows are not of equal
    /// length. `NonFinitePayoff` when an entry is infinite or not a number.
    pub fn new(rows: Vec<Vec<F>>) -> Result<Self, SolveError> {
        let matrix = DenseMatrix::from_data(rows)?;

        let non_finite = iproduct!(0..matrix.nr_rows(), 0..matrix.nr_columns())
            .find(|&(i, j)| !matrix.get_value(i, j).is_finite());
        if let Some((row, column)) = non_finite {
            return Err(SolveError::NonFinitePayoff { row, column });
        }

        Ok(Self { matrix })
    }

    /// Number of pure strategies of player 1, `m`.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of pure strategies of player 2, `n`.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Payoff when player 1 plays `i` and player 2 plays `j`.
    pub fn get(&self, i: usize, j: usize) -> &F {
        self.matrix.get_value(i, j)
    }

    /// All payoffs for pure strategy `i` of player 1.
    pub fn row(&self, i: usize) -> &[F] {
        self.matrix.row(i)
    }

    /// Iterate over the rows of the matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.matrix.rows()
    }

    /// Smallest payoff in the matrix.
    pub fn min(&self) -> &F {
        self.rows()
            .flatten()
            .fold(self.get(0, 0), |min, value| if value < min { value } else { min })
    }

    /// Largest payoff in the matrix.
    pub fn max(&self) -> &F {
        self.rows()
            .flatten()
            .fold(self.get(0, 0), |max, value| if value > max { value } else { max })
    }

    /// Find a pure saddle point.
    ///
    /// # Return value
    ///
    /// The first `(row, column)` in row-major order of which the payoff is both the minimum of its
    /// row and the maximum of its column, if there is one. Playing these pure strategies is then
    /// optimal for both players, and the payoff is the value of the game.
    pub fn saddle_point(&self) -> Option<(usize, usize)> {
        iproduct!(0..self.nr_rows(), 0..self.nr_columns())
            .find(|&(i, j)| {
                let value = self.get(i, j);
                self.row(i).iter().all(|other| other >= value)
                    && self.matrix.column(j).all(|other| other <= value)
            })
    }
}

impl<F: Field> TryFrom<Vec<Vec<F>>> for PayoffMatrix<F> {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<F>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}
