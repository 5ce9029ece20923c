//! # Error reporting for solving of matrix games
//!
//! Everything that can go wrong between receiving a payoff matrix and handing back the optimal
//! strategies. None of these conditions is fatal; they are returned to the caller as values.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `SolveError` is created when a game could not be solved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The payoff matrix (or a tableau) has no rows, no columns, or rows of different lengths.
    InvalidDimensions {
        /// Number of rows that was provided.
        rows: usize,
        /// Number of columns that was provided, or expected in the case of ragged input.
        columns: usize,
    },
    /// A payoff is infinite or not a number.
    NonFinitePayoff {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        column: usize,
    },
    /// A pivot column was found, but no constraint row qualifies in the ratio test.
    ///
    /// The linear program of a game always has a finite optimum. This is reported for tableaus
    /// provided by the caller, or when the `StrictlyPositive` ratio test skips the zero ratios of
    /// a degenerate game.
    Unbounded {
        /// Index of the column that could be increased without bound.
        column: usize,
    },
    /// The objective value of the terminal tableau is zero or not finite.
    ///
    /// The value and strategies are derived by dividing by this number.
    DegenerateResult {
        /// Textual representation of the offending objective value.
        objective: String,
    },
    /// The safety cap on the number of pivots was reached before an optimum was found.
    ///
    /// This typically indicates cycling due to degeneracy or accumulated rounding errors.
    MaxIterationsExceeded {
        /// The number of pivots that were performed.
        iterations: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::InvalidDimensions { rows, columns } => write!(
                f, "Invalid dimensions: a {rows} by {columns} payoff matrix can't be solved, every row \
                 should have the same, positive number of columns",
            ),
            SolveError::NonFinitePayoff { row, column } => write!(
                f, "Payoff at row {row}, column {column} is not a finite number",
            ),
            SolveError::Unbounded { column } => write!(
                f, "Linear program is unbounded in the direction of column {column}",
            ),
            SolveError::DegenerateResult { objective } => write!(
                f, "Degenerate result: terminal objective value {objective} can't be inverted",
            ),
            SolveError::MaxIterationsExceeded { iterations } => write!(
                f, "No optimum found after {iterations} pivots",
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod test {
    use crate::error::SolveError;

    #[test]
    fn display() {
        let error = SolveError::Unbounded { column: 2 };
        assert_eq!(error.to_string(), "Linear program is unbounded in the direction of column 2");

        let error = SolveError::MaxIterationsExceeded { iterations: 10 };
        assert_eq!(error.to_string(), "No optimum found after 10 pivots");

        let error = SolveError::DegenerateResult { objective: "0".to_string() };
        assert!(error.to_string().contains("value 0 "));
    }
}
