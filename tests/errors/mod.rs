//! Failures are reported as values.
use relp_game::{solve_with, PayoffMatrix, SolveError, SolverConfig};
use relp_game::algorithm::simplex::{primal, Termination};
use relp_game::algorithm::simplex::extraction::{extract_strategies, StrategyMapping};
use relp_game::algorithm::simplex::strategy::pivot_rule::SteepestDescentAlongVariable;
use relp_game::algorithm::simplex::tableau::{RatioTest, Tableau};

use crate::payoff;

#[test]
fn invalid_payoff_matrix() {
    assert_eq!(
        PayoffMatrix::<f64>::new(vec![vec![]]),
        Err(SolveError::InvalidDimensions { rows: 1, columns: 0 }),
    );
    assert!(matches!(
        PayoffMatrix::new(vec![vec![1f64], vec![2f64, 3f64]]),
        Err(SolveError::InvalidDimensions { .. }),
    ));
    assert_eq!(
        PayoffMatrix::new(vec![vec![1f64, f64::INFINITY]]),
        Err(SolveError::NonFinitePayoff { row: 0, column: 1 }),
    );
}

#[test]
fn unbounded_tableau() {
    let tableau = Tableau::from_rows(vec![
        vec![1f64, -2f64, 1f64, 0f64, 1f64],
        vec![1f64, -1f64, 0f64, 1f64, 2f64],
        vec![-1f64, -3f64, 0f64, 0f64, 0f64],
    ], 2, 0f64).unwrap();

    let run = primal::<_, SteepestDescentAlongVariable>(tableau, 100, RatioTest::MinimumRatio);
    assert_eq!(run.termination, Termination::Unbounded { column: 1 });
    assert_eq!(run.history.len(), run.pivots.len() + 1);
}

#[test]
fn iteration_limit() {
    let config = SolverConfig::default().with_max_iterations(1);
    let result = solve_with::<_, SteepestDescentAlongVariable>(&payoff(&[&[1, 0], &[0, 1]]), &config);

    assert_eq!(result, Err(SolveError::MaxIterationsExceeded { iterations: 1 }));
    assert_eq!(
        result.unwrap_err().to_string(),
        "No optimum found after 1 pivots",
    );
}

#[test]
fn degenerate_result() {
    let initial = Tableau::new(&payoff(&[&[2, 1], &[1, 3]]));
    assert!(matches!(
        extract_strategies(&initial, &[], StrategyMapping::EnteringColumn),
        Err(SolveError::DegenerateResult { .. }),
    ));
}
