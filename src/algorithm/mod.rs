//! # Algorithms
use log::info;

use crate::algorithm::simplex::{primal, Termination};
use crate::algorithm::simplex::extraction::{extract_strategies, StrategyMapping};
use crate::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::{RatioTest, Tableau};
use crate::data::game::payoff::PayoffMatrix;
use crate::data::game::solution::GameSolution;
use crate::data::number_types::traits::Field;
use crate::error::SolveError;

pub mod simplex;

/// Number of pivots after which the simplex method gives up, unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Settings for a single solve.
///
/// The pivot rule is not a setting; it is chosen as a type parameter of `solve_with`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of pivots, protecting against cycling.
    pub max_iterations: usize,
    /// How the strategy of player 2 is read from the terminal tableau.
    pub strategy_mapping: StrategyMapping,
    /// Which rows qualify when selecting a pivot row.
    pub ratio_test: RatioTest,
}

impl SolverConfig {
    /// Change the maximum number of pivots.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Change how the strategy of player 2 is read from the terminal tableau.
    pub fn with_strategy_mapping(mut self, strategy_mapping: StrategyMapping) -> Self {
        self.strategy_mapping = strategy_mapping;
        self
    }

    /// Change which rows qualify when selecting a pivot row.
    pub fn with_ratio_test(mut self, ratio_test: RatioTest) -> Self {
        self.ratio_test = ratio_test;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            strategy_mapping: StrategyMapping::default(),
            ratio_test: RatioTest::default(),
        }
    }
}

/// Compute optimal strategies for both players and the value of a game.
///
/// Uses the default configuration and the `SteepestDescentAlongVariable` pivot rule.
pub fn solve<F: Field>(payoff: &PayoffMatrix<F>) -> Result<GameSolution<F>, SolveError> {
    solve_with::<F, SteepestDescentAlongVariable>(payoff, &SolverConfig::default())
}

/// Compute optimal strategies for both players and the value of a game.
///
/// # Arguments
///
/// * `payoff`: Payoffs to player 1.
/// * `config`: Iteration cap, strategy mapping and ratio test.
///
/// # Return value
///
/// The solution including all tableaus that were visited.
///
/// # Errors
///
/// When the optimum is not reached within `config.max_iterations` pivots, or when no strategies
/// can be read from the terminal tableau. `Unbounded` only when `RatioTest::StrictlyPositive` is
/// configured: it may find no pivot row on degenerate tableaus.
pub fn solve_with<F, PR>(
    payoff: &PayoffMatrix<F>,
    config: &SolverConfig,
) -> Result<GameSolution<F>, SolveError>
where
    F: Field,
    PR: PivotRule<F>,
{
    info!(
        "solving a {} by {} game, at most {} pivots",
        payoff.nr_rows(), payoff.nr_columns(), config.max_iterations,
    );

    let run = primal::<F, PR>(Tableau::new(payoff), config.max_iterations, config.ratio_test);
    match run.termination {
        Termination::Optimal => {
            let (player_one, player_two, value) = extract_strategies(
                run.history.terminal(),
                &run.pivots,
                config.strategy_mapping,
            )?;
            Ok(GameSolution::new(run.history, run.pivots, player_one, player_two, value))
        },
        Termination::Unbounded { column } => Err(SolveError::Unbounded { column }),
        Termination::IterationLimit => Err(SolveError::MaxIterationsExceeded {
            iterations: run.pivots.len(),
        }),
    }
}

/// A matrix game that can be solved.
pub trait SolveGame<F> {
    /// Solve with the default configuration and pivot rule.
    fn solve(&self) -> Result<GameSolution<F>, SolveError>;

    /// Solve with pivot rule `PR` and the provided configuration.
    fn solve_with<PR: PivotRule<F>>(&self, config: &SolverConfig) -> Result<GameSolution<F>, SolveError>;
}

impl<F: Field> SolveGame<F> for PayoffMatrix<F> {
    fn solve(&self) -> Result<GameSolution<F>, SolveError> {
        solve(self)
    }

    fn solve_with<PR: PivotRule<F>>(&self, config: &SolverConfig) -> Result<GameSolution<F>, SolveError> {
        solve_with::<F, PR>(self, config)
    }
}
