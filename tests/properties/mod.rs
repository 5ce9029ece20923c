//! Properties that every solution should have, checked on a collection of games.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;

use relp_game::{solve, solve_with, PayoffMatrix, SolveGame, SolverConfig};
use relp_game::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use relp_game::algorithm::simplex::tableau::Tableau;

use crate::{games, payoff};

const EPSILON: f64 = 1e-9;

/// Neither player can improve on `value` by deviating to a pure strategy.
fn assert_equilibrium(payoff: &PayoffMatrix<f64>, player_one: &[f64], player_two: &[f64], value: f64) {
    for j in 0..payoff.nr_columns() {
        let guaranteed = (0..payoff.nr_rows())
            .map(|i| player_one[i] * payoff.get(i, j))
            .sum::<f64>();
        assert!(guaranteed >= value - EPSILON, "column {j} gives {guaranteed} < {value}");
    }
    for i in 0..payoff.nr_rows() {
        let conceded = payoff.row(i).iter()
            .zip(player_two)
            .map(|(payoff, probability)| payoff * probability)
            .sum::<f64>();
        assert!(conceded <= value + EPSILON, "row {i} gives {conceded} > {value}");
    }
}

/// Both strategies are probability distributions of the right length.
fn assert_distributions(payoff: &PayoffMatrix<f64>, player_one: &[f64], player_two: &[f64]) {
    assert_eq!(player_one.len(), payoff.nr_rows());
    assert_eq!(player_two.len(), payoff.nr_columns());
    for strategy in [player_one, player_two] {
        assert!(strategy.iter().all(|&probability| probability >= -EPSILON), "{strategy:?}");
        assert_abs_diff_eq!(strategy.iter().sum::<f64>(), 1.0, epsilon = EPSILON);
    }
}

/// Games with a few rows and columns of small integers, which often tie in the ratio test.
fn random_games(seed: u64, count: usize) -> Vec<PayoffMatrix<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let nr_rows = rng.random_range(1..=4);
            let nr_columns = rng.random_range(1..=4);
            let rows = (0..nr_rows)
                .map(|_| (0..nr_columns).map(|_| f64::from(rng.random_range(-3_i32..=3))).collect())
                .collect();
            PayoffMatrix::new(rows).unwrap()
        })
        .collect()
}

#[test]
fn small_integer_games() {
    for payoff in random_games(0x5eed, 2_000) {
        let steepest = solve_with::<_, SteepestDescentAlongVariable>(&payoff, &SolverConfig::default())
            .unwrap_or_else(|error| panic!("{payoff:?}: {error}"));
        let first = solve_with::<_, FirstProfitable>(&payoff, &SolverConfig::default())
            .unwrap_or_else(|error| panic!("{payoff:?}: {error}"));

        for solution in [&steepest, &first] {
            let player_one = solution.player_one().probabilities();
            let player_two = solution.player_two().probabilities();
            assert_distributions(&payoff, player_one, player_two);
            assert_equilibrium(&payoff, player_one, player_two, *solution.value());
        }
        assert_abs_diff_eq!(*first.value(), *steepest.value(), epsilon = EPSILON);
    }
}

#[test]
fn strategies_are_distributions() {
    for payoff in games() {
        let solution = solve(&payoff).unwrap();

        assert_eq!(solution.player_one().len(), payoff.nr_rows());
        assert_eq!(solution.player_two().len(), payoff.nr_columns());
        for strategy in [solution.player_one(), solution.player_two()] {
            assert!(strategy.iter().all(|&probability| probability >= -EPSILON));
            assert_abs_diff_eq!(strategy.total(), 1.0, epsilon = EPSILON);
        }
    }
}

#[test]
fn optimal_for_both_players() {
    for payoff in games() {
        let solution = payoff.solve().unwrap();
        assert_equilibrium(
            &payoff,
            solution.player_one().probabilities(),
            solution.player_two().probabilities(),
            *solution.value(),
        );
    }
}

#[test]
fn value_between_extreme_payoffs() {
    for payoff in games() {
        let solution = solve(&payoff).unwrap();
        assert!(*solution.value() >= payoff.min() - EPSILON);
        assert!(*solution.value() <= payoff.max() + EPSILON);
    }
}

#[test]
fn idempotent() {
    for payoff in games() {
        assert_eq!(solve(&payoff), solve(&payoff));
    }
}

#[test]
fn history_starts_at_initial_tableau() {
    for payoff in games() {
        let solution = solve(&payoff).unwrap();

        assert_eq!(solution.history().len(), solution.nr_pivots() + 1);
        assert_eq!(solution.history()[0], Tableau::new(&payoff));
        assert_eq!(solution.terminal_tableau(), &solution.history()[solution.nr_pivots()]);
        for tableau in solution.history() {
            assert_eq!(tableau.nr_rows(), payoff.nr_rows() + 1);
            assert_eq!(tableau.nr_columns(), payoff.nr_columns() + payoff.nr_rows() + 1);
            assert_eq!(tableau.shift(), solution.history()[0].shift());
        }
        assert!(solution.terminal_tableau().objective_row().iter().all(|&value| value >= 0.0));
    }
}

#[test]
fn saddle_point_gives_pure_strategies() {
    for payoff in games() {
        let Some((row, column)) = payoff.saddle_point() else { continue };

        let solution = solve(&payoff).unwrap();
        assert_relative_eq!(*solution.value(), *payoff.get(row, column), epsilon = EPSILON);
        assert!(solution.player_one().is_pure());
        assert!(solution.player_two().is_pure());
    }

    let solution = solve(&payoff(&[&[1, 2], &[3, 4]])).unwrap();
    assert_eq!(solution.player_one().support(), vec![1]);
    assert_eq!(solution.player_two().support(), vec![0]);
    assert_relative_eq!(*solution.value(), 3.0);
}

#[test]
fn matching_pennies() {
    let solution = solve(&payoff(&[&[1, 0], &[0, 1]])).unwrap();

    assert_relative_eq!(*solution.value(), 0.5, epsilon = EPSILON);
    for strategy in [solution.player_one(), solution.player_two()] {
        for &probability in strategy {
            assert_relative_eq!(probability, 0.5, epsilon = EPSILON);
        }
    }
}

#[test]
fn single_entry() {
    let solution = solve(&payoff(&[&[3]])).unwrap();

    assert_relative_eq!(*solution.value(), 3.0, epsilon = EPSILON);
    assert_relative_eq!(solution.player_one()[0], 1.0, epsilon = EPSILON);
    assert_relative_eq!(solution.player_two()[0], 1.0, epsilon = EPSILON);
}

#[test]
fn pivot_rules_reach_the_same_value() {
    for payoff in games() {
        let steepest = solve(&payoff).unwrap();
        let first = solve_with::<_, FirstProfitable>(&payoff, &SolverConfig::default()).unwrap();

        assert_abs_diff_eq!(*first.value(), *steepest.value(), epsilon = EPSILON);
        assert_equilibrium(
            &payoff,
            first.player_one().probabilities(),
            first.player_two().probabilities(),
            *first.value(),
        );
    }
}
