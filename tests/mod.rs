//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use relp_game::PayoffMatrix;

mod errors;
mod properties;

/// Payoff matrix from rows of small integers.
fn payoff(rows: &[&[i32]]) -> PayoffMatrix<f64> {
    PayoffMatrix::new(
        rows.iter()
            .map(|row| row.iter().map(|&value| f64::from(value)).collect())
            .collect()
    ).unwrap()
}

/// A few games of different shapes, with positive, negative and mixed payoffs.
fn games() -> Vec<PayoffMatrix<f64>> {
    vec![
        payoff(&[&[1, 0], &[0, 1]]),
        payoff(&[&[3, 1], &[4, 2]]),
        payoff(&[&[0, -1, 1], &[1, 0, -1], &[-1, 1, 0]]),
        payoff(&[&[3]]),
        payoff(&[&[5, 5], &[5, 5]]),
        payoff(&[&[2, -1, 3], &[-2, 4, 1]]),
        payoff(&[&[4, 1], &[2, 3], &[1, 5]]),
        payoff(&[&[1, 2], &[3, 4]]),
        payoff(&[&[-2, 3], &[3, -4]]),
        payoff(&[&[2, 1], &[1, 3]]),
        payoff(&[&[-7, -3, -9], &[-4, -8, -1]]),
        payoff(&[&[6, 2, 9, 1], &[3, 8, 2, 7], &[5, 5, 4, 6]]),
        payoff(&[&[0, -3, -3], &[2, 2, -3]]),
        payoff(&[&[-1, -3, -1, -1], &[-2, -3, 1, 3], &[3, -2, 3, 3], &[3, -1, -3, -1]]),
    ]
}
