//! # Solving matrix games
//!
//! Optimal mixed strategies and the value of two-player zero-sum games are computed with the
//! tableau simplex method, as described in the book Combinatorial Optimization by Christos H.
//! Papadimitriou and Kenneth Steiglitz.
//!
//! The payoffs are shifted to be positive, after which the game is equivalent to a linear program
//! in canonical form. Its initial tableau has the slack variables as a feasible basis, so no first
//! phase is needed. All intermediate tableaus are kept, such that the steps towards the solution
//! can be inspected.
//!
//! ```
//! use relp_game::{PayoffMatrix, SolveGame};
//!
//! let matching_pennies = PayoffMatrix::new(vec![
//!     vec![1_f64, 0_f64],
//!     vec![0_f64, 1_f64],
//! ])?;
//! let solution = matching_pennies.solve()?;
//! assert!((solution.value() - 0.5).abs() < 1e-12);
//! # Ok::<(), relp_game::SolveError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use algorithm::{solve, solve_with, SolveGame, SolverConfig};
pub use data::game::payoff::PayoffMatrix;
pub use data::game::solution::GameSolution;
pub use data::game::strategy::MixedStrategy;
pub use error::SolveError;

#[cfg(test)]
mod tests;
