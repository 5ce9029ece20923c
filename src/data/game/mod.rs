//! # Two-player zero-sum matrix games
//!
//! The input of the solver (a payoff matrix) and its output (mixed strategies and the value of the
//! game).
pub mod payoff;
pub mod solution;
pub mod strategy;
