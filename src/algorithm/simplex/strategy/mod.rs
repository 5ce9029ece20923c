//! # Strategies for the Simplex algorithm
//!
//! Different ways of performing certain procedures in the Simplex method, such as deciding on
//! which column to pivot. Not to be confused with the strategies of the players of a game, which
//! live in `data::game::strategy`.
pub mod pivot_rule;
