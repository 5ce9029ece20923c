//! # Storing of games in memory
//!
//! This module provides the data structures used to represent games and their solutions in
//! memory. Algorithms may introduce their specific data structures in `algorithm::my_algorithm`.
pub mod game;
pub mod linear_algebra;
pub mod number_types;
