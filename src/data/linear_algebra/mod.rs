//! # Linear algebra primitives
//!
//! Dense storage for the matrices the solver works with.
pub mod matrix;
