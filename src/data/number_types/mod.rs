//! # Number types
//!
//! The algorithms are defined over a field. A benefit of this approach is that they can be
//! tested for correctness using exact fractions (with the `exact` feature), while the same code is
//! used without adaptation with floating point numbers.
pub mod traits;
