//! # Traits
//!
//! The number type that the simplex method computes with. The contract is that of an ordered
//! field, but finite representations (floating point numbers) only approximate it.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Basic field operations with `Self` and with references to `Self`.
///
/// All algorithmic logic of this crate is written against this trait, such that the same code can
/// be tested for correctness using exact fractions while running on floats in practice.
pub trait Field:
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Whether this value is an actual number.
    ///
    /// Exact types are always finite. Floating point values can be infinite or `NaN` after a
    /// division by a (numerically) zero value.
    fn is_finite(&self) -> bool;

    /// Whether this value is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }

    /// Whether this value is strictly larger than zero.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }

    /// Whether this value should be treated as zero.
    ///
    /// For exact types, this is the case only when the value is zero. Floating point values within
    /// a small tolerance of zero are considered the result of rounding errors.
    fn is_negligible(&self) -> bool {
        self.is_zero()
    }
}

/// Absolute tolerance below which an `f64` is considered zero.
const F64_TOLERANCE: f64 = 1e-9;
/// Absolute tolerance below which an `f32` is considered zero.
const F32_TOLERANCE: f32 = 1e-5;

impl Field for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn is_negligible(&self) -> bool {
        self.abs() <= F64_TOLERANCE
    }
}

impl Field for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn is_negligible(&self) -> bool {
        self.abs() <= F32_TOLERANCE
    }
}

#[cfg(feature = "exact")]
impl Field for relp_num::RationalBig {
    fn is_finite(&self) -> bool {
        true
    }
}
