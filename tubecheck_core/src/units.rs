//! # Unit Types
//!
//! Thin newtype wrappers for the quantities the load presets and reports pass
//! around. They serialize as plain numbers.
//!
//! ## Working Units
//!
//! Every formula in the crate works in one consistent set:
//! - Length: millimetres (mm)
//! - Force: newtons (N)
//! - Moment: newton-millimetres (N·mm)
//! - Stress: megapascals (MPa = N/mm²)
//!
//! ## Example
//!
//! ```rust
//! use tubecheck_core::units::{Megapascals, Millimeters, Newtons};
//!
//! let lever = Millimeters(850.0) - Millimeters(450.0);
//! assert_eq!(lever.0, 400.0);
//!
//! let per_leg = Newtons(950.0) / 4.0;
//! assert_eq!(per_leg.value(), 237.5);
//! assert_eq!(Megapascals(273.771).to_string(), "273.77 MPa");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Force
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

// ============================================================================
// Stress
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl std::fmt::Display for Megapascals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} MPa", self.0)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(Megapascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let arm = Millimeters(850.0) - Millimeters(450.0);
        assert_eq!(arm, Millimeters(400.0));
        assert_eq!((Newtons(1300.0) / 4.0).value(), 325.0);
        assert_eq!(Megapascals(100.0) * 1.5 + Megapascals(5.0), Megapascals(155.0));
    }

    #[test]
    fn test_stress_display() {
        assert_eq!(format!("{}", Megapascals(38.2712)), "38.27 MPa");
    }

    #[test]
    fn test_serialization() {
        let h = Millimeters(450.0);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "450.0");
        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(h, roundtrip);
    }
}
