//! # Hollow-Section and Weld Area Formulas
//!
//! Geometric properties of thin-walled square and round tubes, plus the
//! resisting areas of the welded joints that attach them.
//!
//! ## Notation
//!
//! - `S` = Outer width of a square tube
//! - `D` = Outer diameter of a round tube
//! - `t` = Wall thickness
//! - `w` = Weld bead width
//! - `I` = Second moment of area about a centroidal axis
//! - `c` = Distance from the neutral axis to the extreme fiber
//! - `A` = Area
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 10th Edition, Table A-18
//! - AWS D1.1, Clause 2: effective throat of fillet welds

use std::f64::consts::PI;

/// Effective throat of a 45° fillet weld as a fraction of its leg size.
pub const FILLET_THROAT_FACTOR: f64 = 0.707;

// =============================================================================
// SQUARE HOLLOW SECTION
// =============================================================================

/// Second moment of area of a square hollow section
///
/// ```text
///     ┌───────────┐
///     │ ┌───────┐ │
///   S │ │       │ │ ← wall t
///     │ └───────┘ │
///     └───────────┘
///           S
/// ```
///
/// # Formula
/// I = (S⁴ − (S − 2t)⁴) / 12
///
/// # Example
/// ```rust
/// use tubecheck_core::equations::section::square_hollow_moment_of_inertia;
///
/// let i = square_hollow_moment_of_inertia(20.0, 0.9);
/// assert!((i - 4190.005).abs() < 0.001);
/// ```
#[inline]
pub fn square_hollow_moment_of_inertia(s: f64, t: f64) -> f64 {
    let inner = s - 2.0 * t;
    (s.powi(4) - inner.powi(4)) / 12.0
}

/// Cross-sectional area of a square hollow section
///
/// # Formula
/// A = S² − (S − 2t)²
#[inline]
pub fn square_hollow_area(s: f64, t: f64) -> f64 {
    let inner = s - 2.0 * t;
    s * s - inner * inner
}

/// Chart-comparison approximation of a square tube's second moment
///
/// Treats the welded end as a compact block, `I ≈ S·S³/2`. This is a distinct
/// model kept for comparison plots and is not a correction of
/// [`square_hollow_moment_of_inertia`].
#[inline]
pub fn weld_throat_approx_moment_of_inertia(s: f64) -> f64 {
    s * s.powi(3) / 2.0
}

// =============================================================================
// ROUND HOLLOW SECTION
// =============================================================================

/// Second moment of area of a round hollow section
///
/// # Formula
/// I = (π/64)·(D⁴ − (D − 2t)⁴)
///
/// # Example
/// ```rust
/// use tubecheck_core::equations::section::round_hollow_moment_of_inertia;
///
/// let i = round_hollow_moment_of_inertia(20.0, 0.9);
/// assert!((i - 2468.12).abs() < 0.01);
/// ```
#[inline]
pub fn round_hollow_moment_of_inertia(d: f64, t: f64) -> f64 {
    let inner = d - 2.0 * t;
    (PI / 64.0) * (d.powi(4) - inner.powi(4))
}

/// Cross-sectional area of a round hollow section
///
/// # Formula
/// A = (π/4)·(D² − (D − 2t)²)
#[inline]
pub fn round_hollow_area(d: f64, t: f64) -> f64 {
    let inner = d - 2.0 * t;
    (PI / 4.0) * (d * d - inner * inner)
}

/// Extreme fiber distance for a doubly symmetric section, c = outer / 2
#[inline]
pub fn extreme_fiber_distance(outer: f64) -> f64 {
    outer / 2.0
}

// =============================================================================
// WELD AREAS
// =============================================================================

/// Two fillet welds of bead width `w` along a wall of thickness `t`
///
/// # Formula
/// A = 2·w·t
#[inline]
pub fn two_fillet_weld_area(w: f64, t: f64) -> f64 {
    2.0 * w * t
}

/// Weld running along a path of length `perimeter` through a wall `t`
///
/// # Formula
/// A = perimeter·t
#[inline]
pub fn perimeter_weld_area(perimeter: f64, t: f64) -> f64 {
    perimeter * t
}

/// Effective throat thickness of a fillet weld, 0.707·t
#[inline]
pub fn fillet_throat(t: f64) -> f64 {
    FILLET_THROAT_FACTOR * t
}

/// Full outer perimeter: 4·S for a square tube
#[inline]
pub fn square_perimeter(s: f64) -> f64 {
    4.0 * s
}

/// Full outer perimeter: π·D for a round tube
#[inline]
pub fn round_perimeter(d: f64) -> f64 {
    PI * d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_inertia() {
        // (20⁴ − 18.2⁴)/12 = (160000 − 109719.99)/12
        let i = square_hollow_moment_of_inertia(20.0, 0.9);
        assert!((i - 4190.005).abs() < 0.001);
    }

    #[test]
    fn test_round_inertia() {
        let i = round_hollow_moment_of_inertia(20.0, 0.9);
        assert!((i - 2468.12).abs() < 0.01);
    }

    #[test]
    fn test_square_area() {
        // 400 − 331.24
        assert!((square_hollow_area(20.0, 0.9) - 68.76).abs() < 1e-9);
    }

    #[test]
    fn test_round_area() {
        let expected = PI / 4.0 * (400.0 - 18.2 * 18.2);
        assert!((round_hollow_area(20.0, 0.9) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_weld_areas() {
        assert!((two_fillet_weld_area(6.0, 0.9) - 10.8).abs() < 1e-12);
        assert!((perimeter_weld_area(round_perimeter(25.4), 0.9) - PI * 25.4 * 0.9).abs() < 1e-12);
        assert!((fillet_throat(1.0) - 0.707).abs() < 1e-12);
    }

    #[test]
    fn test_throat_approximation_is_larger() {
        assert!(weld_throat_approx_moment_of_inertia(20.0) > square_hollow_moment_of_inertia(20.0, 0.9));
    }
}
