//! # Joint Moment Formulas
//!
//! Moments at the frame joints produced by the ISO 7173 test loads.
//!
//! ## Notation
//!
//! - `F` = Concentrated force
//! - `n` = Number of legs sharing a load
//! - `h` = Lever arm (height of the load above the joint)
//! - `q` = Uniform line load intensity (force per unit length)
//! - `L` = Span of the loaded tube
//!
//! ## Sign Conventions
//!
//! Moments are reported as positive magnitudes. Contributions acting at the
//! same joint add.

/// Share of a total force carried by one of `legs` equally loaded legs
///
/// # Formula
/// F_leg = F / n
#[inline]
pub fn per_leg_force(total: f64, legs: u32) -> f64 {
    total / f64::from(legs)
}

/// Moment at the root of a cantilever loaded at its tip
///
/// ```text
///          F →
///          ┃
///          ┃ h
///          ┃
///    ══════╋══════  ← joint under analysis
/// ```
///
/// # Formula
/// M = F·h
#[inline]
pub fn cantilever_point_moment(f: f64, h: f64) -> f64 {
    f * h
}

/// End moment of a fixed-fixed tube under a uniform line load
///
/// ```text
///   ▓↓↓↓↓↓↓↓↓↓↓↓↓↓▓
///   ▓═════════════▓
///   ←──────L──────→
/// ```
///
/// # Formula
/// M = q·L² / 12
///
/// # Example
/// ```rust
/// use tubecheck_core::equations::beam::fixed_fixed_uniform_end_moment;
///
/// // 1300 N spread over 400 mm
/// let m = fixed_fixed_uniform_end_moment(1300.0 / 400.0, 400.0);
/// assert!((m - 43_333.33).abs() < 0.01);
/// ```
#[inline]
pub fn fixed_fixed_uniform_end_moment(q: f64, l: f64) -> f64 {
    q * l * l / 12.0
}
