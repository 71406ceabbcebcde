//! # Fatigue Formulas
//!
//! High-cycle fatigue relations for steel tubes.
//!
//! ## Notation
//!
//! - `a` = Reference cycle count of the S-N curve
//! - `b` = Basquin exponent
//! - `N` = Cycle count
//! - `Se` = Endurance limit
//! - `Sut` = Ultimate tensile strength
//! - `n` = Safety factor
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 10th Edition, Sections 6-7 and 6-12

/// Admissible stress amplitude for `n_cycles` on a Basquin curve anchored at `(a, Se)`
///
/// # Formula
/// σ_adm(N) = Se·(a/N)^(1/b)
///
/// # Example
/// ```rust
/// use tubecheck_core::equations::fatigue::basquin_admissible_stress;
///
/// let sigma = basquin_admissible_stress(155.0, 1.0e6, 50_000.0, 5.0);
/// assert!((sigma - 282.2).abs() < 0.1);
/// ```
#[inline]
pub fn basquin_admissible_stress(se: f64, a: f64, n_cycles: f64, b: f64) -> f64 {
    se * (a / n_cycles).powf(1.0 / b)
}

/// Cycles to failure for a stress normalized by a reference strength
///
/// # Formula
/// N(σ) = a·(σ / S_ref)^(−b)
///
/// `S_ref` is either Se or Sut depending on the estimator in use.
#[inline]
pub fn basquin_life(sigma: f64, reference_strength: f64, a: f64, b: f64) -> f64 {
    a * (sigma / reference_strength).powf(-b)
}

/// Admissible stress on the modified Goodman line for a safety factor `n`
///
/// # Formula
/// σ_adm = Se·Sut / (n·(Sut − Se))
#[inline]
pub fn goodman_admissible_stress(se: f64, sut: f64, n: f64) -> f64 {
    se * sut / (n * (sut - se))
}

/// Mean stress allowed by the Goodman envelope for an alternating stress
///
/// # Formula
/// σ_m = Se·(1 − σ_a / Sut)
#[inline]
pub fn goodman_envelope_mean(sigma_a: f64, se: f64, sut: f64) -> f64 {
    se * (1.0 - sigma_a / sut)
}
