//! # Stress Formulas
//!
//! Elementary stress relations. Inputs in N, mm and N·mm give MPa.

/// Bending stress at the extreme fiber
///
/// # Formula
/// σ = M·c / I
///
/// # Example
/// ```rust
/// use tubecheck_core::equations::stress::bending_stress;
///
/// let sigma = bending_stress(5000.0, 10.0, 4190.005);
/// assert!((sigma - 11.933).abs() < 0.001);
/// ```
#[inline]
pub fn bending_stress(m: f64, c: f64, i: f64) -> f64 {
    m * c / i
}

/// Uniform normal stress of a force over an area
///
/// # Formula
/// σ = F / A
#[inline]
pub fn axial_stress(f: f64, a: f64) -> f64 {
    f / a
}

/// Average shear stress of a force over an area
///
/// # Formula
/// τ = V / A
#[inline]
pub fn average_shear_stress(v: f64, a: f64) -> f64 {
    v / a
}
