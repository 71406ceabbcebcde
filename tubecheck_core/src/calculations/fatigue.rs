//! Fatigue Estimation
//!
//! Basquin S-N curve anchored at `(a, Se)` plus a Goodman check.
//!
//! The curve is only meaningful while the admissible stress stays below Sut.
//! Short target lives push `σ_adm(N)` above Sut; the estimate then carries an
//! [`FatigueAdvisory::OutOfModelRange`] and the fatigue limit falls back to Sut.

use serde::{Deserialize, Serialize};

use crate::equations::fatigue::{
    basquin_admissible_stress,
    basquin_life,
    goodman_admissible_stress,
    goodman_envelope_mean,
};
use crate::equations::registry::Equation;
use crate::materials::MaterialLimits;

/// Strength the life estimate normalizes the applied stress by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeNormalization {
    /// `N = a·(σ/Sut)^(−b)`
    #[default]
    Ultimate,
    /// `N = a·(σ/Se)^(−b)`, the exact inverse of the admissible-stress relation
    Endurance,
}

impl LifeNormalization {
    pub fn display_name(&self) -> &'static str {
        match self {
            LifeNormalization::Ultimate => "Normalized by Sut",
            LifeNormalization::Endurance => "Normalized by Se",
        }
    }

    pub fn equation(&self) -> Equation {
        match self {
            LifeNormalization::Ultimate => Equation::BasquinLifeUltimate,
            LifeNormalization::Endurance => Equation::BasquinLifeEndurance,
        }
    }

    fn reference_strength(&self, limits: &MaterialLimits) -> f64 {
        match self {
            LifeNormalization::Ultimate => limits.sut_mpa,
            LifeNormalization::Endurance => limits.se_mpa,
        }
    }
}

/// Basquin power law through `(a, Se)` with exponent `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasquinCurve {
    /// Reference cycle count `a`
    pub reference_cycles: f64,
    /// Exponent `b`
    pub exponent: f64,
}

impl Default for BasquinCurve {
    fn default() -> Self {
        BasquinCurve {
            reference_cycles: 1e6,
            exponent: 5.0,
        }
    }
}

impl BasquinCurve {
    /// Admissible stress amplitude for `cycles` (MPa)
    ///
    /// ```rust
    /// use tubecheck_core::calculations::fatigue::BasquinCurve;
    ///
    /// let curve = BasquinCurve::default();
    /// assert!((curve.admissible_stress(155.0, 50_000.0) - 282.19).abs() < 0.01);
    /// ```
    pub fn admissible_stress(&self, se_mpa: f64, cycles: f64) -> f64 {
        basquin_admissible_stress(se_mpa, self.reference_cycles, cycles, self.exponent)
    }

    /// Cycles to failure at `stress_mpa`; `None` means unbounded life
    pub fn life(&self, stress_mpa: f64, limits: &MaterialLimits, normalization: LifeNormalization) -> Option<f64> {
        let sigma = stress_mpa.abs();
        if sigma == 0.0 {
            return None;
        }
        let life = basquin_life(
            sigma,
            normalization.reference_strength(limits),
            self.reference_cycles,
            self.exponent,
        );
        life.is_finite().then_some(life)
    }
}

/// Conditions under which the fatigue model is being used outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FatigueAdvisory {
    /// The admissible stress for the target life exceeds Sut
    OutOfModelRange {
        target_cycles: f64,
        admissible_stress_mpa: f64,
        sut_mpa: f64,
    },
}

impl FatigueAdvisory {
    pub fn message(&self) -> String {
        match self {
            FatigueAdvisory::OutOfModelRange {
                target_cycles,
                admissible_stress_mpa,
                sut_mpa,
            } => format!(
                "Admissible stress {:.1} MPa at {:.0} cycles exceeds Sut {:.1} MPa; Sut used as the fatigue limit",
                admissible_stress_mpa, target_cycles, sut_mpa
            ),
        }
    }
}

/// Result of the Basquin estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueEstimate {
    /// Cycle count the admissible stress was computed for
    pub target_cycles: f64,
    /// σ_adm at the target cycle count (MPa)
    pub admissible_stress_mpa: f64,
    /// Limit the fatigue verdict compares against (MPa)
    pub fatigue_limit_mpa: f64,
    /// Estimated cycles to failure at the governing stress; `None` when unbounded
    pub estimated_life_cycles: Option<f64>,
    /// Estimator used for the life
    pub life_normalization: LifeNormalization,
    pub advisories: Vec<FatigueAdvisory>,
}

impl FatigueEstimate {
    pub fn is_out_of_model_range(&self) -> bool {
        self.advisories
            .iter()
            .any(|a| matches!(a, FatigueAdvisory::OutOfModelRange { .. }))
    }
}

/// Run the Basquin estimate for one governing stress.
///
/// Without a target cycle count the reference count `a` is used, so the
/// admissible stress is Se.
pub fn estimate_fatigue(
    governing_stress_mpa: f64,
    limits: &MaterialLimits,
    target_cycles: Option<u64>,
    curve: &BasquinCurve,
    normalization: LifeNormalization,
) -> FatigueEstimate {
    let target = target_cycles.map(|n| n as f64).unwrap_or(curve.reference_cycles);
    let admissible = curve.admissible_stress(limits.se_mpa, target);

    let mut advisories = Vec::new();
    let fatigue_limit = if admissible > limits.sut_mpa {
        advisories.push(FatigueAdvisory::OutOfModelRange {
            target_cycles: target,
            admissible_stress_mpa: admissible,
            sut_mpa: limits.sut_mpa,
        });
        limits.sut_mpa
    } else {
        admissible
    };

    FatigueEstimate {
        target_cycles: target,
        admissible_stress_mpa: admissible,
        fatigue_limit_mpa: fatigue_limit,
        estimated_life_cycles: curve.life(governing_stress_mpa, limits, normalization),
        life_normalization: normalization,
        advisories,
    }
}

/// One point on the Goodman envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoodmanPoint {
    pub alternating_mpa: f64,
    pub mean_mpa: f64,
}

/// Goodman admissible stress and envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodmanCheck {
    pub safety_factor: f64,
    /// Se·Sut / (n·(Sut − Se)) (MPa)
    pub admissible_stress_mpa: f64,
    /// Governing stress within the admissible value
    pub approved: bool,
    /// `σ_m = Se·(1 − σ_a/Sut)` for `σ_a` from 0 to Sut
    pub envelope: Vec<GoodmanPoint>,
}

/// Goodman check of the governing stress.
///
/// Requires `Se < Sut` and `points ≥ 2`, both guaranteed by a validated
/// configuration.
///
/// ```rust
/// use tubecheck_core::calculations::fatigue::goodman_check;
/// use tubecheck_core::materials::{MaterialLimits, MaterialRatios};
///
/// let limits = MaterialLimits::from_ultimate(310.0, &MaterialRatios::default()).unwrap();
/// let check = goodman_check(180.0, &limits, 1.0, 100);
/// assert!((check.admissible_stress_mpa - 310.0).abs() < 1e-9);
/// assert!(check.approved);
/// assert_eq!(check.envelope.len(), 100);
/// ```
pub fn goodman_check(governing_stress_mpa: f64, limits: &MaterialLimits, safety_factor: f64, points: usize) -> GoodmanCheck {
    let admissible = goodman_admissible_stress(limits.se_mpa, limits.sut_mpa, safety_factor);
    GoodmanCheck {
        safety_factor,
        admissible_stress_mpa: admissible,
        approved: governing_stress_mpa.abs() <= admissible,
        envelope: goodman_envelope(limits, points),
    }
}

/// Sample the Goodman line at `points` evenly spaced alternating stresses
pub fn goodman_envelope(limits: &MaterialLimits, points: usize) -> Vec<GoodmanPoint> {
    let steps = points.saturating_sub(1).max(1) as f64;
    (0..points)
        .map(|i| {
            let alternating = limits.sut_mpa * i as f64 / steps;
            GoodmanPoint {
                alternating_mpa: alternating,
                mean_mpa: goodman_envelope_mean(alternating, limits.se_mpa, limits.sut_mpa),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialRatios;

    fn sae1008() -> MaterialLimits {
        MaterialLimits::from_ultimate(310.0, &MaterialRatios::default()).unwrap()
    }

    #[test]
    fn test_default_target_gives_endurance_limit() {
        let est = estimate_fatigue(100.0, &sae1008(), None, &BasquinCurve::default(), LifeNormalization::Ultimate);
        assert_eq!(est.target_cycles, 1e6);
        assert!((est.admissible_stress_mpa - 155.0).abs() < 1e-9);
        assert!(est.advisories.is_empty());
    }

    #[test]
    fn test_admissible_at_50k() {
        let est = estimate_fatigue(100.0, &sae1008(), Some(50_000), &BasquinCurve::default(), LifeNormalization::Ultimate);
        assert!((est.admissible_stress_mpa - 282.19).abs() < 0.01);
        assert_eq!(est.fatigue_limit_mpa, est.admissible_stress_mpa);
    }

    #[test]
    fn test_out_of_model_range_falls_back_to_sut() {
        let est = estimate_fatigue(100.0, &sae1008(), Some(5_000), &BasquinCurve::default(), LifeNormalization::Ultimate);
        assert!((est.admissible_stress_mpa - 447.24).abs() < 0.01);
        assert!(est.is_out_of_model_range());
        assert_eq!(est.fatigue_limit_mpa, 310.0);
        assert!(est.advisories[0].message().contains("exceeds Sut"));
    }

    #[test]
    fn test_life_ultimate_normalization() {
        let life = BasquinCurve::default()
            .life(100.0, &sae1008(), LifeNormalization::Ultimate)
            .unwrap();
        // 1e6 × 3.1⁵
        assert!((life / 2.8629151e8 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_life_round_trip_with_endurance_normalization() {
        let curve = BasquinCurve::default();
        let limits = sae1008();
        for n in [5_000.0, 50_000.0, 200_000.0, 1e6] {
            let sigma = curve.admissible_stress(limits.se_mpa, n);
            let life = curve.life(sigma, &limits, LifeNormalization::Endurance).unwrap();
            assert!((life / n - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_stress_has_unbounded_life() {
        let curve = BasquinCurve::default();
        assert_eq!(curve.life(0.0, &sae1008(), LifeNormalization::Ultimate), None);
    }

    #[test]
    fn test_goodman_safety_factor() {
        let check = goodman_check(200.0, &sae1008(), 2.0, 10);
        assert!((check.admissible_stress_mpa - 155.0).abs() < 1e-9);
        assert!(!check.approved);
    }

    #[test]
    fn test_goodman_envelope_endpoints() {
        let env = goodman_envelope(&sae1008(), 100);
        assert_eq!(env.first().unwrap().alternating_mpa, 0.0);
        assert_eq!(env.first().unwrap().mean_mpa, 155.0);
        assert!((env.last().unwrap().alternating_mpa - 310.0).abs() < 1e-9);
        assert!(env.last().unwrap().mean_mpa.abs() < 1e-9);
    }
}
