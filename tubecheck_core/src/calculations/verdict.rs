//! Verdict Classification
//!
//! Pure threshold comparisons of computed stresses against material limits.
//! Every comparison reads the stress magnitude.

use serde::{Deserialize, Serialize};

use crate::materials::MaterialLimits;

/// Static strength outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaticVerdict {
    /// σ < Sy
    Approved,
    /// Sy ≤ σ < Sut, permanent deformation expected
    Warning,
    /// σ ≥ Sut, rupture expected
    Failed,
}

impl StaticVerdict {
    pub fn display_name(&self) -> &'static str {
        match self {
            StaticVerdict::Approved => "APPROVED",
            StaticVerdict::Warning => "WARNING",
            StaticVerdict::Failed => "FAILED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StaticVerdict::Approved => "Stress below yield strength",
            StaticVerdict::Warning => "Plastic deformation: stress between yield and ultimate strength",
            StaticVerdict::Failed => "Rupture: stress at or above ultimate strength",
        }
    }

    pub fn passes(&self) -> bool {
        matches!(self, StaticVerdict::Approved)
    }
}

/// Cyclic loading outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FatigueVerdict {
    ResistsFatigue,
    FailsFatigue,
}

impl FatigueVerdict {
    pub fn display_name(&self) -> &'static str {
        match self {
            FatigueVerdict::ResistsFatigue => "RESISTS FATIGUE",
            FatigueVerdict::FailsFatigue => "FAILS FATIGUE",
        }
    }

    pub fn passes(&self) -> bool {
        matches!(self, FatigueVerdict::ResistsFatigue)
    }
}

/// Average shear stress against its allowable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearCheck {
    pub stress_mpa: f64,
    pub allowable_mpa: f64,
    pub passes: bool,
}

/// Classify a normal stress against Sy and Sut.
///
/// ```rust
/// use tubecheck_core::calculations::verdict::{classify_static, StaticVerdict};
/// use tubecheck_core::materials::{MaterialLimits, MaterialRatios};
///
/// let limits = MaterialLimits::from_ultimate(310.0, &MaterialRatios::default()).unwrap();
/// assert_eq!(classify_static(180.0, &limits), StaticVerdict::Approved);
/// assert_eq!(classify_static(250.0, &limits), StaticVerdict::Warning);
/// ```
pub fn classify_static(stress_mpa: f64, limits: &MaterialLimits) -> StaticVerdict {
    let sigma = stress_mpa.abs();
    if sigma < limits.sy_mpa {
        StaticVerdict::Approved
    } else if sigma < limits.sut_mpa {
        StaticVerdict::Warning
    } else {
        StaticVerdict::Failed
    }
}

/// Classify a stress against the fatigue limit
pub fn classify_fatigue(stress_mpa: f64, fatigue_limit_mpa: f64) -> FatigueVerdict {
    if stress_mpa.abs() < fatigue_limit_mpa {
        FatigueVerdict::ResistsFatigue
    } else {
        FatigueVerdict::FailsFatigue
    }
}

/// Compare average shear stress against the allowable
pub fn check_shear(shear_mpa: f64, limits: &MaterialLimits) -> ShearCheck {
    ShearCheck {
        stress_mpa: shear_mpa,
        allowable_mpa: limits.shear_allowable_mpa,
        passes: shear_mpa.abs() < limits.shear_allowable_mpa,
    }
}
