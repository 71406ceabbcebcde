//! # Material Limits
//!
//! Strength limits of the tube steel. Everything is derived from a single
//! ultimate tensile strength using fixed ratios, which keep the usual textbook
//! values for low-carbon steel unless configuration overrides them.
//!
//! ## Example
//!
//! ```rust
//! use tubecheck_core::materials::{MaterialLimits, MaterialRatios, SteelGrade};
//!
//! let limits = MaterialLimits::from_grade(SteelGrade::Sae1008, &MaterialRatios::default()).unwrap();
//! assert_eq!(limits.se_mpa, 155.0);
//! assert!((limits.sy_mpa - 201.5).abs() < 1e-9);
//! ```

pub mod steel;

pub use steel::SteelGrade;

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Fractions of Sut used to derive the other limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRatios {
    /// Sy / Sut
    pub yield_ratio: f64,
    /// Se / Sut
    pub endurance_ratio: f64,
    /// Allowable shear / Sut
    pub shear_ratio: f64,
}

impl Default for MaterialRatios {
    fn default() -> Self {
        MaterialRatios {
            yield_ratio: 0.65,
            endurance_ratio: 0.5,
            shear_ratio: 0.6,
        }
    }
}

impl MaterialRatios {
    /// Each ratio must lie in (0, 1], and Se must stay below Sut
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("material.yield_ratio", self.yield_ratio),
            ("material.endurance_ratio", self.endurance_ratio),
            ("material.shear_ratio", self.shear_ratio),
        ] {
            ensure_finite(field, value)?;
            if value <= 0.0 || value > 1.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Ratio must be greater than 0 and at most 1",
                ));
            }
        }
        if self.endurance_ratio >= 1.0 {
            return Err(CalcError::invalid_input(
                "material.endurance_ratio",
                self.endurance_ratio.to_string(),
                "Endurance limit must be below the ultimate strength",
            ));
        }
        Ok(())
    }
}

/// Strength limits used by the verdicts (MPa).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialLimits {
    /// Ultimate tensile strength
    pub sut_mpa: f64,
    /// Yield strength
    pub sy_mpa: f64,
    /// Fatigue endurance limit
    pub se_mpa: f64,
    /// Allowable average shear stress
    pub shear_allowable_mpa: f64,
}

impl MaterialLimits {
    /// Derive all limits from Sut.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when Sut is not a positive finite number.
    pub fn from_ultimate(sut_mpa: f64, ratios: &MaterialRatios) -> CalcResult<Self> {
        ensure_finite("ultimate_mpa", sut_mpa)?;
        if sut_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "ultimate_mpa",
                sut_mpa.to_string(),
                "Ultimate strength must be positive",
            ));
        }

        Ok(MaterialLimits {
            sut_mpa,
            sy_mpa: ratios.yield_ratio * sut_mpa,
            se_mpa: ratios.endurance_ratio * sut_mpa,
            shear_allowable_mpa: ratios.shear_ratio * sut_mpa,
        })
    }

    pub fn from_grade(grade: SteelGrade, ratios: &MaterialRatios) -> CalcResult<Self> {
        Self::from_ultimate(grade.ultimate_mpa(), ratios)
    }
}
