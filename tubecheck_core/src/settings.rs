//! # Evaluation Settings
//!
//! Immutable configuration handed to every evaluation. All sections and fields
//! are optional in the TOML file and fall back to the documented defaults.
//!
//! ## File Format
//!
//! ```toml
//! [material]
//! yield_ratio = 0.65
//! endurance_ratio = 0.5
//! shear_ratio = 0.6
//!
//! [fatigue]
//! reference_cycles = 1e6
//! exponent = 5.0
//! life_normalization = "ultimate"
//! goodman_safety_factor = 1.0
//! goodman_envelope_points = 100
//!
//! [stress]
//! degenerate_threshold = 1e-6
//! geometry_model = "standard"
//! # resisting_area = "tube_wall"
//!
//! [checks]
//! enforce_catalogs = false
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::fatigue::{BasquinCurve, LifeNormalization};
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::materials::MaterialRatios;
use crate::sections::{GeometryModel, ResistingAreaModel};

/// Complete configuration for an evaluation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Ratios deriving Sy, Se and the shear allowable from Sut
    pub material: MaterialRatios,
    /// Fatigue curve and Goodman settings
    pub fatigue: FatigueSettings,
    /// Stress model selection
    pub stress: StressSettings,
    /// Input checks
    pub checks: CheckSettings,
}

/// Fatigue curve and Goodman settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueSettings {
    /// Basquin reference cycle count `a`
    pub reference_cycles: f64,
    /// Basquin exponent `b`
    pub exponent: f64,
    /// Strength the life estimate is normalized by
    pub life_normalization: LifeNormalization,
    /// Safety factor `n` of the Goodman admissible stress
    pub goodman_safety_factor: f64,
    /// Samples in the Goodman envelope series
    pub goodman_envelope_points: usize,
}

impl Default for FatigueSettings {
    fn default() -> Self {
        FatigueSettings {
            reference_cycles: 1e6,
            exponent: 5.0,
            life_normalization: LifeNormalization::Ultimate,
            goodman_safety_factor: 1.0,
            goodman_envelope_points: 100,
        }
    }
}

impl FatigueSettings {
    /// Basquin curve described by these settings
    pub fn curve(&self) -> BasquinCurve {
        BasquinCurve {
            reference_cycles: self.reference_cycles,
            exponent: self.exponent,
        }
    }
}

/// Stress model selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressSettings {
    /// Areas and second moments at or below this are degenerate
    pub degenerate_threshold: f64,
    /// Second-moment formula
    pub geometry_model: GeometryModel,
    /// Replaces the load case's default resisting area when set
    pub resisting_area: Option<ResistingAreaModel>,
}

impl Default for StressSettings {
    fn default() -> Self {
        StressSettings {
            degenerate_threshold: 1e-6,
            geometry_model: GeometryModel::Standard,
            resisting_area: None,
        }
    }
}

/// Input checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Reject thicknesses and cycle counts outside the standard catalogs
    pub enforce_catalogs: bool,
}

impl EvaluationConfig {
    /// Parse a TOML document and validate it
    ///
    /// ```rust
    /// use tubecheck_core::settings::EvaluationConfig;
    ///
    /// let config = EvaluationConfig::from_toml_str("[fatigue]\nexponent = 6.0\n").unwrap();
    /// assert_eq!(config.fatigue.exponent, 6.0);
    /// assert_eq!(config.fatigue.reference_cycles, 1e6);
    /// ```
    pub fn from_toml_str(s: &str) -> CalcResult<Self> {
        let config: EvaluationConfig = toml::from_str(s).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid configuration: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> CalcResult<()> {
        self.material.validate()?;

        let f = &self.fatigue;
        if ensure_finite("fatigue.reference_cycles", f.reference_cycles)? <= 0.0 {
            return Err(CalcError::invalid_input(
                "fatigue.reference_cycles",
                f.reference_cycles.to_string(),
                "Reference cycle count must be positive",
            ));
        }
        if ensure_finite("fatigue.exponent", f.exponent)? <= 0.0 {
            return Err(CalcError::invalid_input(
                "fatigue.exponent",
                f.exponent.to_string(),
                "Basquin exponent must be positive",
            ));
        }
        if ensure_finite("fatigue.goodman_safety_factor", f.goodman_safety_factor)? < 1.0 {
            return Err(CalcError::invalid_input(
                "fatigue.goodman_safety_factor",
                f.goodman_safety_factor.to_string(),
                "Safety factor must be at least 1",
            ));
        }
        if f.goodman_envelope_points < 2 {
            return Err(CalcError::invalid_input(
                "fatigue.goodman_envelope_points",
                f.goodman_envelope_points.to_string(),
                "Envelope needs at least 2 points",
            ));
        }

        let threshold = ensure_finite("stress.degenerate_threshold", self.stress.degenerate_threshold)?;
        if threshold <= 0.0 {
            return Err(CalcError::invalid_input(
                "stress.degenerate_threshold",
                threshold.to_string(),
                "Threshold must be positive",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvaluationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fatigue.life_normalization, LifeNormalization::Ultimate);
        assert!(!config.checks.enforce_catalogs);
        assert_eq!(config.stress.resisting_area, None);
    }

    #[test]
    fn test_empty_toml() {
        let config = EvaluationConfig::from_toml_str("").unwrap();
        assert_eq!(config, EvaluationConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            [material]
            yield_ratio = 0.7

            [fatigue]
            life_normalization = "endurance"

            [stress]
            geometry_model = "weld_throat_approximation"
            resisting_area = "two_fillet_weld_throat"

            [checks]
            enforce_catalogs = true
        "#;
        let config = EvaluationConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.material.yield_ratio, 0.7);
        assert_eq!(config.material.endurance_ratio, 0.5);
        assert_eq!(config.fatigue.life_normalization, LifeNormalization::Endurance);
        assert_eq!(config.stress.geometry_model, GeometryModel::WeldThroatApproximation);
        assert_eq!(config.stress.resisting_area, Some(ResistingAreaModel::TwoFilletWeldThroat));
        assert!(config.checks.enforce_catalogs);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EvaluationConfig::from_toml_str("[fatigue]\nexponent = 0.0\n").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "fatigue.exponent"));

        assert!(EvaluationConfig::from_toml_str("[fatigue]\ngoodman_safety_factor = 0.5\n").is_err());
        assert!(EvaluationConfig::from_toml_str("[stress]\ndegenerate_threshold = -1.0\n").is_err());
        assert!(EvaluationConfig::from_toml_str("[material]\nshear_ratio = 1.5\n").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = EvaluationConfig::from_toml_str("[fatigue\n").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_toml_roundtrip() {
        let text = EvaluationConfig::default().to_toml_string().unwrap();
        assert!(text.contains("[fatigue]"));
        assert_eq!(EvaluationConfig::from_toml_str(&text).unwrap(), EvaluationConfig::default());
    }
}
