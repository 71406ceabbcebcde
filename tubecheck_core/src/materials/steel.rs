//! Carbon Steel Grades
//!
//! Low-carbon SAE grades commonly drawn into light-gauge furniture tube.
//! Only the ultimate tensile strength is catalogued; the other limits are
//! derived from it by [`MaterialRatios`](super::MaterialRatios).

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Steel grade of the frame tube
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    /// SAE 1006 (Sut = 300 MPa)
    Sae1006,
    /// SAE 1008 (Sut = 310 MPa)
    #[default]
    Sae1008,
    /// SAE 1010 (Sut = 320 MPa)
    Sae1010,
    /// SAE 1020 (Sut = 380 MPa)
    Sae1020,
    /// User-supplied ultimate strength
    Custom { ultimate_mpa: f64 },
}

impl SteelGrade {
    /// Catalogued grades, default first
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Sae1008,
        SteelGrade::Sae1006,
        SteelGrade::Sae1010,
        SteelGrade::Sae1020,
    ];

    /// Parse a grade name, or a bare number as a custom Sut in MPa
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized: String = s
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        match normalized.trim_start_matches("SAE").trim_start_matches("AISI") {
            "1006" => Ok(SteelGrade::Sae1006),
            "1008" => Ok(SteelGrade::Sae1008),
            "1010" => Ok(SteelGrade::Sae1010),
            "1020" => Ok(SteelGrade::Sae1020),
            other => other
                .trim_end_matches("MPA")
                .parse::<f64>()
                .map(|ultimate_mpa| SteelGrade::Custom { ultimate_mpa })
                .map_err(|_| {
                    CalcError::invalid_input(
                        "steel_grade",
                        s,
                        "Expected SAE 1006/1008/1010/1020 or an ultimate strength in MPa",
                    )
                }),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            SteelGrade::Sae1006 => "SAE 1006".to_string(),
            SteelGrade::Sae1008 => "SAE 1008".to_string(),
            SteelGrade::Sae1010 => "SAE 1010".to_string(),
            SteelGrade::Sae1020 => "SAE 1020".to_string(),
            SteelGrade::Custom { ultimate_mpa } => format!("Custom ({} MPa)", ultimate_mpa),
        }
    }

    /// Ultimate tensile strength Sut (MPa)
    pub fn ultimate_mpa(&self) -> f64 {
        match self {
            SteelGrade::Sae1006 => 300.0,
            SteelGrade::Sae1008 => 310.0,
            SteelGrade::Sae1010 => 320.0,
            SteelGrade::Sae1020 => 380.0,
            SteelGrade::Custom { ultimate_mpa } => *ultimate_mpa,
        }
    }

    /// Check that a custom strength is usable
    pub fn validate(&self) -> CalcResult<()> {
        let sut = ensure_finite("ultimate_mpa", self.ultimate_mpa())?;
        if sut <= 0.0 {
            return Err(CalcError::invalid_input(
                "ultimate_mpa",
                sut.to_string(),
                "Ultimate strength must be positive",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grade() {
        assert_eq!(SteelGrade::default(), SteelGrade::Sae1008);
        assert_eq!(SteelGrade::default().ultimate_mpa(), 310.0);
    }

    #[test]
    fn test_parsing() {
        assert_eq!(SteelGrade::from_str_flexible("SAE 1008").unwrap(), SteelGrade::Sae1008);
        assert_eq!(SteelGrade::from_str_flexible("sae-1020").unwrap(), SteelGrade::Sae1020);
        assert_eq!(SteelGrade::from_str_flexible("1010").unwrap(), SteelGrade::Sae1010);
        assert_eq!(
            SteelGrade::from_str_flexible("420 MPa").unwrap(),
            SteelGrade::Custom { ultimate_mpa: 420.0 }
        );
        assert!(SteelGrade::from_str_flexible("stainless").is_err());
    }

    #[test]
    fn test_custom_validation() {
        assert!(SteelGrade::Custom { ultimate_mpa: 400.0 }.validate().is_ok());
        assert!(SteelGrade::Custom { ultimate_mpa: 0.0 }.validate().is_err());
        assert!(SteelGrade::Custom { ultimate_mpa: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&SteelGrade::Custom { ultimate_mpa: 400.0 }).unwrap();
        assert_eq!(json, r#"{"Custom":{"ultimate_mpa":400.0}}"#);
        let grade: SteelGrade = serde_json::from_str("\"Sae1010\"").unwrap();
        assert_eq!(grade, SteelGrade::Sae1010);
    }
}
