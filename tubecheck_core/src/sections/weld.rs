//! Resisting Areas
//!
//! The area an axial or shear force acts on depends on how the tube is joined.
//! Each definition is a named variant; load cases pick a default and
//! configuration may override it, but two definitions are never blended.

use serde::{Deserialize, Serialize};

use super::{TubeSection, TubeShape};
use crate::equations::registry::Equation;
use crate::equations::section::{
    fillet_throat,
    perimeter_weld_area,
    round_perimeter,
    square_perimeter,
    two_fillet_weld_area,
};
use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Definition of the area resisting axial and shear forces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistingAreaModel {
    /// Two fillet welds along the wall: `2·w·t`
    TwoFilletWelds,
    /// Weld around the whole outer perimeter: `4·S·t` or `π·D·t`
    FullPerimeterWeld,
    /// Weld along two faces of a square tube (`2·S·t`), or around a round tube (`π·D·t`)
    PartialPerimeterWeld,
    /// Two fillet welds on their effective throat: `2·w·0.707·t`
    TwoFilletWeldThroat,
    /// Full perimeter weld on its effective throat: `perimeter·0.707·t`
    PerimeterWeldThroat,
    /// Seat-leg joint: two fillets on square tubes, full perimeter on round tubes
    LegWeld,
    /// The tube's own hollow cross-section
    TubeWall,
}

impl ResistingAreaModel {
    pub const ALL: [ResistingAreaModel; 7] = [
        ResistingAreaModel::TwoFilletWelds,
        ResistingAreaModel::FullPerimeterWeld,
        ResistingAreaModel::PartialPerimeterWeld,
        ResistingAreaModel::TwoFilletWeldThroat,
        ResistingAreaModel::PerimeterWeldThroat,
        ResistingAreaModel::LegWeld,
        ResistingAreaModel::TubeWall,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ResistingAreaModel::TwoFilletWelds => "Two fillet welds",
            ResistingAreaModel::FullPerimeterWeld => "Full perimeter weld",
            ResistingAreaModel::PartialPerimeterWeld => "Partial perimeter weld",
            ResistingAreaModel::TwoFilletWeldThroat => "Two fillet welds (throat)",
            ResistingAreaModel::PerimeterWeldThroat => "Perimeter weld (throat)",
            ResistingAreaModel::LegWeld => "Leg weld",
            ResistingAreaModel::TubeWall => "Tube wall",
        }
    }

    /// The concrete model after resolving shape-dependent variants
    pub fn resolve_for(&self, shape: TubeShape) -> ResistingAreaModel {
        match (self, shape) {
            (ResistingAreaModel::LegWeld, TubeShape::Square) => ResistingAreaModel::TwoFilletWelds,
            (ResistingAreaModel::LegWeld, TubeShape::Round) => ResistingAreaModel::FullPerimeterWeld,
            (other, _) => *other,
        }
    }

    /// Whether this model needs the weld bead width for the given shape
    pub fn needs_bead_width(&self, shape: TubeShape) -> bool {
        matches!(
            self.resolve_for(shape),
            ResistingAreaModel::TwoFilletWelds | ResistingAreaModel::TwoFilletWeldThroat
        )
    }

    /// Equations applied to compute this area, for usage tracking
    pub fn equations(&self, shape: TubeShape) -> Vec<Equation> {
        match self.resolve_for(shape) {
            ResistingAreaModel::TwoFilletWelds => vec![Equation::TwoFilletWeldArea],
            ResistingAreaModel::FullPerimeterWeld | ResistingAreaModel::PartialPerimeterWeld => {
                vec![Equation::PerimeterWeldArea]
            }
            ResistingAreaModel::TwoFilletWeldThroat => {
                vec![Equation::FilletWeldThroat, Equation::TwoFilletWeldArea]
            }
            ResistingAreaModel::PerimeterWeldThroat => {
                vec![Equation::FilletWeldThroat, Equation::PerimeterWeldArea]
            }
            ResistingAreaModel::TubeWall => vec![Equation::HollowSectionArea],
            ResistingAreaModel::LegWeld => Vec::new(),
        }
    }

    /// Resisting area in mm².
    ///
    /// # Errors
    ///
    /// * `MissingField` - the model needs `weld_bead_width_mm` and none was given
    /// * `InvalidInput` - the bead width is not a positive finite number
    ///
    /// # Example
    ///
    /// ```rust
    /// use tubecheck_core::sections::{ResistingAreaModel, TubeSection, TubeShape};
    ///
    /// let tube = TubeSection::new(TubeShape::Square, 20.0, 0.9).unwrap();
    /// let area = ResistingAreaModel::LegWeld.area_mm2(&tube, Some(6.0)).unwrap();
    /// assert!((area - 10.8).abs() < 1e-9);
    ///
    /// assert!(ResistingAreaModel::TwoFilletWelds.area_mm2(&tube, None).is_err());
    /// ```
    pub fn area_mm2(&self, section: &TubeSection, weld_bead_width_mm: Option<f64>) -> CalcResult<f64> {
        let shape = section.shape();
        let outer = section.outer_size_mm();
        let t = section.wall_thickness_mm();

        let full_perimeter = match shape {
            TubeShape::Square => square_perimeter(outer),
            TubeShape::Round => round_perimeter(outer),
        };

        let area = match self.resolve_for(shape) {
            ResistingAreaModel::TwoFilletWelds => {
                two_fillet_weld_area(bead_width(weld_bead_width_mm)?, t)
            }
            ResistingAreaModel::TwoFilletWeldThroat => {
                two_fillet_weld_area(bead_width(weld_bead_width_mm)?, fillet_throat(t))
            }
            ResistingAreaModel::FullPerimeterWeld => perimeter_weld_area(full_perimeter, t),
            ResistingAreaModel::PartialPerimeterWeld => {
                let perimeter = match shape {
                    TubeShape::Square => 2.0 * outer,
                    TubeShape::Round => full_perimeter,
                };
                perimeter_weld_area(perimeter, t)
            }
            ResistingAreaModel::PerimeterWeldThroat => {
                perimeter_weld_area(full_perimeter, fillet_throat(t))
            }
            ResistingAreaModel::TubeWall => section.wall_area_mm2(),
            // resolve_for never returns LegWeld
            ResistingAreaModel::LegWeld => section.wall_area_mm2(),
        };

        Ok(area)
    }
}

fn bead_width(weld_bead_width_mm: Option<f64>) -> CalcResult<f64> {
    let w = weld_bead_width_mm.ok_or_else(|| CalcError::missing_field("weld_bead_width_mm"))?;
    ensure_finite("weld_bead_width_mm", w)?;
    if w <= 0.0 {
        return Err(CalcError::invalid_input(
            "weld_bead_width_mm",
            w.to_string(),
            "Weld bead width must be positive",
        ));
    }
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square() -> TubeSection {
        TubeSection::new(TubeShape::Square, 20.0, 0.9).unwrap()
    }

    fn round() -> TubeSection {
        TubeSection::new(TubeShape::Round, 25.4, 0.9).unwrap()
    }

    #[test]
    fn test_leg_weld_per_shape() {
        let sq = ResistingAreaModel::LegWeld.area_mm2(&square(), Some(6.0)).unwrap();
        assert!((sq - 10.8).abs() < 1e-9);

        // Round legs are welded all round, no bead width needed
        let rd = ResistingAreaModel::LegWeld.area_mm2(&round(), None).unwrap();
        assert!((rd - PI * 25.4 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_partial_perimeter() {
        let sq = ResistingAreaModel::PartialPerimeterWeld.area_mm2(&square(), None).unwrap();
        assert!((sq - 36.0).abs() < 1e-9);
        let full = ResistingAreaModel::FullPerimeterWeld.area_mm2(&square(), None).unwrap();
        assert!((full - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_throat_variants() {
        let a = ResistingAreaModel::TwoFilletWeldThroat.area_mm2(&square(), Some(6.0)).unwrap();
        assert!((a - 2.0 * 6.0 * 0.707 * 0.9).abs() < 1e-9);
        let p = ResistingAreaModel::PerimeterWeldThroat.area_mm2(&square(), None).unwrap();
        assert!((p - 80.0 * 0.707 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_tube_wall() {
        let a = ResistingAreaModel::TubeWall.area_mm2(&square(), None).unwrap();
        assert!((a - 68.76).abs() < 1e-9);
    }

    #[test]
    fn test_bead_width_errors() {
        let missing = ResistingAreaModel::TwoFilletWelds.area_mm2(&square(), None).unwrap_err();
        assert_eq!(missing.error_code(), "MISSING_FIELD");
        let zero = ResistingAreaModel::TwoFilletWelds.area_mm2(&square(), Some(0.0)).unwrap_err();
        assert_eq!(zero.error_code(), "INVALID_INPUT");
        let negative = ResistingAreaModel::TwoFilletWeldThroat.area_mm2(&square(), Some(-2.0)).unwrap_err();
        assert_eq!(negative.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_area_increases_with_thickness() {
        for model in ResistingAreaModel::ALL {
            let mut previous = 0.0;
            for t in crate::sections::WALL_THICKNESS_CATALOG_MM {
                let tube = TubeSection::new(TubeShape::Square, 20.0, t).unwrap();
                let area = model.area_mm2(&tube, Some(6.0)).unwrap();
                assert!(area > previous, "{:?} not increasing at t = {}", model, t);
                previous = area;
            }
        }
    }

    #[test]
    fn test_needs_bead_width() {
        assert!(ResistingAreaModel::LegWeld.needs_bead_width(TubeShape::Square));
        assert!(!ResistingAreaModel::LegWeld.needs_bead_width(TubeShape::Round));
        assert!(!ResistingAreaModel::TubeWall.needs_bead_width(TubeShape::Square));
    }
}
