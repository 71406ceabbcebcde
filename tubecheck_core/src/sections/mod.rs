//! # Tube Sections
//!
//! Square and round hollow sections used in welded chair frames, and the
//! geometry resolver that turns `(shape, outer size, wall thickness)` into the
//! `(I, c, A)` triple the stress evaluator needs.
//!
//! ## Example
//!
//! ```rust
//! use tubecheck_core::sections::{GeometryModel, TubeSection, TubeShape};
//!
//! let tube = TubeSection::new(TubeShape::Round, 20.0, 0.9).unwrap();
//! let props = tube.properties(GeometryModel::Standard);
//!
//! assert!((props.inner_size_mm - 18.2).abs() < 1e-9);
//! assert_eq!(props.extreme_fiber_distance_mm, 10.0);
//!
//! // A wall of half the diameter leaves no bore
//! assert!(TubeSection::new(TubeShape::Round, 20.0, 10.0).is_err());
//! ```

pub mod gauges;
pub mod weld;

pub use gauges::{is_catalog_thickness, next_gauge_up, require_catalog_thickness, WALL_THICKNESS_CATALOG_MM};
pub use weld::ResistingAreaModel;

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    extreme_fiber_distance,
    round_hollow_area,
    round_hollow_moment_of_inertia,
    square_hollow_area,
    square_hollow_moment_of_inertia,
    weld_throat_approx_moment_of_inertia,
};
use crate::errors::{ensure_finite, CalcError, CalcResult};

/// Cross-section kind of the frame tube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TubeShape {
    /// Square hollow section, sized by outer width
    Square,
    /// Round hollow section, sized by outer diameter
    Round,
}

impl TubeShape {
    /// All shapes for selection lists
    pub const ALL: [TubeShape; 2] = [TubeShape::Square, TubeShape::Round];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "square" | "sq" | "shs" | "quadrado" => Ok(TubeShape::Square),
            "round" | "circular" | "chs" | "redondo" => Ok(TubeShape::Round),
            _ => Err(CalcError::invalid_input("shape", s, "Expected 'square' or 'round'")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TubeShape::Square => "Square tube",
            TubeShape::Round => "Round tube",
        }
    }

    /// Name of the outer dimension for this shape
    pub fn outer_dimension_name(&self) -> &'static str {
        match self {
            TubeShape::Square => "width",
            TubeShape::Round => "diameter",
        }
    }
}

impl std::fmt::Display for TubeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which second-moment formula the resolver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryModel {
    /// Exact thin-walled hollow-section formulas
    #[default]
    Standard,
    /// Comparison model treating the welded end as a compact block, `I ≈ S·S³/2`.
    /// Square tubes only; an evaluation of a round tube under it is rejected.
    WeldThroatApproximation,
}

/// A validated hollow tube section.
///
/// Construction guarantees `outer > 0`, `0 < t < outer / 2`, so the bore
/// `outer − 2t` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TubeSection {
    shape: TubeShape,
    outer_size_mm: f64,
    wall_thickness_mm: f64,
}

impl TubeSection {
    /// Validate dimensions and build a section.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - a dimension is NaN or infinite
    /// * `InvalidGeometry` - non-positive dimension, or `t ≥ outer / 2`
    pub fn new(shape: TubeShape, outer_size_mm: f64, wall_thickness_mm: f64) -> CalcResult<Self> {
        ensure_finite("outer_size_mm", outer_size_mm)?;
        ensure_finite("wall_thickness_mm", wall_thickness_mm)?;

        if outer_size_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                outer_size_mm,
                wall_thickness_mm,
                format!("Outer {} must be positive", shape.outer_dimension_name()),
            ));
        }
        if wall_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                outer_size_mm,
                wall_thickness_mm,
                "Wall thickness must be positive",
            ));
        }
        if wall_thickness_mm >= outer_size_mm / 2.0 {
            return Err(CalcError::invalid_geometry(
                outer_size_mm,
                wall_thickness_mm,
                "Wall thickness must be less than half the outer size",
            ));
        }

        Ok(TubeSection {
            shape,
            outer_size_mm,
            wall_thickness_mm,
        })
    }

    pub fn shape(&self) -> TubeShape {
        self.shape
    }

    /// Outer width (square) or outer diameter (round), mm
    pub fn outer_size_mm(&self) -> f64 {
        self.outer_size_mm
    }

    pub fn wall_thickness_mm(&self) -> f64 {
        self.wall_thickness_mm
    }

    /// Bore width or diameter, outer − 2t (mm)
    pub fn inner_size_mm(&self) -> f64 {
        self.outer_size_mm - 2.0 * self.wall_thickness_mm
    }

    /// Second moment of area (mm⁴) under the given model
    pub fn moment_of_inertia_mm4(&self, model: GeometryModel) -> f64 {
        match (model, self.shape) {
            (GeometryModel::Standard, TubeShape::Square) => {
                square_hollow_moment_of_inertia(self.outer_size_mm, self.wall_thickness_mm)
            }
            (GeometryModel::Standard, TubeShape::Round) => {
                round_hollow_moment_of_inertia(self.outer_size_mm, self.wall_thickness_mm)
            }
            (GeometryModel::WeldThroatApproximation, _) => {
                weld_throat_approx_moment_of_inertia(self.outer_size_mm)
            }
        }
    }

    /// Distance from the neutral axis to the extreme fiber (mm)
    pub fn extreme_fiber_distance_mm(&self) -> f64 {
        extreme_fiber_distance(self.outer_size_mm)
    }

    /// Area of the tube wall itself (mm²)
    pub fn wall_area_mm2(&self) -> f64 {
        match self.shape {
            TubeShape::Square => square_hollow_area(self.outer_size_mm, self.wall_thickness_mm),
            TubeShape::Round => round_hollow_area(self.outer_size_mm, self.wall_thickness_mm),
        }
    }

    /// Resolve every derived property at once
    pub fn properties(&self, model: GeometryModel) -> SectionProperties {
        let i = self.moment_of_inertia_mm4(model);
        let c = self.extreme_fiber_distance_mm();
        SectionProperties {
            geometry_model: model,
            moment_of_inertia_mm4: i,
            extreme_fiber_distance_mm: c,
            section_modulus_mm3: i / c,
            wall_area_mm2: self.wall_area_mm2(),
            inner_size_mm: self.inner_size_mm(),
        }
    }
}

/// Derived properties of a [`TubeSection`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Model the second moment was computed with
    pub geometry_model: GeometryModel,
    /// Second moment of area I (mm⁴)
    pub moment_of_inertia_mm4: f64,
    /// Extreme fiber distance c (mm)
    pub extreme_fiber_distance_mm: f64,
    /// Section modulus I/c (mm³)
    pub section_modulus_mm3: f64,
    /// Tube wall area (mm²)
    pub wall_area_mm2: f64,
    /// Bore size outer − 2t (mm)
    pub inner_size_mm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_properties() {
        let tube = TubeSection::new(TubeShape::Square, 20.0, 0.9).unwrap();
        let props = tube.properties(GeometryModel::Standard);
        assert!((props.moment_of_inertia_mm4 - 4190.005).abs() < 0.001);
        assert_eq!(props.extreme_fiber_distance_mm, 10.0);
        assert!((props.section_modulus_mm3 - 419.0005).abs() < 0.0001);
        assert!((props.inner_size_mm - 18.2).abs() < 1e-9);
    }

    #[test]
    fn test_round_properties() {
        let tube = TubeSection::new(TubeShape::Round, 20.0, 0.9).unwrap();
        let props = tube.properties(GeometryModel::Standard);
        assert!((props.moment_of_inertia_mm4 - 2468.12).abs() < 0.01);
        assert_eq!(props.extreme_fiber_distance_mm, 10.0);
    }

    #[test]
    fn test_throat_model() {
        let tube = TubeSection::new(TubeShape::Square, 20.0, 0.9).unwrap();
        assert_eq!(tube.moment_of_inertia_mm4(GeometryModel::WeldThroatApproximation), 80_000.0);
    }

    #[test]
    fn test_inertia_positive_over_valid_range() {
        for shape in TubeShape::ALL {
            for outer in [10.0, 15.9, 20.0, 25.4, 38.1] {
                for t in WALL_THICKNESS_CATALOG_MM {
                    if t < outer / 2.0 {
                        let tube = TubeSection::new(shape, outer, t).unwrap();
                        assert!(tube.moment_of_inertia_mm4(GeometryModel::Standard) > 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_thickness_at_half_outer_rejected() {
        let err = TubeSection::new(TubeShape::Square, 20.0, 10.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert!(TubeSection::new(TubeShape::Square, 20.0, 9.999).is_ok());
    }

    #[test]
    fn test_non_positive_rejected() {
        assert!(TubeSection::new(TubeShape::Round, 0.0, 0.9).is_err());
        assert!(TubeSection::new(TubeShape::Round, 20.0, 0.0).is_err());
        assert!(TubeSection::new(TubeShape::Round, 20.0, -1.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let err = TubeSection::new(TubeShape::Round, f64::NAN, 0.9).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!(TubeShape::from_str_flexible("Square").unwrap(), TubeShape::Square);
        assert_eq!(TubeShape::from_str_flexible(" redondo ").unwrap(), TubeShape::Round);
        assert!(TubeShape::from_str_flexible("oval").is_err());
    }
}
