//! Stress Evaluation
//!
//! Combines section properties and the resolved load into bending, axial,
//! combined and shear stress.
//!
//! ## Sign Convention
//!
//! Tension is positive; axial force is positive in compression.
//!
//! ```text
//!   tension face:      σ = σ_b − σ_a
//!   compression face:  σ = −(σ_b + σ_a)
//! ```
//!
//! Verdicts read magnitudes, so the sign only matters for reporting which face
//! is in tension.

use serde::{Deserialize, Serialize};

use crate::equations::stress::{average_shear_stress, axial_stress, bending_stress};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{CriticalFiber, LoadCase};
use crate::sections::SectionProperties;

/// Physical mechanism behind a stress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressMechanism {
    Bending,
    Axial,
    Combined,
    Shear,
}

impl StressMechanism {
    pub fn display_name(&self) -> &'static str {
        match self {
            StressMechanism::Bending => "Bending",
            StressMechanism::Axial => "Axial",
            StressMechanism::Combined => "Combined",
            StressMechanism::Shear => "Shear",
        }
    }

    /// Normal stresses act along the tube axis; shear does not
    pub fn is_normal(&self) -> bool {
        !matches!(self, StressMechanism::Shear)
    }
}

/// One stress value tagged with its mechanism (MPa, signed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressComponent {
    pub mechanism: StressMechanism,
    pub value_mpa: f64,
}

/// All stresses at the critical section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Every computed component, in mechanism order
    pub components: Vec<StressComponent>,
    /// Face the combined stress was read on
    pub critical_fiber: CriticalFiber,
    /// Largest normal stress magnitude (MPa); zero under pure shear
    pub governing_normal_mpa: f64,
    /// Mechanism of the governing normal stress
    pub governing_mechanism: Option<StressMechanism>,
}

impl StressResult {
    /// Value of the component with the given mechanism, if computed
    pub fn component(&self, mechanism: StressMechanism) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.mechanism == mechanism)
            .map(|c| c.value_mpa)
    }

    pub fn bending_mpa(&self) -> Option<f64> {
        self.component(StressMechanism::Bending)
    }

    pub fn axial_mpa(&self) -> Option<f64> {
        self.component(StressMechanism::Axial)
    }

    pub fn combined_mpa(&self) -> Option<f64> {
        self.component(StressMechanism::Combined)
    }

    pub fn shear_mpa(&self) -> Option<f64> {
        self.component(StressMechanism::Shear)
    }
}

/// Net normal stress on the chosen face.
///
/// `bending_mpa` and `axial_mpa` are the magnitudes from `M·c/I` and `F/A`,
/// with `axial_mpa` positive for compression.
///
/// ```rust
/// use tubecheck_core::calculations::stress::combine_normal_stresses;
/// use tubecheck_core::loads::CriticalFiber;
///
/// assert_eq!(combine_normal_stresses(50.0, 10.0, CriticalFiber::TensionFace), 40.0);
/// assert_eq!(combine_normal_stresses(50.0, 10.0, CriticalFiber::CompressionFace), -60.0);
/// ```
#[inline]
pub fn combine_normal_stresses(bending_mpa: f64, axial_mpa: f64, fiber: CriticalFiber) -> f64 {
    match fiber {
        CriticalFiber::TensionFace => bending_mpa - axial_mpa,
        CriticalFiber::CompressionFace => -(bending_mpa + axial_mpa),
    }
}

/// Compute every stress the load produces.
///
/// `resisting_area_mm2` is required when the load carries axial or shear
/// force and ignored otherwise.
///
/// # Errors
///
/// `DegenerateGeometry` when the second moment (under bending) or the
/// resisting area (under axial or shear force) is at or below `threshold`.
pub fn evaluate_stresses(
    props: &SectionProperties,
    resisting_area_mm2: Option<f64>,
    load: &LoadCase,
    threshold: f64,
) -> CalcResult<StressResult> {
    let mut components = Vec::new();

    let bending = if load.has_moment() {
        let i = props.moment_of_inertia_mm4;
        if i <= threshold {
            return Err(CalcError::degenerate_geometry("second moment of area (mm⁴)", i));
        }
        let sigma_b = bending_stress(load.total_moment_nmm(), props.extreme_fiber_distance_mm, i);
        components.push(StressComponent {
            mechanism: StressMechanism::Bending,
            value_mpa: sigma_b,
        });
        Some(sigma_b)
    } else {
        None
    };

    let area = if load.has_axial() || load.has_shear() {
        let a = resisting_area_mm2.unwrap_or(0.0);
        if a <= threshold {
            return Err(CalcError::degenerate_geometry("resisting area (mm²)", a));
        }
        Some(a)
    } else {
        None
    };

    let axial = match (load.has_axial(), area) {
        (true, Some(a)) => {
            let sigma_a = axial_stress(load.axial_force_n, a);
            components.push(StressComponent {
                mechanism: StressMechanism::Axial,
                value_mpa: sigma_a,
            });
            Some(sigma_a)
        }
        _ => None,
    };

    if let (Some(sigma_b), Some(sigma_a)) = (bending, axial) {
        components.push(StressComponent {
            mechanism: StressMechanism::Combined,
            value_mpa: combine_normal_stresses(sigma_b, sigma_a, load.critical_fiber),
        });
    }

    if let (true, Some(a)) = (load.has_shear(), area) {
        components.push(StressComponent {
            mechanism: StressMechanism::Shear,
            value_mpa: average_shear_stress(load.shear_force_n, a),
        });
    }

    let governing = components
        .iter()
        .filter(|c| c.mechanism.is_normal())
        .max_by(|a, b| a.value_mpa.abs().total_cmp(&b.value_mpa.abs()));

    Ok(StressResult {
        critical_fiber: load.critical_fiber,
        governing_normal_mpa: governing.map(|c| c.value_mpa.abs()).unwrap_or(0.0),
        governing_mechanism: governing.map(|c| c.mechanism),
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::MomentSource;
    use crate::sections::{GeometryModel, TubeSection, TubeShape};

    fn square_props() -> SectionProperties {
        TubeSection::new(TubeShape::Square, 20.0, 0.9)
            .unwrap()
            .properties(GeometryModel::Standard)
    }

    #[test]
    fn test_pure_bending() {
        let load = LoadCase::new("m").with_moment(MomentSource::Applied { moment_nmm: 5000.0 });
        let result = evaluate_stresses(&square_props(), None, &load, 1e-6).unwrap();
        assert_eq!(result.components.len(), 1);
        assert!((result.governing_normal_mpa - 11.933).abs() < 0.001);
        assert_eq!(result.governing_mechanism, Some(StressMechanism::Bending));
    }

    #[test]
    fn test_combined_on_compression_face() {
        let load = LoadCase::new("mc")
            .with_moment(MomentSource::Applied { moment_nmm: 5000.0 })
            .with_axial_force(108.0)
            .with_critical_fiber(CriticalFiber::CompressionFace);
        let result = evaluate_stresses(&square_props(), Some(10.8), &load, 1e-6).unwrap();

        assert!((result.axial_mpa().unwrap() - 10.0).abs() < 1e-9);
        let combined = result.combined_mpa().unwrap();
        assert!(combined < 0.0);
        assert!((combined + 21.933).abs() < 0.001);
        assert_eq!(result.governing_mechanism, Some(StressMechanism::Combined));
        assert!((result.governing_normal_mpa - 21.933).abs() < 0.001);
    }

    #[test]
    fn test_combined_on_tension_face_can_be_smaller_than_bending() {
        let load = LoadCase::new("mt")
            .with_moment(MomentSource::Applied { moment_nmm: 5000.0 })
            .with_axial_force(108.0);
        let result = evaluate_stresses(&square_props(), Some(10.8), &load, 1e-6).unwrap();
        assert_eq!(result.governing_mechanism, Some(StressMechanism::Bending));
    }

    #[test]
    fn test_shear_is_not_governing_normal() {
        let load = LoadCase::new("v").with_shear_force(100.0);
        let result = evaluate_stresses(&square_props(), Some(36.0), &load, 1e-6).unwrap();
        assert_eq!(result.governing_normal_mpa, 0.0);
        assert_eq!(result.governing_mechanism, None);
        assert!((result.shear_mpa().unwrap() - 100.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_area_is_degenerate() {
        let load = LoadCase::new("a").with_axial_force(325.0);
        let err = evaluate_stresses(&square_props(), Some(0.0), &load, 1e-6).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
    }

    #[test]
    fn test_tiny_inertia_is_degenerate() {
        let mut props = square_props();
        props.moment_of_inertia_mm4 = 1e-7;
        let load = LoadCase::new("m").with_moment(MomentSource::Applied { moment_nmm: 1.0 });
        assert!(evaluate_stresses(&props, None, &load, 1e-6).is_err());
    }

    #[test]
    fn test_bending_decreases_with_thickness() {
        let load = LoadCase::new("m").with_moment(MomentSource::Applied { moment_nmm: 114_710.0 });
        let mut previous = f64::INFINITY;
        for t in crate::sections::WALL_THICKNESS_CATALOG_MM {
            let props = TubeSection::new(TubeShape::Round, 25.4, t).unwrap().properties(GeometryModel::Standard);
            let sigma = evaluate_stresses(&props, None, &load, 1e-6).unwrap().governing_normal_mpa;
            assert!(sigma < previous);
            previous = sigma;
        }
    }
}
