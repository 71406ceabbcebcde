//! Thickness Sweep
//!
//! Re-runs the evaluation for every catalog wall thickness so a stress against
//! thickness chart can be drawn with the selected thickness highlighted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::evaluation::{evaluate, EvaluationInput};
use super::verdict::StaticVerdict;
use crate::errors::CalcResult;
use crate::sections::{TubeShape, WALL_THICKNESS_CATALOG_MM};
use crate::settings::EvaluationConfig;

/// Thicknesses closer than this count as the selected one
const SELECTION_TOLERANCE_MM: f64 = 1e-6;

/// One catalog thickness in the sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub wall_thickness_mm: f64,
    /// Governing stress (MPa); `None` when the thickness does not fit the outer size
    pub governing_stress_mpa: Option<f64>,
    pub static_verdict: Option<StaticVerdict>,
    /// This is the thickness of the input
    pub selected: bool,
}

/// Governing stress across the thickness catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessSweep {
    pub shape: TubeShape,
    pub outer_size_mm: f64,
    pub load_case: String,
    pub points: Vec<SweepPoint>,
}

impl ThicknessSweep {
    pub fn selected(&self) -> Option<&SweepPoint> {
        self.points.iter().find(|p| p.selected)
    }

    /// Thinnest catalog thickness whose static verdict is approved
    pub fn thinnest_approved(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .find(|p| p.static_verdict == Some(StaticVerdict::Approved))
    }
}

/// Evaluate `input` at every catalog thickness.
///
/// The input itself is validated first, so an invalid outer size or selected
/// thickness fails the whole sweep. Geometry errors at another catalog
/// thickness leave that point empty; any other error aborts the sweep.
///
/// ```rust
/// use tubecheck_core::calculations::evaluation::EvaluationInput;
/// use tubecheck_core::calculations::sweep::sweep_thickness;
/// use tubecheck_core::settings::EvaluationConfig;
///
/// let sweep = sweep_thickness(&EvaluationInput::default(), &EvaluationConfig::default()).unwrap();
/// assert_eq!(sweep.points.len(), 7);
/// assert_eq!(sweep.selected().unwrap().wall_thickness_mm, 0.90);
/// ```
pub fn sweep_thickness(input: &EvaluationInput, config: &EvaluationConfig) -> CalcResult<ThicknessSweep> {
    input.validate(config)?;

    let mut points = Vec::with_capacity(WALL_THICKNESS_CATALOG_MM.len());

    for thickness in WALL_THICKNESS_CATALOG_MM {
        let selected = (thickness - input.wall_thickness_mm).abs() < SELECTION_TOLERANCE_MM;
        let point = match evaluate(&input.with_wall_thickness(thickness), config) {
            Ok(result) => SweepPoint {
                wall_thickness_mm: thickness,
                governing_stress_mpa: Some(result.governing_stress_mpa()),
                static_verdict: Some(result.static_verdict),
                selected,
            },
            Err(e) if e.is_geometry_error() => {
                debug!(thickness_mm = thickness, error = %e, "thickness skipped");
                SweepPoint {
                    wall_thickness_mm: thickness,
                    governing_stress_mpa: None,
                    static_verdict: None,
                    selected,
                }
            }
            Err(e) => return Err(e),
        };
        points.push(point);
    }

    Ok(ThicknessSweep {
        shape: input.shape,
        outer_size_mm: input.outer_size_mm,
        load_case: input.load_case.display_name().to_string(),
        points,
    })
}
