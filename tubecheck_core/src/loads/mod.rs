//! # Test Loads
//!
//! Forces and moments acting at the tube joint under analysis.
//!
//! # Overview
//!
//! - [`MomentSource`] - One independent bending contribution (applied, lever, distributed)
//! - [`LoadCase`] - The resolved load at the joint: moments, axial and shear forces
//! - [`CriticalFiber`] - Which face of the tube the combined stress is read on
//! - [`iso7173`] - The closed catalog of ISO 7173 test conditions
//!
//! # Example
//!
//! ```
//! use tubecheck_core::loads::{LoadCase, MomentSource};
//!
//! let case = LoadCase::new("Seat and backrest")
//!     .with_moment(MomentSource::Lever { force_n: 237.5, arm_mm: 400.0 })
//!     .with_moment(MomentSource::DistributedFixedFixed { total_force_n: 1300.0, span_mm: 400.0 })
//!     .with_axial_force(325.0);
//!
//! // Contributions are additive: 95 000 + 43 333.3 N·mm
//! assert!((case.total_moment_nmm() - 138_333.33).abs() < 0.01);
//! ```

pub mod iso7173;

pub use iso7173::{
    require_catalog_cycles,
    LoadCaseSpec,
    BACKREST_PUSH_PER_FOOT_N,
    INCLINED_CHAIR_MOMENT_NMM,
    LIGHT_BACKREST_PER_FOOT_N,
    SEAT_LOAD_PER_FOOT_N,
    SEAT_PAIR_PER_FOOT_N,
    TARGET_CYCLES_CATALOG,
};

use serde::{Deserialize, Serialize};

use crate::equations::beam::{cantilever_point_moment, fixed_fixed_uniform_end_moment};
use crate::equations::registry::Equation;
use crate::sections::ResistingAreaModel;

/// Face of the tube on which the combined normal stress is evaluated.
///
/// Tension is positive and axial force is positive in compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalFiber {
    /// `σ = σ_b − σ_a`
    #[default]
    TensionFace,
    /// `σ = −(σ_b + σ_a)`
    CompressionFace,
}

impl CriticalFiber {
    pub fn display_name(&self) -> &'static str {
        match self {
            CriticalFiber::TensionFace => "Tension face",
            CriticalFiber::CompressionFace => "Compression face",
        }
    }
}

/// One bending contribution at the joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MomentSource {
    /// Moment given directly (N·mm)
    Applied { moment_nmm: f64 },
    /// Point force acting on a lever arm, `M = F·h`
    Lever { force_n: f64, arm_mm: f64 },
    /// Total force spread uniformly over a fixed-fixed span, `M = q·L²/12`
    DistributedFixedFixed { total_force_n: f64, span_mm: f64 },
}

impl MomentSource {
    /// Moment of this contribution (N·mm)
    pub fn moment_nmm(&self) -> f64 {
        match *self {
            MomentSource::Applied { moment_nmm } => moment_nmm,
            MomentSource::Lever { force_n, arm_mm } => cantilever_point_moment(force_n, arm_mm),
            MomentSource::DistributedFixedFixed { total_force_n, span_mm } => {
                fixed_fixed_uniform_end_moment(total_force_n / span_mm, span_mm)
            }
        }
    }

    /// Equation behind this contribution, if any
    pub fn equation(&self) -> Option<Equation> {
        match self {
            MomentSource::Applied { .. } => None,
            MomentSource::Lever { .. } => Some(Equation::LeverMoment),
            MomentSource::DistributedFixedFixed { .. } => Some(Equation::FixedFixedUniformMoment),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MomentSource::Applied { moment_nmm } => format!("Applied moment {:.0} N·mm", moment_nmm),
            MomentSource::Lever { force_n, arm_mm } => {
                format!("{:.1} N on a {:.0} mm lever", force_n, arm_mm)
            }
            MomentSource::DistributedFixedFixed { total_force_n, span_mm } => {
                format!("{:.0} N distributed over {:.0} mm (fixed ends)", total_force_n, span_mm)
            }
        }
    }
}

/// Resolved load acting at the joint.
///
/// Built either from a [`LoadCaseSpec`] or directly with the builder methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Test condition name
    pub name: String,
    /// Independent moment contributions, summed
    pub moment_sources: Vec<MomentSource>,
    /// Axial force (N), positive in compression
    pub axial_force_n: f64,
    /// Shear force (N)
    pub shear_force_n: f64,
    /// Area the axial and shear forces act on, unless configuration overrides it
    pub resisting_area: ResistingAreaModel,
    /// Face the combined stress is evaluated on
    pub critical_fiber: CriticalFiber,
}

impl LoadCase {
    /// Create an empty load case acting on the tube wall, tension face
    pub fn new(name: impl Into<String>) -> Self {
        LoadCase {
            name: name.into(),
            moment_sources: Vec::new(),
            axial_force_n: 0.0,
            shear_force_n: 0.0,
            resisting_area: ResistingAreaModel::TubeWall,
            critical_fiber: CriticalFiber::TensionFace,
        }
    }

    /// Add a moment contribution (builder pattern)
    pub fn with_moment(mut self, source: MomentSource) -> Self {
        self.moment_sources.push(source);
        self
    }

    pub fn with_axial_force(mut self, force_n: f64) -> Self {
        self.axial_force_n = force_n;
        self
    }

    pub fn with_shear_force(mut self, force_n: f64) -> Self {
        self.shear_force_n = force_n;
        self
    }

    pub fn with_resisting_area(mut self, model: ResistingAreaModel) -> Self {
        self.resisting_area = model;
        self
    }

    pub fn with_critical_fiber(mut self, fiber: CriticalFiber) -> Self {
        self.critical_fiber = fiber;
        self
    }

    /// Sum of all moment contributions (N·mm)
    pub fn total_moment_nmm(&self) -> f64 {
        self.moment_sources.iter().map(MomentSource::moment_nmm).sum()
    }

    pub fn has_moment(&self) -> bool {
        !self.moment_sources.is_empty()
    }

    pub fn has_axial(&self) -> bool {
        self.axial_force_n != 0.0
    }

    pub fn has_shear(&self) -> bool {
        self.shear_force_n != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lever_moment() {
        let m = MomentSource::Lever { force_n: 237.5, arm_mm: 400.0 };
        assert!((m.moment_nmm() - 95_000.0).abs() < 1e-9);
        assert_eq!(m.equation(), Some(Equation::LeverMoment));
    }

    #[test]
    fn test_distributed_moment() {
        let m = MomentSource::DistributedFixedFixed { total_force_n: 1300.0, span_mm: 400.0 };
        // q = 3.25 N/mm, M = 3.25 × 160000 / 12
        assert!((m.moment_nmm() - 43_333.333).abs() < 0.001);
    }

    #[test]
    fn test_moments_are_additive() {
        let case = LoadCase::new("test")
            .with_moment(MomentSource::Applied { moment_nmm: 1000.0 })
            .with_moment(MomentSource::Applied { moment_nmm: 2500.0 });
        assert_eq!(case.total_moment_nmm(), 3500.0);
    }

    #[test]
    fn test_builder_defaults() {
        let case = LoadCase::new("empty");
        assert!(!case.has_moment());
        assert!(!case.has_axial());
        assert_eq!(case.critical_fiber, CriticalFiber::TensionFace);
        assert_eq!(case.resisting_area, ResistingAreaModel::TubeWall);
    }

    #[test]
    fn test_moment_source_serde_tag() {
        let json = serde_json::to_string(&MomentSource::Applied { moment_nmm: 5000.0 }).unwrap();
        assert!(json.contains("\"type\":\"Applied\""));
    }
}
