//! ISO 7173 Test Conditions
//!
//! The closed catalog of chair test loads the evaluator knows about. Each
//! condition has the default forces and heights of the standard test and
//! resolves to a [`LoadCase`] at the leg or seat-tube joint.
//!
//! ```text
//!          backrest force
//!        ──►┃
//!           ┃  h_back
//!     ══════╋══════  seat (h_seat)
//!     ┃           ┃
//!     ┃           ┃  legs share the load
//!    ─┸─         ─┸─
//! ```
//!
//! New conditions are added as variants here, never derived at runtime.

use serde::{Deserialize, Serialize};

use super::{CriticalFiber, LoadCase, MomentSource};
use crate::equations::beam::per_leg_force;
use crate::errors::{ensure_finite, CalcError, CalcResult};
use crate::sections::ResistingAreaModel;
use crate::units::{Millimeters, Newtons};

// =============================================================================
// Standard values
// =============================================================================

/// Joint moment of the inclined-chair (backward tilt) test, N·mm
pub const INCLINED_CHAIR_MOMENT_NMM: f64 = 114_710.0;

/// Total vertical seat load, N
pub const SEAT_TOTAL_FORCE_N: f64 = 1300.0;

/// Total horizontal backrest load, N
pub const BACKREST_TOTAL_FORCE_N: f64 = 950.0;

/// Legs sharing the seat or backrest load
pub const DEFAULT_LEGS: u32 = 4;

/// Seat surface height, mm
pub const DEFAULT_SEAT_HEIGHT_MM: f64 = 450.0;

/// Height of the backrest load point, mm
pub const DEFAULT_BACKREST_HEIGHT_MM: f64 = 850.0;

/// Span of the horizontal seat tube, mm
pub const DEFAULT_SEAT_SPAN_MM: f64 = 400.0;

/// 1300 N over four feet
pub const SEAT_LOAD_PER_FOOT_N: f64 = 325.0;

/// 950 N over four feet
pub const BACKREST_PUSH_PER_FOOT_N: f64 = 237.5;

/// 330 N over a pair of feet
pub const SEAT_PAIR_PER_FOOT_N: f64 = 165.0;

/// 560 N over four feet
pub const LIGHT_BACKREST_PER_FOOT_N: f64 = 140.0;

/// Target cycle counts of the durability tests
pub const TARGET_CYCLES_CATALOG: [u64; 6] = [5_000, 12_500, 25_000, 50_000, 100_000, 200_000];

/// Fail with `NotInCatalog` unless `cycles` is a catalog count
pub fn require_catalog_cycles(cycles: u64) -> CalcResult<()> {
    if TARGET_CYCLES_CATALOG.contains(&cycles) {
        Ok(())
    } else {
        Err(CalcError::not_in_catalog("target cycles", cycles.to_string()))
    }
}

// =============================================================================
// Load case descriptions
// =============================================================================

/// Serializable description of the test condition and its parameters.
///
/// Every parameter is optional and falls back to the standard value.
///
/// # JSON
///
/// ```json
/// { "case": "BackrestPush", "seat_height_mm": 430.0, "backrest_height_mm": 800.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "case")]
pub enum LoadCaseSpec {
    /// Chair tilted backwards, fixed joint moment
    InclinedChair { moment_nmm: Option<f64> },

    /// Vertical seat load carried axially by the legs
    FourLegSeat {
        total_force_n: Option<f64>,
        legs: Option<u32>,
    },

    /// Horizontal push on the backrest, bending the rear legs at seat level
    BackrestPush {
        total_force_n: Option<f64>,
        legs: Option<u32>,
        seat_height_mm: Option<f64>,
        backrest_height_mm: Option<f64>,
    },

    /// Seat load spread along the horizontal seat tube
    SeatTubeDistributed {
        total_force_n: Option<f64>,
        span_mm: Option<f64>,
    },

    /// Seat tube load and backrest push together, plus the leg axial load
    SeatAndBackrest {
        seat_force_n: Option<f64>,
        span_mm: Option<f64>,
        backrest_force_n: Option<f64>,
        legs: Option<u32>,
        seat_height_mm: Option<f64>,
        backrest_height_mm: Option<f64>,
        axial_force_n: Option<f64>,
    },

    /// User-supplied loads
    Custom {
        #[serde(default)]
        moment_nmm: f64,
        #[serde(default)]
        axial_force_n: f64,
        #[serde(default)]
        shear_force_n: f64,
    },
}

impl Default for LoadCaseSpec {
    fn default() -> Self {
        LoadCaseSpec::InclinedChair { moment_nmm: None }
    }
}

impl LoadCaseSpec {
    /// Every condition with its standard parameters
    pub fn catalog() -> Vec<LoadCaseSpec> {
        vec![
            LoadCaseSpec::InclinedChair { moment_nmm: None },
            LoadCaseSpec::FourLegSeat {
                total_force_n: None,
                legs: None,
            },
            LoadCaseSpec::BackrestPush {
                total_force_n: None,
                legs: None,
                seat_height_mm: None,
                backrest_height_mm: None,
            },
            LoadCaseSpec::SeatTubeDistributed {
                total_force_n: None,
                span_mm: None,
            },
            LoadCaseSpec::SeatAndBackrest {
                seat_force_n: None,
                span_mm: None,
                backrest_force_n: None,
                legs: None,
                seat_height_mm: None,
                backrest_height_mm: None,
                axial_force_n: None,
            },
            LoadCaseSpec::Custom {
                moment_nmm: 0.0,
                axial_force_n: 0.0,
                shear_force_n: 0.0,
            },
        ]
    }

    /// Parse a case name; parameters take their standard values
    pub fn from_name(name: &str) -> CalcResult<Self> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        LoadCaseSpec::catalog()
            .into_iter()
            .find(|spec| spec.key() == key)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "load_case",
                    name,
                    "Expected inclined-chair, four-leg-seat, backrest-push, seat-tube-distributed, seat-and-backrest or custom",
                )
            })
    }

    fn key(&self) -> &'static str {
        match self {
            LoadCaseSpec::InclinedChair { .. } => "inclinedchair",
            LoadCaseSpec::FourLegSeat { .. } => "fourlegseat",
            LoadCaseSpec::BackrestPush { .. } => "backrestpush",
            LoadCaseSpec::SeatTubeDistributed { .. } => "seattubedistributed",
            LoadCaseSpec::SeatAndBackrest { .. } => "seatandbackrest",
            LoadCaseSpec::Custom { .. } => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCaseSpec::InclinedChair { .. } => "Inclined chair",
            LoadCaseSpec::FourLegSeat { .. } => "Four-leg seat load",
            LoadCaseSpec::BackrestPush { .. } => "Backrest push",
            LoadCaseSpec::SeatTubeDistributed { .. } => "Distributed seat tube load",
            LoadCaseSpec::SeatAndBackrest { .. } => "Seat and backrest",
            LoadCaseSpec::Custom { .. } => "Custom load",
        }
    }

    /// Whether resolving this case divides a total force among legs
    pub fn splits_across_legs(&self) -> bool {
        matches!(
            self,
            LoadCaseSpec::FourLegSeat { .. }
                | LoadCaseSpec::BackrestPush { .. }
                | LoadCaseSpec::SeatAndBackrest { .. }
        )
    }

    /// Resolve the condition into the load acting at the joint.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a leg count of zero, a backrest height not above the
    /// seat height, a non-positive span or force total, or any non-finite value.
    ///
    /// # Example
    ///
    /// ```
    /// use tubecheck_core::loads::LoadCaseSpec;
    ///
    /// let spec = LoadCaseSpec::BackrestPush {
    ///     total_force_n: None,
    ///     legs: None,
    ///     seat_height_mm: None,
    ///     backrest_height_mm: None,
    /// };
    /// let case = spec.resolve().unwrap();
    ///
    /// // 950 N / 4 legs on a 400 mm lever
    /// assert!((case.shear_force_n - 237.5).abs() < 1e-9);
    /// assert!((case.total_moment_nmm() - 95_000.0).abs() < 1e-6);
    /// ```
    pub fn resolve(&self) -> CalcResult<LoadCase> {
        let name = self.display_name();

        let case = match *self {
            LoadCaseSpec::InclinedChair { moment_nmm } => {
                let m = positive("moment_nmm", moment_nmm.unwrap_or(INCLINED_CHAIR_MOMENT_NMM))?;
                LoadCase::new(name).with_moment(MomentSource::Applied { moment_nmm: m })
            }

            LoadCaseSpec::FourLegSeat { total_force_n, legs } => {
                let per_leg = leg_share(total_force_n.unwrap_or(SEAT_TOTAL_FORCE_N), legs)?;
                LoadCase::new(name)
                    .with_axial_force(per_leg.value())
                    .with_resisting_area(ResistingAreaModel::LegWeld)
                    .with_critical_fiber(CriticalFiber::CompressionFace)
            }

            LoadCaseSpec::BackrestPush {
                total_force_n,
                legs,
                seat_height_mm,
                backrest_height_mm,
            } => {
                let per_leg = leg_share(total_force_n.unwrap_or(BACKREST_TOTAL_FORCE_N), legs)?;
                let arm = lever_arm(seat_height_mm, backrest_height_mm)?;
                LoadCase::new(name)
                    .with_moment(lever(per_leg, arm))
                    .with_shear_force(per_leg.value())
                    .with_resisting_area(ResistingAreaModel::PartialPerimeterWeld)
            }

            LoadCaseSpec::SeatTubeDistributed { total_force_n, span_mm } => {
                LoadCase::new(name).with_moment(distributed(total_force_n, span_mm)?)
            }

            LoadCaseSpec::SeatAndBackrest {
                seat_force_n,
                span_mm,
                backrest_force_n,
                legs,
                seat_height_mm,
                backrest_height_mm,
                axial_force_n,
            } => {
                let per_leg = leg_share(backrest_force_n.unwrap_or(BACKREST_TOTAL_FORCE_N), legs)?;
                let arm = lever_arm(seat_height_mm, backrest_height_mm)?;
                let axial = ensure_finite("axial_force_n", axial_force_n.unwrap_or(SEAT_LOAD_PER_FOOT_N))?;
                LoadCase::new(name)
                    .with_moment(distributed(seat_force_n, span_mm)?)
                    .with_moment(lever(per_leg, arm))
                    .with_axial_force(axial)
                    .with_critical_fiber(CriticalFiber::CompressionFace)
            }

            LoadCaseSpec::Custom {
                moment_nmm,
                axial_force_n,
                shear_force_n,
            } => {
                let m = ensure_finite("moment_nmm", moment_nmm)?;
                let mut case = LoadCase::new(name)
                    .with_axial_force(ensure_finite("axial_force_n", axial_force_n)?)
                    .with_shear_force(ensure_finite("shear_force_n", shear_force_n)?);
                if m != 0.0 {
                    case = case.with_moment(MomentSource::Applied { moment_nmm: m });
                }
                case
            }
        };

        Ok(case)
    }
}

fn positive(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
    }
    Ok(value)
}

fn leg_share(total_force_n: f64, legs: Option<u32>) -> CalcResult<Newtons> {
    let total = positive("total_force_n", total_force_n)?;
    let legs = legs.unwrap_or(DEFAULT_LEGS);
    if legs == 0 {
        return Err(CalcError::invalid_input("legs", "0", "At least one leg must carry the load"));
    }
    Ok(Newtons(per_leg_force(total, legs)))
}

fn lever_arm(seat_height_mm: Option<f64>, backrest_height_mm: Option<f64>) -> CalcResult<Millimeters> {
    let seat = positive("seat_height_mm", seat_height_mm.unwrap_or(DEFAULT_SEAT_HEIGHT_MM))?;
    let back = positive("backrest_height_mm", backrest_height_mm.unwrap_or(DEFAULT_BACKREST_HEIGHT_MM))?;
    if back <= seat {
        return Err(CalcError::invalid_input(
            "backrest_height_mm",
            back.to_string(),
            format!("Backrest height must exceed seat height ({} mm)", seat),
        ));
    }
    Ok(Millimeters(back) - Millimeters(seat))
}

fn lever(force: Newtons, arm: Millimeters) -> MomentSource {
    MomentSource::Lever {
        force_n: force.value(),
        arm_mm: arm.value(),
    }
}

fn distributed(total_force_n: Option<f64>, span_mm: Option<f64>) -> CalcResult<MomentSource> {
    Ok(MomentSource::DistributedFixedFixed {
        total_force_n: positive("total_force_n", total_force_n.unwrap_or(SEAT_TOTAL_FORCE_N))?,
        span_mm: positive("span_mm", span_mm.unwrap_or(DEFAULT_SEAT_SPAN_MM))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_foot_presets() {
        assert_eq!(SEAT_TOTAL_FORCE_N / 4.0, SEAT_LOAD_PER_FOOT_N);
        assert_eq!(BACKREST_TOTAL_FORCE_N / 4.0, BACKREST_PUSH_PER_FOOT_N);
        assert_eq!(330.0 / 2.0, SEAT_PAIR_PER_FOOT_N);
        assert_eq!(560.0 / 4.0, LIGHT_BACKREST_PER_FOOT_N);
    }

    #[test]
    fn test_inclined_chair_default() {
        let case = LoadCaseSpec::default().resolve().unwrap();
        assert_eq!(case.total_moment_nmm(), INCLINED_CHAIR_MOMENT_NMM);
        assert!(!case.has_axial());
    }

    #[test]
    fn test_four_leg_seat() {
        let spec = LoadCaseSpec::FourLegSeat {
            total_force_n: None,
            legs: None,
        };
        let case = spec.resolve().unwrap();
        assert_eq!(case.axial_force_n, 325.0);
        assert_eq!(case.resisting_area, ResistingAreaModel::LegWeld);
        assert_eq!(case.critical_fiber, CriticalFiber::CompressionFace);
        assert!(!case.has_moment());
    }

    #[test]
    fn test_zero_legs_rejected() {
        let spec = LoadCaseSpec::FourLegSeat {
            total_force_n: Some(1300.0),
            legs: Some(0),
        };
        assert_eq!(spec.resolve().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_heights_out_of_order() {
        let spec = LoadCaseSpec::BackrestPush {
            total_force_n: None,
            legs: None,
            seat_height_mm: Some(450.0),
            backrest_height_mm: Some(450.0),
        };
        let err = spec.resolve().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "backrest_height_mm"));
    }

    #[test]
    fn test_seat_and_backrest_is_additive() {
        let combined = LoadCaseSpec::from_name("seat-and-backrest").unwrap().resolve().unwrap();
        let seat = LoadCaseSpec::from_name("seat tube distributed").unwrap().resolve().unwrap();
        let back = LoadCaseSpec::from_name("BackrestPush").unwrap().resolve().unwrap();

        let expected = seat.total_moment_nmm() + back.total_moment_nmm();
        assert!((combined.total_moment_nmm() - expected).abs() < 1e-9);
        assert_eq!(combined.moment_sources.len(), 2);
        assert_eq!(combined.axial_force_n, SEAT_LOAD_PER_FOOT_N);
        assert_eq!(combined.critical_fiber, CriticalFiber::CompressionFace);
    }

    #[test]
    fn test_custom_passthrough() {
        let spec = LoadCaseSpec::Custom {
            moment_nmm: 5000.0,
            axial_force_n: 0.0,
            shear_force_n: 12.0,
        };
        let case = spec.resolve().unwrap();
        assert_eq!(case.total_moment_nmm(), 5000.0);
        assert_eq!(case.shear_force_n, 12.0);
        assert_eq!(case.resisting_area, ResistingAreaModel::TubeWall);
    }

    #[test]
    fn test_from_name_unknown() {
        assert!(LoadCaseSpec::from_name("drop test").is_err());
    }

    #[test]
    fn test_spec_json() {
        let spec: LoadCaseSpec =
            serde_json::from_str(r#"{"case":"BackrestPush","seat_height_mm":430.0}"#).unwrap();
        let case = spec.resolve().unwrap();
        assert!((case.total_moment_nmm() - 237.5 * 420.0).abs() < 1e-9);
    }

    #[test]
    fn test_cycles_catalog() {
        assert!(require_catalog_cycles(50_000).is_ok());
        assert_eq!(require_catalog_cycles(60_000).unwrap_err().error_code(), "NOT_IN_CATALOG");
    }
}
