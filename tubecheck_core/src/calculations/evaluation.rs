//! # Tube Joint Evaluation
//!
//! The full pipeline for one tube under one ISO 7173 test condition:
//!
//! ```text
//! input → section → load → stresses → fatigue → verdicts
//! ```
//!
//! ## Assumptions
//!
//! - Thin-walled square or round hollow section, uniform wall
//! - Stresses at a single critical section (the welded joint)
//! - Linear elastic, closed-form beam mechanics
//! - Fully reversed cyclic loading for the Basquin estimate
//!
//! ## Example
//!
//! ```rust
//! use tubecheck_core::calculations::evaluation::{evaluate, EvaluationInput};
//! use tubecheck_core::calculations::verdict::StaticVerdict;
//! use tubecheck_core::loads::LoadCaseSpec;
//! use tubecheck_core::sections::TubeShape;
//! use tubecheck_core::settings::EvaluationConfig;
//!
//! let input = EvaluationInput {
//!     label: "Rear leg".to_string(),
//!     shape: TubeShape::Round,
//!     outer_size_mm: 25.4,
//!     wall_thickness_mm: 1.5,
//!     target_cycles: Some(50_000),
//!     load_case: LoadCaseSpec::default(),
//!     ..Default::default()
//! };
//!
//! let result = evaluate(&input, &EvaluationConfig::default()).unwrap();
//! assert_eq!(result.static_verdict, StaticVerdict::Approved);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::fatigue::{estimate_fatigue, goodman_check, FatigueEstimate, GoodmanCheck};
use super::stress::{evaluate_stresses, StressResult};
use super::verdict::{
    check_shear,
    classify_fatigue,
    classify_static,
    FatigueVerdict,
    ShearCheck,
    StaticVerdict,
};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{require_catalog_cycles, LoadCase, LoadCaseSpec};
use crate::materials::{MaterialLimits, SteelGrade};
use crate::sections::{
    require_catalog_thickness,
    GeometryModel,
    ResistingAreaModel,
    SectionProperties,
    TubeSection,
    TubeShape,
};
use crate::settings::EvaluationConfig;

/// Input contract for one evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Rear leg",
///   "shape": "Square",
///   "outer_size_mm": 20.0,
///   "wall_thickness_mm": 0.9,
///   "steel_grade": "Sae1008",
///   "target_cycles": 50000,
///   "weld_bead_width_mm": 6.0,
///   "load_case": { "case": "FourLegSeat" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    /// User label for this tube (e.g., "Rear leg", "Seat rail")
    #[serde(default)]
    pub label: String,

    pub shape: TubeShape,

    /// Outer width (square) or outer diameter (round), mm
    pub outer_size_mm: f64,

    /// Wall thickness, mm
    pub wall_thickness_mm: f64,

    #[serde(default)]
    pub steel_grade: SteelGrade,

    /// Cycle count for the fatigue check; the curve's reference count when absent
    #[serde(default)]
    pub target_cycles: Option<u64>,

    /// Fillet weld bead width, mm; required by the fillet-weld area models
    #[serde(default)]
    pub weld_bead_width_mm: Option<f64>,

    #[serde(default)]
    pub load_case: LoadCaseSpec,
}

impl Default for EvaluationInput {
    fn default() -> Self {
        EvaluationInput {
            label: String::new(),
            shape: TubeShape::Square,
            outer_size_mm: 20.0,
            wall_thickness_mm: 0.9,
            steel_grade: SteelGrade::default(),
            target_cycles: None,
            weld_bead_width_mm: None,
            load_case: LoadCaseSpec::default(),
        }
    }
}

impl EvaluationInput {
    /// Check everything that can be checked without running the pipeline.
    pub fn validate(&self, config: &EvaluationConfig) -> CalcResult<TubeSection> {
        let section = TubeSection::new(self.shape, self.outer_size_mm, self.wall_thickness_mm)?;
        self.steel_grade.validate()?;

        if config.stress.geometry_model == GeometryModel::WeldThroatApproximation && self.shape == TubeShape::Round {
            return Err(CalcError::invalid_input(
                "geometry_model",
                "weld_throat_approximation",
                "The weld throat approximation applies to square tubes only",
            ));
        }

        if self.target_cycles == Some(0) {
            return Err(CalcError::invalid_input(
                "target_cycles",
                "0",
                "Target cycle count must be positive",
            ));
        }

        if config.checks.enforce_catalogs {
            require_catalog_thickness(self.wall_thickness_mm)?;
            if let Some(cycles) = self.target_cycles {
                require_catalog_cycles(cycles)?;
            }
        }

        Ok(section)
    }

    /// Copy of this input with a different wall thickness
    pub fn with_wall_thickness(&self, wall_thickness_mm: f64) -> Self {
        EvaluationInput {
            wall_thickness_mm,
            ..self.clone()
        }
    }
}

/// Output contract of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub label: String,

    /// Validated tube section
    pub section: TubeSection,

    /// I, c and wall area of the section
    pub properties: SectionProperties,

    /// Load resolved from the test condition
    pub load: LoadCase,

    /// Sum of all moment contributions (N·mm)
    pub total_moment_nmm: f64,

    /// Area model in effect; `None` when the load has no axial or shear force
    pub resisting_area_model: Option<ResistingAreaModel>,

    /// Resisting area (mm²); `None` when the load has no axial or shear force
    pub resisting_area_mm2: Option<f64>,

    pub stresses: StressResult,

    pub limits: MaterialLimits,

    pub fatigue: FatigueEstimate,

    pub goodman: GoodmanCheck,

    pub static_verdict: StaticVerdict,

    pub fatigue_verdict: FatigueVerdict,

    /// Present when the load carries shear
    pub shear_check: Option<ShearCheck>,

    /// Equations applied, in order of use
    pub equations: EquationTracker,
}

impl EvaluationResult {
    /// Static, fatigue and shear checks all pass
    pub fn passes(&self) -> bool {
        self.static_verdict.passes()
            && self.fatigue_verdict.passes()
            && self.shear_check.map_or(true, |s| s.passes)
    }

    /// Governing normal stress magnitude (MPa)
    pub fn governing_stress_mpa(&self) -> f64 {
        self.stresses.governing_normal_mpa
    }

    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Run the full evaluation pipeline.
///
/// # Errors
///
/// * `InvalidGeometry` - dimensions cannot form a hollow section
/// * `InvalidInput` - non-finite values, bad load parameters, bad configuration
/// * `MissingField` - weld bead width needed by the area model
/// * `DegenerateGeometry` - second moment or resisting area at or below the threshold
/// * `NotInCatalog` - catalog enforcement is on and a value is off-catalog
pub fn evaluate(input: &EvaluationInput, config: &EvaluationConfig) -> CalcResult<EvaluationResult> {
    config.validate()?;
    let section = input.validate(config)?;
    let mut tracker = EquationTracker::new();

    // === Geometry ===
    let model = config.stress.geometry_model;
    let properties = section.properties(model);
    tracker.record(section_equation(model, section.shape()), "second moment of area");
    tracker.record(Equation::ExtremeFiberDistance, "extreme fiber");
    debug!(
        shape = ?section.shape(),
        outer_mm = section.outer_size_mm(),
        wall_mm = section.wall_thickness_mm(),
        i_mm4 = properties.moment_of_inertia_mm4,
        c_mm = properties.extreme_fiber_distance_mm,
        "resolved section properties"
    );

    // === Load ===
    let load = input.load_case.resolve()?;
    if input.load_case.splits_across_legs() {
        tracker.record(Equation::PerLegForce, load.name.as_str());
    }
    for source in &load.moment_sources {
        if let Some(eq) = source.equation() {
            tracker.record(eq, source.describe());
        }
    }
    let total_moment_nmm = load.total_moment_nmm();
    debug!(
        case = %load.name,
        moment_nmm = total_moment_nmm,
        axial_n = load.axial_force_n,
        shear_n = load.shear_force_n,
        "resolved load case"
    );

    // === Resisting area ===
    let (resisting_area_model, resisting_area_mm2) = if load.has_axial() || load.has_shear() {
        let area_model = config.stress.resisting_area.unwrap_or(load.resisting_area);
        let area = area_model.area_mm2(&section, input.weld_bead_width_mm)?;
        for eq in area_model.equations(section.shape()) {
            tracker.record(eq, area_model.display_name());
        }
        debug!(model = ?area_model, area_mm2 = area, "resolved resisting area");
        (Some(area_model.resolve_for(section.shape())), Some(area))
    } else {
        (None, None)
    };

    // === Stresses ===
    let stresses = evaluate_stresses(
        &properties,
        resisting_area_mm2,
        &load,
        config.stress.degenerate_threshold,
    )?;
    if stresses.bending_mpa().is_some() {
        tracker.record(Equation::BendingStress, load.name.as_str());
    }
    if stresses.axial_mpa().is_some() {
        tracker.record(Equation::AxialStress, load.name.as_str());
    }
    if stresses.combined_mpa().is_some() {
        tracker.record(Equation::CombinedStress, stresses.critical_fiber.display_name());
    }
    if stresses.shear_mpa().is_some() {
        tracker.record(Equation::ShearStress, load.name.as_str());
    }
    let governing = stresses.governing_normal_mpa;
    debug!(
        governing_mpa = governing,
        mechanism = ?stresses.governing_mechanism,
        "evaluated stresses"
    );

    // === Material ===
    let limits = MaterialLimits::from_grade(input.steel_grade, &config.material)?;
    tracker.record(Equation::MaterialRatios, input.steel_grade.display_name());

    // === Fatigue ===
    let fatigue = estimate_fatigue(
        governing,
        &limits,
        input.target_cycles,
        &config.fatigue.curve(),
        config.fatigue.life_normalization,
    );
    tracker.record(Equation::BasquinAdmissibleStress, format!("{:.0} cycles", fatigue.target_cycles));
    if fatigue.estimated_life_cycles.is_some() {
        tracker.record(config.fatigue.life_normalization.equation(), "estimated life");
    }
    for advisory in &fatigue.advisories {
        warn!(label = %input.label, "{}", advisory.message());
    }
    debug!(
        admissible_mpa = fatigue.admissible_stress_mpa,
        limit_mpa = fatigue.fatigue_limit_mpa,
        life = ?fatigue.estimated_life_cycles,
        "estimated fatigue"
    );

    let goodman = goodman_check(
        governing,
        &limits,
        config.fatigue.goodman_safety_factor,
        config.fatigue.goodman_envelope_points,
    );
    tracker.record(Equation::GoodmanAdmissibleStress, format!("n = {}", goodman.safety_factor));

    // === Verdicts ===
    let static_verdict = classify_static(governing, &limits);
    tracker.record(Equation::StaticClassification, "static verdict");
    let fatigue_verdict = classify_fatigue(governing, fatigue.fatigue_limit_mpa);
    let shear_check = stresses.shear_mpa().map(|tau| check_shear(tau, &limits));
    debug!(
        static_verdict = ?static_verdict,
        fatigue_verdict = ?fatigue_verdict,
        shear_ok = ?shear_check.map(|s| s.passes),
        "classified"
    );

    Ok(EvaluationResult {
        label: input.label.clone(),
        section,
        properties,
        load,
        total_moment_nmm,
        resisting_area_model,
        resisting_area_mm2,
        stresses,
        limits,
        fatigue,
        goodman,
        static_verdict,
        fatigue_verdict,
        shear_check,
        equations: tracker,
    })
}

fn section_equation(model: GeometryModel, shape: TubeShape) -> Equation {
    match (model, shape) {
        (GeometryModel::WeldThroatApproximation, _) => Equation::WeldThroatApproxInertia,
        (GeometryModel::Standard, TubeShape::Square) => Equation::SquareHollowInertia,
        (GeometryModel::Standard, TubeShape::Round) => Equation::RoundHollowInertia,
    }
}
