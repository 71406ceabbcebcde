//! # Equation Registry
//!
//! Every formula the evaluator can apply, with its plain-text form, source and
//! category. An [`EquationTracker`] collects which of them a particular evaluation
//! used so the report can list them.
//!
//! ## Usage
//!
//! ```rust
//! use tubecheck_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::BendingStress, "inclined chair");
//!
//! let meta = Equation::BendingStress.metadata();
//! assert_eq!(meta.formula_plain, "σ = M·c / I");
//! assert_eq!(tracker.unique_equations(), vec![Equation::BendingStress]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// ISO 7173 - Furniture, chairs and stools: strength and durability
    Iso7173 { clause: &'static str },
    /// Shigley's Mechanical Engineering Design
    Shigley { edition: u8, section: &'static str },
    /// AWS D1.1 Structural Welding Code - Steel
    AwsD11 { clause: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Iso7173 { clause } => format!("ISO 7173, {}", clause),
            CodeReference::Shigley { edition, section } => {
                format!("Shigley {}ed, Section {}", edition, section)
            }
            CodeReference::AwsD11 { clause } => format!("AWS D1.1, Clause {}", clause),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Groups used to order the equation list in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Section properties (I, c, A)
    SectionProperties,
    /// Weld and joint resisting areas
    WeldAreas,
    /// Test loads and joint moments
    Loads,
    /// Stress calculations
    Stresses,
    /// Fatigue life and admissible stress
    Fatigue,
    /// Verdict thresholds
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::WeldAreas => "Weld Areas",
            EquationCategory::Loads => "Loads",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Fatigue => "Fatigue",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order in reports (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionProperties => 1,
            EquationCategory::WeldAreas => 2,
            EquationCategory::Loads => 3,
            EquationCategory::Stresses => 4,
            EquationCategory::Fatigue => 5,
            EquationCategory::DesignChecks => 6,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Complete description of one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function implementing the equation
    pub source_function: &'static str,
}

/// All equations used by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// I = (S⁴ − (S−2t)⁴)/12
    SquareHollowInertia,
    /// I = (π/64)(D⁴ − (D−2t)⁴)
    RoundHollowInertia,
    /// I ≈ S·S³/2
    WeldThroatApproxInertia,
    /// c = outer/2
    ExtremeFiberDistance,
    /// Tube wall area
    HollowSectionArea,
    /// A = 2·w·t
    TwoFilletWeldArea,
    /// A = perimeter·t
    PerimeterWeldArea,
    /// t_e = 0.707·t
    FilletWeldThroat,
    /// F_leg = F/n
    PerLegForce,
    /// M = F·h
    LeverMoment,
    /// M = qL²/12
    FixedFixedUniformMoment,
    /// σ = M·c/I
    BendingStress,
    /// σ = F/A
    AxialStress,
    /// σ = ±σ_b − σ_a
    CombinedStress,
    /// τ = V/A
    ShearStress,
    /// σ_adm = Se·(a/N)^(1/b)
    BasquinAdmissibleStress,
    /// N = a·(σ/Sut)^(−b)
    BasquinLifeUltimate,
    /// N = a·(σ/Se)^(−b)
    BasquinLifeEndurance,
    /// σ_adm = Se·Sut/(n(Sut − Se))
    GoodmanAdmissibleStress,
    /// Sy = 0.65·Sut, Se = 0.5·Sut, τ_adm = 0.6·Sut
    MaterialRatios,
    /// Approved / Warning / Failed thresholds
    StaticClassification,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        use CodeReference::*;
        use EquationCategory::*;

        let (name, formula_plain, reference, category, source_function) = match self {
            Equation::SquareHollowInertia => (
                "Square Hollow Section Second Moment",
                "I = (S⁴ − (S − 2t)⁴) / 12",
                Shigley { edition: 10, section: "A-18" },
                SectionProperties,
                "square_hollow_moment_of_inertia",
            ),
            Equation::RoundHollowInertia => (
                "Round Hollow Section Second Moment",
                "I = (π/64)·(D⁴ − (D − 2t)⁴)",
                Shigley { edition: 10, section: "A-18" },
                SectionProperties,
                "round_hollow_moment_of_inertia",
            ),
            Equation::WeldThroatApproxInertia => (
                "Weld-Throat Comparison Second Moment",
                "I ≈ S·S³ / 2",
                Mechanics,
                SectionProperties,
                "weld_throat_approx_moment_of_inertia",
            ),
            Equation::ExtremeFiberDistance => (
                "Extreme Fiber Distance",
                "c = outer / 2",
                Mechanics,
                SectionProperties,
                "extreme_fiber_distance",
            ),
            Equation::HollowSectionArea => (
                "Tube Wall Area",
                "A = S² − (S − 2t)²  |  A = (π/4)·(D² − (D − 2t)²)",
                Mechanics,
                SectionProperties,
                "square_hollow_area / round_hollow_area",
            ),
            Equation::TwoFilletWeldArea => (
                "Two Fillet Welds",
                "A = 2·w·t",
                AwsD11 { clause: "2.4" },
                WeldAreas,
                "two_fillet_weld_area",
            ),
            Equation::PerimeterWeldArea => (
                "Perimeter Weld",
                "A = perimeter·t",
                AwsD11 { clause: "2.4" },
                WeldAreas,
                "perimeter_weld_area",
            ),
            Equation::FilletWeldThroat => (
                "Fillet Weld Effective Throat",
                "t_e = 0.707·t",
                AwsD11 { clause: "2.4.3" },
                WeldAreas,
                "fillet_throat",
            ),
            Equation::PerLegForce => (
                "Force per Leg",
                "F_leg = F / n",
                Iso7173 { clause: "test loads" },
                Loads,
                "per_leg_force",
            ),
            Equation::LeverMoment => (
                "Backrest Lever Moment",
                "M = F·(h_back − h_seat)",
                Mechanics,
                Loads,
                "cantilever_point_moment",
            ),
            Equation::FixedFixedUniformMoment => (
                "Fixed-Fixed Uniform Load End Moment",
                "M = q·L² / 12",
                Mechanics,
                Loads,
                "fixed_fixed_uniform_end_moment",
            ),
            Equation::BendingStress => (
                "Bending Stress",
                "σ = M·c / I",
                Mechanics,
                Stresses,
                "bending_stress",
            ),
            Equation::AxialStress => (
                "Axial Stress",
                "σ = F / A",
                Mechanics,
                Stresses,
                "axial_stress",
            ),
            Equation::CombinedStress => (
                "Combined Normal Stress",
                "σ = σ_b − σ_a (tension face)  |  σ = −(σ_b + σ_a) (compression face)",
                Mechanics,
                Stresses,
                "combine_normal_stresses",
            ),
            Equation::ShearStress => (
                "Average Shear Stress",
                "τ = V / A",
                Mechanics,
                Stresses,
                "average_shear_stress",
            ),
            Equation::BasquinAdmissibleStress => (
                "Basquin Admissible Stress",
                "σ_adm = Se·(a / N)^(1/b)",
                Shigley { edition: 10, section: "6-7" },
                Fatigue,
                "basquin_admissible_stress",
            ),
            Equation::BasquinLifeUltimate => (
                "Basquin Life (Sut-normalized)",
                "N = a·(σ / Sut)^(−b)",
                Shigley { edition: 10, section: "6-7" },
                Fatigue,
                "basquin_life",
            ),
            Equation::BasquinLifeEndurance => (
                "Basquin Life (Se-normalized)",
                "N = a·(σ / Se)^(−b)",
                Shigley { edition: 10, section: "6-7" },
                Fatigue,
                "basquin_life",
            ),
            Equation::GoodmanAdmissibleStress => (
                "Goodman Admissible Stress",
                "σ_adm = Se·Sut / (n·(Sut − Se))",
                Shigley { edition: 10, section: "6-12" },
                Fatigue,
                "goodman_admissible_stress",
            ),
            Equation::MaterialRatios => (
                "Material Limits from Sut",
                "Sy = 0.65·Sut, Se = 0.5·Sut, τ_adm = 0.6·Sut",
                Shigley { edition: 10, section: "6-9" },
                DesignChecks,
                "MaterialLimits::from_ultimate",
            ),
            Equation::StaticClassification => (
                "Static Verdict",
                "σ < Sy: approved; Sy ≤ σ < Sut: warning; σ ≥ Sut: failed",
                Mechanics,
                DesignChecks,
                "classify_static",
            ),
        };

        EquationMetadata {
            name,
            formula_plain,
            reference,
            category,
            source_function,
        }
    }
}

/// Every registered equation, in declaration order.
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::SquareHollowInertia,
    Equation::RoundHollowInertia,
    Equation::WeldThroatApproxInertia,
    Equation::ExtremeFiberDistance,
    Equation::HollowSectionArea,
    Equation::TwoFilletWeldArea,
    Equation::PerimeterWeldArea,
    Equation::FilletWeldThroat,
    Equation::PerLegForce,
    Equation::LeverMoment,
    Equation::FixedFixedUniformMoment,
    Equation::BendingStress,
    Equation::AxialStress,
    Equation::CombinedStress,
    Equation::ShearStress,
    Equation::BasquinAdmissibleStress,
    Equation::BasquinLifeUltimate,
    Equation::BasquinLifeEndurance,
    Equation::GoodmanAdmissibleStress,
    Equation::MaterialRatios,
    Equation::StaticClassification,
];

// ============================================================================
// Usage Tracking
// ============================================================================

/// Record of an equation being used in an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Where/why it was used (e.g., "backrest push")
    pub context: String,
}

/// Collector for equation usage during an evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage {
            equation,
            context: context.into(),
        });
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, in report order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

/// Markdown table of the whole registry.
pub fn generate_equations_markdown() -> String {
    let mut out = String::from("| Equation | Formula | Reference | Category |\n|---|---|---|---|\n");
    for eq in ALL_EQUATIONS {
        let meta = eq.metadata();
        out.push_str(&format!(
            "| {} | `{}` | {} | {} |\n",
            meta.name,
            meta.formula_plain,
            meta.reference.citation(),
            meta.category.display_name()
        ));
    }
    out
}
