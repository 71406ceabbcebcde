//! # Tube Calculations
//!
//! The evaluation pipeline, one stage per module. Follows the pattern:
//!
//! - `EvaluationInput` - Input parameters (JSON-serializable)
//! - `EvaluationResult` - Results (JSON-serializable)
//! - `evaluate(&input, &config) -> CalcResult<EvaluationResult>` - Pure function
//!
//! ## Stages
//!
//! - [`stress`] - Bending, axial, combined and shear stress
//! - [`fatigue`] - Basquin estimate and Goodman check
//! - [`verdict`] - Static, fatigue and shear classification
//! - [`evaluation`] - The pipeline tying the stages together
//! - [`sweep`] - The pipeline repeated over the thickness catalog

pub mod evaluation;
pub mod fatigue;
pub mod stress;
pub mod sweep;
pub mod verdict;

pub use evaluation::{evaluate, EvaluationInput, EvaluationResult};
pub use fatigue::{
    BasquinCurve,
    FatigueAdvisory,
    FatigueEstimate,
    GoodmanCheck,
    GoodmanPoint,
    LifeNormalization,
};
pub use stress::{StressComponent, StressMechanism, StressResult};
pub use sweep::{sweep_thickness, SweepPoint, ThicknessSweep};
pub use verdict::{FatigueVerdict, ShearCheck, StaticVerdict};
