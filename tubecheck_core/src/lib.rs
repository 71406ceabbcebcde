//! # tubecheck_core - Chair Frame Tube Evaluation Engine
//!
//! `tubecheck_core` checks welded steel tubes of chair frames against the load
//! cases of ISO 7173. Given a tube section, a steel grade and a load case it
//! computes bending, axial, combined and shear stress, classifies the static
//! outcome against yield and ultimate strength, and estimates fatigue life with
//! a Basquin curve and a Goodman check.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs and results serialize with serde
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every result lists the equations it used
//!
//! ## Quick Start
//!
//! ```rust
//! use tubecheck_core::{evaluate, EvaluationConfig, EvaluationInput, StaticVerdict};
//!
//! // 20 mm square tube, 0.9 mm wall, inclined chair moment
//! let result = evaluate(&EvaluationInput::default(), &EvaluationConfig::default()).unwrap();
//! assert_eq!(result.static_verdict, StaticVerdict::Warning);
//! ```
//!
//! ## Modules
//!
//! - [`sections`] - Tube geometry, thickness catalog and weld areas
//! - [`materials`] - Steel grades and derived strength limits
//! - [`loads`] - Load cases and the ISO 7173 presets
//! - [`calculations`] - Stress, fatigue, verdicts and the evaluation pipeline
//! - [`equations`] - Equation functions and the equation registry
//! - [`settings`] - Evaluation configuration (TOML)
//! - [`report`] - Text, HTML and JSON reports
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod report;
pub mod sections;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, sweep_thickness, EvaluationInput, EvaluationResult, FatigueVerdict, StaticVerdict};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_config, load_input, save_report};
pub use loads::LoadCaseSpec;
pub use materials::SteelGrade;
pub use sections::{TubeSection, TubeShape};
pub use settings::EvaluationConfig;
