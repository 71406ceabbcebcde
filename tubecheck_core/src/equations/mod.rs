//! # Engineering Equations
//!
//! Every closed-form relation used by the evaluator lives here as a small
//! pure function over `f64`, so each can be checked against its reference in
//! isolation.
//!
//! ## Modules
//!
//! - [`section`] - Hollow-section properties and weld areas
//! - [`beam`] - Joint moments from the ISO 7173 test loads
//! - [`stress`] - Bending, axial and shear stress
//! - [`fatigue`] - Basquin and Goodman relations
//! - [`registry`] - Equation metadata and usage tracking for reports
//!
//! ## Units
//!
//! N, mm, N·mm and MPa throughout.

pub mod beam;
pub mod fatigue;
pub mod registry;
pub mod section;
pub mod stress;

pub use beam::{cantilever_point_moment, fixed_fixed_uniform_end_moment, per_leg_force};

pub use fatigue::{
    basquin_admissible_stress,
    basquin_life,
    goodman_admissible_stress,
    goodman_envelope_mean,
};

pub use section::{
    extreme_fiber_distance,
    fillet_throat,
    perimeter_weld_area,
    round_hollow_area,
    round_hollow_moment_of_inertia,
    round_perimeter,
    square_hollow_area,
    square_hollow_moment_of_inertia,
    square_perimeter,
    two_fillet_weld_area,
    weld_throat_approx_moment_of_inertia,
    FILLET_THROAT_FACTOR,
};

pub use stress::{average_shear_stress, axial_stress, bending_stress};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
