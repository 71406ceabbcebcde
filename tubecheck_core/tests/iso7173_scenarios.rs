//! End-to-end checks of the evaluation engine against hand-computed values.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use tubecheck_core::calculations::fatigue::{estimate_fatigue, goodman_check, BasquinCurve, LifeNormalization};
use tubecheck_core::calculations::verdict::classify_static;
use tubecheck_core::materials::{MaterialLimits, MaterialRatios};
use tubecheck_core::sections::{GeometryModel, ResistingAreaModel, WALL_THICKNESS_CATALOG_MM};
use tubecheck_core::{
    evaluate,
    sweep_thickness,
    EvaluationConfig,
    EvaluationInput,
    FatigueVerdict,
    LoadCaseSpec,
    StaticVerdict,
    TubeSection,
    TubeShape,
};

fn limits_310() -> MaterialLimits {
    MaterialLimits::from_ultimate(310.0, &MaterialRatios::default()).unwrap()
}

fn moment_only(shape: TubeShape, moment_nmm: f64) -> EvaluationInput {
    EvaluationInput {
        label: "scenario".to_string(),
        shape,
        outer_size_mm: 20.0,
        wall_thickness_mm: 0.9,
        load_case: LoadCaseSpec::Custom {
            moment_nmm,
            axial_force_n: 0.0,
            shear_force_n: 0.0,
        },
        ..Default::default()
    }
}

#[test]
fn square_tube_bending() {
    let result = evaluate(&moment_only(TubeShape::Square, 5000.0), &EvaluationConfig::default()).unwrap();

    let expected_i = (20.0_f64.powi(4) - 18.2_f64.powi(4)) / 12.0;
    assert_relative_eq!(result.properties.moment_of_inertia_mm4, expected_i, max_relative = 1e-12);
    assert_abs_diff_eq!(result.properties.moment_of_inertia_mm4, 4190.005, epsilon = 1e-3);
    assert_abs_diff_eq!(result.properties.extreme_fiber_distance_mm, 10.0);
    assert_abs_diff_eq!(result.governing_stress_mpa(), 11.933, epsilon = 1e-3);
    assert_eq!(result.static_verdict, StaticVerdict::Approved);
}

#[test]
fn round_tube_bending() {
    let result = evaluate(&moment_only(TubeShape::Round, 5000.0), &EvaluationConfig::default()).unwrap();

    assert_abs_diff_eq!(result.properties.moment_of_inertia_mm4, 2468.12, epsilon = 0.01);
    assert_abs_diff_eq!(result.governing_stress_mpa(), 20.258, epsilon = 1e-3);
    assert_eq!(result.fatigue_verdict, FatigueVerdict::ResistsFatigue);
}

#[test]
fn material_limits_and_static_classes() {
    let limits = limits_310();
    assert_abs_diff_eq!(limits.se_mpa, 155.0);
    assert_abs_diff_eq!(limits.sy_mpa, 201.5, epsilon = 1e-9);

    assert_eq!(classify_static(180.0, &limits), StaticVerdict::Approved);
    assert_eq!(classify_static(250.0, &limits), StaticVerdict::Warning);
    assert_eq!(classify_static(310.0, &limits), StaticVerdict::Failed);
    assert_eq!(classify_static(-250.0, &limits), StaticVerdict::Warning);
}

#[test]
fn admissible_stress_at_50k_cycles() {
    let estimate = estimate_fatigue(
        100.0,
        &limits_310(),
        Some(50_000),
        &BasquinCurve::default(),
        LifeNormalization::Ultimate,
    );
    assert_abs_diff_eq!(estimate.admissible_stress_mpa, 282.2, epsilon = 0.05);
    assert!(estimate.advisories.is_empty());
}

#[test]
fn life_at_100_mpa() {
    let life = BasquinCurve::default()
        .life(100.0, &limits_310(), LifeNormalization::Ultimate)
        .unwrap();
    assert_relative_eq!(life, 1.0e6 * 3.1_f64.powi(5), max_relative = 1e-9);
    assert_relative_eq!(life, 2.863e8, max_relative = 1e-3);
}

#[test]
fn endurance_life_inverts_admissible_stress() {
    let curve = BasquinCurve::default();
    let limits = limits_310();
    for cycles in [12_500.0, 100_000.0, 2.0e6] {
        let sigma = curve.admissible_stress(limits.se_mpa, cycles);
        let life = curve.life(sigma, &limits, LifeNormalization::Endurance).unwrap();
        assert_relative_eq!(life, cycles, max_relative = 1e-9);
    }
}

#[test]
fn goodman_admissible_with_unit_safety_factor() {
    let check = goodman_check(11.93, &limits_310(), 1.0, 100);
    assert_abs_diff_eq!(check.admissible_stress_mpa, 310.0, epsilon = 1e-9);
    assert!(check.approved);

    let first = check.envelope.first().unwrap();
    let last = check.envelope.last().unwrap();
    assert_abs_diff_eq!(first.mean_mpa, 155.0);
    assert_abs_diff_eq!(last.alternating_mpa, 310.0);
    assert_abs_diff_eq!(last.mean_mpa, 0.0);
}

#[test]
fn short_life_target_falls_back_to_ultimate() {
    let mut input = moment_only(TubeShape::Square, 5000.0);
    input.target_cycles = Some(5_000);
    let result = evaluate(&input, &EvaluationConfig::default()).unwrap();

    assert_abs_diff_eq!(result.fatigue.admissible_stress_mpa, 447.2, epsilon = 0.1);
    assert!(result.fatigue.is_out_of_model_range());
    assert_abs_diff_eq!(result.fatigue.fatigue_limit_mpa, 310.0);
    assert_eq!(result.fatigue_verdict, FatigueVerdict::ResistsFatigue);
}

#[test]
fn thicker_wall_lowers_stress_and_raises_area() {
    let mut previous_area = 0.0;
    for t in WALL_THICKNESS_CATALOG_MM {
        let section = TubeSection::new(TubeShape::Square, 20.0, t).unwrap();
        let area = ResistingAreaModel::TubeWall.area_mm2(&section, None).unwrap();
        assert!(area > previous_area);
        previous_area = area;
    }

    let sweep = sweep_thickness(&moment_only(TubeShape::Round, 20_000.0), &EvaluationConfig::default()).unwrap();
    let stresses: Vec<f64> = sweep.points.iter().filter_map(|p| p.governing_stress_mpa).collect();
    assert_eq!(stresses.len(), WALL_THICKNESS_CATALOG_MM.len());
    assert!(stresses.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn inertia_positive_for_valid_sections() {
    for shape in TubeShape::ALL {
        for outer in [8.0, 15.9, 20.0, 25.4, 31.75] {
            for t in WALL_THICKNESS_CATALOG_MM {
                if let Ok(section) = TubeSection::new(shape, outer, t) {
                    assert!(section.moment_of_inertia_mm4(GeometryModel::Standard) > 0.0);
                }
            }
        }
    }
}

#[test]
fn wall_at_half_outer_is_invalid() {
    let err = TubeSection::new(TubeShape::Square, 20.0, 10.0).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    assert!(TubeSection::new(TubeShape::Round, 20.0, 9.99).is_ok());

    let input = EvaluationInput {
        wall_thickness_mm: 10.0,
        ..Default::default()
    };
    let err = evaluate(&input, &EvaluationConfig::default()).unwrap_err();
    assert!(err.is_geometry_error());
}

#[test]
fn inclined_chair_on_standard_tube() {
    let result = evaluate(&EvaluationInput::default(), &EvaluationConfig::default()).unwrap();
    // 114 710 N·mm × 10 mm / 4190.005 mm⁴
    assert_abs_diff_eq!(result.governing_stress_mpa(), 273.77, epsilon = 0.01);
    assert_eq!(result.static_verdict, StaticVerdict::Warning);
    assert_eq!(result.fatigue_verdict, FatigueVerdict::FailsFatigue);
    assert!(!result.passes());
}
