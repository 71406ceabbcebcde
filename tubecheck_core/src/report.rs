//! # Report Rendering
//!
//! Flat text, HTML and JSON renderings of an [`EvaluationResult`]. Rendering
//! only formats numbers the evaluation already produced.
//!
//! ## Example
//!
//! ```rust
//! use tubecheck_core::calculations::{evaluate, EvaluationInput};
//! use tubecheck_core::report::{render, ReportFormat};
//! use tubecheck_core::settings::EvaluationConfig;
//!
//! let result = evaluate(&EvaluationInput::default(), &EvaluationConfig::default()).unwrap();
//! let text = render(&result, ReportFormat::Text).unwrap();
//! assert!(text.contains("Static verdict"));
//! ```

use std::fmt::{self, Write};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::calculations::evaluation::EvaluationResult;
use crate::calculations::sweep::ThicknessSweep;
use crate::calculations::verdict::StaticVerdict;
use crate::errors::{CalcError, CalcResult};
use crate::units::Megapascals;

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Text, ReportFormat::Json, ReportFormat::Html];

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "html" | "htm" => Ok(ReportFormat::Html),
            _ => Err(CalcError::invalid_input("format", s, "Expected text, json or html")),
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        }
    }
}

/// Render in the requested format
pub fn render(result: &EvaluationResult, format: ReportFormat) -> CalcResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(result)),
        ReportFormat::Json => render_json(result),
        ReportFormat::Html => Ok(render_html(result)),
    }
}

pub fn render_json(result: &EvaluationResult) -> CalcResult<String> {
    result.to_json()
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

fn title(result: &EvaluationResult) -> String {
    if result.label.is_empty() {
        format!("{} evaluation", result.section.shape().display_name())
    } else {
        result.label.clone()
    }
}

fn fmt_life(cycles: Option<f64>) -> String {
    match cycles {
        Some(n) => format!("{:.3e} cycles", n),
        None => "unbounded".to_string(),
    }
}

// =============================================================================
// Text
// =============================================================================

/// Plain-text report
pub fn render_text(result: &EvaluationResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_text(&mut out, result, &today());
    out
}

fn write_text(out: &mut String, r: &EvaluationResult, date: &str) -> fmt::Result {
    let s = &r.section;

    writeln!(out, "{}", title(r))?;
    writeln!(out, "ISO 7173 tube check, {}", date)?;
    writeln!(out)?;

    writeln!(out, "Section")?;
    writeln!(out, "  Shape:              {}", s.shape().display_name())?;
    let outer_label = format!("Outer {}:", s.shape().outer_dimension_name());
    writeln!(out, "  {:<20}{:.2} mm", outer_label, s.outer_size_mm())?;
    writeln!(out, "  Wall thickness:     {:.2} mm", s.wall_thickness_mm())?;
    writeln!(out, "  I:                  {:.2} mm⁴", r.properties.moment_of_inertia_mm4)?;
    writeln!(out, "  c:                  {:.2} mm", r.properties.extreme_fiber_distance_mm)?;
    if let (Some(model), Some(area)) = (r.resisting_area_model, r.resisting_area_mm2) {
        writeln!(out, "  Resisting area:     {:.2} mm² ({})", area, model.display_name())?;
    }
    writeln!(out)?;

    writeln!(out, "Load: {}", r.load.name)?;
    for source in &r.load.moment_sources {
        writeln!(out, "  {} -> {:.0} N·mm", source.describe(), source.moment_nmm())?;
    }
    writeln!(out, "  Total moment:       {:.0} N·mm", r.total_moment_nmm)?;
    if r.load.has_axial() {
        writeln!(out, "  Axial force:        {:.1} N", r.load.axial_force_n)?;
    }
    if r.load.has_shear() {
        writeln!(out, "  Shear force:        {:.1} N", r.load.shear_force_n)?;
    }
    writeln!(out)?;

    writeln!(out, "Stresses ({})", r.stresses.critical_fiber.display_name())?;
    for c in &r.stresses.components {
        writeln!(out, "  {:<18}  {}", c.mechanism.display_name(), Megapascals(c.value_mpa))?;
    }
    writeln!(out, "  Governing:          {}", Megapascals(r.stresses.governing_normal_mpa))?;
    writeln!(out)?;

    writeln!(out, "Material")?;
    writeln!(out, "  Sut:                {}", Megapascals(r.limits.sut_mpa))?;
    writeln!(out, "  Sy:                 {}", Megapascals(r.limits.sy_mpa))?;
    writeln!(out, "  Se:                 {}", Megapascals(r.limits.se_mpa))?;
    writeln!(out)?;

    writeln!(out, "Fatigue")?;
    writeln!(out, "  Target:             {:.0} cycles", r.fatigue.target_cycles)?;
    writeln!(out, "  Admissible stress:  {}", Megapascals(r.fatigue.admissible_stress_mpa))?;
    writeln!(out, "  Estimated life:     {}", fmt_life(r.fatigue.estimated_life_cycles))?;
    writeln!(
        out,
        "  Goodman (n = {}):    {} {}",
        r.goodman.safety_factor,
        Megapascals(r.goodman.admissible_stress_mpa),
        if r.goodman.approved { "OK" } else { "EXCEEDED" }
    )?;
    for advisory in &r.fatigue.advisories {
        writeln!(out, "  Note: {}", advisory.message())?;
    }
    writeln!(out)?;

    writeln!(out, "Static verdict:  {} ({})", r.static_verdict.display_name(), r.static_verdict.description())?;
    writeln!(out, "Fatigue verdict: {}", r.fatigue_verdict.display_name())?;
    if let Some(shear) = r.shear_check {
        writeln!(
            out,
            "Shear check:     {} ({} of {})",
            if shear.passes { "OK" } else { "EXCEEDED" },
            Megapascals(shear.stress_mpa),
            Megapascals(shear.allowable_mpa)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Equations used")?;
    for eq in r.equations.unique_equations() {
        let meta = eq.metadata();
        writeln!(out, "  {:<40} {}  [{}]", meta.name, meta.formula_plain, meta.reference.citation())?;
    }

    Ok(())
}

/// Plain-text table of a thickness sweep
pub fn render_sweep_text(sweep: &ThicknessSweep) -> String {
    let mut out = String::new();
    let _ = write_sweep(&mut out, sweep);
    out
}

fn write_sweep(out: &mut String, sweep: &ThicknessSweep) -> fmt::Result {
    writeln!(
        out,
        "{} {:.2} mm, {}",
        sweep.shape.display_name(),
        sweep.outer_size_mm,
        sweep.load_case
    )?;
    writeln!(out, "  {:>8}  {:>12}  {}", "t (mm)", "σ (MPa)", "Verdict")?;
    for p in &sweep.points {
        let marker = if p.selected { "*" } else { " " };
        match (p.governing_stress_mpa, p.static_verdict) {
            (Some(sigma), Some(verdict)) => writeln!(
                out,
                "{} {:>8.2}  {:>12.2}  {}",
                marker,
                p.wall_thickness_mm,
                sigma,
                verdict.display_name()
            )?,
            _ => writeln!(out, "{} {:>8.2}  {:>12}  {}", marker, p.wall_thickness_mm, "-", "invalid geometry")?,
        }
    }
    Ok(())
}

// =============================================================================
// HTML
// =============================================================================

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin-bottom: 1.5em; }
td, th { border: 1px solid #999; padding: 4px 10px; text-align: left; }
.pass { color: #1a7f37; font-weight: bold; }
.warn { color: #b08800; font-weight: bold; }
.fail { color: #cf222e; font-weight: bold; }
</style>
</head>
<body>
<h1>{{TITLE}}</h1>
<p>ISO 7173 tube check, {{DATE}}</p>

<h2>Section</h2>
<table>
<tr><td>Shape</td><td>{{SHAPE}}</td></tr>
<tr><td>Outer size</td><td>{{OUTER_MM}} mm</td></tr>
<tr><td>Wall thickness</td><td>{{WALL_MM}} mm</td></tr>
<tr><td>I</td><td>{{INERTIA}} mm⁴</td></tr>
<tr><td>c</td><td>{{FIBER}} mm</td></tr>
<tr><td>Resisting area</td><td>{{AREA}}</td></tr>
</table>

<h2>Load: {{LOAD_NAME}}</h2>
<table>
<tr><td>Total moment</td><td>{{MOMENT}} N·mm</td></tr>
<tr><td>Axial force</td><td>{{AXIAL}} N</td></tr>
<tr><td>Shear force</td><td>{{SHEAR}} N</td></tr>
</table>

<h2>Stresses ({{FIBER_FACE}})</h2>
<table>
<tr><th>Mechanism</th><th>Stress (MPa)</th></tr>
{{STRESS_ROWS}}
<tr><th>Governing</th><th>{{GOVERNING}}</th></tr>
</table>

<h2>Material</h2>
<table>
<tr><td>Sut</td><td>{{SUT}} MPa</td></tr>
<tr><td>Sy</td><td>{{SY}} MPa</td></tr>
<tr><td>Se</td><td>{{SE}} MPa</td></tr>
</table>

<h2>Fatigue</h2>
<table>
<tr><td>Target cycles</td><td>{{TARGET}}</td></tr>
<tr><td>Admissible stress</td><td>{{ADMISSIBLE}} MPa</td></tr>
<tr><td>Estimated life</td><td>{{LIFE}}</td></tr>
<tr><td>Goodman admissible (n = {{GOODMAN_N}})</td><td>{{GOODMAN}} MPa</td></tr>
</table>
{{ADVISORIES}}

<h2>Verdicts</h2>
<table>
<tr><td>Static</td><td class="{{STATIC_CLASS}}">{{STATIC}}</td></tr>
<tr><td>Fatigue</td><td class="{{FATIGUE_CLASS}}">{{FATIGUE}}</td></tr>
<tr><td>Shear</td><td>{{SHEAR_CHECK}}</td></tr>
</table>

<h2>Equations</h2>
<table>
<tr><th>Name</th><th>Formula</th><th>Reference</th></tr>
{{EQUATION_ROWS}}
</table>
</body>
</html>
"#;

/// Escape special HTML characters in user-provided text
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn build_stress_rows(r: &EvaluationResult) -> String {
    r.stresses
        .components
        .iter()
        .map(|c| format!("<tr><td>{}</td><td>{:.2}</td></tr>", c.mechanism.display_name(), c.value_mpa))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_equation_rows(r: &EvaluationResult) -> String {
    r.equations
        .unique_equations()
        .iter()
        .map(|eq| {
            let meta = eq.metadata();
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(meta.name),
                escape_html(meta.formula_plain),
                escape_html(&meta.reference.citation())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// HTML report
pub fn render_html(r: &EvaluationResult) -> String {
    let static_class = match r.static_verdict {
        StaticVerdict::Approved => "pass",
        StaticVerdict::Warning => "warn",
        StaticVerdict::Failed => "fail",
    };
    let area = match (r.resisting_area_model, r.resisting_area_mm2) {
        (Some(model), Some(a)) => format!("{:.2} mm² ({})", a, model.display_name()),
        _ => "not used".to_string(),
    };
    let shear = match r.shear_check {
        Some(s) if s.passes => format!("OK ({:.2} of {:.2} MPa)", s.stress_mpa, s.allowable_mpa),
        Some(s) => format!("EXCEEDED ({:.2} of {:.2} MPa)", s.stress_mpa, s.allowable_mpa),
        None => "no shear load".to_string(),
    };
    let advisories = r
        .fatigue
        .advisories
        .iter()
        .map(|a| format!("<p class=\"warn\">{}</p>", escape_html(&a.message())))
        .collect::<Vec<_>>()
        .join("\n");

    HTML_TEMPLATE
        .replace("{{TITLE}}", &escape_html(&title(r)))
        .replace("{{DATE}}", &today())
        .replace("{{SHAPE}}", r.section.shape().display_name())
        .replace("{{OUTER_MM}}", &format!("{:.2}", r.section.outer_size_mm()))
        .replace("{{WALL_MM}}", &format!("{:.2}", r.section.wall_thickness_mm()))
        .replace("{{INERTIA}}", &format!("{:.2}", r.properties.moment_of_inertia_mm4))
        .replace("{{FIBER}}", &format!("{:.2}", r.properties.extreme_fiber_distance_mm))
        .replace("{{AREA}}", &area)
        .replace("{{LOAD_NAME}}", &escape_html(&r.load.name))
        .replace("{{MOMENT}}", &format!("{:.0}", r.total_moment_nmm))
        .replace("{{AXIAL}}", &format!("{:.1}", r.load.axial_force_n))
        .replace("{{SHEAR}}", &format!("{:.1}", r.load.shear_force_n))
        .replace("{{FIBER_FACE}}", r.stresses.critical_fiber.display_name())
        .replace("{{STRESS_ROWS}}", &build_stress_rows(r))
        .replace("{{GOVERNING}}", &format!("{:.2}", r.stresses.governing_normal_mpa))
        .replace("{{SUT}}", &format!("{:.1}", r.limits.sut_mpa))
        .replace("{{SY}}", &format!("{:.1}", r.limits.sy_mpa))
        .replace("{{SE}}", &format!("{:.1}", r.limits.se_mpa))
        .replace("{{TARGET}}", &format!("{:.0}", r.fatigue.target_cycles))
        .replace("{{ADMISSIBLE}}", &format!("{:.2}", r.fatigue.admissible_stress_mpa))
        .replace("{{LIFE}}", &fmt_life(r.fatigue.estimated_life_cycles))
        .replace("{{GOODMAN_N}}", &r.goodman.safety_factor.to_string())
        .replace("{{GOODMAN}}", &format!("{:.2}", r.goodman.admissible_stress_mpa))
        .replace("{{ADVISORIES}}", &advisories)
        .replace("{{STATIC_CLASS}}", static_class)
        .replace("{{STATIC}}", r.static_verdict.display_name())
        .replace("{{FATIGUE_CLASS}}", if r.fatigue_verdict.passes() { "pass" } else { "fail" })
        .replace("{{FATIGUE}}", r.fatigue_verdict.display_name())
        .replace("{{SHEAR_CHECK}}", &shear)
        .replace("{{EQUATION_ROWS}}", &build_equation_rows(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::evaluation::{evaluate, EvaluationInput};
    use crate::calculations::sweep::sweep_thickness;
    use crate::loads::LoadCaseSpec;
    use crate::sections::TubeShape;
    use crate::settings::EvaluationConfig;

    fn result(label: &str, target: Option<u64>) -> EvaluationResult {
        let input = EvaluationInput {
            label: label.to_string(),
            target_cycles: target,
            load_case: LoadCaseSpec::Custom {
                moment_nmm: 5000.0,
                axial_force_n: 0.0,
                shear_force_n: 0.0,
            },
            ..Default::default()
        };
        evaluate(&input, &EvaluationConfig::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let mut out = String::new();
        write_text(&mut out, &result("Rear leg", None), "2026-01-01").unwrap();
        assert!(out.starts_with("Rear leg\n"));
        assert!(out.contains("2026-01-01"));
        assert!(out.contains("11.93 MPa"));
        assert!(out.contains("APPROVED"));
        assert!(out.contains("Bending Stress"));
    }

    #[test]
    fn test_text_report_section_columns_align() {
        for shape in TubeShape::ALL {
            let input = EvaluationInput {
                shape,
                ..Default::default()
            };
            let r = evaluate(&input, &EvaluationConfig::default()).unwrap();
            let mut out = String::new();
            write_text(&mut out, &r, "2026-01-01").unwrap();

            let value_column = |prefix: &str| {
                let line = out.lines().find(|l| l.starts_with(prefix)).unwrap();
                line.len() - line[2..].trim_start_matches(|c: char| !c.is_ascii_digit()).len()
            };
            assert_eq!(value_column("  Outer"), value_column("  Wall thickness"));
            assert_eq!(value_column("  Outer"), 22);
        }
    }

    #[test]
    fn test_text_report_lists_advisory() {
        let text = render_text(&result("", Some(5_000)));
        assert!(text.starts_with("Square tube evaluation"));
        assert!(text.contains("Note: Admissible stress"));
    }

    #[test]
    fn test_html_has_no_placeholders_left() {
        let html = render_html(&result("<Seat> & rail", None));
        assert!(!html.contains("{{"));
        assert!(html.contains("&lt;Seat&gt; &amp; rail"));
        assert!(html.contains("class=\"pass\""));
    }

    #[test]
    fn test_json_report() {
        let json = render(&result("j", None), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["static_verdict"], "Approved");
        assert_eq!(value["fatigue_verdict"], "ResistsFatigue");
    }

    #[test]
    fn test_sweep_table() {
        let sweep = sweep_thickness(&EvaluationInput::default(), &EvaluationConfig::default()).unwrap();
        let table = render_sweep_text(&sweep);
        assert_eq!(table.lines().count(), 2 + 7);
        assert!(table.contains("*     0.90"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ReportFormat::from_str_flexible("HTML").unwrap(), ReportFormat::Html);
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert!(ReportFormat::from_str_flexible("pdf").is_err());
    }
}
