//! # Tubecheck CLI
//!
//! Command line front end for `tubecheck_core`: evaluates one tube from flags
//! or a JSON input file, sweeps the thickness catalog, and lists the catalogs
//! and the equation registry.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tubecheck_core::equations::generate_equations_markdown;
use tubecheck_core::loads::TARGET_CYCLES_CATALOG;
use tubecheck_core::report::{render, render_sweep_text, ReportFormat};
use tubecheck_core::sections::WALL_THICKNESS_CATALOG_MM;
use tubecheck_core::{
    evaluate,
    load_config,
    load_input,
    save_report,
    sweep_thickness,
    CalcError,
    EvaluationConfig,
    EvaluationInput,
    LoadCaseSpec,
    SteelGrade,
    TubeShape,
};

/// Static and fatigue check of chair frame tubes (ISO 7173)
#[derive(Parser, Debug)]
#[command(name = "tubecheck", version, about, long_about = None)]
struct Cli {
    /// Evaluation configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline stages (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one tube under one load case
    Evaluate {
        #[command(flatten)]
        tube: TubeArgs,

        /// Report format: text, json or html
        #[arg(short, long, default_value = "text", value_parser = parse_format)]
        format: ReportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Governing stress across the wall thickness catalog
    Sweep {
        #[command(flatten)]
        tube: TubeArgs,

        /// Print the sweep as JSON
        #[arg(long)]
        json: bool,
    },
    /// List thickness, cycle, steel grade and load case catalogs
    Catalog,
    /// List the equation registry
    Equations,
}

/// Tube description, from a JSON file or from flags
#[derive(Args, Debug)]
struct TubeArgs {
    /// Evaluation input (JSON); flags are ignored when given
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long)]
    label: Option<String>,

    /// square or round
    #[arg(long, default_value = "square")]
    shape: String,

    /// Outer width or diameter (mm)
    #[arg(long, default_value_t = 20.0)]
    outer: f64,

    /// Wall thickness (mm)
    #[arg(short = 't', long, default_value_t = 0.90)]
    thickness: f64,

    /// SAE 1006, 1008, 1010, 1020 or an ultimate strength such as "420 MPa"
    #[arg(long, default_value = "1008")]
    grade: String,

    /// Target life in cycles
    #[arg(long)]
    cycles: Option<u64>,

    /// Weld bead width (mm)
    #[arg(long)]
    bead_width: Option<f64>,

    /// Load case name, e.g. inclined-chair or backrest-push
    #[arg(long = "case", default_value = "inclined-chair")]
    load_case: String,

    /// Seat height for backrest cases (mm)
    #[arg(long)]
    seat_height: Option<f64>,

    /// Backrest height for backrest cases (mm)
    #[arg(long)]
    backrest_height: Option<f64>,

    /// Bending moment for the custom case (N·mm)
    #[arg(long)]
    moment: Option<f64>,

    /// Axial force for the custom case (N)
    #[arg(long)]
    axial: Option<f64>,

    /// Shear force for the custom case (N)
    #[arg(long)]
    shear: Option<f64>,
}

impl TubeArgs {
    fn to_input(&self) -> Result<EvaluationInput> {
        if let Some(path) = &self.input {
            return load_input(path).with_context(|| format!("Failed to load input {}", path.display()));
        }

        Ok(EvaluationInput {
            label: self.label.clone().unwrap_or_default(),
            shape: TubeShape::from_str_flexible(&self.shape)?,
            outer_size_mm: self.outer,
            wall_thickness_mm: self.thickness,
            steel_grade: SteelGrade::from_str_flexible(&self.grade)?,
            target_cycles: self.cycles,
            weld_bead_width_mm: self.bead_width,
            load_case: self.load_case_spec()?,
        })
    }

    fn load_case_spec(&self) -> Result<LoadCaseSpec> {
        let custom_loads = self.moment.is_some() || self.axial.is_some() || self.shear.is_some();
        let mut spec = LoadCaseSpec::from_name(&self.load_case)?;

        match &mut spec {
            LoadCaseSpec::Custom {
                moment_nmm,
                axial_force_n,
                shear_force_n,
            } => {
                *moment_nmm = self.moment.unwrap_or(0.0);
                *axial_force_n = self.axial.unwrap_or(0.0);
                *shear_force_n = self.shear.unwrap_or(0.0);
            }
            LoadCaseSpec::BackrestPush {
                seat_height_mm,
                backrest_height_mm,
                ..
            }
            | LoadCaseSpec::SeatAndBackrest {
                seat_height_mm,
                backrest_height_mm,
                ..
            } => {
                *seat_height_mm = self.seat_height;
                *backrest_height_mm = self.backrest_height;
            }
            _ => {}
        }

        if custom_loads && !matches!(spec, LoadCaseSpec::Custom { .. }) {
            anyhow::bail!("--moment, --axial and --shear only apply to --case custom");
        }
        Ok(spec)
    }
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_str_flexible(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_from(path: Option<&Path>) -> Result<EvaluationConfig> {
    match path {
        Some(path) => {
            let config = load_config(path).with_context(|| format!("Failed to load config {}", path.display()))?;
            debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        None => Ok(EvaluationConfig::default()),
    }
}

fn print_catalog() {
    println!("Wall thickness (mm):");
    for t in WALL_THICKNESS_CATALOG_MM {
        println!("  {:.2}", t);
    }
    println!();
    println!("Target cycles:");
    for n in TARGET_CYCLES_CATALOG {
        println!("  {}", n);
    }
    println!();
    println!("Steel grades:");
    for grade in SteelGrade::ALL {
        println!("  {:<12} Sut = {:.0} MPa", grade.display_name(), grade.ultimate_mpa());
    }
    println!();
    println!("Load cases:");
    for spec in LoadCaseSpec::catalog() {
        println!("  {}", spec.display_name());
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = config_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Evaluate { tube, format, output } => {
            let input = tube.to_input()?;
            let result = evaluate(&input, &config)?;
            let report = render(&result, format)?;

            match output {
                Some(path) => {
                    save_report(&report, &path)
                        .with_context(|| format!("Failed to write report {}", path.display()))?;
                    info!(path = %path.display(), "report written");
                    eprintln!(
                        "{}: {} / {}",
                        path.display(),
                        result.static_verdict.display_name(),
                        result.fatigue_verdict.display_name()
                    );
                }
                None => print!("{}", report),
            }
            Ok(result.passes())
        }
        Commands::Sweep { tube, json } => {
            let input = tube.to_input()?;
            let sweep = sweep_thickness(&input, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sweep)?);
            } else {
                print!("{}", render_sweep_text(&sweep));
                match sweep.thinnest_approved() {
                    Some(p) => println!("\nThinnest approved wall: {:.2} mm", p.wall_thickness_mm),
                    None => println!("\nNo catalog wall is approved"),
                }
            }
            Ok(true)
        }
        Commands::Catalog => {
            print_catalog();
            Ok(true)
        }
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        // Evaluation completed but the tube does not pass
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string(calc) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
