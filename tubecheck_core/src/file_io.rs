//! # File I/O Module
//!
//! Reads configuration (TOML) and evaluation inputs (JSON), and writes reports.
//!
//! - **Atomic saves**: reports are written to a `.tmp` sibling, synced, then
//!   renamed over the target so a crash never leaves a half-written report
//! - **Validation on load**: configuration is validated before it is returned
//!
//! ## Example
//!
//! ```rust,no_run
//! use tubecheck_core::calculations::evaluate;
//! use tubecheck_core::file_io::{load_config, load_input, save_report};
//! use tubecheck_core::report::render_text;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("tubecheck.toml"))?;
//! let input = load_input(Path::new("rear_leg.json"))?;
//! let result = evaluate(&input, &config)?;
//! save_report(&render_text(&result), Path::new("rear_leg.txt"))?;
//! # Ok::<(), tubecheck_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::calculations::evaluation::EvaluationInput;
use crate::errors::{CalcError, CalcResult};
use crate::settings::EvaluationConfig;

fn read_to_string(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

/// Load and validate an [`EvaluationConfig`] from a TOML file.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid TOML or unknown value
/// * `Err(CalcError::InvalidInput)` - A value failed validation
pub fn load_config(path: &Path) -> CalcResult<EvaluationConfig> {
    let contents = read_to_string(path)?;
    EvaluationConfig::from_toml_str(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("{} ({})", reason, path.display()),
        },
        other => other,
    })
}

/// Load an [`EvaluationInput`] from a JSON file.
pub fn load_input(path: &Path) -> CalcResult<EvaluationInput> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Temporary sibling used during an atomic write, e.g. `report.html.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a rendered report atomically.
pub fn save_report(contents: &str, path: &Path) -> CalcResult<()> {
    let tmp_path = temp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_file(name: &str) -> PathBuf {
        temp_dir().join(format!("tubecheck_test_{}", name))
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path_for(Path::new("/out/report.html")),
            Path::new("/out/report.html.tmp")
        );
    }

    #[test]
    fn test_save_report_roundtrip() {
        let path = temp_file("report.txt");
        save_report("APPROVED\n", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "APPROVED\n");
        assert!(!temp_path_for(&path).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_config() {
        let path = temp_file("config.toml");
        fs::write(&path, "[fatigue]\nexponent = 6.0\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.fatigue.exponent, 6.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_input() {
        let path = temp_file("input.json");
        fs::write(
            &path,
            r#"{"shape":"Square","outer_size_mm":20.0,"wall_thickness_mm":0.9,"load_case":{"case":"InclinedChair"}}"#,
        )
        .unwrap();
        let input = load_input(&path).unwrap();
        assert_eq!(input.outer_size_mm, 20.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_input(Path::new("/nonexistent/tubecheck_input.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let path = temp_file("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }
}
