//! Standard Wall Thicknesses
//!
//! Wall thicknesses of the light-gauge welded tube offered for chair frames.
//! The thickness sweep evaluates each of these; with catalog enforcement on,
//! an evaluation rejects any other value.

use crate::errors::{CalcError, CalcResult};

/// Catalog wall thicknesses (mm), thinnest first
pub const WALL_THICKNESS_CATALOG_MM: [f64; 7] = [0.60, 0.75, 0.90, 1.06, 1.20, 1.50, 1.90];

/// Thicknesses closer than this are treated as the same gauge
const GAUGE_TOLERANCE_MM: f64 = 1e-6;

/// True when `thickness_mm` matches a catalog gauge
pub fn is_catalog_thickness(thickness_mm: f64) -> bool {
    WALL_THICKNESS_CATALOG_MM
        .iter()
        .any(|gauge| (gauge - thickness_mm).abs() < GAUGE_TOLERANCE_MM)
}

/// Fail with `NotInCatalog` unless `thickness_mm` is a catalog gauge
pub fn require_catalog_thickness(thickness_mm: f64) -> CalcResult<()> {
    if is_catalog_thickness(thickness_mm) {
        Ok(())
    } else {
        Err(CalcError::not_in_catalog("wall thickness", format!("{} mm", thickness_mm)))
    }
}

/// Next catalog gauge at or above `thickness_mm`, if any
pub fn next_gauge_up(thickness_mm: f64) -> Option<f64> {
    WALL_THICKNESS_CATALOG_MM
        .iter()
        .copied()
        .find(|gauge| *gauge + GAUGE_TOLERANCE_MM >= thickness_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted() {
        assert!(WALL_THICKNESS_CATALOG_MM.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_membership() {
        assert!(is_catalog_thickness(0.9));
        assert!(is_catalog_thickness(1.06));
        assert!(!is_catalog_thickness(0.8));
    }

    #[test]
    fn test_require() {
        assert!(require_catalog_thickness(1.5).is_ok());
        let err = require_catalog_thickness(2.0).unwrap_err();
        assert_eq!(err.error_code(), "NOT_IN_CATALOG");
    }

    #[test]
    fn test_next_gauge_up() {
        assert_eq!(next_gauge_up(0.8), Some(0.90));
        assert_eq!(next_gauge_up(0.9), Some(0.90));
        assert_eq!(next_gauge_up(2.5), None);
    }
}
