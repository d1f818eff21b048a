//! # Weight Units Module
//!
//! This module defines the weight units a recipe can be entered in, the
//! per-unit factors used by the gram conversions, and the acceptance rules
//! for raw weight input.
//!
//! ## Core Concepts
//!
//! - **Unit**: the unit per-oil weights are entered in. `Percent` is the
//!   pseudo-unit that switches a recipe into percent mode, where weights
//!   are percentages of the recipe's total weight.
//! - **Raw weight input**: weights are stored exactly as typed, so partial
//!   numeric entry such as `"0."` or a lone `"."` survives a keystroke at
//!   a time. A lone `"."` has no numeric value and degrades arithmetic to
//!   NaN until the entry is completed.

use serde::{Deserialize, Serialize};

/// Weight units available for per-oil weights and the recipe total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Grams
    Gram,
    /// Kilograms
    Kilo,
    /// Pounds
    Pound,
    /// Ounces
    Ounce,
    /// Percent of total weight (percent-mode recipes)
    Percent,
}

impl Unit {
    /// Get a human-readable string representation of the unit
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilo => "kg",
            Unit::Pound => "lb",
            Unit::Ounce => "oz",
            Unit::Percent => "%",
        }
    }

    /// Per-unit factor applied by the weight conversions.
    ///
    /// `Percent` has no entry in the factor table; its factor is NaN and
    /// any conversion through it degrades to NaN rather than failing.
    pub fn grams_factor(&self) -> f64 {
        match self {
            Unit::Gram => 1.0,
            Unit::Kilo => 0.001,
            Unit::Pound => 0.00220462,
            Unit::Ounce => 0.035274,
            Unit::Percent => f64::NAN,
        }
    }

    /// Check if this is the percent pseudo-unit
    pub fn is_percent(&self) -> bool {
        matches!(self, Unit::Percent)
    }
}

/// Check whether a raw weight input may be stored.
///
/// Accepted inputs are the empty string (a cleared field), a lone `"."`
/// (partial decimal entry), or anything that parses to a finite number.
/// Everything else is rejected by the caller without touching state.
pub fn is_valid_weight_input(input: &str) -> bool {
    input.is_empty()
        || input == "."
        || input.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

/// Numeric interpretation of a stored raw weight.
///
/// Empty inputs count as zero. A stored `"."` has no numeric value and
/// yields NaN, which propagates through downstream arithmetic.
pub fn weight_input_value(input: &str) -> f64 {
    if input.is_empty() {
        0.0
    } else {
        input.parse::<f64>().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Unit::Gram.display_name(), "g");
        assert_eq!(Unit::Kilo.display_name(), "kg");
        assert_eq!(Unit::Pound.display_name(), "lb");
        assert_eq!(Unit::Ounce.display_name(), "oz");
        assert_eq!(Unit::Percent.display_name(), "%");
    }

    #[test]
    fn test_grams_factors() {
        assert_eq!(Unit::Gram.grams_factor(), 1.0);
        assert_eq!(Unit::Kilo.grams_factor(), 0.001);
        assert_eq!(Unit::Pound.grams_factor(), 0.00220462);
        assert_eq!(Unit::Ounce.grams_factor(), 0.035274);
        assert!(Unit::Percent.grams_factor().is_nan());
    }

    #[test]
    fn test_valid_weight_inputs() {
        assert!(is_valid_weight_input(""));
        assert!(is_valid_weight_input("."));
        assert!(is_valid_weight_input("0."));
        assert!(is_valid_weight_input(".5"));
        assert!(is_valid_weight_input("500"));
        assert!(is_valid_weight_input("12.75"));
        assert!(is_valid_weight_input("-3"));
        assert!(is_valid_weight_input("1e3"));
    }

    #[test]
    fn test_invalid_weight_inputs() {
        assert!(!is_valid_weight_input("abc"));
        assert!(!is_valid_weight_input("12g"));
        assert!(!is_valid_weight_input("1..2"));
        assert!(!is_valid_weight_input("inf"));
        assert!(!is_valid_weight_input("NaN"));
    }

    #[test]
    fn test_weight_input_values() {
        assert_eq!(weight_input_value(""), 0.0);
        assert_eq!(weight_input_value("500"), 500.0);
        assert_eq!(weight_input_value("0."), 0.0);
        assert_eq!(weight_input_value(".5"), 0.5);
        assert!(weight_input_value(".").is_nan());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Unit::Gram).unwrap(), "\"gram\"");
        assert_eq!(serde_json::to_string(&Unit::Percent).unwrap(), "\"percent\"");
        let unit: Unit = serde_json::from_str("\"pound\"").unwrap();
        assert_eq!(unit, Unit::Pound);
    }
}
