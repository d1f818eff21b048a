//! # Oil Data Model
//!
//! This module defines the chemical profile of a fatty oil as the recipe
//! calculations consume it: saponification value, iodine value, INS, the
//! named soap qualities, and the fatty-acid composition breakdown.
//!
//! ## Core Concepts
//!
//! - **SAP value**: mass of lye required to saponify a unit mass of the
//!   oil, stored on the KOH basis and scaled per soap type by the recipe.
//! - **Properties**: named quality contributions (hardness, cleansing,
//!   conditioning, bubbly, creamy, ...) aggregated over a blend.
//! - **Breakdown**: per fatty acid share of the oil's composition, as
//!   ratios in 0..1.
//!
//! Oils are immutable from the recipe's perspective. Missing numeric
//! fields in external data deserialize to NaN and missing maps to empty
//! maps, so incomplete catalog entries degrade the derived summary instead
//! of failing the load.
//!
//! ## Usage
//!
//! ```rust
//! use saponify::oil_model::Oil;
//!
//! let olive = Oil::new(1, "Olive Oil")
//!     .with_sap(0.190)
//!     .with_iodine(85.0)
//!     .with_ins(105.0)
//!     .with_property("hardness", 17.0)
//!     .with_fatty_acid("oleic", 0.69);
//!
//! assert_eq!(olive.sap, 0.190);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

fn missing_value() -> f64 {
    f64::NAN
}

/// Chemical profile of a single fatty oil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oil {
    /// Catalog identifier, unique within an oil store
    pub id: u32,

    /// Display name (e.g., "Olive Oil", "Coconut Oil, 76 deg")
    #[serde(default)]
    pub name: String,

    /// Saponification value on the KOH basis
    #[serde(default = "missing_value")]
    pub sap: f64,

    /// Iodine value
    #[serde(default = "missing_value")]
    pub iodine: f64,

    /// INS quality index
    #[serde(default = "missing_value")]
    pub ins: f64,

    /// Named soap quality contributions (hardness, cleansing, ...)
    #[serde(default)]
    pub properties: HashMap<String, f64>,

    /// Fatty-acid composition as name -> ratio in 0..1
    #[serde(default)]
    pub breakdown: HashMap<String, f64>,
}

impl Oil {
    /// Create a new oil with a name only; numeric fields start as NaN
    /// until filled in, matching how an incomplete catalog entry reads.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            sap: f64::NAN,
            iodine: f64::NAN,
            ins: f64::NAN,
            properties: HashMap::new(),
            breakdown: HashMap::new(),
        }
    }

    /// Set the saponification value
    pub fn with_sap(mut self, sap: f64) -> Self {
        self.sap = sap;
        self
    }

    /// Set the iodine value
    pub fn with_iodine(mut self, iodine: f64) -> Self {
        self.iodine = iodine;
        self
    }

    /// Set the INS index
    pub fn with_ins(mut self, ins: f64) -> Self {
        self.ins = ins;
        self
    }

    /// Add a named quality contribution
    pub fn with_property(mut self, name: &str, value: f64) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }

    /// Add a fatty acid share to the composition breakdown
    pub fn with_fatty_acid(mut self, name: &str, ratio: f64) -> Self {
        self.breakdown.insert(name.to_string(), ratio);
        self
    }

    /// Check whether the profile carries the numeric fields the lye
    /// arithmetic needs
    pub fn has_complete_profile(&self) -> bool {
        self.sap.is_finite() && self.iodine.is_finite() && self.ins.is_finite()
    }
}

impl fmt::Display for Oil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (sap {}, iodine {}, ins {})", self.name, self.sap, self.iodine, self.ins)
    }
}
