//! # Fatty Acid Classification Module
//!
//! This module classifies the fatty acids found in oil composition
//! breakdowns as saturated or unsaturated. The classification backs the
//! saturation summary a recipe reports for its oil blend.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Saturation class of a fatty acid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    /// Saturated fatty acids
    Saturated,
    /// Unsaturated fatty acids
    Unsaturated,
}

impl Saturation {
    /// Get a human-readable string representation of the class
    pub fn display_name(&self) -> &'static str {
        match self {
            Saturation::Saturated => "saturated",
            Saturation::Unsaturated => "unsaturated",
        }
    }
}

// Lazy static classification table to avoid rebuilding the map per lookup
lazy_static! {
    static ref FATTY_ACID_TYPES: HashMap<&'static str, Saturation> = {
        let mut map = HashMap::new();

        map.insert("caprylic", Saturation::Saturated);
        map.insert("capric", Saturation::Saturated);
        map.insert("lauric", Saturation::Saturated);
        map.insert("myristic", Saturation::Saturated);
        map.insert("palmitic", Saturation::Saturated);
        map.insert("stearic", Saturation::Saturated);

        map.insert("ricinoleic", Saturation::Unsaturated);
        map.insert("oleic", Saturation::Unsaturated);
        map.insert("linoleic", Saturation::Unsaturated);
        map.insert("linolenic", Saturation::Unsaturated);
        map.insert("eicosenoic", Saturation::Unsaturated);
        map.insert("docosenoid", Saturation::Unsaturated);
        map.insert("erucic", Saturation::Unsaturated);
        map.insert("docosadienoic", Saturation::Unsaturated);

        map
    };
}

/// Classify a fatty acid by name.
///
/// Returns `None` for names outside the classification table; callers
/// aggregating by saturation drop those contributions rather than
/// inventing a bucket for them.
pub fn classify_fatty_type(fatty_acid: &str) -> Option<Saturation> {
    FATTY_ACID_TYPES.get(fatty_acid).copied()
}
