//! # Oil Store Module
//!
//! This module provides the oil lookup collaborator the recipe model
//! resolves ingredient ids against. The store is an in-memory catalog
//! keyed by oil id, built either from the built-in seed catalog or from a
//! JSON file supplied at startup.

use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::oil_model::Oil;
use crate::store_errors::StoreError;

/// In-memory oil catalog keyed by oil id
#[derive(Debug, Clone, Default)]
pub struct OilStore {
    oils: HashMap<u32, Oil>,
}

impl OilStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { oils: HashMap::new() }
    }

    /// Create a store seeded with the built-in catalog
    pub fn with_builtin_catalog() -> Self {
        let mut store = Self::new();
        for oil in builtin_catalog() {
            store.insert_oil(oil);
        }
        info!("Loaded built-in oil catalog with {} oils", store.len());
        store
    }

    /// Build a store from a JSON array of oils
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let oils: Vec<Oil> = serde_json::from_str(json)?;

        let mut store = Self::new();
        for oil in oils {
            let id = oil.id;
            if store.insert_oil(oil).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }

        info!("Loaded oil catalog with {} oils", store.len());
        Ok(store)
    }

    /// Build a store from a JSON catalog file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = read_catalog_file(path)?;
        Self::from_json_str(&json)
    }

    /// Insert an oil, returning the previous entry for its id if any
    pub fn insert_oil(&mut self, oil: Oil) -> Option<Oil> {
        self.oils.insert(oil.id, oil)
    }

    /// Look up an oil by its catalog id
    pub fn get_oil_by_id(&self, id: u32) -> Option<&Oil> {
        self.oils.get(&id)
    }

    /// Number of oils in the catalog
    pub fn len(&self) -> usize {
        self.oils.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.oils.is_empty()
    }

    /// All oils ordered by id
    pub fn oils(&self) -> Vec<&Oil> {
        let mut oils: Vec<&Oil> = self.oils.values().collect();
        oils.sort_by_key(|oil| oil.id);
        oils
    }
}

fn read_catalog_file(path: &Path) -> Result<String, StoreError> {
    let json: Result<String> = fs::read_to_string(path)
        .with_context(|| format!("Failed to read oil catalog at {}", path.display()));
    Ok(json?)
}

/// Built-in seed catalog of common soap-making oils.
///
/// SAP values are on the KOH basis; the recipe scales them per soap type.
pub fn builtin_catalog() -> Vec<Oil> {
    vec![
        Oil::new(1, "Olive Oil")
            .with_sap(0.190)
            .with_iodine(85.0)
            .with_ins(105.0)
            .with_property("hardness", 17.0)
            .with_property("cleansing", 0.0)
            .with_property("conditioning", 82.0)
            .with_property("bubbly", 0.0)
            .with_property("creamy", 17.0)
            .with_fatty_acid("oleic", 0.69)
            .with_fatty_acid("linoleic", 0.12)
            .with_fatty_acid("palmitic", 0.14)
            .with_fatty_acid("stearic", 0.03)
            .with_fatty_acid("linolenic", 0.01),
        Oil::new(2, "Coconut Oil, 76 deg")
            .with_sap(0.257)
            .with_iodine(10.0)
            .with_ins(258.0)
            .with_property("hardness", 79.0)
            .with_property("cleansing", 67.0)
            .with_property("conditioning", 10.0)
            .with_property("bubbly", 67.0)
            .with_property("creamy", 12.0)
            .with_fatty_acid("lauric", 0.48)
            .with_fatty_acid("myristic", 0.19)
            .with_fatty_acid("palmitic", 0.09)
            .with_fatty_acid("caprylic", 0.08)
            .with_fatty_acid("capric", 0.07)
            .with_fatty_acid("stearic", 0.03)
            .with_fatty_acid("oleic", 0.04)
            .with_fatty_acid("linoleic", 0.02),
        Oil::new(3, "Palm Oil")
            .with_sap(0.199)
            .with_iodine(53.0)
            .with_ins(145.0)
            .with_property("hardness", 50.0)
            .with_property("cleansing", 1.0)
            .with_property("conditioning", 49.0)
            .with_property("bubbly", 1.0)
            .with_property("creamy", 49.0)
            .with_fatty_acid("palmitic", 0.44)
            .with_fatty_acid("oleic", 0.39)
            .with_fatty_acid("linoleic", 0.10)
            .with_fatty_acid("stearic", 0.05)
            .with_fatty_acid("myristic", 0.01),
        Oil::new(4, "Castor Oil")
            .with_sap(0.180)
            .with_iodine(86.0)
            .with_ins(95.0)
            .with_property("hardness", 0.0)
            .with_property("cleansing", 0.0)
            .with_property("conditioning", 98.0)
            .with_property("bubbly", 90.0)
            .with_property("creamy", 90.0)
            .with_fatty_acid("ricinoleic", 0.90)
            .with_fatty_acid("oleic", 0.04)
            .with_fatty_acid("linoleic", 0.04),
        Oil::new(5, "Shea Butter")
            .with_sap(0.179)
            .with_iodine(59.0)
            .with_ins(116.0)
            .with_property("hardness", 45.0)
            .with_property("cleansing", 0.0)
            .with_property("conditioning", 54.0)
            .with_property("bubbly", 0.0)
            .with_property("creamy", 45.0)
            .with_fatty_acid("stearic", 0.40)
            .with_fatty_acid("oleic", 0.48)
            .with_fatty_acid("palmitic", 0.04)
            .with_fatty_acid("linoleic", 0.06),
        Oil::new(6, "Sweet Almond Oil")
            .with_sap(0.195)
            .with_iodine(99.0)
            .with_ins(97.0)
            .with_property("hardness", 6.0)
            .with_property("cleansing", 0.0)
            .with_property("conditioning", 89.0)
            .with_property("bubbly", 0.0)
            .with_property("creamy", 6.0)
            .with_fatty_acid("oleic", 0.71)
            .with_fatty_acid("linoleic", 0.18)
            .with_fatty_acid("palmitic", 0.07)
            .with_fatty_acid("stearic", 0.02),
        Oil::new(7, "Avocado Oil")
            .with_sap(0.186)
            .with_iodine(86.0)
            .with_ins(99.0)
            .with_property("hardness", 22.0)
            .with_property("cleansing", 0.0)
            .with_property("conditioning", 70.0)
            .with_property("bubbly", 0.0)
            .with_property("creamy", 22.0)
            .with_fatty_acid("oleic", 0.58)
            .with_fatty_acid("palmitic", 0.20)
            .with_fatty_acid("linoleic", 0.12)
            .with_fatty_acid("linolenic", 0.02)
            .with_fatty_acid("stearic", 0.02),
        Oil::new(8, "Sunflower Oil")
            .with_sap(0.189)
            .with_iodine(133.0)
            .with_ins(63.0)
            .with_property("hardness", 11.0)
            .with_property("cleansing", 0.0)
            .with_property("conditioning", 83.0)
            .with_property("bubbly", 0.0)
            .with_property("creamy", 11.0)
            .with_fatty_acid("linoleic", 0.68)
            .with_fatty_acid("oleic", 0.20)
            .with_fatty_acid("palmitic", 0.07)
            .with_fatty_acid("stearic", 0.04),
    ]
}
