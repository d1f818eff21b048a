//! # Recipe Calculation Model
//!
//! This module holds the recipe aggregate and the derivation of its
//! summary: lye demand, water weight, batch weight, and the weighted
//! oil-blend qualities (properties, fatty-acid breakdown, saturation).
//!
//! ## Core Concepts
//!
//! - **Recipe**: the mutable aggregate: selected oils, raw weight
//!   entries, soap type, units, and the lye/water parameters.
//! - **Summary**: derived on every mutating call, never set directly.
//!   Derived ratio fields stay `None` whenever their denominator is zero
//!   or NaN; incomplete inputs degrade the numbers instead of failing.
//! - **Percent mode**: with `uom` set to `Percent`, weight entries are
//!   percentages of `total_weight` and `total_uom` carries the unit.
//! - **Notification**: mutators return the fresh summary, and listeners
//!   registered on the model are invoked synchronously, in registration
//!   order, with no payload, before the call returns.
//!
//! ## Usage
//!
//! ```rust
//! use saponify::oil_store::OilStore;
//! use saponify::recipe_model::RecipeModel;
//! use std::sync::Arc;
//!
//! let store = Arc::new(OilStore::with_builtin_catalog());
//! let olive = store.get_oil_by_id(1).unwrap().clone();
//!
//! let mut model = RecipeModel::new(Arc::clone(&store));
//! model.add_oil(olive.clone());
//! model.set_oil_weight(&olive, "500");
//!
//! assert_eq!(model.summary().totals.total_oil_weight, 500.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::fatty_acids::{classify_fatty_type, Saturation};
use crate::oil_model::Oil;
use crate::oil_store::OilStore;
use crate::units::{is_valid_weight_input, weight_input_value, Unit};

/// KOH-to-NaOH molar mass ratio applied to KOH-basis SAP values
pub const NAOH_SAP_FACTOR: f64 = 1.403;

/// Default KOH purity percentage
pub const DEFAULT_KOH_PURITY: f64 = 90.0;
/// Default total weight for percent-mode recipes
pub const DEFAULT_TOTAL_WEIGHT: f64 = 500.0;
/// Default superfat (lye discount) percentage
pub const DEFAULT_SUPER_FAT: f64 = 5.0;
/// Default water ratio as a percentage of oil weight
pub const DEFAULT_WATER_RATIO: f64 = 38.0;

/// Lye type a recipe saponifies with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoapType {
    /// Sodium hydroxide, for bar soaps
    Noah,
    /// Potassium hydroxide, for liquid soaps
    Koh,
}

impl SoapType {
    /// Display label for the lye this soap type uses
    pub fn lye_name(&self) -> &'static str {
        match self {
            SoapType::Noah => "NaOH",
            SoapType::Koh => "KOH",
        }
    }
}

/// Weight totals derived for a recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeTotals {
    /// Total oil weight in the active unit
    pub total_oil_weight: f64,
    /// Water weight, `total_oil_weight * water_ratio / 100`
    pub total_water_weight: f64,
    /// Lye weight across all weighted oils, superfat discount applied
    pub total_lye: f64,
    /// Oil + water + lye
    pub total_batch_weight: f64,
    /// Lye as a percentage of lye + water; `None` when that sum is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lye_concentration: Option<f64>,
    /// Water to lye ratio; `None` when lye + water is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_lye_ratio: Option<f64>,
}

/// Derived recipe summary, recomputed on every mutation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Weight totals
    pub totals: RecipeTotals,
    /// Weighted fatty-acid breakdown of the oil blend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdowns: Option<HashMap<String, f64>>,
    /// Weighted soap qualities of the oil blend, including iodine and ins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, f64>>,
    /// Weighted saturated/unsaturated split of the oil blend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturations: Option<HashMap<Saturation, f64>>,
}

/// The recipe aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Free-text notes
    pub notes: String,

    /// Selected oils, unique by id
    pub oils: Vec<Oil>,
    /// Raw weight entries keyed by oil id, stored exactly as typed
    pub weights: BTreeMap<u32, String>,

    /// Lye type
    pub soap_type: SoapType,
    /// KOH purity percentage, used only for KOH recipes
    pub koh_purity: f64,
    /// Unit for per-oil weights; `Percent` switches to percent mode
    pub uom: Unit,
    /// Total oil weight, used only in percent mode
    pub total_weight: f64,
    /// Unit for the total weight in percent mode
    pub total_uom: Unit,
    /// Superfat (lye discount) percentage
    pub super_fat: f64,
    /// Water as a percentage of oil weight
    pub water_ratio: f64,

    /// Derived summary, maintained by the model
    pub summary: RecipeSummary,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            notes: String::new(),
            oils: Vec::new(),
            weights: BTreeMap::new(),
            soap_type: SoapType::Noah,
            koh_purity: DEFAULT_KOH_PURITY,
            uom: Unit::Gram,
            total_weight: DEFAULT_TOTAL_WEIGHT,
            total_uom: Unit::Gram,
            super_fat: DEFAULT_SUPER_FAT,
            water_ratio: DEFAULT_WATER_RATIO,
            summary: RecipeSummary::default(),
        }
    }
}

/// Partial recipe update; `None` fields leave the current value untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub soap_type: Option<SoapType>,
    pub koh_purity: Option<f64>,
    pub uom: Option<Unit>,
    pub total_weight: Option<f64>,
    pub total_uom: Option<Unit>,
    pub super_fat: Option<f64>,
    pub water_ratio: Option<f64>,
}

/// One weight entry resolved to its oil, blend ratio, and absolute weight
#[derive(Debug, Clone, PartialEq)]
pub struct OilShare<'a> {
    /// The oil the entry refers to, when it is still in the recipe
    pub oil: Option<&'a Oil>,
    /// Share of the oil blend in 0..1
    pub ratio: f64,
    /// Absolute weight in the active unit
    pub weight: f64,
}

/// Listener invoked after every recompute, with no payload
pub type CalculatedListener = Box<dyn Fn()>;

/// Stateful recipe model: one instance per editing session.
///
/// Mutators that recompute return the fresh summary; setters that do not
/// recompute leave triggering `calculate_recipe` to the caller, as the
/// editing flow batches several field changes per recompute.
pub struct RecipeModel {
    recipe: Recipe,
    oil_store: Arc<OilStore>,
    listeners: Vec<CalculatedListener>,
}

impl RecipeModel {
    /// Create a model over the given oil store, with a freshly derived
    /// summary for the default recipe
    pub fn new(oil_store: Arc<OilStore>) -> Self {
        Self::with_listeners(oil_store, Vec::new())
    }

    /// Create a model with an initial listener list
    pub fn with_listeners(oil_store: Arc<OilStore>, listeners: Vec<CalculatedListener>) -> Self {
        let mut model = Self { recipe: Recipe::default(), oil_store, listeners };
        model.recipe.summary = model.compute_summary();
        model
    }

    /// Register a listener for the `calculated` notification
    pub fn subscribe_calculated(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The current recipe state
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// The current derived summary
    pub fn summary(&self) -> &RecipeSummary {
        &self.recipe.summary
    }

    // ---- field setters (no recompute; callers batch then calculate) ----

    /// Set the recipe name
    pub fn set_name(&mut self, name: &str) {
        self.recipe.name = name.to_string();
    }

    /// Set the free-text description
    pub fn set_description(&mut self, description: &str) {
        self.recipe.description = description.to_string();
    }

    /// Set the free-text notes
    pub fn set_notes(&mut self, notes: &str) {
        self.recipe.notes = notes.to_string();
    }

    /// Set the lye type
    pub fn set_soap_type(&mut self, soap_type: SoapType) {
        self.recipe.soap_type = soap_type;
    }

    /// Set the KOH purity percentage
    pub fn set_koh_purity(&mut self, koh_purity: f64) {
        self.recipe.koh_purity = koh_purity;
    }

    /// Set the per-oil weight unit
    pub fn set_uom(&mut self, uom: Unit) {
        self.recipe.uom = uom;
    }

    /// Set the total-weight unit used in percent mode
    pub fn set_total_uom(&mut self, total_uom: Unit) {
        self.recipe.total_uom = total_uom;
    }

    /// Set the total oil weight used in percent mode
    pub fn set_total_weight(&mut self, total_weight: f64) {
        self.recipe.total_weight = total_weight;
    }

    /// Set the superfat percentage
    pub fn set_super_fat(&mut self, super_fat: f64) {
        self.recipe.super_fat = super_fat;
    }

    /// Set the water ratio percentage
    pub fn set_water_ratio(&mut self, water_ratio: f64) {
        self.recipe.water_ratio = water_ratio;
    }

    /// Merge a partial update into the recipe
    pub fn apply_update(&mut self, update: RecipeUpdate) {
        if let Some(name) = update.name {
            self.recipe.name = name;
        }
        if let Some(description) = update.description {
            self.recipe.description = description;
        }
        if let Some(notes) = update.notes {
            self.recipe.notes = notes;
        }
        if let Some(soap_type) = update.soap_type {
            self.recipe.soap_type = soap_type;
        }
        if let Some(koh_purity) = update.koh_purity {
            self.recipe.koh_purity = koh_purity;
        }
        if let Some(uom) = update.uom {
            self.recipe.uom = uom;
        }
        if let Some(total_weight) = update.total_weight {
            self.recipe.total_weight = total_weight;
        }
        if let Some(total_uom) = update.total_uom {
            self.recipe.total_uom = total_uom;
        }
        if let Some(super_fat) = update.super_fat {
            self.recipe.super_fat = super_fat;
        }
        if let Some(water_ratio) = update.water_ratio {
            self.recipe.water_ratio = water_ratio;
        }
    }

    // ---- derived queries ----

    /// Check whether weights are percentages of the total weight
    pub fn is_percent_recipe(&self) -> bool {
        self.recipe.uom.is_percent()
    }

    /// Check whether the recipe saponifies with KOH
    pub fn is_koh_recipe(&self) -> bool {
        self.recipe.soap_type == SoapType::Koh
    }

    /// SAP value of an oil scaled for the recipe's soap type
    pub fn sap_for_soap_type(&self, oil: &Oil) -> f64 {
        let factor = match self.recipe.soap_type {
            SoapType::Koh => self.recipe.koh_purity / 100.0,
            SoapType::Noah => NAOH_SAP_FACTOR,
        };

        oil.sap / factor
    }

    /// The unit per-oil weights display in: `total_uom` in percent mode,
    /// `uom` otherwise
    pub fn recipe_oils_uom(&self) -> Unit {
        if self.is_percent_recipe() {
            self.recipe.total_uom
        } else {
            self.recipe.uom
        }
    }

    /// The raw stored weight for an oil, or the empty string
    pub fn oil_weight(&self, oil: &Oil) -> &str {
        self.recipe.weights.get(&oil.id).map(String::as_str).unwrap_or("")
    }

    /// Sum of all weight entries' numeric values
    pub fn sum_weights(&self) -> f64 {
        self.recipe.weights.values().map(|raw| weight_input_value(raw)).sum()
    }

    /// Number of weight entries with a positive numeric value
    pub fn count_weights(&self) -> usize {
        self.recipe
            .weights
            .values()
            .filter(|raw| weight_input_value(raw) > 0.0)
            .count()
    }

    /// Number of selected oils
    pub fn count_oils(&self) -> usize {
        self.recipe.oils.len()
    }

    /// Resolve every weight entry to its oil, blend ratio, and absolute
    /// weight. `None` when the total oil weight is zero or unknown.
    pub fn recipe_oils_weights_ratios(&self) -> Option<Vec<OilShare<'_>>> {
        let total_oil_weight = if self.is_percent_recipe() {
            self.recipe.total_weight
        } else {
            self.recipe.summary.totals.total_oil_weight
        };

        if total_oil_weight == 0.0 || total_oil_weight.is_nan() {
            return None;
        }

        let shares = self
            .recipe
            .weights
            .iter()
            .map(|(oil_id, raw)| {
                let entered = weight_input_value(raw);
                let (ratio, weight) = if self.is_percent_recipe() {
                    let ratio = entered / 100.0;
                    (ratio, total_oil_weight * ratio)
                } else {
                    (entered / total_oil_weight, entered)
                };

                OilShare { oil: self.find_oil(*oil_id), ratio, weight }
            })
            .collect();

        Some(shares)
    }

    /// Display label for the recipe's lye
    pub fn soap_type_to_lye(&self) -> &'static str {
        self.recipe.soap_type.lye_name()
    }

    // ---- mutators (recompute + notify) ----

    /// Reconcile the oil set to exactly `oil_ids`.
    ///
    /// Removals drop their weight entries; additions resolve through the
    /// oil store, and ids the store does not know are skipped. One
    /// recompute and one notification cover the whole reconciliation.
    pub fn set_recipe_oils_by_ids(&mut self, oil_ids: &[u32]) -> &RecipeSummary {
        let existing: Vec<u32> = self.recipe.oils.iter().map(|oil| oil.id).collect();
        let to_remove: Vec<u32> =
            existing.iter().copied().filter(|id| !oil_ids.contains(id)).collect();
        let to_add: Vec<u32> =
            oil_ids.iter().copied().filter(|id| !existing.contains(id)).collect();

        debug!("Reconciling recipe oils: removing {:?}, adding {:?}", to_remove, to_add);

        for oil_id in to_remove {
            self.delete_oil(oil_id);
        }

        for oil_id in to_add {
            let oil = self.oil_store.get_oil_by_id(oil_id).cloned();
            if let Some(oil) = oil {
                self.insert_oil(oil);
            }
        }

        self.calculate_recipe()
    }

    /// Add an oil to the recipe; adding an oil already present is a no-op
    /// union
    pub fn add_oil(&mut self, oil: Oil) -> &RecipeSummary {
        self.insert_oil(oil);
        self.calculate_recipe()
    }

    /// Remove an oil and its weight entry; removing an absent oil leaves
    /// the state untouched but still recomputes
    pub fn remove_oil(&mut self, oil: &Oil) -> &RecipeSummary {
        self.delete_oil(oil.id);
        self.calculate_recipe()
    }

    /// Store a raw weight entry for an oil.
    ///
    /// Accepts finite numbers, the empty string, and a lone `"."` so a
    /// value like `"0."` can be typed a keystroke at a time. Anything else
    /// is rejected: state and summary stay untouched, no notification
    /// fires, and the call returns `None`.
    pub fn set_oil_weight(&mut self, oil: &Oil, input: &str) -> Option<&RecipeSummary> {
        if !is_valid_weight_input(input) {
            return None;
        }

        self.recipe.weights.insert(oil.id, input.to_string());
        Some(self.calculate_recipe())
    }

    /// Recompute the summary and notify listeners.
    ///
    /// The non-recomputing field setters rely on the caller invoking this
    /// once a batch of changes is in place.
    pub fn calculate_recipe(&mut self) -> &RecipeSummary {
        self.recipe.summary = self.compute_summary();
        self.notify_calculated();
        &self.recipe.summary
    }

    // ---- derivation ----

    fn compute_summary(&self) -> RecipeSummary {
        let total_oil_weight = if self.is_percent_recipe() {
            self.recipe.total_weight
        } else {
            self.sum_weights()
        };

        let total_water_weight = total_oil_weight * (self.recipe.water_ratio / 100.0);
        let total_lye: f64 = self
            .recipe
            .weights
            .iter()
            .map(|(oil_id, raw)| self.lye_weight_for_oil(raw, *oil_id))
            .sum();
        let total_batch_weight = total_oil_weight + total_water_weight + total_lye;

        let mut summary = RecipeSummary {
            totals: RecipeTotals {
                total_oil_weight,
                total_water_weight,
                total_lye,
                total_batch_weight,
                lye_concentration: None,
                water_lye_ratio: None,
            },
            breakdowns: None,
            properties: None,
            saturations: None,
        };

        let water_and_lye = total_water_weight + total_lye;
        if water_and_lye != 0.0 && !water_and_lye.is_nan() {
            summary.totals.lye_concentration = Some(100.0 * (total_lye / water_and_lye));
            summary.totals.water_lye_ratio = Some(total_water_weight / total_lye);

            summary.breakdowns = Some(self.recipe_oil_fat_breakdowns());
            summary.properties = Some(self.recipe_oil_properties());
            summary.saturations = Some(self.recipe_oil_saturations());
        }

        summary
    }

    /// Lye demand for one weight entry, in the active unit.
    ///
    /// Empty entries contribute nothing. A weight whose oil is no longer
    /// in the recipe contributes nothing either; the mutators keep weights
    /// paired with oils, so that arm is a safeguard, not a code path.
    fn lye_weight_for_oil(&self, raw: &str, oil_id: u32) -> f64 {
        if raw.is_empty() {
            return 0.0;
        }

        let entered = weight_input_value(raw);
        let oil_weight = if self.is_percent_recipe() {
            self.recipe.total_weight * (entered / 100.0)
        } else {
            entered
        };

        let oil = match self.find_oil(oil_id) {
            Some(oil) => oil,
            None => return 0.0,
        };

        let grams = self.convert_to_grams(oil_weight);
        let mut lye_grams = self.sap_for_soap_type(oil) * grams;

        // factor in the superfat discount
        lye_grams -= round_to_3(lye_grams * (self.recipe.super_fat / 100.0));

        self.convert_to_uom(lye_grams)
    }

    fn convert_to_grams(&self, amount: f64) -> f64 {
        amount * self.uom_to_use().grams_factor()
    }

    fn convert_to_uom(&self, grams: f64) -> f64 {
        grams / self.uom_to_use().grams_factor()
    }

    fn uom_to_use(&self) -> Unit {
        if self.is_percent_recipe() {
            self.recipe.total_uom
        } else {
            self.recipe.uom
        }
    }

    /// Visit each weight entry's oil with its share of the blend
    fn oils_to_ratio_iter<F: FnMut(&Oil, f64)>(&self, mut block: F) {
        let total = self.sum_weights();

        for (oil_id, raw) in &self.recipe.weights {
            let entered = weight_input_value(raw);
            let ratio = if self.is_percent_recipe() {
                entered / 100.0
            } else {
                entered / total
            };

            if let Some(oil) = self.find_oil(*oil_id) {
                block(oil, ratio);
            }
        }
    }

    fn recipe_oil_properties(&self) -> HashMap<String, f64> {
        let mut result = HashMap::new();

        self.oils_to_ratio_iter(|oil, ratio| {
            for (key, value) in &oil.properties {
                *result.entry(key.clone()).or_insert(0.0) += value * ratio;
            }
            *result.entry("iodine".to_string()).or_insert(0.0) += oil.iodine * ratio;
            *result.entry("ins".to_string()).or_insert(0.0) += oil.ins * ratio;
        });

        result
    }

    fn recipe_oil_fat_breakdowns(&self) -> HashMap<String, f64> {
        let mut result = HashMap::new();

        self.oils_to_ratio_iter(|oil, ratio| {
            for (fatty_acid, acid_ratio) in &oil.breakdown {
                *result.entry(fatty_acid.clone()).or_insert(0.0) += acid_ratio * ratio;
            }
        });

        result
    }

    fn recipe_oil_saturations(&self) -> HashMap<Saturation, f64> {
        let mut result = HashMap::new();

        self.oils_to_ratio_iter(|oil, ratio| {
            for (fatty_acid, acid_ratio) in &oil.breakdown {
                // acids outside the classification table get no bucket
                if let Some(class) = classify_fatty_type(fatty_acid) {
                    *result.entry(class).or_insert(0.0) += acid_ratio * ratio;
                }
            }
        });

        result
    }

    fn find_oil(&self, oil_id: u32) -> Option<&Oil> {
        self.recipe.oils.iter().find(|oil| oil.id == oil_id)
    }

    fn insert_oil(&mut self, oil: Oil) {
        if !self.recipe.oils.iter().any(|existing| existing.id == oil.id) {
            self.recipe.oils.push(oil);
        }
    }

    fn delete_oil(&mut self, oil_id: u32) {
        self.recipe.oils.retain(|oil| oil.id != oil_id);
        self.recipe.weights.remove(&oil_id);
    }

    fn notify_calculated(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

fn round_to_3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<OilStore> {
        Arc::new(OilStore::with_builtin_catalog())
    }

    fn oil(store: &OilStore, id: u32) -> Oil {
        store.get_oil_by_id(id).unwrap().clone()
    }

    #[test]
    fn test_default_recipe_summary() {
        let model = RecipeModel::new(store());
        let totals = &model.summary().totals;

        assert_eq!(totals.total_oil_weight, 0.0);
        assert_eq!(totals.total_water_weight, 0.0);
        assert_eq!(totals.total_lye, 0.0);
        assert_eq!(totals.total_batch_weight, 0.0);
        assert!(totals.lye_concentration.is_none());
        assert!(totals.water_lye_ratio.is_none());
        assert!(model.summary().properties.is_none());
    }

    #[test]
    fn test_add_oil_is_idempotent() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);

        model.add_oil(olive.clone());
        model.add_oil(olive);

        assert_eq!(model.count_oils(), 1);
    }

    #[test]
    fn test_sum_and_count_weights() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);
        let coconut = oil(&store, 2);

        model.add_oil(olive.clone());
        model.add_oil(coconut.clone());
        model.set_oil_weight(&olive, "300");
        model.set_oil_weight(&coconut, "200");

        assert_eq!(model.sum_weights(), 500.0);
        assert_eq!(model.count_weights(), 2);

        model.set_oil_weight(&coconut, "0");
        assert_eq!(model.count_weights(), 1);

        model.set_oil_weight(&coconut, "");
        assert_eq!(model.sum_weights(), 300.0);
    }

    #[test]
    fn test_partial_decimal_entry_degrades_to_nan() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);

        model.add_oil(olive.clone());
        model.set_oil_weight(&olive, ".");

        let totals = &model.summary().totals;
        assert!(totals.total_oil_weight.is_nan());
        assert!(totals.total_lye.is_nan());
        assert!(totals.lye_concentration.is_none());

        model.set_oil_weight(&olive, ".5");
        assert_eq!(model.summary().totals.total_oil_weight, 0.5);
    }

    #[test]
    fn test_sap_for_soap_type() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);

        let naoh_sap = model.sap_for_soap_type(&olive);
        assert!((naoh_sap - 0.190 / 1.403).abs() < 1e-12);

        model.set_soap_type(SoapType::Koh);
        let koh_sap = model.sap_for_soap_type(&olive);
        assert!((koh_sap - 0.190 / 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_recipe_oils_uom_switches_in_percent_mode() {
        let store = store();
        let mut model = RecipeModel::new(store);

        model.set_total_uom(Unit::Pound);
        assert_eq!(model.recipe_oils_uom(), Unit::Gram);

        model.set_uom(Unit::Percent);
        assert_eq!(model.recipe_oils_uom(), Unit::Pound);
    }

    #[test]
    fn test_oil_weight_raw_access() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);

        assert_eq!(model.oil_weight(&olive), "");

        model.add_oil(olive.clone());
        model.set_oil_weight(&olive, "0.");
        assert_eq!(model.oil_weight(&olive), "0.");
    }

    #[test]
    fn test_weights_ratios_in_weight_mode() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);
        let coconut = oil(&store, 2);

        model.add_oil(olive.clone());
        model.add_oil(coconut.clone());
        model.set_oil_weight(&olive, "750");
        model.set_oil_weight(&coconut, "250");

        let shares = model.recipe_oils_weights_ratios().unwrap();
        assert_eq!(shares.len(), 2);

        let olive_share = shares.iter().find(|s| s.oil.map(|o| o.id) == Some(1)).unwrap();
        assert!((olive_share.ratio - 0.75).abs() < 1e-12);
        assert_eq!(olive_share.weight, 750.0);
    }

    #[test]
    fn test_weights_ratios_none_without_weight() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);

        assert!(model.recipe_oils_weights_ratios().is_none());

        model.add_oil(olive);
        assert!(model.recipe_oils_weights_ratios().is_none());
    }

    #[test]
    fn test_apply_update_merges_only_given_fields() {
        let store = store();
        let mut model = RecipeModel::new(store);

        model.apply_update(RecipeUpdate {
            name: Some("Castile".to_string()),
            super_fat: Some(8.0),
            ..Default::default()
        });

        assert_eq!(model.recipe().name, "Castile");
        assert_eq!(model.recipe().super_fat, 8.0);
        assert_eq!(model.recipe().water_ratio, DEFAULT_WATER_RATIO);
    }

    #[test]
    fn test_soap_type_labels() {
        let store = store();
        let mut model = RecipeModel::new(store);

        assert_eq!(model.soap_type_to_lye(), "NaOH");
        model.set_soap_type(SoapType::Koh);
        assert_eq!(model.soap_type_to_lye(), "KOH");
        assert!(model.is_koh_recipe());
    }

    #[test]
    fn test_saturations_skip_unclassified_acids() {
        let store = store();
        let mut model = RecipeModel::new(store);
        let odd_oil = Oil::new(90, "Odd Oil")
            .with_sap(0.180)
            .with_iodine(50.0)
            .with_ins(100.0)
            .with_fatty_acid("oleic", 0.60)
            .with_fatty_acid("behenic", 0.40);

        model.add_oil(odd_oil.clone());
        model.set_oil_weight(&odd_oil, "100");

        let saturations = model.summary().saturations.as_ref().unwrap();
        assert_eq!(saturations.len(), 1);
        assert!((saturations[&Saturation::Unsaturated] - 0.60).abs() < 1e-12);
    }

    #[test]
    fn test_properties_include_iodine_and_ins() {
        let store = store();
        let mut model = RecipeModel::new(Arc::clone(&store));
        let olive = oil(&store, 1);

        model.add_oil(olive.clone());
        model.set_oil_weight(&olive, "500");

        let properties = model.summary().properties.as_ref().unwrap();
        assert!((properties["iodine"] - 85.0).abs() < 1e-9);
        assert!((properties["ins"] - 105.0).abs() < 1e-9);
        assert!((properties["conditioning"] - 82.0).abs() < 1e-9);
    }
}
