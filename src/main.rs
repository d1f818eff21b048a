use anyhow::{Context, Result};
use log::info;
use std::env;
use std::sync::Arc;

use saponify::oil_store::OilStore;
use saponify::recipe_model::RecipeModel;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting saponify recipe calculator");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Optional catalog override, otherwise the built-in catalog
    let store = match env::var("OILS_PATH") {
        Ok(path) => {
            info!("Loading oil catalog from: {}", path);
            OilStore::from_json_file(&path)?
        }
        Err(_) => OilStore::with_builtin_catalog(),
    };
    let store = Arc::new(store);

    let mut model = RecipeModel::new(Arc::clone(&store));
    model.set_name("Classic bar");
    model.set_recipe_oils_by_ids(&[1, 2, 4]);

    for (oil_id, weight) in [(1u32, "600"), (2, "300"), (4, "100")] {
        let oil = store
            .get_oil_by_id(oil_id)
            .with_context(|| format!("Oil {oil_id} missing from catalog"))?
            .clone();
        model.set_oil_weight(&oil, weight);
    }

    let unit = model.recipe_oils_uom().display_name();
    println!("Recipe: {} ({})", model.recipe().name, model.soap_type_to_lye());

    for share in model.recipe_oils_weights_ratios().into_iter().flatten() {
        if let Some(oil) = share.oil {
            println!("  {:<24} {:>7.1} {}  ({:>4.1}%)", oil.name, share.weight, unit, share.ratio * 100.0);
        }
    }

    let totals = &model.summary().totals;
    println!("Totals:");
    println!("  Oils:  {:.1} {}", totals.total_oil_weight, unit);
    println!("  Water: {:.1} {}", totals.total_water_weight, unit);
    println!("  Lye:   {:.2} {}", totals.total_lye, unit);
    println!("  Batch: {:.1} {}", totals.total_batch_weight, unit);

    if let Some(concentration) = totals.lye_concentration {
        println!("  Lye concentration: {:.1}%", concentration);
    }
    if let Some(ratio) = totals.water_lye_ratio {
        println!("  Water:lye ratio:   {:.2}:1", ratio);
    }

    if let Some(properties) = &model.summary().properties {
        println!("Blend qualities:");
        let mut keys: Vec<&String> = properties.keys().collect();
        keys.sort();
        for key in keys {
            println!("  {:<14} {:>6.1}", key, properties[key]);
        }
    }

    if let Some(saturations) = &model.summary().saturations {
        println!("Saturation:");
        let mut classes: Vec<_> = saturations.iter().collect();
        classes.sort_by_key(|(class, _)| class.display_name());
        for (class, share) in classes {
            println!("  {:<12} {:>5.1}%", class.display_name(), share * 100.0);
        }
    }

    Ok(())
}
