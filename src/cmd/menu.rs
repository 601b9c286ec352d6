//! Menu command: what the bartender can make right now.

use anyhow::Result;
use serde_json::json;
use std::path::Path;

use milktea::bartender::{Bartender, Recipe};
use milktea::config::Config;
use milktea::product::{MilkTeaType, Size};
use milktea::topping::Topping;

use super::load_config;
use super::ui::{Output, OutputMode};

pub fn cmd_menu(output: &Output, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    render_menu(output, &config);
    Ok(())
}

pub(crate) fn render_menu(output: &Output, config: &Config) {
    let bartender = Bartender::from_config(config);

    if output.mode() == OutputMode::Json {
        output.json(&menu_json(config, &bartender));
        return;
    }

    output.info(&config.shop.name);
    output.info("Recipes:");
    for recipe in Recipe::ALL {
        match bartender.create(recipe) {
            Ok(tea) => output.detail(&format!("{:<8} {}", recipe, tea)),
            Err(err) => output.detail(&format!("{:<8} unavailable ({})", recipe, err)),
        }
    }

    output.info("Types:");
    for kind in MilkTeaType::ALL {
        if bartender.sold_out_types().contains(&kind) {
            output.detail(&format!("{} (sold out)", kind));
        } else {
            output.detail(&kind.to_string());
        }
    }

    output.info("Sizes:");
    output.detail(
        &Size::ALL
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    );

    output.info("Toppings:");
    output.detail(&Topping::all().labels().join(", "));
}

fn menu_json(config: &Config, bartender: &Bartender) -> serde_json::Value {
    let recipes: Vec<serde_json::Value> = Recipe::ALL
        .iter()
        .map(|recipe| match bartender.create(*recipe) {
            Ok(tea) => json!({
                "name": recipe.name(),
                "available": true,
                "milk_tea": tea,
            }),
            Err(err) => json!({
                "name": recipe.name(),
                "available": false,
                "reason": err.to_string(),
            }),
        })
        .collect();

    json!({
        "level": "menu",
        "shop": config.shop.name,
        "recipes": recipes,
        "sold_out": bartender.sold_out_types(),
        "sizes": Size::ALL,
        "toppings": Topping::all(),
    })
}
