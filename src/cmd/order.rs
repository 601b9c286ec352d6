//! Order commands: named recipes and step-by-step custom drinks.

use anyhow::{Context, Result};
use std::path::Path;

use milktea::bartender::{Bartender, Recipe};
use milktea::error::OrderError;
use milktea::product::{MilkTea, MilkTeaType, Size};
use milktea::topping::Topping;

use super::ui::Output;
use super::{bartender_for, load_config};

/// Raw `custom` command arguments
pub struct CustomOrder<'a> {
    pub milk_tea_type: Option<&'a str>,
    pub size: Option<&'a str>,
    pub toppings: &'a [String],
    pub without: &'a [String],
    pub sold_out: &'a [String],
}

/// Parsed custom order, ready to drive a builder
#[derive(Debug, Default)]
pub(crate) struct CustomSelection {
    pub milk_tea_type: Option<MilkTeaType>,
    pub size: Option<Size>,
    pub add: Topping,
    pub remove: Topping,
}

impl CustomSelection {
    fn parse(order: &CustomOrder<'_>) -> Result<Self> {
        let milk_tea_type = order
            .milk_tea_type
            .map(|name| {
                name.parse::<MilkTeaType>()
                    .with_context(|| format!("Invalid --type value '{}'", name))
            })
            .transpose()?;
        let size = order
            .size
            .map(|name| {
                name.parse::<Size>()
                    .with_context(|| format!("Invalid --size value '{}'", name))
            })
            .transpose()?;

        Ok(Self {
            milk_tea_type,
            size,
            add: parse_toppings(order.toppings, "--topping")?,
            remove: parse_toppings(order.without, "--without")?,
        })
    }
}

fn parse_toppings(names: &[String], flag: &str) -> Result<Topping> {
    names
        .iter()
        .map(|name| {
            name.parse::<Topping>()
                .with_context(|| format!("Invalid {} value '{}'", flag, name))
        })
        .collect()
}

/// Order a named recipe.
pub fn cmd_order(
    output: &Output,
    config_path: Option<&Path>,
    recipe: &str,
    sold_out: &[String],
) -> Result<()> {
    let recipe = recipe
        .parse::<Recipe>()
        .with_context(|| format!("Cannot order '{}'", recipe))?;
    let config = load_config(config_path)?;
    let bartender = bartender_for(&config, sold_out)?;

    if !serve_recipe(output, &bartender, recipe) {
        std::process::exit(1);
    }
    Ok(())
}

/// Build a drink directly through the builder.
pub fn cmd_custom(
    output: &Output,
    config_path: Option<&Path>,
    order: CustomOrder<'_>,
) -> Result<()> {
    let selection = CustomSelection::parse(&order)?;
    let config = load_config(config_path)?;
    let bartender = bartender_for(&config, order.sold_out)?;

    match brew_custom(output, &bartender, &selection) {
        Ok(tea) => {
            output.milk_tea(&tea);
            Ok(())
        }
        Err(err) => {
            report_order_error(output, &err);
            std::process::exit(1);
        }
    }
}

/// Ask the bartender for a recipe and report the outcome.
///
/// Returns `false` when no drink was served.
pub(crate) fn serve_recipe(output: &Output, bartender: &Bartender, recipe: Recipe) -> bool {
    output.step(&format!("Brewing the {} recipe", recipe));
    match bartender.create(recipe) {
        Ok(tea) => {
            output.milk_tea(&tea);
            true
        }
        Err(err) => {
            report_order_error(output, &err);
            false
        }
    }
}

pub(crate) fn brew_custom(
    output: &Output,
    bartender: &Bartender,
    selection: &CustomSelection,
) -> Result<MilkTea, OrderError> {
    let mut builder = bartender.builder();

    if let Some(kind) = selection.milk_tea_type {
        output.step(&format!("Setting type to {}", kind));
        builder.set_type(kind)?;
    }
    if let Some(size) = selection.size {
        output.step(&format!("Setting size to {}", size));
        builder.set_size(size);
    }
    if !selection.add.is_empty() {
        output.step(&format!("Adding {}", selection.add));
        builder.add_toppings(selection.add);
    }
    for topping in selection.remove.iter() {
        if !builder.toppings().contains(topping) {
            output.warn(&format!("{} was not added, nothing to remove", topping));
        }
    }
    builder.remove_topping(selection.remove);

    Ok(builder.build())
}

fn report_order_error(output: &Output, err: &OrderError) {
    match err {
        OrderError::SoldOutType(kind) => {
            output.error(&format!("Not enough milktea type: {} is sold out", kind))
        }
        other => output.error(&format!("An error occurs: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::ui::output::tests::{captured, TestWriter};
    use crate::cmd::ui::OutputMode;

    fn human_output() -> (Output, std::sync::Arc<std::sync::Mutex<Vec<u8>>>) {
        let (writer, buffer) = TestWriter::new();
        (Output::with_writer(OutputMode::Human, Box::new(writer)), buffer)
    }

    #[test]
    fn test_serve_classic_recipe() {
        let (output, buffer) = human_output();
        assert!(serve_recipe(&output, &Bartender::new(), Recipe::Classic));

        let result = captured(&buffer);
        assert!(result.contains("→ Brewing the classic recipe"));
        assert!(result
            .contains("✓ type: Classic - size: Medium - toppings: [Lychee Jelly, Aloe Jelly]"));
    }

    #[test]
    fn test_serve_sold_out_recipe() {
        let (output, buffer) = human_output();
        let bartender = Bartender::with_sold_out_types([MilkTeaType::Classic]);
        assert!(!serve_recipe(&output, &bartender, Recipe::Classic));

        let result = captured(&buffer);
        assert!(result.contains("✗ Not enough milktea type: Classic is sold out"));
        assert!(!result.contains("✓"));
    }

    #[test]
    fn test_parse_custom_selection() {
        let toppings = vec!["aloe-jelly".to_string(), "lychee-jelly".to_string()];
        let without = vec!["lychee-jelly".to_string()];
        let order = CustomOrder {
            milk_tea_type: Some("pearl"),
            size: Some("large"),
            toppings: &toppings,
            without: &without,
            sold_out: &[],
        };

        let selection = CustomSelection::parse(&order).unwrap();
        assert_eq!(selection.milk_tea_type, Some(MilkTeaType::Pearl));
        assert_eq!(selection.size, Some(Size::Large));
        assert_eq!(selection.add, Topping::ALOE_JELLY | Topping::LYCHEE_JELLY);
        assert_eq!(selection.remove, Topping::LYCHEE_JELLY);
    }

    #[test]
    fn test_parse_custom_selection_rejects_unknown_topping() {
        let toppings = vec!["boba".to_string()];
        let order = CustomOrder {
            milk_tea_type: None,
            size: None,
            toppings: &toppings,
            without: &[],
            sold_out: &[],
        };

        let err = CustomSelection::parse(&order).unwrap_err();
        assert!(err.to_string().contains("--topping"));
    }

    #[test]
    fn test_brew_custom_keeps_defaults() {
        let (output, _buffer) = human_output();
        let tea = brew_custom(&output, &Bartender::new(), &CustomSelection::default()).unwrap();
        assert_eq!(tea.milk_tea_type(), MilkTeaType::Classic);
        assert_eq!(tea.size(), Size::Medium);
        assert!(tea.toppings().is_empty());
    }

    #[test]
    fn test_brew_custom_warns_on_missing_removal() {
        let (output, buffer) = human_output();
        let selection = CustomSelection {
            add: Topping::ALOE_JELLY,
            remove: Topping::COCONUT_JELLY,
            ..CustomSelection::default()
        };

        let tea = brew_custom(&output, &Bartender::new(), &selection).unwrap();
        assert_eq!(tea.toppings(), Topping::ALOE_JELLY);
        assert!(captured(&buffer).contains("⚠ [coconut Jelly] was not added"));
    }

    #[test]
    fn test_brew_custom_sold_out_type() {
        let (output, _buffer) = human_output();
        let selection = CustomSelection {
            milk_tea_type: Some(MilkTeaType::Pearl),
            ..CustomSelection::default()
        };
        let bartender = Bartender::with_sold_out_types([MilkTeaType::Pearl]);

        assert_eq!(
            brew_custom(&output, &bartender, &selection),
            Err(OrderError::SoldOutType(MilkTeaType::Pearl))
        );
    }
}
