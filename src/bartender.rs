//! Named recipes that drive a [`MilkTeaBuilder`] through a fixed sequence.

use std::fmt;
use std::str::FromStr;

use crate::builder::MilkTeaBuilder;
use crate::config::Config;
use crate::error::{OrderError, ParseError};
use crate::product::{MilkTea, MilkTeaType, Size};
use crate::topping::Topping;

/// Preset drinks the bartender knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipe {
    Classic,
    Matcha,
}

impl Recipe {
    pub const ALL: [Recipe; 2] = [Recipe::Classic, Recipe::Matcha];

    pub fn name(&self) -> &'static str {
        match self {
            Recipe::Classic => "classic",
            Recipe::Matcha => "matcha",
        }
    }

    /// Drink type the recipe sets.
    pub fn milk_tea_type(&self) -> MilkTeaType {
        match self {
            Recipe::Classic => MilkTeaType::Classic,
            Recipe::Matcha => MilkTeaType::Matcha,
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Recipe {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Recipe::Classic),
            "matcha" => Ok(Recipe::Matcha),
            _ => Err(ParseError::UnknownRecipe(s.to_string())),
        }
    }
}

/// Director for milk tea orders.
///
/// Holds nothing but the sold-out list handed to every builder it creates.
#[derive(Debug, Clone, Default)]
pub struct Bartender {
    sold_out_types: Vec<MilkTeaType>,
}

impl Bartender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sold_out_types(types: impl IntoIterator<Item = MilkTeaType>) -> Self {
        Self {
            sold_out_types: types.into_iter().collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_sold_out_types(config.menu.sold_out.iter().copied())
    }

    pub fn sold_out_types(&self) -> &[MilkTeaType] {
        &self.sold_out_types
    }

    /// A fresh builder carrying this bartender's sold-out list.
    pub fn builder(&self) -> MilkTeaBuilder {
        MilkTeaBuilder::with_sold_out_types(self.sold_out_types.iter().copied())
    }

    pub fn is_available(&self, recipe: Recipe) -> bool {
        !self.sold_out_types.contains(&recipe.milk_tea_type())
    }

    pub fn create(&self, recipe: Recipe) -> Result<MilkTea, OrderError> {
        match recipe {
            Recipe::Classic => self.create_classic_milk_tea(),
            Recipe::Matcha => self.create_matcha_milk_tea(),
        }
    }

    /// Classic, medium, with lychee and aloe jelly.
    pub fn create_classic_milk_tea(&self) -> Result<MilkTea, OrderError> {
        let mut builder = self.builder();
        builder.set_type(MilkTeaType::Classic)?;
        builder.set_size(Size::Medium);
        builder.add_toppings(Topping::ALOE_JELLY | Topping::LYCHEE_JELLY);
        Ok(builder.build())
    }

    /// Matcha, medium, with coconut jelly.
    pub fn create_matcha_milk_tea(&self) -> Result<MilkTea, OrderError> {
        let mut builder = self.builder();
        builder.set_type(MilkTeaType::Matcha)?;
        builder.set_size(Size::Medium);
        builder.add_toppings(Topping::COCONUT_JELLY);
        Ok(builder.build())
    }
}
