//! Default values and configuration structs with default implementations.

use serde::Deserialize;

use crate::product::MilkTeaType;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_shop_name, String, "Milk Tea Bar".to_string());

/// Shop identity shown in the menu header
#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    #[serde(default = "default_shop_name")]
    pub name: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
        }
    }
}

/// Menu availability
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuConfig {
    /// Drink types the bartender refuses (e.g. `[Classic, Pearl]`)
    #[serde(default)]
    pub sold_out: Vec<MilkTeaType>,
}
