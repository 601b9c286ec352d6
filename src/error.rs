//! Error types for milk tea orders.

use std::fmt;

use crate::product::MilkTeaType;
use crate::topping::Topping;

/// Errors raised while assembling an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The requested drink type is sold out.
    SoldOutType(MilkTeaType),
    /// A requested topping is sold out. No operation raises this yet.
    SoldOutTopping(Topping),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::SoldOutType(kind) => write!(f, "{} milk tea is sold out", kind),
            OrderError::SoldOutTopping(toppings) => {
                write!(f, "Toppings are sold out: {}", toppings)
            }
        }
    }
}

impl std::error::Error for OrderError {}

/// Error returned when a menu item name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownType(String),
    UnknownSize(String),
    UnknownTopping(String),
    UnknownRecipe(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownType(name) => {
                write!(f, "Unknown milk tea type '{}' (expected classic, matcha or pearl)", name)
            }
            ParseError::UnknownSize(name) => {
                write!(f, "Unknown size '{}' (expected small, medium or large)", name)
            }
            ParseError::UnknownTopping(name) => write!(
                f,
                "Unknown topping '{}' (expected lychee-jelly, strawberry-jelly, aloe-jelly or coconut-jelly)",
                name
            ),
            ParseError::UnknownRecipe(name) => {
                write!(f, "Unknown recipe '{}' (expected classic or matcha)", name)
            }
        }
    }
}

impl std::error::Error for ParseError {}
