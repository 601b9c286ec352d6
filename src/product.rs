//! The finished milk tea and the enumerations it is made of.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::topping::Topping;

/// Drink base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilkTeaType {
    Classic,
    Matcha,
    Pearl,
}

impl MilkTeaType {
    pub const ALL: [MilkTeaType; 3] = [MilkTeaType::Classic, MilkTeaType::Matcha, MilkTeaType::Pearl];
}

impl fmt::Display for MilkTeaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilkTeaType::Classic => write!(f, "Classic"),
            MilkTeaType::Matcha => write!(f, "Matcha"),
            MilkTeaType::Pearl => write!(f, "Pearl"),
        }
    }
}

impl FromStr for MilkTeaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(MilkTeaType::Classic),
            "matcha" => Ok(MilkTeaType::Matcha),
            "pearl" => Ok(MilkTeaType::Pearl),
            _ => Err(ParseError::UnknownType(s.to_string())),
        }
    }
}

/// Cup size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => write!(f, "Small"),
            Size::Medium => write!(f, "Medium"),
            Size::Large => write!(f, "Large"),
        }
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(Size::Small),
            "medium" | "m" => Ok(Size::Medium),
            "large" | "l" => Ok(Size::Large),
            _ => Err(ParseError::UnknownSize(s.to_string())),
        }
    }
}

/// A finished order.
///
/// Only [`MilkTeaBuilder::build`](crate::builder::MilkTeaBuilder::build) creates
/// one, and no method mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MilkTea {
    #[serde(rename = "type")]
    milk_tea_type: MilkTeaType,
    size: Size,
    toppings: Topping,
}

impl MilkTea {
    pub(crate) fn new(milk_tea_type: MilkTeaType, size: Size, toppings: Topping) -> Self {
        Self {
            milk_tea_type,
            size,
            toppings,
        }
    }

    pub fn milk_tea_type(&self) -> MilkTeaType {
        self.milk_tea_type
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn toppings(&self) -> Topping {
        self.toppings
    }

    /// Render as `type: <T> - size: <S> - toppings: [<labels>]`.
    pub fn describe(&self) -> String {
        format!(
            "type: {} - size: {} - toppings: {}",
            self.milk_tea_type,
            self.size,
            self.toppings.describe()
        )
    }
}

impl fmt::Display for MilkTea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
