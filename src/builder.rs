//! Mutable accumulator that assembles a [`MilkTea`].
//!
//! The sold-out type list is fixed when the builder is created; `set_type`
//! refuses any type on it. `build` snapshots the current fields and leaves the
//! builder usable, so it can be adjusted and built again.

use crate::error::OrderError;
use crate::product::{MilkTea, MilkTeaType, Size};
use crate::topping::Topping;

#[derive(Debug, Clone)]
pub struct MilkTeaBuilder {
    milk_tea_type: MilkTeaType,
    size: Size,
    toppings: Topping,
    sold_out_types: Vec<MilkTeaType>,
}

impl Default for MilkTeaBuilder {
    fn default() -> Self {
        Self {
            milk_tea_type: MilkTeaType::Classic,
            size: Size::Medium,
            toppings: Topping::empty(),
            sold_out_types: Vec::new(),
        }
    }
}

impl MilkTeaBuilder {
    /// Create a builder with nothing sold out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that refuses the given drink types.
    pub fn with_sold_out_types(types: impl IntoIterator<Item = MilkTeaType>) -> Self {
        Self {
            sold_out_types: types.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_type_available(&self, value: MilkTeaType) -> bool {
        !self.sold_out_types.contains(&value)
    }

    /// Set the drink type, failing with [`OrderError::SoldOutType`] if it is
    /// sold out. The current type is left untouched on failure.
    pub fn set_type(&mut self, value: MilkTeaType) -> Result<&mut Self, OrderError> {
        if !self.is_type_available(value) {
            return Err(OrderError::SoldOutType(value));
        }
        self.milk_tea_type = value;
        Ok(self)
    }

    pub fn set_size(&mut self, value: Size) -> &mut Self {
        self.size = value;
        self
    }

    /// Add toppings to the ones already chosen.
    pub fn add_toppings(&mut self, value: Topping) -> &mut Self {
        self.toppings.insert(value);
        self
    }

    /// Drop toppings; ones not chosen are ignored.
    pub fn remove_topping(&mut self, value: Topping) -> &mut Self {
        self.toppings.remove(value);
        self
    }

    /// Snapshot the current choices into a new product.
    pub fn build(&self) -> MilkTea {
        MilkTea::new(self.milk_tea_type, self.size, self.toppings)
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

    pub fn sold_out_types(&self) -> &[MilkTeaType] {
        &self.sold_out_types
    }
}
