//! # milktea - Builder pattern for milk tea orders
//!
//! A [`MilkTeaBuilder`](builder::MilkTeaBuilder) accumulates a drink type, a
//! size and a set of toppings, refusing drink types that are sold out. A
//! [`Bartender`](bartender::Bartender) drives the builder through named recipes.
//!
//! ## Modules
//!
//! - [`topping`] - Bitmask topping set with ordered rendering
//! - [`product`] - The immutable [`MilkTea`](product::MilkTea) and its enumerations
//! - [`builder`] - The mutable order accumulator
//! - [`bartender`] - Named recipes driving the builder
//! - [`config`] - Shop and menu configuration
//! - [`error`] - Order and parse errors
//!
//! ## Example
//!
//! ```
//! use milktea::bartender::Bartender;
//! use milktea::error::OrderError;
//! use milktea::product::MilkTeaType;
//!
//! let bartender = Bartender::new();
//! let tea = bartender.create_classic_milk_tea().unwrap();
//! assert_eq!(
//!     tea.to_string(),
//!     "type: Classic - size: Medium - toppings: [Lychee Jelly, Aloe Jelly]"
//! );
//!
//! let sold_out = Bartender::with_sold_out_types([MilkTeaType::Classic]);
//! assert_eq!(
//!     sold_out.create_classic_milk_tea(),
//!     Err(OrderError::SoldOutType(MilkTeaType::Classic))
//! );
//! ```

pub mod bartender;
pub mod builder;
pub mod config;
pub mod error;
pub mod product;
pub mod topping;

/// Default path constants for milktea directory structure.
pub mod paths {
    /// Project config file: `.milktea/config.md`
    pub const CONFIG_FILE: &str = ".milktea/config.md";
}
