//! # Static reference data.
//!
//! This module provides the domain records and their read-only store:
//! - [`Order`], [`OrderStatus`] - customer orders
//! - [`Restaurant`], [`MenuItem`] - partner reference data
//! - [`Driver`] - delivery drivers
//! - [`Catalog`] - lookup tables loaded once at startup

mod catalog;
mod model;

pub use catalog::Catalog;
pub use model::{Driver, MenuItem, Order, OrderStatus, Restaurant};
