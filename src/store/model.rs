//! # Domain records.
//!
//! Plain serde-derived data shapes for the food-ordering domain: orders,
//! restaurants, menu items, and drivers. These carry no behavior beyond
//! builder-style copies on [`Order`]; all lookups live in
//! [`Catalog`](crate::Catalog).

use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub restaurant_id: String,
    pub items: Vec<String>,
    pub total: f64,
    pub payment_id: String,
    pub payment_confirmation: Option<String>,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a fresh order: pending, payment not yet confirmed.
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        restaurant_id: impl Into<String>,
        items: Vec<String>,
        total: f64,
        payment_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            restaurant_id: restaurant_id.into(),
            items,
            total,
            payment_id: payment_id.into(),
            payment_confirmation: None,
            status: OrderStatus::Pending,
        }
    }

    /// Returns a copy with the payment confirmation set.
    pub fn with_payment_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.payment_confirmation = Some(confirmation.into());
        self
    }

    /// Returns a copy with an updated status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

/// A partner restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub address: String,
    pub menu_item_ids: Vec<String>,
}

/// One item on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

/// A delivery driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub rating: f64,
}

impl Driver {
    /// The built-in demo roster used by the runnable examples.
    pub fn demo_roster() -> Vec<Driver> {
        let entries = [
            ("1", "Alex Johnson", 4.8),
            ("2", "Maria Garcia", 4.9),
            ("3", "James Wilson", 4.5),
            ("4", "Sarah Chen", 4.7),
            ("5", "Mike Roberts", 4.6),
        ];
        entries
            .into_iter()
            .map(|(id, name, rating)| Driver {
                id: id.to_string(),
                name: name.to_string(),
                rating,
            })
            .collect()
    }
}
