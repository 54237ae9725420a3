//! # Catalog: read-only reference data.
//!
//! [`Catalog`] holds the restaurant and menu-item lookup tables, keyed by
//! identifier. It is loaded once at startup — from the JSON files under
//! `data/` or built directly from parts in tests — then shared as
//! `Arc<Catalog>` with every call site that needs it. Nothing mutates it
//! after construction, and there are no ambient singletons: whoever needs
//! the catalog receives it explicitly.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::CatalogError;
use crate::store::model::{MenuItem, Restaurant};

/// Read-only lookup tables for restaurants and menu items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: HashMap<String, Restaurant>,
    menu_items: HashMap<String, MenuItem>,
}

impl Catalog {
    /// Loads `restaurants.json` and `menu-items.json` from `dir`.
    ///
    /// Each file holds a JSON array of records. Fails on the first
    /// unreadable or malformed file; a partially loaded catalog is never
    /// returned.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();

        let restaurants: Vec<Restaurant> = read_json(&dir.join("restaurants.json"))?;
        let menu_items: Vec<MenuItem> = read_json(&dir.join("menu-items.json"))?;

        let catalog = Self::from_parts(restaurants, menu_items);
        tracing::info!(
            restaurants = catalog.restaurant_count(),
            menu_items = catalog.menu_item_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Builds a catalog directly from record lists. Handy in tests.
    pub fn from_parts(restaurants: Vec<Restaurant>, menu_items: Vec<MenuItem>) -> Self {
        Self {
            restaurants: restaurants.into_iter().map(|r| (r.id.clone(), r)).collect(),
            menu_items: menu_items.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    /// Looks up a restaurant by id.
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.get(id)
    }

    /// Looks up a menu item by id.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.get(id)
    }

    /// Iterates over all restaurants, in no particular order.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    /// Number of restaurants loaded.
    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    /// Number of menu items loaded.
    pub fn menu_item_count(&self) -> usize {
        self.menu_items.len()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str, menu_item_ids: &[&str]) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Restaurant {id}"),
            cuisine: "Fusion".to_string(),
            rating: 4.2,
            address: "1 Demo Street".to_string(),
            menu_item_ids: menu_item_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn menu_item(id: &str, restaurant_id: &str, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price: 9.99,
            category: "Mains".to_string(),
            available,
        }
    }

    #[test]
    fn test_from_parts_keys_by_id() {
        let catalog = Catalog::from_parts(
            vec![restaurant("rest-001", &["item-1"])],
            vec![menu_item("item-1", "rest-001", true)],
        );

        assert_eq!(catalog.restaurant_count(), 1);
        assert_eq!(catalog.menu_item_count(), 1);
        assert_eq!(catalog.restaurant("rest-001").unwrap().id, "rest-001");
        assert!(catalog.restaurant("rest-404").is_none());
        assert!(catalog.menu_item("item-1").is_some());
    }

    #[test]
    fn test_parses_record_arrays() {
        let restaurants: Vec<Restaurant> = serde_json::from_str(
            r#"[{
                "id": "rest-001",
                "name": "Pasta Palace",
                "cuisine": "Italian",
                "rating": 4.6,
                "address": "12 Noodle Way",
                "menu_item_ids": ["item-1", "item-2"]
            }]"#,
        )
        .unwrap();
        let items: Vec<MenuItem> = serde_json::from_str(
            r#"[{
                "id": "item-1",
                "restaurant_id": "rest-001",
                "name": "Carbonara",
                "description": "Classic",
                "price": 14.5,
                "category": "Mains",
                "available": true
            }]"#,
        )
        .unwrap();

        let catalog = Catalog::from_parts(restaurants, items);
        assert_eq!(catalog.restaurant("rest-001").unwrap().menu_item_ids.len(), 2);
        assert!(catalog.menu_item("item-1").unwrap().available);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load_from_dir("/definitely/not/here").unwrap_err();
        assert_eq!(err.as_label(), "catalog_io");
    }
}
