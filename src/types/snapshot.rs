//! Snapshot entities handed to the reporting engine
//!
//! Mirrors the store's export format: customers own pets, pets own
//! consumption records, and the catalog arrives as two flat item lists.
//! The engine treats all of it as read-only input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product or service in the catalog.
///
/// Products and services share one shape but form two disjoint sets;
/// `price` is the current unit price, the only price the snapshot carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// One product purchase event: a pet bought `quantity` units of a product.
/// Repeated purchases of the same product stay separate records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductConsumption {
    pub product_id: u64,
    pub quantity: u64,
    pub consumed_at: DateTime<Utc>,
}

/// One service usage event. Each record is exactly one unit; there is no
/// quantity field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConsumption {
    pub service_id: u64,
    pub consumed_at: DateTime<Utc>,
}

/// A pet, owned by exactly one customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: u64,
    pub name: String,
    /// Free-text "type" of animal (e.g. "Dog", "Cat")
    pub species: String,
    pub breed: String,
    pub gender: String,
    #[serde(default)]
    pub product_consumptions: Vec<ProductConsumption>,
    #[serde(default)]
    pub service_consumptions: Vec<ServiceConsumption>,
}

/// A customer record with its owned pets.
///
/// Contact fields are carried through from the store but ignored by
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Customer {
    /// Preferred display label: `display_name`, falling back to `name`.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Catalog lookup by item id, borrowed from a snapshot.
pub type CatalogIndex<'a> = HashMap<u64, &'a CatalogItem>;

/// The fully materialized input for one report computation.
///
/// All three collections are required; empty collections are valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub products: Vec<CatalogItem>,
    pub services: Vec<CatalogItem>,
}

impl Snapshot {
    pub fn product_index(&self) -> CatalogIndex<'_> {
        Self::index(&self.products)
    }

    pub fn service_index(&self) -> CatalogIndex<'_> {
        Self::index(&self.services)
    }

    fn index(items: &[CatalogItem]) -> CatalogIndex<'_> {
        items.iter().map(|item| (item.id, item)).collect()
    }

    /// All pets across all customers, in snapshot order.
    pub fn pets(&self) -> impl Iterator<Item = &Pet> {
        self.customers.iter().flat_map(|c| c.pets.iter())
    }
}
