//! Per-pet consumption valuation
//!
//! The primitive every report builds on: fold one pet's consumption
//! records into product/service value and count totals. Valuations merge
//! additively, so customer- and bucket-level totals are plain merges of
//! pet valuations.

use crate::types::{CatalogIndex, Pet};

/// Accumulated consumption totals for one pet (or a merge of several).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Valuation {
    pub product_value: f64,
    pub product_count: u64,
    pub service_value: f64,
    pub service_count: u64,
}

impl Valuation {
    /// Value a single pet's consumption against the catalog indexes.
    ///
    /// A record whose catalog reference is missing from the snapshot
    /// contributes price 0; its quantity still counts.
    pub fn of_pet(pet: &Pet, products: &CatalogIndex, services: &CatalogIndex) -> Self {
        let mut valuation = Self::default();

        for consumption in &pet.product_consumptions {
            let price = match products.get(&consumption.product_id) {
                Some(item) => item.price,
                None => {
                    tracing::warn!(
                        product_id = consumption.product_id,
                        pet_id = pet.id,
                        "product consumption references an item missing from the snapshot"
                    );
                    0.0
                }
            };
            valuation.add_product(price, consumption.quantity);
        }

        for consumption in &pet.service_consumptions {
            let price = match services.get(&consumption.service_id) {
                Some(item) => item.price,
                None => {
                    tracing::warn!(
                        service_id = consumption.service_id,
                        pet_id = pet.id,
                        "service consumption references an item missing from the snapshot"
                    );
                    0.0
                }
            };
            valuation.add_service(price);
        }

        valuation
    }

    /// Record a product purchase of `quantity` units at `unit_price`.
    pub fn add_product(&mut self, unit_price: f64, quantity: u64) {
        self.product_value += unit_price * quantity as f64;
        self.product_count = self.product_count.saturating_add(quantity);
    }

    /// Record one service usage at `unit_price`. Each usage is one unit.
    pub fn add_service(&mut self, unit_price: f64) {
        self.service_value += unit_price;
        self.service_count = self.service_count.saturating_add(1);
    }

    pub fn merge(&mut self, other: &Valuation) {
        self.product_value += other.product_value;
        self.product_count = self.product_count.saturating_add(other.product_count);
        self.service_value += other.service_value;
        self.service_count = self.service_count.saturating_add(other.service_count);
    }

    pub fn general_value(&self) -> f64 {
        self.product_value + self.service_value
    }

    pub fn general_count(&self) -> u64 {
        self.product_count.saturating_add(self.service_count)
    }
}
