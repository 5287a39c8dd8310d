//! Aggregation engine for consumption reports
//!
//! Every report is a deterministic fold over one snapshot. Ranking sorts
//! are stable and use no secondary key, so equal metrics keep snapshot
//! order; grouped reports accumulate in first-seen order for the same
//! reason.

use std::collections::HashMap;

use crate::reports::Valuation;
use crate::types::{
    BreedConsumption, CatalogIndex, CustomerConsumption, ItemConsumption, MostConsumed, Snapshot,
    SpeciesConsumption, TopCustomers,
};

/// Entries per ranked customer facet
const TOP_N: usize = 5;

/// Display name for consumption pointing at a missing catalog item
const UNKNOWN_ITEM: &str = "Unknown";

/// Aggregator for computing consumption reports
pub struct Aggregator;

impl Aggregator {
    /// Per-customer consumption summary (one row per customer, snapshot order).
    ///
    /// Customers with no pets or no consumption get an all-zero row rather
    /// than being omitted.
    pub fn customer_consumption(snapshot: &Snapshot) -> Vec<CustomerConsumption> {
        let products = snapshot.product_index();
        let services = snapshot.service_index();

        snapshot
            .customers
            .iter()
            .map(|customer| {
                let mut totals = Valuation::default();
                for pet in &customer.pets {
                    totals.merge(&Valuation::of_pet(pet, &products, &services));
                }

                CustomerConsumption {
                    customer_id: customer.id,
                    customer_name: customer.display_label().to_string(),
                    product_value: totals.product_value,
                    product_count: totals.product_count,
                    service_value: totals.service_value,
                    service_count: totals.service_count,
                    general_value: totals.general_value(),
                    general_count: totals.general_count(),
                }
            })
            .collect()
    }

    /// Top-5 customers per facet, ranked by monetary value.
    ///
    /// Facets rank independently: a customer with no consumption in a facet
    /// is absent from that facet's list, never a zero placeholder.
    pub fn top_customers_by_value(rows: &[CustomerConsumption]) -> TopCustomers {
        TopCustomers {
            top_products: ranked(
                rows,
                |a, b| a.product_value.total_cmp(&b.product_value),
                |row| row.product_count > 0,
            ),
            top_services: ranked(
                rows,
                |a, b| a.service_value.total_cmp(&b.service_value),
                |row| row.service_count > 0,
            ),
            top_general: ranked(
                rows,
                |a, b| a.general_value.total_cmp(&b.general_value),
                |row| row.general_count > 0,
            ),
        }
    }

    /// Top-5 customers per facet, ranked by unit quantity.
    pub fn top_customers_by_quantity(rows: &[CustomerConsumption]) -> TopCustomers {
        TopCustomers {
            top_products: ranked(
                rows,
                |a, b| a.product_count.cmp(&b.product_count),
                |row| row.product_count > 0,
            ),
            top_services: ranked(
                rows,
                |a, b| a.service_count.cmp(&b.service_count),
                |row| row.service_count > 0,
            ),
            top_general: ranked(
                rows,
                |a, b| a.general_count.cmp(&b.general_count),
                |row| row.general_count > 0,
            ),
        }
    }

    /// Most-consumed catalog items, grouped per item across all pets.
    ///
    /// Items nobody consumed are omitted; an unresolvable reference becomes
    /// an "Unknown" row valued at 0. Full lists, no truncation.
    pub fn most_consumed(snapshot: &Snapshot) -> MostConsumed {
        let mut product_groups = ItemGroups::default();
        let mut service_groups = ItemGroups::default();

        for pet in snapshot.pets() {
            for consumption in &pet.product_consumptions {
                product_groups.add(consumption.product_id, consumption.quantity);
            }
            for consumption in &pet.service_consumptions {
                service_groups.add(consumption.service_id, 1);
            }
        }

        MostConsumed {
            products: product_groups.into_ranked(&snapshot.product_index()),
            services: service_groups.into_ranked(&snapshot.service_index()),
        }
    }

    /// Consumption grouped by pet species, then breed, with per-species
    /// roll-ups. Buckets are created lazily: a species/breed appears only
    /// when at least one pet fell into it.
    pub fn consumption_by_species(snapshot: &Snapshot) -> Vec<SpeciesConsumption> {
        let products = snapshot.product_index();
        let services = snapshot.service_index();

        let mut buckets: Vec<SpeciesBuckets> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for pet in snapshot.pets() {
            let valuation = Valuation::of_pet(pet, &products, &services);

            let next = buckets.len();
            let slot = *slots.entry(pet.species.clone()).or_insert(next);
            if slot == next {
                buckets.push(SpeciesBuckets::new(&pet.species));
            }
            buckets[slot].add(&pet.breed, &valuation);
        }

        let mut report: Vec<SpeciesConsumption> =
            buckets.into_iter().map(SpeciesBuckets::finish).collect();
        report.sort_by(|a, b| {
            (b.product_value + b.service_value).total_cmp(&(a.product_value + a.service_value))
        });
        report
    }
}

/// Filter, stable-sort descending, truncate to the facet's top 5.
fn ranked<C, P>(rows: &[CustomerConsumption], compare: C, in_facet: P) -> Vec<CustomerConsumption>
where
    C: Fn(&CustomerConsumption, &CustomerConsumption) -> std::cmp::Ordering,
    P: Fn(&CustomerConsumption) -> bool,
{
    let mut ranked: Vec<CustomerConsumption> =
        rows.iter().filter(|row| in_facet(row)).cloned().collect();
    ranked.sort_by(|a, b| compare(b, a));
    ranked.truncate(TOP_N);
    ranked
}

/// Per-item quantity accumulator keeping first-seen order.
#[derive(Default)]
struct ItemGroups {
    totals: Vec<(u64, u64)>,
    slots: HashMap<u64, usize>,
}

impl ItemGroups {
    fn add(&mut self, item_id: u64, quantity: u64) {
        let next = self.totals.len();
        let slot = *self.slots.entry(item_id).or_insert(next);
        if slot == next {
            self.totals.push((item_id, 0));
        }
        self.totals[slot].1 = self.totals[slot].1.saturating_add(quantity);
    }

    fn into_ranked(self, catalog: &CatalogIndex) -> Vec<ItemConsumption> {
        let mut ranked: Vec<ItemConsumption> = self
            .totals
            .into_iter()
            .map(|(item_id, quantity)| match catalog.get(&item_id) {
                Some(item) => ItemConsumption {
                    name: item.name.clone(),
                    quantity,
                    value: quantity as f64 * item.price,
                },
                None => {
                    tracing::warn!(
                        item_id,
                        "consumption references a catalog item missing from the snapshot"
                    );
                    ItemConsumption {
                        name: UNKNOWN_ITEM.into(),
                        quantity,
                        value: 0.0,
                    }
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked
    }
}

/// Breed-level accumulators for one species, kept in first-seen order.
struct SpeciesBuckets {
    species: String,
    breeds: Vec<(String, Valuation)>,
    slots: HashMap<String, usize>,
}

impl SpeciesBuckets {
    fn new(species: &str) -> Self {
        Self {
            species: species.to_string(),
            breeds: Vec::new(),
            slots: HashMap::new(),
        }
    }

    fn add(&mut self, breed: &str, valuation: &Valuation) {
        let next = self.breeds.len();
        let slot = *self.slots.entry(breed.to_string()).or_insert(next);
        if slot == next {
            self.breeds.push((breed.to_string(), Valuation::default()));
        }
        self.breeds[slot].1.merge(valuation);
    }

    fn finish(self) -> SpeciesConsumption {
        let mut rollup = Valuation::default();
        let mut breeds: Vec<BreedConsumption> = self
            .breeds
            .into_iter()
            .map(|(breed, valuation)| {
                rollup.merge(&valuation);
                BreedConsumption {
                    breed,
                    product_value: valuation.product_value,
                    product_quantity: valuation.product_count,
                    service_value: valuation.service_value,
                    service_quantity: valuation.service_count,
                }
            })
            .collect();
        breeds.sort_by(|a, b| {
            (b.product_value + b.service_value).total_cmp(&(a.product_value + a.service_value))
        });

        SpeciesConsumption {
            species: self.species,
            product_value: rollup.product_value,
            product_quantity: rollup.product_count,
            service_value: rollup.service_value,
            service_quantity: rollup.service_count,
            breeds,
        }
    }
}
