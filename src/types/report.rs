//! Report structures returned by the aggregation engine
//!
//! Field names serialize to the wire names the store's existing consumers
//! expect (camelCase, with the species tree keeping its legacy `type` /
//! `quantityProducts` keys).

use serde::Serialize;

/// Per-customer consumption totals across all of the customer's pets.
///
/// One row per customer, including all-zero rows for customers with no
/// pets or no consumption.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerConsumption {
    pub customer_id: u64,
    pub customer_name: String,
    pub product_value: f64,
    pub product_count: u64,
    pub service_value: f64,
    pub service_count: u64,
    pub general_value: f64,
    pub general_count: u64,
}

/// Three independently ranked top-5 customer lists, one per facet.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomers {
    pub top_products: Vec<CustomerConsumption>,
    pub top_services: Vec<CustomerConsumption>,
    pub top_general: Vec<CustomerConsumption>,
}

/// Aggregated consumption of a single catalog item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemConsumption {
    pub name: String,
    pub quantity: u64,
    pub value: f64,
}

/// Most-consumed catalog items, full lists sorted by quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MostConsumed {
    pub products: Vec<ItemConsumption>,
    pub services: Vec<ItemConsumption>,
}

/// Consumption totals for one breed within a species.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreedConsumption {
    pub breed: String,
    pub product_value: f64,
    #[serde(rename = "quantityProducts")]
    pub product_quantity: u64,
    pub service_value: f64,
    #[serde(rename = "quantityServices")]
    pub service_quantity: u64,
}

/// Consumption totals for one species, rolled up from its breeds.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesConsumption {
    #[serde(rename = "type")]
    pub species: String,
    pub product_value: f64,
    #[serde(rename = "quantityProducts")]
    pub product_quantity: u64,
    pub service_value: f64,
    #[serde(rename = "quantityServices")]
    pub service_quantity: u64,
    pub breeds: Vec<BreedConsumption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_consumption_wire_names() {
        let row = CustomerConsumption {
            customer_id: 7,
            customer_name: "Joan Silva".into(),
            product_value: 240.0,
            product_count: 2,
            service_value: 80.0,
            service_count: 1,
            general_value: 320.0,
            general_count: 3,
        };

        let json = serde_json::to_value(&row).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "customerId",
            "customerName",
            "productValue",
            "productCount",
            "serviceValue",
            "serviceCount",
            "generalValue",
            "generalCount",
        ] {
            assert!(obj.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(json["customerId"], 7);
        assert_eq!(json["generalValue"], 320.0);
    }

    #[test]
    fn test_top_customers_wire_names() {
        let report = TopCustomers {
            top_products: Vec::new(),
            top_services: Vec::new(),
            top_general: Vec::new(),
        };

        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("topProducts"));
        assert!(obj.contains_key("topServices"));
        assert!(obj.contains_key("topGeneral"));
    }

    #[test]
    fn test_species_tree_wire_names() {
        let report = SpeciesConsumption {
            species: "Dog".into(),
            product_value: 100.0,
            product_quantity: 4,
            service_value: 50.0,
            service_quantity: 1,
            breeds: vec![BreedConsumption {
                breed: "Labrador".into(),
                product_value: 100.0,
                product_quantity: 4,
                service_value: 50.0,
                service_quantity: 1,
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "Dog");
        assert_eq!(json["quantityProducts"], 4);
        assert_eq!(json["quantityServices"], 1);
        assert_eq!(json["breeds"][0]["breed"], "Labrador");
        assert_eq!(json["breeds"][0]["quantityProducts"], 4);
    }

    #[test]
    fn test_item_consumption_wire_names() {
        let item = ItemConsumption {
            name: "Premium Dog Food".into(),
            quantity: 5,
            value: 600.0,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Premium Dog Food");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["value"], 600.0);
    }
}
