//! Plain-text rendering of report structures
//!
//! Presentation only: fixed-width columns, two-decimal values, no
//! currency or locale handling.

use crate::types::{CustomerConsumption, MostConsumed, SpeciesConsumption, TopCustomers};

pub fn summary(rows: &[CustomerConsumption]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>10} {:>6} {:>10} {:>6} {:>10} {:>6}\n",
        "Customer", "Products", "Qty", "Services", "Qty", "General", "Qty"
    ));

    if rows.is_empty() {
        out.push_str("(no customers in snapshot)\n");
        return out;
    }

    for row in rows {
        out.push_str(&format!(
            "{:<24} {:>10.2} {:>6} {:>10.2} {:>6} {:>10.2} {:>6}\n",
            row.customer_name,
            row.product_value,
            row.product_count,
            row.service_value,
            row.service_count,
            row.general_value,
            row.general_count
        ));
    }
    out
}

pub fn rankings(label: &str, report: &TopCustomers) -> String {
    let mut out = String::new();
    ranking_section(
        &mut out,
        &format!("Top customers {label} — products"),
        &report.top_products,
        |r| (r.product_value, r.product_count),
    );
    ranking_section(
        &mut out,
        &format!("Top customers {label} — services"),
        &report.top_services,
        |r| (r.service_value, r.service_count),
    );
    ranking_section(
        &mut out,
        &format!("Top customers {label} — general"),
        &report.top_general,
        |r| (r.general_value, r.general_count),
    );
    out
}

fn ranking_section<F>(out: &mut String, title: &str, rows: &[CustomerConsumption], facet: F)
where
    F: Fn(&CustomerConsumption) -> (f64, u64),
{
    out.push_str(title);
    out.push('\n');

    if rows.is_empty() {
        out.push_str("  (none)\n\n");
        return;
    }

    for (rank, row) in rows.iter().enumerate() {
        let (value, count) = facet(row);
        out.push_str(&format!(
            "  {:>2}. {:<24} {:>10.2} {:>6}\n",
            rank + 1,
            row.customer_name,
            value,
            count
        ));
    }
    out.push('\n');
}

pub fn most_consumed(report: &MostConsumed) -> String {
    let mut out = String::new();
    item_section(&mut out, "Most consumed — products", &report.products);
    item_section(&mut out, "Most consumed — services", &report.services);
    out
}

fn item_section(out: &mut String, title: &str, items: &[crate::types::ItemConsumption]) {
    out.push_str(title);
    out.push('\n');

    if items.is_empty() {
        out.push_str("  (no consumption recorded)\n\n");
        return;
    }

    for item in items {
        out.push_str(&format!(
            "  {:<24} {:>6} {:>10.2}\n",
            item.name, item.quantity, item.value
        ));
    }
    out.push('\n');
}

pub fn by_species(report: &[SpeciesConsumption]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<26} {:>10} {:>6} {:>10} {:>6}\n",
        "Type / Breed", "Products", "Qty", "Services", "Qty"
    ));

    if report.is_empty() {
        out.push_str("(no pets in snapshot)\n");
        return out;
    }

    for species in report {
        out.push_str(&format!(
            "{:<26} {:>10.2} {:>6} {:>10.2} {:>6}\n",
            species.species,
            species.product_value,
            species.product_quantity,
            species.service_value,
            species.service_quantity
        ));
        for breed in &species.breeds {
            out.push_str(&format!(
                "  {:<24} {:>10.2} {:>6} {:>10.2} {:>6}\n",
                breed.breed,
                breed.product_value,
                breed.product_quantity,
                breed.service_value,
                breed.service_quantity
            ));
        }
    }
    out
}
