//! Consumption and revenue reporting engine for pet-care CRM snapshots
//!
//! Loads a materialized snapshot of customers, pets, catalog items, and
//! consumption events, and computes ranked consumption reports: per-customer
//! summaries, top-5 customer rankings by value and by quantity, most-consumed
//! catalog items, and consumption grouped by pet species and breed.

pub mod cli;
pub mod loader;
pub mod logger;
pub mod reports;
pub mod types;
