//! The consumption aggregation engine

pub mod aggregator;
pub mod valuation;

pub use aggregator::Aggregator;
pub use valuation::Valuation;
