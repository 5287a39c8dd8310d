//! Type definitions for petreport

mod error;
mod report;
mod snapshot;

pub use error::*;
pub use report::*;
pub use snapshot::*;
