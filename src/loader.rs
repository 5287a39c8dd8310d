//! Snapshot file loading
//!
//! Reads the store's JSON export from disk and deserializes it into a
//! [`Snapshot`](crate::types::Snapshot). A file that cannot be read or
//! does not match the snapshot shape is a fatal caller error; an empty
//! snapshot (no customers, no consumption) is valid input.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{PetReportError, Result, Snapshot};

/// Loads one snapshot file per report invocation.
pub struct SnapshotLoader {
    path: PathBuf,
}

impl SnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the snapshot.
    pub fn load(&self) -> Result<Snapshot> {
        let mut bytes = fs::read(&self.path).map_err(PetReportError::Io)?;

        let snapshot: Snapshot = simd_json::from_slice(&mut bytes)
            .map_err(|e| PetReportError::Parse(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            customers = snapshot.customers.len(),
            products = snapshot.products.len(),
            services = snapshot.services.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }
}
