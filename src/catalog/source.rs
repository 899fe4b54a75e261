// src/catalog/source.rs

use crate::domain::Listing;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog database error: {0}")]
    Database(String),
    #[error("catalog request failed: {0}")]
    Network(String),
    #[error("catalog payload could not be decoded: {0}")]
    Decode(String),
}

/// Anything that can hand over the full current listing sequence.
///
/// No query parameters, no paging: one call returns everything, in the
/// source's default order (newest first).
pub trait SnapshotSource {
    fn fetch_snapshot(&self) -> Result<Vec<Listing>, CatalogError>;
}

impl SnapshotSource for Vec<Listing> {
    fn fetch_snapshot(&self) -> Result<Vec<Listing>, CatalogError> {
        Ok(self.clone())
    }
}
