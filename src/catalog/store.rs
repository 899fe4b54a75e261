// src/catalog/store.rs

use crate::catalog::criteria::CatalogQuery;
use crate::catalog::filter::filter;
use crate::catalog::sort::sort;
use crate::catalog::source::SnapshotSource;
use crate::catalog::window::window;
use crate::domain::Listing;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// Nothing fetched yet.
    Loading,
    Ready,
    /// The fetch failed; the store stays empty for the rest of the session.
    Unavailable,
}

/// Read-only snapshot of the catalog, filled at most once per session.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    listings: Vec<Listing>,
    status: StoreStatus,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            status: StoreStatus::Loading,
        }
    }

    /// New store, populated from `source`.
    pub fn load(source: &dyn SnapshotSource) -> Self {
        let mut store = Self::new();
        store.populate(source);
        store
    }

    /// Fetches the snapshot. Only the first call does anything; a failure is
    /// logged and leaves the store empty with no retry.
    pub fn populate(&mut self, source: &dyn SnapshotSource) {
        if self.status != StoreStatus::Loading {
            return;
        }
        match source.fetch_snapshot() {
            Ok(listings) => {
                debug!(count = listings.len(), "catalog snapshot loaded");
                self.listings = listings;
                self.status = StoreStatus::Ready;
            }
            Err(e) => {
                warn!(error = %e, "catalog snapshot unavailable");
                self.listings.clear();
                self.status = StoreStatus::Unavailable;
            }
        }
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Filter → sort → window, recomputed in full.
    pub fn view(&self, query: &CatalogQuery, page_size: usize) -> CatalogView<'_> {
        let mut matched = filter(&self.listings, &query.criteria);
        sort(&mut matched, query.sort);
        let total_matched = matched.len();
        let visible = window(&matched, page_size).to_vec();

        CatalogView {
            visible,
            total_matched,
            status: self.status,
        }
    }
}

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    /// At most `page_size` listings.
    pub visible: Vec<&'a Listing>,
    /// Post-filter, pre-window count.
    pub total_matched: usize,
    pub status: StoreStatus,
}

impl CatalogView<'_> {
    pub fn is_empty_result(&self) -> bool {
        self.status == StoreStatus::Ready && self.total_matched == 0
    }
}
