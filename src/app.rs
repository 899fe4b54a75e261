// src/app.rs
use crate::catalog::CatalogStore;
use crate::config::Settings;
use crate::db::Database;
use crate::remote::RemoteCatalog;
use tracing::{info, warn};

/// Everything a request handler needs. Cloned into the server closure.
#[derive(Clone)]
pub struct App {
    pub db: Database,
    pub settings: Settings,
    remote: Option<RemoteCatalog>,
}

impl App {
    /// Reads the catalog from `settings.catalog_url` when set, otherwise from SQLite.
    pub fn new(db: Database, settings: Settings) -> Self {
        let remote = settings
            .catalog_url
            .as_deref()
            .and_then(|url| match RemoteCatalog::new(url) {
                Ok(remote) => {
                    info!(url = remote.url(), "catalog snapshots come from the remote endpoint");
                    Some(remote)
                }
                Err(e) => {
                    warn!(url, error = %e, "remote catalog unusable, reading the local database");
                    None
                }
            });

        Self {
            db,
            settings,
            remote,
        }
    }

    /// A fresh snapshot for this request.
    pub fn catalog(&self) -> CatalogStore {
        match &self.remote {
            Some(remote) => CatalogStore::load(remote),
            None => CatalogStore::load(&self.db),
        }
    }

    pub fn assets(&self) -> &str {
        &self.settings.asset_base_url
    }
}
