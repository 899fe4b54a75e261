// src/remote.rs
use crate::catalog::{CatalogError, SnapshotSource};
use crate::domain::Listing;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("jamoh-trucks/", env!("CARGO_PKG_VERSION"));

/// Reads the catalog from a JSON endpoint returning an array of listing rows,
/// such as the legacy `getTrucks.php`.
#[derive(Clone)]
pub struct RemoteCatalog {
    client: Client,
    url: String,
}

impl RemoteCatalog {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SnapshotSource for RemoteCatalog {
    fn fetch_snapshot(&self) -> Result<Vec<Listing>, CatalogError> {
        let resp = self
            .client
            .get(&self.url)
            // ngrok tunnels serve an interstitial page without this
            .header("ngrok-skip-browser-warning", "true")
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "{} answered {status}",
                self.url
            )));
        }

        let body: Value = resp
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        let listings = decode_rows(body)?;
        debug!(url = %self.url, count = listings.len(), "remote catalog fetched");
        Ok(listings)
    }
}

/// Decodes a JSON array of rows. Rows that do not decode (e.g. no usable id)
/// are skipped with a warning rather than failing the whole snapshot.
pub fn decode_rows(body: Value) -> Result<Vec<Listing>, CatalogError> {
    let rows = match body {
        Value::Array(rows) => rows,
        // the PHP endpoints report connection failures as an object
        Value::Object(obj) => {
            let message = obj
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unexpected object")
                .to_string();
            return Err(CatalogError::Decode(message));
        }
        other => {
            return Err(CatalogError::Decode(format!(
                "expected an array of listings, got {other}"
            )))
        }
    };

    let mut out = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<Listing>(row) {
            Ok(listing) => out.push(listing),
            Err(e) => warn!(index, error = %e, "skipping undecodable catalog row"),
        }
    }
    Ok(out)
}
