use crate::catalog::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bind_addr: String,
    pub database_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    /// Number of cards shown in the home page grid.
    pub page_size: usize,
    /// When set, the catalog snapshot is read from this JSON endpoint instead of SQLite.
    pub catalog_url: Option<String>,
    /// Prefix for relative image and document paths.
    pub asset_base_url: String,
    pub carousel_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            database_path: "jamoh.sqlite3".into(),
            schema_path: "sql/schema.sql".into(),
            max_workers: 8,
            page_size: DEFAULT_PAGE_SIZE,
            catalog_url: None,
            asset_base_url: String::new(),
            carousel_interval_secs: 5,
        }
    }
}

impl Settings {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs.max(1))
    }
}

/// Defaults, then `site.toml` (if present), then `JAMOH__*` environment variables.
pub fn load_settings() -> Settings {
    let mut settings = read_settings_file(Path::new(SETTINGS_FILE)).unwrap_or_default();
    apply_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn read_settings_file(path: &Path) -> Option<Settings> {
    let raw = fs::read_to_string(path).ok()?;
    match toml::from_str::<Settings>(&raw) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
            None
        }
    }
}

pub fn apply_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("JAMOH__BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = lookup("JAMOH__DATABASE_PATH") {
        settings.database_path = v;
    }
    if let Some(v) = lookup("JAMOH__SCHEMA_PATH") {
        settings.schema_path = v;
    }
    if let Some(v) = lookup("JAMOH__MAX_WORKERS") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.max_workers = parsed.max(1);
        }
    }
    if let Some(v) = lookup("JAMOH__PAGE_SIZE") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.page_size = parsed;
        }
    }
    if let Some(v) = lookup("JAMOH__CATALOG_URL") {
        let v = v.trim().to_string();
        settings.catalog_url = if v.is_empty() { None } else { Some(v) };
    }
    if let Some(v) = lookup("JAMOH__ASSET_BASE_URL") {
        settings.asset_base_url = v;
    }
    if let Some(v) = lookup("JAMOH__CAROUSEL_INTERVAL_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.carousel_interval_secs = parsed;
        }
    }
}
