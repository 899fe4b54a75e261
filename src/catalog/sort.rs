// src/catalog/sort.rs

use crate::catalog::criteria::SortKey;
use crate::domain::Listing;
use std::cmp::Ordering;

/// Reorders `listings` in place. Stable for every key; `Newest` is a no-op.
pub fn sort(listings: &mut [&Listing], key: SortKey) {
    if key != SortKey::Newest {
        // slice::sort_by is stable, so equal keys keep their input order
        listings.sort_by(|a, b| compare(a, b, key));
    }
}

/// Unparseable prices take part in ordering as a literal zero.
fn price_key(l: &Listing) -> f64 {
    l.price_value().unwrap_or(0.0)
}

pub fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => Ordering::Equal,
        SortKey::PriceLow => price_key(a).total_cmp(&price_key(b)),
        SortKey::PriceHigh => price_key(b).total_cmp(&price_key(a)),
        SortKey::YearDesc => b.year.cmp(&a.year),
        SortKey::YearAsc => a.year.cmp(&b.year),
    }
}
