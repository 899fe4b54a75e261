// src/catalog/filter.rs

use crate::catalog::criteria::{Criteria, PriceRange};
use crate::domain::Listing;

/// Listings satisfying every non-empty field of `criteria`, in snapshot order.
pub fn filter<'a>(snapshot: &'a [Listing], criteria: &Criteria) -> Vec<&'a Listing> {
    let matcher = Matcher::new(criteria);
    snapshot.iter().filter(|l| matcher.matches(l)).collect()
}

/// Criteria with the per-call parsing done once.
struct Matcher<'c> {
    make: Option<&'c str>,
    model: Option<String>,
    year: Option<&'c str>,
    location: Option<&'c str>,
    price: Option<PriceRange>,
}

fn supplied(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl<'c> Matcher<'c> {
    fn new(c: &'c Criteria) -> Self {
        Self {
            make: supplied(&c.make),
            model: supplied(&c.model).map(str::to_lowercase),
            year: supplied(&c.year),
            location: supplied(&c.location),
            price: PriceRange::parse(&c.price_range),
        }
    }

    fn matches(&self, l: &Listing) -> bool {
        if let Some(make) = self.make {
            if l.make != make {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if !l.model.to_lowercase().contains(model.as_str()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if l.year.to_string() != year {
                return false;
            }
        }
        if let Some(location) = self.location {
            if l.location != location {
                return false;
            }
        }
        if let Some(range) = &self.price {
            // unparseable prices never fall inside a numeric range
            match l.price_value() {
                Some(p) if range.contains(p) => {}
                _ => return false,
            }
        }
        true
    }
}
