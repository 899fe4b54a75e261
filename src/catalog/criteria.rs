// src/catalog/criteria.rs

use crate::domain::money::parse_amount;

/// User-supplied filter fields. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub make: String,
    pub model: String,
    pub year: String,
    pub location: String,
    /// `"min-max"`, `"min-"` or `"min"`.
    pub price_range: String,
}

/// Parsed price bounds. `max == None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Returns `None` when the text imposes no constraint (empty or unparseable min).
    ///
    /// A missing, malformed or zero max leaves the range open-ended.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (min_text, max_text) = match text.split_once('-') {
            Some((lo, hi)) => (lo.trim(), hi.trim()),
            None => (text, ""),
        };

        let min = if min_text.is_empty() {
            0.0
        } else {
            parse_amount(min_text)?
        };
        let max = parse_amount(max_text).filter(|m| *m > 0.0);

        Some(PriceRange { min, max })
    }

    pub fn contains(&self, price: f64) -> bool {
        match self.max {
            Some(max) => price >= self.min && price <= max,
            None => price >= self.min,
        }
    }
}

/// Closed set of orderings. `Newest` keeps store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    YearDesc,
    YearAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::YearDesc,
        SortKey::YearAsc,
    ];

    /// Unknown values fall back to `Newest`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "year-desc" => SortKey::YearDesc,
            "year-asc" => SortKey::YearAsc,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::YearDesc => "year-desc",
            SortKey::YearAsc => "year-asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest Arrivals",
            SortKey::PriceLow => "Price: Low → High",
            SortKey::PriceHigh => "Price: High → Low",
            SortKey::YearDesc => "Year: Newest",
            SortKey::YearAsc => "Year: Oldest",
        }
    }
}

/// Everything a catalog request asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub criteria: Criteria,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Reads `make`, `model`, `year`, `location`, `priceRange` and `sort`
    /// from a raw query string. Unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut out = CatalogQuery::default();
        let Some(query) = query else {
            return out;
        };

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "make" => out.criteria.make = value,
                "model" => out.criteria.model = value,
                "year" => out.criteria.year = value,
                "location" => out.criteria.location = value,
                "priceRange" | "price_range" => out.criteria.price_range = value,
                "sort" => out.sort = SortKey::parse(&value),
                _ => {}
            }
        }
        out
    }

    /// Query string that reproduces this request (empty fields omitted).
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        let c = &self.criteria;
        for (key, value) in [
            ("make", &c.make),
            ("model", &c.model),
            ("year", &c.year),
            ("location", &c.location),
            ("priceRange", &c.price_range),
        ] {
            if !value.is_empty() {
                ser.append_pair(key, value);
            }
        }
        if self.sort != SortKey::Newest {
            ser.append_pair("sort", self.sort.as_str());
        }
        ser.finish()
    }
}
