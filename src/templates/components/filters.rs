use crate::catalog::{CatalogQuery, SortKey};
use maud::{html, Markup};

const MAKES: [&str; 4] = ["Scania", "Mercedes", "Volvo", "Isuzu"];
const LOCATIONS: [&str; 3] = ["Mombasa", "Nairobi", "Nakuru"];
const YEARS: [i64; 7] = [2024, 2023, 2022, 2021, 2020, 2019, 2018];
const PRICE_RANGES: [(&str, &str); 4] = [
    ("0-3000000", "Under 3M KES"),
    ("3000000-6000000", "3M – 6M KES"),
    ("6000000-10000000", "6M – 10M KES"),
    ("10000000", "Over 10M KES"),
];

pub const FILTER_FORM_ID: &str = "filters";

/// Options for a select: the fixed list plus the current value when it is
/// not one of them, so a shared URL still shows what it filters on.
fn choices(fixed: &[&str], current: &str) -> Vec<String> {
    let mut out: Vec<String> = fixed.iter().map(|s| s.to_string()).collect();
    if !current.is_empty() && !fixed.contains(&current) {
        out.push(current.to_string());
    }
    out
}

fn select(name: &str, any: &str, options: &[(String, String)], current: &str) -> Markup {
    html! {
        select id={ "filter-" (name) } name=(name) {
            option value="" selected[current.is_empty()] { (any) }
            @for (value, label) in options {
                option value=(value) selected[value == current] { (label) }
            }
        }
    }
}

fn same(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// The "Find Your Truck" sidebar. Any change re-requests the grid fragment;
/// without htmx the form submits to the home page.
pub fn filter_sidebar(query: &CatalogQuery) -> Markup {
    let c = &query.criteria;
    let years: Vec<String> = YEARS.iter().map(|y| y.to_string()).collect();
    let year_refs: Vec<&str> = years.iter().map(String::as_str).collect();
    let prices: Vec<(String, String)> = PRICE_RANGES
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect();

    html! {
        aside.filter-card {
            h3 { "Find Your Truck" }
            form id=(FILTER_FORM_ID)
                action="/"
                method="get"
                hx-get="/catalog"
                hx-target="#truck-grid"
                hx-swap="outerHTML"
                hx-trigger="change, keyup changed delay:300ms from:#filter-model"
            {
                div.filter-group {
                    label for="filter-make" { "Brand" }
                    (select("make", "All Makes", &same(choices(&MAKES, &c.make)), &c.make))
                }
                div.filter-group {
                    label for="filter-model" { "Model" }
                    input id="filter-model" name="model" type="text" placeholder="e.g. Actros" value=(c.model);
                }
                div.filter-group {
                    label for="filter-location" { "Location" }
                    (select("location", "All Locations", &same(choices(&LOCATIONS, &c.location)), &c.location))
                }
                div.filter-group {
                    label for="filter-year" { "Year" }
                    (select("year", "Any Year", &same(choices(&year_refs, &c.year)), &c.year))
                }
                div.filter-group {
                    label for="filter-priceRange" { "Price Range" }
                    (select("priceRange", "Any Price", &prices, &c.price_range))
                }
                noscript { button type="submit" { "Apply" } }
                a.reset-btn href="/" { "Clear All Filters" }
            }
        }
    }
}

/// Sort select. Lives outside the swapped grid but belongs to the filter form.
pub fn sort_select(current: SortKey) -> Markup {
    html! {
        div.sort-control {
            label for="sort-select" { "Sort:" }
            select id="sort-select" name="sort" form=(FILTER_FORM_ID)
                hx-get="/catalog"
                hx-include={ "#" (FILTER_FORM_ID) }
                hx-target="#truck-grid"
                hx-swap="outerHTML"
            {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[key == current] { (key.label()) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_criteria_are_preselected() {
        let q = CatalogQuery::from_query(Some("make=Volvo&priceRange=3000000-6000000&sort=price-low"));
        let sidebar = filter_sidebar(&q).into_string();
        assert!(sidebar.contains(r#"<option value="Volvo" selected>"#));
        assert!(sidebar.contains(r#"<option value="3000000-6000000" selected>"#));

        let sort = sort_select(q.sort).into_string();
        assert!(sort.contains(r#"<option value="price-low" selected>"#));
    }

    #[test]
    fn unknown_make_from_the_url_stays_visible() {
        let q = CatalogQuery::from_query(Some("make=DAF"));
        let sidebar = filter_sidebar(&q).into_string();
        assert!(sidebar.contains(r#"<option value="DAF" selected>"#));
    }
}
