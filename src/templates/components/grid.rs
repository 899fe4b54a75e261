use crate::catalog::{CatalogView, StoreStatus};
use crate::templates::components::card::truck_card;
use maud::{html, Markup};

pub const GRID_ID: &str = "truck-grid";

/// Results header plus cards. This is the element htmx swaps on filter changes.
pub fn catalog_grid(view: &CatalogView<'_>, assets: &str) -> Markup {
    html! {
        div id=(GRID_ID) {
            @match view.status {
                StoreStatus::Loading => {
                    p.result-count { "Inventory is loading…" }
                }
                StoreStatus::Unavailable => {
                    div.notice { "We could not load the inventory right now. Please try again shortly." }
                }
                StoreStatus::Ready => {
                    p.result-count {
                        "Found " (view.total_matched) " results"
                        @if view.visible.len() < view.total_matched {
                            " (showing " (view.visible.len()) ")"
                        }
                    }
                    @if view.is_empty_result() {
                        div.notice.empty { "No trucks match these filters." }
                    } @else {
                        div.truck-cards {
                            @for listing in &view.visible {
                                (truck_card(listing, assets))
                            }
                        }
                    }
                }
            }
        }
    }
}
