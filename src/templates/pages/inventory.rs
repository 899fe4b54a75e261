use crate::catalog::{CatalogStore, StoreStatus};
use crate::domain::screen::Screen;
use crate::templates::{components::truck_card, desktop_layout};
use maud::{html, Markup};

/// Every listing in store order, optionally with a detail modal open.
pub fn inventory_page(store: &CatalogStore, modal: Option<Markup>, assets: &str) -> Markup {
    let listings = store.listings();

    desktop_layout(
        "Available Inventory",
        Some(Screen::Inventory),
        html! {
            main.container {
                header.page-header {
                    h2 { "Available Inventory" }
                    @match store.status() {
                        StoreStatus::Ready => { p { (listings.len()) " Trucks found" } }
                        StoreStatus::Loading => { p { "Loading trucks..." } }
                        StoreStatus::Unavailable => {
                            p.notice { "We could not load the inventory right now. Please try again shortly." }
                        }
                    }
                }
                div.truck-cards {
                    @for listing in listings {
                        (truck_card(listing, assets))
                    }
                }
            }
            div id="modal" {
                @if let Some(m) = modal {
                    (m)
                }
            }
        },
    )
}
