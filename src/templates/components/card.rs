use crate::domain::Listing;
use crate::templates::asset_url;
use crate::templates::components::price::{condition_badge, price_summary};
use maud::{html, Markup};

/// Grid card. Clicking opens the detail modal, or the inventory page without htmx.
pub fn truck_card(listing: &Listing, assets: &str) -> Markup {
    let id = listing.id;
    let plate = match listing.number_plate.trim() {
        "" => "N/A",
        p => p,
    };

    html! {
        article.truck-card data-id=(id) {
            a.card-link
                href={ "/inventory?truck=" (id) }
                hx-get={ "/trucks/" (id) }
                hx-target="#modal"
                hx-swap="innerHTML"
            {
                div.card-image {
                    @if let Some(img) = listing.thumbnail() {
                        img src=(asset_url(assets, img)) alt=(listing.model) loading="lazy";
                    } @else {
                        div.placeholder { "No Image Available" }
                    }
                    (condition_badge(listing))
                    @if listing.images.len() > 1 {
                        span.photo-count { (listing.images.len()) " photos" }
                    }
                }
                div.card-details {
                    h3 { (listing.title()) }
                    div.meta {
                        span.chip { (listing.year) }
                        span.dot { "•" }
                        span { (listing.location) }
                    }
                    dl.info-grid {
                        dt { "Plate" } dd { (plate) }
                        dt { "Payment" } dd { (listing.payment_method) }
                    }
                    (price_summary(&listing.payment_plan()))
                }
            }
        }
    }
}
