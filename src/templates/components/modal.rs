use crate::domain::carousel::{wrap_next, wrap_prev};
use crate::domain::Listing;
use crate::templates::asset_url;
use crate::templates::components::price::{condition_badge, payment_plan};
use maud::{html, Markup};

fn step_link(listing: &Listing, img: usize, label: &str, class: &str) -> Markup {
    html! {
        a class=(class)
            href={ "/inventory?truck=" (listing.id) "&img=" (img) }
            hx-get={ "/trucks/" (listing.id) "?img=" (img) }
            hx-target="#modal"
            hx-swap="innerHTML"
        { (label) }
    }
}

/// Detail modal with its image gallery. `img` is wrapped into range.
pub fn truck_modal(listing: &Listing, img: usize, assets: &str) -> Markup {
    let count = listing.images.len();
    let current = if count == 0 { 0 } else { img % count };

    html! {
        div.modal-overlay role="dialog" aria-modal="true" {
            div.modal-content {
                a.close-btn href="/inventory" aria-label="Close" { "✕" }
                div.modal-grid {
                    div.gallery {
                        @if let Some(src) = listing.images.get(current) {
                            img.modal-img src=(asset_url(assets, src)) alt=(listing.title());
                            @if count > 1 {
                                (step_link(listing, wrap_prev(current, count), "‹", "nav-btn left"))
                                (step_link(listing, wrap_next(current, count), "›", "nav-btn right"))
                                div.gallery-dots {
                                    @for i in 0..count {
                                        span.gallery-dot.active[i == current] {}
                                    }
                                }
                            }
                        } @else {
                            div.placeholder { "No Images" }
                        }
                    }
                    div.modal-details {
                        h2 { (listing.title()) }
                        div.meta {
                            (condition_badge(listing))
                            span { "Year: " (listing.year) }
                        }
                        dl.info-grid {
                            dt { "Location:" } dd { (listing.location) }
                            dt { "Color:" } dd { (listing.color) }
                            dt { "Plate:" } dd { (listing.number_plate) }
                            dt { "Payment:" } dd { (listing.payment_method) }
                        }
                        @if let Some(description) = &listing.description {
                            p.description { (description) }
                        }
                        (payment_plan(&listing.payment_plan()))
                        a.contact-btn href="tel:+254791790744" { "Inquire About This Truck" }
                    }
                }
            }
        }
    }
}
