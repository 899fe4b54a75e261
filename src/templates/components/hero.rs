use crate::domain::carousel::Carousel;
use crate::domain::screen::Screen;
use maud::{html, Markup};

pub const SLIDES: [&str; 3] = [
    "https://images.unsplash.com/photo-1601584115197-04ecc0da31d7?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1586191582151-f73972d107c4?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1591768793355-74d758169956?auto=format&fit=crop&q=80&w=1600",
];

/// Hero banner. While the carousel runs, the element polls once per interval
/// to advance from the slide it shows; once it leaves the page the polling
/// stops with it.
pub fn hero(carousel: &Carousel) -> Markup {
    let current = carousel.current();
    let secs = carousel.interval().as_secs().max(1);

    html! {
        section id="hero" aria-label="Hero banner"
            data-slide=(current)
            hx-get=[carousel.is_running().then(|| format!("/hero?slide={current}&advance=1"))]
            hx-trigger=[carousel.is_running().then(|| format!("every {secs}s"))]
            hx-swap="outerHTML"
        {
            @for (i, src) in SLIDES.iter().enumerate().take(carousel.len()) {
                div.hero-slide.active[i == current] style={ "background-image: url('" (src) "')" } {}
            }
            div.hero-overlay {}
            div.hero-content {
                p.eyebrow { "Trusted by transporters across East Africa" }
                h1 { "Premium Heavy Duty " span.accent { "Trucks" } }
                p.subtitle {
                    "Reliable transport solutions for the Kenyan terrain. "
                    "New arrivals weekly in Nairobi & Mombasa."
                }
                div.hero-actions {
                    a.btn.primary href=(Screen::Inventory.path()) { "View Inventory →" }
                    a.btn.secondary href=(Screen::Financing.path()) { "Get Financing" }
                }
            }
            @if !carousel.is_empty() {
                div.hero-dots {
                    @for i in 0..carousel.len() {
                        a.hero-dot.active[i == current]
                            href={ "/?slide=" (i) }
                            hx-get={ "/hero?slide=" (i) }
                            hx-target="#hero"
                            hx-swap="outerHTML"
                            aria-label={ "Slide " (i + 1) }
                        {}
                    }
                }
            }
        }
    }
}
