use crate::domain::screen::Screen;
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Jamoh Trucks";
pub const PHONE: &str = "+254 791 790744";
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

fn nav_link(label: &str, screen: Screen, active: Option<Screen>) -> Markup {
    html! {
        a.nav-link.active[active == Some(screen)] href=(screen.path()) { (label) }
    }
}

pub fn desktop_layout(title: &str, active: Option<Screen>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body {
                div class="utility-bar" {
                    a href=(Screen::Drivers.path()) { "Find a Driver" }
                    span class="divider" { "|" }
                    a href=(Screen::Register.path()) { "Become a Driver" }
                    span class="divider" { "|" }
                    a href=(Screen::Financing.path()) { "Financing" }
                    span class="divider" { "|" }
                    a href={ "tel:" (PHONE.replace(' ', "")) } { "✆ " (PHONE) }
                }
                header class="site-nav" {
                    a href="/" class="brand" {
                        span class="brand-name" { (SITE_NAME) }
                        span class="brand-tag" { "Sellers Kenya" }
                    }
                    nav {
                        (nav_link("Home", Screen::Home, active))
                        (nav_link("Drivers", Screen::Drivers, active))
                        a.nav-cta.active[active == Some(Screen::Inventory)] href=(Screen::Inventory.path()) {
                            "View Inventory"
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "© " (SITE_NAME) ". Call " (PHONE) }
                }
            }
        }
    }
}
