use crate::domain::screen::Screen;
use crate::templates::components::panel;
use crate::templates::desktop_layout;
use crate::templates::layouts::desktop::PHONE;
use maud::{html, Markup};

pub fn financing_page() -> Markup {
    desktop_layout(
        "Truck Financing",
        Some(Screen::Financing),
        html! {
            main.container.financing {
                div.financing-hero { h1 { "Truck Financing" } }
                (panel("Drive now, pay over time", html! {
                    p {
                        "You may have found your dream truck on our site but don't have the full amount ready just yet. "
                        strong { "Don't worry!" }
                    }
                    p {
                        "We offer financing options where you can partner with a bank or a micro-lending service "
                        "to provide the funding you need."
                    }
                    hr;
                    p {
                        "If this is the best path for your situation, please feel free to contact "
                        span.accent { "Jamoh" }
                        ", who will guide you through the next steps."
                    }
                    a.contact-btn href={ "tel:" (PHONE.replace(' ', "")) } { "Contact Jamoh Now" }
                }))
            }
        },
    )
}
