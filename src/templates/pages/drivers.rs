use crate::domain::money::{format_kes, parse_amount};
use crate::domain::screen::Screen;
use crate::domain::Applicant;
use crate::templates::{asset_url, desktop_layout};
use maud::{html, Markup};

fn driver_card(driver: &Applicant, assets: &str) -> Markup {
    html! {
        article.driver-card {
            div.driver-photo {
                @if let Some(photo) = driver.photo() {
                    img src=(asset_url(assets, photo)) alt=(driver.full_name) loading="lazy";
                } @else {
                    div.placeholder { "No Photo" }
                }
                span.badge { (driver.availability) }
            }
            div.driver-details {
                h3 { (driver.full_name) }
                p.location { "📍 " (driver.current_location) }
                dl.info-grid {
                    dt { "License" } dd { (driver.license_class) }
                    dt { "Experience" } dd { (driver.experience_years) " Years" }
                }
                @if let Some(salary) = parse_amount(&driver.expected_salary) {
                    div.salary-row {
                        span.price-label { "Expected Salary:" }
                        span.finance-value { (format_kes(salary)) }
                    }
                }
                a.contact-btn href={ "tel:" (driver.phone_number) } { "Contact Driver" }
            }
        }
    }
}

pub fn drivers_page(drivers: &[Applicant], assets: &str) -> Markup {
    desktop_layout(
        "Available Drivers",
        Some(Screen::Drivers),
        html! {
            main.container {
                header.page-header {
                    h2 { "Available Drivers" }
                    p { "Found " (drivers.len()) " registered professionals" }
                    a.btn.primary href=(Screen::Register.path()) { "Become a Driver" }
                }
                div.driver-grid {
                    @for driver in drivers {
                        (driver_card(driver, assets))
                    }
                }
            }
        },
    )
}
