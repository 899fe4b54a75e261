use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filters;
pub mod grid;
pub mod hero;
pub mod modal;
pub mod price;

pub use card::truck_card;
pub use error::error_page;
pub use filters::{filter_sidebar, sort_select};
pub use grid::catalog_grid;
pub use hero::hero;
pub use modal::truck_modal;

pub fn panel(title: &str, body: Markup) -> Markup {
    html! {
        section class="panel" {
            h2 { (title) }
            div class="panel-body" {
                (body)
            }
        }
    }
}
