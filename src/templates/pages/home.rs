// templates/pages/home.rs

use crate::catalog::{CatalogQuery, CatalogView};
use crate::domain::carousel::Carousel;
use crate::domain::screen::Screen;
use crate::templates::{
    components::{catalog_grid, filter_sidebar, hero, sort_select},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub carousel: &'a Carousel,
    pub query: &'a CatalogQuery,
    pub view: &'a CatalogView<'a>,
    pub assets: &'a str,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Premium Heavy Duty Trucks",
        Some(Screen::Home),
        html! {
            (hero(vm.carousel))
            div.catalog-layout {
                (filter_sidebar(vm.query))
                main.catalog-main {
                    div.grid-header {
                        h2 { "Recent Inventory" }
                        (sort_select(vm.query.sort))
                    }
                    (catalog_grid(vm.view, vm.assets))
                    a.view-all href=(Screen::Inventory.path()) { "View All Inventory →" }
                }
            }
            div id="modal" {}
        },
    )
}
