// templates/pages/home.rs

use crate::domain::filter::FilterOptions;
use crate::domain::property::Property;
use crate::templates::{
    components::{filter_bar, hero, property_card, FilterBarVm},
    desktop_layout, PageCtx,
};
use maud::{html, Markup};

pub fn home_page(ctx: &PageCtx, featured: &[Property]) -> Markup {
    let filters = FilterOptions::default();

    desktop_layout(
        "Home",
        ctx,
        html! {
            (hero())

            section class="container" {
                div class="section-header" {
                    div {
                        h2 { "Featured Properties" }
                        p class="muted" { "Discover our handpicked selection of exceptional properties" }
                    }
                    a href="/properties" { "View all properties →" }
                }

                (filter_bar(&FilterBarVm {
                    action: "/properties",
                    filters: &filters,
                    sort: None,
                    hidden: Vec::new(),
                }))

                div class="grid" {
                    @for (i, p) in featured.iter().enumerate() {
                        (property_card(p, &format!("/property/{}", p.id), i == 0))
                    }
                }
            }

            section class="band" {
                div class="container" {
                    h2 { "Find Your Dream Home" }
                    div class="grid grid-3" {
                        div class="panel" {
                            h3 { "Search Properties" }
                            p { "Browse our extensive collection of properties with our intuitive search tools." }
                            a href="/properties" { "Start browsing →" }
                        }
                        div class="panel" {
                            h3 { "Map View" }
                            p { "Explore properties by location with our interactive map view." }
                            a href="/map" { "View map →" }
                        }
                        div class="panel" {
                            h3 { "List Your Property" }
                            p { "Reach buyers and renters by adding your own listing." }
                            a href="/properties/new" { "Add a property →" }
                        }
                    }
                }
            }
        },
    )
}
