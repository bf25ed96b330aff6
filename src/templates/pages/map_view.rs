// templates/pages/map_view.rs
//
// Card grid standing in for a map. Selecting a card opens the listing in an
// overlay with wrapping prev/next through the filtered results.

use crate::domain::browse::{count_label, Neighbors};
use crate::domain::filter::FilterOptions;
use crate::domain::property::Property;
use crate::templates::components::{filter_bar, property_card, query_string, FilterBarVm};
use crate::templates::pages::property_view::property_details;
use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

pub struct MapVm<'a> {
    pub filters: &'a FilterOptions,
    pub results: &'a [Property],
    pub selected: Option<Neighbors<'a>>,
}

fn map_link(filters: &FilterOptions, selected: Option<&str>) -> String {
    let mut q = filters.to_query();
    if let Some(id) = selected {
        q.push(("selected".into(), id.to_string()));
    }
    format!("/map{}", query_string(&q))
}

pub fn map_page(ctx: &PageCtx, vm: &MapVm) -> Markup {
    let selected_id = vm.selected.map(|n| n.current.id.as_str());

    desktop_layout(
        "Map View",
        ctx,
        html! {
            main class="container" {
                div class="section-header" {
                    h1 { "Map View" }
                    span class="muted result-count" { (count_label(vm.results.len())) " found" }
                }

                details class="filters-drawer" {
                    summary { "Filters" }
                    (filter_bar(&FilterBarVm {
                        action: "/map",
                        filters: vm.filters,
                        sort: None,
                        hidden: Vec::new(),
                    }))
                }

                div class="grid map-grid" {
                    @for p in vm.results {
                        (property_card(p, &map_link(vm.filters, Some(&p.id)), selected_id == Some(p.id.as_str())))
                    }
                }

                @if let Some(n) = vm.selected {
                    div class="overlay" role="dialog" aria-label=(n.current.title) {
                        div class="overlay-panel" {
                            nav class="overlay-nav" {
                                a href=(map_link(vm.filters, Some(&n.prev.id))) rel="prev" { "← Previous" }
                                span class="muted" { (n.index + 1) " / " (vm.results.len()) }
                                a href=(map_link(vm.filters, Some(&n.next.id))) rel="next" { "Next →" }
                                a href=(map_link(vm.filters, None)) class="close" aria-label="Close" { "✕" }
                            }
                            (property_details(n.current))
                            p { a href=(format!("/property/{}", n.current.id)) { "View full details" } }
                        }
                    }
                }
            }
        },
    )
}
