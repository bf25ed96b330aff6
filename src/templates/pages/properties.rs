// templates/pages/properties.rs

use crate::domain::browse::count_label;
use crate::domain::filter::{FilterOptions, SortKey};
use crate::domain::property::Property;
use crate::templates::components::{
    filter_bar, property_card, property_row, query_string, FilterBarVm,
};
use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("list") => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

pub struct PropertiesVm<'a> {
    pub filters: &'a FilterOptions,
    pub sort: SortKey,
    pub view: ViewMode,
    pub results: &'a [Property],
}

impl PropertiesVm<'_> {
    fn link_for(&self, view: ViewMode) -> String {
        let mut q = self.filters.to_query();
        q.push(("sort".into(), self.sort.as_str().into()));
        q.push(("view".into(), view.as_str().into()));
        format!("/properties{}", query_string(&q))
    }
}

pub fn properties_page(ctx: &PageCtx, vm: &PropertiesVm) -> Markup {
    desktop_layout(
        "Properties",
        ctx,
        html! {
            main class="container with-sidebar" {
                aside {
                    (filter_bar(&FilterBarVm {
                        action: "/properties",
                        filters: vm.filters,
                        sort: Some(vm.sort),
                        hidden: vec![("view".into(), vm.view.as_str().into())],
                    }))
                }

                section {
                    div class="section-header" {
                        div {
                            h1 { "Properties" }
                            p class="muted result-count" {
                                (count_label(vm.results.len())) " available"
                            }
                        }
                        div class="view-toggle" {
                            a href=(vm.link_for(ViewMode::Grid))
                                class=(if vm.view == ViewMode::Grid { "active" } else { "" })
                                aria-label="Grid view" { "Grid" }
                            a href=(vm.link_for(ViewMode::List))
                                class=(if vm.view == ViewMode::List { "active" } else { "" })
                                aria-label="List view" { "List" }
                        }
                    }

                    @if vm.results.is_empty() {
                        div class="empty-state" {
                            h3 { "No properties found" }
                            p class="muted" { "Try adjusting your filters to find properties." }
                        }
                    } @else if vm.view == ViewMode::List {
                        div class="list" {
                            @for p in vm.results {
                                (property_row(p, &format!("/property/{}", p.id)))
                            }
                        }
                    } @else {
                        div class="grid" {
                            @for p in vm.results {
                                (property_card(p, &format!("/property/{}", p.id), false))
                            }
                        }
                    }
                }
            }
        },
    )
}
