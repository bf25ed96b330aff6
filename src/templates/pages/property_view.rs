// templates/pages/property_view.rs

use crate::domain::property::{format_price, ListingStatus, Property};
use crate::templates::components::property_card;
use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

/// Gallery, facts and amenities of one listing. Shared with the map overlay.
pub fn property_details(p: &Property) -> Markup {
    html! {
        article class="property-details" {
            div class="gallery" {
                @for (i, src) in p.images.iter().enumerate() {
                    img src=(src) alt={ (p.title) " photo " (i + 1) } loading=(if i == 0 { "eager" } else { "lazy" });
                }
            }

            div class="details-header" {
                div {
                    span class={ "badge badge-" (p.status.as_str()) } { (p.status.label()) }
                    h1 { (p.title) }
                    p class="muted" { (p.address.one_line()) }
                }
                p class="price" {
                    (format_price(p.price))
                    @if p.status == ListingStatus::Rent { "/mo" }
                }
            }

            dl class="fact-grid" {
                div { dt { "Beds" } dd { (p.beds) } }
                div { dt { "Baths" } dd { (p.baths) } }
                div { dt { "Area" } dd { (p.sqft) " sqft" } }
                div { dt { "Type" } dd { (p.property_type.label()) } }
                div {
                    dt { "Year" }
                    dd {
                        @if p.year_built > 0 { (p.year_built) } @else { "—" }
                    }
                }
            }

            section {
                h2 { "Description" }
                p { (p.description) }
            }

            @if !p.amenities.is_empty() {
                section {
                    h2 { "Amenities" }
                    ul class="amenities" {
                        @for a in &p.amenities {
                            li { (a) }
                        }
                    }
                }
            }

            section {
                h2 { "Location" }
                p class="muted coordinates" {
                    (format!("{:.4}, {:.4}", p.location.lat, p.location.lng))
                }
            }

            button type="button" class="btn btn-primary" { "Contact Agent" }
        }
    }
}

pub fn property_page(ctx: &PageCtx, p: &Property, similar: &[Property]) -> Markup {
    desktop_layout(
        &p.title,
        ctx,
        html! {
            main class="container" {
                p { a href="/properties" { "← Back to Properties" } }

                (property_details(p))

                @if !similar.is_empty() {
                    section class="similar" {
                        h2 { "Similar Properties" }
                        div class="grid" {
                            @for s in similar {
                                (property_card(s, &format!("/property/{}", s.id), false))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn property_not_found_page(ctx: &PageCtx) -> Markup {
    desktop_layout(
        "Property Not Found",
        ctx,
        html! {
            main class="container narrow" {
                h1 { "Property Not Found" }
                p class="lead" { "The property you're looking for doesn't exist or has been removed." }
                a href="/properties" class="btn btn-primary" { "Back to Properties" }
            }
        },
    )
}
