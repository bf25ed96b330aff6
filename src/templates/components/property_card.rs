use crate::domain::property::{format_price, ListingStatus, Property};
use maud::{html, Markup};

fn price_label(p: &Property) -> String {
    match p.status {
        ListingStatus::Rent => format!("{}/mo", format_price(p.price)),
        _ => format_price(p.price),
    }
}

fn facts(p: &Property) -> Markup {
    html! {
        ul class="facts" {
            li { (p.beds) " bd" }
            li { (p.baths) " ba" }
            li { (p.sqft) " sqft" }
        }
    }
}

/// Grid card linking to `href`.
pub fn property_card(p: &Property, href: &str, highlighted: bool) -> Markup {
    html! {
        a href=(href) class=(if highlighted { "property-card highlighted" } else { "property-card" }) {
            div class="card-image" {
                @if let Some(src) = p.cover_image() {
                    img src=(src) alt=(p.title) loading="lazy";
                }
                span class={ "badge badge-" (p.status.as_str()) } { (p.status.label()) }
                @if p.featured {
                    span class="badge badge-featured" { "Featured" }
                }
            }
            div class="card-body" {
                p class="price" { (price_label(p)) }
                h3 { (p.title) }
                p class="muted" { (p.address.one_line()) }
                (facts(p))
            }
        }
    }
}

/// Compact row for the list view.
pub fn property_row(p: &Property, href: &str) -> Markup {
    html! {
        a href=(href) class="property-row" {
            @if let Some(src) = p.cover_image() {
                img src=(src) alt=(p.title) loading="lazy";
            }
            div {
                h3 { (p.title) }
                p class="muted" { (p.address.one_line()) }
                (facts(p))
            }
            div class="row-side" {
                p class="price" { (price_label(p)) }
                span class={ "badge badge-" (p.status.as_str()) } { (p.status.label()) }
            }
        }
    }
}
