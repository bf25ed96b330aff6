use maud::{html, Markup};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=2075&auto=format&fit=crop";

pub fn hero() -> Markup {
    html! {
        section class="hero" style=(format!("background-image: url({HERO_IMAGE})")) {
            div class="hero-overlay" {
                div class="hero-content" {
                    h1 { "Discover Your Dream Property" }
                    p class="lead" {
                        "Explore our curated collection of exceptional properties, from modern urban apartments to stunning coastal retreats."
                    }
                    div class="hero-actions" {
                        a href="/properties" class="btn btn-primary" { "Browse Properties" }
                        a href="/map" class="btn btn-outline" { "View Map" }
                    }
                }
            }
        }
    }
}
