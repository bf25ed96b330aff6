use maud::{html, Markup};

use crate::toast::Toast;

pub mod error;
pub mod filter_bar;
pub mod hero;
pub mod property_card;

pub use error::error_page;
pub use filter_bar::{filter_bar, FilterBarVm};
pub use hero::hero;
pub use property_card::{property_card, property_row};

pub fn toast_stack(toasts: &[Toast]) -> Markup {
    html! {
        @if !toasts.is_empty() {
            div class="toasts" role="status" aria-live="polite" {
                @for t in toasts {
                    div class=(if t.is_destructive() { "toast toast-destructive" } else { "toast" }) {
                        strong { (t.title) }
                        @if let Some(d) = &t.description {
                            p { (d) }
                        }
                    }
                }
            }
        }
    }
}

/// `?a=1&b=2`, or empty for no pairs.
pub fn query_string(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let q = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("?{q}")
}
