use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        &PageCtx::default(),
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p class="lead" { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
