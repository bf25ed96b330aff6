use crate::auth::User;
use crate::templates::components::toast_stack;
use crate::toast::Toast;
use maud::{html, Markup, DOCTYPE};

/// Per-request bits every page needs: who is signed in and which toasts to
/// show once.
#[derive(Debug, Clone, Default)]
pub struct PageCtx {
    pub user: Option<User>,
    pub toasts: Vec<Toast>,
    /// A flash cookie was read and must be cleared by this response.
    pub consumed_flash: bool,
}

impl PageCtx {
    pub fn with_toast(mut self, toast: Toast) -> Self {
        self.toasts.push(toast);
        self
    }
}

pub fn desktop_layout(title: &str, ctx: &PageCtx, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | SkylineEstate" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="navbar" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="currentColor"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      "Skyline" span class="brand-accent" { "Estate" }
                  }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/properties" { "Properties" } }
                          li { a href="/map" { "Map" } }
                          @if ctx.user.is_some() {
                              li { a href="/properties/new" { "Add Property" } }
                          }
                      }
                  }

                  @match &ctx.user {
                      Some(user) => {
                          form method="post" action="/logout" class="nav-account" {
                              span class="muted" { (user.email) }
                              button type="submit" class="btn btn-outline" { "Sign Out" }
                          }
                      }
                      None => {
                          a href="/login" class="btn btn-primary" { "Sign In" }
                      }
                  }
              }

              (toast_stack(&ctx.toasts))

              (content)

              footer class="footer" {
                  p { "© " (chrono::Utc::now().format("%Y")) " SkylineEstate. All rights reserved." }
              }
            }
        }
    }
}
