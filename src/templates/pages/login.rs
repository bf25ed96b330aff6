use crate::templates::{desktop_layout, PageCtx};
use maud::{html, Markup};

fn credentials(
    id: &str,
    action: &str,
    email: &str,
    next: Option<&str>,
    button: &str,
    autocomplete: &str,
) -> Markup {
    html! {
        form method="post" action=(action) class="auth-form" {
            @if let Some(next) = next {
                input type="hidden" name="next" value=(next);
            }
            label for={ (id) "-email" } { "Email" }
            input
                type="email"
                id={ (id) "-email" }
                name="email"
                value=(email)
                placeholder="you@domain.com"
                autocomplete="email"
                required;

            label for={ (id) "-password" } { "Password" }
            input
                type="password"
                id={ (id) "-password" }
                name="password"
                autocomplete=(autocomplete)
                required;

            button type="submit" class="btn btn-primary" { (button) }
        }
    }
}

/// `next` is where a successful sign-in or sign-up lands.
pub fn login_page(ctx: &PageCtx, email: &str, next: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        ctx,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" { "Sign in to list properties on SkylineEstate." }

                (credentials("signin", "/login", email, next, "Sign In", "current-password"))

                h2 { "Create an account" }
                (credentials("signup", "/signup", "", next, "Sign Up", "new-password"))
            }
        },
    )
}
