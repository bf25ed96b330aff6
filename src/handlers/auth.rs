// src/handlers/auth.rs
use astra::Request;

use crate::app::{unix_now, App};
use crate::auth::{AuthError, SESSION_COOKIE};
use crate::handlers::{page_ctx, safe_next};
use crate::requests::{cookie, first, query_pairs, read_form};
use crate::responses::{html_page, redirect, redirect_with, ResultResp};
use crate::templates::pages::login_page;
use crate::toast::Toast;

/// Small bound for credential posts; uploads use the configured limit.
const AUTH_BODY_LIMIT: u64 = 16 * 1024;

pub fn login(req: &Request, app: &App) -> ResultResp {
    let pairs = query_pairs(req);
    let next = safe_next(first(&pairs, "next"));

    if app.current_user(req).is_some() {
        return redirect(next.unwrap_or("/"));
    }

    let ctx = page_ctx(req, app);
    html_page(200, login_page(&ctx, "", next), &ctx)
}

fn failure_toast(title: &str, err: &AuthError) -> Toast {
    match err {
        AuthError::Server(e) => {
            log::error!("{title}: {e}");
            Toast::error("Something went wrong", "Please try again later.")
        }
        other => Toast::error(title, other.to_string()),
    }
}

fn failure_status(err: &AuthError) -> u16 {
    match err {
        AuthError::InvalidCredentials => 401,
        AuthError::Server(e) => e.status(),
        _ => 400,
    }
}

pub fn sign_in(req: &mut Request, app: &App) -> ResultResp {
    let form = read_form(req, AUTH_BODY_LIMIT)?;
    let email = form.first("email").unwrap_or_default();
    let password = form.first("password").unwrap_or_default();
    let next = safe_next(form.first("next")).unwrap_or("/");

    match app.auth.sign_in(email, password, unix_now()) {
        Ok(session) => redirect_with(
            next,
            &[Toast::success("Welcome back!", "You have successfully signed in.")],
            vec![app.session_cookie(&session.token)],
        ),
        Err(err) => {
            let ctx = page_ctx(req, app).with_toast(failure_toast("Sign in failed", &err));
            html_page(
                failure_status(&err),
                login_page(&ctx, email, safe_next(form.first("next"))),
                &ctx,
            )
        }
    }
}

pub fn sign_up(req: &mut Request, app: &App) -> ResultResp {
    let form = read_form(req, AUTH_BODY_LIMIT)?;
    let email = form.first("email").unwrap_or_default();
    let password = form.first("password").unwrap_or_default();
    let next = safe_next(form.first("next")).unwrap_or("/");

    match app.auth.sign_up(email, password, unix_now()) {
        Ok(session) => redirect_with(
            next,
            &[Toast::success(
                "Account created",
                "You have successfully created an account.",
            )],
            vec![app.session_cookie(&session.token)],
        ),
        Err(err) => {
            let ctx = page_ctx(req, app).with_toast(failure_toast("Sign up failed", &err));
            html_page(
                failure_status(&err),
                login_page(&ctx, "", safe_next(form.first("next"))),
                &ctx,
            )
        }
    }
}

/// Revokes the session, drops the user's draft images and clears the cookie.
pub fn sign_out(req: &Request, app: &App) -> ResultResp {
    let clear = vec![app.clear_session_cookie()];
    let Some(token) = cookie(req, SESSION_COOKIE) else {
        return redirect_with("/", &[], clear);
    };

    match app.auth.sign_out(&token, unix_now()) {
        Ok(user_id) => {
            if let Some(user_id) = user_id {
                app.drafts.discard(&user_id, &app.previews);
            }
            redirect_with(
                "/",
                &[Toast::success(
                    "Signed out",
                    "You have been signed out successfully.",
                )],
                clear,
            )
        }
        Err(err) => {
            log::error!("Sign out failed: {err}");
            redirect_with("/", &[Toast::error("Sign out failed", err.to_string())], clear)
        }
    }
}
