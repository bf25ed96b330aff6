// src/handlers/listing.rs
use astra::Request;

use crate::app::{unix_now, App};
use crate::auth::provider::Session;
use crate::auth::User;
use crate::domain::form::{FieldErrors, ListingForm};
use crate::handlers::page_ctx;
use crate::listing::{submit_listing, SubmitError};
use crate::requests::{first, read_form, FormBody};
use crate::responses::{html_page, redirect_with, ResultResp};
use crate::storage::ImageFile;
use crate::templates::pages::{add_property_page, AddPropertyVm};
use crate::templates::PageCtx;
use crate::toast::Toast;

const FORM_PATH: &str = "/properties/new";

fn require_session(req: &Request, app: &App) -> Result<Session, ResultResp> {
    app.current_session(req).ok_or_else(|| {
        redirect_with(
            &format!("/login?next={FORM_PATH}"),
            &[Toast::error(
                "Sign in required",
                "Please sign in to add a property.",
            )],
            Vec::new(),
        )
    })
}

fn render_form(
    app: &App,
    ctx: &PageCtx,
    user: &User,
    status: u16,
    form: &ListingForm,
    errors: &FieldErrors,
) -> ResultResp {
    let previews = app.drafts.previews(&user.id);
    let vm = AddPropertyVm {
        form,
        errors,
        previews: &previews,
    };
    html_page(status, add_property_page(ctx, &vm), ctx)
}

pub fn new_form(req: &Request, app: &App) -> ResultResp {
    let session = match require_session(req, app) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let ctx = page_ctx(req, app);
    render_form(
        app,
        &ctx,
        &session.user,
        200,
        &ListingForm::default(),
        &FieldErrors::default(),
    )
}

/// One endpoint for the whole form: new file parts are added to the
/// selection (up to the configured cap), then `remove_image={i}` drops one
/// image, `intent=submit` submits, and anything else just re-renders.
pub fn post_form(req: &mut Request, app: &App) -> ResultResp {
    let session = match require_session(req, app) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let user = &session.user;
    app.sweep_drafts();

    let FormBody { fields, files } = read_form(req, app.config.server.max_body_bytes)?;
    let form = ListingForm::from_fields(&fields);
    let ctx = page_ctx(req, app);

    let new_files: Vec<ImageFile> = files
        .into_iter()
        .filter(|f| f.field == "images")
        .map(|f| ImageFile::new(&f.file_name, f.content_type.as_deref(), f.bytes))
        .collect();
    if !new_files.is_empty() {
        let cap = app.config.listing.max_draft_images;
        let offered = new_files.len();
        let rejected = app.drafts.with_selection(&user.id, session.expires_at, |sel| {
            sel.add_up_to(&app.previews, new_files, cap)
        });
        log::debug!("{} image(s) selected by {}", offered - rejected, user.id);

        if rejected > 0 {
            let mut errors = FieldErrors::default();
            errors.insert("images", format!("You can add at most {cap} images"));
            return render_form(app, &ctx, user, 422, &form, &errors);
        }
    }

    let remove = first(&fields, "remove_image").and_then(|i| i.trim().parse::<usize>().ok());
    if let Some(index) = remove {
        app.drafts.with_selection(&user.id, session.expires_at, |sel| {
            sel.remove(&app.previews, index)
        });
        return render_form(app, &ctx, user, 200, &form, &FieldErrors::default());
    }

    if first(&fields, "intent") != Some("submit") {
        return render_form(app, &ctx, user, 200, &form, &FieldErrors::default());
    }

    // The selection leaves the store while images upload; see `DraftStore::take`.
    let mut selection = app.drafts.take(&user.id);
    let result = submit_listing(
        &app.db,
        app.store.as_ref(),
        &form,
        &selection,
        &user.id,
        unix_now(),
    );

    match result {
        Ok(id) => {
            selection.clear(&app.previews);
            redirect_with(
                &format!("/property/{id}"),
                &[Toast::success(
                    "Property Added",
                    "Your property has been added successfully!",
                )],
                Vec::new(),
            )
        }
        Err(SubmitError::Invalid(errors)) => {
            app.drafts.put_back(&user.id, session.expires_at, selection);
            let ctx = ctx.with_toast(Toast::error(
                "Validation Error",
                "Please fix the errors in the form.",
            ));
            render_form(app, &ctx, user, 422, &form, &errors)
        }
        Err(err) => {
            log::error!("Listing submission by {} failed: {err}", user.id);
            app.drafts.put_back(&user.id, session.expires_at, selection);
            let status = match err {
                SubmitError::Upload(_) => 502,
                _ => 500,
            };
            let ctx = ctx.with_toast(Toast::error("Error", err.to_string()));
            render_form(app, &ctx, user, status, &form, &FieldErrors::default())
        }
    }
}
