use crate::tests::utils::{
    body_string, get, init_test_app, location, post_form, set_cookie, signed_in_cookie,
};

#[test]
fn sign_up_sets_a_session_and_shows_the_user_menu() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "new@example.com");

    let body = body_string(get(&app, "/", Some(&cookie)));
    assert!(body.contains("Sign Out"));
    assert!(body.contains("Add Property"));
}

#[test]
fn sign_in_with_wrong_password_is_rejected() {
    let app = init_test_app();
    signed_in_cookie(&app, "jo@example.com");

    let resp = post_form(&app, "/login", "email=jo@example.com&password=nothunter", None);
    assert_eq!(resp.status(), 401);
    assert!(set_cookie(&resp, "session").is_none());
    assert!(body_string(resp).contains("Invalid login credentials"));
}

#[test]
fn sign_in_follows_next() {
    let app = init_test_app();
    signed_in_cookie(&app, "kim@example.com");

    let resp = post_form(
        &app,
        "/login",
        "email=kim@example.com&password=hunter22&next=%2Fproperties%2Fnew",
        None,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/properties/new");
    assert!(set_cookie(&resp, "session").is_some());
}

#[test]
fn offsite_next_is_ignored() {
    let app = init_test_app();
    signed_in_cookie(&app, "lee@example.com");

    let resp = post_form(
        &app,
        "/login",
        "email=lee@example.com&password=hunter22&next=%2F%2Fevil.example",
        None,
    );
    assert_eq!(location(&resp), "/");
}

#[test]
fn short_password_sign_up_fails() {
    let app = init_test_app();
    let resp = post_form(&app, "/signup", "email=x@example.com&password=123", None);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Password should be at least 6 characters"));
}

#[test]
fn duplicate_sign_up_fails() {
    let app = init_test_app();
    signed_in_cookie(&app, "dup@example.com");

    let resp = post_form(&app, "/signup", "email=DUP@example.com&password=hunter22", None);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("User already registered"));
}

#[test]
fn sign_out_ends_the_session() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "bye@example.com");

    let resp = post_form(&app, "/logout", "", Some(&cookie));
    assert_eq!(resp.status(), 303);
    assert_eq!(set_cookie(&resp, "session").as_deref(), Some("session="));

    // the old token no longer authenticates
    let body = body_string(get(&app, "/", Some(&cookie)));
    assert!(body.contains("Sign In"));
    assert!(!body.contains("Sign Out"));
}

#[test]
fn login_page_redirects_when_already_signed_in() {
    let app = init_test_app();
    let cookie = signed_in_cookie(&app, "here@example.com");

    let resp = get(&app, "/login?next=/map", Some(&cookie));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/map");
}
