use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{auth, browse, listing, media};
use crate::responses::ResultResp;
use astra::Request;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    log::debug!("{method} {path}");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => browse::home(&req, app),
        ("GET", ["properties"]) => browse::properties(&req, app),
        ("GET", ["property", id]) => browse::property_detail(&req, app, id),
        ("GET", ["map"]) => browse::map_view(&req, app),

        ("GET", ["login"]) => auth::login(&req, app),
        ("POST", ["login"]) => auth::sign_in(&mut req, app),
        ("POST", ["signup"]) => auth::sign_up(&mut req, app),
        ("POST", ["logout"]) => auth::sign_out(&req, app),

        ("GET", ["properties", "new"]) => listing::new_form(&req, app),
        ("POST", ["properties", "new"]) => listing::post_form(&mut req, app),

        ("GET", ["previews", id]) => media::preview(app, id),
        ("GET", ["storage", rest @ ..]) => media::stored_object(app, rest),
        ("GET", ["static", "main.css"]) => media::stylesheet(),

        _ => Err(ServerError::NotFound),
    }
}
