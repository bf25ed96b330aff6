// src/requests/mod.rs
use astra::Request;
use std::io::Read;

use crate::errors::ServerError;

pub mod multipart;

pub use multipart::FilePart;

/// Decoded query string, in order, repeated keys kept.
pub fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// First value for `key`.
pub fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|kv| kv.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// Read at most `limit` bytes of body; anything longer is rejected.
pub fn read_body(req: &mut Request, limit: u64) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    if buf.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(buf)
}

/// A submitted form: urlencoded or multipart.
#[derive(Debug, Default)]
pub struct FormBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl FormBody {
    pub fn first(&self, key: &str) -> Option<&str> {
        first(&self.fields, key)
    }
}

pub fn read_form(req: &mut Request, limit: u64) -> Result<FormBody, ServerError> {
    let content_type = req
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = read_body(req, limit)?;

    if let Some(b) = multipart::boundary(&content_type) {
        let form = multipart::parse(body, &b)?;
        return Ok(FormBody {
            fields: form.fields,
            files: form.files,
        });
    }

    Ok(FormBody {
        fields: url::form_urlencoded::parse(&body).into_owned().collect(),
        files: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra::Body;

    fn req(uri: &str, cookie_header: Option<&str>, body: &str) -> Request {
        let mut b = http::Request::builder().uri(uri);
        if let Some(c) = cookie_header {
            b = b.header("Cookie", c);
        }
        b.body(Body::from(body.to_string())).unwrap()
    }

    #[test]
    fn query_pairs_decode_and_keep_repeats() {
        let r = req("/properties?type=house&type=condo&amenity=Swimming+Pool", None, "");
        let pairs = query_pairs(&r);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], ("amenity".to_string(), "Swimming Pool".to_string()));
        assert_eq!(first(&pairs, "type"), Some("house"));
        assert_eq!(first(&pairs, "beds"), None);
    }

    #[test]
    fn cookie_lookup() {
        let r = req("/", Some("flash=abc; session=tok123"), "");
        assert_eq!(cookie(&r, "session").as_deref(), Some("tok123"));
        assert_eq!(cookie(&r, "flash").as_deref(), Some("abc"));
        assert_eq!(cookie(&r, "missing"), None);
    }

    #[test]
    fn urlencoded_form() {
        let mut r = http::Request::builder()
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from("email=a%40b.com&password=x+y".to_string()))
            .unwrap();
        let form = read_form(&mut r, 1024).unwrap();
        assert_eq!(form.first("email"), Some("a@b.com"));
        assert_eq!(form.first("password"), Some("x y"));
    }

    #[test]
    fn oversized_body_is_rejected() {
        let mut r = req("/", None, "0123456789");
        assert!(matches!(read_body(&mut r, 4), Err(ServerError::PayloadTooLarge)));
        let mut r = req("/", None, "0123");
        assert_eq!(read_body(&mut r, 4).unwrap(), b"0123");
    }
}
