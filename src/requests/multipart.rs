// src/requests/multipart.rs
//
// multipart/form-data for the add-listing form: text fields plus any number
// of file parts.

use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

/// Boundary parameter of a `multipart/form-data` content type.
pub fn boundary(content_type: &str) -> Option<String> {
    let m: mime::Mime = content_type.parse().ok()?;
    if m.type_() != mime::MULTIPART || m.subtype() != mime::FORM_DATA {
        return None;
    }
    m.get_param(mime::BOUNDARY).map(|b| b.as_str().to_string())
}

fn bad(e: multer::Error) -> ServerError {
    ServerError::BadRequest(format!("Malformed multipart body: {e}"))
}

/// Parse an already bounded and buffered body.
pub fn parse(body: Vec<u8>, boundary: &str) -> Result<MultipartForm, ServerError> {
    let stream = futures::stream::once(async move {
        Ok::<_, std::convert::Infallible>(bytes::Bytes::from(body))
    });
    let mut multipart = multer::Multipart::new(stream, boundary);

    futures::executor::block_on(async {
        let mut form = MultipartForm::default();
        while let Some(field) = multipart.next_field().await.map_err(bad)? {
            let Some(name) = field.name().map(str::to_string) else {
                return Err(ServerError::BadRequest(
                    "Malformed multipart body: part without a name".to_string(),
                ));
            };
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(|m| m.to_string());
            let content = field.bytes().await.map_err(bad)?;

            match file_name {
                // Browsers send an empty filename part when no file was chosen.
                Some(f) if f.is_empty() && content.is_empty() => {}
                Some(file_name) => form.files.push(FilePart {
                    field: name,
                    file_name,
                    content_type,
                    bytes: content.to_vec(),
                }),
                None => form
                    .fields
                    .push((name, String::from_utf8_lossy(&content).into_owned())),
            }
        }
        Ok(form)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: &str = "----skylineBoundary42";

    fn body(parts: &[&str]) -> Vec<u8> {
        let mut out = String::new();
        for p in parts {
            out.push_str(&format!("--{B}\r\n{p}\r\n"));
        }
        out.push_str(&format!("--{B}--\r\n"));
        out.into_bytes()
    }

    #[test]
    fn boundary_from_content_type() {
        assert_eq!(
            boundary("multipart/form-data; boundary=abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            boundary("multipart/form-data; boundary=\"quoted\"").as_deref(),
            Some("quoted")
        );
        assert_eq!(boundary("application/x-www-form-urlencoded"), None);
    }

    #[test]
    fn parses_fields_and_files() {
        let raw = body(&[
            "Content-Disposition: form-data; name=\"title\"\r\n\r\nSunny Loft",
            "Content-Disposition: form-data; name=\"amenity\"\r\n\r\nGym",
            "Content-Disposition: form-data; name=\"images\"; filename=\"front.jpg\"\r\nContent-Type: image/jpeg\r\n\r\nJPEGDATA",
        ]);

        let form = parse(raw, B).unwrap();
        assert_eq!(
            form.fields,
            vec![
                ("title".to_string(), "Sunny Loft".to_string()),
                ("amenity".to_string(), "Gym".to_string()),
            ]
        );
        assert_eq!(form.files.len(), 1);
        assert_eq!(form.files[0].field, "images");
        assert_eq!(form.files[0].file_name, "front.jpg");
        assert_eq!(form.files[0].content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(form.files[0].bytes, b"JPEGDATA");
    }

    #[test]
    fn empty_file_input_is_skipped() {
        let raw = body(&[
            "Content-Disposition: form-data; name=\"images\"; filename=\"\"\r\nContent-Type: application/octet-stream\r\n\r\n",
        ]);
        let form = parse(raw, B).unwrap();
        assert!(form.files.is_empty());
    }

    #[test]
    fn binary_content_may_contain_crlf() {
        let raw = body(&[
            "Content-Disposition: form-data; name=\"images\"; filename=\"x.png\"\r\n\r\n\r\nline\r\n",
        ]);
        let form = parse(raw, B).unwrap();
        assert_eq!(form.files[0].bytes, b"\r\nline\r\n");
    }

    #[test]
    fn quoted_filename_may_contain_semicolons() {
        let raw = body(&[
            "Content-Disposition: form-data; name=\"images\"; filename=\"a;b.jpg\"\r\nContent-Type: image/jpeg\r\n\r\nJPEG",
        ]);
        let form = parse(raw, B).unwrap();
        assert_eq!(form.files[0].field, "images");
        assert_eq!(form.files[0].file_name, "a;b.jpg");
        assert_eq!(crate::storage::extension(&form.files[0].file_name), Some("jpg".to_string()));
    }

    #[test]
    fn truncated_body_is_bad_request() {
        let raw = format!("--{B}\r\nContent-Disposition: form-data; name=\"t\"\r\n\r\nno end");
        assert!(matches!(parse(raw.into_bytes(), B), Err(ServerError::BadRequest(_))));
        assert!(matches!(parse(b"garbage".to_vec(), B), Err(ServerError::BadRequest(_))));
    }
}
