//! Multipart form parsing for webhook deliveries
//!
//! Parts are buffered in memory up to a fixed budget. Parsing is best-effort:
//! when the budget runs out or the stream is malformed, parsing stops and the
//! parts read so far are kept, with the error handed back for logging.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::HeaderMap;
use bytes::{Bytes, BytesMut};
use plexhook_core::AppError;

/// File part of a form
#[derive(Debug, Clone)]
pub struct FormFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub headers: HeaderMap,
    pub data: Bytes,
}

impl FormFile {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Parsed multipart form: text values and file parts, keyed by part name
#[derive(Debug, Default)]
pub struct ParsedForm {
    values: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<FormFile>>,
}

impl ParsedForm {
    /// First value of a text field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Remove and return the first file part with this name
    pub fn take_file(&mut self, name: &str) -> Result<FormFile, AppError> {
        self.files
            .get_mut(name)
            .filter(|files| !files.is_empty())
            .map(|files| files.remove(0))
            .ok_or_else(|| AppError::MissingAttachment(format!("no file part named '{}'", name)))
    }
}

/// Read every part of `multipart` into memory, stopping once `max_memory`
/// bytes of part content have been read.
///
/// A part is classified as a file when it carries a non-empty filename;
/// everything else (including `filename=""`)
/// is a text value (decoded lossily as UTF-8).
pub async fn parse_multipart_form(
    mut multipart: Multipart,
    max_memory: usize,
) -> (ParsedForm, Option<AppError>) {
    let mut form = ParsedForm::default();
    let mut used = 0usize;

    loop {
        let mut field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return (form, None),
            Err(e) => return (form, Some(AppError::Multipart(e.body_text()))),
        };

        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let headers = field.headers().clone();

        let mut data = BytesMut::new();
        loop {
            match field.chunk().await {
                Ok(Some(chunk)) => {
                    used += chunk.len();
                    if used > max_memory {
                        return (form, Some(AppError::FormTooLarge { limit: max_memory }));
                    }
                    data.extend_from_slice(&chunk);
                }
                Ok(None) => break,
                Err(e) => return (form, Some(AppError::Multipart(e.body_text()))),
            }
        }

        match filename.filter(|f| !f.is_empty()) {
            Some(filename) => form.files.entry(name).or_default().push(FormFile {
                filename,
                content_type,
                headers,
                data: data.freeze(),
            }),
            None => form
                .values
                .entry(name)
                .or_default()
                .push(String::from_utf8_lossy(&data).into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use axum::http::header::CONTENT_TYPE;

    const BOUNDARY: &str = "plexhook-boundary";

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(name: &str, filename: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n{value}\r\n"
        )
    }

    async fn multipart(parts: &[String]) -> Multipart {
        let body = format!("{}--{BOUNDARY}--\r\n", parts.concat());
        let request = Request::builder()
            .method("POST")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        Multipart::from_request(request, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_values_and_files_are_separated() {
        let mp = multipart(&[
            text_part("payload", r#"{"event":"media.play"}"#),
            file_part("thumb", "poster.jpg", "JPEGDATA"),
        ])
        .await;

        let (mut form, err) = parse_multipart_form(mp, 1 << 20).await;
        assert!(err.is_none());
        assert_eq!(form.value("payload"), Some(r#"{"event":"media.play"}"#));

        let thumb = form.take_file("thumb").unwrap();
        assert_eq!(thumb.filename, "poster.jpg");
        assert_eq!(thumb.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(thumb.size(), 8);
        assert_eq!(&thumb.data[..], b"JPEGDATA");
        assert!(thumb.headers.contains_key("content-disposition"));
    }

    #[tokio::test]
    async fn test_part_without_filename_is_not_a_file() {
        let mp = multipart(&[text_part("thumb", "not a file")]).await;

        let (mut form, err) = parse_multipart_form(mp, 1 << 20).await;
        assert!(err.is_none());
        assert_eq!(form.value("thumb"), Some("not a file"));
        assert!(matches!(
            form.take_file("thumb"),
            Err(AppError::MissingAttachment(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_filename_is_not_a_file() {
        let mp = multipart(&[file_part("thumb", "", "JPEGDATA")]).await;

        let (mut form, err) = parse_multipart_form(mp, 1 << 20).await;
        assert!(err.is_none());
        assert_eq!(form.value("thumb"), Some("JPEGDATA"));
        assert!(matches!(
            form.take_file("thumb"),
            Err(AppError::MissingAttachment(_))
        ));
    }

    #[tokio::test]
    async fn test_budget_exceeded_keeps_earlier_parts() {
        let big = "x".repeat(4096);
        let mp = multipart(&[
            text_part("payload", "{}"),
            file_part("thumb", "big.jpg", &big),
        ])
        .await;

        let (mut form, err) = parse_multipart_form(mp, 1024).await;
        assert!(matches!(err, Some(AppError::FormTooLarge { limit: 1024 })));
        assert_eq!(form.value("payload"), Some("{}"));
        assert!(form.take_file("thumb").is_err());
    }

    #[tokio::test]
    async fn test_first_value_wins() {
        let mp = multipart(&[text_part("payload", "first"), text_part("payload", "second")]).await;

        let (form, _) = parse_multipart_form(mp, 1 << 20).await;
        assert_eq!(form.value("payload"), Some("first"));
        assert_eq!(form.value("missing"), None);
    }
}
