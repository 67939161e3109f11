//! Minimal `multipart/form-data` encoding for a single file field.
//!
//! ureq does not ship a multipart encoder, and the predict endpoint only ever
//! receives one part, so the body is assembled by hand.

use std::time::{SystemTime, UNIX_EPOCH};

/// An encoded multipart body plus the header value that describes it.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    /// Value for the `Content-Type` request header, boundary included.
    pub content_type: String,
    /// The raw request body.
    pub bytes: Vec<u8>,
}

/// Encode `content` as a single `multipart/form-data` file field.
pub fn encode_file_field(field: &str, file_name: &str, content: &[u8]) -> MultipartBody {
    let boundary = make_boundary();
    let mut bytes = Vec::with_capacity(content.len() + 256);
    bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    bytes.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            sanitize(field),
            sanitize(file_name)
        )
        .as_bytes(),
    );
    bytes.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    bytes.extend_from_slice(content);
    bytes.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    MultipartBody {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        bytes,
    }
}

/// Strip characters that would break the part header.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '"' | '\r' | '\n'))
        .collect()
}

fn make_boundary() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0);
    format!("----breedlens-{nanos:032x}")
}
