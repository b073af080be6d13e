use crate::response::{ObjectUrl, ResponseBody};
use crate::{Error, Result};
use bytes::Bytes;

const PDF_MIME: &str = "application/pdf";
const WEBP_MIME: &str = "image/webp";
const JSON_MIME: &str = "application/json";

/// Decode a `2xx` body by its declared content type.
///
/// Matching is by substring, in this order: pdf, webp, json (so parameters such as
/// `; charset=utf-8` are accepted). Any other type, or no type, is an error.
pub fn decode_body(content_type: Option<&str>, body: Bytes) -> Result<ResponseBody> {
	let Some(content_type) = content_type else {
		return Err(Error::UnexpectedContentType { content_type: None });
	};
	let normalized = content_type.to_ascii_lowercase();

	if normalized.contains(PDF_MIME) {
		Ok(ResponseBody::Pdf(body))
	} else if normalized.contains(WEBP_MIME) {
		Ok(ResponseBody::ObjectUrl(ObjectUrl::from_bytes(WEBP_MIME, &body)))
	} else if normalized.contains(JSON_MIME) {
		let value = serde_json::from_slice(&body).map_err(Error::json_decode)?;
		Ok(ResponseBody::Json(value))
	} else {
		Err(Error::UnexpectedContentType {
			content_type: Some(content_type.to_string()),
		})
	}
}

// region:    --- Tests


// endregion: --- Tests
