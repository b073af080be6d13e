use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use derive_more::From;
use serde_json::Value;

// region:    --- ResponseBody

/// A decoded `2xx` response body.
#[derive(Debug, Clone, PartialEq, From)]
pub enum ResponseBody {
	/// `application/json`
	Json(Value),
	/// `application/pdf`, kept as raw bytes.
	Pdf(Bytes),
	/// `image/webp`, converted to a locally valid URL.
	ObjectUrl(ObjectUrl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
	Json,
	Pdf,
	ObjectUrl,
}

/// Getters
impl ResponseBody {
	pub fn content_kind(&self) -> ContentKind {
		match self {
			Self::Json(_) => ContentKind::Json,
			Self::Pdf(_) => ContentKind::Pdf,
			Self::ObjectUrl(_) => ContentKind::ObjectUrl,
		}
	}

	pub fn as_json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_pdf(&self) -> Option<&Bytes> {
		match self {
			Self::Pdf(bytes) => Some(bytes),
			_ => None,
		}
	}

	pub fn as_object_url(&self) -> Option<&ObjectUrl> {
		match self {
			Self::ObjectUrl(url) => Some(url),
			_ => None,
		}
	}

	pub fn into_json(self) -> Option<Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}
}

// endregion: --- ResponseBody

// region:    --- ObjectUrl

/// A self-contained reference to binary content, usable wherever a URL is expected
/// (`data:<mime>;base64,<content>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUrl {
	url: String,
}

impl ObjectUrl {
	pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
		let content = STANDARD.encode(bytes);
		Self {
			url: format!("data:{mime_type};base64,{content}"),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.url
	}

	pub fn mime_type(&self) -> &str {
		self.url
			.strip_prefix("data:")
			.and_then(|rest| rest.split_once(";base64,"))
			.map(|(mime, _)| mime)
			.unwrap_or_default()
	}

	/// The referenced content. `None` if the URL is not a base64 data URL.
	pub fn to_bytes(&self) -> Option<Bytes> {
		let (_, content) = self.url.split_once(";base64,")?;
		STANDARD.decode(content).ok().map(Bytes::from)
	}
}

impl core::fmt::Display for ObjectUrl {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.url)
	}
}

// endregion: --- ObjectUrl

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_object_url_round_trip() {
		let bytes = b"RIFF\x00\x00\x00\x00WEBPVP8 ";

		let url = ObjectUrl::from_bytes("image/webp", bytes);

		assert!(url.as_str().starts_with("data:image/webp;base64,"));
		assert_eq!(url.mime_type(), "image/webp");
		assert_eq!(url.to_bytes().as_deref(), Some(&bytes[..]));
	}

	#[test]
	fn test_response_body_accessors() {
		let body = ResponseBody::from(serde_json::json!({"id": 1}));

		assert_eq!(body.content_kind(), ContentKind::Json);
		assert_eq!(body.as_json().and_then(|v| v.get("id")).and_then(Value::as_i64), Some(1));
		assert!(body.as_pdf().is_none());
		assert!(body.as_object_url().is_none());
	}
}

// endregion: --- Tests
