use crate::webc;
use derive_more::From;
use std::sync::Arc;

pub type Result<T> = core::result::Result<T, Error>;

/// Every failure of an exchange lands in this one type, so it can be stored in the
/// executor `error` signal and returned to the caller at the same time (hence `Clone`).
#[derive(Debug, Clone, From)]
pub enum Error {
	// -- Exchange
	/// The server answered outside of the `2xx` range.
	HttpStatus { status: u16, status_text: String },
	/// The server answered `2xx` with a content type that is not pdf, webp, or json.
	UnexpectedContentType { content_type: Option<String> },
	/// The body was declared `application/json` but did not parse.
	JsonDecode { cause: Arc<serde_json::Error> },

	// -- Request Build
	PayloadSerialization { cause: Arc<serde_json::Error> },
	InvalidMethod { method: String },
	InvalidCredential,
	InvalidMimeType { mime_type: String },
	Io { cause: Arc<std::io::Error> },

	// -- Transport
	#[from]
	Transport(webc::Error),
}

// region:    --- Constructors

impl Error {
	pub(crate) fn json_decode(err: serde_json::Error) -> Self {
		Self::JsonDecode { cause: Arc::new(err) }
	}

	pub(crate) fn payload_serialization(err: serde_json::Error) -> Self {
		Self::PayloadSerialization { cause: Arc::new(err) }
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io { cause: Arc::new(err) }
	}
}

// endregion: --- Constructors

// region:    --- Getters

impl Error {
	/// The HTTP status, when the failure is a non-success response.
	#[must_use]
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::HttpStatus { status, .. } => Some(*status),
			_ => None,
		}
	}

	#[must_use]
	pub const fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

// endregion: --- Getters

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		match self {
			Self::HttpStatus { status, status_text } => write!(fmt, "HTTP Error {status}: {status_text}"),
			Self::UnexpectedContentType { content_type } => {
				write!(fmt, "Unexpected response type: {}", content_type.as_deref().unwrap_or("null"))
			}
			Self::JsonDecode { cause } => write!(fmt, "Response body is not valid JSON: {cause}"),
			Self::PayloadSerialization { cause } => write!(fmt, "Payload cannot be serialized to JSON: {cause}"),
			Self::InvalidMethod { method } => write!(fmt, "Unsupported HTTP method: {method}"),
			Self::InvalidCredential => write!(fmt, "Access token cannot be sent as an Authorization header"),
			Self::InvalidMimeType { mime_type } => write!(fmt, "Invalid file MIME type: '{mime_type}'"),
			Self::Io { cause } => write!(fmt, "I/O error: {cause}"),
			Self::Transport(err) => write!(fmt, "Fetch error: {err}"),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::JsonDecode { cause } | Self::PayloadSerialization { cause } => Some(cause.as_ref()),
			Self::Io { cause } => Some(cause.as_ref()),
			Self::Transport(err) => Some(err),
			_ => None,
		}
	}
}

// endregion: --- Error Boilerplate

// region:    --- Tests


// endregion: --- Tests
