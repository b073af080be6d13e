use crate::request::{FilePart, MultipartForm};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// The request body a caller hands to an executor.
///
/// The shape is resolved at the call site: a form is only `Multipart` when it actually
/// carries a file (see `Payload::from_fields`).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
	/// No body is sent.
	#[default]
	None,
	/// Sent verbatim, as `application/json`.
	Text(String),
	/// Serialized to JSON.
	Json(Value),
	/// Sent as `multipart/form-data`.
	Multipart(MultipartForm),
}

/// Constructors
impl Payload {
	pub fn json(value: &impl Serialize) -> Result<Self> {
		let value = serde_json::to_value(value).map_err(Error::payload_serialization)?;
		Ok(Self::from(value))
	}

	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// A field map with an optional file under `file_field`.
	///
	/// With a file, this is a `Multipart` payload built by `MultipartForm::from_fields`.
	/// Without one, the fields are sent as a JSON object (including whatever
	/// non-file value sits under `file_field`).
	pub fn from_fields(fields: Map<String, Value>, file_field: &str, file: Option<FilePart>) -> Self {
		match file {
			Some(file) => Self::Multipart(MultipartForm::from_fields(fields, file_field, file)),
			None => Self::Json(Value::Object(fields)),
		}
	}
}

/// Getters
impl Payload {
	pub const fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	pub const fn is_multipart(&self) -> bool {
		matches!(self, Self::Multipart(_))
	}
}

// region:    --- Froms

/// `Value::Null` means no body.
impl From<Value> for Payload {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::None,
			value => Self::Json(value),
		}
	}
}

impl From<String> for Payload {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for Payload {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<MultipartForm> for Payload {
	fn from(form: MultipartForm) -> Self {
		Self::Multipart(form)
	}
}

impl<T> From<Option<T>> for Payload
where
	T: Into<Payload>,
{
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or_default()
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
