use crate::{Error, Result};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use std::path::Path;

const DEFAULT_FILE_MIME: &str = "application/octet-stream";

// region:    --- FilePart

/// An actual file to upload: its bytes plus the name and MIME type sent in the part headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
	file_name: String,
	mime_type: String,
	bytes: Bytes,
}

/// Constructors
impl FilePart {
	pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
		Self {
			file_name: file_name.into(),
			mime_type: DEFAULT_FILE_MIME.to_string(),
			bytes: bytes.into(),
		}
	}

	/// Read a file from disk. The part file name is the last path segment.
	pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let bytes = tokio::fs::read(path).await?;
		let file_name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();

		Ok(Self::new(file_name, bytes))
	}

	#[must_use]
	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = mime_type.into();
		self
	}
}

/// Getters
impl FilePart {
	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	pub fn mime_type(&self) -> &str {
		&self.mime_type
	}

	pub fn bytes(&self) -> &Bytes {
		&self.bytes
	}
}

// endregion: --- FilePart

// region:    --- MultipartForm

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
	Text(String),
	File(FilePart),
}

/// Ordered named parts of a `multipart/form-data` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
	parts: Vec<(String, FormPart)>,
}

/// Constructors
impl MultipartForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a form from a JSON object and the file that goes under `file_field`.
	///
	/// - Every key is copied in object order.
	/// - Null values are skipped.
	/// - Strings go in as-is, numbers and booleans via their display form, arrays and objects as compact JSON.
	/// - The value at `file_field` (if any) is replaced by `file`. If the key is absent, the file is appended last.
	pub fn from_fields(fields: Map<String, Value>, file_field: &str, file: FilePart) -> Self {
		let mut form = Self::new();
		let mut file = Some(file);

		for (name, value) in fields {
			if name == file_field {
				if let Some(file) = file.take() {
					form = form.file(name, file);
				}
			} else if let Some(text) = value_to_form_text(&value) {
				form = form.text(name, text);
			}
		}

		if let Some(file) = file {
			form = form.file(file_field, file);
		}

		form
	}
}

/// Chainable Setters
impl MultipartForm {
	#[must_use]
	pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.parts.push((name.into(), FormPart::Text(value.into())));
		self
	}

	#[must_use]
	pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
		self.parts.push((name.into(), FormPart::File(file)));
		self
	}
}

/// Getters
impl MultipartForm {
	pub fn parts(&self) -> &[(String, FormPart)] {
		&self.parts
	}

	pub fn get(&self, name: &str) -> Option<&FormPart> {
		self.parts.iter().find(|(part_name, _)| part_name == name).map(|(_, part)| part)
	}

	pub fn has_file(&self) -> bool {
		self.parts.iter().any(|(_, part)| matches!(part, FormPart::File(_)))
	}

	pub fn len(&self) -> usize {
		self.parts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parts.is_empty()
	}
}

impl MultipartForm {
	pub(crate) fn into_reqwest_form(self) -> Result<Form> {
		let mut form = Form::new();
		for (name, part) in self.parts {
			form = match part {
				FormPart::Text(text) => form.text(name, text),
				FormPart::File(file) => {
					let FilePart {
						file_name,
						mime_type,
						bytes,
					} = file;
					let length = bytes.len() as u64;
					let part = Part::stream_with_length(bytes, length)
						.file_name(file_name)
						.mime_str(&mime_type)
						.map_err(|_| Error::InvalidMimeType { mime_type })?;
					form.part(name, part)
				}
			};
		}
		Ok(form)
	}
}

fn value_to_form_text(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		// Display of a non-string Value is its compact JSON form
		Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => Some(value.to_string()),
	}
}

// endregion: --- MultipartForm

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn medical_file() -> FilePart {
		FilePart::new("scan.pdf", &b"%PDF-1.4"[..]).with_mime_type("application/pdf")
	}

	#[test]
	fn test_from_fields_copies_and_skips_null() {
		let Value::Object(fields) = json!({
			"medicalFile": "placeholder",
			"note": "x",
			"age": 42,
			"urgent": true,
			"comment": null,
			"tags": ["a", "b"],
		}) else {
			unreachable!("json! object literal")
		};

		let form = MultipartForm::from_fields(fields, "medicalFile", medical_file());

		assert_eq!(form.len(), 5);
		assert_eq!(form.get("medicalFile"), Some(&FormPart::File(medical_file())));
		assert_eq!(form.get("note"), Some(&FormPart::Text("x".to_string())));
		assert_eq!(form.get("age"), Some(&FormPart::Text("42".to_string())));
		assert_eq!(form.get("urgent"), Some(&FormPart::Text("true".to_string())));
		assert_eq!(form.get("tags"), Some(&FormPart::Text(r#"["a","b"]"#.to_string())));
		assert!(form.get("comment").is_none());
	}

	#[test]
	fn test_from_fields_appends_missing_file_key() {
		let Value::Object(fields) = json!({"note": "x"}) else {
			unreachable!("json! object literal")
		};

		let form = MultipartForm::from_fields(fields, "medicalFile", medical_file());

		assert_eq!(form.len(), 2);
		assert!(matches!(form.parts().last(), Some((name, FormPart::File(_))) if name == "medicalFile"));
	}

	#[test]
	fn test_from_fields_keeps_insertion_order() {
		let Value::Object(fields) = json!({"zeta": "z", "medicalFile": null, "alpha": "a"}) else {
			unreachable!("json! object literal")
		};

		let form = MultipartForm::from_fields(fields, "medicalFile", medical_file());

		let names: Vec<&str> = form.parts().iter().map(|(name, _)| name.as_str()).collect();
		assert_eq!(names, vec!["zeta", "medicalFile", "alpha"]);
	}

	#[test]
	fn test_into_reqwest_form_invalid_mime() {
		let form = MultipartForm::new().file("medicalFile", FilePart::new("scan.pdf", &b"%PDF"[..]).with_mime_type("not a mime"));

		let res = form.into_reqwest_form();

		assert!(matches!(
			res,
			Err(Error::InvalidMimeType { ref mime_type }) if mime_type == "not a mime"
		));
	}

	#[tokio::test]
	async fn test_file_part_from_path() -> core::result::Result<(), Box<dyn std::error::Error>> {
		let path = std::env::temp_dir().join(format!("remote-data-file-part-{}.txt", std::process::id()));
		tokio::fs::write(&path, b"hello").await?;

		let part = FilePart::from_path(&path).await?;
		tokio::fs::remove_file(&path).await?;

		assert_eq!(part.bytes().as_ref(), b"hello");
		assert_eq!(part.mime_type(), DEFAULT_FILE_MIME);
		assert!(part.file_name().starts_with("remote-data-file-part-"));
		Ok(())
	}
}

// endregion: --- Tests
