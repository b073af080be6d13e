use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The HTTP verbs an executor can issue.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	#[default]
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl Method {
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Patch => "PATCH",
			Self::Delete => "DELETE",
		}
	}
}

// region:    --- Froms

impl core::fmt::Display for Method {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Method {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let method = match s.to_ascii_uppercase().as_str() {
			"GET" => Self::Get,
			"POST" => Self::Post,
			"PUT" => Self::Put,
			"PATCH" => Self::Patch,
			"DELETE" => Self::Delete,
			_ => return Err(Error::InvalidMethod { method: s.to_string() }),
		};
		Ok(method)
	}
}

impl From<Method> for reqwest::Method {
	fn from(method: Method) -> Self {
		match method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Patch => reqwest::Method::PATCH,
			Method::Delete => reqwest::Method::DELETE,
		}
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
