use std::sync::Arc;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
	/// The header name or value cannot go on the wire.
	InvalidHeader { name: String, cause: String },

	/// No response was obtained (connect, TLS, redirect, or body read failure).
	Reqwest(Arc<reqwest::Error>),
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		Self::Reqwest(Arc::new(err))
	}
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		match self {
			Self::InvalidHeader { name, cause } => write!(fmt, "invalid header '{name}': {cause}"),
			Self::Reqwest(err) => write!(fmt, "{err}"),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Reqwest(err) => Some(err.as_ref()),
			Self::InvalidHeader { .. } => None,
		}
	}
}

// endregion: --- Error Boilerplate
