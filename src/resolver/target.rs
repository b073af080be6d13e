use std::sync::Arc;

/// The address of one exchange.
/// It is designed to be efficiently clonable, since it is snapshotted on every `execute()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Target {
	inner: Arc<str>,
}

/// Constructors
impl Target {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Target {
	#[must_use]
	pub fn url(&self) -> &str {
		&self.inner
	}
}

// region:    --- Froms

impl From<&str> for Target {
	fn from(url: &str) -> Self {
		Self::from_owned(url)
	}
}

impl From<String> for Target {
	fn from(url: String) -> Self {
		Self::from_owned(url)
	}
}

impl core::fmt::Display for Target {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.inner)
	}
}

// endregion: --- Froms
