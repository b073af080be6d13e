use std::sync::Arc;

// region:    --- AccessToken

/// A bearer access token.
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Arc<str>);

impl AccessToken {
	pub fn new(token: impl Into<Arc<str>>) -> Self {
		Self(token.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The `Authorization` header value for this token.
	pub fn bearer_header_value(&self) -> String {
		format!("Bearer {}", self.0)
	}
}

impl core::fmt::Debug for AccessToken {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str("AccessToken(REDACTED)")
	}
}

impl From<&str> for AccessToken {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}

impl From<String> for AccessToken {
	fn from(token: String) -> Self {
		Self::new(token)
	}
}

// endregion: --- AccessToken

// region:    --- CredentialProvider

/// Source of the current user's access token, read synchronously each time a request is built.
///
/// Closures `Fn() -> Option<AccessToken>` implement it, so a one-off provider
/// does not need its own type.
pub trait CredentialProvider: Send + Sync {
	fn access_token(&self) -> Option<AccessToken>;
}

impl<F> CredentialProvider for F
where
	F: Fn() -> Option<AccessToken> + Send + Sync,
{
	fn access_token(&self) -> Option<AccessToken> {
		self()
	}
}

/// Provider with no session. Requests flagged for auth go out without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
	fn access_token(&self) -> Option<AccessToken> {
		None
	}
}

// endregion: --- CredentialProvider

// region:    --- Tests


// endregion: --- Tests
