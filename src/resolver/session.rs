use crate::Signal;
use crate::resolver::{AccessToken, CredentialProvider};

/// The authenticated-user session: holds the current access token, if any.
///
/// Clones share state, so one `Session` can be handed to many executors and
/// logged in or out from elsewhere. Executors read it when `execute()` is called.
#[derive(Debug, Clone, Default)]
pub struct Session {
	access_token: Signal<Option<AccessToken>>,
}

impl Session {
	pub fn login(&self, access_token: impl Into<AccessToken>) {
		self.access_token.set(Some(access_token.into()));
		tracing::debug!("session logged in");
	}

	pub fn logout(&self) {
		self.access_token.set(None);
		tracing::debug!("session logged out");
	}

	pub fn is_authenticated(&self) -> bool {
		self.access_token.with(Option::is_some)
	}

	/// The token signal, for consumers that react to login/logout.
	pub fn access_token_signal(&self) -> &Signal<Option<AccessToken>> {
		&self.access_token
	}
}

impl CredentialProvider for Session {
	fn access_token(&self) -> Option<AccessToken> {
		self.access_token.get()
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_session_login_logout() {
		let session = Session::default();
		let shared = session.clone();
		assert!(!session.is_authenticated());

		shared.login("tok-1");
		assert!(session.is_authenticated());
		assert_eq!(session.access_token().as_ref().map(AccessToken::as_str), Some("tok-1"));

		shared.logout();
		assert!(session.access_token().is_none());
	}
}

// endregion: --- Tests
