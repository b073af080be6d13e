use crate::request::{Method, Payload};
use crate::resolver::{AccessToken, Target};

/// A `ResolvedRequest` is the snapshot of everything one invocation sends.
///
/// This structure contains:
/// - `target`: where the request goes.
/// - `method`: the HTTP verb.
/// - `authorization`: what the auth flag resolved to at call time.
/// - `payload`: the body to encode.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
	pub target: Target,
	pub method: Method,
	pub authorization: Authorization,
	pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
	/// The auth flag was off.
	None,
	Bearer(AccessToken),
	/// The auth flag was on but the credential source had no token.
	Missing,
}

impl Authorization {
	pub(crate) fn resolve(auth: bool, token: impl FnOnce() -> Option<AccessToken>) -> Self {
		if !auth {
			return Self::None;
		}
		match token() {
			Some(token) => Self::Bearer(token),
			None => Self::Missing,
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
