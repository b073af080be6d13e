/// How overlapping `execute()` calls on one executor write the shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettlePolicy {
	/// Every settlement writes `data`/`error` and clears `loading`.
	/// The last exchange to settle wins, whichever was started last.
	#[default]
	LastSettled,

	/// Each invocation is numbered; only the most recently started one may write the state.
	/// Older settlements still resolve their own future, but leave `data`, `error`, and
	/// `loading` untouched, so `loading` stays `true` until the latest call settles.
	LatestInvocation,
}

/// Executor configuration, shared by all invocations of one executor.
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
	settle_policy: SettlePolicy,
	default_headers: Vec<(String, String)>,
}

/// Chainable Setters
impl ExecutorConfig {
	#[must_use]
	pub fn with_settle_policy(mut self, settle_policy: SettlePolicy) -> Self {
		self.settle_policy = settle_policy;
		self
	}

	/// Added after the default `Content-Type` and before `Authorization`.
	/// A header with the same name (case-insensitive) replaces the earlier one.
	#[must_use]
	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.push((name.into(), value.into()));
		self
	}
}

/// Getters
impl ExecutorConfig {
	pub fn settle_policy(&self) -> SettlePolicy {
		self.settle_policy
	}

	pub fn default_headers(&self) -> &[(String, String)] {
		&self.default_headers
	}
}
