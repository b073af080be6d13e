use crate::executor::SettlePolicy;
use crate::response::ResponseBody;
use crate::{Error, Signal};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The `data` / `error` / `loading` triple of one executor.
///
/// A new invocation does not clear `data` or `error`; each is replaced only when
/// a result of its kind lands.
#[derive(Debug, Clone, Default)]
pub struct RequestState {
	data: Signal<Option<ResponseBody>>,
	error: Signal<Option<Error>>,
	loading: Signal<bool>,
}

/// Getters
impl RequestState {
	pub fn data(&self) -> &Signal<Option<ResponseBody>> {
		&self.data
	}

	pub fn error(&self) -> &Signal<Option<Error>> {
		&self.error
	}

	pub fn loading(&self) -> &Signal<bool> {
		&self.loading
	}
}

impl RequestState {
	pub(crate) fn start(&self) {
		self.loading.set(true);
	}

	/// Record the outcome of an exchange, then clear `loading` (always last).
	pub(crate) fn settle(&self, res: &Result<ResponseBody, Error>) {
		match res {
			Ok(body) => {
				self.data.set(Some(body.clone()));
			}
			Err(err) => {
				self.error.set(Some(err.clone()));
			}
		}
		self.loading.set(false);
	}
}

// region:    --- Settlement

/// The pending write-back of one invocation.
///
/// `settle` applies the outcome. Dropped without settling (future cancelled or never
/// polled), it only clears `loading`. Both respect the `SettlePolicy`.
pub(crate) struct Settlement {
	state: RequestState,
	invocations: Arc<AtomicU64>,
	invocation: u64,
	policy: SettlePolicy,
	settled: bool,
}

impl Settlement {
	pub(crate) fn new(state: RequestState, invocations: Arc<AtomicU64>, invocation: u64, policy: SettlePolicy) -> Self {
		Self {
			state,
			invocations,
			invocation,
			policy,
			settled: false,
		}
	}

	pub(crate) fn settle(mut self, res: &Result<ResponseBody, Error>) {
		self.settled = true;
		if self.may_write() {
			self.state.settle(res);
		} else {
			tracing::debug!(invocation = self.invocation, "stale settlement, state left untouched");
		}
	}

	fn may_write(&self) -> bool {
		match self.policy {
			SettlePolicy::LastSettled => true,
			SettlePolicy::LatestInvocation => self.invocations.load(Ordering::SeqCst) == self.invocation,
		}
	}
}

impl Drop for Settlement {
	fn drop(&mut self) {
		if !self.settled && self.may_write() {
			tracing::debug!(invocation = self.invocation, "request dropped before settling");
			self.state.loading.set(false);
		}
	}
}

// endregion: --- Settlement

// region:    --- Tests


// endregion: --- Tests
