use crate::executor::{ExecutorBuilder, ExecutorConfig, RequestState, Settlement};
use crate::request::{Authorization, Method, Payload, ResolvedRequest, encode_request};
use crate::resolver::{CredentialProvider, NoCredentials, Target};
use crate::response::{ResponseBody, decode_body};
use crate::webc::WebClient;
use crate::{Error, Result, Signal};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Performs HTTP exchanges and mirrors their outcome in reactive state.
///
/// `target`, `auth`, `method`, and `payload` are signals read when `execute()` is called,
/// so one executor can be reused after the caller changes them.
///
/// Cloning is cheap and clones share the same state and signals.
#[derive(Clone)]
pub struct RequestExecutor {
	pub(super) target: Signal<Target>,
	pub(super) auth: Signal<bool>,
	pub(super) method: Signal<Method>,
	pub(super) payload: Signal<Payload>,

	pub(super) credentials: Arc<dyn CredentialProvider>,
	pub(super) web_client: WebClient,
	pub(super) config: Arc<ExecutorConfig>,

	pub(super) state: RequestState,
	pub(super) invocations: Arc<AtomicU64>,
}

/// Constructors
impl RequestExecutor {
	/// `GET`, no payload, no credentials, default `reqwest` client.
	pub fn new(target: Signal<Target>, auth: Signal<bool>) -> Self {
		Self::builder(target, auth).build()
	}

	pub fn builder(target: Signal<Target>, auth: Signal<bool>) -> ExecutorBuilder {
		ExecutorBuilder::new(target, auth)
	}

	pub(super) fn from_parts(
		target: Signal<Target>,
		auth: Signal<bool>,
		method: Signal<Method>,
		payload: Signal<Payload>,
		credentials: Option<Arc<dyn CredentialProvider>>,
		web_client: WebClient,
		config: ExecutorConfig,
	) -> Self {
		RequestExecutor {
			target,
			auth,
			method,
			payload,
			credentials: credentials.unwrap_or_else(|| Arc::new(NoCredentials)),
			web_client,
			config: Arc::new(config),
			state: RequestState::default(),
			invocations: Arc::new(AtomicU64::new(0)),
		}
	}
}

/// Execute
impl RequestExecutor {
	/// Trigger one exchange.
	///
	/// Before returning, this sets `loading` to `true` and snapshots the target, method,
	/// payload, and (when `auth` is on) the access token. The returned future performs
	/// the exchange, records the outcome in `data` or `error`, clears `loading`, and
	/// resolves with the same outcome.
	///
	/// The future is `'static`, so it can be spawned. Overlapping calls are allowed;
	/// see `SettlePolicy` for how they share the state.
	pub fn execute(&self) -> impl Future<Output = Result<ResponseBody>> + Send + 'static {
		// -- Invocation start (before any I/O)
		self.state.start();
		let invocation = self.invocations.fetch_add(1, Ordering::SeqCst) + 1;
		let request = self.resolve_request();

		let web_client = self.web_client.clone();
		let config = self.config.clone();
		// Moved into the future, so dropping it unpolled or mid-flight still clears `loading`.
		let settlement = Settlement::new(
			self.state.clone(),
			self.invocations.clone(),
			invocation,
			config.settle_policy(),
		);

		async move {
			let res = exchange(&web_client, request, config.default_headers()).await;

			match &res {
				Ok(body) => tracing::debug!(?body, "remote data received"),
				Err(err) => tracing::error!("Fetch error: {err}"),
			}

			settlement.settle(&res);

			res
		}
	}

	fn resolve_request(&self) -> ResolvedRequest {
		let authorization = Authorization::resolve(self.auth.get(), || self.credentials.access_token());

		ResolvedRequest {
			target: self.target.get(),
			method: self.method.get(),
			authorization,
			payload: self.payload.get(),
		}
	}
}

/// One network exchange: encode, send, check status, decode.
async fn exchange(
	web_client: &WebClient,
	request: ResolvedRequest,
	default_headers: &[(String, String)],
) -> Result<ResponseBody> {
	let encoded = encode_request(request, default_headers)?;
	tracing::debug!(method = %encoded.method, url = %encoded.url, "sending request");

	let web_response = web_client.send(encoded.into_web_request()?).await?;

	if !web_response.status.is_success() {
		return Err(Error::HttpStatus {
			status: web_response.status.as_u16(),
			status_text: web_response.status_text,
		});
	}

	decode_body(web_response.content_type.as_deref(), web_response.body)
}

/// Getters
impl RequestExecutor {
	pub fn state(&self) -> &RequestState {
		&self.state
	}

	pub fn data(&self) -> &Signal<Option<ResponseBody>> {
		self.state.data()
	}

	pub fn error(&self) -> &Signal<Option<Error>> {
		self.state.error()
	}

	pub fn loading(&self) -> &Signal<bool> {
		self.state.loading()
	}

	pub fn target(&self) -> &Signal<Target> {
		&self.target
	}

	pub fn auth(&self) -> &Signal<bool> {
		&self.auth
	}

	pub fn method(&self) -> &Signal<Method> {
		&self.method
	}

	pub fn payload(&self) -> &Signal<Payload> {
		&self.payload
	}

	pub fn config(&self) -> &ExecutorConfig {
		&self.config
	}
}

impl core::fmt::Debug for RequestExecutor {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RequestExecutor")
			.field("target", &self.target.get())
			.field("method", &self.method.get())
			.field("auth", &self.auth.get())
			.field("config", &self.config)
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

// region:    --- Tests


// endregion: --- Tests
