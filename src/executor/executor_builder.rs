use crate::executor::{ExecutorConfig, RequestExecutor};
use crate::request::{Method, Payload};
use crate::resolver::{CredentialProvider, Target};
use crate::webc::WebClient;
use crate::Signal;
use std::sync::Arc;

/// Builder for `RequestExecutor`.
///
/// `method` and `payload` accept either a plain value (a private signal is created)
/// or a `Signal` the caller keeps a clone of to change them between calls.
pub struct ExecutorBuilder {
	target: Signal<Target>,
	auth: Signal<bool>,
	method: Option<Signal<Method>>,
	payload: Option<Signal<Payload>>,
	credentials: Option<Arc<dyn CredentialProvider>>,
	web_client: Option<WebClient>,
	config: Option<ExecutorConfig>,
}

impl ExecutorBuilder {
	pub(super) fn new(target: Signal<Target>, auth: Signal<bool>) -> Self {
		Self {
			target,
			auth,
			method: None,
			payload: None,
			credentials: None,
			web_client: None,
			config: None,
		}
	}

	pub fn with_method(mut self, method: impl Into<Signal<Method>>) -> Self {
		self.method = Some(method.into());
		self
	}

	pub fn with_payload(mut self, payload: impl Into<Signal<Payload>>) -> Self {
		self.payload = Some(payload.into());
		self
	}

	pub fn with_credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
		self.credentials = Some(Arc::new(credentials));
		self
	}

	/// Share an existing provider between executors.
	pub fn with_shared_credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
		self.credentials = Some(credentials);
		self
	}

	pub fn with_web_client(mut self, web_client: WebClient) -> Self {
		self.web_client = Some(web_client);
		self
	}

	pub fn with_reqwest_client(mut self, reqwest_client: reqwest::Client) -> Self {
		self.web_client = Some(WebClient::from_reqwest_client(reqwest_client));
		self
	}

	pub fn with_config(mut self, config: ExecutorConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn build(self) -> RequestExecutor {
		RequestExecutor::from_parts(
			self.target,
			self.auth,
			self.method.unwrap_or_default(),
			self.payload.unwrap_or_default(),
			self.credentials,
			self.web_client.unwrap_or_default(),
			self.config.unwrap_or_default(),
		)
	}
}
