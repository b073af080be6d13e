//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use remote_data::{RequestExecutor, Signal, Target};
use std::sync::Once;
use wiremock::MockServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// region:    --- Tracing

static TRACING_INIT: Once = Once::new();

/// Install a test subscriber once per test binary (filter with `RUST_LOG`).
pub fn init_tracing() {
	TRACING_INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_test_writer()
			.try_init();
	});
}

// endregion: --- Tracing

// region:    --- Common Helpers

pub fn target_for(server: &MockServer, route: &str) -> Signal<Target> {
	Signal::new(Target::from(format!("{}{route}", server.uri())))
}

/// An unauthenticated GET executor against `route` on the mock server.
pub fn get_executor(server: &MockServer, route: &str) -> RequestExecutor {
	RequestExecutor::new(target_for(server, route), Signal::new(false))
}

/// Mount a `200 application/json` answer for `GET route`.
pub async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
	Mock::given(method("GET"))
		.and(path(route))
		.respond_with(ResponseTemplate::new(200).set_body_json(body))
		.mount(server)
		.await;
}

/// Header value of the single request received by the server.
pub async fn single_request_header(server: &MockServer, name: &str) -> Result<Option<String>> {
	let requests = server.received_requests().await.ok_or("request recording disabled")?;
	let [request] = requests.as_slice() else {
		return Err(format!("expected 1 request, got {}", requests.len()).into());
	};
	let value = request.headers.get(name).map(|v| v.to_str()).transpose()?;
	Ok(value.map(ToString::to_string))
}

// endregion: --- Common Helpers
