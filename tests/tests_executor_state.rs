mod support;

use crate::support::{Result, get_executor, init_tracing, mount_json, target_for};
use remote_data::{ExecutorConfig, RequestExecutor, ResponseBody, SettlePolicy, Signal, Target};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_delayed_json(server: &MockServer, route: &str, body: serde_json::Value, delay_ms: u64) {
	Mock::given(method("GET"))
		.and(path(route))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(body)
				.set_delay(Duration::from_millis(delay_ms)),
		)
		.mount(server)
		.await;
}

// region:    --- Loading

#[tokio::test]
async fn test_loading_set_before_first_poll() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	mount_json(&server, "/ping", json!({"pong": true})).await;
	let executor = get_executor(&server, "/ping");
	assert!(!executor.loading().get());

	let pending = executor.execute();
	assert!(executor.loading().get(), "loading must be set before the future is polled");

	pending.await?;
	assert!(!executor.loading().get());
	Ok(())
}

#[tokio::test]
async fn test_loading_true_while_in_flight() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	mount_delayed_json(&server, "/slow", json!({"done": true}), 200).await;
	let executor = get_executor(&server, "/slow");
	let mut loading_rx = executor.loading().subscribe();

	let handle = tokio::spawn(executor.execute());
	tokio::time::sleep(Duration::from_millis(50)).await;
	assert!(executor.loading().get());
	assert!(executor.data().get().is_none());

	loading_rx.wait_for(|loading| !*loading).await?;
	handle.await??;
	assert_eq!(executor.data().get(), Some(ResponseBody::Json(json!({"done": true}))));
	Ok(())
}

#[tokio::test]
async fn test_loading_cleared_on_transport_error() -> Result<()> {
	init_tracing();
	// Nothing listens on port 1.
	let executor = RequestExecutor::new(Signal::new("http://127.0.0.1:1/unreachable".into()), Signal::new(false));

	let err = executor.execute().await.err().ok_or("connection should fail")?;

	assert!(err.is_transport());
	assert!(executor.error().with(|err| err.as_ref().is_some_and(|err| err.is_transport())));
	assert!(executor.data().get().is_none());
	assert!(!executor.loading().get());
	Ok(())
}

#[tokio::test]
async fn test_loading_cleared_when_future_dropped() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	mount_delayed_json(&server, "/slow", json!({"done": true}), 300).await;
	let executor = get_executor(&server, "/slow");

	let timed_out = tokio::time::timeout(Duration::from_millis(50), executor.execute()).await;
	assert!(timed_out.is_err());
	assert!(!executor.loading().get());
	assert!(executor.data().get().is_none());
	assert!(executor.error().get().is_none());

	let unpolled = executor.execute();
	assert!(executor.loading().get());
	drop(unpolled);
	assert!(!executor.loading().get());
	Ok(())
}

// endregion: --- Loading

// region:    --- Overlapping Invocations

#[tokio::test]
async fn test_last_settled_wins_by_default() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	mount_delayed_json(&server, "/slow", json!({"n": 1}), 300).await;
	mount_delayed_json(&server, "/fast", json!({"n": 2}), 0).await;
	let target = target_for(&server, "/slow");
	let executor = RequestExecutor::new(target.clone(), Signal::new(false));

	let slow = tokio::spawn(executor.execute());
	target.set(Target::from(format!("{}/fast", server.uri())));
	let fast = tokio::spawn(executor.execute());

	fast.await??;
	// The first settlement already cleared loading, even with the slow call in flight.
	assert!(!executor.loading().get());
	assert_eq!(executor.data().get(), Some(ResponseBody::Json(json!({"n": 2}))));

	slow.await??;
	assert_eq!(executor.data().get(), Some(ResponseBody::Json(json!({"n": 1}))));
	Ok(())
}

#[tokio::test]
async fn test_latest_invocation_ignores_stale_settlement() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	mount_delayed_json(&server, "/fast", json!({"n": 1}), 0).await;
	mount_delayed_json(&server, "/slow", json!({"n": 2}), 300).await;
	let target = target_for(&server, "/fast");
	let executor = RequestExecutor::builder(target.clone(), Signal::new(false))
		.with_config(ExecutorConfig::default().with_settle_policy(SettlePolicy::LatestInvocation))
		.build();

	let older = tokio::spawn(executor.execute());
	target.set(Target::from(format!("{}/slow", server.uri())));
	let latest = tokio::spawn(executor.execute());

	// The stale call still resolves with its own body.
	let older_body = older.await??;
	assert_eq!(older_body, ResponseBody::Json(json!({"n": 1})));
	assert!(executor.loading().get(), "loading stays on until the latest call settles");
	assert!(executor.data().get().is_none());

	latest.await??;
	assert!(!executor.loading().get());
	assert_eq!(executor.data().get(), Some(ResponseBody::Json(json!({"n": 2}))));
	Ok(())
}

// endregion: --- Overlapping Invocations

// region:    --- Config

#[tokio::test]
async fn test_default_headers_sent() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/info"))
		.and(wiremock::matchers::header("x-client", "portal"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.expect(1)
		.mount(&server)
		.await;
	let executor = RequestExecutor::builder(target_for(&server, "/info"), Signal::new(false))
		.with_config(ExecutorConfig::default().with_default_header("X-Client", "portal"))
		.build();

	executor.execute().await?;

	Ok(())
}

// endregion: --- Config
