use crate::webc::{Error, Result};
use bytes::Bytes;
use hyper::ext::ReasonPhrase;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};

/// Simple reqwest client wrapper for the executor.
/// Cloning is cheap (the inner `reqwest::Client` is reference counted).
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: Client,
}

impl WebClient {
	pub fn from_reqwest_client(reqwest_client: Client) -> Self {
		WebClient { reqwest_client }
	}

	pub fn reqwest_client(&self) -> &Client {
		&self.reqwest_client
	}
}

impl WebClient {
	/// Send one request. Only a transport failure is an error here;
	/// any HTTP status is returned as a `WebResponse`.
	pub async fn send(&self, request: WebRequest) -> Result<WebResponse> {
		let WebRequest {
			method,
			url,
			headers,
			body,
		} = request;

		let mut reqwest_builder = self.reqwest_client.request(method, &url).headers(to_header_map(&headers)?);

		reqwest_builder = match body {
			WebBody::Empty => reqwest_builder,
			WebBody::Text(text) => reqwest_builder.body(text),
			WebBody::Multipart(form) => reqwest_builder.multipart(form),
		};

		let reqwest_res = reqwest_builder.send().await?;

		WebResponse::from_reqwest_response(reqwest_res).await
	}
}

// region:    --- WebRequest

#[derive(Debug)]
pub struct WebRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: WebBody,
}

#[derive(Debug)]
pub enum WebBody {
	Empty,
	Text(String),
	/// The transport computes the multipart boundary and `Content-Type`.
	Multipart(Form),
}

fn to_header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
	let mut header_map = HeaderMap::with_capacity(headers.len());
	for (name, value) in headers {
		let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| Error::InvalidHeader {
			name: name.clone(),
			cause: err.to_string(),
		})?;
		let header_value = HeaderValue::from_str(value).map_err(|err| Error::InvalidHeader {
			name: name.clone(),
			cause: err.to_string(),
		})?;
		header_map.insert(header_name, header_value);
	}
	Ok(header_map)
}

// endregion: --- WebRequest

// region:    --- WebResponse

#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	/// The reason phrase the server sent, or the canonical one for the status.
	pub status_text: String,
	pub content_type: Option<String>,
	/// Empty when the status is not a success (the body is never read in that case).
	pub body: Bytes,
}

impl WebResponse {
	pub(crate) async fn from_reqwest_response(res: reqwest::Response) -> Result<WebResponse> {
		let status = res.status();
		let status_text = reason_phrase(status, res.extensions().get::<ReasonPhrase>());
		let content_type = res
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(ToString::to_string);

		let body = if status.is_success() { res.bytes().await? } else { Bytes::new() };

		Ok(WebResponse {
			status,
			status_text,
			content_type,
			body,
		})
	}
}

/// hyper only records a `ReasonPhrase` when the server's phrase differs from the canonical one.
/// Empty when neither is known.
fn reason_phrase(status: StatusCode, sent: Option<&ReasonPhrase>) -> String {
	match sent {
		Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
		None => status.canonical_reason().unwrap_or_default().to_string(),
	}
}

// endregion: --- WebResponse

// region:    --- Tests


// endregion: --- Tests
