//! Request building: headers and body from a `ResolvedRequest`.
//!
//! Pure (no I/O), so the header and body policy is observable without a server.

use crate::request::{Authorization, Method, MultipartForm, Payload, ResolvedRequest};
use crate::webc::{WebBody, WebRequest};
use crate::{Error, Result};
use reqwest::header::HeaderValue;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MIME: &str = "application/json";

// region:    --- EncodedRequest

#[derive(Debug, Clone)]
pub struct EncodedRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: EncodedBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EncodedBody {
	Empty,
	Text(String),
	Multipart(MultipartForm),
}

impl EncodedRequest {
	/// Case-insensitive header lookup.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	pub(crate) fn into_web_request(self) -> Result<WebRequest> {
		let EncodedRequest {
			method,
			url,
			headers,
			body,
		} = self;

		let body = match body {
			EncodedBody::Empty => WebBody::Empty,
			EncodedBody::Text(text) => WebBody::Text(text),
			EncodedBody::Multipart(form) => WebBody::Multipart(form.into_reqwest_form()?),
		};

		Ok(WebRequest {
			method: method.into(),
			url,
			headers,
			body,
		})
	}
}

// endregion: --- EncodedRequest

/// Build the headers and body for one exchange.
///
/// Header order: `Content-Type: application/json`, then `default_headers`, then
/// `Authorization`. A multipart body removes `Content-Type` so the transport can
/// set it with its boundary.
pub fn encode_request(request: ResolvedRequest, default_headers: &[(String, String)]) -> Result<EncodedRequest> {
	let ResolvedRequest {
		target,
		method,
		authorization,
		payload,
	} = request;

	// -- Headers
	let mut headers: Vec<(String, String)> = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
	for (name, value) in default_headers {
		set_header(&mut headers, name, value.clone());
	}

	match authorization {
		Authorization::None => (),
		Authorization::Bearer(token) => {
			let value = token.bearer_header_value();
			if HeaderValue::from_str(&value).is_err() {
				return Err(Error::InvalidCredential);
			}
			set_header(&mut headers, AUTHORIZATION, value);
		}
		// Sent anyway, the server is the one to reject it.
		Authorization::Missing => {
			tracing::warn!("auth requested for '{target}' but no access token is available; sending without credentials")
		}
	}

	// -- Body
	let body = match payload {
		Payload::None => EncodedBody::Empty,
		Payload::Multipart(form) => {
			remove_header(&mut headers, CONTENT_TYPE);
			EncodedBody::Multipart(form)
		}
		Payload::Text(text) => {
			set_header(&mut headers, CONTENT_TYPE, JSON_MIME.to_string());
			EncodedBody::Text(text)
		}
		Payload::Json(value) => {
			set_header(&mut headers, CONTENT_TYPE, JSON_MIME.to_string());
			EncodedBody::Text(value.to_string())
		}
	};

	tracing::trace!(%method, %target, headers = headers.len(), "request encoded");

	Ok(EncodedRequest {
		method,
		url: target.url().to_string(),
		headers,
		body,
	})
}

// region:    --- Support

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
	match headers.iter_mut().find(|(header_name, _)| header_name.eq_ignore_ascii_case(name)) {
		Some((_, existing)) => *existing = value,
		None => headers.push((name.to_string(), value)),
	}
}

fn remove_header(headers: &mut Vec<(String, String)>, name: &str) {
	headers.retain(|(header_name, _)| !header_name.eq_ignore_ascii_case(name));
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
