use crate::{Config, StudioError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	Get,
	Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
	pub method: HttpMethod,
	pub path: &'static str,
}

impl Endpoint {
	pub const SOCIAL_MEDIA: Self = Self { method: HttpMethod::Post, path: "/api/ai/generate-social-media" };
	pub const NEWSLETTER: Self = Self { method: HttpMethod::Post, path: "/api/ai/generate-newsletter" };
	pub const OPTIMIZE_MENU: Self = Self { method: HttpMethod::Post, path: "/api/ai/optimize-menu" };
	pub const REVIEW_RESPONSE: Self = Self { method: HttpMethod::Post, path: "/api/ai/generate-review-response" };
	pub const TEST_CONNECTION: Self = Self { method: HttpMethod::Get, path: "/api/ai/test-connection" };
}

/// The `{success, error, ...}` object every backend route answers with.
///
/// Fields other than `success` and `error` are kept untouched in `fields`, the caller
/// decides which one it displays.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Envelope {
	#[serde(default)]
	pub success: bool,
	#[serde(default)]
	pub error: Option<String>,
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

pub const UNKNOWN_ERROR: &str = "unbekannter Fehler";

impl Envelope {
	pub fn success(fields: impl IntoIterator<Item = (String, Value)>) -> Self {
		Self { success: true, error: None, fields: fields.into_iter().collect() }
	}

	pub fn failure(error: impl Into<String>) -> Self {
		Self { success: false, error: Some(error.into()), fields: Map::new() }
	}

	/// Splits the envelope into its payload or the application error it reports.
	pub fn into_payload(self) -> Result<Map<String, Value>, StudioError> {
		if self.success {
			Ok(self.fields)
		} else {
			Err(StudioError::Application(self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_owned())))
		}
	}
}

/// One request, one envelope. Implementations must not retry.
#[async_trait(?Send)]
pub trait Backend {
	async fn call(&self, endpoint: Endpoint, body: Option<Value>) -> Result<Envelope, StudioError>;
}

/// [`Backend`] over HTTP; the browser's fetch on wasm32, hyper natively.
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct HttpBackend {
	#[builder(default)]
	config: Config,
	#[builder(default)]
	client: Client,
}

impl HttpBackend {
	pub fn new(config: Config) -> Self {
		Self::builder().config(config).build()
	}
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
	async fn call(&self, endpoint: Endpoint, body: Option<Value>) -> Result<Envelope, StudioError> {
		let url = self.config.endpoint_url(endpoint.path)?;
		debug!("[backend] {:?} {}", endpoint.method, url);

		let request = match endpoint.method {
			HttpMethod::Get => self.client.get(url),
			HttpMethod::Post => self.client.post(url),
		};
		let request = match body {
			Some(body) => request.json(&body),
			None => request,
		};

		let response = request.send().await.inspect_err(|e| warn!("[backend] request to {} failed: {}", endpoint.path, e))?;
		let status = response.status();
		// failure envelopes arrive with a 5xx status, so the body is decoded regardless
		let envelope = response.json::<Envelope>().await.inspect_err(|e| warn!("[backend] unreadable {} response from {}: {}", status, endpoint.path, e))?;
		debug!("[backend] {} answered {} (success: {})", endpoint.path, status, envelope.success);
		Ok(envelope)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn envelope_keeps_unknown_fields() {
		let envelope: Envelope = serde_json::from_value(json!({
			"success": true,
			"content": "Buon appetito!",
			"timestamp": "2025-06-01T12:00:00"
		}))
		.unwrap();
		let payload = envelope.into_payload().unwrap();
		assert_eq!(payload["content"], "Buon appetito!");
		assert!(payload.contains_key("timestamp"));
	}

	#[test]
	fn failure_envelope_becomes_application_error() {
		let envelope: Envelope = serde_json::from_value(json!({ "success": false, "error": "bad input" })).unwrap();
		assert_eq!(envelope.into_payload(), Err(StudioError::Application("bad input".to_owned())));
	}

	#[test]
	fn missing_success_counts_as_failure() {
		let envelope: Envelope = serde_json::from_value(json!({ "content": "ignored" })).unwrap();
		assert_eq!(envelope.into_payload(), Err(StudioError::Application(UNKNOWN_ERROR.to_owned())));
	}

	#[test]
	fn non_object_bodies_do_not_decode() {
		assert!(serde_json::from_value::<Envelope>(json!(["success", true])).is_err());
		assert!(serde_json::from_value::<Envelope>(json!({ "success": "yes" })).is_err());
	}
}
