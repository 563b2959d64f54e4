use crate::StudioError;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub api_base_url: Url,
}

impl Default for Config {
	fn default() -> Self {
		Self { api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base url is valid") }
	}
}

impl Config {
	pub fn from_base_url(base_url: &str) -> Result<Self, StudioError> {
		let api_base_url = Url::parse(base_url.trim())?;
		if api_base_url.cannot_be_a_base() {
			return Err(StudioError::InvalidConfig(format!("{base_url} cannot be used as a base address")));
		}
		Ok(Self { api_base_url })
	}

	/// Absolute URL of a backend route such as `/api/ai/optimize-menu`.
	pub fn endpoint_url(&self, path: &str) -> Result<Url, StudioError> {
		Ok(self.api_base_url.join(path)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_points_at_the_local_backend() {
		let config = Config::default();
		assert_eq!(config.endpoint_url("/api/ai/generate-social-media").unwrap().as_str(), "http://localhost:5000/api/ai/generate-social-media");
	}

	#[test]
	fn custom_base_url_is_used_for_every_endpoint() {
		let config = Config::from_base_url(" https://studio.example.com:8443 ").unwrap();
		assert_eq!(config.endpoint_url("/api/ai/optimize-menu").unwrap().as_str(), "https://studio.example.com:8443/api/ai/optimize-menu");
	}

	#[test]
	fn rejects_unusable_base_urls() {
		assert!(matches!(Config::from_base_url("localhost 5000"), Err(StudioError::InvalidConfig(_))));
		assert!(matches!(Config::from_base_url("mailto:chef@example.com"), Err(StudioError::InvalidConfig(_))));
	}
}
