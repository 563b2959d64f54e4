use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix shown in front of an error the backend reported in its envelope.
pub const APPLICATION_ERROR_PREFIX: &str = "Fehler: ";
/// Prefix shown in front of a failed request or an unreadable response.
pub const TRANSPORT_ERROR_PREFIX: &str = "Verbindungsfehler: ";

#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum StudioError {
	/// The backend answered with `success: false`.
	#[error("{}{}", APPLICATION_ERROR_PREFIX, .0)]
	Application(String),
	/// The request never produced a readable JSON envelope.
	#[error("{}{}", TRANSPORT_ERROR_PREFIX, .0)]
	Transport(String),
	#[error("Ungültige Server-Adresse: {0}")]
	InvalidConfig(String),
}

impl From<reqwest::Error> for StudioError {
	fn from(err: reqwest::Error) -> Self {
		Self::Transport(error_chain(&err))
	}
}

/// `err: cause: cause ...`; reqwest only prints its kind, the decoder detail sits in the sources.
fn error_chain(err: &dyn std::error::Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		let cause_text = cause.to_string();
		if !message.contains(&cause_text) {
			message.push_str(": ");
			message.push_str(&cause_text);
		}
		source = cause.source();
	}
	message
}

impl From<url::ParseError> for StudioError {
	fn from(err: url::ParseError) -> Self {
		Self::InvalidConfig(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_carries_the_fixed_prefixes() {
		let app = StudioError::Application("bad input".to_owned());
		let transport = StudioError::Transport("timeout".to_owned());

		assert_eq!(app.to_string(), format!("{APPLICATION_ERROR_PREFIX}bad input"));
		assert_eq!(transport.to_string(), format!("{TRANSPORT_ERROR_PREFIX}timeout"));
	}

	#[derive(Debug, Error)]
	#[error("error decoding response body")]
	struct DecodeFailure(#[source] serde_json::Error);

	#[test]
	fn error_chain_appends_the_decoder_detail() {
		let decode = serde_json::from_str::<serde_json::Value>("<html>upstream down</html>").unwrap_err();
		let chain = error_chain(&DecodeFailure(decode));
		assert_eq!(chain, "error decoding response body: expected value at line 1 column 1");
	}
}
