use crate::{Action, Backend, Endpoint, Settings, SettingsEdit, StudioError};
use serde_json::Value;
use tracing::{debug, info, warn};

pub const PLACEHOLDER_TEXT: &str = "Wählen Sie eine Option und generieren Sie Ihren ersten Content!";

/// The output slot and loading flag an action writes into.
///
/// All actions share one slot, so the last completed action wins.
pub trait OutputSlot {
	fn is_loading(&self) -> bool;
	fn set_loading(&mut self, loading: bool);
	fn show(&mut self, content: String);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Displayed,
	Failed(StudioError),
	/// Another action was still in flight; nothing was sent.
	Rejected,
}

/// Runs one action against the backend and renders its result or error into `slot`.
///
/// The loading flag is raised before the request goes out and cleared on every path.
/// While it is raised further calls are rejected without touching the slot.
pub async fn dispatch<B, S>(backend: &B, action: &Action, settings: &Settings, slot: &mut S) -> Outcome
where
	B: Backend + ?Sized,
	S: OutputSlot + ?Sized,
{
	if slot.is_loading() {
		warn!("[studio] {} ignored, another request is still running", action.name());
		return Outcome::Rejected;
	}

	slot.set_loading(true);
	debug!("[studio] {} started", action.name());

	let outcome = match generate(backend, action, settings).await {
		Ok(text) => {
			info!("[studio] {} finished ({} chars)", action.name(), text.chars().count());
			slot.show(text);
			Outcome::Displayed
		},
		Err(err) => {
			warn!("[studio] {} failed: {}", action.name(), err);
			slot.show(err.to_string());
			Outcome::Failed(err)
		},
	};

	slot.set_loading(false);
	outcome
}

async fn generate<B: Backend + ?Sized>(backend: &B, action: &Action, settings: &Settings) -> Result<String, StudioError> {
	let body = action.request_body(settings).map_err(|e| StudioError::Transport(e.to_string()))?;
	let payload = backend.call(action.endpoint(), Some(body)).await?.into_payload()?;
	Ok(action.result_field().render(&payload))
}

/// Asks the backend whether its model provider answers.
pub async fn check_connection<B: Backend + ?Sized>(backend: &B) -> Result<String, StudioError> {
	let payload = backend.call(Endpoint::TEST_CONNECTION, None).await?.into_payload()?;
	let text = ["test_response", "message"].iter().find_map(|key| payload.get(*key).and_then(Value::as_str)).unwrap_or_default();
	Ok(text.to_owned())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
	#[default]
	Unknown,
	Checking,
	Online(String),
	Offline(StudioError),
}

impl ConnectionStatus {
	pub fn from_result(result: Result<String, StudioError>) -> Self {
		match result {
			Ok(reply) => Self::Online(reply),
			Err(err) => Self::Offline(err),
		}
	}

	pub fn label(&self) -> String {
		match self {
			Self::Unknown => "Verbindung nicht geprüft".to_owned(),
			Self::Checking => "Prüfe Verbindung...".to_owned(),
			Self::Online(reply) if reply.is_empty() => "Verbunden".to_owned(),
			Self::Online(reply) => format!("Verbunden: {reply}"),
			Self::Offline(err) => err.to_string(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputView<'a> {
	Content(&'a str),
	Placeholder,
}

impl<'a> OutputView<'a> {
	pub fn of(content: &'a str) -> Self {
		if content.is_empty() { Self::Placeholder } else { Self::Content(content) }
	}
}

/// View-owned state: the settings record, one output slot and the loading flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Studio {
	settings: Settings,
	generated_content: String,
	loading: bool,
}

impl Studio {
	pub fn new(settings: Settings) -> Self {
		Self { settings, ..Self::default() }
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn generated_content(&self) -> &str {
		&self.generated_content
	}

	pub fn loading(&self) -> bool {
		self.loading
	}

	pub fn edit(&mut self, edit: SettingsEdit) {
		self.settings = self.settings.apply(edit);
	}

	pub fn output_view(&self) -> OutputView<'_> {
		OutputView::of(&self.generated_content)
	}

	pub async fn run<B: Backend + ?Sized>(&mut self, backend: &B, action: &Action) -> Outcome {
		let settings = self.settings.clone();
		dispatch(backend, action, &settings, self).await
	}
}

impl OutputSlot for Studio {
	fn is_loading(&self) -> bool {
		self.loading
	}

	fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	fn show(&mut self, content: String) {
		self.generated_content = content;
	}
}
