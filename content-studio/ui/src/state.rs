use common::OutputSlot;
use dioxus::prelude::*;

/// The shared output slot as a pair of signals, so every action writes into the same pane.
#[derive(Clone, Copy, PartialEq)]
pub struct StudioSignals {
	pub loading: Signal<bool>,
	pub content: Signal<String>,
}

impl OutputSlot for StudioSignals {
	fn is_loading(&self) -> bool {
		// peek: the dispatcher must not subscribe the calling scope
		*self.loading.peek()
	}

	fn set_loading(&mut self, loading: bool) {
		self.loading.set(loading);
	}

	fn show(&mut self, content: String) {
		self.content.set(content);
	}
}
