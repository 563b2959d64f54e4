mod components;
mod state;

use common::{Config, HttpBackend, Settings};
use components::{ConnectionBadge, Generator, Header, OutputPane, SettingsPanel};
use dioxus::{
	logger::tracing::{Level, info, warn},
	prelude::*,
	web::{Config as WebConfig, launch::launch_cfg},
};
use state::StudioSignals;
use wasm_bindgen::prelude::*;

const API_BASE_URL: &str = env!("API_BASE_URL");
const ENV: &str = env!("ENV");

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, WebConfig::default());
}

fn load_config() -> Config {
	match Config::from_base_url(API_BASE_URL) {
		Ok(config) => {
			info!("[studio] {} build talking to {}", ENV, config.api_base_url);
			config
		},
		Err(e) => {
			warn!("[studio] {}, falling back to the local backend", e);
			Config::default()
		},
	}
}

#[component]
fn App() -> Element {
	use_context_provider(|| HttpBackend::new(load_config()));
	let settings = use_signal(Settings::default);
	let slot = StudioSignals { loading: use_signal(|| false), content: use_signal(String::new) };

	rsx! {
		div { class: "min-h-screen bg-gradient-to-br from-orange-50 to-red-50 p-4",
			div { class: "max-w-6xl mx-auto",
				Header {}
				SettingsPanel { settings }
				div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
					Generator { settings, slot }
					OutputPane { content: slot.content }
				}
				div { class: "flex flex-col items-center gap-2 mt-8 text-gray-500",
					p { "Restaurant KI-Agent MVP • Powered by OpenAI GPT-4.1-mini" }
					ConnectionBadge {}
				}
			}
		}
	}
}
