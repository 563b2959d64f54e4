use super::{CARD, CARD_DESCRIPTION, CARD_TITLE};
use common::{OutputView, PLACEHOLDER_TEXT};
use dioxus::prelude::*;
use dioxus_free_icons::{
	Icon,
	icons::ld_icons::{LdCopy, LdMessageSquare, LdStar},
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

const COPY_LABEL: &str = "Kopieren";

#[component]
pub fn OutputPane(content: Signal<String>) -> Element {
	let content = content();

	rsx! {
		div { class: CARD,
			h2 { class: CARD_TITLE,
				Icon { class: "h-5 w-5", icon: LdStar }
				"Generierter Content"
			}
			p { class: CARD_DESCRIPTION, "Ihr KI-generierter Inhalt erscheint hier" }
			div { class: "min-h-[400px]",
				match OutputView::of(&content) {
					OutputView::Content(text) => rsx! {
						div { class: "relative bg-gray-50 p-4 rounded-lg",
							CopyButton { text: text.to_owned() }
							pre { class: "whitespace-pre-wrap text-sm text-gray-800", "{text}" }
						}
					},
					OutputView::Placeholder => rsx! {
						div { class: "flex items-center justify-center h-[400px] text-gray-500",
							div { class: "text-center",
								Icon { class: "h-12 w-12 mx-auto mb-4 opacity-50", width: 48, height: 48, icon: LdMessageSquare }
								p { {PLACEHOLDER_TEXT} }
							}
						}
					},
				}
			}
		}
	}
}

#[component]
fn CopyButton(text: String) -> Element {
	let mut copy_label = use_signal(|| COPY_LABEL.to_owned());

	rsx! {
		button {
			class: "absolute top-2 right-2 flex items-center gap-1 px-2 py-1 text-xs font-medium text-gray-600 bg-gray-200 hover:bg-gray-300 rounded-md transition-all",
			onclick: move |_| {
				let text = text.clone();
				async move {
					let label = match copy_to_clipboard(&text).await {
						Ok(()) => "Kopiert!",
						Err(_) => "Fehlgeschlagen",
					};
					copy_label.set(label.to_owned());
					TimeoutFuture::new(2_000).await;
					copy_label.set(COPY_LABEL.to_owned());
				}
			},
			Icon { class: "h-3 w-3", width: 12, height: 12, icon: LdCopy }
			"{copy_label}"
		}
	}
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	JsFuture::from(window.navigator().clipboard().write_text(text)).await?;
	Ok(())
}
