use super::{CARD, CARD_DESCRIPTION, CARD_TITLE, FIELD, LABEL};
use common::{Cuisine, Language, Settings, SettingsEdit};
use dioxus::{logger::tracing::warn, prelude::*};
use dioxus_free_icons::{Icon, icons::ld_icons::LdTrendingUp};
use strum::IntoEnumIterator;

#[component]
pub fn SettingsPanel(settings: Signal<Settings>) -> Element {
	let mut settings = settings;
	let current = settings();

	// every control replaces exactly one field of a fresh settings value
	let mut edit = move |edit: SettingsEdit| {
		let next = settings.peek().apply(edit);
		settings.set(next);
	};

	rsx! {
		div { class: "{CARD} mb-8",
			h2 { class: CARD_TITLE,
				Icon { class: "h-5 w-5", icon: LdTrendingUp }
				"Restaurant-Einstellungen"
			}
			p { class: CARD_DESCRIPTION, "Konfigurieren Sie Ihre Restaurant-Daten für personalisierte Inhalte" }
			div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
				div {
					label { class: LABEL, r#for: "restaurant-name", "Restaurant Name" }
					input {
						class: FIELD,
						id: "restaurant-name",
						r#type: "text",
						placeholder: "Ihr Restaurant Name",
						value: current.name.clone(),
						oninput: move |evt| edit(SettingsEdit::Name(evt.value())),
					}
				}
				div {
					label { class: LABEL, r#for: "cuisine", "Küche" }
					select {
						class: FIELD,
						id: "cuisine",
						onchange: move |evt| match evt.value().parse::<Cuisine>() {
							Ok(cuisine) => edit(SettingsEdit::Cuisine(cuisine)),
							Err(e) => warn!("[settings] unknown cuisine {:?}: {}", evt.value(), e),
						},
						for cuisine in Cuisine::iter() {
							option {
								key: "{cuisine}",
								value: "{cuisine}",
								selected: cuisine == current.cuisine,
								"{cuisine}"
							}
						}
					}
				}
				div {
					label { class: LABEL, r#for: "special-dish", "Spezialität" }
					input {
						class: FIELD,
						id: "special-dish",
						r#type: "text",
						placeholder: "Ihr Signature Dish",
						value: current.special_dish.clone(),
						oninput: move |evt| edit(SettingsEdit::SpecialDish(evt.value())),
					}
				}
				div {
					label { class: LABEL, r#for: "language", "Sprache" }
					select {
						class: FIELD,
						id: "language",
						onchange: move |evt| match evt.value().parse::<Language>() {
							Ok(language) => edit(SettingsEdit::Language(language)),
							Err(e) => warn!("[settings] unknown language {:?}: {}", evt.value(), e),
						},
						for language in Language::iter() {
							option {
								key: "{language}",
								value: "{language}",
								selected: language == current.language,
								{language.label()}
							}
						}
					}
				}
			}
		}
	}
}
