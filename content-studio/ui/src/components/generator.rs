use super::{CARD, CARD_DESCRIPTION, CARD_TITLE, FIELD, LABEL};
use crate::state::StudioSignals;
use common::{Action, HttpBackend, MAX_RATING, MIN_RATING, ReviewDraft, Settings, dispatch};
use dioxus::{logger::tracing::warn, prelude::*};
use dioxus_free_icons::{
	Icon,
	icons::ld_icons::{LdLoader, LdMail, LdMessageSquare},
};
use strum::{Display, EnumIter, IntoEnumIterator};
use tailwind_fuse::tw_merge;

const TAB: &str = "px-3 py-1.5 text-sm font-medium rounded-md transition-colors";
const BUTTON: &str = "w-full flex items-center justify-center px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-orange-600 hover:bg-orange-700 disabled:bg-gray-400 disabled:cursor-not-allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
enum Tab {
	#[default]
	Social,
	Newsletter,
	Menu,
	Reviews,
}

impl Tab {
	fn label(self) -> &'static str {
		match self {
			Self::Social => "Social Media",
			Self::Newsletter => "Newsletter",
			Self::Menu => "Menü",
			Self::Reviews => "Bewertungen",
		}
	}

	fn title(self) -> &'static str {
		match self {
			Self::Social => "Social Media Post",
			Self::Newsletter => "Newsletter",
			Self::Menu => "Menü-Optimierung",
			Self::Reviews => "Antwort auf Bewertungen",
		}
	}

	fn description(self) -> &'static str {
		match self {
			Self::Social => "Erstellen Sie ansprechende Posts für Facebook, Instagram und Co.",
			Self::Newsletter => "Erstellen Sie personalisierte Newsletter für Ihre Kunden",
			Self::Menu => "Optimieren Sie Ihre Menü-Beschreibungen für mehr Verkäufe",
			Self::Reviews => "Beantworten Sie Kundenbewertungen professionell und freundlich",
		}
	}

	fn idle_label(self) -> &'static str {
		match self {
			Self::Social => "Social Media Post generieren",
			Self::Newsletter => "Newsletter generieren",
			Self::Menu => "Menü-Beschreibung optimieren",
			Self::Reviews => "Antwort generieren",
		}
	}

	fn busy_label(self) -> &'static str {
		match self {
			Self::Menu => "Optimiere...",
			Self::Social | Self::Newsletter | Self::Reviews => "Generiere...",
		}
	}

	fn action(self, review: &ReviewDraft) -> Action {
		match self {
			Self::Social => Action::SocialMedia,
			Self::Newsletter => Action::Newsletter,
			Self::Menu => Action::MenuOptimization,
			Self::Reviews => Action::ReviewResponse(review.clone()),
		}
	}
}

#[component]
pub fn Generator(settings: Signal<Settings>, slot: StudioSignals) -> Element {
	let mut active = use_signal(Tab::default);
	let review = use_signal(ReviewDraft::default);
	let current = active();

	rsx! {
		div { class: CARD,
			h2 { class: CARD_TITLE,
				Icon { class: "h-5 w-5", icon: LdMessageSquare }
				"KI-Content Generator"
			}
			p { class: CARD_DESCRIPTION, "Generieren Sie automatisch Inhalte für Ihr Restaurant" }
			div { class: "grid w-full grid-cols-4 gap-1 p-1 mb-4 bg-gray-100 rounded-lg",
				for tab in Tab::iter() {
					button {
						key: "{tab}",
						class: tw_merge!(TAB, if tab == current { "bg-white text-gray-900 shadow-sm" } else { "text-gray-600 hover:text-gray-900" }),
						onclick: move |_| active.set(tab),
						{tab.label()}
					}
				}
			}
			ActionPanel { tab: current, settings, review, slot }
		}
	}
}

#[component]
fn ActionPanel(tab: Tab, settings: Signal<Settings>, review: Signal<ReviewDraft>, slot: StudioSignals) -> Element {
	let backend = use_context::<HttpBackend>();
	let loading = (slot.loading)();

	let on_generate = move |_| {
		let backend = backend.clone();
		let action = tab.action(&review());
		let settings = settings();
		let mut slot = slot;
		async move {
			dispatch(&backend, &action, &settings, &mut slot).await;
		}
	};

	rsx! {
		div { class: "space-y-4",
			h3 { class: "text-lg font-semibold mb-2", {tab.title()} }
			p { class: "text-sm text-gray-600 mb-4", {tab.description()} }
			if tab == Tab::Reviews {
				ReviewFields { review }
			}
			button { class: BUTTON, disabled: loading, onclick: on_generate,
				if loading {
					Icon { class: "mr-2 h-4 w-4 animate-spin", width: 16, height: 16, icon: LdLoader }
					{tab.busy_label()}
				} else {
					if tab == Tab::Newsletter {
						Icon { class: "mr-2 h-4 w-4", width: 16, height: 16, icon: LdMail }
					}
					{tab.idle_label()}
				}
			}
		}
	}
}

#[component]
fn ReviewFields(review: Signal<ReviewDraft>) -> Element {
	let mut review = review;
	let draft = review();

	rsx! {
		div {
			label { class: LABEL, r#for: "review-text", "Bewertungstext" }
			textarea {
				class: FIELD,
				id: "review-text",
				rows: "4",
				placeholder: "Fügen Sie hier die Kundenbewertung ein",
				value: draft.review_text.clone(),
				oninput: move |evt| {
					let next = review.peek().with_review_text(evt.value());
					review.set(next);
				},
			}
		}
		div {
			label { class: LABEL, r#for: "review-rating", "Sterne" }
			select {
				class: FIELD,
				id: "review-rating",
				onchange: move |evt| match evt.value().parse::<u8>() {
					Ok(rating) => {
						let next = review.peek().with_rating(rating);
						review.set(next);
					},
					Err(e) => warn!("[review] invalid rating {:?}: {}", evt.value(), e),
				},
				for rating in (MIN_RATING..=MAX_RATING).rev() {
					option {
						key: "{rating}",
						value: "{rating}",
						selected: rating == draft.rating,
						"{rating} / 5"
					}
				}
			}
		}
	}
}
