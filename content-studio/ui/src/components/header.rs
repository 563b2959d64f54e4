use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::ld_icons::LdChefHat};

#[component]
pub fn Header() -> Element {
	rsx! {
		div { class: "text-center mb-8",
			div { class: "flex items-center justify-center gap-3 mb-4",
				Icon { class: "h-10 w-10 text-orange-600", width: 40, height: 40, icon: LdChefHat }
				h1 { class: "text-4xl font-bold text-gray-900", "Restaurant KI-Agent" }
			}
			p { class: "text-lg text-gray-600", "Automatisierte Content-Generierung für Ihr Restaurant" }
			span { class: "inline-block mt-2 px-2.5 py-0.5 text-xs font-semibold rounded-full bg-gray-100 text-gray-800",
				"MVP Version 1.0"
			}
		}
	}
}
