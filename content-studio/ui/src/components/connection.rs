use common::{ConnectionStatus, HttpBackend, check_connection};
use dioxus::prelude::*;
use dioxus_free_icons::{
	Icon,
	icons::ld_icons::{LdWifi, LdWifiOff},
};
use tailwind_fuse::tw_merge;

const BADGE: &str = "inline-flex items-center gap-1 px-2.5 py-0.5 text-xs font-semibold rounded-full";

/// Footer badge that pings the backend's connection test on demand.
#[component]
pub fn ConnectionBadge() -> Element {
	let backend = use_context::<HttpBackend>();
	let mut status = use_signal(ConnectionStatus::default);
	let current = status();
	let checking = current == ConnectionStatus::Checking;

	let on_check = move |_| {
		let backend = backend.clone();
		async move {
			status.set(ConnectionStatus::Checking);
			let result = check_connection(&backend).await;
			status.set(ConnectionStatus::from_result(result));
		}
	};

	let tone = match current {
		ConnectionStatus::Online(_) => "bg-green-100 text-green-800",
		ConnectionStatus::Offline(_) => "bg-red-100 text-red-800",
		ConnectionStatus::Unknown | ConnectionStatus::Checking => "bg-gray-100 text-gray-800",
	};

	rsx! {
		div { class: "flex items-center gap-2 text-sm",
			span { class: tw_merge!(BADGE, tone),
				if matches!(current, ConnectionStatus::Offline(_)) {
					Icon { class: "h-3 w-3", width: 12, height: 12, icon: LdWifiOff }
				} else {
					Icon { class: "h-3 w-3", width: 12, height: 12, icon: LdWifi }
				}
				{current.label()}
			}
			button {
				class: "text-orange-600 hover:underline font-semibold bg-transparent border-none p-0 cursor-pointer disabled:text-gray-400",
				disabled: checking,
				onclick: on_check,
				"Verbindung testen"
			}
		}
	}
}
