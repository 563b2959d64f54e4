mod connection;
mod generator;
mod header;
mod output_pane;
mod settings_panel;

pub use connection::ConnectionBadge;
pub use generator::Generator;
pub use header::Header;
pub use output_pane::OutputPane;
pub use settings_panel::SettingsPanel;

pub(crate) const CARD: &str = "bg-white rounded-lg shadow-md border border-gray-200 p-6";
pub(crate) const CARD_TITLE: &str = "flex items-center gap-2 text-xl font-semibold text-gray-900";
pub(crate) const CARD_DESCRIPTION: &str = "text-sm text-gray-600 mb-4";
pub(crate) const FIELD: &str =
	"w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-orange-500 focus:border-orange-500";
pub(crate) const LABEL: &str = "block text-sm font-medium text-gray-700 mb-1";
