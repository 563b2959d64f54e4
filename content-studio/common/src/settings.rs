use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
pub enum Cuisine {
	#[default]
	#[serde(rename = "Italienisch")]
	#[strum(serialize = "Italienisch")]
	Italian,
	#[serde(rename = "Deutsch")]
	#[strum(serialize = "Deutsch")]
	German,
	#[serde(rename = "Französisch")]
	#[strum(serialize = "Französisch")]
	French,
	#[serde(rename = "Asiatisch")]
	#[strum(serialize = "Asiatisch")]
	Asian,
	#[serde(rename = "International")]
	#[strum(serialize = "International")]
	International,
}

/// Output language of the generated text. The wire value is the lowercase english name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
	#[default]
	German,
	English,
}

impl Language {
	pub fn label(self) -> &'static str {
		match self {
			Self::German => "Deutsch",
			Self::English => "English",
		}
	}
}

/// The restaurant profile every request is derived from.
///
/// Updates never mutate in place: each `with_*` returns a new value where exactly one
/// field differs. Empty strings are legal and forwarded unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub name: String,
	pub cuisine: Cuisine,
	pub special_dish: String,
	pub language: Language,
}

impl Default for Settings {
	fn default() -> Self {
		Self { name: "Bella Vista".to_owned(), cuisine: Cuisine::Italian, special_dish: "Pasta Carbonara".to_owned(), language: Language::German }
	}
}

/// A single field change coming from one of the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
	Name(String),
	Cuisine(Cuisine),
	SpecialDish(String),
	Language(Language),
}

impl Settings {
	#[must_use]
	pub fn with_name(&self, name: impl Into<String>) -> Self {
		Self { name: name.into(), ..self.clone() }
	}

	#[must_use]
	pub fn with_cuisine(&self, cuisine: Cuisine) -> Self {
		Self { cuisine, ..self.clone() }
	}

	#[must_use]
	pub fn with_special_dish(&self, special_dish: impl Into<String>) -> Self {
		Self { special_dish: special_dish.into(), ..self.clone() }
	}

	#[must_use]
	pub fn with_language(&self, language: Language) -> Self {
		Self { language, ..self.clone() }
	}

	#[must_use]
	pub fn apply(&self, edit: SettingsEdit) -> Self {
		match edit {
			SettingsEdit::Name(name) => self.with_name(name),
			SettingsEdit::Cuisine(cuisine) => self.with_cuisine(cuisine),
			SettingsEdit::SpecialDish(dish) => self.with_special_dish(dish),
			SettingsEdit::Language(language) => self.with_language(language),
		}
	}
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Input of the review-response tab.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
	pub review_text: String,
	pub rating: u8,
}

impl Default for ReviewDraft {
	fn default() -> Self {
		Self { review_text: String::new(), rating: MAX_RATING }
	}
}

impl ReviewDraft {
	#[must_use]
	pub fn with_review_text(&self, review_text: impl Into<String>) -> Self {
		Self { review_text: review_text.into(), ..self.clone() }
	}

	#[must_use]
	pub fn with_rating(&self, rating: u8) -> Self {
		Self { rating: rating.clamp(MIN_RATING, MAX_RATING), ..self.clone() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	fn defaults_match_the_demo_restaurant() {
		let settings = Settings::default();
		assert_eq!(settings.name, "Bella Vista");
		assert_eq!(settings.cuisine, Cuisine::Italian);
		assert_eq!(settings.special_dish, "Pasta Carbonara");
		assert_eq!(settings.language, Language::German);
	}

	#[test]
	fn each_edit_touches_only_its_field() {
		let base = Settings::default();

		let renamed = base.apply(SettingsEdit::Name("Trattoria Roma".to_owned()));
		assert_eq!(renamed, Settings { name: "Trattoria Roma".to_owned(), ..base.clone() });

		let french = base.apply(SettingsEdit::Cuisine(Cuisine::French));
		assert_eq!(french, Settings { cuisine: Cuisine::French, ..base.clone() });

		let dish = base.apply(SettingsEdit::SpecialDish(String::new()));
		assert_eq!(dish, Settings { special_dish: String::new(), ..base.clone() });

		let english = base.apply(SettingsEdit::Language(Language::English));
		assert_eq!(english, Settings { language: Language::English, ..base.clone() });

		// the source value is never modified
		assert_eq!(base, Settings::default());
	}

	#[test]
	fn chained_edits_do_not_alias() {
		let settings = Settings::default().with_name("A").with_special_dish("B").with_name("C");
		assert_eq!(settings.name, "C");
		assert_eq!(settings.special_dish, "B");
	}

	#[test]
	fn cuisine_text_round_trips_through_the_select_value() {
		for cuisine in Cuisine::iter() {
			assert_eq!(cuisine.to_string().parse::<Cuisine>().unwrap(), cuisine);
			assert_eq!(serde_json::to_value(cuisine).unwrap(), serde_json::Value::String(cuisine.to_string()));
		}
		assert_eq!(Cuisine::French.as_ref(), "Französisch");
	}

	#[test]
	fn language_wire_values_are_lowercase() {
		assert_eq!(serde_json::to_value(Language::German).unwrap(), "german");
		assert_eq!(serde_json::to_value(Language::English).unwrap(), "english");
		assert_eq!("english".parse::<Language>().unwrap(), Language::English);
		assert_eq!(Language::German.label(), "Deutsch");
	}

	#[test]
	fn rating_is_clamped() {
		let draft = ReviewDraft::default();
		assert_eq!(draft.rating, 5);
		assert_eq!(draft.with_rating(0).rating, 1);
		assert_eq!(draft.with_rating(9).rating, 5);
		assert_eq!(draft.with_rating(3).with_review_text("ok"), ReviewDraft { review_text: "ok".to_owned(), rating: 3 });
	}
}
