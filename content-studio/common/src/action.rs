use crate::{Cuisine, Endpoint, Language, ReviewDraft, Settings};
use serde::Serialize;
use serde_json::{Map, Value};
use strum::EnumIter;

pub const SOCIAL_PLATFORM: &str = "facebook";
pub const SOCIAL_OCCASION: &str = "daily post";
pub const NEWSLETTER_EVENTS: [&str; 2] = ["Live-Musik am Freitag", "Neue Sommerkarte"];
pub const NEWSLETTER_SPECIALS: [&str; 2] = ["20% Rabatt auf Pasta", "Gratis Dessert"];
pub const MENU_INGREDIENTS: [&str; 5] = ["Pasta", "Speck", "Eier", "Parmesan", "Pfeffer"];
pub const MENU_PRICE: &str = "€14.90";

#[derive(Serialize, Debug)]
pub struct SocialMediaRequest<'a> {
	pub restaurant_name: &'a str,
	pub cuisine_type: Cuisine,
	pub special_dish: &'a str,
	pub platform: &'static str,
	pub occasion: &'static str,
	pub language: Language,
}

#[derive(Serialize, Debug)]
pub struct NewsletterRequest<'a> {
	pub restaurant_name: &'a str,
	pub cuisine_type: Cuisine,
	pub events: &'static [&'static str],
	pub specials: &'static [&'static str],
	pub language: Language,
}

#[derive(Serialize, Debug)]
pub struct MenuRequest<'a> {
	pub dish_name: &'a str,
	pub ingredients: &'static [&'static str],
	pub price: &'static str,
	pub cuisine_type: Cuisine,
	pub language: Language,
}

#[derive(Serialize, Debug)]
pub struct ReviewResponseRequest<'a> {
	pub review_text: &'a str,
	pub rating: u8,
	pub restaurant_name: &'a str,
	pub language: Language,
}

/// Which payload field of a success envelope holds the text to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ResultField {
	Content,
	Newsletter,
	Description,
	Response,
}

impl ResultField {
	pub fn key(self) -> &'static str {
		match self {
			Self::Content => "content",
			Self::Newsletter => "newsletter",
			Self::Description => "description",
			Self::Response => "response",
		}
	}

	/// Turns the payload into display text. The newsletter is structured and gets
	/// pretty-printed, an explicit `null` included; everything else is shown as sent.
	/// A missing field, or a `null` text field, yields "".
	pub fn render(self, payload: &Map<String, Value>) -> String {
		match (self, payload.get(self.key())) {
			(_, None) | (Self::Content | Self::Description | Self::Response, Some(Value::Null)) => String::new(),
			(_, Some(Value::String(text))) if self != Self::Newsletter => text.clone(),
			(Self::Newsletter, Some(value)) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
			(_, Some(value)) => value.to_string(),
		}
	}
}

/// The generate/optimize operations the view can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	SocialMedia,
	Newsletter,
	MenuOptimization,
	ReviewResponse(ReviewDraft),
}

impl Action {
	pub fn endpoint(&self) -> Endpoint {
		match self {
			Self::SocialMedia => Endpoint::SOCIAL_MEDIA,
			Self::Newsletter => Endpoint::NEWSLETTER,
			Self::MenuOptimization => Endpoint::OPTIMIZE_MENU,
			Self::ReviewResponse(_) => Endpoint::REVIEW_RESPONSE,
		}
	}

	pub fn result_field(&self) -> ResultField {
		match self {
			Self::SocialMedia => ResultField::Content,
			Self::Newsletter => ResultField::Newsletter,
			Self::MenuOptimization => ResultField::Description,
			Self::ReviewResponse(_) => ResultField::Response,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::SocialMedia => "social-media",
			Self::Newsletter => "newsletter",
			Self::MenuOptimization => "menu-optimization",
			Self::ReviewResponse(_) => "review-response",
		}
	}

	/// JSON body for the current settings plus the action's fixed values.
	pub fn request_body(&self, settings: &Settings) -> Result<Value, serde_json::Error> {
		match self {
			Self::SocialMedia => serde_json::to_value(SocialMediaRequest {
				restaurant_name: &settings.name,
				cuisine_type: settings.cuisine,
				special_dish: &settings.special_dish,
				platform: SOCIAL_PLATFORM,
				occasion: SOCIAL_OCCASION,
				language: settings.language,
			}),
			Self::Newsletter => serde_json::to_value(NewsletterRequest {
				restaurant_name: &settings.name,
				cuisine_type: settings.cuisine,
				events: &NEWSLETTER_EVENTS,
				specials: &NEWSLETTER_SPECIALS,
				language: settings.language,
			}),
			Self::MenuOptimization => serde_json::to_value(MenuRequest {
				dish_name: &settings.special_dish,
				ingredients: &MENU_INGREDIENTS,
				price: MENU_PRICE,
				cuisine_type: settings.cuisine,
				language: settings.language,
			}),
			Self::ReviewResponse(draft) => serde_json::to_value(ReviewResponseRequest {
				review_text: &draft.review_text,
				rating: draft.rating,
				restaurant_name: &settings.name,
				language: settings.language,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use strum::IntoEnumIterator;

	fn all_actions() -> Vec<Action> {
		vec![Action::SocialMedia, Action::Newsletter, Action::MenuOptimization, Action::ReviewResponse(ReviewDraft::default())]
	}

	#[test]
	fn social_media_body() {
		let body = Action::SocialMedia.request_body(&Settings::default()).unwrap();
		assert_eq!(
			body,
			json!({
				"restaurant_name": "Bella Vista",
				"cuisine_type": "Italienisch",
				"special_dish": "Pasta Carbonara",
				"platform": "facebook",
				"occasion": "daily post",
				"language": "german"
			})
		);
	}

	#[test]
	fn menu_body_uses_the_special_dish_as_dish_name() {
		let settings = Settings::default().with_special_dish("Tiramisu").with_cuisine(Cuisine::International);
		let body = Action::MenuOptimization.request_body(&settings).unwrap();
		assert_eq!(
			body,
			json!({
				"dish_name": "Tiramisu",
				"ingredients": ["Pasta", "Speck", "Eier", "Parmesan", "Pfeffer"],
				"price": "€14.90",
				"cuisine_type": "International",
				"language": "german"
			})
		);
	}

	#[test]
	fn newsletter_lists_are_fixed_whatever_the_settings() {
		let edited = Settings::default().with_name("").with_special_dish("Sushi").with_cuisine(Cuisine::Asian).with_language(Language::English);
		for settings in [Settings::default(), edited] {
			let body = Action::Newsletter.request_body(&settings).unwrap();
			assert_eq!(body["events"], json!(["Live-Musik am Freitag", "Neue Sommerkarte"]));
			assert_eq!(body["specials"], json!(["20% Rabatt auf Pasta", "Gratis Dessert"]));
			assert_eq!(body["restaurant_name"], json!(settings.name));
		}
	}

	#[test]
	fn language_is_forwarded_verbatim_by_every_action() {
		for language in Language::iter() {
			let settings = Settings::default().with_language(language);
			for action in all_actions() {
				let body = action.request_body(&settings).unwrap();
				assert_eq!(body["language"], json!(language.to_string()), "{}", action.name());
			}
		}
	}

	#[test]
	fn review_body_carries_the_draft() {
		let draft = ReviewDraft::default().with_review_text("Zu salzig").with_rating(2);
		let body = Action::ReviewResponse(draft).request_body(&Settings::default()).unwrap();
		assert_eq!(body, json!({ "review_text": "Zu salzig", "rating": 2, "restaurant_name": "Bella Vista", "language": "german" }));
	}

	#[test]
	fn newsletter_is_pretty_printed_with_two_spaces() {
		let payload = json!({ "newsletter": { "subject": "Hallo", "content": "Text" } });
		let text = ResultField::Newsletter.render(payload.as_object().unwrap());
		assert_eq!(text, "{\n  \"subject\": \"Hallo\",\n  \"content\": \"Text\"\n}");
	}

	#[test]
	fn text_fields_are_shown_raw_and_missing_fields_are_empty() {
		let payload = json!({ "content": "X", "description": 42, "response": null });
		let payload = payload.as_object().unwrap();
		assert_eq!(ResultField::Content.render(payload), "X");
		assert_eq!(ResultField::Description.render(payload), "42");
		assert_eq!(ResultField::Response.render(payload), "");
		assert_eq!(ResultField::Newsletter.render(payload), "");
	}

	#[test]
	fn null_newsletter_is_printed_as_json() {
		let payload = json!({ "newsletter": null, "content": null });
		let payload = payload.as_object().unwrap();
		assert_eq!(ResultField::Newsletter.render(payload), "null");
		assert_eq!(ResultField::Content.render(payload), "");
	}

	#[test]
	fn every_result_field_belongs_to_one_action() {
		let fields: Vec<_> = all_actions().iter().map(Action::result_field).collect();
		assert_eq!(fields, ResultField::iter().collect::<Vec<_>>());
	}
}
