//! Static farming knowledge tables.
//!
//! Everything here is defined once at compile time and borrowed for the
//! lifetime of the process. Adding a chat topic or a crop profile is a data
//! change in this crate, not a code change elsewhere.

mod crops;
mod diseases;
mod topics;

pub use crops::{
	CROP_PROFILES, CropProfile, FERTILIZER_PLANS, NUTRIENT_PREFERENCES, NutrientPreference,
	PEST_CONTROLS, WATER_REQUIREMENTS, crop_profile, fertilizer_plan, nutrient_preference,
	water_requirement,
};
pub use diseases::{
	DISEASE_PROFILES, DiseaseProfile, PESTICIDE_DETAILS, PESTICIDE_NOTES, PesticideDetails,
	disease_profile, pesticide_details,
};
pub use topics::{
	GENERAL_RESPONSES, GREETING_KEYWORDS, GREETING_RESPONSES, THANKS_KEYWORDS, THANKS_RESPONSES,
	TOPICS, Topic,
};

/// Names of every crop the recommendation tables know about, in scoring order.
pub fn crop_names() -> impl Iterator<Item = &'static str> {
	CROP_PROFILES.iter().map(|profile| profile.name)
}
