//! Keyword-driven intent and entity matching for the offline chatbot.

use agron_knowledge::{GREETING_KEYWORDS, THANKS_KEYWORDS, TOPICS, Topic, crop_names};

/// A crop named in free text. `Unknown` means the word reads like a crop but
/// the recommendation tables have no entry for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropMention {
	Known(&'static str),
	Unknown(&'static str),
}

/// Spelled-out and colloquial forms mapped to table names.
const CROP_ALIASES: &[(&str, &str)] = &[
	("corn", "maize"),
	("kidney bean", "kidneybeans"),
	("pigeon pea", "pigeonpeas"),
	("moth bean", "mothbeans"),
	("mung bean", "mungbean"),
	("black gram", "blackgram"),
	("water melon", "watermelon"),
	("musk melon", "muskmelon"),
];

/// Crops people ask about that the dataset does not cover.
const UNLISTED_CROPS: &[&str] = &["wheat", "potato", "tomato", "sugarcane", "barley", "onion"];

/// Picks the topic whose keywords appear most often in `text`. Ties keep the
/// earlier topic; zero hits yield `None`.
pub fn classify(text: &str) -> Option<&'static Topic> {
	let lowered = text.to_lowercase();
	let mut best: Option<(&'static Topic, usize)> = None;

	for topic in TOPICS {
		let hits = topic.keywords.iter().filter(|keyword| lowered.contains(*keyword)).count();

		if hits == 0 {
			continue;
		}
		if best.is_none_or(|(_, best_hits)| hits > best_hits) {
			best = Some((topic, hits));
		}
	}

	best.map(|(topic, _)| topic)
}

/// Greetings only count when they open the message, so "hi" triggers but
/// "this soil" does not.
pub fn is_greeting(text: &str) -> bool {
	let lowered = text.trim().to_lowercase();

	GREETING_KEYWORDS
		.iter()
		.any(|keyword| lowered.starts_with(keyword) || lowered == keyword.trim_end())
}

pub fn is_thanks(text: &str) -> bool {
	let lowered = text.to_lowercase();

	THANKS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Scans `text` for a crop name, checking table names first, then aliases,
/// then crops the tables deliberately omit.
pub fn find_crop_mention(text: &str) -> Option<CropMention> {
	let lowered = text.to_lowercase();

	if let Some(name) = crop_names().find(|name| lowered.contains(name)) {
		return Some(CropMention::Known(name));
	}
	if let Some(&(_, canonical)) =
		CROP_ALIASES.iter().find(|(alias, _)| lowered.contains(alias))
	{
		return Some(CropMention::Known(canonical));
	}

	UNLISTED_CROPS
		.iter()
		.find(|name| lowered.contains(*name))
		.map(|name| CropMention::Unknown(*name))
}
