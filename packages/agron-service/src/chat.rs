use rand::seq::SliceRandom;

use agron_domain::{CropMention, ExtractedParams, classify, find_crop_mention, is_greeting,
	is_thanks, rule_based_scores};
use agron_knowledge::{
	GENERAL_RESPONSES, GREETING_RESPONSES, NutrientPreference, PEST_CONTROLS, PESTICIDE_NOTES,
	THANKS_RESPONSES, crop_names, crop_profile, fertilizer_plan, nutrient_preference,
	water_requirement,
};
use agron_storage::{models::NewChatQuery, queries};

use crate::{AgronService, ChatMode, ServiceError, ServiceResult};

const SYSTEM_PROMPT: &str = "You are an expert farming assistant. Answer questions about crops, \
	soil, irrigation, fertilizers, pests, and plant diseases with practical, concise advice for \
	smallholder farmers.";

/// Enough numeric soil values to answer with a crop recommendation instead of
/// a canned topic response.
const MIN_PARAMS_FOR_RECOMMENDATION: usize = 4;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatRequest {
	pub message: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ChatResponse {
	pub reply: String,
	pub chatbot_type: String,
}

impl AgronService {
	pub async fn chat(&self, req: ChatRequest) -> ServiceResult<ChatResponse> {
		let message = req.message.trim();

		if message.is_empty() {
			return Err(ServiceError::invalid("message must be non-empty.", &["message"]));
		}

		let (reply, chatbot_type) = match (self.mode, self.cfg.providers.llm_chat.as_ref()) {
			(ChatMode::Online, Some(cfg)) => {
				let messages = [
					serde_json::json!({ "role": "system", "content": SYSTEM_PROMPT }),
					serde_json::json!({ "role": "user", "content": message }),
				];

				match self.providers.chat.send(cfg, &messages).await {
					Ok(reply) => (reply, "online"),
					Err(err) => {
						tracing::warn!("Chat provider unavailable, answering offline: {err}.");

						let reply = format!(
							"I couldn't reach the online assistant, so here is my best offline answer. {}",
							offline_reply(message)
						);

						(reply, "offline")
					},
				}
			},
			_ => (offline_reply(message), "offline"),
		};
		let record = NewChatQuery { question: message, answer: &reply, chatbot_type };

		if let Err(err) = queries::insert_chat_query(&self.db, &record).await {
			tracing::warn!("Failed to record chat query: {err}.");
		}

		Ok(ChatResponse { reply, chatbot_type: chatbot_type.to_string() })
	}
}

/// The rule-based responder. Checked in priority order: social phrases,
/// numeric soil values, named pesticides and pests, crop-specific questions,
/// then the general topic pools.
pub fn offline_reply(message: &str) -> String {
	let mut rng = rand::thread_rng();

	if is_greeting(message) {
		return pick(GREETING_RESPONSES, &mut rng);
	}
	if is_thanks(message) {
		return pick(THANKS_RESPONSES, &mut rng);
	}

	let params = ExtractedParams::parse(message);

	if params.provided() >= MIN_PARAMS_FOR_RECOMMENDATION {
		return inline_recommendation(&params);
	}

	let lowered = message.to_lowercase();

	if let Some((_, note)) =
		PESTICIDE_NOTES.iter().find(|(name, _)| lowered.contains(name))
	{
		return note.to_string();
	}
	if let Some((_, advice)) =
		PEST_CONTROLS.iter().find(|(name, _)| lowered.contains(name.trim_end_matches('s')))
	{
		return advice.to_string();
	}

	let topic = classify(message);

	if let Some(mention) = find_crop_mention(message) {
		match mention {
			CropMention::Known(crop) => {
				let topic_id = topic.map(|topic| topic.id);

				if topic_id == Some("fertilizer")
					&& let Some(plan) = fertilizer_plan(crop)
				{
					return plan.to_string();
				}
				if topic_id == Some("water")
					&& let Some(requirement) = water_requirement(crop)
				{
					return requirement.to_string();
				}
				if let Some(profile) = crop_profile(crop) {
					let mut reply = profile.info.to_string();

					if let Some(prefs) = nutrient_preference(crop) {
						reply.push_str(&optimal_conditions(prefs));
					}

					return reply;
				}
			},
			CropMention::Unknown(name) => {
				let known = crop_names().collect::<Vec<_>>().join(", ");

				return format!(
					"I don't have detailed information about {name} yet. I can help with these crops: {known}."
				);
			},
		}
	}

	match topic {
		Some(topic) => pick(topic.responses, &mut rng),
		None => pick(GENERAL_RESPONSES, &mut rng),
	}
}

fn inline_recommendation(params: &ExtractedParams) -> String {
	let mut scores = rule_based_scores(&params.with_chat_defaults());

	scores.sort_by(|a, b| b.1.total_cmp(&a.1));
	scores.truncate(3);

	let listing = scores
		.iter()
		.enumerate()
		.map(|(index, (crop, score))| format!("{}. {crop} ({score:.0}% match)", index + 1))
		.collect::<Vec<_>>()
		.join(", ");

	format!(
		"Based on the values you shared, here are my top crop suggestions: {listing}. Ask about any of these crops for growing details."
	)
}

fn pick(pool: &[&str], rng: &mut impl rand::Rng) -> String {
	pool.choose(rng).copied().unwrap_or_default().to_string()
}

fn optimal_conditions(prefs: &NutrientPreference) -> String {
	format!(
		" Optimal soil conditions: nitrogen {}-{} kg/ha, phosphorus {}-{} kg/ha, potassium {}-{} kg/ha, pH {}-{}, rainfall {}-{} cm/year, temperature {}-{}C.",
		prefs.nitrogen.0,
		prefs.nitrogen.1,
		prefs.phosphorus.0,
		prefs.phosphorus.1,
		prefs.potassium.0,
		prefs.potassium.1,
		prefs.ph.0,
		prefs.ph.1,
		prefs.rainfall.0,
		prefs.rainfall.1,
		prefs.temperature.0,
		prefs.temperature.1,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn greeting_gets_a_greeting_reply() {
		let reply = offline_reply("Hello there");

		assert!(GREETING_RESPONSES.contains(&reply.as_str()));
	}

	#[test]
	fn thanks_gets_a_thanks_reply() {
		let reply = offline_reply("thanks, that was helpful");

		assert!(THANKS_RESPONSES.contains(&reply.as_str()));
	}

	#[test]
	fn numeric_values_trigger_an_inline_recommendation() {
		let reply = offline_reply("N=90 P=42 K=43 humidity 82 rainfall 203");

		assert!(reply.contains("top crop suggestions"));
		assert!(reply.contains("rice"));
	}

	#[test]
	fn fertilizer_question_about_a_crop_gets_its_plan() {
		let reply = offline_reply("what fertilizer should I use for rice?");

		assert_eq!(reply, fertilizer_plan("rice").unwrap());
	}

	#[test]
	fn growing_question_includes_optimal_conditions() {
		let reply = offline_reply("how do I grow rice?");

		assert!(reply.contains("Optimal soil conditions"));
		assert!(reply.contains("nitrogen 50-120 kg/ha"));
		assert!(reply.contains("pH 5.5-7"));
	}

	#[test]
	fn unlisted_crop_lists_the_known_ones() {
		let reply = offline_reply("how do I grow wheat?");

		assert!(reply.contains("wheat"));
		assert!(reply.contains("rice"));
	}

	#[test]
	fn pesticide_names_get_their_notes() {
		let reply = offline_reply("how much mancozeb should I spray?");

		assert!(reply.contains("Mancozeb"));
	}

	#[test]
	fn unmatched_messages_fall_back_to_the_general_pool() {
		let reply = offline_reply("tell me a joke");

		assert!(GENERAL_RESPONSES.contains(&reply.as_str()));
	}
}
