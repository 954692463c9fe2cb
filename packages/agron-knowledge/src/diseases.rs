/// A leaf disease the vision classifier can report.
#[derive(Clone, Copy, Debug)]
pub struct DiseaseProfile {
	pub name: &'static str,
	pub description: &'static str,
	pub pesticide: &'static str,
}

/// Full treatment sheet for a recommended pesticide.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct PesticideDetails {
	pub name: &'static str,
	pub description: &'static str,
	pub usage: &'static str,
	pub precautions: &'static str,
}

pub fn disease_profile(name: &str) -> Option<&'static DiseaseProfile> {
	DISEASE_PROFILES.iter().find(|profile| profile.name == name)
}

pub fn pesticide_details(name: &str) -> Option<&'static PesticideDetails> {
	PESTICIDE_DETAILS.iter().find(|details| details.name == name)
}

pub const DISEASE_PROFILES: &[DiseaseProfile] = &[
	DiseaseProfile {
		name: "Apple Black Rot",
		description: "A serious fungal disease caused by Botryosphaeria obtusa that affects apple trees. Causes dark, sunken lesions on fruit, leaves, and branches. Can lead to fruit rot and tree damage.",
		pesticide: "Captan",
	},
	DiseaseProfile {
		name: "Apple Scab",
		description: "A serious fungal disease caused by Venturia inaequalis that affects apple trees. Causes dark, scabby lesions on leaves, fruit, and twigs. Most severe in cool, wet spring weather.",
		pesticide: "Mancozeb",
	},
	DiseaseProfile {
		name: "Powdery Mildew",
		description: "A fungal disease caused by Podosphaera leucotricha. Appears as white, powdery patches on leaves and shoots. Can stunt growth, cause leaf distortion, and impact fruit quality if left untreated.",
		pesticide: "Sulfur",
	},
	DiseaseProfile {
		name: "Healthy",
		description: "The leaf shows no signs of disease. The plant appears to be in good health with normal coloration and structure.",
		pesticide: "None",
	},
];

pub const PESTICIDE_DETAILS: &[PesticideDetails] = &[
	PesticideDetails {
		name: "Captan",
		description: "Protective fungicide effective against apple black rot",
		usage: "Apply 2-3 kg/ha of Captan mixed with water. Spray Captan at 7-10 day intervals, especially during warm, humid weather",
		precautions: "Wear protective equipment (gloves, goggles, long-sleeved clothing, and respirator). Do not apply during hot weather (above 30C). Observe 3-day pre-harvest interval. Store in a cool, dry place away from direct sunlight.",
	},
	PesticideDetails {
		name: "Mancozeb",
		description: "Broad-spectrum protective fungicide effective against apple scab",
		usage: "Apply 2-3 kg/ha of Mancozeb mixed with water. Spray Mancozeb at 10-14 day intervals during wet periods",
		precautions: "Wear protective equipment. Do not spray during flowering. Observe 7-day pre-harvest interval",
	},
	PesticideDetails {
		name: "Sulfur",
		description: "Organic fungicide effective against powdery mildew",
		usage: "Apply 3-5 kg/ha of Sulfur as dust or wettable powder. Spray Sulfur at 7-10 day intervals",
		precautions: "Do not apply when temperature exceeds 32C. Wear protective mask to avoid inhalation",
	},
	PesticideDetails {
		name: "None",
		description: "No pesticide treatment needed",
		usage: "Maintain good agricultural practices and monitor plant health regularly",
		precautions: "Continue regular inspection for early disease detection",
	},
];

/// Short pesticide blurbs the chatbot can quote when a pesticide is named.
pub const PESTICIDE_NOTES: &[(&str, &str)] = &[
	(
		"mancozeb",
		"Broad-spectrum protective fungicide. Apply 2-3 kg/ha of Mancozeb mixed with water. Spray Mancozeb at 10-14 day intervals for apple scab, rust, and leaf spots. Pre-harvest interval: 7-10 days.",
	),
	(
		"sulfur",
		"Organic fungicide for powdery mildew. Apply 3-5 kg/ha of Sulfur as dust or wettable powder. Spray Sulfur at 7-10 day intervals. Do not apply when temperature exceeds 32C.",
	),
	(
		"myclobutanil",
		"Systemic fungicide for severe powdery mildew and scab. Apply 200-300 ml/ha of Myclobutanil mixed with water. Maximum 3 applications/season. PHI: 14 days.",
	),
	(
		"captan",
		"Protective fungicide for apple black rot, apple scab, and fruit rots. Apply 2-3 kg/ha of Captan mixed with water. Spray Captan at 7-10 day intervals. Can be combined with other fungicides.",
	),
	(
		"copper",
		"Broad-spectrum bactericide and fungicide. Effective for bacterial blight. Apply during dormancy or early spring.",
	),
	(
		"neem oil",
		"Organic biopesticide for aphids, mites, and fungal diseases. Apply 3-5 ml/L. Safe for beneficial insects.",
	),
	(
		"pyrethrin",
		"Natural insecticide from chrysanthemum. Effective against aphids, whiteflies, caterpillars. Low toxicity.",
	),
];
