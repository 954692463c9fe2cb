/// One crop the recommendation tables can suggest, with its display blurb.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct CropProfile {
	pub name: &'static str,
	pub info: &'static str,
}

/// Preferred soil/climate ranges for a crop, used for entity-specific chat
/// answers. Ranges are (low, high) in the units the predictor consumes.
#[derive(Clone, Copy, Debug)]
pub struct NutrientPreference {
	pub crop: &'static str,
	pub nitrogen: (f64, f64),
	pub phosphorus: (f64, f64),
	pub potassium: (f64, f64),
	pub ph: (f64, f64),
	pub rainfall: (f64, f64),
	pub temperature: (f64, f64),
}

pub fn crop_profile(name: &str) -> Option<&'static CropProfile> {
	CROP_PROFILES.iter().find(|profile| profile.name == name)
}

pub fn nutrient_preference(crop: &str) -> Option<&'static NutrientPreference> {
	NUTRIENT_PREFERENCES.iter().find(|pref| pref.crop == crop)
}

pub fn fertilizer_plan(crop: &str) -> Option<&'static str> {
	FERTILIZER_PLANS.iter().find(|(name, _)| *name == crop).map(|(_, plan)| *plan)
}

pub fn water_requirement(crop: &str) -> Option<&'static str> {
	WATER_REQUIREMENTS.iter().find(|(name, _)| *name == crop).map(|(_, req)| *req)
}

/// The 22 crops of the recommendation dataset. Declaration order doubles as
/// the stable tie-break order for rule-based scoring.
pub const CROP_PROFILES: &[CropProfile] = &[
	CropProfile {
		name: "rice",
		info: "Rice grows best in warm, humid climates with temperatures between 20-35C. Requires flooded fields or heavy rainfall (150-300 cm annually). Suitable for clayey or loamy soil with pH 5.5-7.0. Growing season: 3-6 months.",
	},
	CropProfile {
		name: "maize",
		info: "Maize thrives in moderate temperatures (18-27C) with well-distributed rainfall (50-75 cm). Prefers well-drained loamy soil with pH 5.5-7.5. Rich in nitrogen and phosphorus requirements. Growing season: 3-5 months.",
	},
	CropProfile {
		name: "chickpea",
		info: "Chickpea is a cool-season crop preferring temperatures 20-30C. Requires low to moderate rainfall (40-60 cm). Grows well in sandy loam to clayey loam soil with pH 6.0-7.5. Drought-tolerant. Growing season: 3-5 months.",
	},
	CropProfile {
		name: "kidneybeans",
		info: "Kidney beans prefer warm temperatures (18-24C) and moderate rainfall (60-120 cm). Thrives in well-drained loamy soil with pH 6.0-7.0. Requires good nitrogen fixation. Growing season: 2-4 months.",
	},
	CropProfile {
		name: "pigeonpeas",
		info: "Pigeon peas are drought-resistant, growing in temperatures 20-35C. Requires low rainfall (60-100 cm). Adapts to various soils but prefers well-drained sandy loam with pH 5.5-7.5. Growing season: 4-5 months.",
	},
	CropProfile {
		name: "mothbeans",
		info: "Moth beans are extremely drought-resistant, suitable for arid climates with temperatures 25-35C. Minimal rainfall required (30-60 cm). Grows in sandy to sandy loam soil with pH 7.0-8.5. Growing season: 2-3 months.",
	},
	CropProfile {
		name: "mungbean",
		info: "Mung beans prefer warm temperatures (25-35C) with moderate rainfall (60-100 cm). Requires well-drained loamy soil with pH 6.2-7.2. Short-duration crop. Growing season: 2-3 months.",
	},
	CropProfile {
		name: "blackgram",
		info: "Black gram grows best in warm temperatures (25-35C) with moderate rainfall (60-100 cm). Prefers loamy to clayey soil with pH 6.5-7.5. Good nitrogen fixer. Growing season: 2-3 months.",
	},
	CropProfile {
		name: "lentil",
		info: "Lentil is a cool-season crop preferring temperatures 18-25C. Requires low to moderate rainfall (40-60 cm). Grows in well-drained loamy soil with pH 6.0-7.5. Drought-tolerant. Growing season: 3-5 months.",
	},
	CropProfile {
		name: "pomegranate",
		info: "Pomegranate thrives in hot, dry climates with temperatures 30-40C. Drought-resistant, requires low rainfall (50-75 cm). Adapts to various soils but prefers deep loamy soil with pH 6.5-7.5. Perennial crop.",
	},
	CropProfile {
		name: "banana",
		info: "Banana requires warm, humid tropical climate with temperatures 25-35C. Needs heavy rainfall (200-250 cm annually). Thrives in deep, well-drained loamy soil rich in organic matter with pH 6.0-7.5. Year-round production.",
	},
	CropProfile {
		name: "mango",
		info: "Mango grows in tropical and subtropical climates with temperatures 24-30C. Requires moderate rainfall (75-200 cm) with dry flowering season. Prefers well-drained sandy loam to clay loam with pH 5.5-7.5. Perennial fruit tree.",
	},
	CropProfile {
		name: "grapes",
		info: "Grapes thrive in warm temperate to subtropical climates with temperatures 15-30C. Requires moderate rainfall (50-100 cm) with dry harvest season. Prefers well-drained sandy loam soil with pH 6.0-7.0. Perennial vine crop.",
	},
	CropProfile {
		name: "watermelon",
		info: "Watermelon grows best in warm temperatures (24-30C) with moderate rainfall (50-75 cm). Requires well-drained sandy loam soil rich in organic matter with pH 6.0-7.0. Growing season: 2-3 months.",
	},
	CropProfile {
		name: "muskmelon",
		info: "Muskmelon prefers warm temperatures (25-30C) with moderate rainfall (40-60 cm). Thrives in well-drained sandy loam soil with good organic content and pH 6.0-7.0. Growing season: 2-3 months.",
	},
	CropProfile {
		name: "apple",
		info: "Apple requires cool temperate climate with winter chilling (800-1200 hours below 7C). Prefers temperatures 20-24C during growing season with moderate rainfall (100-125 cm). Best in well-drained loamy soil with pH 5.5-7.0. Perennial tree.",
	},
	CropProfile {
		name: "orange",
		info: "Orange thrives in subtropical to tropical climate with temperatures 25-35C. Requires moderate to high rainfall (100-200 cm). Prefers well-drained sandy loam to clay loam with pH 6.0-7.5. Perennial citrus tree.",
	},
	CropProfile {
		name: "papaya",
		info: "Papaya grows in tropical climate with temperatures 25-35C year-round. Requires well-distributed rainfall (150-250 cm). Prefers well-drained loamy soil rich in organic matter with pH 6.0-7.0. Fast-growing, produces within 6-12 months.",
	},
	CropProfile {
		name: "coconut",
		info: "Coconut palm thrives in tropical coastal regions with temperatures 27-32C. Requires high rainfall (150-250 cm) or irrigation. Grows in sandy to loamy soil with pH 5.5-8.0. Very long-lived perennial, salt-tolerant.",
	},
	CropProfile {
		name: "cotton",
		info: "Cotton requires warm climate with temperatures 21-30C and plenty of sunshine. Needs moderate rainfall (50-100 cm) with dry harvest period. Thrives in deep, well-drained clayey loam soil with pH 6.0-7.5. Growing season: 5-6 months.",
	},
	CropProfile {
		name: "jute",
		info: "Jute grows in warm, humid climate with temperatures 24-35C. Requires heavy rainfall (150-250 cm) during growing season. Best in fertile alluvial soil with pH 6.0-7.5. Growing season: 4-5 months.",
	},
	CropProfile {
		name: "coffee",
		info: "Coffee grows in tropical highlands with temperatures 15-24C. Requires well-distributed rainfall (150-250 cm). Prefers well-drained volcanic or loamy soil rich in organic matter with pH 6.0-6.5. Shade-loving perennial shrub.",
	},
];

pub const NUTRIENT_PREFERENCES: &[NutrientPreference] = &[
	NutrientPreference {
		crop: "rice",
		nitrogen: (50.0, 120.0),
		phosphorus: (20.0, 60.0),
		potassium: (30.0, 100.0),
		ph: (5.5, 7.0),
		rainfall: (150.0, 300.0),
		temperature: (20.0, 35.0),
	},
	NutrientPreference {
		crop: "maize",
		nitrogen: (60.0, 120.0),
		phosphorus: (25.0, 70.0),
		potassium: (40.0, 120.0),
		ph: (5.5, 7.5),
		rainfall: (50.0, 75.0),
		temperature: (18.0, 27.0),
	},
	NutrientPreference {
		crop: "apple",
		nitrogen: (50.0, 100.0),
		phosphorus: (30.0, 70.0),
		potassium: (50.0, 120.0),
		ph: (5.5, 7.0),
		rainfall: (100.0, 125.0),
		temperature: (20.0, 24.0),
	},
	NutrientPreference {
		crop: "banana",
		nitrogen: (80.0, 150.0),
		phosphorus: (30.0, 80.0),
		potassium: (100.0, 200.0),
		ph: (6.0, 7.5),
		rainfall: (200.0, 250.0),
		temperature: (25.0, 35.0),
	},
	NutrientPreference {
		crop: "mango",
		nitrogen: (50.0, 100.0),
		phosphorus: (20.0, 60.0),
		potassium: (50.0, 120.0),
		ph: (5.5, 7.5),
		rainfall: (75.0, 200.0),
		temperature: (24.0, 30.0),
	},
	NutrientPreference {
		crop: "grapes",
		nitrogen: (40.0, 80.0),
		phosphorus: (25.0, 60.0),
		potassium: (60.0, 150.0),
		ph: (6.0, 7.0),
		rainfall: (50.0, 100.0),
		temperature: (15.0, 30.0),
	},
	NutrientPreference {
		crop: "cotton",
		nitrogen: (60.0, 120.0),
		phosphorus: (25.0, 70.0),
		potassium: (40.0, 100.0),
		ph: (6.0, 7.5),
		rainfall: (50.0, 100.0),
		temperature: (21.0, 30.0),
	},
	NutrientPreference {
		crop: "jute",
		nitrogen: (40.0, 100.0),
		phosphorus: (20.0, 60.0),
		potassium: (30.0, 80.0),
		ph: (6.0, 7.5),
		rainfall: (150.0, 250.0),
		temperature: (24.0, 35.0),
	},
	NutrientPreference {
		crop: "coffee",
		nitrogen: (40.0, 80.0),
		phosphorus: (20.0, 50.0),
		potassium: (50.0, 120.0),
		ph: (6.0, 6.5),
		rainfall: (150.0, 250.0),
		temperature: (15.0, 24.0),
	},
	NutrientPreference {
		crop: "chickpea",
		nitrogen: (20.0, 50.0),
		phosphorus: (15.0, 40.0),
		potassium: (20.0, 60.0),
		ph: (6.0, 7.5),
		rainfall: (40.0, 60.0),
		temperature: (20.0, 30.0),
	},
	NutrientPreference {
		crop: "lentil",
		nitrogen: (20.0, 50.0),
		phosphorus: (15.0, 40.0),
		potassium: (20.0, 60.0),
		ph: (6.0, 7.5),
		rainfall: (40.0, 60.0),
		temperature: (18.0, 25.0),
	},
];

pub const FERTILIZER_PLANS: &[(&str, &str)] = &[
	(
		"rice",
		"Apply 120-150 kg N/ha, 60-80 kg P2O5/ha, 60-80 kg K2O/ha. Use split application: 50% basal, 25% at tillering, 25% at panicle initiation. Urea (46% N) is commonly used.",
	),
	(
		"maize",
		"Apply 120-180 kg N/ha, 60-80 kg P2O5/ha, 80-120 kg K2O/ha. Use balanced NPK (10-26-26) as basal, urea top-dressing at knee-high stage.",
	),
	(
		"apple",
		"Apply 80-120 kg N/ha, 40-60 kg P2O5/ha, 100-150 kg K2O/ha annually. Split into 3 applications: spring (40%), after harvest (30%), pre-winter (30%).",
	),
	(
		"banana",
		"Apply 200-250 kg N/ha, 60-80 kg P2O5/ha, 300-400 kg K2O/ha. High potassium requirement. Apply monthly during active growth.",
	),
	(
		"mango",
		"Apply 100-150 kg N/ha, 50-75 kg P2O5/ha, 100-150 kg K2O/ha. Apply in split doses: before flowering, after fruit set, post-harvest.",
	),
	(
		"grapes",
		"Apply 60-100 kg N/ha, 40-60 kg P2O5/ha, 150-200 kg K2O/ha. High potassium for fruit quality. Apply pre-bloom and during fruit development.",
	),
	(
		"cotton",
		"Apply 80-120 kg N/ha, 40-60 kg P2O5/ha, 40-60 kg K2O/ha. Split application: 50% basal, 25% at squaring, 25% at flowering.",
	),
];

pub const WATER_REQUIREMENTS: &[(&str, &str)] = &[
	("rice", "1200-1500 mm/season. Requires flooded conditions. 150-200 mm/week during active growth."),
	(
		"maize",
		"500-800 mm/season. Critical periods: germination, tasseling, grain filling. Drip irrigation recommended.",
	),
	(
		"apple",
		"700-1000 mm/year. Requires consistent moisture. Drip irrigation at 40-80 liters/tree/day in summer.",
	),
	("banana", "1500-2500 mm/year. High water requirement. Needs daily irrigation in hot months."),
	(
		"cotton",
		"700-1300 mm/season. Deep watering preferred. Critical at flowering and boll development.",
	),
];

pub const PEST_CONTROLS: &[(&str, &str)] = &[
	(
		"aphids",
		"Natural: Neem oil spray, introduce ladybugs. Chemical: Imidacloprid, Thiamethoxam. Spray early morning.",
	),
	(
		"whiteflies",
		"Natural: Yellow sticky traps, neem oil. Chemical: Spiromesifen, Pyriproxyfen. Target underside of leaves.",
	),
	(
		"caterpillars",
		"Natural: Bt (Bacillus thuringiensis), handpicking. Chemical: Chlorantraniliprole. Apply at egg hatch stage.",
	),
	(
		"fruit flies",
		"Natural: Pheromone traps, protein bait. Chemical: Spinosad. Sanitation is key - remove fallen fruit.",
	),
	(
		"termites",
		"Natural: Neem cake in soil. Chemical: Chlorpyrifos, Imidacloprid as soil drench. Prevent by avoiding organic mulch near stems.",
	),
];
