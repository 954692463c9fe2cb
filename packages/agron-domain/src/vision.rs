//! Leaf image decoding, tensor preprocessing, and the color-heuristic
//! fallback classifier.

use image::{RgbImage, imageops, imageops::FilterType};

use crate::error::Result;

/// Input side length expected by the disease classifier.
pub const IMAGE_SIDE: u32 = 224;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

pub fn load_leaf_image(bytes: &[u8]) -> Result<RgbImage> {
	Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Resizes to 224x224 and produces a CHW tensor normalized with the ImageNet
/// channel statistics, matching how the classifier was trained.
pub fn preprocess(image: &RgbImage) -> Vec<f32> {
	let resized = imageops::resize(image, IMAGE_SIDE, IMAGE_SIDE, FilterType::Triangle);
	let pixels = (IMAGE_SIDE * IMAGE_SIDE) as usize;
	let mut tensor = vec![0.; 3 * pixels];

	for (index, pixel) in resized.pixels().enumerate() {
		for channel in 0..3 {
			tensor[channel * pixels + index] =
				(pixel.0[channel] as f32 / 255. - IMAGENET_MEAN[channel]) / IMAGENET_STD[channel];
		}
	}

	tensor
}

/// Scores the four known classes from leaf color composition alone. This is
/// the fallback when no vision provider is configured or reachable; the mask
/// ranges and score sets are calibrated constants.
pub fn heuristic_scores(image: &RgbImage) -> Vec<(&'static str, f32)> {
	let pixels = image.pixels().count().max(1) as f32;
	let mut green = 0_u32;
	let mut white = 0_u32;
	let mut brown = 0_u32;
	let mut dark_brown = 0_u32;

	for pixel in image.pixels() {
		let [r, g, b] = pixel.0;
		let (h, s, v) = hsv(r, g, b);

		if (35. ..=85.).contains(&h) && s >= 40. && v >= 40. {
			green += 1;
		}
		if s <= 30. && v >= 200. {
			white += 1;
		}
		if (10. ..=20.).contains(&h) && s >= 100. && (20. ..=200.).contains(&v) {
			brown += 1;
		}
		if h <= 20. && s >= 50. && v <= 100. {
			dark_brown += 1;
		}
	}

	let green_ratio = green as f32 / pixels;
	let white_ratio = white as f32 / pixels;
	let brown_ratio = brown as f32 / pixels;
	let dark_brown_ratio = dark_brown as f32 / pixels;
	let [black_rot, scab, powdery, healthy] = if green_ratio > 0.6
		&& white_ratio < 0.05
		&& brown_ratio < 0.05
		&& dark_brown_ratio < 0.05
	{
		[2., 3., 10., 85.]
	} else if white_ratio > 0.15 {
		[5., 15., 75., 5.]
	} else if dark_brown_ratio > 0.1 {
		[75., 15., 5., 5.]
	} else if brown_ratio > 0.1 {
		[10., 75., 5., 10.]
	} else {
		[10., 20., 10., 60.]
	};

	vec![
		("Apple Black Rot", black_rot),
		("Apple Scab", scab),
		("Powdery Mildew", powdery),
		("Healthy", healthy),
	]
}

/// Normalizes raw model labels such as `Apple___Black_rot` to the display
/// names the treatment tables use.
pub fn format_class_name(raw: &str) -> String {
	let cleaned = raw.replace(['_', '-'], " ");
	let lowered = cleaned.to_lowercase();

	if lowered.contains("black rot") {
		return "Apple Black Rot".into();
	}
	if lowered.contains("scab") {
		return "Apple Scab".into();
	}
	if lowered.contains("powdery mildew") {
		return "Powdery Mildew".into();
	}
	if lowered.contains("healthy") {
		return "Healthy".into();
	}

	cleaned
		.split_whitespace()
		.map(|word| {
			let mut chars = word.chars();

			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

// OpenCV-style HSV: hue in 0..=180, saturation and value in 0..=255.
fn hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
	let (r, g, b) = (r as f32, g as f32, b as f32);
	let max = r.max(g).max(b);
	let min = r.min(g).min(b);
	let delta = max - min;
	let saturation = if max == 0. { 0. } else { delta / max * 255. };
	let hue = if delta == 0. {
		0.
	} else if max == r {
		60. * (g - b) / delta
	} else if max == g {
		60. * (2. + (b - r) / delta)
	} else {
		60. * (4. + (r - g) / delta)
	};
	let hue = if hue < 0. { hue + 360. } else { hue };

	(hue / 2., saturation, max)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn solid(r: u8, g: u8, b: u8) -> RgbImage {
		RgbImage::from_pixel(32, 32, image::Rgb([r, g, b]))
	}

	fn top(scores: &[(&'static str, f32)]) -> &'static str {
		scores.iter().fold(&scores[0], |best, item| if item.1 > best.1 { item } else { best }).0
	}

	#[test]
	fn green_leaves_score_healthy() {
		assert_eq!(top(&heuristic_scores(&solid(50, 150, 50))), "Healthy");
	}

	#[test]
	fn white_coating_scores_powdery_mildew() {
		assert_eq!(top(&heuristic_scores(&solid(250, 250, 250))), "Powdery Mildew");
	}

	#[test]
	fn dark_lesions_score_black_rot() {
		assert_eq!(top(&heuristic_scores(&solid(80, 40, 20))), "Apple Black Rot");
	}

	#[test]
	fn tensor_shape_and_normalization() {
		let tensor = preprocess(&solid(124, 116, 104));

		assert_eq!(tensor.len(), 3 * 224 * 224);
		// 124/255 etc. sit close to the ImageNet means, so values are near zero.
		assert!(tensor.iter().all(|value| value.abs() < 0.1));
	}

	#[test]
	fn class_names_normalize_to_display_form() {
		assert_eq!(format_class_name("Apple___Black_rot"), "Apple Black Rot");
		assert_eq!(format_class_name("apple_scab"), "Apple Scab");
		assert_eq!(format_class_name("healthy"), "Healthy");
		assert_eq!(format_class_name("cedar_rust"), "Cedar Rust");
	}
}
