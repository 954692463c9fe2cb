//! Pure domain logic: keyword matching, parameter extraction, rule-based
//! crop scoring, and image preprocessing.
//!
//! Nothing in this crate performs I/O or talks to a provider. Every function
//! is deterministic given its inputs, which keeps the whole layer testable
//! without fixtures.

mod error;
mod matcher;
mod params;
mod scoring;
mod vision;

pub use error::{Error, Result};
pub use image::RgbImage;
pub use matcher::{CropMention, classify, find_crop_mention, is_greeting, is_thanks};
pub use params::ExtractedParams;
pub use scoring::{FeatureVector, rule_based_scores};
pub use vision::{
	IMAGE_SIDE, format_class_name, heuristic_scores, load_leaf_image, preprocess,
};
