use std::str::FromStr;

use time::format_description::well_known::Rfc3339;

use agron_storage::{
	models::{ChatQueryRow, CropRecommendationRow, DiseaseDetectionRow, Statistics},
	queries,
};

use crate::{AgronService, ServiceError, ServiceResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryKind {
	Crops,
	Diseases,
	Chat,
}

impl FromStr for HistoryKind {
	type Err = ServiceError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw {
			"crops" => Ok(Self::Crops),
			"diseases" => Ok(Self::Diseases),
			"chat" => Ok(Self::Chat),
			_ => Err(ServiceError::invalid(
				"history kind must be one of crops, diseases, or chat.",
				&["kind"],
			)),
		}
	}
}

/// Newest-first rows of one history table.
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum HistoryList {
	Crops(Vec<CropRecommendationRow>),
	Diseases(Vec<DiseaseDetectionRow>),
	Chat(Vec<ChatQueryRow>),
}

impl AgronService {
	pub async fn history(
		&self,
		kind: HistoryKind,
		limit: Option<u32>,
	) -> ServiceResult<HistoryList> {
		let limit = match limit {
			Some(0) => {
				return Err(ServiceError::invalid("limit must be greater than zero.", &["limit"]));
			},
			Some(limit) => limit.min(self.cfg.history.export_limit),
			None => self.cfg.history.default_limit,
		};
		let list = match kind {
			HistoryKind::Crops =>
				HistoryList::Crops(queries::list_crop_recommendations(&self.db, limit).await?),
			HistoryKind::Diseases =>
				HistoryList::Diseases(queries::list_disease_detections(&self.db, limit).await?),
			HistoryKind::Chat =>
				HistoryList::Chat(queries::list_chat_queries(&self.db, limit).await?),
		};

		Ok(list)
	}

	pub async fn export_history(&self, kind: HistoryKind) -> ServiceResult<String> {
		let limit = self.cfg.history.export_limit;
		let mut out = String::new();

		match kind {
			HistoryKind::Crops => {
				out.push_str(
					"id,created_at,nitrogen,phosphorus,potassium,temperature,humidity,ph,rainfall,recommended_crop,confidence,source\n",
				);

				for row in queries::list_crop_recommendations(&self.db, limit).await? {
					let line = [
						row.id.to_string(),
						timestamp(&row.created_at),
						row.nitrogen.to_string(),
						row.phosphorus.to_string(),
						row.potassium.to_string(),
						row.temperature.to_string(),
						row.humidity.to_string(),
						row.ph.to_string(),
						row.rainfall.to_string(),
						csv_field(&row.recommended_crop),
						row.confidence.to_string(),
						csv_field(&row.source),
					]
					.join(",");

					out.push_str(&line);
					out.push('\n');
				}
			},
			HistoryKind::Diseases => {
				out.push_str("id,created_at,file_name,disease,confidence,pesticide,source\n");

				for row in queries::list_disease_detections(&self.db, limit).await? {
					let line = [
						row.id.to_string(),
						timestamp(&row.created_at),
						csv_field(&row.file_name),
						csv_field(&row.disease),
						row.confidence.to_string(),
						csv_field(&row.pesticide),
						csv_field(&row.source),
					]
					.join(",");

					out.push_str(&line);
					out.push('\n');
				}
			},
			HistoryKind::Chat => {
				out.push_str("id,created_at,question,answer,chatbot_type\n");

				for row in queries::list_chat_queries(&self.db, limit).await? {
					let line = [
						row.id.to_string(),
						timestamp(&row.created_at),
						csv_field(&row.question),
						csv_field(&row.answer),
						csv_field(&row.chatbot_type),
					]
					.join(",");

					out.push_str(&line);
					out.push('\n');
				}
			},
		}

		Ok(out)
	}

	pub async fn clear_history(&self) -> ServiceResult<()> {
		queries::clear_all(&self.db).await?;

		Ok(())
	}

	pub async fn statistics(&self) -> ServiceResult<Statistics> {
		Ok(queries::statistics(&self.db).await?)
	}
}

fn timestamp(ts: &time::OffsetDateTime) -> String {
	ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}

fn csv_field(value: &str) -> String {
	if value.contains([',', '"', '\n', '\r']) {
		format!("\"{}\"", value.replace('"', "\"\""))
	} else {
		value.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_parse_from_path_segments() {
		assert_eq!("crops".parse::<HistoryKind>().unwrap(), HistoryKind::Crops);
		assert_eq!("diseases".parse::<HistoryKind>().unwrap(), HistoryKind::Diseases);
		assert_eq!("chat".parse::<HistoryKind>().unwrap(), HistoryKind::Chat);
		assert!("everything".parse::<HistoryKind>().is_err());
	}

	#[test]
	fn csv_fields_quote_delimiters() {
		assert_eq!(csv_field("plain"), "plain");
		assert_eq!(csv_field("a,b"), "\"a,b\"");
		assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
	}
}
