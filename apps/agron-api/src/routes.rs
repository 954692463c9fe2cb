use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use agron_service::{
	ChatRequest, ChatResponse, DetectRequest, DetectResponse, HistoryKind, HistoryList,
	RecommendRequest, RecommendResponse, ServiceError,
};
use agron_storage::models::Statistics;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/crops/recommend", post(recommend))
		.route("/v1/diseases/detect", post(detect))
		.route("/v1/chat", post(chat))
		.route("/v1/history/{kind}", get(history))
		.route("/v1/history/{kind}/export", get(export_history))
		.route("/v1/history/clear", post(clear_history))
		.route("/v1/statistics", get(statistics))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn recommend(
	State(state): State<AppState>,
	Json(payload): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
	let response = state.service.recommend(payload).await?;
	Ok(Json(response))
}

async fn detect(
	State(state): State<AppState>,
	Json(payload): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
	let response = state.service.detect(payload).await?;
	Ok(Json(response))
}

async fn chat(
	State(state): State<AppState>,
	Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
	let response = state.service.chat(payload).await?;
	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
	limit: Option<u32>,
}

async fn history(
	State(state): State<AppState>,
	Path(kind): Path<String>,
	Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryList>, ApiError> {
	let kind: HistoryKind = kind.parse().map_err(ApiError::from)?;
	let response = state.service.history(kind, query.limit).await?;
	Ok(Json(response))
}

async fn export_history(
	State(state): State<AppState>,
	Path(kind): Path<String>,
) -> Result<Response, ApiError> {
	let parsed: HistoryKind = kind.parse().map_err(ApiError::from)?;
	let csv = state.service.export_history(parsed).await?;
	let disposition = format!("attachment; filename=\"{kind}_history.csv\"");

	Ok((
		[
			(header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
			(header::CONTENT_DISPOSITION, disposition),
		],
		csv,
	)
		.into_response())
}

#[derive(Debug, Serialize)]
struct ClearResponse {
	cleared: bool,
}

async fn clear_history(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
	state.service.clear_history().await?;
	Ok(Json(ClearResponse { cleared: true }))
}

async fn statistics(State(state): State<AppState>) -> Result<Json<Statistics>, ApiError> {
	let response = state.service.statistics().await?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message, fields } => Self::new(
				StatusCode::BAD_REQUEST,
				"invalid_request",
				message,
				if fields.is_empty() { None } else { Some(fields) },
			),
			ServiceError::Provider { message } =>
				Self::new(StatusCode::BAD_GATEWAY, "provider_error", message, None),
			ServiceError::Storage { message } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message, None),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
