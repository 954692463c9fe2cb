use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use base64::Engine;
use serde_json::Value;
use tower::util::ServiceExt;

use agron_api::{routes, state::AppState};
use agron_config::{Chat, Config, History, Providers, Recommend, Service, Sqlite, Storage};
use agron_testkit::TestDatabase;

fn test_config(db_path: &str) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		storage: Storage {
			sqlite: Sqlite { path: db_path.to_string(), pool_max_conns: 2 },
		},
		providers: Providers::default(),
		chat: Chat::default(),
		recommend: Recommend::default(),
		history: History::default(),
	}
}

async fn test_app() -> (Router, TestDatabase) {
	let test_db = TestDatabase::new().expect("temp db failed");
	let state = AppState::new(test_config(test_db.path())).await.expect("state failed");

	(routes::router(state), test_db)
}

fn json_request(uri: &str, payload: &Value) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(payload.to_string()))
		.expect("request must build")
}

fn get_request(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).expect("request must build")
}

async fn json_body(response: axum::response::Response) -> Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body read failed");

	serde_json::from_slice(&bytes).expect("body must be JSON")
}

#[tokio::test]
async fn health_ok() {
	let (app, _guard) = test_app().await;
	let response = app.oneshot(get_request("/health")).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn recommend_returns_sorted_top_matches() {
	let (app, _guard) = test_app().await;
	let payload = serde_json::json!({
		"nitrogen": 90,
		"phosphorus": 42,
		"potassium": 43,
		"temperature": 21,
		"humidity": 82,
		"ph": 6.5,
		"rainfall": 203,
	});
	let response = app
		.oneshot(json_request("/v1/crops/recommend", &payload))
		.await
		.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["source"], "rules");

	let recommendations = json["recommendations"].as_array().expect("array expected");

	assert_eq!(recommendations.len(), 3);
	assert_eq!(recommendations[0]["crop"], "rice");

	let confidences = recommendations
		.iter()
		.map(|item| item["confidence"].as_f64().expect("number expected"))
		.collect::<Vec<_>>();

	assert!(confidences.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn recommend_rejects_non_numeric_fields() {
	let (app, _guard) = test_app().await;
	let payload = serde_json::json!({ "nitrogen": { "bad": true } });
	let response = app
		.oneshot(json_request("/v1/crops/recommend", &payload))
		.await
		.expect("request failed");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = json_body(response).await;

	assert_eq!(json["error_code"], "invalid_request");
	assert_eq!(json["fields"][0], "nitrogen");
}

#[tokio::test]
async fn chat_rejects_blank_messages() {
	let (app, _guard) = test_app().await;
	let payload = serde_json::json!({ "message": "  " });
	let response = app.oneshot(json_request("/v1/chat", &payload)).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let json = json_body(response).await;

	assert_eq!(json["error_code"], "invalid_request");
}

#[tokio::test]
async fn chat_answers_greetings_offline() {
	let (app, _guard) = test_app().await;
	let payload = serde_json::json!({ "message": "hello" });
	let response = app.oneshot(json_request("/v1/chat", &payload)).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["chatbot_type"], "offline");
	assert!(!json["reply"].as_str().expect("string expected").is_empty());
}

#[tokio::test]
async fn detect_classifies_a_green_leaf_as_healthy() {
	let (app, _guard) = test_app().await;
	let image = image::RgbImage::from_pixel(64, 64, image::Rgb([50, 150, 50]));
	let mut bytes = std::io::Cursor::new(vec![]);

	image::DynamicImage::ImageRgb8(image)
		.write_to(&mut bytes, image::ImageFormat::Png)
		.expect("png encode failed");

	let payload = serde_json::json!({
		"file_name": "leaf.png",
		"image_base64": base64::engine::general_purpose::STANDARD.encode(bytes.into_inner()),
	});
	let response = app
		.oneshot(json_request("/v1/diseases/detect", &payload))
		.await
		.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);

	let json = json_body(response).await;

	assert_eq!(json["disease"], "Healthy");
	assert_eq!(json["source"], "heuristic");
	assert_eq!(json["pesticide"], "None");
}

#[tokio::test]
async fn history_records_clear_and_statistics() {
	let (app, _guard) = test_app().await;
	let payload = serde_json::json!({ "message": "hello" });

	app.clone().oneshot(json_request("/v1/chat", &payload)).await.expect("request failed");

	let response =
		app.clone().oneshot(get_request("/v1/history/chat")).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(json_body(response).await.as_array().expect("array expected").len(), 1);

	let response = app
		.clone()
		.oneshot(get_request("/v1/statistics"))
		.await
		.expect("request failed");
	let stats = json_body(response).await;

	assert_eq!(stats["total_chat_queries"], 1);

	let response = app
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/history/clear")
				.body(Body::empty())
				.expect("request must build"),
		)
		.await
		.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(json_body(response).await["cleared"], true);

	let response = app.oneshot(get_request("/v1/history/chat")).await.expect("request failed");

	assert!(json_body(response).await.as_array().expect("array expected").is_empty());
}

#[tokio::test]
async fn unknown_history_kind_is_rejected() {
	let (app, _guard) = test_app().await;
	let response =
		app.oneshot(get_request("/v1/history/everything")).await.expect("request failed");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_serves_csv() {
	let (app, _guard) = test_app().await;
	let payload = serde_json::json!({ "message": "hello" });

	app.clone().oneshot(json_request("/v1/chat", &payload)).await.expect("request failed");

	let response = app
		.oneshot(get_request("/v1/history/chat/export"))
		.await
		.expect("request failed");

	assert_eq!(response.status(), StatusCode::OK);

	let content_type = response
		.headers()
		.get(header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.unwrap_or_default()
		.to_string();

	assert!(content_type.starts_with("text/csv"));

	let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body read failed");
	let csv = String::from_utf8(bytes.to_vec()).expect("csv must be UTF-8");

	assert!(csv.starts_with("id,created_at,question,answer,chatbot_type"));
	assert!(csv.lines().count() >= 2);
}
