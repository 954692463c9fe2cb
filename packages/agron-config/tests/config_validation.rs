use toml::Value;

use agron_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_value() -> Value {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.")
}

fn parse(value: &Value) -> Config {
	let raw = toml::to_string(value).expect("Failed to render template config.");

	toml::from_str(&raw).expect("Failed to parse rendered config.")
}

fn table<'a>(value: &'a mut Value, path: &[&str]) -> &'a mut toml::Table {
	let mut current = value;

	for segment in path {
		current = current
			.as_table_mut()
			.and_then(|table| table.get_mut(*segment))
			.expect("Template config must include the requested table.");
	}

	current.as_table_mut().expect("Requested config node must be a table.")
}

fn assert_validation_error(cfg: &Config, needle: &str) {
	match agron_config::validate(cfg) {
		Err(Error::Validation { message }) => {
			assert!(message.contains(needle), "unexpected message: {message}")
		},
		other => panic!("expected a validation error, got {other:?}"),
	}
}

#[test]
fn sample_config_passes_validation() {
	let cfg = parse(&sample_value());

	agron_config::validate(&cfg).expect("Sample config must validate.");
}

#[test]
fn providers_are_optional_in_offline_mode() {
	let mut value = sample_value();

	table(&mut value, &[]).remove("providers");

	let cfg = parse(&value);

	assert!(cfg.providers.classifier.is_none());

	agron_config::validate(&cfg).expect("Offline config without providers must validate.");
}

#[test]
fn online_mode_requires_an_llm_provider() {
	let mut value = sample_value();

	table(&mut value, &["chat"]).insert("mode".to_string(), Value::String("online".to_string()));
	table(&mut value, &["providers"]).remove("llm_chat");

	assert_validation_error(&parse(&value), "providers.llm_chat");
}

#[test]
fn unknown_chat_mode_is_rejected() {
	let mut value = sample_value();

	table(&mut value, &["chat"]).insert("mode".to_string(), Value::String("hybrid".to_string()));

	assert_validation_error(&parse(&value), "chat.mode");
}

#[test]
fn zero_top_n_is_rejected() {
	let mut value = sample_value();

	table(&mut value, &["recommend"]).insert("top_n".to_string(), Value::Integer(0));

	assert_validation_error(&parse(&value), "recommend.top_n");
}

#[test]
fn blank_api_key_is_rejected() {
	let mut value = sample_value();

	table(&mut value, &["providers", "classifier"])
		.insert("api_key".to_string(), Value::String("  ".to_string()));

	assert_validation_error(&parse(&value), "classifier api_key");
}

#[test]
fn blank_sqlite_path_is_rejected() {
	let mut value = sample_value();

	table(&mut value, &["storage", "sqlite"])
		.insert("path".to_string(), Value::String(String::new()));

	assert_validation_error(&parse(&value), "storage.sqlite.path");
}

#[test]
fn export_limit_must_cover_default_limit() {
	let mut value = sample_value();

	table(&mut value, &["history"]).insert("export_limit".to_string(), Value::Integer(10));

	assert_validation_error(&parse(&value), "history.export_limit");
}

#[test]
fn defaults_kick_in_for_missing_sections() {
	let mut value = sample_value();
	let root = table(&mut value, &[]);

	root.remove("chat");
	root.remove("recommend");
	root.remove("history");

	let cfg = parse(&value);

	assert_eq!(cfg.chat.mode, "offline");
	assert_eq!(cfg.recommend.top_n, 3);
	assert_eq!(cfg.history.default_limit, 50);
}
