use super::{apply_env, apply_file, load_settings, Settings};

use std::{collections::HashMap, fs, time::Duration};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
api_base_url = "https://learn.example.com/api"
request_timeout_seconds = 5
compact_layout = true
"#,
    )
    .expect("valid toml");

    assert_eq!(settings.api_base_url, "https://learn.example.com/api");
    assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    assert!(settings.compact_layout);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn app_prefixed_env_wins_over_legacy_name() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[
            ("VIEWER_API_BASE_URL", "http://legacy"),
            ("APP__API_BASE_URL", "http://preferred"),
            ("APP__REQUEST_TIMEOUT_SECONDS", "not-a-number"),
            ("APP__COMPACT_LAYOUT", "yes"),
        ]),
    );

    assert_eq!(settings.api_base_url, "http://preferred");
    assert_eq!(settings.request_timeout_seconds, 15);
    assert!(settings.compact_layout);
}

#[test]
fn zero_timeout_is_clamped() {
    let settings = Settings {
        request_timeout_seconds: 0,
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}

#[test]
fn missing_file_falls_back_to_defaults_and_bad_file_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("absent.toml");
    let settings = load_settings(&missing).expect("defaults");
    assert_eq!(settings.request_timeout_seconds, Settings::default().request_timeout_seconds);

    let broken = dir.path().join("viewer.toml");
    fs::write(&broken, "request_timeout_seconds = \"soon\"").expect("write");
    let err = load_settings(&broken).expect_err("type mismatch");
    assert!(format!("{err:#}").contains("invalid config"));
}
