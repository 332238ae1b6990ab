//! Tests for the Kizuna configuration system.

use std::sync::Mutex;

use kizuna_core::config::KizunaConfig;
use kizuna_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all KIZUNA_ env vars to prevent cross-test contamination.
fn clear_kizuna_env_vars() {
    for key in [
        "KIZUNA_MIN_EDGE_SCORE",
        "KIZUNA_ENABLE_SUB1_LINK",
        "KIZUNA_ENABLE_SUB2_LINK",
        "KIZUNA_LINK_SUB1_WEIGHT",
        "KIZUNA_LINK_SUB2_WEIGHT",
        "KIZUNA_THREADS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_without_any_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kizuna_env_vars();

    let dir = tempdir();
    let config = KizunaConfig::load(dir.path()).unwrap();

    assert_eq!(config.build.effective_min_edge_score(), 2.0);
    assert_eq!(config.weights.category_weight("geo"), 2.0);
    assert_eq!(config.weights.effective_city_level(), 3.0);
}

#[test]
fn test_project_toml_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kizuna_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("kizuna.toml"),
        r#"
[build]
min_edge_score = 1.5
link_sub1_weight = 0.9

[weights]
city_level = 4.0

[weights.category]
hobby = 2.0
"#,
    )
    .unwrap();

    let config = KizunaConfig::load(dir.path()).unwrap();

    assert_eq!(config.build.effective_min_edge_score(), 1.5);
    assert_eq!(config.build.effective_link_sub1_weight(), 0.9);
    // Unset fields keep their defaults
    assert_eq!(config.build.effective_link_sub2_weight(), 0.6);
    assert_eq!(config.weights.effective_city_level(), 4.0);
    assert_eq!(config.weights.effective_pref_level(), 2.0);
    // Category overrides merge with, not replace, the default profile
    assert_eq!(config.weights.category_weight("hobby"), 2.0);
    assert_eq!(config.weights.category_weight("geo"), 2.0);
}

#[test]
fn test_env_overrides_project_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kizuna_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("kizuna.toml"),
        "[build]\nmin_edge_score = 1.0\n",
    )
    .unwrap();
    std::env::set_var("KIZUNA_MIN_EDGE_SCORE", "3.5");
    std::env::set_var("KIZUNA_ENABLE_SUB2_LINK", "false");

    let config = KizunaConfig::load(dir.path()).unwrap();
    clear_kizuna_env_vars();

    assert_eq!(config.build.effective_min_edge_score(), 3.5);
    assert!(!config.build.effective_enable_sub2_link());
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kizuna_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("kizuna.toml"), "[build\nnot toml").unwrap();

    let err = KizunaConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_negative_threshold_fails_validation() {
    let err = KizunaConfig::from_toml("[build]\nmin_edge_score = -1.0\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "build.min_edge_score");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_negative_category_weight_fails_validation() {
    let err = KizunaConfig::from_toml("[weights.category]\ngeo = -2.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_round_trip_through_toml() {
    let config = KizunaConfig::from_toml("[build]\nmin_edge_score = 0.5\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = KizunaConfig::from_toml(&rendered).unwrap();
    assert_eq!(
        reparsed.build.effective_min_edge_score(),
        config.build.effective_min_edge_score()
    );
}
