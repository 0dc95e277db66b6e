// tests/unit_config.rs
use cscan_core::config::{self, Config, LimitsConfig, OutputFormat};
use std::fs;

#[test]
fn test_defaults() {
    let c = Config::new();
    assert_eq!(c.limits.max_input_bytes, LimitsConfig::default().max_input_bytes);
    assert_eq!(c.limits.max_input_bytes, 1024 * 1024);
    assert!(c.is_source_ext("c"));
    assert!(c.is_source_ext("H"));
    assert!(!c.is_source_ext("rs"));
    assert_eq!(c.preferences.format, OutputFormat::Text);
    assert!(!c.preferences.strict);
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("cscan.toml"),
        "[limits]\nmax_input_bytes = 64\n\n[preferences]\nformat = \"json\"\nstrict = true\n",
    )
    .unwrap();
    let c = Config::load(d.path());
    assert_eq!(c.limits.max_input_bytes, 64);
    assert_eq!(c.preferences.format, OutputFormat::Json);
    assert!(c.preferences.strict);
    assert!(c.is_source_ext("c"), "unset sections keep defaults");
}

#[test]
fn test_discovery_section() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("cscan.toml"),
        "[discovery]\nextensions = [\"cpp\"]\nexclude = [\"vendor/\"]\n",
    )
    .unwrap();
    let c = Config::load(d.path());
    assert!(c.is_source_ext("cpp"));
    assert!(!c.is_source_ext("c"));
    assert_eq!(c.exclude_patterns.len(), 1);
}

#[test]
fn test_malformed_toml_keeps_defaults() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("cscan.toml"), "[limits\nmax_input_bytes = ").unwrap();
    let c = Config::load(d.path());
    assert_eq!(c.limits.max_input_bytes, 1024 * 1024);
}

#[test]
fn test_parse_toml_rejects_bad_regex() {
    let mut c = Config::new();
    let err = c.parse_toml("[discovery]\nexclude = [\"(\"]\n");
    assert!(err.is_err());
    assert!(c.exclude_patterns.is_empty());
}

#[test]
fn test_cscanignore() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(".cscanignore"), "# generated\nthird_party\n\ngen_.*\\.c").unwrap();
    let c = Config::load(d.path());
    assert_eq!(c.exclude_patterns.len(), 2);
}

#[test]
fn test_init_writes_loadable_file_once() {
    let d = tempfile::tempdir().unwrap();
    config::init(d.path()).unwrap();
    let body = fs::read_to_string(d.path().join("cscan.toml")).unwrap();
    assert!(body.contains("max_input_bytes"));

    let c = Config::load(d.path());
    assert_eq!(c.limits.max_input_bytes, 1024 * 1024);

    assert!(config::init(d.path()).is_err(), "must not overwrite");
}
