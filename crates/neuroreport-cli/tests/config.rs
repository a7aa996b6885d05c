use std::path::Path;

use neuroreport_audiology::source::AudiogramSource;
use neuroreport_cli::config::{
    AudiogramMode, CURRENT_VERSION, NeuroreportConfig, load_config_from, migrate, parse_config,
    save_config_to,
};
use neuroreport_cli::sources::{audiogram_source, text_source_for};
use neuroreport_core::models::result::DiscussionMode;
use neuroreport_extract::error::ExtractError;
use neuroreport_pipeline::error::PipelineError;

#[test]
fn v0_config_gains_device_name() {
    let migrated = migrate(serde_json::json!({"discussion_mode": "implications"}), 0).unwrap();
    assert_eq!(migrated["device_name"], "COGNISION");
    assert_eq!(migrated["config_version"], 1);

    let config = parse_config(r#"{"discussion_mode": "implications"}"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.discussion_mode, DiscussionMode::Implications);
    assert_eq!(config.device_name, "COGNISION");
    assert_eq!(config.audiogram, AudiogramMode::Estimated);
}

#[test]
fn migration_keeps_existing_device_name() {
    let migrated = migrate(serde_json::json!({"device_name": "ACME-7"}), 0).unwrap();
    assert_eq!(migrated["device_name"], "ACME-7");
}

#[test]
fn newer_config_is_rejected() {
    let err = parse_config(r#"{"config_version": 99, "device_name": "x"}"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn unknown_keys_from_older_builds_are_ignored() {
    let config = parse_config(
        r#"{"config_version": 1, "device_name": "ACME-7", "styles": {"font_family": "Calibri"}}"#,
    )
    .unwrap();
    assert_eq!(config.device_name, "ACME-7");
    let saved = serde_json::to_value(&config).unwrap();
    assert!(saved.get("styles").is_none());
}

#[test]
fn non_object_config_is_rejected() {
    assert!(parse_config("[1, 2]").is_err());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = NeuroreportConfig {
        config_version: 0,
        device_name: "ACME-7".to_string(),
        audiogram: AudiogramMode::None,
        ..NeuroreportConfig::default()
    };
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.device_name, "ACME-7");
    assert_eq!(loaded.audiogram, AudiogramMode::None);
    assert!(!path.with_extension("json.tmp").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn processor_config_follows_file() {
    let config = parse_config(
        r#"{"config_version": 1, "device_name": "ACME-7", "discussion_mode": "implications"}"#,
    )
    .unwrap();
    let processor = config.processor_config();
    assert_eq!(processor.device_name, "ACME-7");
    assert_eq!(processor.discussion_mode, DiscussionMode::Implications);
}

#[test]
fn text_source_by_extension() {
    assert!(text_source_for(Path::new("report.PDF"), false).is_ok());
    assert!(text_source_for(Path::new("report.txt"), false).is_ok());
    assert!(text_source_for(Path::new("report.docx"), true).is_ok());

    let err = text_source_for(Path::new("report.docx"), false).err().unwrap();
    assert!(matches!(
        err,
        PipelineError::Extract(ExtractError::UnsupportedFormat(ref ext)) if ext == "docx"
    ));
}

#[test]
fn audiogram_flags_override_config() {
    let disabled = audiogram_source(None, true, None, AudiogramMode::Estimated).unwrap();
    assert!(disabled.provide("audiogram").is_none());

    let configured_off = audiogram_source(None, false, None, AudiogramMode::None).unwrap();
    assert!(configured_off.provide("audiogram").is_none());

    let seeded = audiogram_source(None, false, Some(3), AudiogramMode::Estimated).unwrap();
    assert_eq!(seeded.provide("audiogram"), seeded.provide("audiogram"));

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("audiogram.json");
    std::fs::write(&file, r#"{"left_ear": {"1000": 30}}"#).unwrap();
    let fixed = audiogram_source(Some(&file), true, None, AudiogramMode::None).unwrap();
    assert_eq!(fixed.provide("").unwrap().left_ear.unwrap()[&1000], 30.0);
}
