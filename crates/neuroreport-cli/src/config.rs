use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use neuroreport_core::models::result::DiscussionMode;
use neuroreport_narrative::DEFAULT_DEVICE_NAME;
use neuroreport_pipeline::ProcessorConfig;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuroreportConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub discussion_mode: DiscussionMode,
    /// Test device named in hearing-compatibility statements. Added in v1.
    pub device_name: String,
    #[serde(default)]
    pub audiogram: AudiogramMode,
}

/// What to do when a report mentions a hearing test but carries no
/// audiogram file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudiogramMode {
    /// Use a typical age-related pattern.
    #[default]
    Estimated,
    None,
}

impl Default for NeuroreportConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            discussion_mode: DiscussionMode::default(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            audiogram: AudiogramMode::default(),
        }
    }
}

impl NeuroreportConfig {
    pub fn processor_config(&self) -> ProcessorConfig {
        ProcessorConfig {
            discussion_mode: self.discussion_mode,
            device_name: self.device_name.clone(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("neuroreport"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// The saved config, or defaults when none has been written yet.
pub fn load_config() -> eyre::Result<NeuroreportConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(NeuroreportConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<NeuroreportConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, migrating older versions first.
pub fn parse_config(contents: &str) -> eyre::Result<NeuroreportConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: NeuroreportConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update neuroreport."
        ));
    }

    // v0 → v1: add device_name
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("device_name")
            .or_insert(serde_json::Value::String(DEFAULT_DEVICE_NAME.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added device_name)");
    }

    Ok(json)
}

pub fn save_config(config: &NeuroreportConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

/// Write atomically: temp file, restrictive permissions, then rename.
pub fn save_config_to(config: &NeuroreportConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
