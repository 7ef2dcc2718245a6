use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum CameraSource {
    Device { index: u32 },
    StillImage { path: PathBuf },
}

impl fmt::Display for CameraSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraSource::Device { index } => write!(f, "camera device #{}", index),
            CameraSource::StillImage { path } => write!(f, "still image {}", path.display()),
        }
    }
}

impl Default for CameraSource {
    fn default() -> Self {
        CameraSource::Device {
            index: global_constants::DEFAULT_CAMERA_INDEX,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_upload_endpoint_url")]
    pub upload_endpoint_url: String,
    #[serde(default)]
    pub camera_source: CameraSource,
}

fn default_upload_endpoint_url() -> String {
    global_constants::DEFAULT_UPLOAD_ENDPOINT_URL.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            upload_endpoint_url: default_upload_endpoint_url(),
            camera_source: CameraSource::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &std::path::Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Upload endpoint: {}", settings.upload_endpoint_url);
        log::debug!("[SETTINGS] Camera source: {}", settings.camera_source);

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", settings_path))?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "frame-ocr-capture-test-{}-{}",
            label,
            uuid::Uuid::new_v4()
        ))
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(
            settings.upload_endpoint_url,
            "http://localhost:5000/upload-image"
        );
        assert_eq!(settings.camera_source, CameraSource::Device { index: 0 });
    }

    #[test]
    fn test_camera_source_serialization_is_tagged() {
        let source = CameraSource::StillImage {
            path: PathBuf::from("/tmp/page.png"),
        };

        let serialized = serde_json::to_string(&source).unwrap();

        assert_eq!(serialized, r#"{"kind":"StillImage","path":"/tmp/page.png"}"#);
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_fields_uses_defaults() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_camera_source_display() {
        assert_eq!(
            format!("{}", CameraSource::Device { index: 2 }),
            "camera device #2"
        );
    }

    #[test]
    fn test_load_from_missing_path_writes_defaults() {
        let temp_dir = unique_temp_dir("defaults");
        let settings_path = temp_dir.join("settings.json");

        let loaded = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded, UserSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let temp_dir = unique_temp_dir("roundtrip");
        let settings_path = temp_dir.join("settings.json");

        let original_settings = UserSettings {
            upload_endpoint_url: "http://ocr.internal:8080/upload-image".to_string(),
            camera_source: CameraSource::StillImage {
                path: PathBuf::from("fixtures/receipt.png"),
            },
        };

        original_settings.save_to_path(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_load_from_corrupt_file_reports_settings_path() {
        let temp_dir = unique_temp_dir("corrupt");
        let settings_path = temp_dir.join("settings.json");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(&settings_path, "{ not json").unwrap();

        let error = UserSettings::load_from_path(&settings_path).unwrap_err();

        let rendered = format!("{:#}", error);
        assert!(rendered.contains("Failed to parse settings from"));
        assert!(rendered.contains("settings.json"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
