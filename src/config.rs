use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::widget::WidgetPresets;

/// Host presets read at startup. Every field is optional in the file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub default_sample_text: Option<String>,
    pub custom_sample_text: Option<String>,
    pub font_size: Option<f32>,
    pub theme: String,
    /// Whether the app may enumerate the fonts installed on this machine.
    pub allow_local_fonts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_sample_text: None,
            custom_sample_text: None,
            font_size: None,
            theme: "dark".to_string(),
            allow_local_fonts: true,
        }
    }
}

impl Settings {
    pub fn presets(&self) -> WidgetPresets {
        WidgetPresets {
            default_sample_text: self.default_sample_text.clone(),
            custom_sample_text: self.custom_sample_text.clone(),
            font_size: self.font_size,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "fontpreview", "font-preview")
        .map(|proj| proj.config_dir().join("settings.json"))
}

/// Load settings from the platform config dir, falling back to defaults.
pub fn load_settings() -> Settings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => {
            tracing::warn!("no config directory available; using default settings");
            Settings::default()
        }
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), "no settings file: {}", e);
            return Settings::default();
        }
    };
    parse_settings(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "invalid settings file: {}", e);
        Settings::default()
    })
}

pub fn parse_settings(content: &str) -> serde_json::Result<Settings> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = parse_settings(r#"{ "font_size": 22 }"#).unwrap();
        assert_eq!(settings.font_size, Some(22.0));
        assert_eq!(settings.theme, "dark");
        assert!(settings.allow_local_fonts);
        assert!(settings.custom_sample_text.is_none());
    }

    #[test]
    fn test_presets_mirror_settings() {
        let settings = parse_settings(
            r#"{ "default_sample_text": "Sphinx of black quartz", "custom_sample_text": "Hi", "allow_local_fonts": false }"#,
        )
        .unwrap();
        let presets = settings.presets();
        assert_eq!(presets.default_sample_text.as_deref(), Some("Sphinx of black quartz"));
        assert_eq!(presets.custom_sample_text.as_deref(), Some("Hi"));
        assert_eq!(presets.font_size, None);
        assert!(!settings.allow_local_fonts);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_settings("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("font-preview-does-not-exist.json");
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_settings_path_names_app() {
        if let Some(path) = settings_path() {
            assert!(path.to_string_lossy().contains("font-preview"));
        }
    }
}
