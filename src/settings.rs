//! Viewer configuration.
//!
//! Settings are read from a JSON file in the working directory when
//! present and fall back to defaults otherwise.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Directory containing the four scene textures.
    pub texture_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Tabletop Scene Viewer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            texture_dir: PathBuf::from("resources/textures"),
        }
    }
}

impl Settings {
    /// Parses settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    }

    /// Loads settings, logging and falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("using default settings ({}: {e})", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "width": 1920 }"#).unwrap();
        assert_eq!(settings.width, 1920);
        assert_eq!(settings.height, 720);
        assert!(!settings.fullscreen);
        assert_eq!(settings.texture_dir, PathBuf::from("resources/textures"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(serde_json::from_str::<Settings>("{ width: }").is_err());
    }
}
