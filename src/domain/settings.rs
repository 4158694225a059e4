use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String, // "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_true")]
    pub console_logging_enabled: bool,
    #[serde(default = "default_false")]
    pub file_logging_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_prefix")]
    pub file_name_prefix: String,
    #[serde(default = "default_true")]
    pub ansi_colors: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_logging_enabled: default_true(),
            file_logging_enabled: default_false(),
            log_dir: default_log_dir(),
            file_name_prefix: default_prefix(),
            ansi_colors: default_true(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_prefix() -> String {
    "dpad_controller".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Address of the game server the connector dials.
    #[serde(default = "default_server_addr")]
    pub server_addr: String,

    /// Movement threshold for the direction resolver, in
    /// device-independent pixels.
    #[serde(default = "default_touch_precision_dip")]
    pub touch_precision_dip: f32,

    /// Display density used to convert the threshold to surface pixels.
    #[serde(default = "default_display_density")]
    pub display_density: f32,

    /// Edge length of the (square) synthetic pad surface driven by the
    /// console binary.
    #[serde(default = "default_pad_size_px")]
    pub pad_size_px: f32,

    #[serde(default)]
    pub log_settings: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_addr: default_server_addr(),
            touch_precision_dip: default_touch_precision_dip(),
            display_density: default_display_density(),
            pad_size_px: default_pad_size_px(),
            log_settings: LogSettings::default(),
        }
    }
}

fn default_server_addr() -> String {
    "127.0.0.1:47600".to_string()
}
fn default_touch_precision_dip() -> f32 {
    crate::domain::resolver::TOUCH_PRECISION_DIP
}
fn default_display_density() -> f32 {
    1.0
}
fn default_pad_size_px() -> f32 {
    300.0
}

pub struct SettingsService {
    settings: Settings,
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_path()?;
        let settings = Self::load_from_file(&settings_path).unwrap_or_default();

        Ok(Self {
            settings,
            settings_path,
        })
    }

    fn get_settings_path() -> anyhow::Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        path.push("DPadController");
        fs::create_dir_all(&path)?;
        path.push("settings.json");
        Ok(path)
    }

    fn load_from_file(path: &PathBuf) -> anyhow::Result<Settings> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.settings_path, json)?;
        Ok(())
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.server_addr, default_server_addr());
        assert_eq!(settings.touch_precision_dip, 1.5);
        assert!(settings.log_settings.console_logging_enabled);
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.server_addr = "10.0.0.5:4000".to_string();
        settings.display_density = 2.0;

        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.server_addr, "10.0.0.5:4000");
        assert_eq!(restored.display_density, 2.0);
        assert_eq!(restored.pad_size_px, 300.0);
    }
}
