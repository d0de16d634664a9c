use crate::models::PlacementConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the persisted placement settings.
pub const SETTINGS_FILE: &str = "placement.yaml";

/// Load/save access to persisted placement settings.
pub trait SettingsStore: Send + Sync {
    /// Loads the settings merged over the defaults.
    fn load(&self) -> Result<PlacementConfig>;

    fn save(&self, config: &PlacementConfig) -> Result<()>;
}

/// Configuration manager for loading and saving the YAML settings file.
///
/// Missing keys in the file take their defaults, and a missing file loads
/// as [`PlacementConfig::default`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory holding `placement.yaml`, created if missing
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join(SETTINGS_FILE),
            config_dir,
        })
    }

    /// Load the placement settings.
    ///
    /// # Returns
    /// The loaded settings, or defaults if the file doesn't exist
    pub fn load_settings(&self) -> Result<PlacementConfig> {
        if !self.settings_path.exists() {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
            return Ok(PlacementConfig::default());
        }

        let file_contents = fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        // An empty file is valid YAML for "nothing set"
        if file_contents.trim().is_empty() {
            tracing::info!("Settings file {} is empty, using defaults", self.settings_path);
            return Ok(PlacementConfig::default());
        }

        let config: PlacementConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::info!(
            "Loaded settings from {}: mode={}, rules={}",
            self.settings_path,
            config.mode,
            config.rules.len()
        );
        Ok(config)
    }

    /// Save the placement settings.
    pub fn save_settings(&self, config: &PlacementConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the settings file path.
    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}

impl SettingsStore for ConfigManager {
    fn load(&self) -> Result<PlacementConfig> {
        self.load_settings()
    }

    fn save(&self, config: &PlacementConfig) -> Result<()> {
        self.save_settings(config)
    }
}
