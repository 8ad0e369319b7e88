use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::data::{Country, UnknownCountry};
use crate::ui::action::parse_action;
use crate::util::paths::config_path;
use crate::wizard::NotificationTimings;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Country(#[from] UnknownCountry),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Country preselected in the address section
    pub default_country: Country,
    /// Whether the skip affordance is offered at all
    pub show_skip: bool,
    /// Notification display durations
    pub notifications: NotificationTimings,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country: Country::default(),
            show_skip: true,
            notifications: NotificationTimings::default(),
            keybindings: default_keybindings(),
        }
    }
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, String>,

    /// First-step form keybindings
    pub form: Option<HashMap<String, String>>,

    /// File picker keybindings
    pub file_picker: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlWizardConfig {
    pub default_country: Option<String>,
    pub show_skip: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlNotificationConfig {
    pub duration_ms: Option<u64>,
    pub skip_duration_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub wizard: Option<TomlWizardConfig>,
    pub notifications: Option<TomlNotificationConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (action_name, key_str) in &self.global {
            // Context sections are handled separately
            if matches!(action_name.as_str(), "form" | "file_picker") {
                continue;
            }
            if let Some((combo, action)) = parse_binding(action_name, key_str) {
                config.global.insert(combo, action);
            }
        }

        if let Some(form) = &self.form {
            parse_context_bindings(&mut config, KeyContext::Form, form);
        }
        if let Some(picker) = &self.file_picker {
            parse_context_bindings(&mut config, KeyContext::FilePicker, picker);
        }

        config
    }
}

fn parse_binding(
    action_name: &str,
    key_str: &str,
) -> Option<(super::keys::KeyCombo, crate::ui::action::Action)> {
    match (parse_key_notation(key_str), parse_action(action_name)) {
        (Ok(combo), Some(action)) => Some((combo, action)),
        (Err(e), _) => {
            tracing::warn!(action = action_name, key = key_str, error = %e, "Ignoring keybinding");
            None
        }
        (_, None) => {
            tracing::warn!(action = action_name, "Ignoring binding for unknown action");
            None
        }
    }
}

/// Parse context-specific keybindings
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, String>,
) {
    let context_map = config.context.entry(context).or_default();
    for (action_name, key_str) in bindings {
        if let Some((combo, action)) = parse_binding(action_name, key_str) {
            context_map.insert(combo, action);
        }
    }
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// A missing file is created from the bundled example. A broken file is
    /// logged and ignored so the wizard still starts.
    pub fn load() -> Self {
        Self::load_or_default(&config_path())
    }

    /// Like [`Config::load`], reading `config_file` instead of the default location
    pub fn load_or_default(config_file: &Path) -> Self {
        if !config_file.exists() {
            Self::create_default_config(config_file);
        }

        match Self::load_from(config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %config_file.display(), error = %e, "Using default config");
                Config::default()
            }
        }
    }

    /// Load configuration from `path`, merging with defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if !path.exists() {
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config: TomlConfig = toml::from_str(&contents)?;
        config.apply(toml_config)?;
        Ok(config)
    }

    fn apply(&mut self, toml_config: TomlConfig) -> Result<(), ConfigError> {
        if let Some(wizard) = toml_config.wizard {
            if let Some(country) = wizard.default_country {
                self.default_country = country.parse()?;
            }
            if let Some(show_skip) = wizard.show_skip {
                self.show_skip = show_skip;
            }
        }

        if let Some(notifications) = toml_config.notifications {
            if let Some(ms) = notifications.duration_ms {
                self.notifications.default = Duration::from_millis(ms);
            }
            if let Some(ms) = notifications.skip_duration_ms {
                self.notifications.skip = Duration::from_millis(ms);
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            self.keybindings.merge(keys.to_keybinding_config());
        }

        Ok(())
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write default config");
        }
    }

    pub fn with_default_country(mut self, country: Country) -> Self {
        self.default_country = country;
        self
    }

    pub fn with_show_skip(mut self, show_skip: bool) -> Self {
        self.show_skip = show_skip;
        self
    }
}
