use std::{fs, io, path::Path};

use anyhow::Context;
use app_core::{ConfigError, ShellConfig};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chrome_color: String,
    pub link_base: String,
    pub assistant_bot: String,
    pub support_bot: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let shell = ShellConfig::default();
        Self {
            chrome_color: shell.chrome_color,
            link_base: shell.link_base,
            assistant_bot: shell.assistant_bot,
            support_bot: shell.support_bot,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn shell_config(&self) -> Result<ShellConfig, ConfigError> {
        let config = ShellConfig {
            chrome_color: self.chrome_color.clone(),
            link_base: self.link_base.clone(),
            assistant_bot: self.assistant_bot.clone(),
            support_bot: self.support_bot.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Reads the settings file (missing file means defaults), then applies `APP__*` overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = read_settings_file(path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    };
    toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__CHROME_COLOR") {
        settings.chrome_color = v;
    }
    if let Some(v) = lookup("APP__LINK_BASE") {
        settings.link_base = v;
    }
    if let Some(v) = lookup("APP__ASSISTANT_BOT") {
        settings.assistant_bot = v;
    }
    if let Some(v) = lookup("APP__SUPPORT_BOT") {
        settings.support_bot = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
