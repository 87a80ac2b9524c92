use shared::catalog::{ASSISTANT_BOT, SUPPORT_BOT};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_CHROME_COLOR: &str = "#121212";
pub const DEFAULT_LINK_BASE: &str = "https://t.me/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Applied to both the host header and background. Only `#RRGGBB` is
    /// accepted; host theme keywords such as `bg_color` are rejected.
    pub chrome_color: String,
    pub link_base: String,
    pub assistant_bot: String,
    pub support_bot: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            chrome_color: DEFAULT_CHROME_COLOR.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
            assistant_bot: ASSISTANT_BOT.to_string(),
            support_bot: SUPPORT_BOT.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_hex_color(&self.chrome_color) {
            return Err(ConfigError::InvalidChromeColor(self.chrome_color.clone()));
        }

        let base = Url::parse(&self.link_base).map_err(|source| ConfigError::InvalidLinkBase {
            value: self.link_base.clone(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::OpaqueLinkBase(self.link_base.clone()));
        }

        if self.assistant_bot.trim().is_empty() {
            return Err(ConfigError::EmptyBotHandle("assistant bot"));
        }
        if self.support_bot.trim().is_empty() {
            return Err(ConfigError::EmptyBotHandle("support bot"));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
