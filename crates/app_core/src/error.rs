use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chrome color must look like #RRGGBB, got `{0}`")]
    InvalidChromeColor(String),
    #[error("invalid link base `{value}`: {source}")]
    InvalidLinkBase {
        value: String,
        source: url::ParseError,
    },
    #[error("link base `{0}` cannot be extended with a bot handle")]
    OpaqueLinkBase(String),
    #[error("{0} handle must not be empty")]
    EmptyBotHandle(&'static str),
}
