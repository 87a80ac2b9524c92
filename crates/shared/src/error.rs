use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown screen `{0}` (expected home, setup, history or info)")]
    UnknownScreen(String),
    #[error("unknown haptic style `{0}` (expected light, medium or heavy)")]
    UnknownHapticStyle(String),
    #[error("unknown step `{0}`")]
    UnknownStep(String),
}
