use std::str::FromStr;

use app_core::{AppShell, UiAction};
use host_bridge::RecordingHost;
use shared::{domain::Screen, error::ParseError};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Action(UiAction),
    /// Press the host's back button.
    Back,
}

impl FromStr for Step {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "back" => Ok(Step::Back),
            "assistant" => Ok(Step::Action(UiAction::OpenAssistant)),
            "support" => Ok(Step::Action(UiAction::OpenSupport)),
            other => other
                .parse::<Screen>()
                .map(|screen| Step::Action(UiAction::Navigate(screen)))
                .map_err(|_| ParseError::UnknownStep(value.to_string())),
        }
    }
}

pub fn apply(shell: &mut AppShell, host: Option<&RecordingHost>, step: Step) {
    match step {
        Step::Action(action) => shell.handle_action(action),
        Step::Back => match host {
            Some(host) => {
                if !host.click_back_button() {
                    warn!("back button press was not delivered");
                }
            }
            None => warn!("no host back button to press"),
        },
    }
    shell.pump_host_events();
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
