//! Capability-checked proxy over the host client's injected web-app API.

use std::{fmt, rc::Rc};

use crossbeam_channel::Sender;
use shared::domain::{HapticStyle, HostUser};
use tracing::{debug, info};

mod recording;

pub use recording::{HostCall, RecordingHost};

/// Events the host pushes back into the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    BackButtonClicked,
}

/// The host's top-level web-app object.
///
/// Calls are fire-and-forget. Implementations are trusted once detected: a
/// failure inside the host is not reported back through this trait.
pub trait HostApi {
    fn ready(&self);
    fn expand(&self);
    fn set_header_color(&self, color: &str);
    fn set_background_color(&self, color: &str);
    /// `None` when this host version has no back button.
    fn back_button(&self) -> Option<&dyn BackButtonApi>;
    /// `None` when this host version has no haptic engine.
    fn haptic_feedback(&self) -> Option<&dyn HapticFeedbackApi>;
    fn user(&self) -> Option<HostUser>;
    fn open_link(&self, url: &str);
}

pub trait BackButtonApi {
    fn show(&self);
    fn hide(&self);
    /// Routes clicks to `events`, replacing any previously registered target.
    fn on_click(&self, events: Sender<HostEvent>);
}

pub trait HapticFeedbackApi {
    fn impact_occurred(&self, style: HapticStyle);
}

#[derive(Clone, Default)]
pub struct HostBridge {
    host: Option<Rc<dyn HostApi>>,
}

impl fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBridge")
            .field("present", &self.is_present())
            .finish()
    }
}

impl HostBridge {
    /// Wraps whatever the embedding environment exposed. A single check, no retries.
    pub fn detect(candidate: Option<Rc<dyn HostApi>>) -> Self {
        let bridge = Self { host: candidate };
        info!(present = bridge.is_present(), "host detection finished");
        bridge
    }

    pub fn present(host: Rc<dyn HostApi>) -> Self {
        Self { host: Some(host) }
    }

    pub fn absent() -> Self {
        Self { host: None }
    }

    pub fn is_present(&self) -> bool {
        self.host.is_some()
    }

    pub fn initialize_chrome(&self, color: &str) {
        let Some(host) = &self.host else {
            return;
        };
        debug!(color, "initializing host chrome");
        host.ready();
        host.expand();
        host.set_header_color(color);
        host.set_background_color(color);
    }

    pub fn bind_back_button(&self, events: Sender<HostEvent>) {
        if let Some(back_button) = self.host.as_deref().and_then(|host| host.back_button()) {
            debug!("binding host back button");
            back_button.on_click(events);
        }
    }

    pub fn set_back_button_visible(&self, visible: bool) {
        let Some(back_button) = self.host.as_deref().and_then(|host| host.back_button()) else {
            return;
        };
        debug!(visible, "syncing host back button");
        if visible {
            back_button.show();
        } else {
            back_button.hide();
        }
    }

    pub fn pulse(&self, style: HapticStyle) {
        if let Some(haptics) = self
            .host
            .as_deref()
            .and_then(|host| host.haptic_feedback())
        {
            debug!(%style, "haptic impact");
            haptics.impact_occurred(style);
        }
    }

    pub fn open_external(&self, url: &str) {
        if let Some(host) = &self.host {
            info!(url, "opening external link via host");
            host.open_link(url);
        }
    }

    pub fn identity_snapshot(&self) -> Option<HostUser> {
        self.host.as_ref().and_then(|host| host.user())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
