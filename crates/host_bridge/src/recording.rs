use std::cell::{Cell, RefCell};

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::{HapticStyle, HostUser};
use tracing::{info, warn};

use crate::{BackButtonApi, HapticFeedbackApi, HostApi, HostEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Ready,
    Expand,
    SetHeaderColor(String),
    SetBackgroundColor(String),
    ShowBackButton,
    HideBackButton,
    BindBackButton,
    Haptic(HapticStyle),
    OpenLink(String),
}

/// In-process host that records every call; sub-capabilities can be switched off.
pub struct RecordingHost {
    user: Option<HostUser>,
    has_back_button: bool,
    has_haptics: bool,
    calls: RefCell<Vec<HostCall>>,
    back_target: RefCell<Option<Sender<HostEvent>>>,
    back_button_visible: Cell<bool>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            user: None,
            has_back_button: true,
            has_haptics: true,
            calls: RefCell::new(Vec::new()),
            back_target: RefCell::new(None),
            back_button_visible: Cell::new(false),
        }
    }

    pub fn with_user(mut self, user: HostUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn without_back_button(mut self) -> Self {
        self.has_back_button = false;
        self
    }

    pub fn without_haptics(mut self) -> Self {
        self.has_haptics = false;
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<HostCall> {
        self.calls.take()
    }

    pub fn haptics(&self) -> Vec<HapticStyle> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Haptic(style) => Some(*style),
                _ => None,
            })
            .collect()
    }

    pub fn opened_links(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::OpenLink(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn back_button_visible(&self) -> bool {
        self.back_button_visible.get()
    }

    /// Simulates the user tapping the platform back button.
    ///
    /// Returns `false` when nothing is bound or the event could not be queued.
    pub fn click_back_button(&self) -> bool {
        let target = self.back_target.borrow();
        let Some(events) = target.as_ref() else {
            return false;
        };
        match events.try_send(HostEvent::BackButtonClicked) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("host event queue is full; dropping back button click");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    fn record(&self, call: HostCall) {
        info!(target: "host", ?call, "host call");
        self.calls.borrow_mut().push(call);
    }
}

impl HostApi for RecordingHost {
    fn ready(&self) {
        self.record(HostCall::Ready);
    }

    fn expand(&self) {
        self.record(HostCall::Expand);
    }

    fn set_header_color(&self, color: &str) {
        self.record(HostCall::SetHeaderColor(color.to_string()));
    }

    fn set_background_color(&self, color: &str) {
        self.record(HostCall::SetBackgroundColor(color.to_string()));
    }

    fn back_button(&self) -> Option<&dyn BackButtonApi> {
        self.has_back_button.then_some(self as &dyn BackButtonApi)
    }

    fn haptic_feedback(&self) -> Option<&dyn HapticFeedbackApi> {
        self.has_haptics.then_some(self as &dyn HapticFeedbackApi)
    }

    fn user(&self) -> Option<HostUser> {
        self.user.clone()
    }

    fn open_link(&self, url: &str) {
        self.record(HostCall::OpenLink(url.to_string()));
    }
}

impl BackButtonApi for RecordingHost {
    fn show(&self) {
        self.back_button_visible.set(true);
        self.record(HostCall::ShowBackButton);
    }

    fn hide(&self) {
        self.back_button_visible.set(false);
        self.record(HostCall::HideBackButton);
    }

    fn on_click(&self, events: Sender<HostEvent>) {
        self.back_target.replace(Some(events));
        self.record(HostCall::BindBackButton);
    }
}

impl HapticFeedbackApi for RecordingHost {
    fn impact_occurred(&self, style: HapticStyle) {
        self.record(HostCall::Haptic(style));
    }
}
