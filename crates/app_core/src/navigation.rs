use host_bridge::HostBridge;
use shared::domain::{HapticStyle, Screen};
use tracing::{debug, info};

#[derive(Debug)]
pub struct NavigationController {
    current: Screen,
    bridge: HostBridge,
    link_base: String,
}

impl NavigationController {
    pub fn new(bridge: HostBridge, link_base: impl Into<String>) -> Self {
        Self {
            current: Screen::Home,
            bridge,
            link_base: link_base.into(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn back_button_visible(&self) -> bool {
        self.current.shows_back_button()
    }

    pub fn sync_back_button(&self) {
        self.bridge
            .set_back_button_visible(self.back_button_visible());
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        self.bridge.pulse(HapticStyle::Light);
        self.set_screen(screen);
    }

    /// Click target of the host back button. Always lands on home; there is no back-stack.
    pub fn handle_back_button(&mut self) {
        self.bridge.pulse(HapticStyle::Light);
        self.set_screen(Screen::Home);
    }

    /// Hands the user off to a companion bot. The current screen is kept.
    pub fn open_bot(&self, bot_handle: &str) {
        self.bridge.pulse(HapticStyle::Medium);
        let url = deep_link(&self.link_base, bot_handle);
        info!(bot = bot_handle, %url, "handing off to bot");
        self.bridge.open_external(&url);
    }

    fn set_screen(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current, screen);
        if previous != screen {
            debug!(from = %previous, to = %screen, "screen changed");
            self.sync_back_button();
        }
    }
}

pub fn deep_link(link_base: &str, bot_handle: &str) -> String {
    format!("{}/{}", link_base.trim_end_matches('/'), bot_handle)
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
