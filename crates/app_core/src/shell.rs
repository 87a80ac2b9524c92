use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver};
use host_bridge::{HostBridge, HostEvent};
use shared::domain::{HistoryItem, Identity, Screen};
use tracing::{debug, info};

use crate::{
    config::ShellConfig,
    events::UiAction,
    history::HistoryStore,
    navigation::NavigationController,
    session::SessionContext,
    view::{Renderer, ScreenView, ShellView},
};

const HOST_EVENT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct AppShell {
    bridge: HostBridge,
    config: ShellConfig,
    session: SessionContext,
    navigation: NavigationController,
    history: HistoryStore,
    host_events: Receiver<HostEvent>,
}

impl AppShell {
    pub fn mount(bridge: HostBridge, config: ShellConfig) -> Self {
        Self::mount_at(bridge, config, Utc::now())
    }

    pub fn mount_at(bridge: HostBridge, config: ShellConfig, now: DateTime<Utc>) -> Self {
        let (events_tx, host_events) = bounded(HOST_EVENT_QUEUE_CAPACITY);

        let session = if bridge.is_present() {
            bridge.initialize_chrome(&config.chrome_color);
            SessionContext::resolve(&bridge)
        } else {
            SessionContext::guest()
        };

        let navigation = NavigationController::new(bridge.clone(), config.link_base.clone());
        if bridge.is_present() {
            bridge.bind_back_button(events_tx);
            navigation.sync_back_button();
        }

        let history = HistoryStore::for_session(session.identity(), now);

        info!(
            host_present = bridge.is_present(),
            guest = session.identity().is_guest(),
            history_items = history.len(),
            "app shell mounted"
        );

        Self {
            bridge,
            config,
            session,
            navigation,
            history,
            host_events,
        }
    }

    pub fn is_host_present(&self) -> bool {
        self.bridge.is_present()
    }

    pub fn current_screen(&self) -> Screen {
        self.navigation.current()
    }

    pub fn back_button_visible(&self) -> bool {
        self.navigation.back_button_visible()
    }

    pub fn identity(&self) -> &Identity {
        self.session.identity()
    }

    pub fn history(&self) -> &[HistoryItem] {
        self.history.items()
    }

    pub fn handle_action(&mut self, action: UiAction) {
        debug!(action = action.name(), "handling ui action");
        match action {
            UiAction::Navigate(screen) => self.navigation.navigate_to(screen),
            UiAction::OpenAssistant => self.navigation.open_bot(&self.config.assistant_bot),
            UiAction::OpenSupport => self.navigation.open_bot(&self.config.support_bot),
        }
    }

    pub fn handle_host_event(&mut self, event: HostEvent) {
        debug!(?event, "handling host event");
        match event {
            HostEvent::BackButtonClicked => self.navigation.handle_back_button(),
        }
    }

    /// Applies every queued host event to the live state; returns how many ran.
    pub fn pump_host_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.host_events.try_recv() {
            self.handle_host_event(event);
            handled += 1;
        }
        handled
    }

    pub fn view(&self) -> ShellView<'_> {
        if !self.bridge.is_present() {
            return ShellView::HostRequired;
        }
        ShellView::Screen(ScreenView {
            screen: self.navigation.current(),
            identity: self.session.identity(),
            history: self.history.items(),
            back_button_visible: self.navigation.back_button_visible(),
        })
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.view());
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
