use shared::domain::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Navigate(Screen),
    OpenAssistant,
    OpenSupport,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Navigate(_) => "navigate",
            UiAction::OpenAssistant => "open_assistant",
            UiAction::OpenSupport => "open_support",
        }
    }
}
