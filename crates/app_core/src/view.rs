use shared::{
    catalog::{FEATURES, MASK_MODELS},
    domain::{Feature, HistoryItem, Identity, MaskModel, Screen},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView<'a> {
    /// No host detected: only the "open in the messenger" notice is shown.
    HostRequired,
    Screen(ScreenView<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenView<'a> {
    pub screen: Screen,
    pub identity: &'a Identity,
    pub history: &'a [HistoryItem],
    pub back_button_visible: bool,
}

impl ScreenView<'_> {
    /// Tab bar entries paired with whether each one is active.
    pub fn tabs(&self) -> impl Iterator<Item = (Screen, bool)> + '_ {
        Screen::TAB_BAR
            .into_iter()
            .map(move |tab| (tab, tab == self.screen))
    }

    pub fn mask_models(&self) -> &'static [MaskModel] {
        &MASK_MODELS
    }

    pub fn features(&self) -> &'static [Feature] {
        &FEATURES
    }
}

/// Presentation collaborator driven by the shell.
pub trait Renderer {
    fn render(&mut self, view: &ShellView<'_>);
}
