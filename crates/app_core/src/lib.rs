pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod navigation;
pub mod session;
pub mod shell;
pub mod view;

pub use config::ShellConfig;
pub use error::ConfigError;
pub use events::UiAction;
pub use history::HistoryStore;
pub use navigation::NavigationController;
pub use session::{resolve_identity, SessionContext};
pub use shell::AppShell;
pub use view::{Renderer, ScreenView, ShellView};
