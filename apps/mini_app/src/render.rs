use app_core::{Renderer, ScreenView, ShellView};
use shared::{
    catalog::{APP_NAME, APP_VERSION},
    domain::Screen,
};

#[derive(Debug, Default)]
pub struct TextRenderer {
    frames: Vec<String>,
}

impl TextRenderer {
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, view: &ShellView<'_>) {
        self.frames.push(render_view(view));
    }
}

pub fn render_view(view: &ShellView<'_>) -> String {
    match view {
        ShellView::HostRequired => {
            format!("{APP_NAME}\nПожалуйста, откройте приложение в Telegram\n")
        }
        ShellView::Screen(screen_view) => render_screen(screen_view),
    }
}

fn render_screen(view: &ScreenView<'_>) -> String {
    let back = if view.back_button_visible { "shown" } else { "hidden" };
    let mut lines = vec![format!("[{}] back button {back}", view.screen)];

    match view.screen {
        Screen::Home => {
            lines.push(format!("{APP_NAME} | {}", view.identity.display_name));
            lines.extend(
                ["> НАСТРОИТЬ МАСКУ", "> ИИ ПОМОЩНИК", "> ПОДДЕРЖКА 24/7"].map(String::from),
            );
        }
        Screen::Setup => {
            lines.push("Видеоинструкции".to_string());
            lines.extend(
                view.mask_models()
                    .iter()
                    .map(|model| format!("- {} (video {})", model.name, model.video.video_id)),
            );
        }
        Screen::History => {
            lines.push("История запросов".to_string());
            if view.history.is_empty() {
                lines.push("У вас еще нет запросов к ассистенту".to_string());
                lines.push("> Начать диалог".to_string());
            }
            for item in view.history {
                lines.push(format!(
                    "- {} [{}]",
                    item.question,
                    item.created_at.format("%Y-%m-%d %H:%M")
                ));
                lines.push(format!("  {}", item.answer));
            }
        }
        Screen::Info => {
            lines.push("О приложении".to_string());
            lines.push(format!("{APP_NAME} {APP_VERSION}"));
            lines.extend(
                view.features()
                    .iter()
                    .map(|feature| format!("+ {}: {}", feature.title, feature.description)),
            );
        }
    }

    let tabs: Vec<String> = view
        .tabs()
        .map(|(tab, active)| {
            if active {
                format!("*{}*", tab_label(tab))
            } else {
                tab_label(tab).to_string()
            }
        })
        .collect();
    lines.push(tabs.join(" | "));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn tab_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Главная",
        Screen::History => "История",
        Screen::Info => "Информация",
        Screen::Setup => "Настройка",
    }
}
