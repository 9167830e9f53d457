//! # Courtside GUI Application
//!
//! Graphical view of the roadmap page. The window draws the page document
//! built by `calc_core` and forwards every edit in a calculator field to
//! [`Page::set_input`], which recomputes the group and rewrites its output.
//! Built with Iced for cross-platform support (Windows, macOS, Linux, WASM).

#[cfg(not(target_arch = "wasm32"))]
mod logger;
mod ui;

use iced::widget::{column, container, rule, scrollable};
use iced::{Element, Length, Theme};

use calc_core::dom::ElementId;
use calc_core::{Page, PageConfig};

/// Application state
pub struct App {
    page: Page,
    dark_mode: bool,
    status: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Text typed into a calculator input
    InputChanged(ElementId, String),
    ToggleDarkMode,
}

impl App {
    fn new() -> Self {
        let page = Page::load(&PageConfig::default());
        let status = match page.failures().len() {
            0 => "Ready".to_string(),
            n => format!("{} setup step(s) failed - see log", n),
        };
        App {
            page,
            dark_mode: false,
            status,
        }
    }

    fn title(&self) -> String {
        calc_core::page::PAGE_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::InputChanged(element, text) => {
                let results = self.page.set_input(element, text);
                if let Some(result) = results.last() {
                    tracing::debug!(group = %result.kind(), display = %result.display(), "model updated");
                    self.status = format!("Updated {} model", result.kind());
                }
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let document = self.page.document();

        let body = container(scrollable(
            ui::document_view::view_document(document).padding(12),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box);

        column![
            ui::header::view_header(self.dark_mode),
            body,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.page, &self.status),
        ]
        .spacing(6)
        .padding(10)
        .into()
    }
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    logger::init_gui_logger();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1000.0, 820.0))
        .run()
}
