//! Status Bar (Bottom)
//!
//! Displays:
//! - Bound calculator groups
//! - Setup failures (if any step could not find its element)
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::Page;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(page: &'a Page, status: &'a str) -> Element<'a, Message> {
    let bound: Vec<String> = page.groups().iter().map(|g| g.kind().to_string()).collect();
    let bound_info = format!("Models: {}", bound.join(", "));

    let failure_info = if page.failures().is_empty() {
        String::new()
    } else {
        let stages: Vec<String> = page.failures().iter().map(|f| f.stage.to_string()).collect();
        format!(" [Unavailable: {}]", stages.join(", "))
    };

    row![
        text(bound_info).size(10),
        text(failure_info).size(10).color([0.6, 0.3, 0.0]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
