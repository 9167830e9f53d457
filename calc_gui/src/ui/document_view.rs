//! Document View
//!
//! Walks the page document and maps each element to an Iced widget:
//! - `li.step` -> numbered timeline row
//! - `article.layer` -> bordered card
//! - `label` + `input` -> labeled text input wired to [`Message::InputChanged`]
//! - `p.result` -> calculator output line
//! - headings and text elements -> sized text
//! - anything else -> column of its children

use iced::widget::{column, container, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Padding};

use calc_core::dom::{Document, ElementId};

use crate::Message;

/// Render the whole document body
pub fn view_document(doc: &Document) -> Column<'_, Message> {
    doc.children(doc.root())
        .iter()
        .fold(column![].spacing(18), |body, child| {
            body.push(view_element(doc, *child))
        })
}

fn view_element(doc: &Document, id: ElementId) -> Element<'_, Message> {
    let element = doc.element(id);
    match element.tag() {
        "h1" => text(element.own_text()).size(26).into(),
        "h2" => text(element.own_text()).size(18).into(),
        "h3" => text(element.own_text()).size(14).into(),
        "li" if element.has_class("step") => view_timeline_step(doc, id),
        "article" if element.has_class("layer") => view_layer_card(doc, id),
        "div" if element.has_class("milestone") => {
            text(format!("• {}", element.own_text())).size(12).into()
        }
        "label" => view_field(doc, id),
        "input" => view_input(doc, id),
        "p" if element.has_class("result") => text(doc.text_content(id))
            .size(14)
            .color([0.15, 0.45, 0.25])
            .into(),
        "p" if element.has_class("subtitle") => {
            text(element.own_text()).size(12).color([0.5, 0.5, 0.5]).into()
        }
        "p" | "span" => text(element.own_text()).size(12).into(),
        _ => view_children(doc, id),
    }
}

fn view_children(doc: &Document, id: ElementId) -> Element<'_, Message> {
    let element = doc.element(id);
    let mut content: Column<'_, Message> = column![].spacing(6);
    if !element.own_text().is_empty() {
        content = content.push(text(element.own_text()).size(12));
    }
    for child in doc.children(id) {
        content = content.push(view_element(doc, *child));
    }
    content.into()
}

/// Numbered badge followed by the step label
fn view_timeline_step(doc: &Document, id: ElementId) -> Element<'_, Message> {
    let number = doc
        .query_selector_within(id, ".num")
        .map(|num| doc.text_content(num))
        .unwrap_or_default();
    let label: String = doc
        .children(id)
        .iter()
        .filter(|child| !doc.element(**child).has_class("num"))
        .map(|child| doc.text_content(*child))
        .collect();

    row![
        container(text(number).size(11))
            .width(Length::Fixed(28.0))
            .padding(Padding::from([2, 6]))
            .style(container::rounded_box),
        text(label).size(12),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn view_layer_card(doc: &Document, id: ElementId) -> Element<'_, Message> {
    container(view_children(doc, id))
        .width(Length::Fill)
        .padding(8)
        .style(container::bordered_box)
        .into()
}

/// Label text on the left, the wrapped input(s) on the right
fn view_field(doc: &Document, id: ElementId) -> Element<'_, Message> {
    let element = doc.element(id);
    doc.children(id)
        .iter()
        .fold(
            row![text(element.own_text()).size(11).width(Length::Fixed(180.0))],
            |field, child| field.push(view_element(doc, *child)),
        )
        .align_y(Alignment::Center)
        .into()
}

fn view_input(doc: &Document, id: ElementId) -> Element<'_, Message> {
    text_input("0", doc.value(id))
        .on_input(move |value| Message::InputChanged(id, value))
        .width(Length::Fixed(120.0))
        .padding(4)
        .size(11)
        .into()
}
