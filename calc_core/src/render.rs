//! # List Renderer
//!
//! Turns an ordered sequence into child elements of a container, one child
//! per item, in sequence order. The per-item shape comes from a template
//! closure returning an [`ElementSpec`].
//!
//! Rendering appends; it never clears what the container already holds.
//! Rendering the same list twice into one container therefore duplicates
//! every entry.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::content;
//! use calc_core::dom::{Document, ElementSpec};
//! use calc_core::render::{render_list, timeline_item};
//!
//! let mut doc = Document::new();
//! let list = doc.insert(doc.root(), ElementSpec::new("ol").class("timeline"));
//!
//! let steps = content::annual_timeline();
//! let added = render_list(&mut doc, list, &steps, timeline_item);
//! assert_eq!(added.len(), steps.len());
//! ```

use crate::content::{self, Layer, Milestone, TimelineStep};
use crate::dom::{Document, ElementId, ElementSpec};
use crate::errors::{CalcError, CalcResult};

/// Container for the annual timeline
pub const TIMELINE_SELECTOR: &str = ".timeline";
/// Container for the layer cards
pub const LAYERS_SELECTOR: &str = "#layers";
/// Container for the milestone rows
pub const MILESTONES_SELECTOR: &str = "#milestones";

/// Append one child per item to `container`, in order.
///
/// Returns the ids of the appended children.
pub fn render_list<T, F>(doc: &mut Document, container: ElementId, items: &[T], template: F) -> Vec<ElementId>
where
    F: Fn(&T) -> ElementSpec,
{
    items
        .iter()
        .map(|item| doc.insert(container, template(item)))
        .collect()
}

/// `li.step` with the step number and label.
pub fn timeline_item(step: &TimelineStep) -> ElementSpec {
    ElementSpec::new("li")
        .class("step")
        .child(ElementSpec::new("span").class("num").text(step.order.to_string()))
        .child(ElementSpec::new("span").text(step.label))
}

/// `article.layer` with a heading and description.
pub fn layer_card(layer: &Layer) -> ElementSpec {
    ElementSpec::new("article")
        .class("layer")
        .child(ElementSpec::new("h3").text(layer.name))
        .child(ElementSpec::new("p").text(layer.description))
}

/// `div.milestone` holding the milestone text.
pub fn milestone_row(milestone: &Milestone) -> ElementSpec {
    ElementSpec::new("div").class("milestone").text(milestone.text)
}

fn lookup(doc: &Document, selector: &str) -> CalcResult<ElementId> {
    doc.query_selector(selector)
        .ok_or_else(|| CalcError::element_not_found(selector))
}

/// Render the annual timeline into `.timeline`.
pub fn render_timeline(doc: &mut Document) -> CalcResult<Vec<ElementId>> {
    let container = lookup(doc, TIMELINE_SELECTOR)?;
    let added = render_list(doc, container, &content::annual_timeline(), timeline_item);
    tracing::debug!(count = added.len(), "rendered timeline");
    Ok(added)
}

/// Render the layer cards into `#layers`.
pub fn render_layers(doc: &mut Document) -> CalcResult<Vec<ElementId>> {
    let container = lookup(doc, LAYERS_SELECTOR)?;
    let added = render_list(doc, container, &content::LAYERS, layer_card);
    tracing::debug!(count = added.len(), "rendered layers");
    Ok(added)
}

/// Render the milestone rows into `#milestones`.
pub fn render_milestones(doc: &mut Document) -> CalcResult<Vec<ElementId>> {
    let container = lookup(doc, MILESTONES_SELECTOR)?;
    let added = render_list(doc, container, &content::MILESTONES, milestone_row);
    tracing::debug!(count = added.len(), "rendered milestones");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(spec: ElementSpec) -> (Document, ElementId) {
        let mut doc = Document::new();
        let container = doc.insert(doc.root(), spec);
        (doc, container)
    }

    #[test]
    fn test_timeline_items_numbered_in_order() {
        let (mut doc, list) = doc_with(ElementSpec::new("ol").class("timeline"));
        let added = render_timeline(&mut doc).unwrap();

        assert_eq!(added.len(), 11);
        assert_eq!(doc.children(list), added.as_slice());
        for (i, id) in added.iter().enumerate() {
            let num = doc.query_selector_within(*id, ".num").unwrap();
            assert_eq!(doc.text_content(num), (i + 1).to_string());
        }
        assert_eq!(doc.text_content(added[3]), "4NIL market opening");
    }

    #[test]
    fn test_rendering_twice_duplicates() {
        let (mut doc, root) = doc_with(ElementSpec::new("section").id("milestones"));
        render_milestones(&mut doc).unwrap();
        assert_eq!(doc.children(root).len(), 5);
        render_milestones(&mut doc).unwrap();
        assert_eq!(doc.children(root).len(), 10);

        let first = doc.text_content(doc.children(root)[0]);
        let sixth = doc.text_content(doc.children(root)[5]);
        assert_eq!(first, sixth);
    }

    #[test]
    fn test_existing_children_are_kept() {
        let (mut doc, root) = doc_with(
            ElementSpec::new("div")
                .id("layers")
                .child(ElementSpec::new("h2").text("Architecture")),
        );
        render_layers(&mut doc).unwrap();
        let children = doc.children(root);
        assert_eq!(children.len(), 6);
        assert_eq!(doc.element(children[0]).tag(), "h2");
        assert_eq!(doc.text_content(children[1]), "WorldConferences, policy rules, realignment, media economics.");
    }

    #[test]
    fn test_layer_card_shape() {
        let spec = layer_card(&content::LAYERS[3]);
        assert_eq!(spec.tag, "article");
        assert_eq!(spec.children[0].tag, "h3");
        assert_eq!(spec.children[0].text, "Game");
        assert_eq!(spec.children[1].tag, "p");
    }

    #[test]
    fn test_missing_container_is_lookup_error() {
        let mut doc = Document::new();
        let err = render_timeline(&mut doc).unwrap_err();
        assert_eq!(err, CalcError::element_not_found(".timeline"));
    }

    #[test]
    fn test_generic_render_empty_sequence() {
        let (mut doc, list) = doc_with(ElementSpec::new("ul"));
        let items: [&str; 0] = [];
        let added = render_list(&mut doc, list, &items, |s| ElementSpec::new("li").text(*s));
        assert!(added.is_empty());
        assert!(doc.children(list).is_empty());
    }
}
