//! # Document Model
//!
//! A small in-memory element tree standing in for the hosting page. The list
//! renderer appends into it, the form binder reads input values from it and
//! writes output text back, and the front ends walk it to draw the page.
//!
//! Elements live in an arena owned by [`Document`] and are addressed by
//! [`ElementId`]. Ids stay valid for the document's lifetime; detached
//! elements are simply unreachable from the root.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::dom::{Document, ElementSpec};
//!
//! let mut doc = Document::new();
//! let list = doc.insert(doc.root(), ElementSpec::new("ol").class("timeline"));
//! doc.insert(list, ElementSpec::new("li").text("Policy phase"));
//!
//! let found = doc.query_selector(".timeline").unwrap();
//! assert_eq!(found, list);
//! assert_eq!(doc.children(list).len(), 1);
//! ```

mod selector;

pub use selector::Selector;

/// Handle to an element inside a [`Document`].
///
/// Only a document hands these out; an id is meaningful only for the
/// document that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// A single element: tag, attributes, own text, and (for inputs) a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    value: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            text: String::new(),
            value: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// The element's own text, excluding descendants
    pub fn own_text(&self) -> &str {
        &self.text
    }

    /// Current value of an input control
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }
}

/// Declarative description of an element subtree, materialized with
/// [`Document::insert`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSpec {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub value: String,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        ElementSpec {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Arena-backed element tree with a single `body` root.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the `body` root.
    pub fn new() -> Self {
        Document {
            elements: vec![Element::new("body")],
            root: ElementId(0),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Checked lookup for ids that may come from elsewhere.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Whether `id` is a strict descendant of `ancestor`.
    pub fn is_within(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = self.get(id).and_then(Element::parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.get(parent).and_then(Element::parent);
        }
        false
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag));
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(old_parent) = self.element(child).parent {
            self.element_mut(old_parent).children.retain(|c| *c != child);
        }
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    /// Materialize a spec subtree and append it under `parent`.
    pub fn insert(&mut self, parent: ElementId, spec: ElementSpec) -> ElementId {
        let id = self.create_element(&spec.tag);
        {
            let element = self.element_mut(id);
            for (name, value) in &spec.attributes {
                element.set_attribute(name, value);
            }
            element.text = spec.text;
            element.value = spec.value;
        }
        for child in spec.children {
            self.insert(id, child);
        }
        self.append_child(parent, id);
        id
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.element(id).children
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        self.element_mut(id).set_attribute(name, value);
    }

    /// Replace the element's content with plain text, dropping all children.
    pub fn set_text_content(&mut self, id: ElementId, text: impl Into<String>) {
        let children = std::mem::take(&mut self.element_mut(id).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
        self.element_mut(id).text = text.into();
    }

    /// Own text followed by all descendant text, in document order.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let element = self.element(id);
        out.push_str(&element.text);
        for child in &element.children {
            self.collect_text(*child, out);
        }
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.element(id).value()
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.element_mut(id).value = value.into();
    }

    /// All descendants of `scope` in pre-order, excluding `scope` itself.
    pub fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Descendants of `scope` matching a parsed selector, in document order.
    pub fn select_all(&self, scope: ElementId, selector: &Selector) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| selector.matches(self.element(*id)))
            .collect()
    }

    /// First element under the root matching `selector`.
    ///
    /// An unparseable selector matches nothing.
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.query_selector_within(self.root, selector)
    }

    pub fn query_selector_within(&self, scope: ElementId, selector: &str) -> Option<ElementId> {
        self.query_selector_all_within(scope, selector).into_iter().next()
    }

    pub fn query_selector_all_within(&self, scope: ElementId, selector: &str) -> Vec<ElementId> {
        match Selector::parse(selector) {
            Ok(parsed) => self.select_all(scope, &parsed),
            Err(e) => {
                tracing::warn!("{}", e);
                Vec::new()
            }
        }
    }
}
