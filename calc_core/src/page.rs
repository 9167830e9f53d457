//! # Page Lifecycle
//!
//! [`skeleton`] builds the hosting document: empty list containers plus one
//! form and one output element per calculator group. [`initialize_page`] is
//! the single entry point that renders the content lists into it and binds
//! the calculator groups. There are no load-time side effects anywhere else.
//!
//! Each setup step is isolated. A missing container or output element is
//! recorded as a [`SetupFailure`] and logged, and the remaining steps still
//! run. Losing the budget output does not stop the transfer group from
//! working.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::CalculatorKind;
//! use calc_core::config::PageConfig;
//! use calc_core::page::{initialize_page, skeleton};
//!
//! let mut page = initialize_page(skeleton(&PageConfig::default()));
//! assert!(page.failures().is_empty());
//!
//! page.set_field(CalculatorKind::Budget, "debt", "40").unwrap();
//! assert_eq!(
//!     page.output_text(CalculatorKind::Budget).as_deref(),
//!     Some("Estimated Budget: $25.0M")
//! );
//! ```

use std::fmt;

use crate::binder::{bind_group, BoundGroup};
use crate::calculations::{CalculationResult, CalculatorKind};
use crate::config::PageConfig;
use crate::dom::{Document, ElementId, ElementSpec};
use crate::errors::{CalcError, CalcResult};
use crate::render;

/// Page title shown in the header
pub const PAGE_TITLE: &str = "Courtside Dynasty Roadmap";

const PAGE_SUBTITLE: &str = "College basketball program simulator: yearly loop, architecture, and delivery plan.";

/// Human-readable label for a calculator field.
pub fn field_label(field: &str) -> &str {
    match field {
        "base" => "Base allocation ($M)",
        "tickets" => "Ticket revenue ($M)",
        "media" => "Media rights ($M)",
        "boosters" => "Booster giving ($M)",
        "units" => "Conference units ($M)",
        "debt" => "Debt service ($M)",
        "staffing" => "Staffing ($M)",
        "minutes" => "Minutes dissatisfaction",
        "nil" => "Outside NIL offers",
        "trust" => "Coach trust erosion",
        "style" => "Style-of-play mismatch",
        "losing" => "Losing pressure",
        "academic" => "Academic friction",
        "peer" => "Peer departures",
        other => other,
    }
}

fn format_seed(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn calculator_form(kind: CalculatorKind, config: &PageConfig) -> ElementSpec {
    let fields = kind.field_names().iter().map(|field| {
        ElementSpec::new("label")
            .class("field")
            .text(field_label(field))
            .child(
                ElementSpec::new("input")
                    .attr("type", "number")
                    .attr("name", *field)
                    .value(format_seed(config.default_value(kind, field))),
            )
    });

    ElementSpec::new("form")
        .class("model")
        .attr("data-model", kind.key())
        .child(ElementSpec::new("h3").text(kind.display_name()))
        .children(fields)
}

/// Build the hosting document with empty list containers and seeded forms.
pub fn skeleton(config: &PageConfig) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    doc.insert(
        root,
        ElementSpec::new("header")
            .child(ElementSpec::new("h1").text(PAGE_TITLE))
            .child(ElementSpec::new("p").class("subtitle").text(PAGE_SUBTITLE)),
    );
    doc.insert(
        root,
        ElementSpec::new("section")
            .child(ElementSpec::new("h2").text("Annual Timeline"))
            .child(ElementSpec::new("ol").class("timeline")),
    );
    doc.insert(
        root,
        ElementSpec::new("section")
            .child(ElementSpec::new("h2").text("Architecture Layers"))
            .child(ElementSpec::new("div").id("layers").class("layers")),
    );
    doc.insert(
        root,
        ElementSpec::new("section")
            .child(ElementSpec::new("h2").text("Milestones"))
            .child(ElementSpec::new("div").id("milestones")),
    );

    let mut models = ElementSpec::new("section")
        .class("models")
        .child(ElementSpec::new("h2").text("Planning Models"));
    for kind in CalculatorKind::ALL {
        models = models.child(calculator_form(kind, config)).child(
            ElementSpec::new("p")
                .class("result")
                .attr("data-result", kind.key()),
        );
    }
    doc.insert(root, models);

    doc
}

/// Which setup step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    Timeline,
    Layers,
    Milestones,
    Group(CalculatorKind),
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupStage::Timeline => f.write_str("timeline"),
            SetupStage::Layers => f.write_str("layers"),
            SetupStage::Milestones => f.write_str("milestones"),
            SetupStage::Group(kind) => write!(f, "{} group", kind),
        }
    }
}

/// A setup step that did not complete.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupFailure {
    pub stage: SetupStage,
    pub error: CalcError,
}

/// An initialized page: the document plus its bound calculator groups.
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    groups: Vec<BoundGroup>,
    failures: Vec<SetupFailure>,
}

/// Render the content lists and bind every calculator group.
///
/// Call once per document. Rendering appends, so a second call on the same
/// document duplicates the lists.
pub fn initialize_page(mut document: Document) -> Page {
    let mut failures = Vec::new();

    let renders: [(SetupStage, fn(&mut Document) -> CalcResult<Vec<ElementId>>); 3] = [
        (SetupStage::Timeline, render::render_timeline),
        (SetupStage::Layers, render::render_layers),
        (SetupStage::Milestones, render::render_milestones),
    ];
    for (stage, render_step) in renders {
        if let Err(error) = render_step(&mut document) {
            tracing::warn!(%stage, %error, "render step failed");
            failures.push(SetupFailure { stage, error });
        }
    }

    let mut groups = Vec::new();
    for kind in CalculatorKind::ALL {
        match bind_group(&mut document, kind) {
            Ok(group) => groups.push(group),
            Err(error) => {
                let stage = SetupStage::Group(kind);
                tracing::warn!(%stage, %error, "calculator group not bound");
                failures.push(SetupFailure { stage, error });
            }
        }
    }

    tracing::info!(
        groups = groups.len(),
        failures = failures.len(),
        "page initialized"
    );

    Page {
        document,
        groups,
        failures,
    }
}

impl Page {
    /// Build the default skeleton from `config` and initialize it.
    pub fn load(config: &PageConfig) -> Self {
        initialize_page(skeleton(config))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn groups(&self) -> &[BoundGroup] {
        &self.groups
    }

    pub fn group(&self, kind: CalculatorKind) -> Option<&BoundGroup> {
        self.groups.iter().find(|g| g.kind() == kind)
    }

    pub fn failures(&self) -> &[SetupFailure] {
        &self.failures
    }

    /// Write text into an input and dispatch the input event.
    ///
    /// Returns the results of every group that recomputed (normally one).
    /// An id this page's document never issued is ignored.
    pub fn set_input(&mut self, element: ElementId, text: impl Into<String>) -> Vec<CalculationResult> {
        if self.document.get(element).is_none() {
            tracing::warn!(?element, "input event for unknown element ignored");
            return Vec::new();
        }
        self.document.set_value(element, text);
        self.groups
            .iter()
            .filter_map(|group| group.handle_input(&mut self.document, element))
            .collect()
    }

    /// Write text into a group's field by name.
    pub fn set_field(&mut self, kind: CalculatorKind, field: &str, text: impl Into<String>) -> CalcResult<CalculationResult> {
        let group = self
            .group(kind)
            .ok_or_else(|| CalcError::element_not_found(kind.container_selector()))?;
        let element = group
            .controls()
            .get(field)
            .ok_or_else(|| CalcError::unknown_field(kind.key(), field))?;

        self.set_input(element, text)
            .into_iter()
            .find(|result| result.kind() == kind)
            .ok_or_else(|| CalcError::Internal {
                message: format!("{} group did not recompute for '{}'", kind, field),
            })
    }

    /// Current text of a bound group's output element.
    pub fn output_text(&self, kind: CalculatorKind) -> Option<String> {
        self.group(kind)
            .map(|group| self.document.text_content(group.output()))
    }

    /// Indented text outline of the document, one element per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        write_outline(&self.document, self.document.root(), 0, &mut out);
        out
    }
}

fn write_outline(doc: &Document, id: ElementId, depth: usize, out: &mut String) {
    let element = doc.element(id);
    let indent = "  ".repeat(depth);

    let mut line = format!("{}<{}", indent, element.tag());
    for (name, value) in element.attributes() {
        line.push_str(&format!(" {}=\"{}\"", name, value));
    }
    line.push('>');
    if !element.own_text().is_empty() {
        line.push(' ');
        line.push_str(element.own_text());
    }
    if element.tag() == "input" {
        line.push_str(&format!(" [{}]", element.value()));
    }
    out.push_str(&line);
    out.push('\n');

    for child in doc.children(id) {
        write_outline(doc, *child, depth + 1, out);
    }
}
