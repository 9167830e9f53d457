//! # Reactive Form Binder
//!
//! Connects a calculator group's input controls to its output element.
//!
//! Binding a group:
//!
//! 1. finds the form container `[data-model="<group>"]`
//! 2. finds the output element `[data-result="<group>"]`
//! 3. maps every `input` inside the container by its `name`
//! 4. computes once so the output is never blank
//!
//! After that, every input event inside the group's container re-reads
//! *all* of the group's current values and overwrites the output text
//! wholesale. A later event always supersedes an earlier one.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::binder::bind_group;
//! use calc_core::calculations::CalculatorKind;
//! use calc_core::dom::{Document, ElementSpec};
//!
//! let mut doc = Document::new();
//! let form = doc.insert(doc.root(), ElementSpec::new("form").attr("data-model", "budget"));
//! for name in CalculatorKind::Budget.field_names() {
//!     doc.insert(form, ElementSpec::new("input").attr("name", *name).value("1"));
//! }
//! let output = doc.insert(doc.root(), ElementSpec::new("p").attr("data-result", "budget"));
//!
//! let group = bind_group(&mut doc, CalculatorKind::Budget).unwrap();
//! assert_eq!(doc.text_content(output), "Estimated Budget: $3.0M");
//! assert_eq!(group.controls().len(), 7);
//! ```

use crate::calculations::{CalculationResult, CalculatorKind, FieldValues};
use crate::coerce::coerce;
use crate::dom::{Document, ElementId};
use crate::errors::{CalcError, CalcResult};

/// Ordered mapping from control name to control element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controls {
    entries: Vec<(String, ElementId)>,
}

impl Controls {
    pub fn get(&self, name: &str) -> Option<ElementId> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ElementId)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), *id))
    }
}

/// Map every named `input` under `container` by its `name` attribute.
///
/// Document order is kept. Inputs without a name are skipped; when two
/// inputs share a name the later one wins but keeps the first one's slot.
pub fn collect_controls(doc: &Document, container: ElementId) -> Controls {
    let mut controls = Controls::default();
    for id in doc.query_selector_all_within(container, "input") {
        let Some(name) = doc.element(id).attribute("name") else {
            tracing::debug!(?id, "skipping unnamed input");
            continue;
        };
        match controls.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = id,
            None => controls.entries.push((name.to_string(), id)),
        }
    }
    controls
}

/// A calculator group wired to its controls and output element.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundGroup {
    kind: CalculatorKind,
    container: ElementId,
    output: ElementId,
    controls: Controls,
}

impl BoundGroup {
    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn output(&self) -> ElementId {
        self.output
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Current coerced value of every bound control.
    pub fn read_values(&self, doc: &Document) -> FieldValues {
        self.controls
            .iter()
            .map(|(name, id)| (name, coerce(doc.value(id))))
            .collect()
    }

    /// Re-read all controls, run the calculator, and overwrite the output text.
    pub fn recompute(&self, doc: &mut Document) -> CalculationResult {
        let values = self.read_values(doc);
        let result = self.kind.evaluate(&values);
        let text = result.display();
        tracing::trace!(group = %self.kind, output = %text, "recomputed");
        doc.set_text_content(self.output, text);
        result
    }

    /// Input-event hook: recompute when `element` is an `input` inside this
    /// group's container. Unnamed inputs contribute no value but still
    /// trigger the recompute.
    pub fn handle_input(&self, doc: &mut Document, element: ElementId) -> Option<CalculationResult> {
        let is_input = doc.get(element).is_some_and(|e| e.tag() == "input");
        if is_input && doc.is_within(self.container, element) {
            Some(self.recompute(doc))
        } else {
            None
        }
    }
}

/// Bind a calculator group and perform the initial computation.
///
/// Fails with [`CalcError::ElementNotFound`] when the group's container or
/// output element is absent. Fields the formula needs but the form lacks are
/// logged; they read as `NaN` at compute time.
pub fn bind_group(doc: &mut Document, kind: CalculatorKind) -> CalcResult<BoundGroup> {
    let container_selector = kind.container_selector();
    let container = doc
        .query_selector(&container_selector)
        .ok_or_else(|| CalcError::element_not_found(container_selector))?;

    let output_selector = kind.output_selector();
    let output = doc
        .query_selector(&output_selector)
        .ok_or_else(|| CalcError::element_not_found(output_selector))?;

    let controls = collect_controls(doc, container);
    for field in kind.field_names() {
        if controls.get(field).is_none() {
            tracing::warn!(group = %kind, field, "form has no control for field; output will read NaN");
        }
    }

    let group = BoundGroup {
        kind,
        container,
        output,
        controls,
    };
    group.recompute(doc);
    tracing::debug!(group = %kind, controls = group.controls.len(), "bound calculator group");
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ElementSpec;

    fn transfer_doc(values: &[(&str, &str)]) -> (Document, ElementId) {
        let mut doc = Document::new();
        let form = doc.insert(doc.root(), ElementSpec::new("form").attr("data-model", "transfer"));
        for (name, value) in values {
            doc.insert(
                form,
                ElementSpec::new("label")
                    .text(*name)
                    .child(ElementSpec::new("input").attr("name", *name).value(*value)),
            );
        }
        let output = doc.insert(doc.root(), ElementSpec::new("output").attr("data-result", "transfer"));
        (doc, output)
    }

    const EXAMPLE: [(&str, &str); 7] = [
        ("minutes", "80"),
        ("nil", "50"),
        ("trust", "40"),
        ("style", "30"),
        ("losing", "20"),
        ("academic", "60"),
        ("peer", "10"),
    ];

    #[test]
    fn test_initial_compute_on_bind() {
        let (mut doc, output) = transfer_doc(&EXAMPLE);
        bind_group(&mut doc, CalculatorKind::Transfer).unwrap();
        assert_eq!(doc.text_content(output), "Pressure Score: 51.5 / 100 (High Risk)");
    }

    #[test]
    fn test_input_event_reads_current_values() {
        let (mut doc, output) = transfer_doc(&EXAMPLE);
        let group = bind_group(&mut doc, CalculatorKind::Transfer).unwrap();

        let minutes = group.controls().get("minutes").unwrap();
        doc.set_value(minutes, "100");
        let result = group.handle_input(&mut doc, minutes).unwrap();

        // 51.5 + 0.30 * 20
        assert_eq!(result.display(), "Pressure Score: 57.5 / 100 (High Risk)");
        assert_eq!(doc.text_content(output), "Pressure Score: 57.5 / 100 (High Risk)");
    }

    #[test]
    fn test_foreign_element_is_ignored() {
        let (mut doc, output) = transfer_doc(&EXAMPLE);
        let group = bind_group(&mut doc, CalculatorKind::Transfer).unwrap();
        let stray = doc.insert(doc.root(), ElementSpec::new("input").attr("name", "minutes"));
        assert!(group.handle_input(&mut doc, stray).is_none());
        assert_eq!(doc.text_content(output), "Pressure Score: 51.5 / 100 (High Risk)");
    }

    #[test]
    fn test_blank_and_garbage_values_coerce_to_zero() {
        let mut values = EXAMPLE;
        values[0] = ("minutes", "");
        values[1] = ("nil", "a lot");
        let (mut doc, output) = transfer_doc(&values);
        bind_group(&mut doc, CalculatorKind::Transfer).unwrap();
        // 51.5 - 24 - 10
        assert_eq!(doc.text_content(output), "Pressure Score: 17.5 / 100 (Low Risk)");
    }

    #[test]
    fn test_missing_control_renders_nan() {
        let (mut doc, output) = transfer_doc(&EXAMPLE[..6]);
        bind_group(&mut doc, CalculatorKind::Transfer).unwrap();
        assert_eq!(doc.text_content(output), "Pressure Score: NaN / 100 (Low Risk)");
    }

    #[test]
    fn test_missing_output_fails_lookup() {
        let mut doc = Document::new();
        doc.insert(doc.root(), ElementSpec::new("form").attr("data-model", "budget"));
        let err = bind_group(&mut doc, CalculatorKind::Budget).unwrap_err();
        assert_eq!(err, CalcError::element_not_found("[data-result=\"budget\"]"));
    }

    #[test]
    fn test_missing_container_fails_lookup() {
        let mut doc = Document::new();
        doc.insert(doc.root(), ElementSpec::new("p").attr("data-result", "budget"));
        let err = bind_group(&mut doc, CalculatorKind::Budget).unwrap_err();
        assert_eq!(err.error_code(), "ELEMENT_NOT_FOUND");
    }

    #[test]
    fn test_unnamed_input_still_triggers_recompute() {
        let (mut doc, output) = transfer_doc(&EXAMPLE);
        let form = doc.query_selector("[data-model=\"transfer\"]").unwrap();
        let unnamed = doc.insert(form, ElementSpec::new("input").value("3"));
        let group = bind_group(&mut doc, CalculatorKind::Transfer).unwrap();
        assert_eq!(group.controls().len(), 7);
        assert_eq!(group.container(), form);

        let minutes = group.controls().get("minutes").unwrap();
        doc.set_value(minutes, "0");
        doc.set_value(unnamed, "9");
        let result = group.handle_input(&mut doc, unnamed).unwrap();
        // 51.5 - 0.30 * 80
        assert_eq!(result.display(), "Pressure Score: 27.5 / 100 (Low Risk)");
        assert_eq!(doc.text_content(output), "Pressure Score: 27.5 / 100 (Low Risk)");
    }

    #[test]
    fn test_non_input_inside_container_is_ignored() {
        let (mut doc, _) = transfer_doc(&EXAMPLE);
        let group = bind_group(&mut doc, CalculatorKind::Transfer).unwrap();
        let label = doc.query_selector_within(group.container(), "label").unwrap();
        assert!(group.handle_input(&mut doc, label).is_none());
    }

    #[test]
    fn test_collect_controls_order_and_duplicates() {
        let mut doc = Document::new();
        let form = doc.insert(
            doc.root(),
            ElementSpec::new("form")
                .child(ElementSpec::new("input").attr("name", "b"))
                .child(ElementSpec::new("input"))
                .child(ElementSpec::new("input").attr("name", "a"))
                .child(ElementSpec::new("input").attr("name", "b").value("late")),
        );
        let controls = collect_controls(&doc, form);
        let names: Vec<_> = controls.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(doc.value(controls.get("b").unwrap()), "late");
    }
}
