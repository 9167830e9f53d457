//! # Planning Calculators
//!
//! Each calculator follows the same pattern:
//!
//! - `*Input` - Named numeric inputs (JSON-serializable)
//! - `*Result` - Derived output (JSON-serializable) with a `display()` string
//! - `calculate(input) -> *Result` - Pure linear formula, no bounds checking
//!
//! [`CalculatorKind`] ties a calculator to its group key on the page
//! (`data-model="budget"`) and to the field names its form must provide.
//!
//! ## Available Calculations
//!
//! - [`budget`] - Program budget estimate (millions)
//! - [`transfer`] - Transfer-pressure score with risk bucket

pub mod budget;
pub mod transfer;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use budget::{BudgetInput, BudgetResult};
pub use transfer::{RiskLevel, TransferInput, TransferResult};

/// Named numeric values read from a calculator group's controls.
///
/// Keeps insertion order so diagnostics list fields the way the form does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValues {
    entries: Vec<(String, f64)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Value of a field, or `NaN` when the group has no such field.
    ///
    /// The `NaN` flows through the formula and shows up as `NaN` in the
    /// rendered output instead of aborting the recompute.
    pub fn get(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(f64::NAN, |(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (name, value) in iter {
            values.set(name, value);
        }
        values
    }
}

/// Format a number with exactly one decimal place.
///
/// Rounds the exact binary value to the nearest tenth, with ties going away
/// from zero. `-0.0` prints as `0.0`, while small negatives that round to
/// zero keep their sign (`-0.04` prints as `-0.0`). Non-finite values print
/// as `NaN`, `Infinity` or `-Infinity`.
pub fn to_fixed_1(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return format!("{}Infinity", sign);
    }

    // The only exact ties at one decimal are x.25 and x.75, i.e. an odd
    // multiple of a quarter. Everything else formats correctly as-is.
    let quarters = magnitude * 4.0;
    let digits = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let whole = magnitude.trunc();
        let tenth = if magnitude - whole == 0.25 { 3 } else { 8 };
        format!("{:.0}.{}", whole, tenth)
    } else {
        format!("{:.1}", magnitude)
    };
    format!("{}{}", sign, digits)
}

/// The calculator groups wired into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Budget,
    Transfer,
}

impl CalculatorKind {
    /// All groups, in page order
    pub const ALL: [CalculatorKind; 2] = [CalculatorKind::Budget, CalculatorKind::Transfer];

    /// Group key used in `data-model` / `data-result` attributes
    pub fn key(&self) -> &'static str {
        match self {
            CalculatorKind::Budget => "budget",
            CalculatorKind::Transfer => "transfer",
        }
    }

    /// Section heading shown above the form
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorKind::Budget => "Program Budget Model",
            CalculatorKind::Transfer => "Transfer Pressure Model",
        }
    }

    /// Field names the group's form is expected to provide
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            CalculatorKind::Budget => &budget::FIELDS,
            CalculatorKind::Transfer => &transfer::FIELDS,
        }
    }

    /// Selector for the group's form container
    pub fn container_selector(&self) -> String {
        format!("[data-model=\"{}\"]", self.key())
    }

    /// Selector for the group's output element
    pub fn output_selector(&self) -> String {
        format!("[data-result=\"{}\"]", self.key())
    }

    /// Run the group's formula over the given values.
    pub fn evaluate(&self, values: &FieldValues) -> CalculationResult {
        match self {
            CalculatorKind::Budget => {
                CalculationResult::Budget(budget::calculate(&BudgetInput::from_fields(values)))
            }
            CalculatorKind::Transfer => {
                CalculationResult::Transfer(transfer::calculate(&TransferInput::from_fields(values)))
            }
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Output of any calculator group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationResult {
    Budget(BudgetResult),
    Transfer(TransferResult),
}

impl CalculationResult {
    /// Text written into the group's output element
    pub fn display(&self) -> String {
        match self {
            CalculationResult::Budget(r) => r.display(),
            CalculationResult::Transfer(r) => r.display(),
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationResult::Budget(_) => CalculatorKind::Budget,
            CalculationResult::Transfer(_) => CalculatorKind::Transfer,
        }
    }
}
