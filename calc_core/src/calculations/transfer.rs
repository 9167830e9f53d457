//! # Transfer Pressure Score
//!
//! Weighted sum of seven pressure factors:
//!
//! | Factor   | Weight |
//! |----------|--------|
//! | minutes  | 0.30   |
//! | nil      | 0.20   |
//! | trust    | 0.15   |
//! | style    | 0.10   |
//! | losing   | 0.10   |
//! | academic | 0.10   |
//! | peer     | 0.05   |
//!
//! The weights sum to 1.00, so factors on a 0-100 scale produce a 0-100
//! score. Inputs are not clamped.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::transfer::{calculate, RiskLevel, TransferInput};
//!
//! let input = TransferInput {
//!     minutes: 80.0,
//!     nil: 50.0,
//!     trust: 40.0,
//!     style: 30.0,
//!     losing: 20.0,
//!     academic: 60.0,
//!     peer: 10.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.risk, RiskLevel::High);
//! assert_eq!(result.display(), "Pressure Score: 51.5 / 100 (High Risk)");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{to_fixed_1, FieldValues};

/// Field names, in form order
pub const FIELDS: [&str; 7] = ["minutes", "nil", "trust", "style", "losing", "academic", "peer"];

/// Factor weights, aligned with [`FIELDS`]
pub const WEIGHTS: [f64; 7] = [0.30, 0.20, 0.15, 0.10, 0.10, 0.10, 0.05];

/// Pressure factors, each nominally on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferInput {
    /// Dissatisfaction with playing time
    pub minutes: f64,
    /// NIL offers elsewhere
    pub nil: f64,
    /// Erosion of trust in the coaching staff
    pub trust: f64,
    /// Poor fit with the team's style of play
    pub style: f64,
    /// Team losing record
    pub losing: f64,
    /// Academic friction
    pub academic: f64,
    /// Teammates already in the portal
    pub peer: f64,
}

impl TransferInput {
    /// Read inputs by field name; absent fields come through as `NaN`.
    pub fn from_fields(values: &FieldValues) -> Self {
        TransferInput {
            minutes: values.get("minutes"),
            nil: values.get("nil"),
            trust: values.get("trust"),
            style: values.get("style"),
            losing: values.get("losing"),
            academic: values.get("academic"),
            peer: values.get("peer"),
        }
    }

    fn factors(&self) -> [f64; 7] {
        [
            self.minutes,
            self.nil,
            self.trust,
            self.style,
            self.losing,
            self.academic,
            self.peer,
        ]
    }
}

/// Risk bucket for a pressure score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Bucket a score. Thresholds are checked high to low and the lower
    /// bound is inclusive; anything that fails every check (including `NaN`)
    /// is `Low`.
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            RiskLevel::VeryHigh
        } else if score >= 45.0 {
            RiskLevel::High
        } else if score >= 30.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pressure score and its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferResult {
    pub score: f64,
    pub risk: RiskLevel,
}

impl TransferResult {
    pub fn display(&self) -> String {
        format!("Pressure Score: {} / 100 ({} Risk)", to_fixed_1(self.score), self.risk)
    }
}

/// Compute the weighted pressure score and its risk bucket.
pub fn calculate(input: &TransferInput) -> TransferResult {
    let score: f64 = input
        .factors()
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(factor, weight)| factor * weight)
        .sum();
    TransferResult {
        score,
        risk: RiskLevel::from_score(score),
    }
}
