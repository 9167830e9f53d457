//! # Program Budget Estimate
//!
//! Revenue streams minus obligations, all in millions of dollars:
//!
//! ```text
//! budget = base + tickets + media + boosters + units - debt - staffing
//! ```
//!
//! No bounds checking. A program can run a deficit, so negative results are
//! reported as-is.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::budget::{calculate, BudgetInput};
//!
//! let input = BudgetInput {
//!     base: 50.0,
//!     tickets: 10.0,
//!     media: 5.0,
//!     boosters: 3.0,
//!     units: 2.0,
//!     debt: 4.0,
//!     staffing: 6.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(result.display(), "Estimated Budget: $60.0M");
//! ```

use serde::{Deserialize, Serialize};

use super::{to_fixed_1, FieldValues};

/// Field names, in form order
pub const FIELDS: [&str; 7] = ["base", "tickets", "media", "boosters", "units", "debt", "staffing"];

/// Budget inputs in millions of dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Institutional base allocation
    pub base: f64,
    /// Ticket revenue
    pub tickets: f64,
    /// Media rights share
    pub media: f64,
    /// Booster donations
    pub boosters: f64,
    /// Conference unit distributions
    pub units: f64,
    /// Debt service
    pub debt: f64,
    /// Staff payroll
    pub staffing: f64,
}

impl BudgetInput {
    /// Read inputs by field name; absent fields come through as `NaN`.
    pub fn from_fields(values: &FieldValues) -> Self {
        BudgetInput {
            base: values.get("base"),
            tickets: values.get("tickets"),
            media: values.get("media"),
            boosters: values.get("boosters"),
            units: values.get("units"),
            debt: values.get("debt"),
            staffing: values.get("staffing"),
        }
    }
}

/// Budget estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Net budget in millions; may be negative
    pub total_musd: f64,
}

impl BudgetResult {
    pub fn display(&self) -> String {
        format!("Estimated Budget: ${}M", to_fixed_1(self.total_musd))
    }
}

/// Compute the net budget.
pub fn calculate(input: &BudgetInput) -> BudgetResult {
    let revenue = input.base + input.tickets + input.media + input.boosters + input.units;
    BudgetResult {
        total_musd: revenue - input.debt - input.staffing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BudgetInput {
        BudgetInput {
            base: 50.0,
            tickets: 10.0,
            media: 5.0,
            boosters: 3.0,
            units: 2.0,
            debt: 4.0,
            staffing: 6.0,
        }
    }

    #[test]
    fn test_signed_sum() {
        let result = calculate(&sample());
        assert!((result.total_musd - 60.0).abs() < 1e-9);
        assert_eq!(result.display(), "Estimated Budget: $60.0M");
    }

    #[test]
    fn test_deficit_is_not_clamped() {
        let input = BudgetInput {
            debt: 100.0,
            ..sample()
        };
        let result = calculate(&input);
        assert!((result.total_musd + 36.0).abs() < 1e-9);
        assert_eq!(result.display(), "Estimated Budget: $-36.0M");
    }

    #[test]
    fn test_one_decimal_rounding() {
        let input = BudgetInput {
            base: 12.34,
            ..BudgetInput::default()
        };
        assert_eq!(calculate(&input).display(), "Estimated Budget: $12.3M");
    }

    #[test]
    fn test_half_tenths_round_away_from_zero() {
        for (base, expected) in [
            (0.25, "Estimated Budget: $0.3M"),
            (2.25, "Estimated Budget: $2.3M"),
            (-0.25, "Estimated Budget: $-0.3M"),
        ] {
            let input = BudgetInput {
                base,
                ..BudgetInput::default()
            };
            assert_eq!(calculate(&input).display(), expected, "base {}", base);
        }
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        let result = BudgetResult { total_musd: -0.0 };
        assert_eq!(result.display(), "Estimated Budget: $0.0M");
    }

    #[test]
    fn test_missing_field_propagates_nan() {
        let values: FieldValues = FIELDS
            .iter()
            .filter(|n| **n != "media")
            .map(|n| (*n, 1.0))
            .collect();
        let result = calculate(&BudgetInput::from_fields(&values));
        assert!(result.total_musd.is_nan());
        assert_eq!(result.display(), "Estimated Budget: $NaNM");
    }
}
