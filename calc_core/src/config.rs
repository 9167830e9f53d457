//! # Page Configuration
//!
//! Seed values for the calculator forms. The page skeleton writes these into
//! each input's `value` before the groups are bound, so the first computed
//! output reflects them.
//!
//! Configs are plain JSON:
//!
//! ```json
//! {
//!   "budget":   { "base": 48.0, "tickets": 9.5 },
//!   "transfer": { "minutes": 70.0 }
//! }
//! ```
//!
//! Fields left out of a group fall back to zero.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{CalcError, CalcResult};

/// Default field values for every calculator group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub budget: BTreeMap<String, f64>,
    #[serde(default)]
    pub transfer: BTreeMap<String, f64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        let budget = [
            ("base", 45.0),
            ("tickets", 8.0),
            ("media", 12.0),
            ("boosters", 6.0),
            ("units", 3.0),
            ("debt", 4.0),
            ("staffing", 9.0),
        ];
        let transfer = [
            ("minutes", 55.0),
            ("nil", 40.0),
            ("trust", 35.0),
            ("style", 30.0),
            ("losing", 25.0),
            ("academic", 20.0),
            ("peer", 15.0),
        ];
        PageConfig {
            budget: budget.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            transfer: transfer.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}

impl PageConfig {
    /// A config with every field left at zero.
    pub fn empty() -> Self {
        PageConfig {
            budget: BTreeMap::new(),
            transfer: BTreeMap::new(),
        }
    }

    pub fn defaults_for(&self, kind: CalculatorKind) -> &BTreeMap<String, f64> {
        match kind {
            CalculatorKind::Budget => &self.budget,
            CalculatorKind::Transfer => &self.transfer,
        }
    }

    /// Seed value for one field; zero when unset.
    pub fn default_value(&self, kind: CalculatorKind, field: &str) -> f64 {
        self.defaults_for(kind).get(field).copied().unwrap_or(0.0)
    }

    /// Reject field names the group's formula does not use.
    pub fn validate(&self) -> CalcResult<()> {
        for kind in CalculatorKind::ALL {
            let known = kind.field_names();
            if let Some(field) = self
                .defaults_for(kind)
                .keys()
                .find(|field| !known.contains(&field.as_str()))
            {
                return Err(CalcError::unknown_field(kind.key(), field.to_string()));
            }
        }
        Ok(())
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded page config");
        Ok(config)
    }
}
