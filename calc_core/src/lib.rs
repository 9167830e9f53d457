//! # calc_core - Roadmap Page Engine
//!
//! `calc_core` drives the Courtside roadmap page: a static project overview
//! (yearly timeline, architecture layers, milestones) plus two planning
//! calculators wired to numeric form inputs. Front ends (`calc_gui`,
//! `calc_cli`) only draw the document and forward input events.
//!
//! ## Design Philosophy
//!
//! - **Declarative content**: fixed data arrays rendered through one generic list renderer
//! - **Pure calculators**: linear formulas with JSON-serializable inputs and results
//! - **Explicit lifecycle**: nothing happens until [`page::initialize_page`] is called
//! - **Isolated setup**: a missing element disables only the part that needed it
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::CalculatorKind;
//! use calc_core::{Page, PageConfig};
//!
//! let mut page = Page::load(&PageConfig::default());
//! page.set_field(CalculatorKind::Transfer, "minutes", "90").unwrap();
//! println!("{}", page.output_text(CalculatorKind::Transfer).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`content`] - Static timeline, layer and milestone data
//! - [`dom`] - In-memory document tree with simple selector lookup
//! - [`render`] - Generic list renderer and per-list templates
//! - [`calculations`] - Budget and transfer-pressure calculators
//! - [`coerce`] - Text-to-number coercion for form values
//! - [`binder`] - Reactive binding of form controls to calculator output
//! - [`page`] - Page skeleton, initialization, and input dispatch
//! - [`config`] - Seed values for the calculator forms
//! - [`errors`] - Structured error types

pub mod binder;
pub mod calculations;
pub mod coerce;
pub mod config;
pub mod content;
pub mod dom;
pub mod errors;
pub mod page;
pub mod render;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationResult, CalculatorKind};
pub use config::PageConfig;
pub use errors::{CalcError, CalcResult};
pub use page::{initialize_page, skeleton, Page};
