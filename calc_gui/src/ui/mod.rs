//! UI module for Courtside GUI
//!
//! # Panel Structure
//! - `header` - Title and theme toggle
//! - `document_view` - The page document: timeline, layers, milestones, calculator forms
//! - `status_bar` - Bound models, setup failures, status messages

pub mod document_view;
pub mod header;
pub mod status_bar;
