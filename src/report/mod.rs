//! Reporting utilities: formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the analytics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::{format_cell_selection, format_lab_panel, format_risk_matrix, format_roi_summary};
