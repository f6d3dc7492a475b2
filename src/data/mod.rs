//! Built-in demo inputs.
//!
//! The dashboard this core was extracted from ships with a static risk
//! catalog and mock lab panels. This module carries those inputs so the
//! `careops` binary has something realistic to project without an upstream
//! data feed.

pub mod sample;

pub use sample::{catalog, sample_parameters};
