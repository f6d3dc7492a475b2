//! Domain types used throughout the analytics core.
//!
//! This module defines:
//!
//! - classification enums (`ParameterStatus`, `SeverityBand`, `ChartKind`)
//! - lab inputs and parsed forms (`Parameter`, `ReferenceRange`)
//! - projection view models (`ProjectionSeries`, `SeriesPoint`)
//! - risk-matrix types (`RiskItem`, `RiskCell`)
//! - recovery projections (`RoiInputs`, `RoiResult`)

pub mod types;

pub use types::*;
