//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the projectors
//! - exported to JSON reports
//! - reloaded later for comparisons

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Clinical severity tag attached to a lab parameter.
///
/// The tag is supplied by the upstream data source, not derived by comparing
/// the measured value against the reference range. A value inside the normal
/// numeric band can legitimately arrive tagged `Critical` (broader clinical
/// judgement); the core trusts the tag verbatim and never second-guesses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    Normal,
    Warning,
    Critical,
}

impl ParameterStatus {
    /// Fixed chart color token for this status.
    pub fn color_token(self) -> &'static str {
        match self {
            ParameterStatus::Normal => "#22c55e",
            ParameterStatus::Warning => "#f59e0b",
            ParameterStatus::Critical => "#ef4444",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ParameterStatus::Normal => "normal",
            ParameterStatus::Warning => "warning",
            ParameterStatus::Critical => "critical",
        }
    }
}

/// Qualitative risk level derived from a probability x impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityBand {
    /// Fixed heat-map color token for this band.
    pub fn color_token(self) -> &'static str {
        match self {
            SeverityBand::Low => "#86efac",
            SeverityBand::Medium => "#fde047",
            SeverityBand::High => "#fb923c",
            SeverityBand::Critical => "#ef4444",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SeverityBand::Low => "low",
            SeverityBand::Medium => "medium",
            SeverityBand::High => "high",
            SeverityBand::Critical => "critical",
        }
    }

    /// Single-character glyph used by the ASCII heat map.
    pub fn glyph(self) -> char {
        match self {
            SeverityBand::Low => '.',
            SeverityBand::Medium => '+',
            SeverityBand::High => '#',
            SeverityBand::Critical => '@',
        }
    }
}

/// Which chart shape to project a parameter into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Gauge,
    Bar,
    Pie,
}

/// Numeric lower/upper bound extracted from a free-text reference range.
///
/// Invariant: `min <= max`. Unparseable source text falls back to `{0, 100}`
/// (see `parse::parse_reference_range`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    /// Fallback used when the source text carries no parseable `a - b` pair.
    pub const DEFAULT: ReferenceRange = ReferenceRange {
        min: 0.0,
        max: 100.0,
    };
}

/// A displayed exam parameter as it arrives from the upstream data source.
///
/// `raw_value` and `reference_range` are free text (units, symbols, and noise
/// tolerated); the parsers in `crate::parse` extract the numeric parts.
/// Constructed per displayed parameter, consumed once per render, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub raw_value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: ParameterStatus,
}

/// A single labelled point in a projection series.
///
/// Labels and color tokens are `&'static str` drawn from fixed tables, so
/// projections serialize but are never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Chart-ready projection of one parameter.
///
/// Ephemeral view model: always recomputed from the parameter, never cached.
/// Every variant carries the color token chosen from the caller-supplied
/// status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectionSeries {
    /// Position of the value within the range, as a fraction in `[0, 1]`.
    Gauge { fraction: f64, color: &'static str },
    /// Ordered min / current / max triple.
    Bar {
        points: [SeriesPoint; 3],
        color: &'static str,
    },
    /// Current value plus the (non-negative) remainder up to the range max.
    Pie {
        slices: [SeriesPoint; 2],
        color: &'static str,
    },
}

/// One entry of the operational risk catalog.
///
/// The catalog is static input: the core reads it to build the matrix and
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub name: String,
    /// Likelihood rating, expected in `1..=5`.
    pub probability: u8,
    /// Consequence rating, expected in `1..=5`.
    pub impact: u8,
    pub category: String,
}

/// Computed score/band for one (probability, impact) coordinate.
///
/// Invariant: `score` is in `1..=25` and `band` is a deterministic function of
/// `score` (see `risk::band_for_score`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskCell {
    pub probability: u8,
    pub impact: u8,
    pub score: u8,
    pub band: SeverityBand,
}

/// Inputs to the claim-recovery projection. All user-editable, non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Total monetary amount flagged for recovery.
    pub flagged_amount: f64,
    /// Expected recovery rate in percent (e.g. `72.0`).
    pub recovery_rate_percent: f64,
    /// Cost of the recovery effort.
    pub cost: f64,
    /// Average days needed to recover a claim.
    pub avg_days_to_recover: f64,
}

/// Output of the claim-recovery projection.
///
/// `roi_percent` and `payback_days` are `None` when the corresponding ratio is
/// undefined (zero cost, zero recovery, or zero recovery time); `None`
/// serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub recovered_value: f64,
    pub roi_percent: Option<f64>,
    pub payback_days: Option<f64>,
}
