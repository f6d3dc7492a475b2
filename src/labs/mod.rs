//! Chart projections for lab parameters.
//!
//! A projector turns (range, value, status) into a chart-ready series. Three
//! shapes are supported, matching the widgets on the results panel:
//!
//! - gauge: fraction of the range covered by the value
//! - bar: min / current / max triple
//! - pie: current value vs. remainder up to the range max
//!
//! The projector performs no severity judgement of its own: the color token on
//! each series comes straight from the caller-supplied status.

use crate::domain::{
    ChartKind, Parameter, ParameterStatus, ProjectionSeries, ReferenceRange, SeriesPoint,
};
use crate::parse::{parse_reference_range, parse_value};

/// Position of `value` within `range` as a fraction clamped to `[0, 1]`.
///
/// A degenerate range (`max == min`) yields `0.0` rather than dividing by
/// zero.
pub fn gauge_fraction(value: f64, range: ReferenceRange) -> f64 {
    let span = range.max - range.min;
    if span == 0.0 {
        return 0.0;
    }
    ((value - range.min) / span).clamp(0.0, 1.0)
}

/// Project an already-parsed (range, value, status) triple into `kind`.
pub fn project(
    range: ReferenceRange,
    value: f64,
    status: ParameterStatus,
    kind: ChartKind,
) -> ProjectionSeries {
    let color = status.color_token();
    match kind {
        ChartKind::Gauge => ProjectionSeries::Gauge {
            fraction: gauge_fraction(value, range),
            color,
        },
        ChartKind::Bar => ProjectionSeries::Bar {
            points: [
                SeriesPoint {
                    label: "min",
                    value: range.min,
                },
                SeriesPoint {
                    label: "current",
                    value,
                },
                SeriesPoint {
                    label: "max",
                    value: range.max,
                },
            ],
            color,
        },
        ChartKind::Pie => ProjectionSeries::Pie {
            slices: [
                SeriesPoint {
                    label: "current",
                    value,
                },
                SeriesPoint {
                    label: "remainder",
                    // A value above the range max would otherwise produce a
                    // negative slice.
                    value: (range.max - value).max(0.0),
                },
            ],
            color,
        },
    }
}

/// Parse a raw parameter and project it into `kind`.
pub fn project_parameter(parameter: &Parameter, kind: ChartKind) -> ProjectionSeries {
    let range = parse_reference_range(&parameter.reference_range);
    let value = parse_value(&parameter.raw_value);
    project(range, value, parameter.status, kind)
}
