//! Read/write report JSON files.
//!
//! Report JSON is the "portable" representation of a computed panel:
//! - the inputs that produced it
//! - the derived values (projections, matrix cells, ROI figures)
//! - a `tool` marker and a generation date
//!
//! Exports let a dashboard backend (or a later `careops` invocation) consume
//! results without recomputing them.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ChartKind, Parameter, ProjectionSeries, RoiInputs, RoiResult};
use crate::error::AppError;
use crate::labs::project_parameter;
use crate::risk::RiskMatrix;
use crate::risk::matrix::MatrixCell;

pub const TOOL_NAME: &str = "careops";

/// A saved risk-matrix report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReportFile {
    pub tool: String,
    pub generated_on: NaiveDate,
    /// All 25 cells, row-major, probability descending.
    pub cells: Vec<MatrixCell>,
}

/// One parameter plus its projection, as stored in a lab report.
#[derive(Debug, Clone, Serialize)]
pub struct LabProjection {
    pub parameter: Parameter,
    pub series: ProjectionSeries,
}

/// A saved lab-panel report (write-only: projections carry static tokens).
#[derive(Debug, Clone, Serialize)]
pub struct LabReportFile {
    pub tool: String,
    pub generated_on: NaiveDate,
    pub chart: ChartKind,
    pub parameters: Vec<LabProjection>,
}

/// A saved recovery projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiReportFile {
    pub tool: String,
    pub generated_on: NaiveDate,
    pub inputs: RoiInputs,
    pub result: RoiResult,
}

/// Write the risk matrix as a JSON report.
pub fn write_risk_report(
    path: &Path,
    matrix: &RiskMatrix,
    generated_on: NaiveDate,
) -> Result<(), AppError> {
    let report = RiskReportFile {
        tool: TOOL_NAME.to_string(),
        generated_on,
        cells: matrix.cells().to_vec(),
    };
    write_json(path, &report)
}

/// Read a risk report back.
pub fn read_risk_report(path: &Path) -> Result<RiskReportFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open report JSON '{}': {e}", path.display()))
    })?;
    let report: RiskReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

/// Write the projected lab panel as a JSON report.
pub fn write_lab_report(
    path: &Path,
    parameters: &[Parameter],
    chart: ChartKind,
    generated_on: NaiveDate,
) -> Result<(), AppError> {
    let report = LabReportFile {
        tool: TOOL_NAME.to_string(),
        generated_on,
        chart,
        parameters: parameters
            .iter()
            .map(|p| LabProjection {
                parameter: p.clone(),
                series: project_parameter(p, chart),
            })
            .collect(),
    };
    write_json(path, &report)
}

/// Write a recovery projection as a JSON report.
pub fn write_roi_report(
    path: &Path,
    inputs: &RoiInputs,
    result: &RoiResult,
    generated_on: NaiveDate,
) -> Result<(), AppError> {
    let report = RoiReportFile {
        tool: TOOL_NAME.to_string(),
        generated_on,
        inputs: *inputs,
        result: *result,
    };
    write_json(path, &report)
}

fn write_json<T: Serialize>(path: &Path, report: &T) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create report JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::usage(format!("Failed to write report JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::risk::build_matrix;

    #[test]
    fn risk_report_round_trips() {
        let dir = std::env::temp_dir();
        let path = dir.join("careops_risk_report_test.json");

        let matrix = build_matrix(&catalog());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        write_risk_report(&path, &matrix, date).unwrap();

        let report = read_risk_report(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(report.tool, TOOL_NAME);
        assert_eq!(report.generated_on, date);
        assert_eq!(report.cells.len(), 25);
        assert_eq!(report.cells, matrix.cells().to_vec());
    }

    #[test]
    fn reading_a_missing_report_fails_cleanly() {
        let err = read_risk_report(Path::new("/nonexistent/careops.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn undefined_roi_serializes_as_null() {
        let report = RoiReportFile {
            tool: TOOL_NAME.to_string(),
            generated_on: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            inputs: RoiInputs {
                flagged_amount: 120_000.0,
                recovery_rate_percent: 72.0,
                cost: 0.0,
                avg_days_to_recover: 15.0,
            },
            result: RoiResult {
                recovered_value: 86_400.0,
                roi_percent: None,
                payback_days: Some(0.0),
            },
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"roi_percent\":null"));
    }
}
