//! JSON report export/import.

pub mod export;

pub use export::{
    LabReportFile, RiskReportFile, RoiReportFile, read_risk_report, write_lab_report,
    write_risk_report, write_roi_report,
};
