//! Terminal report rendering.
//!
//! All functions return `String`s so they can be asserted on in tests without
//! a terminal. The heat map is intentionally "dumb" (fixed-size grid,
//! deterministic output), like the rest of the renderers.

use crate::domain::{ChartKind, Parameter, ProjectionSeries, RoiInputs, RoiResult, SeverityBand};
use crate::labs::project_parameter;
use crate::risk::RiskMatrix;

const GAUGE_WIDTH: usize = 20;

/// Format the lab panel: one row per parameter plus its projection.
pub fn format_lab_panel(parameters: &[Parameter], kind: ChartKind) -> String {
    let mut out = String::new();

    out.push_str("=== careops - Lab Panel ===\n");
    out.push_str(&format!(
        "{:<20} {:>14} {:>20} {:<10} {}\n",
        "parameter", "value", "reference", "status", "projection"
    ));
    out.push_str(&format!(
        "{:-<20} {:-<14} {:-<20} {:-<10} {:-<24}\n",
        "", "", "", "", ""
    ));

    for p in parameters {
        let series = project_parameter(p, kind);
        out.push_str(&format!(
            "{:<20} {:>14} {:>20} {:<10} {}\n",
            truncate(&p.name, 20),
            p.raw_value,
            p.reference_range,
            p.status.display_name(),
            format_series(&series),
        ));
    }

    out
}

fn format_series(series: &ProjectionSeries) -> String {
    match series {
        ProjectionSeries::Gauge { fraction, .. } => {
            let filled = (fraction * GAUGE_WIDTH as f64).round() as usize;
            let filled = filled.min(GAUGE_WIDTH);
            format!(
                "[{}{}] {:.0}%",
                "#".repeat(filled),
                "-".repeat(GAUGE_WIDTH - filled),
                fraction * 100.0
            )
        }
        ProjectionSeries::Bar { points, .. } => points
            .iter()
            .map(|pt| format!("{}={}", pt.label, fmt_num(pt.value)))
            .collect::<Vec<_>>()
            .join(" "),
        ProjectionSeries::Pie { slices, .. } => slices
            .iter()
            .map(|s| format!("{}={}", s.label, fmt_num(s.value)))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Format the 5x5 heat map, the band legend, and the bucketed item list.
pub fn format_risk_matrix(matrix: &RiskMatrix) -> String {
    let mut out = String::new();

    out.push_str("=== careops - Risk Matrix 5x5 ===\n");
    out.push_str("        I1  I2  I3  I4  I5\n");
    for row in matrix.rows() {
        let probability = row[0].cell.probability;
        out.push_str(&format!("  P{probability}   "));
        for cell in row {
            if cell.items.is_empty() {
                out.push_str(&format!("  {} ", cell.cell.band.glyph()));
            } else {
                out.push_str(&format!(" [{}]", cell.items.len()));
            }
        }
        out.push('\n');
    }
    out.push_str("        (rows: probability, columns: impact; [n] = bucketed items)\n\n");

    out.push_str("Legend:\n");
    for (band, range) in [
        (SeverityBand::Critical, "15-25"),
        (SeverityBand::High, "10-14"),
        (SeverityBand::Medium, "5-9"),
        (SeverityBand::Low, "1-4"),
    ] {
        out.push_str(&format!(
            "  {} {:<8} {:>6}  {}\n",
            band.glyph(),
            band.display_name(),
            range,
            band.color_token()
        ));
    }
    out.push('\n');

    out.push_str("Catalog:\n");
    out.push_str(&format!(
        "{:<32} {:<14} {:>4} {:>4} {:>6} {:<8}\n",
        "risk", "category", "P", "I", "score", "band"
    ));
    out.push_str(&format!(
        "{:-<32} {:-<14} {:-<4} {:-<4} {:-<6} {:-<8}\n",
        "", "", "", "", "", ""
    ));
    for cell in matrix.cells() {
        for item in &cell.items {
            out.push_str(&format!(
                "{:<32} {:<14} {:>4} {:>4} {:>6} {:<8}\n",
                truncate(&item.name, 32),
                truncate(&item.category, 14),
                item.probability,
                item.impact,
                cell.cell.score,
                cell.cell.band.display_name(),
            ));
        }
    }

    out
}

/// Format the item list of one clicked cell.
pub fn format_cell_selection(matrix: &RiskMatrix, probability: u8, impact: u8) -> String {
    let cell = matrix.cell(probability, impact);
    let mut out = String::new();

    out.push_str(&format!(
        "Cell P{} x I{}: score={} band={}\n",
        cell.cell.probability,
        cell.cell.impact,
        cell.cell.score,
        cell.cell.band.display_name(),
    ));
    if cell.items.is_empty() {
        out.push_str("  (no risks bucketed here)\n");
    } else {
        for item in &cell.items {
            out.push_str(&format!("  - {} [{}]\n", item.name, item.category));
        }
    }

    out
}

/// Format the recovery projection summary.
pub fn format_roi_summary(inputs: &RoiInputs, result: &RoiResult) -> String {
    let mut out = String::new();

    out.push_str("=== careops - Recovery Projection ===\n");
    out.push_str(&format!(
        "Flagged: {} | rate: {:.1}% | cost: {} | avg recovery: {:.1}d\n",
        fmt_num(inputs.flagged_amount),
        inputs.recovery_rate_percent,
        fmt_num(inputs.cost),
        inputs.avg_days_to_recover,
    ));
    out.push_str(&format!(
        "- recovered value: {}\n",
        fmt_num(result.recovered_value)
    ));
    out.push_str(&format!("- ROI: {}\n", fmt_opt_pct(result.roi_percent)));
    out.push_str(&format!(
        "- payback: {}\n",
        fmt_opt_days(result.payback_days)
    ));

    out
}

fn fmt_num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

fn fmt_opt_pct(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.1}%"),
        None => "n/a".to_string(),
    }
}

fn fmt_opt_days(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.1} days"),
        None => "n/a".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
