//! Demo risk catalog and seeded sample lab panel.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{Parameter, ParameterStatus, RiskItem};
use crate::error::AppError;

/// The operational risk catalog shown on the compliance panel.
///
/// Read-only input to the matrix builder; probability/impact ratings follow
/// the 1..=5 convention.
pub fn catalog() -> Vec<RiskItem> {
    fn item(name: &str, probability: u8, impact: u8, category: &str) -> RiskItem {
        RiskItem {
            name: name.to_string(),
            probability,
            impact,
            category: category.to_string(),
        }
    }

    vec![
        item("Audesp schema error", 4, 5, "Compliance"),
        item("TISS version outdated", 3, 4, "Technical"),
        item("SIH/SIA submission rejected", 3, 3, "Operational"),
        item("Transparency publication delay", 2, 4, "Legal"),
        item("LGPD data leak", 1, 5, "Security"),
        item("Claim-denial increase", 3, 3, "Financial"),
    ]
}

struct PanelEntry {
    name: &'static str,
    value: f64,
    unit: &'static str,
    reference_range: &'static str,
    status: ParameterStatus,
}

const PANEL: &[PanelEntry] = &[
    PanelEntry {
        name: "Hemoglobin",
        value: 11.3,
        unit: "g/dL",
        reference_range: "12.0 - 15.5 g/dL",
        status: ParameterStatus::Warning,
    },
    PanelEntry {
        name: "Fasting glucose",
        value: 92.0,
        unit: "mg/dL",
        reference_range: "70 - 100 mg/dL",
        status: ParameterStatus::Normal,
    },
    PanelEntry {
        name: "Creatinine",
        value: 1.4,
        unit: "mg/dL",
        reference_range: "0.6 - 1.2 mg/dL",
        status: ParameterStatus::Warning,
    },
    PanelEntry {
        name: "Total cholesterol",
        value: 240.0,
        unit: "mg/dL",
        reference_range: "125 - 200 mg/dL",
        status: ParameterStatus::Critical,
    },
    PanelEntry {
        name: "Platelets",
        value: 210.0,
        unit: "10^3/uL",
        reference_range: "150 - 450 10^3/uL",
        status: ParameterStatus::Normal,
    },
    PanelEntry {
        name: "TSH",
        value: 2.1,
        unit: "uIU/mL",
        reference_range: "0.4 - 4.0 uIU/mL",
        status: ParameterStatus::Normal,
    },
];

/// Generate the sample lab panel, deterministically per seed.
///
/// `jitter` is a relative perturbation (e.g. `0.05` for up to ±5% per value)
/// applied to the measured values so repeated demos don't all look identical.
/// The status tags are part of the fixture and are NOT rederived from the
/// jittered numbers: the core trusts upstream tags, and the demo data
/// reproduces that contract.
pub fn sample_parameters(seed: u64, jitter: f64) -> Result<Vec<Parameter>, AppError> {
    if !(jitter.is_finite() && (0.0..1.0).contains(&jitter)) {
        return Err(AppError::usage(format!(
            "Invalid jitter {jitter} (must be finite and in [0, 1))."
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(PANEL.len());
    for entry in PANEL {
        let factor = if jitter == 0.0 {
            1.0
        } else {
            1.0 + rng.gen_range(-jitter..=jitter)
        };
        let value = entry.value * factor;
        out.push(Parameter {
            name: entry.name.to_string(),
            raw_value: format!("{value:.1} {}", entry.unit),
            unit: entry.unit.to_string(),
            reference_range: entry.reference_range.to_string(),
            status: entry.status,
        });
    }
    Ok(out)
}
