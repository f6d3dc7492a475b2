//! Claim-recovery projection.
//!
//! The billing panel lets an operator play with four numbers (flagged amount,
//! expected recovery rate, effort cost, average recovery time) and see the
//! recovered value, the return on that cost, and the payback period. The
//! projection is a pure function of its inputs: recomputed on every change,
//! identical inputs give structurally identical outputs.

use crate::domain::{RoiInputs, RoiResult};

/// Compute the recovery projection for one set of inputs.
///
/// Zero denominators are valid input, not errors: a zero cost makes the ROI
/// percentage undefined, and zero recovered value or recovery time makes the
/// payback period undefined. Both are reported as `None` instead of leaking
/// an infinity or NaN.
pub fn project_roi(inputs: &RoiInputs) -> RoiResult {
    let recovered_value = inputs.flagged_amount * inputs.recovery_rate_percent / 100.0;

    let roi_percent = if inputs.cost == 0.0 {
        None
    } else {
        Some((recovered_value - inputs.cost) / inputs.cost * 100.0)
    };

    let payback_days = if inputs.avg_days_to_recover == 0.0 || recovered_value == 0.0 {
        None
    } else {
        Some(inputs.cost / (recovered_value / inputs.avg_days_to_recover))
    };

    RoiResult {
        recovered_value,
        roi_percent,
        payback_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(flagged: f64, rate: f64, cost: f64, days: f64) -> RoiInputs {
        RoiInputs {
            flagged_amount: flagged,
            recovery_rate_percent: rate,
            cost,
            avg_days_to_recover: days,
        }
    }

    #[test]
    fn worked_example() {
        let r = project_roi(&inputs(120_000.0, 72.0, 5_000.0, 15.0));
        assert_eq!(r.recovered_value, 86_400.0);
        assert!((r.roi_percent.unwrap() - 1_628.0).abs() < 1e-9);
        // 5000 / (86400 / 15) days to break even.
        assert!((r.payback_days.unwrap() - 0.868_055_555_555_555_6).abs() < 1e-12);
    }

    #[test]
    fn zero_cost_makes_roi_undefined() {
        let r = project_roi(&inputs(120_000.0, 72.0, 0.0, 15.0));
        assert_eq!(r.roi_percent, None);
        // Payback is still defined: zero cost pays back immediately.
        assert_eq!(r.payback_days, Some(0.0));
    }

    #[test]
    fn zero_recovery_makes_payback_undefined() {
        let r = project_roi(&inputs(120_000.0, 0.0, 5_000.0, 15.0));
        assert_eq!(r.recovered_value, 0.0);
        assert_eq!(r.payback_days, None);
        assert!((r.roi_percent.unwrap() - (-100.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_recovery_time_makes_payback_undefined() {
        let r = project_roi(&inputs(120_000.0, 72.0, 5_000.0, 0.0));
        assert_eq!(r.payback_days, None);
    }

    #[test]
    fn projection_is_idempotent() {
        let i = inputs(80_000.0, 55.0, 3_200.0, 21.0);
        assert_eq!(project_roi(&i), project_roi(&i));
    }
}
