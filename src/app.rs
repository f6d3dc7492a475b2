//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - assembles demo inputs
//! - runs the projections/matrix/ROI core
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, LabsArgs, RiskArgs, RoiArgs};
use crate::domain::RoiInputs;
use crate::error::AppError;

/// Entry point for the `careops` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Labs(args) => handle_labs(args),
        Command::Risk(args) => handle_risk(args),
        Command::Roi(args) => handle_roi(args),
    }
}

fn handle_labs(args: LabsArgs) -> Result<(), AppError> {
    let parameters = crate::data::sample_parameters(args.seed, args.jitter)?;

    println!("{}", crate::report::format_lab_panel(&parameters, args.chart));

    if let Some(path) = &args.export {
        crate::io::write_lab_report(path, &parameters, args.chart, today())?;
    }
    Ok(())
}

fn handle_risk(args: RiskArgs) -> Result<(), AppError> {
    let catalog = crate::data::catalog();
    let matrix = crate::risk::build_matrix(&catalog);

    println!("{}", crate::report::format_risk_matrix(&matrix));

    if let Some(select) = &args.select {
        let (probability, impact) = parse_select(select)?;
        println!(
            "{}",
            crate::report::format_cell_selection(&matrix, probability, impact)
        );
    }

    if let Some(path) = &args.export {
        crate::io::write_risk_report(path, &matrix, today())?;
    }
    Ok(())
}

fn handle_roi(args: RoiArgs) -> Result<(), AppError> {
    if args.flagged < 0.0 || args.rate < 0.0 || args.cost < 0.0 || args.days < 0.0 {
        return Err(AppError::usage("ROI inputs must be non-negative."));
    }

    let inputs = RoiInputs {
        flagged_amount: args.flagged,
        recovery_rate_percent: args.rate,
        cost: args.cost,
        avg_days_to_recover: args.days,
    };
    let result = crate::roi::project_roi(&inputs);

    println!("{}", crate::report::format_roi_summary(&inputs, &result));

    if let Some(path) = &args.export {
        crate::io::write_roi_report(path, &inputs, &result, today())?;
    }
    Ok(())
}

/// Parse a `P,I` cell selection into its two ratings.
fn parse_select(select: &str) -> Result<(u8, u8), AppError> {
    let err = || AppError::usage(format!("Invalid --select '{select}' (expected `P,I`, each 1-5)."));

    let (p, i) = select.split_once(',').ok_or_else(err)?;
    let probability: u8 = p.trim().parse().map_err(|_| err())?;
    let impact: u8 = i.trim().parse().map_err(|_| err())?;
    if !(1..=5).contains(&probability) || !(1..=5).contains(&impact) {
        return Err(err());
    }
    Ok((probability, impact))
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_select_accepts_in_domain_pairs() {
        assert_eq!(parse_select("4,5").unwrap(), (4, 5));
        assert_eq!(parse_select(" 1 , 1 ").unwrap(), (1, 1));
    }

    #[test]
    fn parse_select_rejects_bad_input() {
        assert!(parse_select("4").is_err());
        assert!(parse_select("0,3").is_err());
        assert!(parse_select("3,6").is_err());
        assert!(parse_select("a,b").is_err());
    }
}
