//! Probability x impact scoring.
//!
//! Ratings are expected in `1..=5`; out-of-range input is a caller error, not
//! an exception condition, so both axes are clamped before multiplying. The
//! band breakpoints are load-bearing for the heat-map legend and must match
//! it exactly.

use crate::domain::{RiskCell, SeverityBand};

fn clamp_rating(rating: u8) -> u8 {
    rating.clamp(1, 5)
}

/// Multiply a probability and impact rating into a score in `1..=25`.
pub fn risk_score(probability: u8, impact: u8) -> u8 {
    clamp_rating(probability) * clamp_rating(impact)
}

/// Map a score to its severity band.
///
/// Inclusive lower bounds, highest threshold first:
/// `>= 15` critical, `>= 10` high, `>= 5` medium, else low.
pub fn band_for_score(score: u8) -> SeverityBand {
    if score >= 15 {
        SeverityBand::Critical
    } else if score >= 10 {
        SeverityBand::High
    } else if score >= 5 {
        SeverityBand::Medium
    } else {
        SeverityBand::Low
    }
}

/// Compute the full cell (score + band) for a (probability, impact) pair.
pub fn score_cell(probability: u8, impact: u8) -> RiskCell {
    let probability = clamp_rating(probability);
    let impact = clamp_rating(impact);
    let score = probability * impact;
    RiskCell {
        probability,
        impact,
        score,
        band: band_for_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_scores() {
        assert_eq!(risk_score(5, 5), 25);
        assert_eq!(band_for_score(25), SeverityBand::Critical);
        assert_eq!(risk_score(1, 1), 1);
        assert_eq!(band_for_score(1), SeverityBand::Low);
    }

    #[test]
    fn band_breakpoints() {
        assert_eq!(band_for_score(4), SeverityBand::Low);
        assert_eq!(band_for_score(5), SeverityBand::Medium);
        assert_eq!(band_for_score(9), SeverityBand::Medium);
        assert_eq!(band_for_score(10), SeverityBand::High);
        assert_eq!(band_for_score(14), SeverityBand::High);
        assert_eq!(band_for_score(15), SeverityBand::Critical);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(risk_score(0, 3), 3);
        assert_eq!(risk_score(9, 9), 25);
        let cell = score_cell(7, 0);
        assert_eq!((cell.probability, cell.impact), (5, 1));
        assert_eq!(cell.score, 5);
    }

    #[test]
    fn cell_band_matches_score() {
        let cell = score_cell(3, 3);
        assert_eq!(cell.score, 9);
        assert_eq!(cell.band, SeverityBand::Medium);
    }
}
