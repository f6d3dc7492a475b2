//! Risk scoring and the 5x5 matrix.
//!
//! `score` turns a probability/impact pair into a score and severity band;
//! `matrix` buckets the risk catalog into the fixed 5x5 grid the compliance
//! panel renders as a heat map.

pub mod matrix;
pub mod score;

pub use matrix::{RiskMatrix, build_matrix};
pub use score::{band_for_score, risk_score, score_cell};
