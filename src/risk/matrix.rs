//! 5x5 risk matrix construction and cell selection.
//!
//! The grid layout mirrors the heat map on the compliance panel: rows run
//! from probability 5 (top) down to 1, columns from impact 1 (left) up to 5.
//! The matrix is rebuilt from the catalog on every request; it has no
//! lifecycle of its own, and the catalog is never mutated.

use serde::{Deserialize, Serialize};

use crate::domain::{RiskCell, RiskItem};
use crate::risk::score::score_cell;

/// One grid cell: its computed score/band plus the catalog items whose
/// (probability, impact) equals the cell's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub cell: RiskCell,
    pub items: Vec<RiskItem>,
}

/// The full 5x5 grid, row-major with probability descending.
///
/// Always exactly 25 cells, regardless of catalog size (including zero).
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMatrix {
    cells: Vec<MatrixCell>,
}

impl RiskMatrix {
    pub const SIDE: usize = 5;

    /// Row-major index of a (probability, impact) coordinate, with both axes
    /// clamped into `1..=5` the same way the scorer clamps them.
    fn index(probability: u8, impact: u8) -> usize {
        let p = probability.clamp(1, 5) as usize;
        let i = impact.clamp(1, 5) as usize;
        (Self::SIDE - p) * Self::SIDE + (i - 1)
    }

    /// All 25 cells in render order (top-left first).
    pub fn cells(&self) -> &[MatrixCell] {
        &self.cells
    }

    /// The five cells of each grid row, top row (probability 5) first.
    pub fn rows(&self) -> impl Iterator<Item = &[MatrixCell]> {
        self.cells.chunks(Self::SIDE)
    }

    /// The cell at a clicked coordinate.
    pub fn cell(&self, probability: u8, impact: u8) -> &MatrixCell {
        &self.cells[Self::index(probability, impact)]
    }

    /// The items bucketed at a clicked coordinate. An empty slice is a valid
    /// answer, not an error.
    pub fn items_at(&self, probability: u8, impact: u8) -> &[RiskItem] {
        &self.cell(probability, impact).items
    }
}

/// Bucket the catalog into the fixed 5x5 grid.
pub fn build_matrix(catalog: &[RiskItem]) -> RiskMatrix {
    let mut cells = Vec::with_capacity(RiskMatrix::SIDE * RiskMatrix::SIDE);
    for row in 0..RiskMatrix::SIDE {
        let probability = (RiskMatrix::SIDE - row) as u8;
        for col in 0..RiskMatrix::SIDE {
            let impact = (col + 1) as u8;
            let items = catalog
                .iter()
                .filter(|r| r.probability == probability && r.impact == impact)
                .cloned()
                .collect();
            cells.push(MatrixCell {
                cell: score_cell(probability, impact),
                items,
            });
        }
    }
    RiskMatrix { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeverityBand;

    fn item(name: &str, probability: u8, impact: u8) -> RiskItem {
        RiskItem {
            name: name.to_string(),
            probability,
            impact,
            category: "Test".to_string(),
        }
    }

    #[test]
    fn empty_catalog_still_builds_25_cells() {
        let matrix = build_matrix(&[]);
        assert_eq!(matrix.cells().len(), 25);
        assert!(matrix.cells().iter().all(|c| c.items.is_empty()));
    }

    #[test]
    fn grid_order_is_probability_descending_impact_ascending() {
        let matrix = build_matrix(&[]);
        let first = matrix.cells().first().unwrap().cell;
        let last = matrix.cells().last().unwrap().cell;
        assert_eq!((first.probability, first.impact), (5, 1));
        assert_eq!((last.probability, last.impact), (1, 5));
    }

    #[test]
    fn items_land_in_their_coordinate_cell() {
        let catalog = vec![
            item("Schema error", 4, 5),
            item("Rejection", 3, 3),
            item("Denial increase", 3, 3),
        ];
        let matrix = build_matrix(&catalog);

        assert_eq!(matrix.items_at(4, 5).len(), 1);
        assert_eq!(matrix.items_at(4, 5)[0].name, "Schema error");
        assert_eq!(matrix.items_at(3, 3).len(), 2);

        let cell = matrix.cell(4, 5).cell;
        assert_eq!(cell.score, 20);
        assert_eq!(cell.band, SeverityBand::Critical);
    }

    #[test]
    fn selecting_an_empty_cell_returns_an_empty_list() {
        let matrix = build_matrix(&[item("Leak", 1, 5)]);
        assert!(matrix.items_at(5, 5).is_empty());
    }

    #[test]
    fn selection_clamps_out_of_range_coordinates() {
        let matrix = build_matrix(&[item("Leak", 1, 5)]);
        // (0, 9) clamps to (1, 5), where the item lives.
        assert_eq!(matrix.items_at(0, 9).len(), 1);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let catalog = vec![item("Schema error", 4, 5), item("Delay", 2, 4)];
        assert_eq!(build_matrix(&catalog), build_matrix(&catalog));
    }
}
