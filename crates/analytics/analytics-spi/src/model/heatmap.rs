//! Region-by-month heatmap matrix.

use serde::{Deserialize, Serialize};

use dataset_spi::Month;

/// Region × month matrix of mean birth_count.
///
/// Rows follow sorted region order; columns are the twelve canonical months
/// in calendar order. A cell with no matching rows is `None`, which renders
/// as missing rather than a zero mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    /// Row labels in sorted order
    pub regions: Vec<String>,
    /// `cells[row][column]`, twelve columns per row
    pub cells: Vec<Vec<Option<f64>>>,
}

impl HeatmapMatrix {
    /// An empty matrix with no regions.
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Cell value for a (region row, month) pair.
    pub fn cell(&self, region_index: usize, month: Month) -> Option<f64> {
        self.cells
            .get(region_index)?
            .get(month.number() as usize - 1)
            .copied()
            .flatten()
    }

    /// Largest cell value present, for color scaling.
    pub fn max_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup() {
        let matrix = HeatmapMatrix {
            regions: vec!["East".to_string()],
            cells: vec![{
                let mut row = vec![None; 12];
                row[0] = Some(100.0);
                row
            }],
        };
        assert_eq!(matrix.cell(0, Month::January), Some(100.0));
        assert_eq!(matrix.cell(0, Month::February), None);
        assert_eq!(matrix.cell(1, Month::January), None);
    }

    #[test]
    fn test_max_value() {
        let matrix = HeatmapMatrix {
            regions: vec!["East".to_string(), "West".to_string()],
            cells: vec![
                vec![Some(10.0), None, Some(30.0)],
                vec![None, Some(20.0), None],
            ],
        };
        assert_eq!(matrix.max_value(), Some(30.0));
        assert_eq!(HeatmapMatrix::empty().max_value(), None);
    }
}
