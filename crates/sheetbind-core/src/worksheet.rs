//! Worksheet type

use crate::cell::{CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by row and column indices (0-based)
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(row, col)
    }

    /// Get cell value by indices, [`CellValue::Empty`] for absent cells
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set(row, col, value.into());
        Ok(())
    }

    /// Clear a cell by indices
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        self.cells.remove(row, col);
    }

    // === Dimensions ===

    /// The document's row length: last used row index + 1.
    ///
    /// An empty sheet reports 0; a sheet whose only populated row is index 0
    /// reports 1. This matches "last used index + 1" semantics throughout the
    /// row mapper, so `row_len()` is also the first index past the data.
    pub fn row_len(&self) -> u32 {
        self.cells.last_row().map(|r| r + 1).unwrap_or(0)
    }

    /// Number of populated cells in the given row
    pub fn cells_in_row(&self, row: u32) -> usize {
        self.cells.row_cell_count(row)
    }

    /// Get the bounds of all non-empty cells
    ///
    /// Returns (min_row, min_col, max_row, max_col) or None if empty
    pub fn used_bounds(&self) -> Option<(u32, u16, u32, u16)> {
        self.cells.used_bounds()
    }

    /// Check if the sheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    // === Iteration ===

    /// Iterate over all cells in row order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells.iter()
    }

    /// Iterate over cells in a specific row, in column order
    pub fn iter_row(&self, row: u32) -> impl Iterator<Item = (u16, &CellValue)> {
        self.cells.iter_row(row)
    }

    /// Iterate over row indices that have data
    pub fn row_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.row_indices()
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_len_empty_sheet() {
        let sheet = Worksheet::new("Sheet1");
        assert_eq!(sheet.row_len(), 0);
    }

    #[test]
    fn test_row_len_single_row_at_index_zero() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_cell_value_at(0, 0, "only").unwrap();
        assert_eq!(sheet.row_len(), 1);
    }

    #[test]
    fn test_row_len_is_last_used_index_plus_one() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_cell_value_at(7, 2, 1.0).unwrap();
        assert_eq!(sheet.row_len(), 8);

        // Clearing the last cell shrinks the length again
        sheet.clear_cell_at(7, 2);
        assert_eq!(sheet.row_len(), 0);
    }

    #[test]
    fn test_cells_in_row() {
        let mut sheet = Worksheet::new("Sheet1");
        sheet.set_cell_value_at(3, 0, "a").unwrap();
        sheet.set_cell_value_at(3, 1, "b").unwrap();
        assert_eq!(sheet.cells_in_row(3), 2);
        assert_eq!(sheet.cells_in_row(0), 0);
    }

    #[test]
    fn test_get_value_at_absent_cell_is_empty() {
        let sheet = Worksheet::new("Sheet1");
        assert_eq!(sheet.get_value_at(0, 0), CellValue::Empty);
    }

    #[test]
    fn test_cell_position_validation() {
        let mut sheet = Worksheet::new("Sheet1");
        assert!(sheet.set_cell_value_at(crate::MAX_ROWS, 0, 1.0).is_err());
        assert!(sheet.set_cell_value_at(0, crate::MAX_COLS, 1.0).is_err());
    }
}
