//! Rectangular table grid.

use crate::{MalformedGridError, column_widths, render_grid};
use crate::layout::check_rectangular;

/// A rectangular grid of cell strings.
///
/// The first row is the header row. The grid is always at least 1x1 and all
/// rows have the same length, so layout and rendering cannot fail once a
/// `TableGrid` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Create a grid of the given shape with every cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedGridError::ZeroDimension`] if either dimension is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use rstgen_table::TableGrid;
    ///
    /// let grid = TableGrid::empty(2, 3).unwrap();
    /// assert_eq!((grid.row_count(), grid.column_count()), (2, 3));
    /// assert!(grid.rows().iter().flatten().all(String::is_empty));
    /// ```
    pub fn empty(rows: usize, columns: usize) -> Result<Self, MalformedGridError> {
        if rows == 0 || columns == 0 {
            return Err(MalformedGridError::ZeroDimension { rows, columns });
        }
        Ok(Self {
            rows: vec![vec![String::new(); columns]; rows],
        })
    }

    /// All rows, header first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Rows after the header.
    #[must_use]
    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Number of rows including the header.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Replace the contents of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedGridError::CellOutOfBounds`] for coordinates outside
    /// the grid; the grid is left unchanged.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<String>,
    ) -> Result<(), MalformedGridError> {
        let (rows, columns) = (self.row_count(), self.column_count());
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(MalformedGridError::CellOutOfBounds {
                row,
                column,
                rows,
                columns,
            })?;
        *cell = value.into();
        Ok(())
    }

    /// Append an empty row.
    pub fn push_row(&mut self) {
        let columns = self.column_count();
        self.rows.push(vec![String::new(); columns]);
    }

    /// Append an empty column to every row.
    pub fn push_column(&mut self) {
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Remove the last row. Returns `false` if only the header row is left.
    pub fn pop_row(&mut self) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        self.rows.pop();
        true
    }

    /// Remove the last column. Returns `false` if only one column is left.
    pub fn pop_column(&mut self) -> bool {
        if self.column_count() <= 1 {
            return false;
        }
        for row in &mut self.rows {
            row.pop();
        }
        true
    }

    /// Rendered width of each column.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        column_widths(&self.rows).unwrap_or_default()
    }

    /// Render as a bordered grid table.
    #[must_use]
    pub fn render(&self) -> String {
        render_grid(&self.rows).unwrap_or_default()
    }

    /// Consume the grid, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<String>>> for TableGrid {
    type Error = MalformedGridError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        check_rectangular(&rows)?;
        Ok(Self { rows })
    }
}
