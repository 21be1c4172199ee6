//! Table grid errors.

/// A table grid that cannot be laid out.
///
/// Grids are never repaired silently: a ragged grid is rejected rather than
/// truncated or padded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedGridError {
    /// The grid has no rows or no columns.
    #[error("table grid is empty")]
    Empty,
    /// A row has a different number of cells than the first row.
    #[error("table row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },
    /// Requested grid dimensions include a zero.
    #[error("table dimensions must be at least 1x1, got {rows}x{columns}")]
    ZeroDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
    /// A cell coordinate lies outside the grid.
    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        columns: usize,
    },
}
