//! Two-step table wizard.
//!
//! Tables are built in two form submissions. The first collects the
//! dimensions and creates an empty draft grid; the second collects the cell
//! contents. Nothing is inserted into the document until the second step
//! completes.
//!
//! ```text
//! Idle --open--> CollectingDimensions --submit_dimensions--> CollectingCells
//!  ^                     |                                        |
//!  +------cancel---------+----------------finish / cancel---------+
//! ```

use rstgen_table::{MalformedGridError, TableGrid};

/// Which table directive the wizard produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TableFlavor {
    /// Bordered grid table; the first row is the header.
    Grid,
    /// CSV table; the grid holds content rows, the header is entered in the
    /// cell step.
    Csv,
}

impl std::fmt::Display for TableFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid => f.write_str("grid"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

/// Upper bounds on table dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardLimits {
    pub max_rows: usize,
    pub max_columns: usize,
}

impl Default for WizardLimits {
    fn default() -> Self {
        Self {
            max_rows: 100,
            max_columns: 26,
        }
    }
}

/// Wizard errors. The wizard state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("a {0} table is already being built")]
    Busy(TableFlavor),
    #[error("no table is waiting for its dimensions")]
    NotCollectingDimensions,
    #[error("no table is waiting for its cells")]
    NotCollectingCells,
    #[error("expected cells for a {expected} table, got {found}")]
    FlavorMismatch {
        expected: TableFlavor,
        found: TableFlavor,
    },
    #[error(
        "table size {rows}x{columns} is outside 1x1 to {max_rows}x{max_columns}"
    )]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        max_rows: usize,
        max_columns: usize,
    },
    #[error(transparent)]
    Grid(#[from] MalformedGridError),
}

/// Table being filled in during the cell step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDraft {
    flavor: TableFlavor,
    grid: TableGrid,
    limits: WizardLimits,
}

impl TableDraft {
    #[must_use]
    pub fn flavor(&self) -> TableFlavor {
        self.flavor
    }

    #[must_use]
    pub fn grid(&self) -> &TableGrid {
        &self.grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.row_count()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.column_count()
    }

    /// Set one cell.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Grid`] if the cell is outside the draft.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.grid.set_cell(row, column, value)?;
        Ok(())
    }

    /// Append an empty row.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidDimensions`] at the row limit.
    pub fn push_row(&mut self) -> Result<(), WizardError> {
        self.check_limits(self.rows() + 1, self.columns())?;
        self.grid.push_row();
        Ok(())
    }

    /// Append an empty column.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::InvalidDimensions`] at the column limit.
    pub fn push_column(&mut self) -> Result<(), WizardError> {
        self.check_limits(self.rows(), self.columns() + 1)?;
        self.grid.push_column();
        Ok(())
    }

    /// Remove the last row. Returns `false` if only one row is left.
    pub fn pop_row(&mut self) -> bool {
        self.grid.pop_row()
    }

    /// Remove the last column. Returns `false` if only one column is left.
    pub fn pop_column(&mut self) -> bool {
        self.grid.pop_column()
    }

    fn check_limits(&self, rows: usize, columns: usize) -> Result<(), WizardError> {
        check_dimensions(self.limits, rows, columns)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WizardState {
    Idle,
    CollectingDimensions(TableFlavor),
    CollectingCells(TableDraft),
}

/// The table wizard state machine.
///
/// # Example
///
/// ```
/// use rstgen_editor::{TableFlavor, TableWizard};
///
/// let mut wizard = TableWizard::default();
/// wizard.open(TableFlavor::Grid).unwrap();
/// let draft = wizard.submit_dimensions(2, 3).unwrap();
/// assert_eq!((draft.rows(), draft.columns()), (2, 3));
///
/// let grid = wizard.fill(TableFlavor::Grid, &[vec!["A".into(), "B".into(), "C".into()]]).unwrap();
/// assert_eq!(grid.cell(0, 1), Some("B"));
/// wizard.finish().unwrap();
/// assert!(wizard.is_idle());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWizard {
    state: WizardState,
    limits: WizardLimits,
}

impl Default for TableWizard {
    fn default() -> Self {
        Self::new(WizardLimits::default())
    }
}

impl TableWizard {
    #[must_use]
    pub fn new(limits: WizardLimits) -> Self {
        Self {
            state: WizardState::Idle,
            limits,
        }
    }

    #[must_use]
    pub fn limits(&self) -> WizardLimits {
        self.limits
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == WizardState::Idle
    }

    /// Flavor of the table in progress, if any.
    #[must_use]
    pub fn flavor(&self) -> Option<TableFlavor> {
        match &self.state {
            WizardState::Idle => None,
            WizardState::CollectingDimensions(flavor) => Some(*flavor),
            WizardState::CollectingCells(draft) => Some(draft.flavor),
        }
    }

    /// Whether the wizard waits for dimensions.
    #[must_use]
    pub fn is_collecting_dimensions(&self) -> bool {
        matches!(self.state, WizardState::CollectingDimensions(_))
    }

    /// The draft, while cells are being collected.
    #[must_use]
    pub fn draft(&self) -> Option<&TableDraft> {
        match &self.state {
            WizardState::CollectingCells(draft) => Some(draft),
            _ => None,
        }
    }

    /// Mutable draft, for adding or removing rows and columns.
    pub fn draft_mut(&mut self) -> Option<&mut TableDraft> {
        match &mut self.state {
            WizardState::CollectingCells(draft) => Some(draft),
            _ => None,
        }
    }

    /// Start a table.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Busy`] if a table is already in progress.
    pub fn open(&mut self, flavor: TableFlavor) -> Result<(), WizardError> {
        if let Some(current) = self.flavor() {
            return Err(WizardError::Busy(current));
        }
        tracing::debug!(%flavor, "Table wizard collecting dimensions");
        self.state = WizardState::CollectingDimensions(flavor);
        Ok(())
    }

    /// Accept the dimensions and create an empty draft.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotCollectingDimensions`] outside the dimension
    /// step and [`WizardError::InvalidDimensions`] for a zero or oversized
    /// table; the wizard keeps waiting for dimensions in that case.
    pub fn submit_dimensions(
        &mut self,
        rows: usize,
        columns: usize,
    ) -> Result<&TableDraft, WizardError> {
        let WizardState::CollectingDimensions(flavor) = self.state else {
            return Err(WizardError::NotCollectingDimensions);
        };
        check_dimensions(self.limits, rows, columns)?;
        let grid = TableGrid::empty(rows, columns)?;

        tracing::debug!(%flavor, rows, columns, "Table wizard collecting cells");
        self.state = WizardState::CollectingCells(TableDraft {
            flavor,
            grid,
            limits: self.limits,
        });
        self.draft().ok_or(WizardError::NotCollectingCells)
    }

    /// The draft grid with `cells` laid over it, row by row from the top
    /// left. The draft keeps its shape; the wizard state is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotCollectingCells`] outside the cell step,
    /// [`WizardError::FlavorMismatch`] for cells meant for another table,
    /// and [`WizardError::Grid`] for cells outside the draft.
    pub fn fill(
        &self,
        flavor: TableFlavor,
        cells: &[Vec<String>],
    ) -> Result<TableGrid, WizardError> {
        let draft = self.draft().ok_or(WizardError::NotCollectingCells)?;
        if draft.flavor != flavor {
            return Err(WizardError::FlavorMismatch {
                expected: draft.flavor,
                found: flavor,
            });
        }

        let mut grid = draft.grid.clone();
        for (row, values) in cells.iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                grid.set_cell(row, column, value.as_str())?;
            }
        }
        Ok(grid)
    }

    /// Leave the cell step, returning the draft.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotCollectingCells`] outside the cell step.
    pub fn finish(&mut self) -> Result<TableDraft, WizardError> {
        match std::mem::replace(&mut self.state, WizardState::Idle) {
            WizardState::CollectingCells(draft) => {
                tracing::debug!(flavor = %draft.flavor, "Table wizard finished");
                Ok(draft)
            }
            other => {
                self.state = other;
                Err(WizardError::NotCollectingCells)
            }
        }
    }

    /// Abandon any table in progress.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            tracing::debug!("Table wizard cancelled");
        }
        self.state = WizardState::Idle;
    }
}

pub(crate) fn check_dimensions(
    limits: WizardLimits,
    rows: usize,
    columns: usize,
) -> Result<(), WizardError> {
    if (1..=limits.max_rows).contains(&rows) && (1..=limits.max_columns).contains(&columns) {
        Ok(())
    } else {
        Err(WizardError::InvalidDimensions {
            rows,
            columns,
            max_rows: limits.max_rows,
            max_columns: limits.max_columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collecting_cells(rows: usize, columns: usize) -> TableWizard {
        let mut wizard = TableWizard::default();
        wizard.open(TableFlavor::Grid).unwrap();
        wizard.submit_dimensions(rows, columns).unwrap();
        wizard
    }

    fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|&c| c.to_owned()).collect())
            .collect()
    }

    #[test]
    fn test_dimension_step_creates_empty_grid() {
        let wizard = collecting_cells(2, 3);
        let draft = wizard.draft().unwrap();
        assert_eq!((draft.rows(), draft.columns()), (2, 3));
        assert!(draft.grid().rows().iter().flatten().all(String::is_empty));
    }

    #[test]
    fn test_open_twice_is_busy() {
        let mut wizard = TableWizard::default();
        wizard.open(TableFlavor::Csv).unwrap();
        assert_eq!(
            wizard.open(TableFlavor::Grid),
            Err(WizardError::Busy(TableFlavor::Csv))
        );
    }

    #[test]
    fn test_dimensions_require_open_wizard() {
        let mut wizard = TableWizard::default();
        assert_eq!(
            wizard.submit_dimensions(2, 2).unwrap_err(),
            WizardError::NotCollectingDimensions
        );
    }

    #[test]
    fn test_invalid_dimensions_keep_waiting() {
        let mut wizard = TableWizard::new(WizardLimits {
            max_rows: 5,
            max_columns: 5,
        });
        wizard.open(TableFlavor::Grid).unwrap();
        assert!(matches!(
            wizard.submit_dimensions(0, 2),
            Err(WizardError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            wizard.submit_dimensions(2, 6),
            Err(WizardError::InvalidDimensions { .. })
        ));
        assert!(wizard.is_collecting_dimensions());
        assert!(wizard.submit_dimensions(5, 5).is_ok());
    }

    #[test]
    fn test_fill_keeps_shape() {
        let wizard = collecting_cells(2, 3);
        let grid = wizard
            .fill(TableFlavor::Grid, &cells(&[&["A", "B"], &["1"]]))
            .unwrap();
        assert_eq!((grid.row_count(), grid.column_count()), (2, 3));
        assert_eq!(grid.cell(0, 1), Some("B"));
        assert_eq!(grid.cell(1, 0), Some("1"));
        assert_eq!(grid.cell(1, 2), Some(""));
        assert!(wizard.draft().is_some());
    }

    #[test]
    fn test_fill_rejects_cells_outside_draft() {
        let wizard = collecting_cells(1, 1);
        assert!(matches!(
            wizard.fill(TableFlavor::Grid, &cells(&[&["a", "b"]])),
            Err(WizardError::Grid(MalformedGridError::CellOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_fill_rejects_other_flavor() {
        let wizard = collecting_cells(1, 1);
        assert_eq!(
            wizard.fill(TableFlavor::Csv, &[]),
            Err(WizardError::FlavorMismatch {
                expected: TableFlavor::Grid,
                found: TableFlavor::Csv,
            })
        );
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut wizard = collecting_cells(2, 2);
        let draft = wizard.finish().unwrap();
        assert_eq!(draft.flavor(), TableFlavor::Grid);
        assert!(wizard.is_idle());
        assert_eq!(wizard.finish(), Err(WizardError::NotCollectingCells));
    }

    #[test]
    fn test_finish_outside_cell_step_keeps_state() {
        let mut wizard = TableWizard::default();
        wizard.open(TableFlavor::Csv).unwrap();
        assert!(wizard.finish().is_err());
        assert!(wizard.is_collecting_dimensions());
    }

    #[test]
    fn test_cancel() {
        let mut wizard = collecting_cells(2, 2);
        wizard.cancel();
        assert!(wizard.is_idle());
        assert_eq!(wizard.flavor(), None);
    }

    #[test]
    fn test_draft_editing() {
        let mut wizard = TableWizard::new(WizardLimits {
            max_rows: 3,
            max_columns: 2,
        });
        wizard.open(TableFlavor::Grid).unwrap();
        wizard.submit_dimensions(2, 2).unwrap();

        let draft = wizard.draft_mut().unwrap();
        draft.push_row().unwrap();
        assert!(draft.push_row().is_err());
        assert!(draft.push_column().is_err());
        draft.set_cell(2, 1, "x").unwrap();
        assert!(draft.set_cell(3, 0, "y").is_err());
        assert_eq!(draft.rows(), 3);

        assert!(draft.pop_row());
        assert!(draft.pop_row());
        assert!(!draft.pop_row());
        assert!(draft.pop_column());
        assert!(!draft.pop_column());
        assert_eq!((draft.rows(), draft.columns()), (1, 1));
    }
}
