//! Editing session: one document, its selection, and the table wizard.

use rstgen_directives::{DirectiveKind, DirectiveRequest, FieldMap, FieldReader, FormatError};

use crate::document::Document;
use crate::insert::SelectionError;
use crate::wizard::{
    TableDraft, TableFlavor, TableWizard, WizardError, WizardLimits, check_dimensions,
};

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum SubmitOutcome {
    /// A fragment was inserted; the caret now sits at `caret`.
    Inserted { caret: usize },
    /// The table wizard waits for the table's dimensions.
    AwaitingDimensions { flavor: TableFlavor },
    /// The table wizard waits for the cell contents of a draft this size.
    AwaitingCells { rows: usize, columns: usize },
}

/// Submission errors. The document is unchanged when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// A single-user editing session.
///
/// Form submissions go through [`submit`](Self::submit): the fragment for
/// the submitted kind is formatted and spliced into the document at the
/// current selection. Table kinds go through the [`TableWizard`] first.
///
/// # Example
///
/// ```
/// use rstgen_directives::FieldMap;
/// use rstgen_editor::{EditorSession, SubmitOutcome};
///
/// let mut session = EditorSession::new();
/// session.submit("title", &FieldMap::new().with("text", "Intro")).unwrap();
///
/// let outcome = session
///     .submit("grid_table", &FieldMap::new().with("rows", 2).with("columns", 1))
///     .unwrap();
/// assert_eq!(outcome, SubmitOutcome::AwaitingCells { rows: 2, columns: 1 });
///
/// session
///     .submit("grid_table_edit", &FieldMap::new().with("table", vec![vec!["H"], vec!["v"]]))
///     .unwrap();
/// assert_eq!(
///     session.document().text(),
///     "Intro\n=====\n+---+\n| H |\n+===+\n| v |\n+---+\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    document: Document,
    wizard: TableWizard,
}

impl EditorSession {
    /// A session with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose table wizard uses `limits`.
    #[must_use]
    pub fn with_limits(limits: WizardLimits) -> Self {
        Self {
            document: Document::new(),
            wizard: TableWizard::new(limits),
        }
    }

    /// Continue editing an existing document.
    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    #[must_use]
    pub fn wizard(&self) -> &TableWizard {
        &self.wizard
    }

    /// Draft of the table in its cell step, for row and column edits.
    pub fn table_draft_mut(&mut self) -> Option<&mut TableDraft> {
        self.wizard.draft_mut()
    }

    /// Select `start..end` in the document.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] for an inverted or out-of-range selection.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), SessionError> {
        self.document.select(start, end)?;
        Ok(())
    }

    /// Start a table without dimensions (the dimension form is shown next).
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Busy`] if a table is already in progress.
    pub fn open_table(&mut self, flavor: TableFlavor) -> Result<SubmitOutcome, SessionError> {
        self.wizard.open(flavor)?;
        Ok(SubmitOutcome::AwaitingDimensions { flavor })
    }

    /// Abandon the table in progress, if any.
    pub fn cancel_table(&mut self) {
        self.wizard.cancel();
    }

    /// Submit a [`DirectiveRequest`].
    ///
    /// # Errors
    ///
    /// See [`submit`](Self::submit).
    pub fn submit_request(
        &mut self,
        request: &DirectiveRequest,
    ) -> Result<SubmitOutcome, SessionError> {
        self.submit(&request.kind, &request.fields)
    }

    /// Submit one form.
    ///
    /// - `grid_table` (and `csv-table` with a `rows` field) starts a table:
    ///   the dimensions are taken and an empty draft created.
    /// - `grid_table_edit` / `csv-table-edit` completes the table with the
    ///   submitted cells and inserts it.
    /// - Inline kinds without a `text` field wrap the selected text.
    /// - Everything else is formatted and inserted at the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] for invalid fields or wizard misuse; the
    /// document is left unchanged. Rejected dimensions leave an idle wizard
    /// idle; a wizard opened with [`open_table`](Self::open_table) keeps
    /// waiting for dimensions.
    pub fn submit(&mut self, kind: &str, fields: &FieldMap) -> Result<SubmitOutcome, SessionError> {
        let result = match DirectiveKind::from_name(kind) {
            Some(DirectiveKind::GridTable) => self.start_table(TableFlavor::Grid, kind, fields),
            Some(DirectiveKind::CsvTable) if fields.contains("rows") => {
                self.start_table(TableFlavor::Csv, kind, fields)
            }
            Some(DirectiveKind::GridTableEdit) => {
                self.finish_table(TableFlavor::Grid, kind, fields, "table")
            }
            Some(DirectiveKind::CsvTableEdit) => {
                self.finish_table(TableFlavor::Csv, kind, fields, "rows")
            }
            Some(inline) if inline.is_inline() && !fields.contains("text") => {
                let fields = fields
                    .clone()
                    .with("text", self.document.selected_text());
                self.insert(kind, &fields)
            }
            _ => self.insert(kind, fields),
        };
        if let Err(error) = &result {
            tracing::warn!(kind, %error, "Submission rejected");
        }
        result
    }

    fn insert(&mut self, kind: &str, fields: &FieldMap) -> Result<SubmitOutcome, SessionError> {
        let fragment = rstgen_directives::format(kind, fields)?;
        let caret = self.document.insert(&fragment)?;
        tracing::debug!(kind, caret, "Fragment inserted");
        Ok(SubmitOutcome::Inserted { caret })
    }

    fn start_table(
        &mut self,
        flavor: TableFlavor,
        kind: &str,
        fields: &FieldMap,
    ) -> Result<SubmitOutcome, SessionError> {
        let reader = FieldReader::new(kind, fields);
        let rows = reader.count("rows")?;
        let columns = reader.count("columns")?;

        if self.wizard.is_idle() {
            check_dimensions(self.wizard.limits(), rows, columns)?;
            self.wizard.open(flavor)?;
        } else if self.wizard.is_collecting_dimensions() && self.wizard.flavor() != Some(flavor) {
            return Err(WizardError::Busy(self.wizard.flavor().unwrap_or(flavor)).into());
        }
        let draft = self.wizard.submit_dimensions(rows, columns)?;
        Ok(SubmitOutcome::AwaitingCells {
            rows: draft.rows(),
            columns: draft.columns(),
        })
    }

    fn finish_table(
        &mut self,
        flavor: TableFlavor,
        kind: &str,
        fields: &FieldMap,
        cell_field: &'static str,
    ) -> Result<SubmitOutcome, SessionError> {
        let cells = if fields.contains(cell_field) {
            FieldReader::new(kind, fields).table(cell_field)?
        } else {
            Vec::new()
        };
        let grid = self.wizard.fill(flavor, &cells)?;

        let fields = fields.clone().with(cell_field, grid.into_rows());
        let outcome = self.insert(kind, &fields)?;
        self.wizard.finish()?;
        Ok(outcome)
    }
}
