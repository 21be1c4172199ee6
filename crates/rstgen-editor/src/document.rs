//! Document buffer with its current selection.

use crate::insert::{Selection, SelectionError, selected_text, splice};

/// Tab stop width used when expanding tabs.
const TAB_WIDTH: usize = 8;

/// The document text and the selection inside it.
///
/// The text only ever contains `\n` as a control character: inserted text is
/// normalized (`\r\n` and `\r` become `\n`, tabs are expanded, other control
/// characters are dropped). The selection always lies within the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    selection: Selection,
}

impl Document {
    /// An empty document with the caret at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding `text`, caret at the end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = sanitize(text, 0);
        let selection = Selection::caret(text.chars().count());
        Self { text, selection }
    }

    /// Rebuild a document from the lines produced by [`lines`](Self::lines).
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_text(&joined)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Document length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select `start..end` (character offsets).
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the range is inverted or extends past
    /// the end of the document. The previous selection is kept.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), SelectionError> {
        let selection = Selection::new(start, end)?;
        selection.check(self.char_len())?;
        self.selection = selection;
        Ok(())
    }

    /// Place the caret at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfBounds`] if `offset` is past the end.
    pub fn set_caret(&mut self, offset: usize) -> Result<(), SelectionError> {
        self.select(offset, offset)
    }

    /// Text covered by the current selection.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        selected_text(&self.text, self.selection).unwrap_or_default()
    }

    /// Replace the selection with `fragment` and move the caret after it.
    ///
    /// Returns the new caret offset.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the selection is no longer valid; the
    /// document is left unchanged.
    pub fn insert(&mut self, fragment: &str) -> Result<usize, SelectionError> {
        let column = column_at(&self.text, self.selection.start());
        let fragment = sanitize(fragment, column);
        let insertion = splice(&self.text, self.selection, &fragment)?;
        self.text = insertion.buffer;
        self.selection = Selection::caret(insertion.caret);
        Ok(insertion.caret)
    }

    /// The document as a list of lines, the form a rendering backend
    /// consumes. Joining them with `\n` yields the text again.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.text.split('\n').map(str::to_owned).collect()
    }
}

/// Column of the character offset `offset`, counted from its line start.
fn column_at(text: &str, offset: usize) -> usize {
    text.chars()
        .take(offset)
        .fold(0, |column, c| if c == '\n' { 0 } else { column + 1 })
}

/// Normalize line endings, expand tabs and drop other control characters.
///
/// `column` is where the first line of `text` starts, so tab stops line up
/// with the surrounding line.
fn sanitize(text: &str, mut column: usize) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => {
                out.push('\n');
                column = 0;
            }
            '\t' => {
                let spaces = TAB_WIDTH - column % TAB_WIDTH;
                out.extend(std::iter::repeat_n(' ', spaces));
                column += spaces;
            }
            c if c.is_control() => {}
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
