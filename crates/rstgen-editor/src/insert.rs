//! Cursor-based fragment insertion.
//!
//! Offsets count characters (Unicode scalar values), not bytes, so they match
//! what a text widget reports for its selection.

/// Selected range of a buffer; a caret when `start == end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Create a selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Inverted`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// An empty selection at `offset`.
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Check that the selection lies within a buffer of `len` characters.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfBounds`] if it does not.
    pub fn check(&self, len: usize) -> Result<(), SelectionError> {
        if self.end > len {
            return Err(SelectionError::OutOfBounds { end: self.end, len });
        }
        Ok(())
    }
}

/// Invalid selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection start {start} is after its end {end}")]
    Inverted { start: usize, end: usize },
    #[error("selection end {end} is beyond the buffer length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// Result of [`insert`]: the new buffer and the caret just after the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insertion {
    pub buffer: String,
    pub caret: usize,
}

/// Replace the selected range `start..end` of `buffer` with `fragment`.
///
/// The caret lands at `start + fragment length`. The input buffer is not
/// modified.
///
/// # Errors
///
/// Returns [`SelectionError`] if `start > end` or `end` is beyond the buffer.
///
/// # Example
///
/// ```
/// use rstgen_editor::insert;
///
/// let insertion = insert("ABCDEF", 2, 4, "X").unwrap();
/// assert_eq!(insertion.buffer, "ABXEF");
/// assert_eq!(insertion.caret, 3);
/// ```
pub fn insert(
    buffer: &str,
    start: usize,
    end: usize,
    fragment: &str,
) -> Result<Insertion, SelectionError> {
    splice(buffer, Selection::new(start, end)?, fragment)
}

/// [`insert`] with a prebuilt [`Selection`].
///
/// # Errors
///
/// Returns [`SelectionError::OutOfBounds`] if the selection ends beyond the
/// buffer.
pub fn splice(
    buffer: &str,
    selection: Selection,
    fragment: &str,
) -> Result<Insertion, SelectionError> {
    let (start, end) = byte_range(buffer, selection)?;

    let mut out = String::with_capacity(buffer.len() - (end - start) + fragment.len());
    out.push_str(&buffer[..start]);
    out.push_str(fragment);
    out.push_str(&buffer[end..]);

    Ok(Insertion {
        buffer: out,
        caret: selection.start + fragment.chars().count(),
    })
}

/// Text covered by `selection`.
///
/// # Errors
///
/// Returns [`SelectionError::OutOfBounds`] if the selection ends beyond the
/// buffer.
pub fn selected_text(buffer: &str, selection: Selection) -> Result<&str, SelectionError> {
    let (start, end) = byte_range(buffer, selection)?;
    Ok(&buffer[start..end])
}

/// Convert a character selection into a byte range of `buffer`.
fn byte_range(buffer: &str, selection: Selection) -> Result<(usize, usize), SelectionError> {
    let mut offsets = buffer
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(buffer.len()));
    let out_of_bounds = || SelectionError::OutOfBounds {
        end: selection.end,
        len: buffer.chars().count(),
    };

    let start = offsets.nth(selection.start).ok_or_else(out_of_bounds)?;
    let end = if selection.is_caret() {
        start
    } else {
        offsets
            .nth(selection.width() - 1)
            .ok_or_else(out_of_bounds)?
    };
    Ok((start, end))
}
