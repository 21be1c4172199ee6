//! Column layout calculation for fixed-width tables.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::MalformedGridError;

/// Columns of padding added to the widest cell (one space on each side).
pub const CELL_PADDING: usize = 2;

/// Cell text as it is rendered: line breaks and tabs become single spaces,
/// other control characters are dropped.
///
/// The result holds printable characters only, so its display width does not
/// depend on where the rendered table ends up.
#[must_use]
pub fn normalize_cell(cell: &str) -> Cow<'_, str> {
    if !cell.contains(char::is_control) {
        return Cow::Borrowed(cell);
    }
    Cow::Owned(
        cell.replace("\r\n", "\n")
            .chars()
            .filter_map(|c| match c {
                '\n' | '\r' | '\t' => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect(),
    )
}

/// Display width of a cell as it will be rendered. See [`normalize_cell`].
#[must_use]
pub fn cell_width(cell: &str) -> usize {
    normalize_cell(cell).width()
}

/// Compute the rendered width of every column.
///
/// Each width is the display width of the widest cell in the column plus
/// [`CELL_PADDING`].
///
/// # Errors
///
/// Returns [`MalformedGridError::Empty`] for a grid without cells and
/// [`MalformedGridError::Ragged`] when rows differ in length.
///
/// # Example
///
/// ```
/// use rstgen_table::column_widths;
///
/// let rows = vec![vec!["a", "bbb"], vec!["cc", ""]];
/// assert_eq!(column_widths(&rows).unwrap(), vec![4, 5]);
/// ```
pub fn column_widths<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<usize>, MalformedGridError> {
    check_rectangular(rows)?;

    let mut widths = vec![0; rows[0].len()];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell.as_ref()));
        }
    }

    Ok(widths.into_iter().map(|w| w + CELL_PADDING).collect())
}

/// Verify that `rows` is a non-empty rectangle.
pub(crate) fn check_rectangular<S>(rows: &[Vec<S>]) -> Result<(), MalformedGridError> {
    let expected = rows.first().map_or(0, Vec::len);
    if expected == 0 {
        return Err(MalformedGridError::Empty);
    }

    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(MalformedGridError::Ragged {
            row,
            expected,
            found,
        });
    }

    Ok(())
}
