//! CSV row quoting for `csv-table` directives.
//!
//! Every cell is wrapped in double quotes, embedded quotes are doubled, and
//! cells are joined with `", "`:
//!
//! ```
//! use rstgen_table::csv;
//!
//! let line = csv::join_row(["plain", "", "say \"hi\""]);
//! assert_eq!(line, r#""plain", "", "say ""hi""""#);
//! assert_eq!(csv::split_row(&line).unwrap(), vec!["plain", "", "say \"hi\""]);
//! ```

/// Separator placed between quoted cells.
pub const SEPARATOR: &str = ", ";

/// Error from [`split_row`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvParseError {
    /// A quoted cell was not closed before the end of the line.
    #[error("unterminated quoted cell starting at byte {0}")]
    UnterminatedQuote(usize),
    /// Text appeared between a closing quote and the next separator.
    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedCharacter {
        /// Byte offset of the character.
        position: usize,
        /// The character found.
        found: char,
    },
}

/// Quote a single cell: `say "hi"` becomes `"say ""hi"""`, an empty cell `""`.
///
/// A line break becomes a space, so a cell holding one does not survive
/// [`split_row`] unchanged.
#[must_use]
pub fn quote_cell(cell: &str) -> String {
    let mut quoted = String::with_capacity(cell.len() + 2);
    quoted.push('"');
    for c in cell.chars() {
        match c {
            '"' => quoted.push_str("\"\""),
            '\n' => quoted.push(' '),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Quote every cell and join them with [`SEPARATOR`].
pub fn join_row<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|cell| quote_cell(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Split a line produced by [`join_row`] back into cell values.
///
/// Whitespace around separators is ignored. Unquoted cells are accepted and
/// trimmed.
///
/// # Errors
///
/// Returns [`CsvParseError`] if a quote is left open or a closing quote is
/// followed by anything other than a separator.
pub fn split_row(line: &str) -> Result<Vec<String>, CsvParseError> {
    let mut cells = Vec::new();
    let mut chars = line.char_indices().peekable();

    loop {
        while chars.next_if(|&(_, c)| c == ' ' || c == '\t').is_some() {}

        let mut cell = String::new();
        match chars.peek() {
            Some(&(start, '"')) => {
                chars.next();
                loop {
                    match chars.next() {
                        Some((_, '"')) => {
                            if chars.next_if(|&(_, c)| c == '"').is_some() {
                                cell.push('"');
                            } else {
                                break;
                            }
                        }
                        Some((_, c)) => cell.push(c),
                        None => return Err(CsvParseError::UnterminatedQuote(start)),
                    }
                }
                while chars.next_if(|&(_, c)| c == ' ' || c == '\t').is_some() {}
                match chars.next() {
                    None => {
                        cells.push(cell);
                        return Ok(cells);
                    }
                    Some((_, ',')) => cells.push(cell),
                    Some((position, found)) => {
                        return Err(CsvParseError::UnexpectedCharacter { position, found });
                    }
                }
            }
            _ => {
                let mut ended = true;
                for (_, c) in chars.by_ref() {
                    if c == ',' {
                        ended = false;
                        break;
                    }
                    cell.push(c);
                }
                cells.push(cell.trim().to_owned());
                if ended {
                    return Ok(cells);
                }
            }
        }
    }
}
