//! Grid table rendering.
//!
//! Produces reStructuredText "grid table" markup:
//!
//! ```text
//! +--------+-------+
//! | Header | Other |
//! +========+=======+
//! | cell   | cell  |
//! +--------+-------+
//! ```

use unicode_width::UnicodeWidthStr;

use crate::MalformedGridError;
use crate::layout::{CELL_PADDING, column_widths, normalize_cell};

/// Render `rows` as a bordered grid table. The first row is the header.
///
/// Every line of the output has the same display width and ends with `\n`.
/// Cells are left-aligned and never truncated.
///
/// # Errors
///
/// Returns [`MalformedGridError`] if the grid is empty or ragged.
pub fn render_grid<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<String, MalformedGridError> {
    let widths = column_widths(rows)?;

    let row_separator = separator(&widths, '-');
    let header_separator = separator(&widths, '=');

    let mut out = String::new();
    out.push_str(&row_separator);

    let mut rows = rows.iter();
    if let Some(header) = rows.next() {
        push_content_row(&mut out, header, &widths);
        out.push_str(&header_separator);
    }
    for row in rows {
        push_content_row(&mut out, row, &widths);
        out.push_str(&row_separator);
    }

    Ok(out)
}

/// Build a separator line such as `+----+---+\n`.
fn separator(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.extend(std::iter::repeat_n(fill, width));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_content_row<S: AsRef<str>>(out: &mut String, row: &[S], widths: &[usize]) {
    out.push('|');
    for (cell, &width) in row.iter().zip(widths) {
        let cell = normalize_cell(cell.as_ref());
        let padding = width - CELL_PADDING - cell.width();
        out.push(' ');
        out.push_str(&cell);
        out.extend(std::iter::repeat_n(' ', padding));
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_header_and_body() {
        let rows = vec![
            vec!["Kind", "Status"],
            vec!["req", "open"],
            vec!["spec", "closed"],
        ];
        let expected = "\
+------+--------+
| Kind | Status |
+======+========+
| req  | open   |
+------+--------+
| spec | closed |
+------+--------+
";
        assert_eq!(render_grid(&rows).unwrap(), expected);
    }

    #[test]
    fn test_render_header_only() {
        let rows = vec![vec!["only"]];
        assert_eq!(render_grid(&rows).unwrap(), "+------+\n| only |\n+======+\n");
    }

    #[test]
    fn test_render_empty_cells() {
        let rows = vec![vec!["", ""], vec!["", ""]];
        let expected = "\
+--+--+
|  |  |
+==+==+
|  |  |
+--+--+
";
        assert_eq!(render_grid(&rows).unwrap(), expected);
    }

    #[test]
    fn test_all_lines_same_width() {
        let rows = vec![
            vec!["a", "longer header", "x"],
            vec!["日本語", "", "multi\nline"],
            vec!["", "b", "c"],
        ];
        let rendered = render_grid(&rows).unwrap();
        let widths: Vec<usize> = rendered.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn test_content_row_count_matches_grid() {
        let rows = vec![vec!["h"], vec!["1"], vec!["2"], vec!["3"]];
        let rendered = render_grid(&rows).unwrap();
        let content_rows = rendered.lines().filter(|l| l.starts_with('|')).count();
        assert_eq!(content_rows, 4);
    }

    #[test]
    fn test_cells_never_truncated() {
        let long = "a cell that is considerably longer than its neighbours";
        let rows = vec![vec!["h", "h2"], vec![long, "x"]];
        assert!(render_grid(&rows).unwrap().contains(long));
    }

    #[test]
    fn test_control_characters_do_not_break_alignment() {
        let rows = vec![vec!["a\tb", "h"], vec!["x\u{7}", "y\r\nz"]];
        let out = render_grid(&rows).unwrap();

        assert!(!out.contains(|c: char| c.is_control() && c != '\n'));
        let widths: Vec<usize> = out.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert_eq!(out.lines().nth(1), Some("| a b | h   |"));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let rows = vec![vec!["a", "b"], vec!["c", "d", "e"]];
        assert!(matches!(
            render_grid(&rows),
            Err(MalformedGridError::Ragged { row: 1, .. })
        ));
    }
}
