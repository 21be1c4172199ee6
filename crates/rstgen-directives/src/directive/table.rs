//! Grid and CSV tables.

use rstgen_table::{MalformedGridError, TableGrid, csv};

use super::{FromFields, Render, trim_blank_lines};
use crate::{DirectiveKind, DirectiveWriter, FieldReader, FormatError};

/// Indentation used by CSV tables built from a cell grid.
const CSV_GRID_INDENT: &str = "    ";

/// Bordered grid table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTable {
    grid: TableGrid,
}

impl GridTable {
    #[must_use]
    pub fn new(grid: TableGrid) -> Self {
        Self { grid }
    }
}

impl FromFields for GridTable {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let grid = TableGrid::try_from(fields.table("table")?)
            .map_err(|source| malformed(fields, source))?;
        Ok(Self::new(grid))
    }
}

impl Render for GridTable {
    fn render(&self) -> String {
        self.grid.render()
    }
}

/// CSV table with hand-written header and content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    title: String,
    header: String,
    content: Vec<String>,
}

impl FromFields for CsvTable {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        let content = trim_blank_lines(fields.lines("content")?);
        if content.is_empty() {
            return Err(FormatError::MissingField {
                kind: fields.kind().to_owned(),
                field: "content",
            });
        }
        Ok(Self {
            title: fields.text("title")?,
            header: fields.text("header")?,
            content,
        })
    }
}

impl Render for CsvTable {
    fn render(&self) -> String {
        DirectiveWriter::new("csv-table", Some(&self.title))
            .option("header", Some(&self.header))
            .body(&self.content)
            .finish()
    }
}

/// CSV table generated from header cells, width hints and a cell grid.
///
/// Every cell is quoted, so the rows can be split back into the original
/// values with [`rstgen_table::csv::split_row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvGridTable {
    title: String,
    header: Vec<String>,
    widths: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvGridTable {
    /// Validate and assemble a CSV grid table.
    ///
    /// `header` must have one entry per column of `rows`. `widths` is either
    /// empty or also one entry per column; hints are only emitted when every
    /// entry is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MalformedGrid`] for a ragged table and
    /// [`FormatError::InvalidField`] for width hints that do not fit or a
    /// cell containing a line break, which a CSV row cannot hold.
    pub fn new(
        kind: &str,
        title: String,
        header: Vec<String>,
        widths: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<Self, FormatError> {
        let mut grid = Vec::with_capacity(rows.len() + 1);
        grid.push(header);
        grid.extend(rows);
        let mut rows = TableGrid::try_from(grid)
            .map_err(|source| FormatError::MalformedGrid {
                kind: kind.to_owned(),
                source,
            })?
            .into_rows();
        if let Some((row, column)) = find_multiline_cell(&rows) {
            return Err(FormatError::InvalidField {
                kind: kind.to_owned(),
                field: if row == 0 { "header" } else { "rows" },
                reason: format!("cell at row {row}, column {column} spans several lines"),
            });
        }
        let header = rows.remove(0);

        let invalid = |reason: String| FormatError::InvalidField {
            kind: kind.to_owned(),
            field: "widths",
            reason,
        };
        if !widths.is_empty() && widths.len() != header.len() {
            return Err(invalid(format!(
                "expected {} width hints, got {}",
                header.len(),
                widths.len()
            )));
        }
        if let Some(bad) = widths
            .iter()
            .map(|w| w.trim())
            .find(|w| !w.is_empty() && !w.parse::<u32>().is_ok_and(|n| n > 0))
        {
            return Err(invalid(format!("`{bad}` is not a positive whole number")));
        }

        Ok(Self {
            title,
            header,
            widths: widths.into_iter().map(|w| w.trim().to_owned()).collect(),
            rows,
        })
    }

    fn widths_line(&self) -> Option<String> {
        let complete = !self.widths.is_empty() && self.widths.iter().all(|w| !w.is_empty());
        complete.then(|| self.widths.join(csv::SEPARATOR))
    }
}

impl FromFields for CsvGridTable {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Self::new(
            fields.kind(),
            fields.text("title")?,
            fields.cells("header")?,
            fields.cells("widths")?,
            fields.table("rows")?,
        )
    }
}

impl Render for CsvGridTable {
    fn render(&self) -> String {
        DirectiveWriter::new("csv-table", Some(&self.title))
            .with_indent(CSV_GRID_INDENT)
            .option("header", Some(csv::join_row(&self.header)))
            .option("widths", self.widths_line())
            .body(self.rows.iter().map(csv::join_row))
            .finish()
    }
}

/// Position of the first cell with a line break, header row first.
fn find_multiline_cell(rows: &[Vec<String>]) -> Option<(usize, usize)> {
    rows.iter().enumerate().find_map(|(r, row)| {
        row.iter()
            .position(|cell| cell.contains(['\n', '\r']))
            .map(|c| (r, c))
    })
}

fn malformed(fields: &FieldReader<'_>, source: MalformedGridError) -> FormatError {
    FormatError::MalformedGrid {
        kind: fields.kind().to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FieldMap;

    fn csv_grid(fields: &FieldMap) -> Result<CsvGridTable, FormatError> {
        CsvGridTable::from_fields(
            DirectiveKind::CsvTableEdit,
            &FieldReader::new("csv-table-edit", fields),
        )
    }

    #[test]
    fn test_grid_table() {
        let fields = FieldMap::new().with("table", vec![vec!["A", "B"], vec!["1", "22"]]);
        let table =
            GridTable::from_fields(DirectiveKind::GridTable, &FieldReader::new("grid_table", &fields))
                .unwrap();
        assert_eq!(
            table.render(),
            "+---+----+\n| A | B  |\n+===+====+\n| 1 | 22 |\n+---+----+\n"
        );
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let fields = FieldMap::new().with("table", vec![vec!["A", "B"], vec!["1"]]);
        let err =
            GridTable::from_fields(DirectiveKind::GridTable, &FieldReader::new("grid_table", &fields))
                .unwrap_err();
        assert!(matches!(
            err,
            FormatError::MalformedGrid {
                source: MalformedGridError::Ragged { row: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_simple_csv_table() {
        let fields = FieldMap::new()
            .with("title", "Fruit")
            .with("header", "\"Name\", \"Color\"")
            .with("content", "\"Apple\", \"Red\"\n\"Lime\", \"Green\"");
        let table =
            CsvTable::from_fields(DirectiveKind::CsvTable, &FieldReader::new("csv-table", &fields))
                .unwrap();
        assert_eq!(
            table.render(),
            ".. csv-table:: Fruit\n   :header: \"Name\", \"Color\"\n\n   \"Apple\", \"Red\"\n   \"Lime\", \"Green\"\n"
        );
    }

    #[test]
    fn test_csv_grid_table() {
        let fields = FieldMap::new()
            .with("title", "People")
            .with("header", vec!["Name", "Age"])
            .with("widths", vec!["30", "10"])
            .with("rows", vec![vec!["Ann", "31"], vec!["", "say \"hi\""]]);
        assert_eq!(
            csv_grid(&fields).unwrap().render(),
            ".. csv-table:: People\n    :header: \"Name\", \"Age\"\n    :widths: 30, 10\n\n    \"Ann\", \"31\"\n    \"\", \"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_incomplete_widths_omitted() {
        let fields = FieldMap::new()
            .with("title", "T")
            .with("header", vec!["a", "b"])
            .with("widths", vec!["3", ""])
            .with("rows", vec![vec!["1", "2"]]);
        assert_eq!(
            csv_grid(&fields).unwrap().render(),
            ".. csv-table:: T\n    :header: \"a\", \"b\"\n\n    \"1\", \"2\"\n"
        );
    }

    #[test]
    fn test_width_count_mismatch() {
        let fields = FieldMap::new()
            .with("title", "T")
            .with("header", vec!["a", "b"])
            .with("widths", vec!["3"])
            .with("rows", vec![vec!["1", "2"]]);
        assert!(matches!(
            csv_grid(&fields),
            Err(FormatError::InvalidField { field: "widths", .. })
        ));
    }

    #[test]
    fn test_header_must_match_columns() {
        let fields = FieldMap::new()
            .with("title", "T")
            .with("header", vec!["a"])
            .with("rows", vec![vec!["1", "2"]]);
        assert!(matches!(
            csv_grid(&fields),
            Err(FormatError::MalformedGrid { .. })
        ));
    }

    #[test]
    fn test_csv_round_trip() {
        let header = vec!["Key, name", "Value", " Age ", "First  Name"];
        let rows = vec![
            vec!["a \"quoted\" one", "", "  ", "x"],
            vec!["b", "2, 3", "40", "Ada  Lovelace"],
        ];
        let fields = FieldMap::new()
            .with("title", "Data")
            .with("header", header.clone())
            .with("widths", vec!["1", "2", "1", "2"])
            .with("rows", rows.clone());
        let rst = csv_grid(&fields).unwrap().render();

        let mut lines = rst.lines();
        assert_eq!(lines.next(), Some(".. csv-table:: Data"));
        let header_line = lines.next().unwrap().trim_start();
        let widths_line = lines.next().unwrap().trim_start();
        assert_eq!(lines.next(), Some(""));
        let parsed_rows: Vec<Vec<String>> = lines
            .map(|line| csv::split_row(line.trim_start()).unwrap())
            .collect();

        assert_eq!(
            csv::split_row(header_line.strip_prefix(":header:").unwrap()).unwrap(),
            header
        );
        assert_eq!(
            csv::split_row(widths_line.strip_prefix(":widths:").unwrap()).unwrap(),
            vec!["1", "2", "1", "2"]
        );
        assert_eq!(parsed_rows, rows);
    }

    #[test]
    fn test_multiline_cells_rejected() {
        let fields = FieldMap::new()
            .with("title", "Data")
            .with("header", vec!["A", "B"])
            .with("rows", vec![vec!["one", "two\nlines"]]);
        assert!(matches!(
            csv_grid(&fields),
            Err(FormatError::InvalidField { field: "rows", .. })
        ));

        let mut cells = FieldMap::new()
            .with("title", "Data")
            .with("rows", vec![vec!["one", "two"]]);
        cells.insert("header", vec!["A\r", "B"]);
        assert!(matches!(
            csv_grid(&cells),
            Err(FormatError::InvalidField { field: "header", .. })
        ));
    }
}
