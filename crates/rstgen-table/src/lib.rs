//! Table grid model and fixed-width layout for reStructuredText tables.
//!
//! This crate holds the pieces shared by the grid table and CSV table
//! directives:
//!
//! - [`TableGrid`]: a rectangular grid of cell strings (first row is the header)
//! - [`column_widths`]: the column layout calculator
//! - [`render_grid`]: the bordered "grid table" renderer
//! - [`csv`]: quoting and splitting of CSV table rows
//!
//! # Example
//!
//! ```
//! use rstgen_table::TableGrid;
//!
//! let grid = TableGrid::try_from(vec![
//!     vec!["Name".to_owned(), "Role".to_owned()],
//!     vec!["Ada".to_owned(), "Engineer".to_owned()],
//! ])
//! .unwrap();
//!
//! assert_eq!(grid.column_widths(), vec![6, 10]);
//! assert_eq!(
//!     grid.render(),
//!     "+------+----------+\n\
//!      | Name | Role     |\n\
//!      +======+==========+\n\
//!      | Ada  | Engineer |\n\
//!      +------+----------+\n"
//! );
//! ```

pub mod csv;
mod error;
mod grid;
mod layout;
mod render;

pub use error::MalformedGridError;
pub use grid::TableGrid;
pub use layout::{CELL_PADDING, cell_width, column_widths, normalize_cell};
pub use render::render_grid;
