//! Declarative table rendering.
//!
//! A table is described by an ordered list of [`ColumnSpec`]s and filled from opaque JSON
//! records. [`render`] replaces everything a [`RenderTarget`] held before, so rendering the
//! same input twice gives the same grid and new data never mixes with old rows.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::display::display_value;

/// Formats one cell from the whole record.
pub type CellRenderer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// One column: the record field it reads, its header and an optional formatter.
#[derive(Clone)]
pub struct ColumnSpec {
    pub key: String,
    pub header: String,
    pub render: Option<CellRenderer>,
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            render: None,
        }
    }

    /// Use `render` for every cell of this column instead of the raw field.
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Cell text for `record`. A missing field gives an empty cell.
    pub fn cell(&self, record: &Value) -> String {
        match &self.render {
            Some(render) => render(record),
            None => record.get(&self.key).map(display_value).unwrap_or_default(),
        }
    }
}

/// Something a table can be drawn into.
pub trait RenderTarget {
    /// Drop every header and row.
    fn clear(&mut self);
    fn push_header(&mut self, headers: Vec<String>);
    fn push_row(&mut self, cells: Vec<String>);
}

/// In-memory grid of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RenderTarget for Grid {
    fn clear(&mut self) {
        self.headers.clear();
        self.rows.clear();
    }

    fn push_header(&mut self, headers: Vec<String>) {
        self.headers = headers;
    }

    fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }
}

/// Replace the contents of `target` with `records` laid out by `columns`.
pub fn render<T: RenderTarget + ?Sized>(target: &mut T, columns: &[ColumnSpec], records: &[Value]) {
    target.clear();
    target.push_header(columns.iter().map(|c| c.header.clone()).collect());
    for record in records {
        target.push_row(columns.iter().map(|c| c.cell(record)).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_numeric_cell() {
        let columns = [ColumnSpec::new("Amount", "Amount")];
        let mut grid = Grid::new();

        render(&mut grid, &columns, &[json!({"Amount": 50})]);

        assert_eq!(grid.headers, vec!["Amount"]);
        assert_eq!(grid.rows, vec![vec!["50"]]);
    }

    #[test]
    fn test_render_function_wins_over_raw_field() {
        let columns = [ColumnSpec::new("Amount", "Amount")
            .with_render(|record| format!("${}", display_value(&record["Amount"])))];
        let mut grid = Grid::new();

        render(&mut grid, &columns, &[json!({"Amount": 50})]);

        assert_eq!(grid.rows, vec![vec!["$50"]]);
    }

    #[test]
    fn test_missing_field_is_empty_cell() {
        let columns = [ColumnSpec::new("ID", "ID"), ColumnSpec::new("Status", "Status")];
        let mut grid = Grid::new();

        render(&mut grid, &columns, &[json!({"ID": 7})]);

        assert_eq!(grid.rows, vec![vec!["7".to_owned(), String::new()]]);
    }

    #[test]
    fn test_columns_keep_their_order() {
        let columns = [
            ColumnSpec::new("b", "B"),
            ColumnSpec::new("a", "A"),
            ColumnSpec::new("c", "C"),
        ];
        let mut grid = Grid::new();

        render(&mut grid, &columns, &[json!({"a": "1", "b": "2", "c": "3"})]);

        assert_eq!(grid.headers, vec!["B", "A", "C"]);
        assert_eq!(grid.rows, vec![vec!["2", "1", "3"]]);
    }

    #[test]
    fn test_rendering_twice_equals_rendering_once() {
        let columns = [ColumnSpec::new("ID", "ID")];
        let records = [json!({"ID": 1}), json!({"ID": 2})];

        let mut once = Grid::new();
        render(&mut once, &columns, &records);

        let mut twice = Grid::new();
        render(&mut twice, &columns, &records);
        render(&mut twice, &columns, &records);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_new_data_leaves_no_leftovers() {
        let mut grid = Grid::new();
        render(
            &mut grid,
            &[ColumnSpec::new("ID", "ID"), ColumnSpec::new("Amount", "Amount")],
            &[json!({"ID": 1, "Amount": 5}), json!({"ID": 2, "Amount": 6})],
        );

        render(&mut grid, &[ColumnSpec::new("Action", "Action")], &[json!({"Action": "deposit"})]);

        assert_eq!(grid.headers, vec!["Action"]);
        assert_eq!(grid.rows, vec![vec!["deposit"]]);
    }

    #[test]
    fn test_no_records_gives_headers_only() {
        let mut grid = Grid::new();
        render(&mut grid, &[ColumnSpec::new("ID", "ID")], &[]);

        assert_eq!(grid.headers, vec!["ID"]);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_nested_values_use_json_text() {
        let mut grid = Grid::new();
        render(
            &mut grid,
            &[ColumnSpec::new("meta", "Meta")],
            &[json!({"meta": {"k": [1, 2]}})],
        );

        assert_eq!(grid.rows, vec![vec![r#"{"k":[1,2]}"#]]);
    }
}
