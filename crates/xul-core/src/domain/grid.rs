//! Grid builder populated as a side effect of rendering.
//!
//! Column declarations and row cells share one key space. Cells are always
//! written into the *active row*, which is the row most recently added.

use serde::Serialize;

use crate::domain::{error::DomainError, markup::Attributes};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub key: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub key: String,
    pub content: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    header: bool,
    attributes: Attributes,
    cells: Vec<Cell>,
}

impl Row {
    pub fn is_header(&self) -> bool {
        self.header
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, key: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.key == key)
    }
}

/// Tabular output model: ordered rows plus ordered column declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    columns: Vec<Column>,
    rows: Vec<Row>,
    #[serde(skip)]
    active: Option<usize>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row and make it the active one.
    ///
    /// Header rows go after any existing header rows and before every body
    /// row; body rows are appended. Returns the new row's index.
    pub fn add_row(&mut self, attributes: Attributes, header: bool) -> usize {
        let row = Row {
            header,
            attributes,
            cells: Vec::new(),
        };
        let index = if header {
            self.rows.iter().take_while(|r| r.header).count()
        } else {
            self.rows.len()
        };
        self.rows.insert(index, row);
        self.active = Some(index);
        index
    }

    /// Declare a column. Re-declaring a key updates its attributes but keeps
    /// its original position.
    pub fn add_column(&mut self, key: impl Into<String>, attributes: Attributes) {
        let key = key.into();
        match self.columns.iter_mut().find(|c| c.key == key) {
            Some(column) => column.attributes = attributes,
            None => self.columns.push(Column { key, attributes }),
        }
    }

    /// Write a cell into the active row.
    ///
    /// The column must already be declared and a row must be active.
    pub fn set_row_cell(
        &mut self,
        key: &str,
        content: impl Into<String>,
        attributes: Attributes,
    ) -> Result<(), DomainError> {
        if !self.has_column(key) {
            return Err(DomainError::GridStateViolation {
                column: key.to_string(),
                reason: "column was never declared".into(),
            });
        }
        let Some(row) = self.active.and_then(|i| self.rows.get_mut(i)) else {
            return Err(DomainError::GridStateViolation {
                column: key.to_string(),
                reason: "no active row to write into".into(),
            });
        };

        let cell = Cell {
            key: key.to_string(),
            content: content.into(),
            attributes,
        };
        match row.cells.iter_mut().find(|c| c.key == key) {
            Some(existing) => *existing = cell,
            None => row.cells.push(cell),
        }
        Ok(())
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn active_row(&self) -> Option<&Row> {
        self.active.and_then(|i| self.rows.get(i))
    }

    /// First header row, if any.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first().filter(|r| r.header)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    /// Serialize as an HTML table.
    ///
    /// Cells are emitted in column-declaration order; a row without a cell
    /// for some column gets an empty one.
    pub fn to_html(&self, table_attributes: &Attributes) -> String {
        let mut html = String::from("<table");
        push_attributes(&mut html, table_attributes);
        html.push('>');

        let (head, body): (Vec<&Row>, Vec<&Row>) = self.rows.iter().partition(|r| r.header);
        if !head.is_empty() {
            html.push_str("<thead>");
            for row in head {
                self.push_row(&mut html, row, "th");
            }
            html.push_str("</thead>");
        }
        if !body.is_empty() {
            html.push_str("<tbody>");
            for row in body {
                self.push_row(&mut html, row, "td");
            }
            html.push_str("</tbody>");
        }

        html.push_str("</table>");
        html
    }

    fn push_row(&self, html: &mut String, row: &Row, cell_tag: &str) {
        html.push_str("<tr");
        push_attributes(html, &row.attributes);
        html.push('>');
        for column in &self.columns {
            html.push('<');
            html.push_str(cell_tag);
            match row.cell(&column.key) {
                Some(cell) => {
                    push_attributes(html, &cell.attributes);
                    html.push('>');
                    html.push_str(&escape(&cell.content));
                }
                None => html.push('>'),
            }
            html.push_str("</");
            html.push_str(cell_tag);
            html.push('>');
        }
        html.push_str("</tr>");
    }
}

fn push_attributes(html: &mut String, attributes: &Attributes) {
    for (name, value) in attributes.iter() {
        html.push(' ');
        html.push_str(name);
        html.push_str("=\"");
        html.push_str(&escape(value));
        html.push('"');
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn header_rows_precede_body_rows() {
        let mut grid = Grid::new();
        grid.add_row(Attributes::new(), false);
        grid.add_row(Attributes::new(), false);
        let index = grid.add_row(Attributes::new(), true);
        assert_eq!(index, 0);
        assert!(grid.rows()[0].is_header());
        assert!(grid.active_row().is_some_and(Row::is_header));

        let second = grid.add_row(Attributes::new(), true);
        assert_eq!(second, 1);
        assert!(!grid.rows()[2].is_header());
    }

    #[test]
    fn cell_requires_declared_column() {
        let mut grid = Grid::new();
        grid.add_row(Attributes::new(), false);
        let err = grid.set_row_cell("name", "Ada", Attributes::new()).unwrap_err();
        assert!(matches!(err, DomainError::GridStateViolation { ref column, .. } if column == "name"));
    }

    #[test]
    fn cell_requires_active_row() {
        let mut grid = Grid::new();
        grid.add_column("name", Attributes::new());
        let err = grid.set_row_cell("name", "Ada", Attributes::new()).unwrap_err();
        assert!(err.to_string().contains("no active row"));
    }

    #[test]
    fn redeclaring_a_column_keeps_position() {
        let mut grid = Grid::new();
        grid.add_column("name", attrs(&[("width", "10")]));
        grid.add_column("age", Attributes::new());
        grid.add_column("name", attrs(&[("width", "20")]));
        let keys: Vec<_> = grid.columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(grid.column("name").unwrap().attributes.get("width"), Some("20"));
    }

    #[test]
    fn rewriting_a_cell_replaces_it() {
        let mut grid = Grid::new();
        grid.add_column("name", Attributes::new());
        grid.add_row(Attributes::new(), false);
        grid.set_row_cell("name", "a", Attributes::new()).unwrap();
        grid.set_row_cell("name", "b", Attributes::new()).unwrap();
        let row = grid.active_row().unwrap();
        assert_eq!(row.cells().len(), 1);
        assert_eq!(row.cell("name").unwrap().content, "b");
    }

    #[test]
    fn html_output() {
        let mut grid = Grid::new();
        grid.add_column("name", Attributes::new());
        grid.add_column("age", Attributes::new());
        grid.add_row(Attributes::new(), true);
        grid.set_row_cell("name", "Name", attrs(&[("width", "20")])).unwrap();
        grid.set_row_cell("age", "Age", Attributes::new()).unwrap();
        grid.add_row(Attributes::new(), false);
        grid.set_row_cell("name", "<Ada>", Attributes::new()).unwrap();

        let html = grid.to_html(&attrs(&[("class", "table")]));
        assert_eq!(
            html,
            "<table class=\"table\"><thead><tr><th width=\"20\">Name</th><th>Age</th></tr></thead>\
             <tbody><tr><td>&lt;Ada&gt;</td><td></td></tr></tbody></table>"
        );
    }

    #[test]
    fn serializes_without_active_marker() {
        let mut grid = Grid::new();
        grid.add_column("name", Attributes::new());
        grid.add_row(Attributes::new(), true);
        let json = serde_json::to_value(&grid).unwrap();
        assert!(json.get("active").is_none());
        assert_eq!(json["columns"][0]["key"], "name");
        assert_eq!(json["rows"][0]["header"], true);
    }
}
