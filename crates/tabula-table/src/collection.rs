//! Table collection: columns, header row, body rows, and ARIA semantics.
//!
//! The collection is the grid model a renderer walks to emit a
//! `role="grid"` table. One header row carries the column headers; every
//! body row carries exactly one cell per column.
//!
//! # ARIA Mapping
//!
//! | Item                      | Role           | Index                       |
//! |---------------------------|----------------|-----------------------------|
//! | Header row cells          | `columnheader` | `aria-rowindex = 1`         |
//! | Row-header column cells   | `rowheader`    | `aria-rowindex = 2 + i`     |
//! | Other body cells          | `gridcell`     | `aria-colindex = 1 + j`     |
//!
//! When the selection column is enabled it is prepended, so it takes
//! `aria-colindex = 1` and shifts the data columns right.

use std::collections::HashSet;
use std::fmt;

use tabula_layout::{ColumnKey, ColumnSize, ColumnSpec, Width};

use crate::config::DEFAULT_SELECTION_COLUMN_WIDTH;
use crate::error::TableError;

/// Key reserved for the selection-checkbox column.
pub const SELECTION_COLUMN_KEY: &str = "__selection__";

/// Key reserved for the header row.
pub const HEADER_ROW_KEY: &str = "__header__";

/// Stable identifier for a body row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RowKey(String);

impl RowKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RowKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<u64> for RowKey {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How many rows may be selected. Selection bookkeeping lives elsewhere;
/// the mode only decides whether a checkbox column can appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Rows are not selectable.
    #[default]
    None,
    /// One row at a time.
    Single,
    /// Any number of rows.
    Multiple,
}

/// ARIA role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Header-row cell.
    ColumnHeader,
    /// Body cell in a row-header column.
    RowHeader,
    /// Any other body cell.
    GridCell,
}

impl CellRole {
    /// Value for the `role` attribute.
    #[must_use]
    pub const fn aria_role(self) -> &'static str {
        match self {
            CellRole::ColumnHeader => "columnheader",
            CellRole::RowHeader => "rowheader",
            CellRole::GridCell => "gridcell",
        }
    }
}

/// A table column: header label, sizing, and behavior flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    spec: ColumnSpec,
    label: String,
    is_row_header: bool,
    allows_sorting: bool,
    is_selection_cell: bool,
}

impl Column {
    /// Create a flexible, non-sortable column.
    pub fn new(key: impl Into<ColumnKey>, label: impl Into<String>) -> Self {
        Self {
            spec: ColumnSpec::new(key),
            label: label.into(),
            is_row_header: false,
            allows_sorting: false,
            is_selection_cell: false,
        }
    }

    fn selection(width: f64) -> Self {
        Self {
            spec: ColumnSpec::new(SELECTION_COLUMN_KEY)
                .width(width)
                .min_width(width)
                .max_width(width),
            label: String::new(),
            is_row_header: false,
            allows_sorting: false,
            is_selection_cell: true,
        }
    }

    /// Set the declared width.
    #[must_use]
    pub fn width(mut self, width: impl Into<ColumnSize>) -> Self {
        self.spec = self.spec.width(width);
        self
    }

    /// Set the default display width.
    #[must_use]
    pub fn default_width(mut self, width: impl Into<ColumnSize>) -> Self {
        self.spec = self.spec.default_width(width);
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, width: impl Into<Width>) -> Self {
        self.spec = self.spec.min_width(width);
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, width: impl Into<Width>) -> Self {
        self.spec = self.spec.max_width(width);
        self
    }

    /// Mark cells in this column as row headers.
    #[must_use]
    pub fn row_header(mut self, is_row_header: bool) -> Self {
        self.is_row_header = is_row_header;
        self
    }

    /// Allow sorting by this column.
    #[must_use]
    pub fn sortable(mut self, allows_sorting: bool) -> Self {
        self.allows_sorting = allows_sorting;
        self
    }

    /// The column key.
    #[must_use]
    pub fn key(&self) -> &ColumnKey {
        self.spec.key()
    }

    /// Header label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sizing declaration.
    #[must_use]
    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    /// Whether this column was explicitly marked as a row header.
    #[must_use]
    pub fn is_row_header(&self) -> bool {
        self.is_row_header
    }

    /// Whether sorting by this column is allowed.
    #[must_use]
    pub fn allows_sorting(&self) -> bool {
        self.allows_sorting
    }

    /// Whether this is the selection-checkbox column.
    #[must_use]
    pub fn is_selection_cell(&self) -> bool {
        self.is_selection_cell
    }
}

/// Input row: a key and one text value per data column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    key: RowKey,
    cells: Vec<String>,
}

impl Row {
    /// Create a row from its key and cell contents in column order.
    pub fn new(key: impl Into<RowKey>, cells: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// The row key.
    #[must_use]
    pub fn key(&self) -> &RowKey {
        &self.key
    }

    /// Cell contents in column order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// A body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    column_key: ColumnKey,
    text: String,
    is_selection_cell: bool,
}

impl Cell {
    /// Key of the column this cell belongs to.
    #[must_use]
    pub fn column_key(&self) -> &ColumnKey {
        &self.column_key
    }

    /// Text content (empty for checkbox cells).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this is a row-selection checkbox cell.
    #[must_use]
    pub fn is_selection_cell(&self) -> bool {
        self.is_selection_cell
    }
}

/// A body row in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    key: RowKey,
    index: usize,
    cells: Vec<Cell>,
}

impl TableRow {
    /// The row key.
    #[must_use]
    pub fn key(&self) -> &RowKey {
        &self.key
    }

    /// Zero-based position among body rows.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// One cell per column, in column order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// `aria-rowindex` of this row (the header row is 1).
    #[must_use]
    pub fn aria_row_index(&self) -> usize {
        self.index + 2
    }
}

/// View of the header row.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRow<'a> {
    columns: &'a [Column],
}

impl<'a> HeaderRow<'a> {
    /// The reserved header row key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        HEADER_ROW_KEY
    }

    /// Column headers in display order.
    #[must_use]
    pub fn columns(&self) -> &'a [Column] {
        self.columns
    }

    /// `aria-rowindex` of the header row.
    #[must_use]
    pub fn aria_row_index(&self) -> usize {
        1
    }
}

/// Options controlling collection building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionOptions {
    /// Prepend a selection-checkbox column.
    pub selection_column: bool,
    /// Width of that column.
    pub selection_column_width: f64,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            selection_column: false,
            selection_column_width: DEFAULT_SELECTION_COLUMN_WIDTH,
        }
    }
}

/// Columns and rows of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCollection {
    columns: Vec<Column>,
    body: Vec<TableRow>,
    row_header_keys: Vec<ColumnKey>,
}

impl TableCollection {
    /// Build a collection, validating keys and cell counts.
    pub fn new(
        columns: impl IntoIterator<Item = Column>,
        rows: impl IntoIterator<Item = Row>,
        options: CollectionOptions,
    ) -> Result<Self, TableError> {
        let mut all_columns = Vec::new();
        if options.selection_column {
            all_columns.push(Column::selection(options.selection_column_width));
        }
        all_columns.extend(columns);

        let mut seen = HashSet::new();
        for column in &all_columns {
            let reserved =
                !column.is_selection_cell && column.key().as_str() == SELECTION_COLUMN_KEY;
            if reserved || !seen.insert(column.key().clone()) {
                return Err(TableError::DuplicateColumn(column.key().clone()));
            }
        }

        let data_columns = all_columns.len() - usize::from(options.selection_column);
        let mut seen_rows = HashSet::new();
        let mut body = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            if row.key.as_str() == HEADER_ROW_KEY || !seen_rows.insert(row.key.clone()) {
                return Err(TableError::DuplicateRow(row.key));
            }
            if row.cells.len() != data_columns {
                return Err(TableError::CellCountMismatch {
                    found: row.cells.len(),
                    expected: data_columns,
                    row: row.key,
                });
            }
            let mut texts = row.cells.into_iter();
            let cells = all_columns
                .iter()
                .map(|column| Cell {
                    column_key: column.key().clone(),
                    text: if column.is_selection_cell {
                        String::new()
                    } else {
                        texts.next().unwrap_or_default()
                    },
                    is_selection_cell: column.is_selection_cell,
                })
                .collect();
            body.push(TableRow {
                key: row.key,
                index,
                cells,
            });
        }

        let mut row_header_keys: Vec<ColumnKey> = all_columns
            .iter()
            .filter(|c| c.is_row_header && !c.is_selection_cell)
            .map(|c| c.key().clone())
            .collect();
        if row_header_keys.is_empty()
            && let Some(first) = all_columns.iter().find(|c| !c.is_selection_cell)
        {
            row_header_keys.push(first.key().clone());
        }

        Ok(Self {
            columns: all_columns,
            body,
            row_header_keys,
        })
    }

    /// All columns in display order, selection column included.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key().as_str() == key)
    }

    /// Columns supplied by the caller (selection column excluded).
    pub fn data_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.is_selection_cell)
    }

    /// Sizing declarations of every column, in display order.
    pub fn column_specs(&self) -> impl Iterator<Item = ColumnSpec> + '_ {
        self.columns.iter().map(|c| c.spec.clone())
    }

    /// Header rows (a single row of column headers).
    pub fn header_rows(&self) -> impl Iterator<Item = HeaderRow<'_>> {
        std::iter::once(HeaderRow {
            columns: &self.columns,
        })
    }

    /// Body rows in order.
    #[must_use]
    pub fn body(&self) -> &[TableRow] {
        &self.body
    }

    /// Look up a body row.
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&TableRow> {
        self.body.iter().find(|r| r.key.as_str() == key)
    }

    /// Whether a selection column was prepended.
    #[must_use]
    pub fn has_selection_column(&self) -> bool {
        self.columns.first().is_some_and(Column::is_selection_cell)
    }

    /// `aria-colcount`.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `aria-rowcount`: header row plus body rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.body.len() + 1
    }

    /// Columns whose body cells are row headers.
    #[must_use]
    pub fn row_header_column_keys(&self) -> &[ColumnKey] {
        &self.row_header_keys
    }

    /// `aria-rowindex` of a row (header row included).
    #[must_use]
    pub fn aria_row_index(&self, row_key: &str) -> Option<usize> {
        if row_key == HEADER_ROW_KEY {
            return Some(1);
        }
        self.row(row_key).map(TableRow::aria_row_index)
    }

    /// `aria-colindex` of a column.
    #[must_use]
    pub fn aria_col_index(&self, column_key: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.key().as_str() == column_key)
            .map(|i| i + 1)
    }

    /// ARIA role of the cell at `(row_key, column_key)`.
    #[must_use]
    pub fn cell_role(&self, row_key: &str, column_key: &str) -> Option<CellRole> {
        self.column(column_key)?;
        if row_key == HEADER_ROW_KEY {
            return Some(CellRole::ColumnHeader);
        }
        self.row(row_key)?;
        if self
            .row_header_keys
            .iter()
            .any(|k| k.as_str() == column_key)
        {
            Some(CellRole::RowHeader)
        } else {
            Some(CellRole::GridCell)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name"),
            Column::new("type", "Type"),
            Column::new("level", "Level"),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new("1", ["Charizard", "Fire, Flying", "67"]),
            Row::new("2", ["Squirtle", "Water", "12"]),
            Row::new("3", ["Blastoise", "Water", "56"]),
        ]
    }

    #[test]
    fn builds_rows_and_cells() {
        let collection =
            TableCollection::new(columns(), rows(), CollectionOptions::default()).unwrap();
        assert_eq!(collection.column_count(), 3);
        assert_eq!(collection.row_count(), 4);
        let squirtle = collection.row("2").unwrap();
        assert_eq!(squirtle.index(), 1);
        assert_eq!(squirtle.cells()[0].text(), "Squirtle");
        assert_eq!(squirtle.cells()[2].column_key().as_str(), "level");
        assert!(!collection.has_selection_column());
    }

    #[test]
    fn selection_column_is_prepended() {
        let options = CollectionOptions {
            selection_column: true,
            ..CollectionOptions::default()
        };
        let collection = TableCollection::new(columns(), rows(), options).unwrap();
        assert!(collection.has_selection_column());
        assert_eq!(collection.column_count(), 4);
        assert_eq!(collection.aria_col_index(SELECTION_COLUMN_KEY), Some(1));
        assert_eq!(collection.aria_col_index("name"), Some(2));

        let row = &collection.body()[0];
        assert!(row.cells()[0].is_selection_cell());
        assert_eq!(row.cells()[0].text(), "");
        assert_eq!(row.cells()[1].text(), "Charizard");
        assert_eq!(collection.data_columns().count(), 3);

        let spec = collection.columns()[0].spec();
        assert_eq!(spec.width_spec(), Some(ColumnSize::px(38.0)));
    }

    #[test]
    fn first_data_column_is_default_row_header() {
        let options = CollectionOptions {
            selection_column: true,
            ..CollectionOptions::default()
        };
        let collection = TableCollection::new(columns(), rows(), options).unwrap();
        assert_eq!(collection.row_header_column_keys(), &[ColumnKey::from("name")]);
        assert_eq!(collection.cell_role("1", "name"), Some(CellRole::RowHeader));
        assert_eq!(collection.cell_role("1", "type"), Some(CellRole::GridCell));
        assert_eq!(
            collection.cell_role("1", SELECTION_COLUMN_KEY),
            Some(CellRole::GridCell)
        );
    }

    #[test]
    fn explicit_row_header_wins() {
        let cols = vec![
            Column::new("name", "Name"),
            Column::new("type", "Type").row_header(true),
        ];
        let collection = TableCollection::new(
            cols,
            [Row::new("x", ["a", "b"])],
            CollectionOptions::default(),
        )
        .unwrap();
        assert_eq!(collection.row_header_column_keys(), &[ColumnKey::from("type")]);
        assert_eq!(collection.cell_role("x", "name"), Some(CellRole::GridCell));
    }

    #[test]
    fn header_row_semantics() {
        let collection =
            TableCollection::new(columns(), rows(), CollectionOptions::default()).unwrap();
        let headers: Vec<_> = collection.header_rows().collect();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].key(), HEADER_ROW_KEY);
        assert_eq!(headers[0].columns()[1].label(), "Type");
        assert_eq!(collection.aria_row_index(HEADER_ROW_KEY), Some(1));
        assert_eq!(collection.aria_row_index("1"), Some(2));
        assert_eq!(collection.aria_row_index("3"), Some(4));
        assert_eq!(
            collection.cell_role(HEADER_ROW_KEY, "level"),
            Some(CellRole::ColumnHeader)
        );
        assert_eq!(CellRole::ColumnHeader.aria_role(), "columnheader");
    }

    #[test]
    fn unknown_lookups_are_none() {
        let collection =
            TableCollection::new(columns(), rows(), CollectionOptions::default()).unwrap();
        assert_eq!(collection.cell_role("99", "name"), None);
        assert_eq!(collection.cell_role("1", "nope"), None);
        assert_eq!(collection.aria_col_index("nope"), None);
        assert_eq!(collection.aria_row_index("99"), None);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let cols = vec![Column::new("a", "A"), Column::new("a", "A2")];
        assert_eq!(
            TableCollection::new(cols, Vec::<Row>::new(), CollectionOptions::default()),
            Err(TableError::DuplicateColumn(ColumnKey::from("a")))
        );

        let dup_rows = vec![Row::new("1", ["x", "y", "z"]), Row::new("1", ["x", "y", "z"])];
        assert_eq!(
            TableCollection::new(columns(), dup_rows, CollectionOptions::default()),
            Err(TableError::DuplicateRow(RowKey::from("1")))
        );
    }

    #[test]
    fn reserved_keys_are_rejected() {
        let options = CollectionOptions {
            selection_column: true,
            ..CollectionOptions::default()
        };
        let cols = vec![Column::new(SELECTION_COLUMN_KEY, "Oops")];
        assert!(matches!(
            TableCollection::new(cols.clone(), Vec::<Row>::new(), options),
            Err(TableError::DuplicateColumn(_))
        ));
        assert_eq!(
            TableCollection::new(cols, Vec::<Row>::new(), CollectionOptions::default()),
            Err(TableError::DuplicateColumn(ColumnKey::from(SELECTION_COLUMN_KEY)))
        );

        let header_row = vec![Row::new(HEADER_ROW_KEY, ["a", "b", "c"])];
        assert!(matches!(
            TableCollection::new(columns(), header_row, CollectionOptions::default()),
            Err(TableError::DuplicateRow(_))
        ));
    }

    #[test]
    fn cell_count_must_match() {
        let short = vec![Row::new("r", ["only one"])];
        assert_eq!(
            TableCollection::new(columns(), short, CollectionOptions::default()),
            Err(TableError::CellCountMismatch {
                row: RowKey::from("r"),
                expected: 3,
                found: 1,
            })
        );
    }
}
