//! Table errors.

use std::fmt;

use tabula_layout::{ColumnKey, LayoutError};

use crate::collection::RowKey;

/// Errors from building or driving a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two columns share a key (including the reserved selection key).
    DuplicateColumn(ColumnKey),
    /// Two rows share a key.
    DuplicateRow(RowKey),
    /// A row does not supply one cell per data column.
    CellCountMismatch {
        /// The offending row.
        row: RowKey,
        /// Number of data columns.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
    /// No column with this key exists.
    UnknownColumn(ColumnKey),
    /// The column does not allow sorting.
    NotSortable(ColumnKey),
    /// Column layout failed.
    Layout(LayoutError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateColumn(key) => write!(f, "duplicate column key \"{key}\""),
            Self::DuplicateRow(key) => write!(f, "duplicate row key \"{key}\""),
            Self::CellCountMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row \"{row}\" has {found} cells but the table has {expected} columns"
            ),
            Self::UnknownColumn(key) => write!(f, "unknown column \"{key}\""),
            Self::NotSortable(key) => write!(f, "column \"{key}\" is not sortable"),
            Self::Layout(err) => write!(f, "column layout failed: {err}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LayoutError> for TableError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
