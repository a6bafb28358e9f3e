#![forbid(unsafe_code)]

//! Tabula public facade crate.
//!
//! Re-exports the column-width solver and the accessible table model, and
//! offers a unified error type plus a prelude for day-to-day usage.

use std::fmt;

// --- Layout re-exports -----------------------------------------------------

pub use tabula_layout::{
    ColumnKey, ColumnLayout, ColumnSize, ColumnSizing, ColumnSpec, LayoutError, SizingConfig,
    SizingSnapshot, Width, WidthError, WidthMap, parse_width,
};

// --- Table re-exports ------------------------------------------------------

pub use tabula_table::{
    CellRole, Column, Row, RowKey, SelectionMode, SortDescriptor, SortDirection, TableCollection,
    TableConfig, TableError, TableProps, TableState,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tabula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A width string could not be parsed.
    Width(WidthError),
    /// Column layout failed.
    Layout(LayoutError),
    /// Table construction or interaction failed.
    Table(TableError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width(err) => write!(f, "{err}"),
            Self::Layout(err) => write!(f, "{err}"),
            Self::Table(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Width(err) => Some(err),
            Self::Layout(err) => Some(err),
            Self::Table(err) => Some(err),
        }
    }
}

impl From<WidthError> for Error {
    fn from(err: WidthError) -> Self {
        Self::Width(err)
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        Self::Table(err)
    }
}

/// Standard result type for tabula APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Column, ColumnLayout, ColumnSize, ColumnSpec, Error, Result, Row, SelectionMode,
        SortDirection, TableProps, TableState, Width,
    };

    pub use crate::{layout, table};
}

pub use tabula_layout as layout;
pub use tabula_table as table;
