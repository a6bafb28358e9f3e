#![forbid(unsafe_code)]

//! Accessible table model on top of [`tabula_layout`].
//!
//! [`TableCollection`] turns columns and rows into a header row plus body
//! rows with ARIA roles and indices. [`TableState`] pairs a collection with
//! a [`tabula_layout::ColumnLayout`], tracks the sort order, and decides
//! whether a selection-checkbox column is shown.

pub mod collection;
pub mod config;
pub mod error;
pub mod sort;
pub mod state;

pub use collection::{
    Cell, CellRole, CollectionOptions, Column, HEADER_ROW_KEY, HeaderRow, Row, RowKey,
    SELECTION_COLUMN_KEY, SelectionMode, TableCollection, TableRow,
};
pub use config::{DEFAULT_SELECTION_COLUMN_WIDTH, TableConfig};
pub use error::TableError;
pub use sort::{SortDescriptor, SortDirection};
pub use state::{TableProps, TableState};
