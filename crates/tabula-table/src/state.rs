//! Table state: collection, column sizing, selection mode, and sort order.

use tabula_layout::{ColumnLayout, ColumnSizing, SizingSnapshot, WidthMap};

use crate::collection::{CollectionOptions, Column, Row, SelectionMode, TableCollection};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::sort::SortDescriptor;

/// Inputs for [`TableState::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableProps {
    /// Width the columns are laid out across.
    pub table_width: f64,
    /// Whether and how rows can be selected.
    pub selection_mode: SelectionMode,
    /// Request a checkbox column (ignored when `selection_mode` is `None`).
    pub show_selection_checkboxes: bool,
    /// Initial sort order.
    pub sort_descriptor: Option<SortDescriptor>,
    /// Sizing defaults and selection column width.
    pub config: TableConfig,
}

impl TableProps {
    /// Props for a non-selectable, unsorted table of `table_width` pixels.
    #[must_use]
    pub fn new(table_width: f64) -> Self {
        Self {
            table_width,
            selection_mode: SelectionMode::None,
            show_selection_checkboxes: false,
            sort_descriptor: None,
            config: TableConfig::DEFAULT,
        }
    }

    /// Set the selection mode.
    #[must_use]
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Request the checkbox column.
    #[must_use]
    pub fn show_selection_checkboxes(mut self, show: bool) -> Self {
        self.show_selection_checkboxes = show;
        self
    }

    /// Set the initial sort order.
    #[must_use]
    pub fn sort_descriptor(mut self, descriptor: SortDescriptor) -> Self {
        self.sort_descriptor = Some(descriptor);
        self
    }

    /// Override the table configuration.
    #[must_use]
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }
}

/// State behind an interactive, accessible table.
///
/// Owns the [`TableCollection`] and a [`ColumnLayout`] sized from the
/// collection's columns. Widths are recomputed whenever the table width or
/// the column set changes, and on every manual resize.
///
/// # Example
///
/// ```
/// use tabula_table::{Column, Row, TableProps, TableState};
///
/// let mut state = TableState::new(
///     [
///         Column::new("name", "Name").width(200.0),
///         Column::new("type", "Type"),
///         Column::new("level", "Level"),
///     ],
///     [Row::new("1", ["Charizard", "Fire, Flying", "67"])],
///     TableProps::new(800.0),
/// )?;
/// assert_eq!(state.column_width("type"), Some(300.0));
///
/// state.on_column_resize("type", -100.0)?;
/// assert_eq!(state.column_width("type"), Some(200.0));
/// assert_eq!(state.column_width("level"), Some(400.0));
/// # Ok::<(), tabula_table::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableState {
    collection: TableCollection,
    layout: ColumnLayout,
    selection_mode: SelectionMode,
    show_selection_checkboxes: bool,
    sort_descriptor: Option<SortDescriptor>,
    config: TableConfig,
}

impl TableState {
    /// Build the collection and lay out its columns.
    pub fn new(
        columns: impl IntoIterator<Item = Column>,
        rows: impl IntoIterator<Item = Row>,
        props: TableProps,
    ) -> Result<Self, TableError> {
        let TableProps {
            table_width,
            selection_mode,
            show_selection_checkboxes,
            sort_descriptor,
            config,
        } = props;
        let show_selection_checkboxes =
            show_selection_checkboxes && selection_mode != SelectionMode::None;

        let collection =
            TableCollection::new(columns, rows, options(show_selection_checkboxes, &config))?;
        if let Some(descriptor) = &sort_descriptor {
            check_sortable(&collection, descriptor.column.as_str())?;
        }
        let layout =
            ColumnLayout::with_config(collection.column_specs(), table_width, config.sizing)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            columns = collection.column_count(),
            rows = collection.body().len(),
            table_width = layout.table_width(),
            "table state created"
        );

        Ok(Self {
            collection,
            layout,
            selection_mode,
            show_selection_checkboxes,
            sort_descriptor,
            config,
        })
    }

    /// Columns and rows with their ARIA semantics.
    #[must_use]
    pub fn collection(&self) -> &TableCollection {
        &self.collection
    }

    /// The column layout backing this table.
    #[must_use]
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// The table configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The current selection mode.
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Whether the checkbox column is shown: requested, and selection is on.
    #[must_use]
    pub fn show_selection_checkboxes(&self) -> bool {
        self.show_selection_checkboxes
    }

    /// Current width of a column.
    #[must_use]
    pub fn column_width(&self, key: &str) -> Option<f64> {
        self.layout.column_width(key)
    }

    /// Current width of every column.
    #[must_use]
    pub fn column_widths(&self) -> WidthMap {
        self.layout.width_map()
    }

    /// Sizing state of a column.
    #[must_use]
    pub fn column_sizing(&self, key: &str) -> Option<ColumnSizing> {
        self.layout.sizing(key)
    }

    /// Handle a column-resize gesture of `delta_x` pixels.
    ///
    /// Returns the updated width of every column.
    pub fn on_column_resize(&mut self, key: &str, delta_x: f64) -> Result<WidthMap, TableError> {
        Ok(self.layout.resize(key, delta_x)?)
    }

    /// Lay the columns out across a new table width.
    pub fn set_table_width(&mut self, table_width: f64) {
        self.layout.set_table_width(table_width);
    }

    /// Replace columns and rows.
    ///
    /// Resized columns whose keys survive keep their widths. A sort on a
    /// column that disappears or stops being sortable is cleared. On error
    /// the state is left unchanged.
    pub fn set_collection(
        &mut self,
        columns: impl IntoIterator<Item = Column>,
        rows: impl IntoIterator<Item = Row>,
    ) -> Result<(), TableError> {
        let collection = TableCollection::new(
            columns,
            rows,
            options(self.show_selection_checkboxes, &self.config),
        )?;
        self.install(collection)
    }

    /// Replace the rows, keeping the current columns and layout.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<(), TableError> {
        let columns: Vec<Column> = self.collection.data_columns().cloned().collect();
        self.collection = TableCollection::new(
            columns,
            rows,
            options(self.show_selection_checkboxes, &self.config),
        )?;
        Ok(())
    }

    /// Change the selection mode, adding or removing the checkbox column
    /// as needed. `show_selection_checkboxes` re-applies the request flag.
    pub fn set_selection_mode(
        &mut self,
        mode: SelectionMode,
        show_selection_checkboxes: bool,
    ) -> Result<(), TableError> {
        let show = show_selection_checkboxes && mode != SelectionMode::None;
        if show != self.show_selection_checkboxes {
            let columns: Vec<Column> = self.collection.data_columns().cloned().collect();
            let rows: Vec<Row> = self
                .collection
                .body()
                .iter()
                .map(|row| {
                    Row::new(
                        row.key().clone(),
                        row.cells()
                            .iter()
                            .filter(|cell| !cell.is_selection_cell())
                            .map(|cell| cell.text().to_owned()),
                    )
                })
                .collect();
            let collection = TableCollection::new(columns, rows, options(show, &self.config))?;
            self.install(collection)?;
            self.show_selection_checkboxes = show;
        }
        self.selection_mode = mode;
        Ok(())
    }

    /// The current sort order.
    #[must_use]
    pub fn sort_descriptor(&self) -> Option<&SortDescriptor> {
        self.sort_descriptor.as_ref()
    }

    /// Sort by `column_key`, flipping direction when it is already the sort
    /// column. Returns the new descriptor.
    pub fn sort(&mut self, column_key: &str) -> Result<SortDescriptor, TableError> {
        let column = check_sortable(&self.collection, column_key)?;
        let descriptor = SortDescriptor::toggled(self.sort_descriptor.as_ref(), column.key());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            column = %descriptor.column,
            direction = %descriptor.direction,
            "sort changed"
        );

        self.sort_descriptor = Some(descriptor.clone());
        Ok(descriptor)
    }

    /// `aria-sort` for a column header: the direction for the sort column,
    /// `"none"` for other sortable columns, `None` when not sortable.
    #[must_use]
    pub fn aria_sort(&self, column_key: &str) -> Option<&'static str> {
        let column = self.collection.column(column_key)?;
        if !column.allows_sorting() || column.is_selection_cell() {
            return None;
        }
        match &self.sort_descriptor {
            Some(sort) if sort.column.as_str() == column_key => Some(sort.direction.aria_sort()),
            _ => Some("none"),
        }
    }

    /// Capture user-resized widths.
    #[must_use]
    pub fn sizing_snapshot(&self) -> SizingSnapshot {
        self.layout.sizing_snapshot()
    }

    /// Restore user-resized widths. Returns `false` on a version mismatch.
    pub fn restore_sizing(&mut self, snapshot: SizingSnapshot) -> bool {
        self.layout.restore_sizing(snapshot)
    }

    fn install(&mut self, collection: TableCollection) -> Result<(), TableError> {
        self.layout.set_columns(collection.column_specs())?;
        if self
            .sort_descriptor
            .as_ref()
            .is_some_and(|sort| check_sortable(&collection, sort.column.as_str()).is_err())
        {
            self.sort_descriptor = None;
        }
        self.collection = collection;
        Ok(())
    }
}

fn options(selection_column: bool, config: &TableConfig) -> CollectionOptions {
    CollectionOptions {
        selection_column,
        selection_column_width: config.selection_column_width,
    }
}

fn check_sortable<'a>(
    collection: &'a TableCollection,
    column_key: &str,
) -> Result<&'a Column, TableError> {
    match collection.column(column_key) {
        Some(column) if column.allows_sorting() && !column.is_selection_cell() => Ok(column),
        _ => Err(TableError::NotSortable(column_key.into())),
    }
}
