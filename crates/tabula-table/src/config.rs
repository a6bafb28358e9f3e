//! Table-level configuration.

use tabula_layout::SizingConfig;

/// Width of the prepended selection-checkbox column.
pub const DEFAULT_SELECTION_COLUMN_WIDTH: f64 = 38.0;

/// Configuration shared by the collection builder and the table state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Sizing defaults forwarded to the column layout.
    pub sizing: SizingConfig,
    /// Static width of the selection-checkbox column.
    pub selection_column_width: f64,
}

impl TableConfig {
    /// Default configuration.
    pub const DEFAULT: Self = Self {
        sizing: SizingConfig::DEFAULT,
        selection_column_width: DEFAULT_SELECTION_COLUMN_WIDTH,
    };

    /// Override the sizing defaults.
    #[must_use]
    pub fn with_sizing(mut self, sizing: SizingConfig) -> Self {
        self.sizing = sizing;
        self
    }

    /// Override the selection column width.
    #[must_use]
    pub fn with_selection_column_width(mut self, width: f64) -> Self {
        self.selection_column_width = width.max(0.0);
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
