//! Column layout state and resize coordination.
//!
//! [`ColumnLayout`] owns one table's columns as index-addressed parallel
//! arrays: the caller's [`ColumnSpec`], its sticky [`ColumnSizing`], and the
//! last resolved width.
//!
//! # Invariants
//!
//! 1. Every column key appears exactly once.
//! 2. Widths are non-negative and, unless minimums overflow the table, sum
//!    to the table width.
//! 3. A resize never changes the width of a column before the resized one.
//! 4. Layout is a pure function of the specs, the sizing state, and the
//!    table width: the same inputs give identical widths.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::column::{ColumnKey, ColumnSpec};
use crate::config::SizingConfig;
use crate::partition::partition;
use crate::sizing::{ColumnSizing, SizingSnapshot};

/// Resolved width per column key.
pub type WidthMap = HashMap<ColumnKey, f64>;

/// Column widths for one table instance.
///
/// # Example
///
/// ```
/// use tabula_layout::{ColumnLayout, ColumnSize, ColumnSpec};
///
/// let mut layout = ColumnLayout::new(
///     [
///         ColumnSpec::new("a").width(200.0),
///         ColumnSpec::new("b").default_width(ColumnSize::flex(1)),
///         ColumnSpec::new("c").default_width(ColumnSize::flex(1)),
///     ],
///     800.0,
/// )?;
/// assert_eq!(layout.column_width("b"), Some(300.0));
///
/// layout.resize("b", 50.0)?;
/// assert_eq!(layout.column_width("a"), Some(200.0));
/// assert_eq!(layout.column_width("b"), Some(350.0));
/// assert_eq!(layout.column_width("c"), Some(250.0));
/// # Ok::<(), tabula_layout::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    // Parallel arrays indexed by display position.
    specs: Vec<ColumnSpec>,
    sizing: Vec<ColumnSizing>,
    widths: Vec<f64>,
    table_width: f64,
    config: SizingConfig,
}

impl ColumnLayout {
    /// Lay out `columns` across `table_width` with default sizing.
    pub fn new(
        columns: impl IntoIterator<Item = ColumnSpec>,
        table_width: f64,
    ) -> Result<Self, LayoutError> {
        Self::with_config(columns, table_width, SizingConfig::DEFAULT)
    }

    /// Lay out `columns` across `table_width` with explicit sizing defaults.
    pub fn with_config(
        columns: impl IntoIterator<Item = ColumnSpec>,
        table_width: f64,
        config: SizingConfig,
    ) -> Result<Self, LayoutError> {
        let specs = unique_specs(columns)?;
        let n = specs.len();
        let mut layout = Self {
            specs,
            sizing: vec![ColumnSizing::Auto; n],
            widths: vec![0.0; n],
            table_width: sanitize_width(table_width),
            config,
        };
        layout.relayout();
        Ok(layout)
    }

    /// The table width columns are laid out across.
    #[must_use]
    pub fn table_width(&self) -> f64 {
        self.table_width
    }

    /// Sizing defaults in effect.
    #[must_use]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Column specs in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.specs
    }

    /// Display index of a column.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.key().as_str() == key)
    }

    /// Resolved width of a column.
    #[must_use]
    pub fn column_width(&self, key: &str) -> Option<f64> {
        self.index_of(key).map(|i| self.widths[i])
    }

    /// Sizing state of a column.
    #[must_use]
    pub fn sizing(&self, key: &str) -> Option<ColumnSizing> {
        self.index_of(key).map(|i| self.sizing[i])
    }

    /// `(key, width)` pairs in display order.
    pub fn widths(&self) -> impl Iterator<Item = (&ColumnKey, f64)> {
        self.specs
            .iter()
            .zip(&self.widths)
            .map(|(spec, &width)| (spec.key(), width))
    }

    /// Width of every column, keyed by column key.
    #[must_use]
    pub fn width_map(&self) -> WidthMap {
        self.widths().map(|(key, width)| (key.clone(), width)).collect()
    }

    /// Sum of all column widths.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    /// Apply a manual resize of `delta` pixels to `key`.
    ///
    /// The column's new width is its current width plus `delta`, clamped to
    /// its bounds, and is committed as [`ColumnSizing::Fixed`]. Columns
    /// before it keep their widths; columns after it are re-solved over
    /// the space that is left.
    pub fn resize(&mut self, key: &str, delta: f64) -> Result<WidthMap, LayoutError> {
        let index = self
            .index_of(key)
            .ok_or_else(|| LayoutError::UnknownColumn(ColumnKey::from(key)))?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("column_resize", key, delta, index).entered();

        let delta = if delta.is_finite() { delta } else { 0.0 };
        let width = self.specs[index].clamp(
            self.widths[index] + delta,
            self.table_width,
            &self.config,
        );
        self.widths[index] = width;
        self.sizing[index] = ColumnSizing::Fixed(width);

        let consumed: f64 = self.widths[..=index].iter().sum();
        self.solve_from(index + 1, self.table_width - consumed);

        #[cfg(feature = "tracing")]
        tracing::debug!(width, total = self.total_width(), "column resized");

        Ok(self.width_map())
    }

    /// Change the table width and lay out every column again.
    ///
    /// Resized columns keep their committed widths.
    pub fn set_table_width(&mut self, table_width: f64) {
        self.table_width = sanitize_width(table_width);
        self.relayout();
    }

    /// Replace the column set, keeping the sizing of columns whose keys
    /// survive, then lay out every column again.
    ///
    /// On error the layout is left unchanged.
    pub fn set_columns(
        &mut self,
        columns: impl IntoIterator<Item = ColumnSpec>,
    ) -> Result<(), LayoutError> {
        let specs = unique_specs(columns)?;
        let sizing = specs
            .iter()
            .map(|spec| self.sizing(spec.key().as_str()).unwrap_or_default())
            .collect();
        self.widths = vec![0.0; specs.len()];
        self.specs = specs;
        self.sizing = sizing;
        self.relayout();
        Ok(())
    }

    /// Capture the committed widths of all resized columns.
    #[must_use]
    pub fn sizing_snapshot(&self) -> SizingSnapshot {
        SizingSnapshot {
            columns: self
                .specs
                .iter()
                .zip(&self.sizing)
                .filter_map(|(spec, sizing)| {
                    sizing.fixed_width().map(|width| (spec.key().clone(), width))
                })
                .collect(),
            ..SizingSnapshot::new()
        }
    }

    /// Re-apply a previously captured snapshot and lay out again.
    ///
    /// Widths are clamped to each column's current bounds and unknown keys
    /// are skipped. Returns `false` (leaving the layout untouched) when the
    /// snapshot version does not match.
    pub fn restore_sizing(&mut self, snapshot: SizingSnapshot) -> bool {
        if !snapshot.is_current() {
            #[cfg(feature = "tracing")]
            tracing::warn!(version = snapshot.version, "discarding sizing snapshot");
            return false;
        }
        for (key, width) in snapshot.columns {
            if let Some(index) = self.index_of(key.as_str())
                && width.is_finite()
            {
                let width = self.specs[index].clamp(width, self.table_width, &self.config);
                self.sizing[index] = ColumnSizing::Fixed(width);
            }
        }
        self.relayout();
        true
    }

    fn relayout(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "column_layout",
            columns = self.specs.len(),
            table_width = self.table_width
        )
        .entered();

        self.solve_from(0, self.table_width);
    }

    /// Re-solve columns `start..` over `available_space`.
    fn solve_from(&mut self, start: usize, available_space: f64) {
        if start >= self.specs.len() {
            return;
        }
        let widths = partition(
            &self.specs[start..],
            &self.sizing[start..],
            self.table_width,
            available_space,
            &self.config,
        )
        .solve();
        self.widths[start..].copy_from_slice(&widths);
    }
}

fn unique_specs(
    columns: impl IntoIterator<Item = ColumnSpec>,
) -> Result<Vec<ColumnSpec>, LayoutError> {
    let mut seen = HashSet::new();
    let mut specs = Vec::new();
    for spec in columns {
        if !seen.insert(spec.key().clone()) {
            return Err(LayoutError::DuplicateColumn(spec.key().clone()));
        }
        specs.push(spec);
    }
    Ok(specs)
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

/// Errors from column layout operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No column with this key exists.
    UnknownColumn(ColumnKey),
    /// Two columns share a key.
    DuplicateColumn(ColumnKey),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownColumn(key) => write!(f, "unknown column \"{key}\""),
            LayoutError::DuplicateColumn(key) => write!(f, "duplicate column key \"{key}\""),
        }
    }
}

impl std::error::Error for LayoutError {}
