//! Sticky per-column sizing state.
//!
//! A column starts out [`ColumnSizing::Auto`] and is laid out from its
//! declarations. The first manual resize pins it to
//! [`ColumnSizing::Fixed`]; it never returns to `Auto` for the lifetime of
//! the layout, though later resizes update the committed width.
//!
//! [`SizingSnapshot`] captures the pinned widths so they can be saved and
//! restored across sessions (serde derives behind `state-persistence`).

use crate::column::ColumnKey;

/// Current schema version of [`SizingSnapshot`].
pub const SIZING_SNAPSHOT_VERSION: u32 = 1;

/// How a column's width is decided on the next layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ColumnSizing {
    /// Derived from the column's declarations.
    #[default]
    Auto,
    /// Committed by a user resize; reserved as a static width.
    Fixed(f64),
}

impl ColumnSizing {
    /// Whether the column has been resized by the user.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, ColumnSizing::Fixed(_))
    }

    /// The committed width of a resized column.
    #[must_use]
    pub const fn fixed_width(self) -> Option<f64> {
        match self {
            ColumnSizing::Fixed(width) => Some(width),
            ColumnSizing::Auto => None,
        }
    }
}

/// Versioned record of user-resized columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SizingSnapshot {
    /// Schema version ([`SIZING_SNAPSHOT_VERSION`] when produced here).
    pub version: u32,
    /// Committed widths of resized columns, in display order.
    pub columns: Vec<(ColumnKey, f64)>,
}

impl SizingSnapshot {
    /// An empty snapshot at the current version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: SIZING_SNAPSHOT_VERSION,
            columns: Vec::new(),
        }
    }

    /// Whether the stored version can be applied.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.version == SIZING_SNAPSHOT_VERSION
    }

    /// Whether no column is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for SizingSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
