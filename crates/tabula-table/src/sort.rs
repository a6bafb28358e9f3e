//! Sort descriptors.

use std::fmt;

use tabula_layout::ColumnKey;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Value for the `aria-sort` attribute.
    #[must_use]
    pub const fn aria_sort(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aria_sort())
    }
}

/// The column a table is sorted by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SortDescriptor {
    /// Column the rows are sorted by.
    pub column: ColumnKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// Create a descriptor.
    pub fn new(column: impl Into<ColumnKey>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Descriptor after the user activates `column`'s header.
    ///
    /// Activating the current sort column flips its direction; any other
    /// column starts ascending.
    #[must_use]
    pub fn toggled(current: Option<&SortDescriptor>, column: &ColumnKey) -> Self {
        let direction = match current {
            Some(current) if current.column == *column => current.direction.opposite(),
            _ => SortDirection::Ascending,
        };
        Self {
            column: column.clone(),
            direction,
        }
    }
}
