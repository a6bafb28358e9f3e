//! Column identity and sizing declarations.

use std::borrow::Borrow;
use std::fmt;

use crate::config::SizingConfig;
use crate::width::{ColumnSize, Width};

/// Stable identifier for a column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ColumnKey(String);

impl ColumnKey {
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

impl From<&str> for ColumnKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for ColumnKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for ColumnKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sizing declaration for one column.
///
/// Display order is the column's position in the slice handed to the
/// layout. The spec is immutable for the duration of a layout pass.
///
/// # Example
///
/// ```
/// use tabula_layout::{ColumnSize, ColumnSpec, Width};
///
/// let name = ColumnSpec::new("name").width(200.0);
/// let notes = ColumnSpec::new("notes")
///     .default_width(ColumnSize::flex(2))
///     .min_width(100.0)
///     .max_width(Width::Percent(50.0));
/// assert_eq!(notes.key().as_str(), "notes");
/// assert!(name.declared_size().is_some_and(|s| s.is_static()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    key: ColumnKey,
    width: Option<ColumnSize>,
    default_width: Option<ColumnSize>,
    min_width: Option<Width>,
    max_width: Option<Width>,
}

impl ColumnSpec {
    /// Create a column with no sizing declarations (flexible, default weight).
    pub fn new(key: impl Into<ColumnKey>) -> Self {
        Self {
            key: key.into(),
            width: None,
            default_width: None,
            min_width: None,
            max_width: None,
        }
    }

    /// Set the declared width. Takes precedence over the default width.
    #[must_use]
    pub fn width(mut self, width: impl Into<ColumnSize>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the default display width (static or `flex-<n>`).
    #[must_use]
    pub fn default_width(mut self, width: impl Into<ColumnSize>) -> Self {
        self.default_width = Some(width.into());
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, width: impl Into<Width>) -> Self {
        self.min_width = Some(width.into());
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, width: impl Into<Width>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    /// The column key.
    #[must_use]
    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// Declared width, if any.
    #[must_use]
    pub fn width_spec(&self) -> Option<ColumnSize> {
        self.width
    }

    /// Declared default width, if any.
    #[must_use]
    pub fn default_width_spec(&self) -> Option<ColumnSize> {
        self.default_width
    }

    /// Declared minimum, if any.
    #[must_use]
    pub fn min_width_spec(&self) -> Option<Width> {
        self.min_width
    }

    /// Declared maximum, if any.
    #[must_use]
    pub fn max_width_spec(&self) -> Option<Width> {
        self.max_width
    }

    /// The size that drives layout: `width`, falling back to `default_width`.
    #[must_use]
    pub fn declared_size(&self) -> Option<ColumnSize> {
        self.width.or(self.default_width)
    }

    /// Fractional weight, or `None` for statically sized columns.
    #[must_use]
    pub fn weight(&self, config: &SizingConfig) -> Option<u32> {
        match self.declared_size() {
            Some(ColumnSize::Static(_)) => None,
            Some(ColumnSize::Fraction(weight)) => Some(weight),
            None => Some(config.default_weight),
        }
    }

    /// Resolved minimum width in pixels, never negative.
    #[must_use]
    pub fn min_px(&self, reference: f64, config: &SizingConfig) -> f64 {
        let min = match self.min_width {
            Some(width) => width.resolve_finite(reference).unwrap_or(0.0),
            None => config.default_min_width,
        };
        min.max(0.0)
    }

    /// Resolved maximum width in pixels. Unbounded when undeclared or when
    /// the declaration does not resolve to a finite width.
    #[must_use]
    pub fn max_px(&self, reference: f64) -> f64 {
        self.max_width
            .and_then(|w| w.resolve_finite(reference))
            .unwrap_or(f64::INFINITY)
    }

    /// Clamp a candidate width into `[min, max]`. The minimum wins when the
    /// bounds cross.
    #[must_use]
    pub fn clamp(&self, width: f64, reference: f64, config: &SizingConfig) -> f64 {
        width
            .min(self.max_px(reference))
            .max(self.min_px(reference, config))
    }
}
