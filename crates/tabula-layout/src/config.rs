//! Sizing constants shared by the partitioner, solver, and resize path.

/// Minimum width applied to a column that declares no `min_width`.
pub const DEFAULT_MIN_WIDTH: f64 = 75.0;

/// Fractional weight of a flexible column that declares no `flex-<n>` width.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Explicit sizing defaults passed into every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConfig {
    /// Minimum width for columns without a declared minimum.
    pub default_min_width: f64,
    /// Weight for flexible columns without a declared fraction.
    pub default_weight: u32,
}

impl SizingConfig {
    /// Default sizing: 75 unit minimum, weight 1.
    pub const DEFAULT: Self = Self {
        default_min_width: DEFAULT_MIN_WIDTH,
        default_weight: DEFAULT_WEIGHT,
    };

    /// Override the default minimum width.
    ///
    /// Negative or NaN values are floored to zero.
    #[must_use]
    pub fn with_default_min_width(mut self, width: f64) -> Self {
        self.default_min_width = width.max(0.0);
        self
    }

    /// Override the default fractional weight.
    #[must_use]
    pub fn with_default_weight(mut self, weight: u32) -> Self {
        self.default_weight = weight;
        self
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
