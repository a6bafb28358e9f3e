//! Flexible-width solver.
//!
//! Distributes leftover space across fractional columns while honoring
//! per-column `[min, max]` bounds.
//!
//! # Algorithm: Clamp-and-Redistribute
//!
//! 1. Compute every column's proportional target
//!    `weight / total_weight * remaining_space`.
//! 2. Measure how far each target falls outside its bounds:
//!    `delta = max(0, min - target, target - max)`.
//! 3. Visit columns in descending delta order (stable, so equal deltas keep
//!    display order). Each visit recomputes the target against the space and
//!    weight still in the pool, clamps it into `[min, max]`, then removes the
//!    column's width and weight from the pool.
//! 4. Write results back in input order.
//!
//! Columns that violate their bounds are settled first, so the columns that
//! remain absorb whatever the clamped ones gave up or demanded.
//!
//! # Properties
//!
//! - Every width lies in `[min, max]` (or equals `min` when the bounds cross).
//! - If every column lands inside its bounds, widths sum to `remaining_space`.
//! - When minimums exceed the space, columns pin to their minimums and the
//!   total overflows. The overflow is accepted, not corrected.
//! - O(n log n) for the sort, one pass afterwards.

/// A flexible column as seen by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexColumn {
    /// Position of the column in the caller's slice.
    pub index: usize,
    /// Fractional weight.
    pub weight: u32,
    /// Minimum width (expected non-negative).
    pub min: f64,
    /// Maximum width (may be infinite).
    pub max: f64,
}

impl FlexColumn {
    /// Create a flexible column.
    #[must_use]
    pub const fn new(index: usize, weight: u32, min: f64, max: f64) -> Self {
        Self {
            index,
            weight,
            min,
            max,
        }
    }

    /// Clamp a target into this column's bounds.
    #[inline]
    #[must_use]
    pub fn clamp(&self, target: f64) -> f64 {
        target.min(self.max).max(self.min)
    }

    /// How far `target` falls outside `[min, max]`.
    #[inline]
    #[must_use]
    pub fn delta(&self, target: f64) -> f64 {
        0f64.max(self.min - target).max(target - self.max)
    }
}

/// Solve widths for flexible columns sharing `remaining_space`.
///
/// The result is parallel to `columns`.
///
/// # Example
///
/// ```
/// use tabula_layout::{FlexColumn, solve_flexible};
///
/// let columns = [
///     FlexColumn::new(0, 1, 100.0, 150.0),
///     FlexColumn::new(1, 1, 75.0, f64::INFINITY),
///     FlexColumn::new(2, 1, 75.0, f64::INFINITY),
/// ];
/// // The capped column settles first; its excess flows to its siblings.
/// assert_eq!(solve_flexible(&columns, 800.0), vec![150.0, 325.0, 325.0]);
/// ```
#[must_use]
pub fn solve_flexible(columns: &[FlexColumn], remaining_space: f64) -> Vec<f64> {
    if columns.is_empty() {
        return Vec::new();
    }

    let total_weight: u64 = columns.iter().map(|c| u64::from(c.weight)).sum();

    let mut order: Vec<(usize, f64)> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let target = proportional(c.weight, total_weight, remaining_space);
            (i, c.delta(target))
        })
        .collect();
    // `sort_by` is stable: equal deltas keep display order.
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut widths = vec![0.0; columns.len()];
    let mut space = remaining_space;
    let mut pool = total_weight;

    for (i, _delta) in order {
        let column = &columns[i];
        let target = proportional(column.weight, pool, space);
        let width = column.clamp(target);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            index = column.index,
            weight = column.weight,
            target,
            width,
            space,
            "flex column settled"
        );

        widths[i] = width;
        space -= width;
        pool -= u64::from(column.weight);
    }

    #[cfg(feature = "tracing")]
    if space < -f64::EPSILON * remaining_space.abs().max(1.0) {
        tracing::warn!(
            overflow = -space,
            remaining_space,
            "column minimums exceed available space"
        );
    }

    widths
}

#[inline]
fn proportional(weight: u32, pool: u64, space: f64) -> f64 {
    if pool == 0 {
        return 0.0;
    }
    f64::from(weight) * space / pool as f64
}
