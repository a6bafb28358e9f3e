//! Static partitioning of columns ahead of flexible distribution.

use crate::column::ColumnSpec;
use crate::config::SizingConfig;
use crate::sizing::ColumnSizing;
use crate::solver::{FlexColumn, solve_flexible};
use crate::width::ColumnSize;

/// Result of splitting columns into reserved and flexible sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Reserved width per column; `None` for flexible columns.
    pub widths: Vec<Option<f64>>,
    /// Flexible columns, in display order, indexed into `widths`.
    pub flexible: Vec<FlexColumn>,
    /// Space left after reservations. May be negative.
    pub remaining_space: f64,
}

impl Partition {
    /// Total space reserved by static and resized columns.
    #[must_use]
    pub fn reserved(&self) -> f64 {
        self.widths.iter().flatten().sum()
    }

    /// Run the flexible solver and merge its output with the reservations.
    #[must_use]
    pub fn solve(self) -> Vec<f64> {
        let Partition {
            widths,
            flexible,
            remaining_space,
        } = self;
        let mut merged: Vec<f64> = widths.into_iter().map(|w| w.unwrap_or(0.0)).collect();
        let solved = solve_flexible(&flexible, remaining_space);
        for (column, width) in flexible.iter().zip(solved) {
            merged[column.index] = width;
        }
        merged
    }
}

/// Split `columns` into reserved widths and flexible columns.
///
/// `sizing` is parallel to `columns`. Per column, in display order:
///
/// 1. [`ColumnSizing::Fixed`] reserves the committed width.
/// 2. A static declared size reserves its resolved width against
///    `reference_width` (the full table width, so percentages stay stable
///    when only a suffix of columns is being re-solved). Negative and
///    non-finite widths reserve nothing.
/// 3. Otherwise the column is flexible with its fractional weight.
pub fn partition(
    columns: &[ColumnSpec],
    sizing: &[ColumnSizing],
    reference_width: f64,
    available_space: f64,
    config: &SizingConfig,
) -> Partition {
    debug_assert_eq!(columns.len(), sizing.len());

    let mut widths = Vec::with_capacity(columns.len());
    let mut flexible = Vec::new();
    let mut remaining_space = available_space;

    for (index, (column, sizing)) in columns.iter().zip(sizing).enumerate() {
        let reserved = match (sizing, column.declared_size()) {
            (ColumnSizing::Fixed(width), _) => Some(*width),
            (ColumnSizing::Auto, Some(ColumnSize::Static(width))) => {
                Some(width.resolve_finite(reference_width).unwrap_or(0.0).max(0.0))
            }
            (ColumnSizing::Auto, Some(ColumnSize::Fraction(weight))) => {
                flexible.push(flex_column(index, weight, column, reference_width, config));
                None
            }
            (ColumnSizing::Auto, None) => {
                flexible.push(flex_column(
                    index,
                    config.default_weight,
                    column,
                    reference_width,
                    config,
                ));
                None
            }
        };
        if let Some(width) = reserved {
            remaining_space -= width;
        }
        widths.push(reserved);
    }

    Partition {
        widths,
        flexible,
        remaining_space,
    }
}

fn flex_column(
    index: usize,
    weight: u32,
    column: &ColumnSpec,
    reference_width: f64,
    config: &SizingConfig,
) -> FlexColumn {
    FlexColumn::new(
        index,
        weight,
        column.min_px(reference_width, config),
        column.max_px(reference_width),
    )
}
