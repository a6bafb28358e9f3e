//! Property-based invariant tests for the flexible-width solver and the
//! resize path.
//!
//! 1. Every flexible width lies in `[min, max]`.
//! 2. Unbounded flexible columns are proportional to their weights and sum
//!    to the remaining space.
//! 3. Without binding minimums, the layout fills the table exactly.
//! 4. Resizing a column never touches the columns before it.
//! 5. Solving twice gives identical output.

use proptest::prelude::*;
use tabula_layout::{ColumnLayout, ColumnSize, ColumnSpec, FlexColumn, solve_flexible};

const TOL: f64 = 1e-6;

// ── Helpers ─────────────────────────────────────────────────────────────

fn flex_column_strategy() -> impl Strategy<Value = (u32, f64, Option<f64>)> {
    (1u32..=8, 0.0f64..200.0, proptest::option::of(0.0f64..400.0))
}

fn flex_columns(raw: &[(u32, f64, Option<f64>)]) -> Vec<FlexColumn> {
    raw.iter()
        .enumerate()
        .map(|(i, &(weight, min, extra))| {
            let max = extra.map_or(f64::INFINITY, |extra| min + extra);
            FlexColumn::new(i, weight, min, max)
        })
        .collect()
}

fn spec_strategy() -> impl Strategy<Value = ColumnSpec> {
    (
        prop_oneof![
            Just(None),
            (1u32..=4).prop_map(|w| Some(ColumnSize::flex(w))),
            (20.0f64..200.0).prop_map(|px| Some(ColumnSize::px(px))),
            (1u32..=30).prop_map(|p| Some(ColumnSize::percent(f64::from(p)))),
        ],
        0.0f64..100.0,
        proptest::option::of(0.0f64..300.0),
    )
        .prop_map(|(size, min, extra)| {
            let mut spec = ColumnSpec::new("").min_width(min);
            if let Some(extra) = extra {
                spec = spec.max_width(min + extra);
            }
            if let Some(size) = size {
                spec = spec.default_width(size);
            }
            spec
        })
}

fn keyed(specs: Vec<ColumnSpec>) -> Vec<ColumnSpec> {
    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| {
            let mut keyed = ColumnSpec::new(format!("col{i}"));
            if let Some(size) = spec.default_width_spec() {
                keyed = keyed.default_width(size);
            }
            if let Some(min) = spec.min_width_spec() {
                keyed = keyed.min_width(min);
            }
            if let Some(max) = spec.max_width_spec() {
                keyed = keyed.max_width(max);
            }
            keyed
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bounds are always honored
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn widths_within_bounds(
        raw in proptest::collection::vec(flex_column_strategy(), 1..12),
        space in -500.0f64..3000.0,
    ) {
        let columns = flex_columns(&raw);
        let widths = solve_flexible(&columns, space);
        prop_assert_eq!(widths.len(), columns.len());
        for (column, &width) in columns.iter().zip(&widths) {
            prop_assert!(width >= column.min - TOL, "{width} < min {}", column.min);
            prop_assert!(width <= column.max + TOL, "{width} > max {}", column.max);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Unbounded columns are proportional
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unbounded_widths_are_proportional(
        weights in proptest::collection::vec(1u32..=10, 1..10),
        space in 0.0f64..5000.0,
    ) {
        let columns: Vec<FlexColumn> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| FlexColumn::new(i, w, 0.0, f64::INFINITY))
            .collect();
        let widths = solve_flexible(&columns, space);
        let total_weight: f64 = weights.iter().map(|&w| f64::from(w)).sum();
        for (&weight, &width) in weights.iter().zip(&widths) {
            let expected = f64::from(weight) / total_weight * space;
            prop_assert!((width - expected).abs() < TOL, "{width} != {expected}");
        }
        let sum: f64 = widths.iter().sum();
        prop_assert!((sum - space).abs() < TOL);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Feasible layouts fill the table
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn feasible_flex_layout_fills_table(
        weights in proptest::collection::vec(1u32..=5, 1..8),
        table_width in 0.0f64..4000.0,
    ) {
        let specs: Vec<ColumnSpec> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                ColumnSpec::new(format!("c{i}"))
                    .default_width(ColumnSize::flex(w))
                    .min_width(0.0)
            })
            .collect();
        let layout = ColumnLayout::new(specs, table_width).unwrap();
        prop_assert!((layout.total_width() - table_width).abs() < TOL);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Resize never touches earlier columns
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_preserves_prefix(
        specs in proptest::collection::vec(spec_strategy(), 2..8),
        table_width in 200.0f64..2000.0,
        pick in any::<prop::sample::Index>(),
        delta in -300.0f64..300.0,
    ) {
        let specs = keyed(specs);
        let mut layout = ColumnLayout::new(specs, table_width).unwrap();
        let index = pick.index(layout.len());
        let key = layout.columns()[index].key().clone();
        let before: Vec<f64> = layout.widths().map(|(_, w)| w).collect();

        let map = layout.resize(key.as_str(), delta).unwrap();
        let after: Vec<f64> = layout.widths().map(|(_, w)| w).collect();

        prop_assert_eq!(&before[..index], &after[..index]);
        prop_assert_eq!(map.len(), layout.len());
        prop_assert!(layout.sizing(key.as_str()).is_some_and(|s| s.is_fixed()));
        for width in after {
            prop_assert!(width >= 0.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn solver_is_deterministic(
        raw in proptest::collection::vec(flex_column_strategy(), 0..10),
        space in 0.0f64..2000.0,
    ) {
        let columns = flex_columns(&raw);
        prop_assert_eq!(solve_flexible(&columns, space), solve_flexible(&columns, space));
    }
}
