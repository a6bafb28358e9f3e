//! Sizing snapshot persistence.
//!
//! ```sh
//! cargo test -p tabula-layout --features state-persistence --test state_persistence
//! ```

#![cfg(feature = "state-persistence")]

use tabula_layout::{
    ColumnKey, ColumnLayout, ColumnSize, ColumnSizing, ColumnSpec, SIZING_SNAPSHOT_VERSION,
    SizingSnapshot,
};

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name").width(ColumnSize::percent(25.0)),
        ColumnSpec::new("type"),
        ColumnSpec::new("level").max_width(180.0),
    ]
}

#[test]
fn snapshot_survives_json() {
    let mut layout = ColumnLayout::new(columns(), 800.0).unwrap();
    layout.resize("type", -40.0).unwrap();

    let json = serde_json::to_string(&layout.sizing_snapshot()).unwrap();
    let restored: SizingSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.version, SIZING_SNAPSHOT_VERSION);

    let mut fresh = ColumnLayout::new(columns(), 800.0).unwrap();
    assert!(fresh.restore_sizing(restored));
    assert_eq!(fresh.width_map(), layout.width_map());
    assert_eq!(fresh.sizing("type"), layout.sizing("type"));
}

#[test]
fn snapshot_json_shape() {
    let snapshot = SizingSnapshot {
        version: SIZING_SNAPSHOT_VERSION,
        columns: vec![(ColumnKey::from("name"), 120.0)],
    };
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["columns"][0][0], "name");
    assert_eq!(value["columns"][0][1], 120.0);
}

#[test]
fn restored_widths_are_clamped() {
    let snapshot = SizingSnapshot {
        version: SIZING_SNAPSHOT_VERSION,
        columns: vec![
            (ColumnKey::from("level"), 900.0),
            (ColumnKey::from("gone"), 50.0),
        ],
    };
    let mut layout = ColumnLayout::new(columns(), 800.0).unwrap();
    assert!(layout.restore_sizing(snapshot));
    assert_eq!(layout.sizing("level"), Some(ColumnSizing::Fixed(180.0)));
    assert_eq!(layout.column_width("gone"), None);
}

#[test]
fn sizing_enum_serializes() {
    let json = serde_json::to_string(&ColumnSizing::Fixed(42.0)).unwrap();
    let back: ColumnSizing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ColumnSizing::Fixed(42.0));
}
