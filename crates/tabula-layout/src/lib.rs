#![forbid(unsafe_code)]

//! Column-width layout for accessible tables.
//!
//! Given a table width and a set of columns, each with optional minimum and
//! maximum widths and either a static (pixel or percentage) or flexible
//! (`flex-<n>`) declared width, this crate computes a width for every
//! column that honors the bounds and fills the table.
//!
//! - [`width`] - width parsing: pixel, percentage, and fractional forms
//! - [`partition`] - static reservation of fixed and resized columns
//! - [`solver`] - clamp-and-redistribute over fractional weights
//! - [`layout`] - [`ColumnLayout`]: initial layout, resizing, sticky sizing
//!
//! # Example
//!
//! ```
//! use tabula_layout::{ColumnLayout, ColumnSize, ColumnSpec};
//!
//! let layout = ColumnLayout::new(
//!     [
//!         ColumnSpec::new("name").width(200.0),
//!         ColumnSpec::new("type").default_width(ColumnSize::flex(1)),
//!         ColumnSpec::new("level").default_width(ColumnSize::flex(1)),
//!     ],
//!     800.0,
//! )?;
//! assert_eq!(layout.column_width("type"), Some(300.0));
//! assert_eq!(layout.total_width(), 800.0);
//! # Ok::<(), tabula_layout::LayoutError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `tracing`: spans around layout and resize, events per solver step.
//! - `state-persistence`: serde derives for [`SizingSnapshot`] and friends.

pub mod column;
pub mod config;
pub mod layout;
pub mod partition;
pub mod sizing;
pub mod solver;
pub mod width;

pub use column::{ColumnKey, ColumnSpec};
pub use config::{DEFAULT_MIN_WIDTH, DEFAULT_WEIGHT, SizingConfig};
pub use layout::{ColumnLayout, LayoutError, WidthMap};
pub use partition::{Partition, partition};
pub use sizing::{ColumnSizing, SIZING_SNAPSHOT_VERSION, SizingSnapshot};
pub use solver::{FlexColumn, solve_flexible};
pub use width::{ColumnSize, Width, WidthError, parse_fraction, parse_width};
