//! Declared column widths and their parsing.
//!
//! Two grammars are accepted:
//!
//! | Form            | Example   | Meaning                                   |
//! |-----------------|-----------|-------------------------------------------|
//! | bare number     | `200`     | Absolute width in pixels                  |
//! | `<digits>%`     | `50%`     | Share of the reference (table) width      |
//! | `flex-<digits>` | `flex-2`  | Fractional weight, display widths only    |
//!
//! Absolute, minimum, and maximum widths only accept the first two forms.
//! Anything else is a configuration mistake and fails with
//! [`WidthError::InvalidWidthFormat`].

use std::fmt;
use std::str::FromStr;

/// A static width: absolute pixels or a percentage of the table width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Width {
    /// Absolute width in pixels.
    Px(f64),
    /// Percentage (0-100) of the reference width.
    Percent(f64),
}

impl Width {
    /// Resolve to pixels against a reference width.
    ///
    /// ```
    /// use tabula_layout::Width;
    ///
    /// assert_eq!(Width::Percent(50.0).resolve(800.0), 400.0);
    /// assert_eq!(Width::Px(120.0).resolve(800.0), 120.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Width::Px(px) => px,
            Width::Percent(p) => reference * p / 100.0,
        }
    }

    /// Resolve like [`Width::resolve`], returning `None` for NaN or an
    /// infinite result.
    #[inline]
    #[must_use]
    pub fn resolve_finite(self, reference: f64) -> Option<f64> {
        Some(self.resolve(reference)).filter(|px| px.is_finite())
    }
}

impl From<f64> for Width {
    fn from(px: f64) -> Self {
        Width::Px(px)
    }
}

impl From<u32> for Width {
    fn from(px: u32) -> Self {
        Width::Px(f64::from(px))
    }
}

impl FromStr for Width {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digits) = s.strip_suffix('%') {
            if is_digits(digits)
                && let Ok(p) = digits.parse::<f64>()
            {
                return Ok(Width::Percent(p));
            }
            return Err(WidthError::invalid(s));
        }
        match s.parse::<f64>() {
            Ok(px) if px.is_finite() && px >= 0.0 => Ok(Width::Px(px)),
            _ => Err(WidthError::invalid(s)),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Px(px) => write!(f, "{px}"),
            Width::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// A declared display width: static, or a fractional weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ColumnSize {
    /// Reserved up front by the partitioner.
    Static(Width),
    /// Shares leftover space in proportion to its weight.
    Fraction(u32),
}

impl ColumnSize {
    /// Absolute pixel width.
    #[must_use]
    pub const fn px(px: f64) -> Self {
        ColumnSize::Static(Width::Px(px))
    }

    /// Percentage of the table width.
    #[must_use]
    pub const fn percent(p: f64) -> Self {
        ColumnSize::Static(Width::Percent(p))
    }

    /// Fractional weight (`flex-<n>`).
    #[must_use]
    pub const fn flex(weight: u32) -> Self {
        ColumnSize::Fraction(weight)
    }

    /// Whether this size is reserved rather than distributed.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, ColumnSize::Static(_))
    }
}

impl From<Width> for ColumnSize {
    fn from(width: Width) -> Self {
        ColumnSize::Static(width)
    }
}

impl From<f64> for ColumnSize {
    fn from(px: f64) -> Self {
        ColumnSize::px(px)
    }
}

impl From<u32> for ColumnSize {
    fn from(px: u32) -> Self {
        ColumnSize::px(f64::from(px))
    }
}

impl FromStr for ColumnSize {
    type Err = WidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(weight) = parse_flex(s) {
            return Ok(ColumnSize::Fraction(weight));
        }
        s.parse::<Width>().map(ColumnSize::Static)
    }
}

impl fmt::Display for ColumnSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSize::Static(width) => width.fmt(f),
            ColumnSize::Fraction(weight) => write!(f, "flex-{weight}"),
        }
    }
}

/// Parse an absolute or percentage width string to pixels.
///
/// ```
/// use tabula_layout::{WidthError, parse_width};
///
/// assert_eq!(parse_width("50%", 800.0), Ok(400.0));
/// assert_eq!(parse_width("120", 800.0), Ok(120.0));
/// assert!(matches!(
///     parse_width("abc", 800.0),
///     Err(WidthError::InvalidWidthFormat { .. })
/// ));
/// ```
pub fn parse_width(spec: &str, reference: f64) -> Result<f64, WidthError> {
    spec.parse::<Width>().map(|w| w.resolve(reference))
}

/// Parse a fractional weight, tolerating missing or malformed input.
///
/// `None` is the common "no width declared" case and yields
/// `default_weight` silently. A string that is not `flex-<digits>` also
/// yields `default_weight`.
#[must_use]
pub fn parse_fraction(spec: Option<&str>, default_weight: u32) -> u32 {
    let Some(spec) = spec else {
        return default_weight;
    };
    match parse_flex(spec) {
        Some(weight) => weight,
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!(spec, default_weight, "malformed fractional width");
            default_weight
        }
    }
}

fn parse_flex(s: &str) -> Option<u32> {
    let digits = s.strip_prefix("flex-")?;
    if !is_digits(digits) {
        return None;
    }
    digits.parse().ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Error raised for malformed width declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// Input was not a bare number, `<digits>%`, or (where allowed) `flex-<digits>`.
    InvalidWidthFormat {
        /// The rejected input.
        input: String,
    },
}

impl WidthError {
    fn invalid(input: &str) -> Self {
        WidthError::InvalidWidthFormat {
            input: input.to_owned(),
        }
    }
}

impl fmt::Display for WidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthError::InvalidWidthFormat { input } => write!(
                f,
                "invalid width format {input:?}: only numbers and percentages are supported"
            ),
        }
    }
}

impl std::error::Error for WidthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_resolves_against_reference() {
        assert_eq!(parse_width("50%", 800.0), Ok(400.0));
        assert_eq!(parse_width("0%", 800.0), Ok(0.0));
        assert_eq!(parse_width("125%", 800.0), Ok(1000.0));
    }

    #[test]
    fn bare_number_is_pixels() {
        assert_eq!(parse_width("200", 800.0), Ok(200.0));
        assert_eq!(parse_width("12.5", 800.0), Ok(12.5));
    }

    #[test]
    fn malformed_widths_are_rejected() {
        for input in ["abc", "", "%", "50 %", "5.5%", "-10", "+5%", "flex-1", "inf", "NaN"] {
            assert_eq!(
                parse_width(input, 800.0),
                Err(WidthError::InvalidWidthFormat {
                    input: input.to_owned()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn column_size_accepts_flex() {
        assert_eq!("flex-3".parse::<ColumnSize>(), Ok(ColumnSize::Fraction(3)));
        assert_eq!("40%".parse::<ColumnSize>(), Ok(ColumnSize::percent(40.0)));
        assert_eq!("90".parse::<ColumnSize>(), Ok(ColumnSize::px(90.0)));
        assert!("flex-".parse::<ColumnSize>().is_err());
        assert!("flex-x".parse::<ColumnSize>().is_err());
    }

    #[test]
    fn fraction_defaults_when_missing_or_malformed() {
        assert_eq!(parse_fraction(None, 1), 1);
        assert_eq!(parse_fraction(Some("flex-4"), 1), 4);
        assert_eq!(parse_fraction(Some("wide"), 2), 2);
        assert_eq!(parse_fraction(Some("flex-"), 1), 1);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for size in [ColumnSize::px(120.0), ColumnSize::percent(25.0), ColumnSize::flex(2)] {
            assert_eq!(size.to_string().parse::<ColumnSize>(), Ok(size));
        }
    }

    #[test]
    fn error_message_names_input() {
        let err = parse_width("wide", 800.0).unwrap_err();
        assert!(err.to_string().contains("\"wide\""));
    }

    #[test]
    fn resolve_finite_rejects_non_finite() {
        assert_eq!(Width::Px(f64::INFINITY).resolve_finite(800.0), None);
        assert_eq!(Width::Px(f64::NAN).resolve_finite(800.0), None);
        assert_eq!(Width::Percent(25.0).resolve_finite(800.0), Some(200.0));
    }
}
