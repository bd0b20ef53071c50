//! Number formatting for axis ticks and value labels.
//!
//! A small, locale-independent subset of the d3-format specifier language:
//!
//! ```text
//! [,][.precision][type]
//! ```
//!
//! | type   | meaning                                                    | default precision |
//! |--------|------------------------------------------------------------|-------------------|
//! | (none) | up to `precision` significant digits, trailing zeros cut   | 12                |
//! | `d`    | rounded to an integer (halves round up)                    | -                 |
//! | `f`    | fixed point                                                | 6                 |
//! | `%`    | multiplied by 100, fixed point, `%` suffix                 | 6                 |
//! | `e`    | exponent notation, `e+N` / `e-N`                           | 6                 |
//!
//! Precision is clamped to `1..=21` significant digits for the default type
//! and to `0..=20` fractional digits for `f`, `%` and `e`.
//!
//! A leading `,` groups the integer digits in thousands. Negative values use an
//! ASCII `-`, and a value that rounds to zero is printed without a sign. The
//! default type never switches to exponent notation, however large or small
//! the value.
//!
//! # Examples
//!
//! ```
//! use stolpekart::format::{format_value, format_value_default};
//!
//! assert_eq!(format_value_default(1234567.891), "1,234,567.891");
//! assert_eq!(format_value(0.5, ".0%").unwrap(), "50%");
//! assert_eq!(format_value(-1234.5, ",.2f").unwrap(), "-1,234.50");
//! ```

use crate::error::{Error, Result};

/// Specifier used for axis ticks and bar labels.
pub const DEFAULT_FORMAT: &str = ",";

const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;
const DEFAULT_FIXED_PRECISION: usize = 6;
const MAX_FIXED_PRECISION: usize = 20;

/// Presentation type of a [`FormatSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatType {
    /// Significant digits with trailing zeros trimmed.
    #[default]
    General,
    /// Rounded integer.
    Integer,
    /// Fixed point.
    Fixed,
    /// Percentage, fixed point.
    Percent,
    /// Exponent notation.
    Exponent,
}

/// A parsed number-format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    /// Group integer digits in thousands with `,`.
    pub grouping: bool,
    /// Digits of precision; meaning depends on [`FormatType`].
    pub precision: Option<usize>,
    /// Presentation type.
    pub kind: FormatType,
}

impl FormatSpec {
    /// Parses a specifier such as `","`, `",.2f"`, `".0%"` or `"d"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stolpekart::format::{FormatSpec, FormatType};
    ///
    /// let spec = FormatSpec::parse(",.2f").unwrap();
    /// assert!(spec.grouping);
    /// assert_eq!(spec.precision, Some(2));
    /// assert_eq!(spec.kind, FormatType::Fixed);
    ///
    /// assert!(FormatSpec::parse("x").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidFormat {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut rest = spec;
        let grouping = match rest.strip_prefix(',') {
            Some(tail) => {
                rest = tail;
                true
            }
            None => false,
        };

        let precision = match rest.strip_prefix('.') {
            Some(tail) => {
                let digits = tail.len() - tail.trim_start_matches(|c: char| c.is_ascii_digit()).len();
                if digits == 0 {
                    return Err(invalid("expected digits after '.'"));
                }
                let value = tail[..digits]
                    .parse::<usize>()
                    .map_err(|_| invalid("precision out of range"))?;
                rest = &tail[digits..];
                Some(value)
            }
            None => None,
        };

        let kind = match rest {
            "" => FormatType::General,
            "d" => FormatType::Integer,
            "f" => FormatType::Fixed,
            "%" => FormatType::Percent,
            "e" => FormatType::Exponent,
            _ => return Err(invalid("unsupported type")),
        };

        Ok(Self {
            grouping,
            precision,
            kind,
        })
    }

    /// The default specifier, `","`.
    pub const fn grouped() -> Self {
        Self {
            grouping: true,
            precision: None,
            kind: FormatType::General,
        }
    }

    /// Formats `value` according to this specifier.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
        }

        let magnitude = value.abs();
        let (mut body, suffix) = match self.kind {
            FormatType::General => {
                let digits = self.precision.unwrap_or(DEFAULT_SIGNIFICANT_DIGITS).clamp(1, 21);
                (significant(magnitude, digits), "")
            }
            FormatType::Integer => (format!("{:.0}", (value + 0.5).floor().abs()), ""),
            FormatType::Fixed => {
                let digits = self.fixed_digits();
                (format!("{magnitude:.digits$}"), "")
            }
            FormatType::Percent => {
                let digits = self.fixed_digits();
                (format!("{:.digits$}", magnitude * 100.0), "%")
            }
            FormatType::Exponent => {
                let digits = self.fixed_digits();
                (signed_exponent(&format!("{magnitude:.digits$e}")), "")
            }
        };

        if self.grouping {
            body = group_thousands(&body);
        }

        let negative = value < 0.0 && !is_zero_body(&body);
        let sign = if negative { "-" } else { "" };
        format!("{sign}{body}{suffix}")
    }

    fn fixed_digits(&self) -> usize {
        self.precision
            .unwrap_or(DEFAULT_FIXED_PRECISION)
            .min(MAX_FIXED_PRECISION)
    }
}

/// Formats `value` with the given specifier string.
pub fn format_value(value: f64, spec: &str) -> Result<String> {
    Ok(FormatSpec::parse(spec)?.format(value))
}

/// Formats `value` with [`DEFAULT_FORMAT`].
pub fn format_value_default(value: f64) -> String {
    FormatSpec::grouped().format(value)
}

/// Rounds to `digits` significant digits and prints the shortest decimal form.
fn significant(magnitude: f64, digits: usize) -> String {
    if magnitude == 0.0 {
        return "0".to_string();
    }
    let rounded = format!("{:.*e}", digits - 1, magnitude);
    let value: f64 = rounded.parse().unwrap_or(magnitude);
    format!("{value}")
}

/// Rewrites Rust's `1.5e3` exponent form into `1.5e+3`.
fn signed_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted.to_string(),
    }
}

fn group_thousands(body: &str) -> String {
    let split = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
    let (integer, tail) = body.split_at(split);

    let mut grouped = String::with_capacity(body.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(tail);
    grouped
}

fn is_zero_body(body: &str) -> bool {
    body.split('e')
        .next()
        .unwrap_or(body)
        .chars()
        .filter(char::is_ascii_digit)
        .all(|c| c == '0')
}
