//! Measurement intervals and free-text range parsing
//!
//! Size chart cells arrive as arbitrary text ("38-40", "38½\"", "97 cm /
//! 38 in", "one size"). [`parse_range`] reduces them to a numeric interval
//! or rejects them; the caller drops rejected cells.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// An inclusive measurement interval in inches.
///
/// Always normalized so `min <= max`; a single measured value is the
/// degenerate interval `(v, v)`.
///
/// # Examples
///
/// ```
/// use sizewise::model::MeasurementRange;
///
/// let range = MeasurementRange::new(40.0, 38.0);
/// assert_eq!(range.min, 38.0);
/// assert_eq!(range.max, 40.0);
/// assert_eq!(range.median(), 39.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    /// Lower bound, inches
    pub min: f64,
    /// Upper bound, inches
    pub max: f64,
}

impl MeasurementRange {
    /// Create a range from two bounds, sorting them so `min <= max`.
    ///
    /// Source charts sometimes present descending ranges; normalizing here
    /// keeps the invariant out of every consumer.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// A single measured value as the degenerate interval `(v, v)`.
    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Midpoint of the interval.
    pub fn median(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Width of the interval (zero for a single value).
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Both bounds shifted by `delta` inches.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Whether `value` lies inside the interval (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for MeasurementRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width() == 0.0 {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

fn pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+\.?\d*)\s*[-\x{2013}]\s*(\d+\.?\d*)").expect("pair regex is valid")
    })
}

fn single_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.?\d*)").expect("single regex is valid"))
}

/// Parse a free-text chart cell into a measurement interval.
///
/// Strips every character except digits, `.`, `-` and en-dash, then looks
/// for a `NUMBER-NUMBER` pair and falls back to a single number. Returns
/// `None` when no number survives ("one size", empty cells, icon glyphs).
///
/// # Examples
///
/// ```
/// use sizewise::model::{parse_range, MeasurementRange};
///
/// assert_eq!(parse_range("38-40"), Some(MeasurementRange::new(38.0, 40.0)));
/// assert_eq!(parse_range("38\""), Some(MeasurementRange::single(38.0)));
/// assert_eq!(parse_range("one size"), None);
/// ```
pub fn parse_range(text: &str) -> Option<MeasurementRange> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_digit() || c == '.' || c == '-' || c == '\u{2013}' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(caps) = pair_regex().captures(cleaned) {
        let a: f64 = caps[1].parse().ok()?;
        let b: f64 = caps[2].parse().ok()?;
        return Some(MeasurementRange::new(a, b));
    }

    let caps = single_regex().captures(cleaned)?;
    let value: f64 = caps[1].parse().ok()?;
    Some(MeasurementRange::single(value))
}
