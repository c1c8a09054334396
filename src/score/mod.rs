//! Fit scoring: matching a profile against a chart
//!
//! Each chart entry gets a 0-100 confidence from a weighted average of
//! per-measurement fit scores. The per-measurement score is a piecewise
//! function of the value's distance from the range median, normalized by
//! the range half-width, with extra multiplicative penalties once the
//! value falls well outside the range.

use serde::{Deserialize, Serialize};

use crate::model::{Measurement, MeasurementRange, SizeChartEntry, UserProfile};
use crate::reference::BrandAdjustment;

/// Fit quality bands derived from a per-measurement score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitLabel {
    /// Score >= 90
    Perfect,
    /// Score >= 75
    Great,
    /// Score >= 60
    SlightlySnug,
    /// Score >= 40
    Loose,
    /// Anything below
    Poor,
    /// Chart lacks this measurement
    NotAvailable,
}

impl FitLabel {
    /// Band for a per-measurement score.
    pub fn from_score(score: Option<u8>) -> FitLabel {
        match score {
            None => FitLabel::NotAvailable,
            Some(s) if s >= 90 => FitLabel::Perfect,
            Some(s) if s >= 75 => FitLabel::Great,
            Some(s) if s >= 60 => FitLabel::SlightlySnug,
            Some(s) if s >= 40 => FitLabel::Loose,
            Some(_) => FitLabel::Poor,
        }
    }

    /// Short human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            FitLabel::Perfect => "perfect",
            FitLabel::Great => "great",
            FitLabel::SlightlySnug => "slightly snug",
            FitLabel::Loose => "loose",
            FitLabel::Poor => "poor",
            FitLabel::NotAvailable => "n/a",
        }
    }
}

/// One measurement's contribution to a ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Which measurement
    pub measurement: Measurement,
    /// 0-100 fit score; `None` when the chart lacks the measurement
    pub score: Option<u8>,
    /// Fit band for the score
    pub fit: FitLabel,
    /// The user's (preference-adjusted) value
    pub user_value: f64,
    /// The chart's (brand-adjusted) interval
    pub chart_range: MeasurementRange,
}

/// One chart entry scored against the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Size label from the chart
    pub size: String,
    /// 0-100 aggregate confidence
    pub confidence: u8,
    /// Per-measurement detail
    pub breakdown: Vec<BreakdownEntry>,
}

/// Shift every range in a chart by `bias * 0.5` inches.
///
/// Models systematic brand sizing skew without touching the scoring
/// function. A zero bias returns the chart unchanged.
///
/// # Examples
///
/// ```
/// use sizewise::model::{Measurement, MeasurementRange, SizeChartEntry};
/// use sizewise::score::apply_brand_bias;
///
/// let chart = vec![SizeChartEntry::new("M")
///     .with_range(Measurement::Chest, MeasurementRange::new(38.0, 40.0))];
///
/// let shifted = apply_brand_bias(&chart, -1.0);
/// assert_eq!(
///     shifted[0].range(Measurement::Chest),
///     Some(MeasurementRange::new(37.5, 39.5))
/// );
/// assert_eq!(apply_brand_bias(&chart, 0.0), chart);
/// ```
pub fn apply_brand_bias(chart: &[SizeChartEntry], bias: f64) -> Vec<SizeChartEntry> {
    if bias == 0.0 {
        return chart.to_vec();
    }
    let delta = bias * 0.5;
    chart
        .iter()
        .map(|entry| {
            let mut shifted = SizeChartEntry::new(entry.size.clone());
            for (measurement, range) in &entry.ranges {
                shifted.ranges.insert(*measurement, range.shifted(delta));
            }
            shifted
        })
        .collect()
}

/// Score one user value against one chart interval, 0-100.
///
/// Distance from the range median, in units of the range half-width, maps
/// through a monotonically decreasing piecewise curve; values far outside
/// the range take an additional loose/tight multiplicative penalty.
pub fn measurement_score(user_value: f64, range: MeasurementRange) -> u8 {
    let median = range.median();
    let width = range.width();
    let half_width = width / 2.0;

    let distance = (user_value - median).abs();
    // Degenerate (single-value) ranges: dead-on is perfect, anything else
    // is maximally distant.
    let rel_dist = if half_width > 0.0 {
        distance / half_width
    } else if distance == 0.0 {
        0.0
    } else {
        f64::INFINITY
    };

    let mut score = if rel_dist <= 0.1 {
        100.0
    } else if rel_dist <= 0.3 {
        95.0 - (rel_dist - 0.1) * 25.0 // 95 -> 90
    } else if rel_dist <= 0.5 {
        90.0 - (rel_dist - 0.3) * 35.0 // 90 -> 83
    } else if rel_dist <= 1.0 {
        83.0 - (rel_dist - 0.5) * 23.0 // 83 -> 71.5
    } else if rel_dist <= 1.5 {
        71.5 - (rel_dist - 1.0) * 35.0 // 71.5 -> 54
    } else if rel_dist <= 2.0 {
        54.0 - (rel_dist - 1.5) * 30.0 // 54 -> 39
    } else if rel_dist <= 3.0 {
        39.0 - (rel_dist - 2.0) * 25.0 // 39 -> 14
    } else {
        (14.0 - (rel_dist - 3.0) * 14.0).max(0.0)
    };

    // Loose-fit penalty: value well above the range
    if user_value > range.max && width > 0.0 {
        let overage = (user_value - range.max) / width;
        if overage > 0.5 {
            score *= 1.0 - (overage * 0.2).min(0.3);
        }
    }

    // Tight-fit penalty: value well below the range
    if user_value < range.min && width > 0.0 {
        let shortage = (range.min - user_value) / width;
        if shortage > 0.4 {
            score *= 1.0 - (shortage * 0.3).min(0.4);
        }
    }

    score.round().clamp(0.0, 100.0) as u8
}

/// The profile's measurements with the fit-preference offset applied to
/// chest/waist/hips (inseam stays as measured).
fn adjusted_value(profile: &UserProfile, measurement: Measurement) -> Option<f64> {
    let value = profile.measurement(measurement)?;
    let offset = match measurement {
        Measurement::Inseam => 0.0,
        _ => profile.fit_preference.offset(),
    };
    Some(value + offset)
}

/// Score a whole chart against a profile.
///
/// Returns one [`RankedResult`] per entry, sorted by confidence
/// descending; the sort is stable so document order breaks ties. Empty
/// when the chart has no entries or the profile carries no usable
/// measurement.
pub fn score_chart(
    profile: &UserProfile,
    chart: &[SizeChartEntry],
    brand: Option<&BrandAdjustment>,
) -> Vec<RankedResult> {
    if chart.is_empty() || !profile.has_any_measurement() {
        return Vec::new();
    }

    let adjusted_chart;
    let chart = match brand {
        Some(b) if b.bias != 0.0 => {
            adjusted_chart = apply_brand_bias(chart, b.bias);
            adjusted_chart.as_slice()
        }
        _ => chart,
    };

    let mut results: Vec<RankedResult> = chart
        .iter()
        .map(|entry| {
            let mut breakdown = Vec::new();
            let mut weighted_sum = 0.0;
            let mut total_weight = 0.0;

            for measurement in Measurement::ALL {
                let Some(user_value) = adjusted_value(profile, measurement) else {
                    continue;
                };
                let Some(chart_range) = entry.range(measurement) else {
                    continue;
                };

                let score = measurement_score(user_value, chart_range);
                breakdown.push(BreakdownEntry {
                    measurement,
                    score: Some(score),
                    fit: FitLabel::from_score(Some(score)),
                    user_value,
                    chart_range,
                });
                weighted_sum += f64::from(score) * measurement.weight();
                total_weight += measurement.weight();
            }

            // Renormalize by the weights actually used; an entry sharing
            // no measurements with the profile scores 0 but stays ranked.
            let confidence = if total_weight > 0.0 {
                (weighted_sum / total_weight).round().clamp(0.0, 100.0) as u8
            } else {
                0
            };

            RankedResult {
                size: entry.size.clone(),
                confidence,
                breakdown,
            }
        })
        .collect();

    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    results
}
