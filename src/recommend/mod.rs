//! Recommendation building: turning ranked results into user-facing advice
//!
//! Picks the best and runner-up size, classifies body shape, derives a
//! return-risk tier and assembles the human-readable messaging. Message
//! selection is the one place randomness enters the system, so the RNG is
//! injected and seedable.

pub mod shape;

pub use shape::{classify_body_shape, BodyShape};

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::model::{ChartSource, FitPreference, MeasurementRange, UserProfile};
use crate::score::{BreakdownEntry, RankedResult};

/// How likely the recommended size is to come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnRisk {
    /// Confidence >= 85
    Low,
    /// Confidence >= 65
    Medium,
    /// Anything below
    High,
}

impl ReturnRisk {
    /// Tier for an aggregate confidence.
    pub fn from_confidence(confidence: u8) -> ReturnRisk {
        if confidence >= 85 {
            ReturnRisk::Low
        } else if confidence >= 65 {
            ReturnRisk::Medium
        } else {
            ReturnRisk::High
        }
    }

    /// Stable lowercase tag for display and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnRisk::Low => "low",
            ReturnRisk::Medium => "medium",
            ReturnRisk::High => "high",
        }
    }
}

/// Message pools per confidence tier. Variety only; never used for
/// scoring.
const HIGH_MESSAGES: &[&str] = &[
    "this is your size, buy with confidence",
    "perfect match, no returns needed",
    "go for it, this will fit you perfectly",
];

const MEDIUM_MESSAGES: &[&str] = &[
    "good match, should fit well",
    "solid choice, this size works for you",
    "pretty close match, you'll look great",
];

const LOW_MESSAGES: &[&str] = &[
    "this is our best guess, check the size chart to be sure",
    "closest match we found, consider checking the size chart",
];

fn message_pool(confidence: u8) -> &'static [&'static str] {
    if confidence >= 80 {
        HIGH_MESSAGES
    } else if confidence >= 60 {
        MEDIUM_MESSAGES
    } else {
        LOW_MESSAGES
    }
}

fn pick_message(confidence: u8, rng: &mut dyn RngCore) -> &'static str {
    let pool = message_pool(confidence);
    pool[rng.next_u32() as usize % pool.len()]
}

/// A runner-up size worth mentioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateSize {
    /// The runner-up's label
    pub size: String,
    /// Its aggregate confidence
    pub confidence: u8,
    /// Between-sizes guidance referencing the user's fit preference
    pub message: String,
}

/// The final recommendation handed to presentation and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Best-scoring size label
    pub recommended_size: String,
    /// Aggregate confidence, 0-100
    pub confidence: u8,
    /// Headline message
    pub message: String,
    /// Runner-up, when the race was close
    pub alternate: Option<AlternateSize>,
    /// Per-measurement detail for the recommended size
    pub breakdown: Vec<BreakdownEntry>,
    /// Body shape classification
    pub body_shape: BodyShape,
    /// Return-risk tier
    pub return_risk: ReturnRisk,
    /// Where the chart came from
    pub source: ChartSource,
    /// Brand fit note, when a brand adjustment applied
    pub brand_note: Option<String>,
    /// Styling and fit advice lines
    pub advice: Vec<String>,
}

/// Detailed fit description for one measurement against one interval.
///
/// Used by presentation surfaces that want more nuance than the fit band.
pub fn fit_description(user_value: f64, range: MeasurementRange) -> &'static str {
    if range.contains(user_value) {
        if user_value <= range.min + 0.5 {
            "Snug fit, will feel fitted and trim"
        } else if user_value >= range.max - 0.5 {
            "Roomy fit, will feel loose and comfortable"
        } else {
            "Perfect fit, ideal sizing for you"
        }
    } else if user_value < range.min {
        if range.min - user_value <= 1.0 {
            "Size up recommended, this may be too small"
        } else {
            "Definitely size up, this will be too tight"
        }
    } else if user_value - range.max <= 1.0 {
        "Size down may work, this might be loose"
    } else {
        "Size down recommended, this will be too large"
    }
}

fn advice_lines(
    shape: BodyShape,
    fit_preference: FitPreference,
    breakdown: &[BreakdownEntry],
) -> Vec<String> {
    let mut advice = Vec::new();

    if let Some(line) = shape.advice() {
        advice.push(line.to_string());
    }

    match fit_preference {
        FitPreference::Fitted => {
            advice.push("Fitted style: this will be trim and tailored".to_string());
        }
        FitPreference::Relaxed => {
            advice.push("Relaxed style: this will be comfortable and loose".to_string());
        }
        FitPreference::Regular => {}
    }

    let scores: Vec<u8> = breakdown.iter().filter_map(|b| b.score).collect();
    if scores.len() >= 2 {
        let avg = f64::from(scores.iter().map(|s| u32::from(*s)).sum::<u32>())
            / scores.len() as f64;
        if avg >= 85.0 {
            advice.push("Multiple measurements align perfectly".to_string());
        } else if avg >= 70.0 {
            advice.push("Most measurements look good, minor adjustments may help".to_string());
        }
    }

    advice
}

fn between_sizes_message(
    top: &RankedResult,
    runner: &RankedResult,
    fit_preference: FitPreference,
) -> String {
    let top_lean = match fit_preference {
        FitPreference::Relaxed => "regular",
        _ => "fitted",
    };
    let runner_lean = match fit_preference {
        FitPreference::Fitted => "regular",
        _ => "relaxed",
    };
    format!(
        "Between {} and {}? {} for a {} look, {} for a {} fit.",
        top.size, runner.size, top.size, top_lean, runner.size, runner_lean
    )
}

/// Build the final recommendation from ranked results.
///
/// Returns `None` when there are no results to recommend. The runner-up
/// is surfaced when it lands within 15 confidence points of the winner;
/// the between-sizes guidance leans toward the larger size for a relaxed
/// preference and the smaller for a fitted one.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sizewise::model::{ChartSource, Measurement, MeasurementRange, SizeChartEntry, UserProfile};
/// use sizewise::recommend::build_recommendation;
/// use sizewise::score::score_chart;
///
/// let profile = UserProfile { chest: Some(39.0), ..UserProfile::default() };
/// let chart = vec![SizeChartEntry::new("M")
///     .with_range(Measurement::Chest, MeasurementRange::new(38.0, 40.0))];
///
/// let ranked = score_chart(&profile, &chart, None);
/// let mut rng = StdRng::seed_from_u64(7);
/// let rec = build_recommendation(&ranked, &profile, ChartSource::Table, None, &mut rng)
///     .expect("one result");
/// assert_eq!(rec.recommended_size, "M");
/// assert!(rec.confidence >= 90);
/// ```
pub fn build_recommendation(
    ranked: &[RankedResult],
    profile: &UserProfile,
    source: ChartSource,
    brand_note: Option<&str>,
    rng: &mut dyn RngCore,
) -> Option<Recommendation> {
    let top = ranked.first()?;
    let runner = ranked.get(1);

    let alternate = runner
        .filter(|r| top.confidence.abs_diff(r.confidence) <= 15)
        .map(|r| AlternateSize {
            size: r.size.clone(),
            confidence: r.confidence,
            message: between_sizes_message(top, r, profile.fit_preference),
        });

    let body_shape = classify_body_shape(profile);
    let message = format!(
        "Go for {}: {}.",
        top.size,
        pick_message(top.confidence, rng)
    );

    Some(Recommendation {
        recommended_size: top.size.clone(),
        confidence: top.confidence,
        message,
        alternate,
        breakdown: top.breakdown.clone(),
        body_shape,
        return_risk: ReturnRisk::from_confidence(top.confidence),
        source,
        brand_note: brand_note.map(str::to_string),
        advice: advice_lines(body_shape, profile.fit_preference, &top.breakdown),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Measurement, SizeChartEntry};
    use crate::score::score_chart;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ranked(profile: &UserProfile, chart: &[SizeChartEntry]) -> Vec<RankedResult> {
        score_chart(profile, chart, None)
    }

    fn full_profile() -> UserProfile {
        UserProfile {
            chest: Some(39.0),
            waist: Some(33.0),
            hips: Some(40.0),
            ..UserProfile::default()
        }
    }

    fn two_size_chart() -> Vec<SizeChartEntry> {
        vec![
            SizeChartEntry::new("M")
                .with_range(Measurement::Chest, MeasurementRange::new(38.0, 40.0))
                .with_range(Measurement::Waist, MeasurementRange::new(32.0, 34.0))
                .with_range(Measurement::Hips, MeasurementRange::new(39.0, 41.0)),
            SizeChartEntry::new("L")
                .with_range(Measurement::Chest, MeasurementRange::new(42.0, 44.0))
                .with_range(Measurement::Waist, MeasurementRange::new(36.0, 38.0))
                .with_range(Measurement::Hips, MeasurementRange::new(43.0, 45.0)),
        ]
    }

    #[test]
    fn test_empty_results_give_no_recommendation() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_recommendation(
            &[],
            &full_profile(),
            ChartSource::Table,
            None,
            &mut rng
        )
        .is_none());
    }

    #[test]
    fn test_top_result_is_recommended() {
        let profile = full_profile();
        let results = ranked(&profile, &two_size_chart());
        let mut rng = StdRng::seed_from_u64(1);
        let rec =
            build_recommendation(&results, &profile, ChartSource::Table, None, &mut rng).unwrap();
        assert_eq!(rec.recommended_size, "M");
        assert_eq!(rec.return_risk, ReturnRisk::Low);
        assert_eq!(rec.source, ChartSource::Table);
        // M and L are far apart for this profile
        assert!(rec.alternate.is_none());
    }

    #[test]
    fn test_close_race_surfaces_alternate() {
        let profile = UserProfile {
            chest: Some(41.0),
            ..UserProfile::default()
        };
        let chart = vec![
            SizeChartEntry::new("M")
                .with_range(Measurement::Chest, MeasurementRange::new(38.0, 40.5)),
            SizeChartEntry::new("L")
                .with_range(Measurement::Chest, MeasurementRange::new(41.5, 44.0)),
        ];
        let results = ranked(&profile, &chart);
        assert!(results[0].confidence.abs_diff(results[1].confidence) <= 15);

        let mut rng = StdRng::seed_from_u64(1);
        let rec =
            build_recommendation(&results, &profile, ChartSource::Table, None, &mut rng).unwrap();
        let alternate = rec.alternate.expect("close race should surface runner-up");
        assert!(alternate.message.contains("Between"));
        assert!(alternate.message.contains(&rec.recommended_size));
        assert!(alternate.message.contains(&alternate.size));
    }

    #[test]
    fn test_message_selection_is_seed_deterministic() {
        let profile = full_profile();
        let results = ranked(&profile, &two_size_chart());

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = build_recommendation(&results, &profile, ChartSource::Table, None, &mut rng_a)
            .unwrap();
        let b = build_recommendation(&results, &profile, ChartSource::Table, None, &mut rng_b)
            .unwrap();
        assert_eq!(a.message, b.message);
    }

    #[test]
    fn test_message_drawn_from_tier_pool() {
        let profile = full_profile();
        let results = ranked(&profile, &two_size_chart());
        assert!(results[0].confidence >= 80);

        let mut rng = StdRng::seed_from_u64(3);
        let rec =
            build_recommendation(&results, &profile, ChartSource::Table, None, &mut rng).unwrap();
        assert!(HIGH_MESSAGES.iter().any(|m| rec.message.contains(m)));
    }

    #[test]
    fn test_brand_note_is_carried() {
        let profile = full_profile();
        let results = ranked(&profile, &two_size_chart());
        let mut rng = StdRng::seed_from_u64(1);
        let rec = build_recommendation(
            &results,
            &profile,
            ChartSource::Table,
            Some("Runs small"),
            &mut rng,
        )
        .unwrap();
        assert_eq!(rec.brand_note.as_deref(), Some("Runs small"));
    }

    #[test]
    fn test_advice_includes_fit_preference_line() {
        let profile = UserProfile {
            fit_preference: FitPreference::Relaxed,
            ..full_profile()
        };
        let results = ranked(&profile, &two_size_chart());
        let mut rng = StdRng::seed_from_u64(1);
        let rec =
            build_recommendation(&results, &profile, ChartSource::Table, None, &mut rng).unwrap();
        assert!(rec.advice.iter().any(|a| a.contains("Relaxed style")));
    }

    #[test]
    fn test_return_risk_tiers() {
        assert_eq!(ReturnRisk::from_confidence(90), ReturnRisk::Low);
        assert_eq!(ReturnRisk::from_confidence(85), ReturnRisk::Low);
        assert_eq!(ReturnRisk::from_confidence(70), ReturnRisk::Medium);
        assert_eq!(ReturnRisk::from_confidence(64), ReturnRisk::High);
    }

    #[test]
    fn test_fit_descriptions() {
        let range = MeasurementRange::new(38.0, 40.0);
        assert!(fit_description(39.0, range).starts_with("Perfect fit"));
        assert!(fit_description(38.2, range).starts_with("Snug fit"));
        assert!(fit_description(39.8, range).starts_with("Roomy fit"));
        assert!(fit_description(37.5, range).starts_with("Size up recommended"));
        assert!(fit_description(35.0, range).starts_with("Definitely size up"));
        assert!(fit_description(40.8, range).starts_with("Size down may work"));
        assert!(fit_description(43.0, range).starts_with("Size down recommended"));
    }
}
