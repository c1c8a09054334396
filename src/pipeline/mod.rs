//! Pipeline orchestration: detection, scoring and recommendation composed
//!
//! [`SizePipeline`] wires the detector, scorer and recommendation builder
//! together with the static reference collaborators, so callers go from a
//! parsed document plus a profile to a finished [`Recommendation`] in one
//! call. [`RescanScheduler`] adds the debounced re-detection trigger used
//! when the page mutates under us.

pub mod rescan;

pub use rescan::RescanScheduler;

use rand::RngCore;
use scraper::Html;

use crate::detect::garment::detect_garment;
use crate::detect::ChartDetector;
use crate::model::{ChartSource, Gender, SizeChart, UserProfile};
use crate::recommend::{build_recommendation, Recommendation};
use crate::reference::{brand_adjustment, universal_chart};
use crate::score::score_chart;

/// The full detection-to-recommendation pipeline.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scraper::Html;
/// use sizewise::model::UserProfile;
/// use sizewise::pipeline::SizePipeline;
///
/// let doc = Html::parse_document(
///     r#"<table>
///         <tr><th>Size</th><th>Chest</th></tr>
///         <tr><td>M</td><td>38-40</td></tr>
///         <tr><td>L</td><td>42-44</td></tr>
///     </table>"#,
/// );
/// let profile = UserProfile { chest: Some(39.0), ..UserProfile::default() };
///
/// let pipeline = SizePipeline::new();
/// let mut rng = StdRng::seed_from_u64(7);
/// let rec = pipeline
///     .recommend(&doc, "shop.example", &profile, &mut rng)
///     .expect("chart plus profile should recommend");
/// assert_eq!(rec.recommended_size, "M");
/// ```
#[derive(Debug, Default)]
pub struct SizePipeline {
    detector: ChartDetector,
}

impl SizePipeline {
    /// New pipeline with default collaborators.
    pub fn new() -> Self {
        Self {
            detector: ChartDetector::new(),
        }
    }

    /// Detect a size chart in the document (see
    /// [`ChartDetector::detect`]).
    pub fn detect_chart(&self, doc: &Html, hostname: &str, gender: Gender) -> SizeChart {
        self.detector.detect(doc, hostname, gender)
    }

    /// Run the whole pipeline: detect, score, recommend.
    ///
    /// When detection yields only size labels (selector or structured
    /// sources) or nothing at all, scoring falls back to the universal
    /// chart for the page's garment type, and the result is tagged
    /// `estimated` so downstream surfaces can signal reduced trust.
    /// Returns `None` when the profile has no usable measurements or no
    /// chart entries survive.
    pub fn recommend(
        &self,
        doc: &Html,
        hostname: &str,
        profile: &UserProfile,
        rng: &mut dyn RngCore,
    ) -> Option<Recommendation> {
        let chart = self.detector.detect(doc, hostname, profile.gender);

        let (entries, source) = if chart.has_measurements() {
            (chart.entries, chart.source)
        } else {
            let garment = chart.garment.unwrap_or_else(|| detect_garment(doc));
            let fallback = universal_chart(profile.gender, garment);
            if fallback.is_empty() {
                log::debug!(
                    "no universal chart for {} {}",
                    profile.gender.as_str(),
                    garment.as_str()
                );
                return None;
            }
            (fallback, ChartSource::Estimated)
        };

        let brand = brand_adjustment(hostname);
        let ranked = score_chart(profile, &entries, brand);
        build_recommendation(&ranked, profile, source, brand.map(|b| b.note), rng)
    }
}
