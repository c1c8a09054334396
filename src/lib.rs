#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! sizewise library
//!
//! This library provides the core functionality for garment size chart
//! detection and fit recommendation. It can be used programmatically in
//! addition to the CLI interface.
//!
//! # Basic Example
//!
//! Scoring a profile against a chart:
//!
//! ```
//! use sizewise::model::{Measurement, MeasurementRange, SizeChartEntry, UserProfile};
//! use sizewise::score::score_chart;
//!
//! let profile = UserProfile {
//!     chest: Some(39.0),
//!     waist: Some(33.0),
//!     ..UserProfile::default()
//! };
//!
//! let chart = vec![
//!     SizeChartEntry::new("M")
//!         .with_range(Measurement::Chest, MeasurementRange::new(38.0, 40.0))
//!         .with_range(Measurement::Waist, MeasurementRange::new(32.0, 34.0)),
//!     SizeChartEntry::new("L")
//!         .with_range(Measurement::Chest, MeasurementRange::new(42.0, 44.0))
//!         .with_range(Measurement::Waist, MeasurementRange::new(36.0, 38.0)),
//! ];
//!
//! let ranked = score_chart(&profile, &chart, None);
//! assert_eq!(ranked[0].size, "M");
//! assert!(ranked[0].confidence >= 90);
//! ```
//!
//! # Advanced Example: Whole Pipeline
//!
//! Detection plus scoring plus recommendation over a saved page:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scraper::Html;
//! use sizewise::model::UserProfile;
//! use sizewise::pipeline::SizePipeline;
//!
//! let doc = Html::parse_document(
//!     r#"<table>
//!         <tr><th>Size</th><th>Chest</th></tr>
//!         <tr><td>M</td><td>38-40</td></tr>
//!         <tr><td>L</td><td>42-44</td></tr>
//!     </table>"#,
//! );
//! let profile = UserProfile { chest: Some(39.0), ..UserProfile::default() };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let rec = SizePipeline::new()
//!     .recommend(&doc, "shop.example", &profile, &mut rng)
//!     .expect("measurable chart and profile");
//! assert_eq!(rec.recommended_size, "M");
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Multi-strategy size chart detection
pub mod detect;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Core data model: ranges, charts, profiles
pub mod model;
/// Pipeline orchestration and rescan scheduling
pub mod pipeline;
/// Recommendation building and body shape classification
pub mod recommend;
/// Static reference data: brands, universal charts, site patterns
pub mod reference;
/// Fit scoring
pub mod score;
/// Local persistence: profile, history, chart cache
pub mod store;
