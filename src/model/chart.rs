//! Size chart types and provenance metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::range::MeasurementRange;

/// Canonical body measurements that participate in scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    /// Chest / bust circumference
    Chest,
    /// Natural waist circumference
    Waist,
    /// Hip / seat circumference
    Hips,
    /// Inside leg length
    Inseam,
}

impl Measurement {
    /// All measurements, in scoring-weight order.
    pub const ALL: [Measurement; 4] = [
        Measurement::Chest,
        Measurement::Waist,
        Measurement::Hips,
        Measurement::Inseam,
    ];

    /// Scoring weight. Chest dominates because it is the hardest
    /// measurement to alter and the most visible misfit.
    pub fn weight(self) -> f64 {
        match self {
            Measurement::Chest => 0.40,
            Measurement::Waist => 0.35,
            Measurement::Hips => 0.20,
            Measurement::Inseam => 0.05,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Measurement::Chest => "chest",
            Measurement::Waist => "waist",
            Measurement::Hips => "hips",
            Measurement::Inseam => "inseam",
        }
    }

    /// Header/row-label aliases seen across retail charts, including the
    /// common French/German/Spanish column names.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Measurement::Chest => &[
                "chest",
                "bust",
                "chest/bust",
                "chest circumference",
                "bust circumference",
                "poitrine",
                "brust",
            ],
            Measurement::Waist => &[
                "waist",
                "natural waist",
                "waist circumference",
                "taille",
                "cintura",
            ],
            Measurement::Hips => &[
                "hips",
                "hip",
                "seat",
                "hip circumference",
                "hanches",
                "h\u{fc}fte",
                "cadera",
            ],
            Measurement::Inseam => &[
                "inseam",
                "inside leg",
                "leg length",
                "inner leg",
                "entrejambe",
            ],
        }
    }

    /// Match a free-text column header or row label against the alias
    /// table (case-insensitive substring). First measurement to match
    /// wins, in `ALL` order.
    pub fn from_label(label: &str) -> Option<Measurement> {
        let lower = label.to_lowercase();
        Measurement::ALL
            .into_iter()
            .find(|m| m.aliases().iter().any(|alias| lower.contains(alias)))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One labeled size with its measurement intervals.
///
/// An entry with zero ranges is invalid; extraction sites discard them
/// before the entry reaches a [`SizeChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChartEntry {
    /// Free-form size label ("M", "34", "XL")
    pub size: String,
    /// Measurement intervals keyed by canonical measurement
    pub ranges: BTreeMap<Measurement, MeasurementRange>,
}

impl SizeChartEntry {
    /// New entry with no ranges yet.
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            ranges: BTreeMap::new(),
        }
    }

    /// Builder-style range attachment, used by extraction code and the
    /// universal database.
    pub fn with_range(mut self, measurement: Measurement, range: MeasurementRange) -> Self {
        self.ranges.insert(measurement, range);
        self
    }

    /// Interval for one measurement, if the chart defines it.
    pub fn range(&self, measurement: Measurement) -> Option<MeasurementRange> {
        self.ranges.get(&measurement).copied()
    }

    /// Whether the entry carries no measurements at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Which detection strategy produced a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    /// Parsed from a visible or site-pattern table
    Table,
    /// Built from embedded structured product metadata
    Structured,
    /// Parsed from a modal/overlay-embedded table
    Modal,
    /// Scraped from a size-selector control
    Selector,
    /// Universal database fallback
    Estimated,
}

impl ChartSource {
    /// Stable lowercase tag for display and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartSource::Table => "table",
            ChartSource::Structured => "structured",
            ChartSource::Modal => "modal",
            ChartSource::Selector => "selector",
            ChartSource::Estimated => "estimated",
        }
    }
}

impl fmt::Display for ChartSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the detector trusts a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionConfidence {
    /// Universal fallback or selector scrape
    Low,
    /// Structured metadata or modal table
    Medium,
    /// Measurement table found on the page
    High,
}

impl DetectionConfidence {
    /// Stable lowercase tag for display and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            DetectionConfidence::High => "high",
            DetectionConfidence::Medium => "medium",
            DetectionConfidence::Low => "low",
        }
    }
}

/// Garment category, used to pick a universal fallback chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    /// Shirts, jackets, dresses (dresses use top measurements)
    Tops,
    /// Pants, shorts, skirts
    Bottoms,
    /// Footwear
    Shoes,
}

impl GarmentType {
    /// Stable lowercase tag for display and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            GarmentType::Tops => "tops",
            GarmentType::Bottoms => "bottoms",
            GarmentType::Shoes => "shoes",
        }
    }
}

/// A size label offered by the page, with availability.
///
/// Produced by the selector and structured-data strategies, which see which
/// sizes a product ships in but not their measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Size label as shown on the page
    pub label: String,
    /// False when the option is disabled / out of stock
    pub available: bool,
}

/// A detected size chart with provenance.
///
/// Entry order reflects document order, not size order; consumers must
/// not assume ascending sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChart {
    /// Measured entries, document order
    pub entries: Vec<SizeChartEntry>,
    /// Strategy that produced the chart
    pub source: ChartSource,
    /// Detection confidence tier
    pub confidence: DetectionConfidence,
    /// Garment classification, when the detector derived one
    pub garment: Option<GarmentType>,
    /// Offered sizes with availability (selector/structured strategies)
    pub size_options: Vec<SizeOption>,
    /// Text of a size-guide link found on the page, if any
    pub size_guide_text: Option<String>,
}

impl SizeChart {
    /// A chart of measured entries from the given strategy.
    pub fn with_entries(
        entries: Vec<SizeChartEntry>,
        source: ChartSource,
        confidence: DetectionConfidence,
    ) -> Self {
        Self {
            entries,
            source,
            confidence,
            garment: None,
            size_options: Vec::new(),
            size_guide_text: None,
        }
    }

    /// Whether any entry carries at least one measurement interval.
    pub fn has_measurements(&self) -> bool {
        self.entries.iter().any(|e| !e.is_empty())
    }
}
