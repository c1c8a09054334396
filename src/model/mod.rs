//! Core data model: measurement ranges, size charts, user profiles
//!
//! Everything downstream of detection speaks these types. All measurements
//! are in inches; charts are kept in document order.

pub mod chart;
pub mod profile;
pub mod range;

pub use chart::{
    ChartSource, DetectionConfidence, GarmentType, Measurement, SizeChart, SizeChartEntry,
    SizeOption,
};
pub use profile::{FitPreference, Gender, UserProfile};
pub use range::{parse_range, MeasurementRange};
