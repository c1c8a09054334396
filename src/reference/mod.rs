//! Static reference data: brand fit adjustments, universal size charts,
//! per-site selector patterns
//!
//! Everything in this module is immutable at runtime and compiled into the
//! binary; it is the data the detector and scorer fall back on when a page
//! gives them nothing better.

pub mod brands;
pub mod sites;
pub mod universal;

pub use brands::{brand_adjustment, BrandAdjustment};
pub use sites::{site_pattern, SitePattern};
pub use universal::{convert_shoe_size, universal_chart, ShoeSizeSystem};
