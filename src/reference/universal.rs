//! Universal sizing database
//!
//! Fallback size charts for when no site-specific data is found, plus shoe
//! size conversion tables. All garment measurements in inches.

use crate::model::{GarmentType, Gender, Measurement, MeasurementRange, SizeChartEntry};

fn entry(
    size: &str,
    chest: Option<(f64, f64)>,
    waist: Option<(f64, f64)>,
    hips: Option<(f64, f64)>,
    inseam: Option<(f64, f64)>,
) -> SizeChartEntry {
    let mut e = SizeChartEntry::new(size);
    if let Some((a, b)) = chest {
        e = e.with_range(Measurement::Chest, MeasurementRange::new(a, b));
    }
    if let Some((a, b)) = waist {
        e = e.with_range(Measurement::Waist, MeasurementRange::new(a, b));
    }
    if let Some((a, b)) = hips {
        e = e.with_range(Measurement::Hips, MeasurementRange::new(a, b));
    }
    if let Some((a, b)) = inseam {
        e = e.with_range(Measurement::Inseam, MeasurementRange::new(a, b));
    }
    e
}

fn womens_tops() -> Vec<SizeChartEntry> {
    vec![
        entry("XXS", Some((30.0, 31.0)), Some((23.0, 24.0)), Some((33.0, 34.0)), None),
        entry("XS", Some((31.0, 33.0)), Some((24.0, 26.0)), Some((34.0, 36.0)), None),
        entry("S", Some((33.0, 35.0)), Some((26.0, 28.0)), Some((36.0, 38.0)), None),
        entry("M", Some((35.0, 37.0)), Some((28.0, 30.0)), Some((38.0, 40.0)), None),
        entry("L", Some((37.0, 40.0)), Some((30.0, 33.0)), Some((40.0, 43.0)), None),
        entry("XL", Some((40.0, 43.0)), Some((33.0, 36.0)), Some((43.0, 46.0)), None),
        entry("XXL", Some((43.0, 46.0)), Some((36.0, 39.0)), Some((46.0, 49.0)), None),
        entry("3XL", Some((46.0, 49.0)), Some((39.0, 42.0)), Some((49.0, 52.0)), None),
    ]
}

fn womens_bottoms() -> Vec<SizeChartEntry> {
    vec![
        entry("XXS", None, Some((23.0, 24.0)), Some((33.0, 34.0)), Some((30.0, 31.0))),
        entry("XS", None, Some((24.0, 26.0)), Some((34.0, 36.0)), Some((30.0, 31.0))),
        entry("S", None, Some((26.0, 28.0)), Some((36.0, 38.0)), Some((30.0, 31.0))),
        entry("M", None, Some((28.0, 30.0)), Some((38.0, 40.0)), Some((30.0, 31.0))),
        entry("L", None, Some((30.0, 33.0)), Some((40.0, 43.0)), Some((31.0, 32.0))),
        entry("XL", None, Some((33.0, 36.0)), Some((43.0, 46.0)), Some((31.0, 32.0))),
        entry("XXL", None, Some((36.0, 39.0)), Some((46.0, 49.0)), Some((31.0, 32.0))),
        entry("3XL", None, Some((39.0, 42.0)), Some((49.0, 52.0)), Some((31.0, 32.0))),
    ]
}

fn mens_tops() -> Vec<SizeChartEntry> {
    vec![
        entry("XS", Some((33.0, 35.0)), Some((27.0, 29.0)), Some((33.0, 35.0)), None),
        entry("S", Some((35.0, 37.0)), Some((29.0, 31.0)), Some((35.0, 37.0)), None),
        entry("M", Some((38.0, 40.0)), Some((32.0, 34.0)), Some((38.0, 40.0)), None),
        entry("L", Some((41.0, 44.0)), Some((35.0, 37.0)), Some((41.0, 44.0)), None),
        entry("XL", Some((45.0, 48.0)), Some((38.0, 41.0)), Some((45.0, 48.0)), None),
        entry("XXL", Some((49.0, 52.0)), Some((42.0, 45.0)), Some((49.0, 52.0)), None),
        entry("3XL", Some((53.0, 56.0)), Some((46.0, 49.0)), Some((53.0, 56.0)), None),
    ]
}

fn mens_bottoms() -> Vec<SizeChartEntry> {
    vec![
        entry("XS", None, Some((27.0, 29.0)), Some((33.0, 35.0)), Some((30.0, 32.0))),
        entry("S", None, Some((29.0, 32.0)), Some((35.0, 38.0)), Some((30.0, 32.0))),
        entry("M", None, Some((32.0, 34.0)), Some((38.0, 40.0)), Some((30.0, 32.0))),
        entry("L", None, Some((35.0, 38.0)), Some((41.0, 44.0)), Some((30.0, 32.0))),
        entry("XL", None, Some((39.0, 42.0)), Some((45.0, 48.0)), Some((30.0, 32.0))),
        entry("XXL", None, Some((43.0, 46.0)), Some((49.0, 52.0)), Some((30.0, 32.0))),
        entry("3XL", None, Some((47.0, 50.0)), Some((53.0, 56.0)), Some((30.0, 32.0))),
    ]
}

/// Universal size chart for a (gender, garment) pair.
///
/// Shoes have no body-measurement chart; sizing them is a conversion
/// problem (see [`convert_shoe_size`]), so `Shoes` yields an empty chart
/// and the caller falls through its absent-input path.
///
/// # Examples
///
/// ```
/// use sizewise::model::{GarmentType, Gender, Measurement};
/// use sizewise::reference::universal_chart;
///
/// let chart = universal_chart(Gender::Mens, GarmentType::Tops);
/// let medium = chart.iter().find(|e| e.size == "M").expect("has M");
/// assert!(medium.range(Measurement::Chest).is_some());
/// ```
pub fn universal_chart(gender: Gender, garment: GarmentType) -> Vec<SizeChartEntry> {
    match (gender, garment) {
        (Gender::Womens, GarmentType::Tops) => womens_tops(),
        (Gender::Womens, GarmentType::Bottoms) => womens_bottoms(),
        (Gender::Mens, GarmentType::Tops) => mens_tops(),
        (Gender::Mens, GarmentType::Bottoms) => mens_bottoms(),
        (_, GarmentType::Shoes) => Vec::new(),
    }
}

/// Shoe sizing system for conversion lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoeSizeSystem {
    /// United States sizing
    Us,
    /// United Kingdom sizing
    Uk,
    /// European sizing
    Eu,
}

impl ShoeSizeSystem {
    /// Parse a CLI/user string ("us", "uk", "eu").
    pub fn parse_str(s: &str) -> Option<ShoeSizeSystem> {
        match s.to_lowercase().as_str() {
            "us" => Some(ShoeSizeSystem::Us),
            "uk" => Some(ShoeSizeSystem::Uk),
            "eu" => Some(ShoeSizeSystem::Eu),
            _ => None,
        }
    }
}

/// (us, uk, eu) rows
static WOMENS_SHOES: &[(f64, f64, f64)] = &[
    (5.0, 2.5, 35.0),
    (5.5, 3.0, 35.5),
    (6.0, 3.5, 36.0),
    (6.5, 4.0, 37.0),
    (7.0, 4.5, 37.5),
    (7.5, 5.0, 38.0),
    (8.0, 5.5, 38.5),
    (8.5, 6.0, 39.0),
    (9.0, 6.5, 40.0),
    (9.5, 7.0, 40.5),
    (10.0, 7.5, 41.0),
    (10.5, 8.0, 42.0),
    (11.0, 8.5, 42.5),
    (12.0, 9.5, 43.0),
];

static MENS_SHOES: &[(f64, f64, f64)] = &[
    (7.0, 6.0, 40.0),
    (7.5, 6.5, 40.5),
    (8.0, 7.0, 41.0),
    (8.5, 7.5, 41.5),
    (9.0, 8.0, 42.0),
    (9.5, 8.5, 42.5),
    (10.0, 9.0, 43.0),
    (10.5, 9.5, 44.0),
    (11.0, 10.0, 44.5),
    (11.5, 10.5, 45.0),
    (12.0, 11.0, 46.0),
    (13.0, 12.0, 47.0),
    (14.0, 13.0, 48.0),
    (15.0, 14.0, 49.0),
];

fn system_value(row: &(f64, f64, f64), system: ShoeSizeSystem) -> f64 {
    match system {
        ShoeSizeSystem::Us => row.0,
        ShoeSizeSystem::Uk => row.1,
        ShoeSizeSystem::Eu => row.2,
    }
}

/// Convert a shoe size between sizing systems.
///
/// Matches the nearest table row within half a size; returns `None` when
/// the size falls outside the table.
///
/// # Examples
///
/// ```
/// use sizewise::model::Gender;
/// use sizewise::reference::{convert_shoe_size, ShoeSizeSystem};
///
/// let eu = convert_shoe_size(9.0, ShoeSizeSystem::Us, ShoeSizeSystem::Eu, Gender::Mens);
/// assert_eq!(eu, Some(42.0));
/// ```
pub fn convert_shoe_size(
    size: f64,
    from: ShoeSizeSystem,
    to: ShoeSizeSystem,
    gender: Gender,
) -> Option<f64> {
    let table = match gender {
        Gender::Mens => MENS_SHOES,
        Gender::Womens => WOMENS_SHOES,
    };
    table
        .iter()
        .find(|row| (system_value(row, from) - size).abs() < 0.5)
        .map(|row| system_value(row, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_garment_chart_entry_has_measurements() {
        for gender in [Gender::Mens, Gender::Womens] {
            for garment in [GarmentType::Tops, GarmentType::Bottoms] {
                let chart = universal_chart(gender, garment);
                assert!(!chart.is_empty());
                for entry in &chart {
                    assert!(!entry.is_empty(), "{} entry has no ranges", entry.size);
                }
            }
        }
    }

    #[test]
    fn test_bottoms_have_inseam_but_no_chest() {
        let chart = universal_chart(Gender::Womens, GarmentType::Bottoms);
        for entry in &chart {
            assert!(entry.range(Measurement::Chest).is_none());
            assert!(entry.range(Measurement::Inseam).is_some());
        }
    }

    #[test]
    fn test_shoes_chart_is_empty() {
        assert!(universal_chart(Gender::Mens, GarmentType::Shoes).is_empty());
    }

    #[test]
    fn test_chart_ranges_are_normalized_and_ascending() {
        let chart = universal_chart(Gender::Mens, GarmentType::Tops);
        let mut prev_median = 0.0;
        for entry in &chart {
            let chest = entry.range(Measurement::Chest).unwrap();
            assert!(chest.min <= chest.max);
            assert!(chest.median() > prev_median);
            prev_median = chest.median();
        }
    }

    #[test]
    fn test_shoe_conversion_round_trips() {
        let eu = convert_shoe_size(8.0, ShoeSizeSystem::Us, ShoeSizeSystem::Eu, Gender::Womens)
            .unwrap();
        assert_eq!(eu, 38.5);
        let us = convert_shoe_size(eu, ShoeSizeSystem::Eu, ShoeSizeSystem::Us, Gender::Womens)
            .unwrap();
        assert_eq!(us, 8.0);
    }

    #[test]
    fn test_shoe_conversion_outside_table_is_none() {
        assert_eq!(
            convert_shoe_size(20.0, ShoeSizeSystem::Us, ShoeSizeSystem::Eu, Gender::Mens),
            None
        );
    }
}
