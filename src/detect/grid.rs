//! Grid extraction: div-based size charts without `<table>` markup
//!
//! Some sites render charts as nested divs following row/cell class
//! conventions. With no column headers to name measurements, ranges are
//! assigned to chest/waist/hips by magnitude bucket. That is inherently
//! ambiguous, so callers treat grid output as lower confidence than a
//! real table.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

use crate::model::{parse_range, Measurement, SizeChartEntry};

use super::dom::{element_text, SIZE_LABELS};

fn grid_row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("[class*=\"row\"], [class*=\"Row\"], tr, dl, li")
            .expect("grid row selector is valid")
    })
}

fn grid_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("[class*=\"cell\"], [class*=\"Cell\"], td, th, dd, dt, span")
            .expect("grid cell selector is valid")
    })
}

fn letter_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{1,4}$").expect("letter label regex is valid"))
}

fn find_size_value(values: &[String]) -> Option<&String> {
    values.iter().find(|v| {
        let upper = v.to_uppercase();
        SIZE_LABELS.contains(&upper.as_str()) || letter_label_regex().is_match(v)
    })
}

/// Positional magnitude buckets: chest/hips circumferences land in
/// [30, 56], waists in [22, 50]. First unassigned bucket wins.
fn assign_by_magnitude(entry: &mut SizeChartEntry, values: &[String], size_value: &str) {
    for value in values {
        if value == size_value {
            continue;
        }
        let Some(range) = parse_range(value) else {
            continue;
        };
        let avg = range.median();
        if entry.range(Measurement::Chest).is_none() && (30.0..=56.0).contains(&avg) {
            entry.ranges.insert(Measurement::Chest, range);
        } else if entry.range(Measurement::Waist).is_none() && (22.0..=50.0).contains(&avg) {
            entry.ranges.insert(Measurement::Waist, range);
        } else if entry.range(Measurement::Hips).is_none() && (30.0..=56.0).contains(&avg) {
            entry.ranges.insert(Measurement::Hips, range);
        }
    }
}

/// Parse a grid-like container into chart entries.
///
/// A row is any descendant matching row-like class conventions with at
/// least two cell-like descendants, one of which is a size label.
pub fn parse_grid(container: ElementRef) -> Vec<SizeChartEntry> {
    let rows: Vec<ElementRef> = container.select(grid_row_selector()).collect();
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for row in rows {
        let values: Vec<String> = row
            .select(grid_cell_selector())
            .map(element_text)
            .collect();
        if values.len() < 2 {
            continue;
        }

        let Some(size_value) = find_size_value(&values) else {
            continue;
        };
        let size_value = size_value.clone();

        let mut entry = SizeChartEntry::new(size_value.clone());
        assign_by_magnitude(&mut entry, &values, &size_value);
        if !entry.is_empty() {
            entries.push(entry);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn parse_first_grid(html: &str) -> Vec<SizeChartEntry> {
        let doc = Html::parse_document(html);
        let sel = Selector::parse(".chart").unwrap();
        let container = doc.select(&sel).next().expect("container present");
        parse_grid(container)
    }

    #[test]
    fn test_div_grid_assigns_ranges_by_magnitude() {
        let entries = parse_first_grid(
            r#"<div class="chart">
                <div class="size-row"><span class="cell">S</span><span class="cell">35-37</span><span class="cell">29-31</span><span class="cell">36-38</span></div>
                <div class="size-row"><span class="cell">M</span><span class="cell">38-40</span><span class="cell">32-34</span><span class="cell">39-41</span></div>
            </div>"#,
        );
        assert_eq!(entries.len(), 2);
        let m = &entries[1];
        assert_eq!(m.size, "M");
        assert_eq!(m.range(Measurement::Chest).unwrap().median(), 39.0);
        assert_eq!(m.range(Measurement::Waist).unwrap().median(), 33.0);
        assert_eq!(m.range(Measurement::Hips).unwrap().median(), 40.0);
    }

    #[test]
    fn test_waist_magnitude_lands_in_waist_bucket() {
        // 24-26 is below the chest bucket floor, so it must go to waist
        let entries = parse_first_grid(
            r#"<div class="chart">
                <div class="row"><span class="cell">XS</span><span class="cell">24-26</span></div>
                <div class="row"><span class="cell">S</span><span class="cell">26-28</span></div>
            </div>"#,
        );
        assert_eq!(entries.len(), 2);
        assert!(entries[0].range(Measurement::Chest).is_none());
        assert_eq!(entries[0].range(Measurement::Waist).unwrap().median(), 25.0);
    }

    #[test]
    fn test_rows_without_size_labels_are_skipped() {
        let entries = parse_first_grid(
            r#"<div class="chart">
                <div class="row"><span class="cell">Shipping</span><span class="cell">Free</span></div>
                <div class="row"><span class="cell">M</span><span class="cell">38-40</span></div>
            </div>"#,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, "M");
    }

    #[test]
    fn test_single_row_grid_yields_nothing() {
        let entries = parse_first_grid(
            r#"<div class="chart">
                <div class="row"><span class="cell">M</span><span class="cell">38-40</span></div>
            </div>"#,
        );
        assert!(entries.is_empty());
    }
}
