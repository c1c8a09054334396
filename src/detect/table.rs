//! Table extraction: turning `<table>` markup into chart entries
//!
//! Two layouts exist in the wild. Vertical (dominant): one header row
//! names the columns, one data row per size. Horizontal: sizes run across
//! the header and each row is one measurement. Vertical is tried first;
//! horizontal is the fallback when no size column is found but row labels
//! match measurement aliases.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

use crate::model::{parse_range, Measurement, SizeChartEntry};

use super::dom::{element_text, looks_like_size_label};

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("tr").expect("tr selector is valid"))
}

fn cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("th, td").expect("cell selector is valid"))
}

fn size_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(size|sizes|us\s*size|uk\s*size|eu\s*size|talla|taille|gr\x{f6}\x{df}e)$")
            .expect("size header regex is valid")
    })
}

/// Cell texts of every row of a table, outer row order preserved.
fn table_rows(table: ElementRef) -> Vec<Vec<String>> {
    table
        .select(row_selector())
        .map(|row| row.select(cell_selector()).map(element_text).collect())
        .collect()
}

/// Parse a table element into chart entries.
///
/// Returns an empty vec when the table has fewer than two rows or neither
/// layout matches. Entries that end up with zero parsed ranges are
/// dropped.
pub fn parse_table(table: ElementRef) -> Vec<SizeChartEntry> {
    let rows = table_rows(table);
    if rows.len() < 2 {
        return Vec::new();
    }

    let vertical = parse_vertical(&rows);
    if !vertical.is_empty() {
        return vertical;
    }

    parse_horizontal(&rows)
}

/// Vertical layout: header row names columns, one entry per data row.
fn parse_vertical(rows: &[Vec<String>]) -> Vec<SizeChartEntry> {
    let headers = &rows[0];

    let mut size_index: Option<usize> = None;
    let mut columns: Vec<(Measurement, usize)> = Vec::new();

    for (i, header) in headers.iter().enumerate() {
        if size_header_regex().is_match(header.trim()) {
            size_index.get_or_insert(i);
            continue;
        }
        if let Some(measurement) = Measurement::from_label(header) {
            if !columns.iter().any(|(m, _)| *m == measurement) {
                columns.push((measurement, i));
            }
        }
    }

    // No named size column: fall back to "first column values look like
    // size labels".
    if size_index.is_none() {
        let first_col_is_sizes = rows[1..]
            .iter()
            .filter_map(|r| r.first())
            .any(|v| looks_like_size_label(v));
        if first_col_is_sizes {
            size_index = Some(0);
        }
    }

    let Some(size_index) = size_index else {
        return Vec::new();
    };
    if columns.is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for row in &rows[1..] {
        let Some(size_name) = row.get(size_index) else {
            continue;
        };
        if size_name.is_empty() {
            continue;
        }

        let mut entry = SizeChartEntry::new(size_name.clone());
        for (measurement, col) in &columns {
            if let Some(range) = row.get(*col).and_then(|cell| parse_range(cell)) {
                entry = entry.with_range(*measurement, range);
            }
        }
        if !entry.is_empty() {
            entries.push(entry);
        }
    }
    entries
}

/// Horizontal layout: sizes across the header, one measurement per row.
fn parse_horizontal(rows: &[Vec<String>]) -> Vec<SizeChartEntry> {
    let header = &rows[0];

    let size_columns: Vec<(usize, &String)> = header
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, value)| looks_like_size_label(value))
        .collect();

    // A single matching header cell is more likely a stray number than a
    // size axis.
    if size_columns.len() < 2 {
        return Vec::new();
    }

    let mut entries: Vec<SizeChartEntry> = size_columns
        .iter()
        .map(|(_, size)| SizeChartEntry::new((*size).clone()))
        .collect();

    for row in &rows[1..] {
        let Some(label) = row.first() else { continue };
        let Some(measurement) = Measurement::from_label(label) else {
            continue;
        };

        for (entry, (col, _)) in entries.iter_mut().zip(&size_columns) {
            if let Some(range) = row.get(*col).and_then(|cell| parse_range(cell)) {
                entry.ranges.insert(measurement, range);
            }
        }
    }

    entries.retain(|e| !e.is_empty());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MeasurementRange;
    use scraper::Html;

    fn parse_first_table(html: &str) -> Vec<SizeChartEntry> {
        let doc = Html::parse_document(html);
        let sel = Selector::parse("table").unwrap();
        let table = doc.select(&sel).next().expect("table present");
        parse_table(table)
    }

    #[test]
    fn test_vertical_table_with_named_size_column() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Size</th><th>Chest (in)</th><th>Waist (in)</th></tr>
                <tr><td>S</td><td>35-37</td><td>29-31</td></tr>
                <tr><td>M</td><td>38-40</td><td>32-34</td></tr>
            </table>"#,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].size, "S");
        assert_eq!(
            entries[1].range(Measurement::Chest),
            Some(MeasurementRange::new(38.0, 40.0))
        );
        assert_eq!(
            entries[1].range(Measurement::Waist),
            Some(MeasurementRange::new(32.0, 34.0))
        );
    }

    #[test]
    fn test_vertical_table_without_size_header_uses_first_column() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th></th><th>Bust</th><th>Hips</th></tr>
                <tr><td>XS</td><td>31-33</td><td>34-36</td></tr>
                <tr><td>S</td><td>33-35</td><td>36-38</td></tr>
            </table>"#,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].range(Measurement::Chest),
            Some(MeasurementRange::new(31.0, 33.0))
        );
        assert_eq!(
            entries[0].range(Measurement::Hips),
            Some(MeasurementRange::new(34.0, 36.0))
        );
    }

    #[test]
    fn test_horizontal_table_with_sizes_across_header() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Measurement</th><th>S</th><th>M</th><th>L</th></tr>
                <tr><td>Chest</td><td>35-37</td><td>38-40</td><td>41-44</td></tr>
                <tr><td>Waist</td><td>29-31</td><td>32-34</td><td>35-37</td></tr>
            </table>"#,
        );
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].size, "M");
        assert_eq!(
            entries[1].range(Measurement::Chest),
            Some(MeasurementRange::new(38.0, 40.0))
        );
        assert_eq!(
            entries[2].range(Measurement::Waist),
            Some(MeasurementRange::new(35.0, 37.0))
        );
    }

    #[test]
    fn test_rows_with_no_parsed_ranges_are_dropped() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Size</th><th>Chest</th></tr>
                <tr><td>M</td><td>38-40</td></tr>
                <tr><td>One Size</td><td>fits most</td></tr>
            </table>"#,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, "M");
    }

    #[test]
    fn test_malformed_cell_drops_only_that_measurement() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Size</th><th>Chest</th><th>Waist</th></tr>
                <tr><td>M</td><td>see diagram</td><td>32-34</td></tr>
            </table>"#,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].range(Measurement::Chest), None);
        assert!(entries[0].range(Measurement::Waist).is_some());
    }

    #[test]
    fn test_single_row_table_yields_nothing() {
        let entries = parse_first_table("<table><tr><th>Size</th></tr></table>");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_table_without_measurement_columns_yields_nothing() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Size</th><th>Price</th></tr>
                <tr><td>M</td><td>$20</td></tr>
            </table>"#,
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_localized_size_header_is_recognized() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Talla</th><th>Poitrine</th></tr>
                <tr><td>M</td><td>38-40</td></tr>
            </table>"#,
        );
        assert_eq!(entries.len(), 1);
        assert!(entries[0].range(Measurement::Chest).is_some());
    }

    #[test]
    fn test_descending_source_range_is_normalized() {
        let entries = parse_first_table(
            r#"<table>
                <tr><th>Size</th><th>Chest</th></tr>
                <tr><td>M</td><td>40-38</td></tr>
            </table>"#,
        );
        let range = entries[0].range(Measurement::Chest).unwrap();
        assert!(range.min <= range.max);
    }
}
