//! Detection integration tests
//!
//! Drives the full detector over fixture pages covering every extraction
//! strategy and the fallback path.

use scraper::Html;
use sizewise::detect::ChartDetector;
use sizewise::model::{ChartSource, DetectionConfidence, GarmentType, Gender, Measurement};

mod common;

fn detect(html: &str, hostname: &str) -> sizewise::model::SizeChart {
    let doc = Html::parse_document(html);
    ChartDetector::new().detect(&doc, hostname, Gender::Mens)
}

#[test]
fn test_vertical_table_page_detects_high_confidence_chart() {
    let chart = detect(common::VERTICAL_CHART_PAGE, "shop.example");
    assert_eq!(chart.source, ChartSource::Table);
    assert_eq!(chart.confidence, DetectionConfidence::High);
    assert_eq!(chart.entries.len(), 3);

    let medium = chart.entries.iter().find(|e| e.size == "M").expect("M row");
    assert_eq!(
        medium.range(Measurement::Chest).map(|r| (r.min, r.max)),
        Some((38.0, 40.0))
    );
    assert_eq!(
        medium.range(Measurement::Hips).map(|r| (r.min, r.max)),
        Some((39.0, 41.0))
    );
}

#[test]
fn test_horizontal_table_page_detects_same_entries() {
    let chart = detect(common::HORIZONTAL_CHART_PAGE, "shop.example");
    assert_eq!(chart.source, ChartSource::Table);
    assert_eq!(chart.entries.len(), 3);
    assert_eq!(chart.entries[1].size, "M");
    assert_eq!(
        chart.entries[1].range(Measurement::Waist).map(|r| (r.min, r.max)),
        Some((32.0, 34.0))
    );
}

#[test]
fn test_chart_entries_keep_document_order_not_size_order() {
    // Charts listed largest-first must come back largest-first
    let html = r#"<html><body><table>
        <tr><th>Size</th><th>Chest</th></tr>
        <tr><td>XL</td><td>45-48</td></tr>
        <tr><td>L</td><td>42-44</td></tr>
        <tr><td>M</td><td>38-40</td></tr>
    </table></body></html>"#;
    let chart = detect(html, "shop.example");
    let order: Vec<&str> = chart.entries.iter().map(|e| e.size.as_str()).collect();
    assert_eq!(order, vec!["XL", "L", "M"]);
}

#[test]
fn test_modal_embedded_hidden_table_is_found_by_modal_scan() {
    let html = r#"<html><body>
        <div role="dialog"><table style="display:none">
            <tr><th>Size</th><th>Chest</th></tr>
            <tr><td>M</td><td>38-40</td></tr>
            <tr><td>L</td><td>42-44</td></tr>
        </table></div>
    </body></html>"#;
    let chart = detect(html, "shop.example");
    assert_eq!(chart.source, ChartSource::Modal);
    assert_eq!(chart.confidence, DetectionConfidence::Medium);
    assert_eq!(chart.entries.len(), 2);
}

#[test]
fn test_structured_metadata_yields_labels_without_ranges() {
    let html = r#"<html><head>
        <script type="application/ld+json">
        {"@context": "https://schema.org", "@type": "Product", "name": "Tee",
         "offers": [
            {"size": "M", "availability": "https://schema.org/InStock"},
            {"size": "L", "availability": "https://schema.org/OutOfStock"}
         ]}
        </script>
    </head><body></body></html>"#;
    let chart = detect(html, "shop.example");
    assert_eq!(chart.source, ChartSource::Structured);
    assert!(chart.entries.is_empty());
    assert_eq!(chart.size_options.len(), 2);
    assert!(chart.size_options[0].available);
    assert!(!chart.size_options[1].available);
}

#[test]
fn test_selector_scrape_reports_availability() {
    let chart = detect(common::SELECTOR_ONLY_PAGE, "shop.example");
    assert_eq!(chart.source, ChartSource::Selector);
    assert_eq!(chart.confidence, DetectionConfidence::Low);
    let labels: Vec<&str> = chart.size_options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["S", "M", "L"]);
    assert!(!chart.size_options[2].available);
}

#[test]
fn test_bare_page_falls_back_to_estimated_universal_chart() {
    let chart = detect(common::BARE_PAGE, "shop.example");
    assert_eq!(chart.source, ChartSource::Estimated);
    assert_eq!(chart.confidence, DetectionConfidence::Low);
    assert_eq!(chart.garment, Some(GarmentType::Tops));
    assert!(chart.has_measurements());
}

#[test]
fn test_site_pattern_selector_beats_generic_miss() {
    // No size keywords anywhere, so the generic scan misses; the ASOS
    // pattern targets the container directly.
    let html = r#"<html><body>
        <div id="sizeguide"><table>
            <tr><th>Talla</th><th>Poitrine</th></tr>
            <tr><td>M</td><td>38-40</td></tr>
            <tr><td>L</td><td>42-44</td></tr>
        </table></div>
    </body></html>"#;
    let chart = detect(html, "www.asos.com");
    assert_eq!(chart.source, ChartSource::Table);
    assert_eq!(chart.entries.len(), 2);
}

#[test]
fn test_malformed_cells_drop_quietly() {
    let html = r#"<html><body><table>
        <tr><th>Size</th><th>Chest</th><th>Waist</th></tr>
        <tr><td>M</td><td>38-40</td><td>see fit guide</td></tr>
        <tr><td>One Size</td><td>n/a</td><td>n/a</td></tr>
    </table></body></html>"#;
    let chart = detect(html, "shop.example");
    assert_eq!(chart.entries.len(), 1);
    assert!(chart.entries[0].range(Measurement::Waist).is_none());
    assert!(chart.entries[0].range(Measurement::Chest).is_some());
}

#[test]
fn test_garment_classification_from_title() {
    let shoes = detect(
        "<html><head><title>Trail Runner Sneaker</title></head><body></body></html>",
        "shop.example",
    );
    assert_eq!(shoes.garment, Some(GarmentType::Shoes));
    // Shoes have no universal garment chart
    assert!(!shoes.has_measurements());

    let bottoms = detect(
        "<html><head><title>Relaxed Chino</title></head><body></body></html>",
        "shop.example",
    );
    assert_eq!(bottoms.garment, Some(GarmentType::Bottoms));
}

#[test]
fn test_size_guide_link_recorded_on_fallback() {
    let html = r#"<html><body>
        <a href="/size-guide">Size Guide</a>
        <p>nothing else here</p>
    </body></html>"#;
    let chart = detect(html, "shop.example");
    assert_eq!(chart.source, ChartSource::Estimated);
    assert_eq!(chart.size_guide_text.as_deref(), Some("Size Guide"));
}
