//! Multi-strategy size chart detection
//!
//! [`ChartDetector`] runs a fixed priority list of extraction strategies
//! over a parsed document and returns the first usable result, tagged with
//! its source and a confidence tier. Detection never fails: every
//! malformed selector, JSON block or cell is a miss, and when every
//! strategy misses the universal database supplies an estimated chart.

pub mod dom;
pub mod garment;
pub mod grid;
pub mod selector;
pub mod structured;
pub mod table;

use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::model::{
    ChartSource, DetectionConfidence, Gender, SizeChart, SizeChartEntry,
};
use crate::reference::{site_pattern, universal_chart};

use dom::{element_text, is_size_table_text, is_visible, parse_selector};
use garment::{detect_garment, find_size_guide_text};
use grid::parse_grid;
use selector::{extract_size_options, find_selector_elements, is_product_page};
use structured::extract_structured_sizes;
use table::parse_table;

fn table_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("table").expect("table selector is valid"))
}

fn chart_container_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse(
            "[class*=\"size-chart\"], [class*=\"sizeChart\"], [class*=\"size-guide\"], \
             [class*=\"sizeGuide\"], [class*=\"sizing\"], [class*=\"SizeChart\"], \
             [class*=\"SizeGuide\"]",
        )
        .expect("chart container selector is valid")
    })
}

/// Modal/overlay containers that commonly hold size-guide tables.
const MODAL_TABLE_QUERIES: &[&str] = &[
    "[class*=\"modal\"] table",
    "[class*=\"Modal\"] table",
    "[class*=\"overlay\"] table",
    "[class*=\"Overlay\"] table",
    "[class*=\"dialog\"] table",
    "[class*=\"Dialog\"] table",
    "[class*=\"popup\"] table",
    "[class*=\"Popup\"] table",
    "[role=\"dialog\"] table",
    "[class*=\"drawer\"] table",
    "[class*=\"Drawer\"] table",
    "[class*=\"sheet\"] table",
];

/// The closed set of extraction strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    VisibleTables,
    SitePatterns,
    StructuredData,
    ModalTables,
    SizeSelector,
}

impl Strategy {
    const PRIORITY: [Strategy; 5] = [
        Strategy::VisibleTables,
        Strategy::SitePatterns,
        Strategy::StructuredData,
        Strategy::ModalTables,
        Strategy::SizeSelector,
    ];

    fn name(self) -> &'static str {
        match self {
            Strategy::VisibleTables => "visible-tables",
            Strategy::SitePatterns => "site-patterns",
            Strategy::StructuredData => "structured-data",
            Strategy::ModalTables => "modal-tables",
            Strategy::SizeSelector => "size-selector",
        }
    }

    fn try_extract(self, doc: &Html, hostname: &str) -> Option<SizeChart> {
        match self {
            Strategy::VisibleTables => scan_visible_tables(doc),
            Strategy::SitePatterns => scan_site_patterns(doc, hostname),
            Strategy::StructuredData => {
                let sizes = extract_structured_sizes(doc)?;
                let mut chart = SizeChart::with_entries(
                    Vec::new(),
                    ChartSource::Structured,
                    DetectionConfidence::Medium,
                );
                chart.size_options = sizes;
                Some(chart)
            }
            Strategy::ModalTables => scan_modal_tables(doc),
            Strategy::SizeSelector => scan_size_selector(doc, hostname),
        }
    }
}

fn scan_visible_tables(doc: &Html) -> Option<SizeChart> {
    for table in doc.select(table_selector()) {
        if !is_visible(table) {
            continue;
        }
        if !is_size_table_text(&element_text(table)) {
            continue;
        }
        let entries = parse_table(table);
        if !entries.is_empty() {
            return Some(SizeChart::with_entries(
                entries,
                ChartSource::Table,
                DetectionConfidence::High,
            ));
        }
    }

    // Size-chart labeled containers: nested tables first, then div grids.
    for container in doc.select(chart_container_selector()) {
        if let Some(table) = container.select(table_selector()).next() {
            let entries = parse_table(table);
            if !entries.is_empty() {
                return Some(SizeChart::with_entries(
                    entries,
                    ChartSource::Table,
                    DetectionConfidence::High,
                ));
            }
        }
        let entries = parse_grid(container);
        if !entries.is_empty() {
            // Positional assignment has no headers backing it up
            return Some(SizeChart::with_entries(
                entries,
                ChartSource::Table,
                DetectionConfidence::Medium,
            ));
        }
    }

    None
}

fn scan_site_patterns(doc: &Html, hostname: &str) -> Option<SizeChart> {
    let pattern = site_pattern(hostname)?;
    for query in pattern.size_chart {
        let Some(sel) = parse_selector(query) else {
            continue;
        };
        for table in doc.select(&sel) {
            let entries = parse_table(table);
            if !entries.is_empty() {
                return Some(SizeChart::with_entries(
                    entries,
                    ChartSource::Table,
                    DetectionConfidence::High,
                ));
            }
        }
    }
    None
}

fn scan_modal_tables(doc: &Html) -> Option<SizeChart> {
    for query in MODAL_TABLE_QUERIES {
        let Some(sel) = parse_selector(query) else {
            continue;
        };
        for table in doc.select(&sel) {
            if !is_size_table_text(&element_text(table)) {
                continue;
            }
            let entries = parse_table(table);
            if !entries.is_empty() {
                return Some(SizeChart::with_entries(
                    entries,
                    ChartSource::Modal,
                    DetectionConfidence::Medium,
                ));
            }
        }
    }
    None
}

fn scan_size_selector(doc: &Html, hostname: &str) -> Option<SizeChart> {
    if !is_product_page(doc) {
        return None;
    }
    let elements = find_selector_elements(doc, hostname);
    let options = extract_size_options(&elements);
    if options.is_empty() {
        return None;
    }

    let mut chart = SizeChart::with_entries(
        Vec::new(),
        ChartSource::Selector,
        DetectionConfidence::Low,
    );
    chart.size_options = options;
    chart.garment = Some(detect_garment(doc));
    Some(chart)
}

/// Runs the extraction strategies in priority order.
///
/// # Examples
///
/// ```
/// use scraper::Html;
/// use sizewise::detect::ChartDetector;
/// use sizewise::model::{ChartSource, Gender};
///
/// let html = r#"<table>
///     <tr><th>Size</th><th>Chest</th></tr>
///     <tr><td>M</td><td>38-40</td></tr>
///     <tr><td>L</td><td>41-44</td></tr>
/// </table>"#;
/// let doc = Html::parse_document(html);
///
/// let chart = ChartDetector::new().detect(&doc, "shop.example", Gender::Mens);
/// assert_eq!(chart.source, ChartSource::Table);
/// assert_eq!(chart.entries.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ChartDetector;

impl ChartDetector {
    /// New detector. Stateless; one instance serves any number of pages.
    pub fn new() -> Self {
        Self
    }

    /// Detect a size chart in the document.
    ///
    /// Always returns a chart: when every strategy misses, the result is
    /// the universal database chart for the page's garment type, tagged
    /// `estimated`. `gender` picks which universal chart applies.
    pub fn detect(&self, doc: &Html, hostname: &str, gender: Gender) -> SizeChart {
        for strategy in Strategy::PRIORITY {
            if let Some(chart) = strategy.try_extract(doc, hostname) {
                log::info!(
                    "chart detected via {} ({} entries, {} size options)",
                    strategy.name(),
                    chart.entries.len(),
                    chart.size_options.len()
                );
                return chart;
            }
            log::debug!("strategy {} missed", strategy.name());
        }

        let garment = detect_garment(doc);
        let entries: Vec<SizeChartEntry> = universal_chart(gender, garment);
        log::info!(
            "no on-page chart; falling back to universal {} {} chart",
            gender.as_str(),
            garment.as_str()
        );
        let mut chart = SizeChart::with_entries(
            entries,
            ChartSource::Estimated,
            DetectionConfidence::Low,
        );
        chart.garment = Some(garment);
        chart.size_guide_text = find_size_guide_text(doc);
        chart
    }
}
