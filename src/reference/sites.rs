//! Per-site CSS selector patterns for known retail domains
//!
//! Large retailers render size charts in predictable places; these selector
//! lists let the detector go straight to them when generic table scanning
//! finds nothing. Selectors are tried in order and invalid or unmatched
//! selectors are silent misses.

/// Selector lists for one known retail domain.
#[derive(Debug, Clone, Copy)]
pub struct SitePattern {
    /// Selectors expected to match size-chart tables
    pub size_chart: &'static [&'static str],
    /// Selectors expected to match size-selector controls
    pub size_selector: &'static [&'static str],
}

static SITE_TABLE: &[(&str, SitePattern)] = &[
    (
        "amazon",
        SitePattern {
            size_chart: &[
                "#size-chart-content table",
                "#productDescription table",
                ".a-size-chart table",
            ],
            size_selector: &[
                "#native_dropdown_selected_size_name",
                "#variation_size_name select",
                "#variation_size_name .a-button-text",
            ],
        },
    ),
    (
        "shein",
        SitePattern {
            size_chart: &[
                ".size-guide-modal table",
                ".size-chart-table",
                ".sui-dialog table",
            ],
            size_selector: &[
                ".product-intro__size-radio-inner",
                ".product-intro__size-choose",
            ],
        },
    ),
    (
        "temu",
        SitePattern {
            size_chart: &[".size-chart table", "[class*=\"SizeChart\"] table"],
            size_selector: &[".product-sku-size", "[class*=\"sku-size\"]"],
        },
    ),
    (
        "zara",
        SitePattern {
            size_chart: &[
                ".size-guide-table",
                ".product-size-guide table",
                "[class*=\"size-guide\"] table",
            ],
            size_selector: &[
                ".product-detail-size-selector__size-list li",
                ".size-selector__size-list button",
            ],
        },
    ),
    (
        "hm",
        SitePattern {
            size_chart: &[
                ".size-guide table",
                ".product-size-table",
                "[data-testid=\"size-guide\"] table",
            ],
            size_selector: &[".sizes-list li", ".product-input-label"],
        },
    ),
    (
        "asos",
        SitePattern {
            size_chart: &[
                "[data-testid=\"sizeguide\"] table",
                ".size-guide-table table",
                "#sizeguide table",
            ],
            size_selector: &[
                "[data-id=\"sizeSelect\"] option",
                "select[data-id=\"sizeSelect\"]",
            ],
        },
    ),
    (
        "nike",
        SitePattern {
            size_chart: &[".size-chart-table table", "[class*=\"size-grid\"] table"],
            size_selector: &[
                "[data-testid=\"availableSize\"]",
                "input[name=\"skuAndSize\"]",
            ],
        },
    ),
    (
        "adidas",
        SitePattern {
            size_chart: &[
                "[class*=\"size-chart\"] table",
                "[class*=\"SizeChart\"] table",
            ],
            size_selector: &[
                "[data-testid=\"size-selector\"] button",
                "[class*=\"size-selector\"] button",
            ],
        },
    ),
    (
        "nordstrom",
        SitePattern {
            size_chart: &["[class*=\"SizeChart\"] table", ".size-chart table"],
            size_selector: &["[name=\"size\"] option", "[class*=\"SizeSelector\"] button"],
        },
    ),
    (
        "uniqlo",
        SitePattern {
            size_chart: &[
                ".size-chart table",
                "#sizeChartTable",
                "[class*=\"SizeChart\"] table",
            ],
            size_selector: &["[class*=\"chip-group\"] button", ".size-picker button"],
        },
    ),
    (
        "gap",
        SitePattern {
            size_chart: &[".sizeChart table", "[class*=\"size-chart\"] table"],
            size_selector: &[
                ".swatch-size button",
                "[data-testid=\"size-selector\"] button",
            ],
        },
    ),
    (
        "levis",
        SitePattern {
            size_chart: &[".size-guide-table table", "[class*=\"SizeGuide\"] table"],
            size_selector: &[".size-selector button", "[data-testid=\"size-chip\"]"],
        },
    ),
    (
        "macys",
        SitePattern {
            size_chart: &[".size-chart table", "[class*=\"SizeChart\"] table"],
            size_selector: &[".size-selector button", "[data-testid=\"swatch-size\"]"],
        },
    ),
    (
        "walmart",
        SitePattern {
            size_chart: &["[class*=\"size-chart\"] table"],
            size_selector: &["[data-testid=\"variant-group-size\"] button"],
        },
    ),
    (
        "target",
        SitePattern {
            size_chart: &["[data-test=\"sizeChart\"] table"],
            size_selector: &["[data-test=\"sizeButton\"]"],
        },
    ),
    (
        "boohoo",
        SitePattern {
            size_chart: &[".size-guide-modal table", "[class*=\"sizeGuide\"] table"],
            size_selector: &[
                ".size-selector button",
                "[class*=\"SizeSelector\"] button",
            ],
        },
    ),
    (
        "lululemon",
        SitePattern {
            size_chart: &["[class*=\"size-guide\"] table", ".size-chart table"],
            size_selector: &[
                "[data-lulu-test=\"size-swatch\"] button",
                "[class*=\"SizeSelector\"] button",
            ],
        },
    ),
    (
        "gymshark",
        SitePattern {
            size_chart: &["[class*=\"size-guide\"] table"],
            size_selector: &["[class*=\"size-selector\"] button"],
        },
    ),
    (
        "revolve",
        SitePattern {
            size_chart: &[".size-chart table", "#sizeChart table"],
            size_selector: &[
                "[class*=\"size-selector\"] button",
                "select[name*=\"size\"]",
            ],
        },
    ),
    (
        "farfetch",
        SitePattern {
            size_chart: &[
                "[data-testid=\"sizeguide\"] table",
                "[class*=\"SizeGuide\"] table",
            ],
            size_selector: &["[data-testid=\"sizeSelector\"] button"],
        },
    ),
    (
        "ssense",
        SitePattern {
            size_chart: &[".size-guide table", "[class*=\"SizeGuide\"] table"],
            size_selector: &[
                "[class*=\"size-selector\"] button",
                "select[name=\"size\"]",
            ],
        },
    ),
    (
        "zalando",
        SitePattern {
            size_chart: &[
                "[class*=\"size-table\"] table",
                "[class*=\"SizeChart\"] table",
            ],
            size_selector: &["[class*=\"size-picker\"] button", "select[name=\"size\"]"],
        },
    ),
];

/// Selector patterns for a hostname, if the domain is known.
///
/// # Examples
///
/// ```
/// use sizewise::reference::site_pattern;
///
/// assert!(site_pattern("www.zara.com").is_some());
/// assert!(site_pattern("tiny-shop.example").is_none());
/// ```
pub fn site_pattern(hostname: &str) -> Option<&'static SitePattern> {
    SITE_TABLE
        .iter()
        .find(|(domain, _)| hostname.contains(domain))
        .map(|(_, pattern)| pattern)
}
