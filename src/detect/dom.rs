//! DOM helpers shared by the detection strategies
//!
//! Thin wrappers over `scraper` plus the keyword vocabularies that decide
//! whether a table is worth parsing. Selector parsing is fallible by
//! design: a selector that does not parse is a miss, never a panic.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

/// Words whose presence marks a table as measurement-related.
pub const SIZE_KEYWORDS: &[&str] = &[
    "size", "chest", "bust", "waist", "hip", "hips", "inseam", "length", "shoulder", "sleeve",
    "neck", "thigh",
];

/// The fixed size-label vocabulary: letter sizes plus the common US
/// numeric sizes.
pub const SIZE_LABELS: &[&str] = &[
    "XXS", "XS", "S", "M", "L", "XL", "XXL", "XXXL", "2XL", "3XL", "4XL", "5XL", "0", "2", "4",
    "6", "8", "10", "12", "14", "16", "18", "20", "22", "24", "00", "26", "27", "28", "29", "30",
    "31", "32", "33", "34", "36", "38", "40", "42", "44",
];

/// Link/button texts that mark a size-guide affordance.
pub const SIZE_GUIDE_TEXTS: &[&str] = &[
    "size guide",
    "size chart",
    "sizing",
    "find your size",
    "fit guide",
    "measurement guide",
    "size & fit",
    "sizing guide",
    "size info",
    "fit information",
    "measurements",
    "gu\u{ed}a de tallas",
    "guide des tailles",
    "gr\u{f6}\u{df}entabelle",
    "tabella taglie",
];

/// Add-to-cart button texts that mark a product page.
pub const ADD_TO_CART_PATTERNS: &[&str] = &[
    "add to cart",
    "add to bag",
    "add to basket",
    "buy now",
    "purchase",
    "a\u{f1}adir al carrito",
    "ajouter au panier",
    "in den warenkorb",
    "add to trolley",
    "comprar",
    "acheter",
    "kaufen",
];

/// Parse a CSS selector, logging and swallowing failures.
pub fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(err) => {
            log::debug!("invalid selector {:?}: {}", selector, err);
            None
        }
    }
}

/// Whitespace-normalized text content of an element.
pub fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Static-document stand-in for a computed-style visibility check.
///
/// Inline `display:none`, `visibility:hidden`, zero `opacity` or the
/// `hidden` attribute exclude the element.
pub fn is_visible(element: ElementRef) -> bool {
    if element.value().attr("hidden").is_some() {
        return false;
    }
    let Some(style) = element.value().attr("style") else {
        return true;
    };
    let style: String = style.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    !(style.contains("display:none")
        || style.contains("visibility:hidden")
        || style.contains("opacity:0;")
        || style.ends_with("opacity:0"))
}

fn numeric_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}$").expect("numeric label regex is valid"))
}

fn label_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Longest-first alternation so XXS does not stop at XS
        let mut labels: Vec<&str> = SIZE_LABELS.to_vec();
        labels.sort_by_key(|l| std::cmp::Reverse(l.len()));
        let pattern = format!(r"(?i)\b({})\b", labels.join("|"));
        Regex::new(&pattern).expect("label word regex is valid")
    })
}

/// Whether a cell value looks like a size label (vocabulary hit or a one
/// or two digit number).
pub fn looks_like_size_label(value: &str) -> bool {
    let upper = value.trim().to_uppercase();
    SIZE_LABELS.contains(&upper.as_str()) || numeric_label_regex().is_match(value.trim())
}

/// Keyword + size-label co-occurrence test for table text.
///
/// A size table must mention at least one measurement keyword and contain
/// at least one vocabulary size label as a standalone word.
pub fn is_size_table_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    let has_keyword = SIZE_KEYWORDS.iter().any(|kw| lower.contains(kw));
    has_keyword && label_word_regex().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_element<'a>(doc: &'a Html, selector: &Selector) -> ElementRef<'a> {
        doc.select(selector).next().expect("element present")
    }

    #[test]
    fn test_parse_selector_swallows_invalid_input() {
        assert!(parse_selector("table").is_some());
        assert!(parse_selector(":::nonsense").is_none());
    }

    #[test]
    fn test_element_text_normalizes_whitespace() {
        let doc = Html::parse_fragment("<p>  Size\n   Guide </p>");
        let sel = Selector::parse("p").unwrap();
        assert_eq!(element_text(first_element(&doc, &sel)), "Size Guide");
    }

    #[test]
    fn test_visibility_filter_on_inline_style() {
        let doc = Html::parse_fragment(
            r#"<div>
                <table id="a"><tr><td>x</td></tr></table>
                <table id="b" style="display: none"><tr><td>x</td></tr></table>
                <table id="c" style="visibility:hidden"><tr><td>x</td></tr></table>
                <table id="d" style="opacity: 0"><tr><td>x</td></tr></table>
                <table id="e" hidden><tr><td>x</td></tr></table>
            </div>"#,
        );
        let visible: Vec<String> = doc
            .select(&Selector::parse("table").unwrap())
            .filter(|t| is_visible(*t))
            .map(|t| t.value().attr("id").unwrap_or("").to_string())
            .collect();
        assert_eq!(visible, vec!["a"]);
    }

    #[test]
    fn test_looks_like_size_label() {
        assert!(looks_like_size_label("M"));
        assert!(looks_like_size_label("xxl"));
        assert!(looks_like_size_label("34"));
        assert!(looks_like_size_label(" 8 "));
        assert!(!looks_like_size_label("Medium-Large"));
        assert!(!looks_like_size_label("123"));
    }

    #[test]
    fn test_size_table_text_needs_both_signals() {
        assert!(is_size_table_text("Size Chest Waist S M L 36-38"));
        // Keyword without labels
        assert!(!is_size_table_text("chest and waist measurements vary"));
        // Labels without keywords
        assert!(!is_size_table_text("S M L XL"));
    }
}
