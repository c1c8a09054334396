//! Garment type classification from page title and headings
//!
//! Used to pick the right universal fallback chart. Dresses classify as
//! tops because they fit primarily on top measurements.

use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::model::GarmentType;

use super::dom::{element_text, SIZE_GUIDE_TEXTS};

const SHOE_WORDS: &[&str] = &[
    "shoe", "sneaker", "boot", "sandal", "heel", "loafer", "slipper", "trainer", "mule", "clog",
    "oxford", "flat", "pump",
];

const BOTTOM_WORDS: &[&str] = &[
    "pant", "jean", "trouser", "short", "skirt", "legging", "jogger", "chino", "cargo", "denim",
];

const DRESS_WORDS: &[&str] = &["dress", "gown", "romper", "jumpsuit", "playsuit"];

fn title_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("title").expect("title selector is valid"))
}

fn heading_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("h1").expect("h1 selector is valid"))
}

fn product_name_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse(
            "[class*=\"product-name\"], [class*=\"ProductName\"], [data-testid=\"product-title\"]",
        )
        .expect("product name selector is valid")
    })
}

fn guide_link_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("a, button").expect("guide link selector is valid"))
}

/// Classify what kind of garment the page sells.
///
/// Keyword buckets over the page title, first heading and product-name
/// element; tops is the default when nothing matches.
pub fn detect_garment(doc: &Html) -> GarmentType {
    let mut text = String::new();
    for sel in [title_selector(), heading_selector(), product_name_selector()] {
        if let Some(element) = doc.select(sel).next() {
            text.push_str(&element_text(element));
            text.push(' ');
        }
    }
    let text = text.to_lowercase();

    if SHOE_WORDS.iter().any(|w| text.contains(w)) {
        return GarmentType::Shoes;
    }
    if BOTTOM_WORDS.iter().any(|w| text.contains(w)) {
        return GarmentType::Bottoms;
    }
    if DRESS_WORDS.iter().any(|w| text.contains(w)) {
        // Dresses fit on top measurements
        return GarmentType::Tops;
    }
    GarmentType::Tops
}

/// Text of the first link or button that looks like a size-guide
/// affordance, if the page has one.
pub fn find_size_guide_text(doc: &Html) -> Option<String> {
    for link in doc.select(guide_link_selector()) {
        let text = element_text(link);
        let lower = text.to_lowercase();
        if SIZE_GUIDE_TEXTS.iter().any(|t| lower.contains(t)) {
            return Some(text);
        }
    }
    None
}
